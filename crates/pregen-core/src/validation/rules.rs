//! The individual validation rules
//!
//! The character-class rules search for a forbidden character rather than
//! matching the whole value, so the empty string passes them. The repository
//! rule is an unanchored search as well, which accepts both HTTPS and
//! SSH-style (`git@host:owner/repo`) addresses.

use crate::context::REPOSITORY_NA;
use crate::validation::Violation;
use once_cell::sync::Lazy;
use regex::Regex;

/// Any character outside the alphanumeric set fails the name and key checks
static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").expect("valid regex"));

/// Package identifiers additionally allow the `.` separator
static NON_PACKAGE_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9.]").expect("valid regex"));

/// Well-formed HTTP(S) URL, anchored at the start of the value
static BASE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((http|https)://)(www\.)?[a-zA-Z0-9@:%._+~#?&/=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%._+~#?&/=]*)")
        .expect("valid regex")
});

/// `scheme://host(:|/)owner/repo[.git][/]`, where scheme is http(s) or the
/// `git@` SSH shorthand
static REPOSITORY_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"((git@|http(s)?://)([\w.@]+)(/|:))([\w,\-]+)/([\w,\-]+)(\.git)?(/)?")
        .expect("valid regex")
});

/// Project names are restricted to ASCII letters and digits.
pub fn check_project_name(project_name: &str) -> Result<(), Violation> {
    if NON_ALPHANUMERIC.is_match(project_name) {
        return Err(Violation::ProjectName);
    }
    Ok(())
}

/// Bundle identifiers are restricted to ASCII letters, digits, and `.`.
pub fn check_bundle_identifier(bundle_identifier: &str) -> Result<(), Violation> {
    if NON_PACKAGE_CHAR.is_match(bundle_identifier) {
        return Err(Violation::BundleIdentifier(bundle_identifier.to_string()));
    }
    Ok(())
}

/// Base URLs must start with an HTTP(S) URL shape. Only run when the caller
/// opts in via `CheckOptions::enforce_base_url`.
pub fn check_base_url(base_url: &str) -> Result<(), Violation> {
    if !BASE_URL.is_match(base_url) {
        return Err(Violation::BaseUrl);
    }
    Ok(())
}

/// Encryption keys are restricted to ASCII letters and digits.
pub fn check_encryption_key(encryption_key: &str) -> Result<(), Violation> {
    if NON_ALPHANUMERIC.is_match(encryption_key) {
        return Err(Violation::EncryptionKey);
    }
    Ok(())
}

/// Repository links are either the `NA` sentinel or a git/HTTPS repository URL.
pub fn check_repository_link(repository_link: &str) -> Result<(), Violation> {
    if repository_link == REPOSITORY_NA {
        return Ok(());
    }
    if !REPOSITORY_URL.is_match(repository_link) {
        return Err(Violation::RepositoryLink(repository_link.to_string()));
    }
    Ok(())
}

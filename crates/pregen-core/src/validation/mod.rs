//! Pre-generation gate: sequential checks over the resolved variables
//!
//! Each rule is a pure function; the gate runs them in a fixed order and
//! returns the first violation without running the remaining checks. Process
//! termination is the caller's decision, never taken here.

mod rules;

pub use rules::{
    check_base_url, check_bundle_identifier, check_encryption_key, check_project_name,
    check_repository_link,
};

use crate::context::GenerationContext;
use thiserror::Error;

/// A failed validation rule, carrying the offending value where the
/// user-facing message echoes it back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("please avoid using any special characters in your project name!")]
    ProjectName,

    #[error("{0} is not a valid Android package name!")]
    BundleIdentifier(String),

    #[error("please avoid using any special characters in your base url!")]
    BaseUrl,

    #[error("please avoid using any special characters in your encryption key!")]
    EncryptionKey,

    #[error("{0} is not a valid repository URL!")]
    RepositoryLink(String),
}

impl Violation {
    /// Secondary hint line printed under the error message, where one exists
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Violation::ProjectName | Violation::BaseUrl | Violation::EncryptionKey => {
                Some("Include only alphanumeric characters.")
            }
            Violation::BundleIdentifier(_) => {
                Some("Avoid using any special characters. Only alphanumeric characters are allowed.")
            }
            Violation::RepositoryLink(_) => None,
        }
    }
}

/// Success payload: the values echoed back in the final summary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub project_name: String,
    pub bundle_identifier: String,
}

/// Toggles for the gate
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Also run the base-url check. Off by default: the rule shipped disabled
    /// in earlier template versions and stays opt-in until that is resolved.
    pub enforce_base_url: bool,
}

/// Run all checks in order; the first failure short-circuits the rest.
pub fn check_context(
    ctx: &GenerationContext,
    options: CheckOptions,
) -> Result<Summary, Violation> {
    check_project_name(&ctx.project_name)?;
    check_bundle_identifier(&ctx.bundle_identifier)?;
    if options.enforce_base_url {
        check_base_url(&ctx.base_url)?;
    }
    check_encryption_key(&ctx.encryption_key)?;
    check_repository_link(&ctx.repository_link)?;

    Ok(Summary {
        project_name: ctx.project_name.clone(),
        bundle_identifier: ctx.bundle_identifier.clone(),
    })
}

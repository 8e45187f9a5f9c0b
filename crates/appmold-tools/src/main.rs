//! Appmold CLI - Pre-generation checks for Appmold project templates

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pregen_core::report::{print_summary, print_violation};
use pregen_core::{check_context, CheckOptions, GenerationContext, REPOSITORY_NA};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "appmold-tools")]
#[command(about = "Pre-generation checks and template filters for Appmold project templates")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the resolved template variables before generation
    Check(CheckArgs),
    /// Apply a registered template filter to a value (for development use)
    Filter(FilterArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// YAML file of resolved variables written by the scaffolding tool
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Project name (overrides the context file)
    #[arg(long)]
    pub project_name: Option<String>,

    /// Package identifier, e.g. com.example.app (overrides the context file)
    #[arg(long)]
    pub bundle_identifier: Option<String>,

    /// Backend base URL (overrides the context file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Encryption key for the generated project (overrides the context file)
    #[arg(long)]
    pub encryption_key: Option<String>,

    /// Repository URL, or NA for none (overrides the context file)
    #[arg(long)]
    pub repository_link: Option<String>,

    /// Also enforce the base-url check (disabled by default)
    #[arg(long)]
    pub enforce_base_url: bool,

    /// Disable ANSI colors in output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Parser, Debug)]
pub struct FilterArgs {
    /// Value to run through the filter
    pub value: String,

    /// Name of the registered filter to apply
    #[arg(short, long, default_value = pregen_core::INIT_CAP_LOWER)]
    pub name: String,
}

fn required_flag(value: &Option<String>, flag: &str) -> Result<String> {
    value
        .clone()
        .with_context(|| format!("{flag} is required when no --context file is given"))
}

/// Build the generation context from the handover file and/or flags.
/// Individual flags take precedence over the file's fields.
fn resolve_context(args: &CheckArgs) -> Result<GenerationContext> {
    let mut ctx = match &args.context {
        Some(path) => GenerationContext::from_yaml_file(path)?,
        None => GenerationContext {
            project_name: required_flag(&args.project_name, "--project-name")?,
            bundle_identifier: required_flag(&args.bundle_identifier, "--bundle-identifier")?,
            base_url: args.base_url.clone().unwrap_or_default(),
            encryption_key: required_flag(&args.encryption_key, "--encryption-key")?,
            repository_link: args
                .repository_link
                .clone()
                .unwrap_or_else(|| REPOSITORY_NA.to_string()),
        },
    };

    if args.context.is_some() {
        if let Some(v) = &args.project_name {
            ctx.project_name = v.clone();
        }
        if let Some(v) = &args.bundle_identifier {
            ctx.bundle_identifier = v.clone();
        }
        if let Some(v) = &args.base_url {
            ctx.base_url = v.clone();
        }
        if let Some(v) = &args.encryption_key {
            ctx.encryption_key = v.clone();
        }
        if let Some(v) = &args.repository_link {
            ctx.repository_link = v.clone();
        }
    }

    Ok(ctx)
}

fn run_check(args: &CheckArgs) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let ctx = resolve_context(args)?;
    let options = CheckOptions {
        enforce_base_url: args.enforce_base_url,
    };

    match check_context(&ctx, options) {
        Ok(summary) => {
            print_summary(&summary);
            Ok(())
        }
        Err(violation) => {
            print_violation(&violation);
            // Exit 1 tells the scaffolding tool to abort generation
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Check(check_args) => run_check(&check_args),
        Command::Filter(filter_args) => {
            let output = pregen_core::filters::apply_filter(&filter_args.name, &filter_args.value)?;
            println!("{output}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_args(argv: &[&str]) -> CheckArgs {
        let args = Args::parse_from(argv);
        match args.command {
            Command::Check(check_args) => check_args,
            other => panic!("expected check subcommand, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_context_from_flags() {
        let check = check_args(&[
            "appmold-tools",
            "check",
            "--project-name",
            "MyApp",
            "--bundle-identifier",
            "com.example.app",
            "--encryption-key",
            "abc123XYZ",
        ]);
        let ctx = resolve_context(&check).unwrap();
        assert_eq!(ctx.project_name, "MyApp");
        assert_eq!(ctx.base_url, "");
        assert_eq!(ctx.repository_link, REPOSITORY_NA);
    }

    #[test]
    fn test_resolve_context_missing_required_flag() {
        let check = check_args(&["appmold-tools", "check", "--project-name", "MyApp"]);
        let err = resolve_context(&check).unwrap_err();
        assert!(err.to_string().contains("--bundle-identifier"));
    }

    #[test]
    fn test_flag_overrides_context_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "project_name: FromFile\n\
             bundle_identifier: com.example.app\n\
             encryption_key: abc123XYZ\n"
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let check = check_args(&[
            "appmold-tools",
            "check",
            "--context",
            &path,
            "--project-name",
            "FromFlag",
        ]);
        let ctx = resolve_context(&check).unwrap();
        assert_eq!(ctx.project_name, "FromFlag");
        assert_eq!(ctx.bundle_identifier, "com.example.app");
    }
}

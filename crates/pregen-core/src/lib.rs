//! Pregen Core - Shared library for pre-generation template hooks
//!
//! This library provides the pre-generation gate that scaffolding CLIs run
//! after variable substitution and before any project files are written, plus
//! the custom template filters those projects' template files rely on.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Rules** - Pure per-variable check functions returning `Result`
//! - **Layer 2: Gate** - `check_context` runs the rules in order over a `GenerationContext`
//! - **Layer 3: Reporting** - Colored console output for violations and the success summary
//!
//! The library never exits the process; a failing rule is a `Violation` value
//! and the calling binary decides how to translate it into an exit code.
//!
//! # Feature Flags
//!
//! - `filters` (default): Enables the tera-based template filter module
//!
//! # Example Usage
//!
//! ```ignore
//! use pregen_core::{check_context, CheckOptions, GenerationContext};
//!
//! let ctx = GenerationContext::from_yaml_file("pregen.yaml".as_ref())?;
//! match check_context(&ctx, CheckOptions::default()) {
//!     Ok(summary) => pregen_core::report::print_summary(&summary),
//!     Err(violation) => {
//!         pregen_core::report::print_violation(&violation);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod context;
pub mod report;
pub mod validation;

#[cfg(feature = "filters")]
pub mod filters;

// Re-export main types for convenience
pub use context::{GenerationContext, REPOSITORY_NA};
pub use validation::{check_context, CheckOptions, Summary, Violation};

#[cfg(feature = "filters")]
pub use filters::{init_cap_lower, register_filters, INIT_CAP_LOWER};

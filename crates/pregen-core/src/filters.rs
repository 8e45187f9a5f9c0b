//! Custom template filters registered into the rendering environment

use anyhow::{Context as _, Result};
use std::collections::HashMap;
use tera::{Tera, Value};

/// Name the template files invoke the filter under
pub const INIT_CAP_LOWER: &str = "initCapLower";

/// Lowercase the first character, leave the rest unchanged.
/// Example: "SignInScreen" -> "signInScreen"
///
/// The empty string is returned unchanged. Lowercasing is Unicode-aware and
/// may expand the first character to more than one.
pub fn init_cap_lower(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn init_cap_lower_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value.as_str().ok_or_else(|| {
        tera::Error::msg(format!("{} filter can only be used on strings", INIT_CAP_LOWER))
    })?;
    Ok(Value::String(init_cap_lower(s)))
}

/// Register the custom filters into the rendering environment, overwriting
/// any existing entry under the same name. Called once per environment.
pub fn register_filters(tera: &mut Tera) {
    tera.register_filter(INIT_CAP_LOWER, init_cap_lower_filter);
}

/// Apply a registered filter to a single value through a throwaway
/// environment (for development use).
pub fn apply_filter(name: &str, value: &str) -> Result<String> {
    // The name is spliced into template text, so restrict it to identifier
    // characters before handing it to the parser
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        anyhow::bail!("Invalid filter name: {name}");
    }

    let mut tera = Tera::default();
    register_filters(&mut tera);
    tera.add_raw_template("apply", &format!("{{{{ value | {name} }}}}"))
        .with_context(|| format!("Failed to build template for filter: {name}"))?;

    let mut ctx = tera::Context::new();
    ctx.insert("value", value);
    tera.render("apply", &ctx)
        .with_context(|| format!("Failed to apply filter: {name}"))
}

//! Embedded prompt templates
//!
//! Compiled into the crate from .pmt files at build time.

use tracing::debug;

/// Travel plan generation prompt
pub const PLAN: &str = include_str!("../../prompts/plan.pmt");

/// Get the embedded template by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "plan" => Some(PLAN),
        _ => None,
    }
}

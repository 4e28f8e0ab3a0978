//! CLI command implementations

pub mod missions;
pub mod play;

use std::path::Path;

use anyhow::Result;
use htmlquest::Catalog;

/// Resolve the catalog for a command: a mission pack if one was given,
/// otherwise the built-in missions
pub fn load_catalog(pack: Option<&Path>) -> Result<Catalog> {
    match pack {
        Some(path) => Ok(Catalog::from_json_file(path)?),
        None => Ok(Catalog::builtin()),
    }
}

use anyhow::{Context, Result};

use crate::battler::Battler;

pub const BUILTIN_ROSTER: &str = include_str!("../content/battlers.json");

/// Roster shipped with the engine, for demos and tests.
pub fn builtin_battlers() -> Result<Vec<Battler>> {
    serde_json::from_str(BUILTIN_ROSTER).context("builtin roster is malformed")
}

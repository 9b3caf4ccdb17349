use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Construction failures. A battle that fails validation never starts.
#[derive(Debug, Error)]
pub enum BattleError {
    #[error("a duel needs exactly two battlers, got {0}")]
    WrongBattlerCount(usize),
    #[error("battler has an empty name")]
    EmptyName,
    #[error("battler '{name}': {field} must be positive (got {value})")]
    NonPositive {
        name: String,
        field: &'static str,
        value: f64,
    },
}

/// One combatant as loaded from a roster file. Read-only during a battle;
/// current health lives in the controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battler {
    pub name: String,
    pub level: u32,
    /// Starting (and maximum) health.
    pub hp: i32,
    pub attack: f64,
    pub crit_rate: f64,
    /// Portrait path; opaque to the engine, carried for display layers.
    #[serde(default)]
    pub image: String,
}

impl Battler {
    pub fn validate(&self) -> Result<(), BattleError> {
        if self.name.trim().is_empty() {
            return Err(BattleError::EmptyName);
        }
        if self.level < 1 {
            return Err(self.non_positive("level", f64::from(self.level)));
        }
        if self.hp <= 0 {
            return Err(self.non_positive("hp", f64::from(self.hp)));
        }
        if self.attack <= 0.0 {
            return Err(self.non_positive("attack", self.attack));
        }
        if self.crit_rate <= 0.0 {
            return Err(self.non_positive("critRate", self.crit_rate));
        }
        Ok(())
    }

    fn non_positive(&self, field: &'static str, value: f64) -> BattleError {
        BattleError::NonPositive {
            name: self.name.clone(),
            field,
            value,
        }
    }
}

pub fn load_battlers(path: &Path) -> Result<Vec<Battler>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read roster JSON: {}", path.display()))?;
    let battlers = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse roster JSON: {}", path.display()))?;
    Ok(battlers)
}

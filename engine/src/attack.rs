use serde::Serialize;

use crate::Dice;

/// Coarse attack category decided by the opening d10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttackType {
    Basic,
    Critical,
    Special,
}

impl AttackType {
    pub fn label(&self) -> &'static str {
        match self {
            AttackType::Basic => "Basic Attack",
            AttackType::Critical => "Critical Attack",
            AttackType::Special => "Special Attack",
        }
    }
}

/// 1-3 basic, 4-5 critical, 6-10 special.
pub fn classify(roll: u32) -> AttackType {
    match roll {
        1..=3 => AttackType::Basic,
        4..=5 => AttackType::Critical,
        _ => AttackType::Special,
    }
}

/// One entry of the fixed special-attack table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpecialAttack {
    /// Damage = attack × fraction.
    BaseFraction { name: &'static str, fraction: f64 },
    /// Damage = attack × uniform(low, high).
    RangedMultiplier {
        name: &'static str,
        low: f64,
        high: f64,
    },
    /// Hurts the attacker too: floor(attack × self_fraction) on self and
    /// attack × opponent_multiplier on the defender.
    SelfDamage {
        name: &'static str,
        self_fraction: f64,
        opponent_multiplier: f64,
    },
    /// Declarative status effect; deals no damage of its own.
    Redirect {
        name: &'static str,
        effect: &'static str,
    },
}

impl SpecialAttack {
    pub fn name(&self) -> &'static str {
        match self {
            SpecialAttack::BaseFraction { name, .. }
            | SpecialAttack::RangedMultiplier { name, .. }
            | SpecialAttack::SelfDamage { name, .. }
            | SpecialAttack::Redirect { name, .. } => name,
        }
    }
}

pub static SPECIAL_ATTACKS: [SpecialAttack; 4] = [
    SpecialAttack::BaseFraction {
        name: "Spam Punch",
        fraction: 0.7,
    },
    SpecialAttack::RangedMultiplier {
        name: "Flaming Bonk",
        low: 1.7,
        high: 2.2,
    },
    SpecialAttack::SelfDamage {
        name: "Maldquake",
        self_fraction: 0.6,
        opponent_multiplier: 2.4,
    },
    SpecialAttack::Redirect {
        name: "Delulu Strike",
        effect: "Redirect opponent's next attack",
    },
];

/// Draw one entry from the table. Callers select once per turn and thread
/// the same entry through damage, self-damage, and the log.
pub fn select_special(dice: &mut Dice) -> &'static SpecialAttack {
    &SPECIAL_ATTACKS[dice.pick(SPECIAL_ATTACKS.len())]
}

/// Defense skills from the same bestiary. Declarative only: the turn loop
/// never invokes them, but they are part of the content surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DefenseSkill {
    DamageReduction { name: &'static str, factor: f64 },
    Heal { name: &'static str, low: i32, high: i32 },
    Redirect {
        name: &'static str,
        effect: &'static str,
    },
}

impl DefenseSkill {
    pub fn name(&self) -> &'static str {
        match self {
            DefenseSkill::DamageReduction { name, .. }
            | DefenseSkill::Heal { name, .. }
            | DefenseSkill::Redirect { name, .. } => name,
        }
    }
}

pub static DEFENSE_SKILLS: [DefenseSkill; 3] = [
    DefenseSkill::DamageReduction {
        name: "Gyatt Harden",
        factor: 0.7,
    },
    DefenseSkill::Heal {
        name: "Self-Care Arc",
        low: 300,
        high: 500,
    },
    DefenseSkill::Redirect {
        name: "Zucc",
        effect: "Redirect opponent's defense skill",
    },
];

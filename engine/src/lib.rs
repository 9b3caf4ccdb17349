use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod attack;
pub mod battle;
pub mod battler;
pub mod content;
pub mod damage;
pub mod report;

pub use attack::{
    classify, select_special, AttackType, DefenseSkill, SpecialAttack, DEFENSE_SKILLS,
    SPECIAL_ATTACKS,
};
pub use battle::{
    simulate, Battle, BattleResult, Outcome, Phase, Simulation, SimulationConfig, TurnRecord,
    DEFAULT_TURN_LIMIT,
};
pub use battler::{load_battlers, BattleError, Battler};
pub use damage::{attack_damage, self_damage, Action};
pub use report::render;

enum Source {
    Seeded(ChaCha8Rng),
    Scripted {
        rolls: VecDeque<u32>,
        units: VecDeque<f64>,
    },
}

/// The attack die plus the uniform draws the special-attack table needs.
/// This is the only source of nondeterminism in the engine and is always
/// injected by the caller, so a seed fully determines a battle.
pub struct Dice {
    source: Source,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            source: Source::Seeded(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Scripted integer rolls for tests that pin an exact battle.
    pub fn from_scripted(rolls: Vec<u32>) -> Self {
        Self::scripted(rolls, Vec::new())
    }

    /// Scripted rolls and unit-interval draws. `d10` and `pick` pop from
    /// `rolls`, `between` pops from `units`; running a script dry panics.
    pub fn scripted(rolls: Vec<u32>, units: Vec<f64>) -> Self {
        Self {
            source: Source::Scripted {
                rolls: rolls.into(),
                units: units.into(),
            },
        }
    }

    /// Uniform roll in 1..=10.
    pub fn d10(&mut self) -> u32 {
        match &mut self.source {
            Source::Seeded(rng) => rng.gen_range(1..=10),
            Source::Scripted { rolls, .. } => match rolls.pop_front() {
                Some(roll) => roll,
                None => panic!("scripted dice ran out of rolls"),
            },
        }
    }

    /// Uniform index into a nonempty table of `len` entries.
    pub fn pick(&mut self, len: usize) -> usize {
        match &mut self.source {
            Source::Seeded(rng) => rng.gen_range(0..len),
            Source::Scripted { rolls, .. } => match rolls.pop_front() {
                Some(index) => index as usize % len,
                None => panic!("scripted dice ran out of rolls"),
            },
        }
    }

    /// Uniform f64 in [low, high).
    pub fn between(&mut self, low: f64, high: f64) -> f64 {
        match &mut self.source {
            Source::Seeded(rng) => rng.gen_range(low..high),
            Source::Scripted { units, .. } => match units.pop_front() {
                Some(unit) => low + unit * (high - low),
                None => panic!("scripted dice ran out of unit draws"),
            },
        }
    }
}

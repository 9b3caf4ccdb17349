use serde::Serialize;
use tracing::{debug, info};

use crate::attack::{classify, select_special, AttackType, SpecialAttack};
use crate::battler::{BattleError, Battler};
use crate::damage::{attack_damage, self_damage, Action};
use crate::report;
use crate::Dice;

/// Zero-damage stalemates stop here and report as inconclusive instead of
/// looping forever.
pub const DEFAULT_TURN_LIMIT: u32 = 1000;

/// One resolved turn. Frozen once constructed; the controller only reads
/// it back. Attacker health appears only when the action could cost the
/// attacker anything.
#[derive(Debug, Clone, Serialize)]
pub struct TurnRecord {
    /// 1-based, strictly increasing.
    pub turn: u32,
    pub attacker: String,
    pub defender: String,
    pub attack_type: AttackType,
    pub special: Option<SpecialAttack>,
    pub damage: i32,
    pub self_damage: Option<i32>,
    pub defender_hp_before: i32,
    pub defender_hp_after: i32,
    pub attacker_hp_before: Option<i32>,
    pub attacker_hp_after: Option<i32>,
}

/// Terminal verdict, decided exactly once from the post-turn snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Winner(usize),
    /// Both battlers reached 0 on the same turn.
    Draw,
    /// Turn limit reached with both battlers still standing.
    Inconclusive,
}

impl Outcome {
    pub fn winner_index(&self) -> Option<usize> {
        match self {
            Outcome::Winner(index) => Some(*index),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Ended(Outcome),
    /// Cancelled between ticks: turns already resolved stay logged, but no
    /// result is ever produced. Distinct from a draw.
    Aborted,
}

/// Finalized battle. Only an `Ended` controller produces one.
#[derive(Debug, Clone, Serialize)]
pub struct BattleResult {
    pub outcome: Outcome,
    pub final_hp: [i32; 2],
    pub turns: Vec<TurnRecord>,
}

/// Resolve one turn: classify the roll, select a special at most once, and
/// carry that same selection through damage, self-damage, and the record.
fn resolve_turn(
    battlers: &[Battler; 2],
    hp: &[i32; 2],
    turn_index: u32,
    dice: &mut Dice,
) -> TurnRecord {
    let attacker = (turn_index % 2) as usize;
    let defender = attacker ^ 1;

    let roll = dice.d10();
    let attack_type = classify(roll);
    let action = match attack_type {
        AttackType::Basic => Action::Basic,
        AttackType::Critical => Action::Critical,
        AttackType::Special => Action::Special(select_special(dice)),
    };

    let damage = attack_damage(&battlers[attacker], &action, dice);
    let cost = self_damage(&battlers[attacker], &action);

    let defender_hp_before = hp[defender];
    let defender_hp_after = (defender_hp_before - damage).max(0);

    let (special, self_cost, attacker_before, attacker_after) = match action {
        Action::Special(special) => {
            if matches!(special, SpecialAttack::SelfDamage { .. }) {
                let before = hp[attacker];
                (
                    Some(*special),
                    Some(cost),
                    Some(before),
                    Some((before - cost).max(0)),
                )
            } else {
                (Some(*special), None, None, None)
            }
        }
        _ => (None, None, None, None),
    };

    TurnRecord {
        turn: turn_index + 1,
        attacker: battlers[attacker].name.clone(),
        defender: battlers[defender].name.clone(),
        attack_type,
        special,
        damage,
        self_damage: self_cost,
        defender_hp_before,
        defender_hp_after,
        attacker_hp_before: attacker_before,
        attacker_hp_after: attacker_after,
    }
}

/// The only stateful component: owns current health, the turn index, and
/// the NotStarted → InProgress → Ended/Aborted machine.
pub struct Battle {
    battlers: [Battler; 2],
    hp: [i32; 2],
    turn: u32,
    turn_limit: u32,
    phase: Phase,
    records: Vec<TurnRecord>,
}

impl Battle {
    pub fn new(battlers: Vec<Battler>) -> Result<Self, BattleError> {
        Self::with_turn_limit(battlers, DEFAULT_TURN_LIMIT)
    }

    pub fn with_turn_limit(battlers: Vec<Battler>, turn_limit: u32) -> Result<Self, BattleError> {
        let battlers: [Battler; 2] = battlers
            .try_into()
            .map_err(|extra: Vec<Battler>| BattleError::WrongBattlerCount(extra.len()))?;
        for battler in &battlers {
            battler.validate()?;
        }
        let hp = [battlers[0].hp, battlers[1].hp];
        Ok(Self {
            battlers,
            hp,
            turn: 0,
            turn_limit,
            phase: Phase::NotStarted,
            records: Vec::new(),
        })
    }

    pub fn start(&mut self) {
        if self.phase == Phase::NotStarted {
            info!(
                first = %self.battlers[0].name,
                second = %self.battlers[1].name,
                "battle start"
            );
            self.phase = Phase::InProgress;
        }
    }

    /// Advance one turn. A no-op in every phase but `InProgress`. The
    /// terminal outcome is decided here, once, from the post-turn health
    /// snapshot, and never revisited.
    pub fn tick(&mut self, dice: &mut Dice) -> Phase {
        if self.phase != Phase::InProgress {
            return self.phase;
        }

        let record = resolve_turn(&self.battlers, &self.hp, self.turn, dice);
        let attacker = (self.turn % 2) as usize;
        let defender = attacker ^ 1;
        self.hp[defender] = record.defender_hp_after;
        if let Some(after) = record.attacker_hp_after {
            self.hp[attacker] = after;
        }
        self.turn += 1;
        debug!(
            turn = record.turn,
            attacker = %record.attacker,
            kind = record.attack_type.label(),
            damage = record.damage,
            "turn resolved"
        );
        self.records.push(record);

        let down = [self.hp[0] <= 0, self.hp[1] <= 0];
        self.phase = match down {
            [true, true] => Phase::Ended(Outcome::Draw),
            [true, false] => Phase::Ended(Outcome::Winner(1)),
            [false, true] => Phase::Ended(Outcome::Winner(0)),
            [false, false] if self.turn >= self.turn_limit => {
                Phase::Ended(Outcome::Inconclusive)
            }
            _ => Phase::InProgress,
        };
        self.phase
    }

    /// Cooperative cancellation at a tick boundary. Turns already resolved
    /// stay logged; no result is finalized.
    pub fn abort(&mut self) {
        if matches!(self.phase, Phase::NotStarted | Phase::InProgress) {
            info!(turns = self.records.len(), "battle aborted");
            self.phase = Phase::Aborted;
        }
    }

    /// Run to completion synchronously. Same transition rules as ticking
    /// from a scheduler, just without the pacing.
    pub fn run(&mut self, dice: &mut Dice) -> Phase {
        self.start();
        while self.phase == Phase::InProgress {
            self.tick(dice);
        }
        self.phase
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Per-tick health snapshot for live display.
    pub fn hp(&self) -> [i32; 2] {
        self.hp
    }

    pub fn battlers(&self) -> &[Battler; 2] {
        &self.battlers
    }

    pub fn turns(&self) -> &[TurnRecord] {
        &self.records
    }

    /// Finalized result; `None` until `Ended`, and always `None` for an
    /// aborted battle.
    pub fn result(&self) -> Option<BattleResult> {
        match self.phase {
            Phase::Ended(outcome) => Some(BattleResult {
                outcome,
                final_hp: self.hp,
                turns: self.records.clone(),
            }),
            _ => None,
        }
    }

    /// Latest human-readable status line, for live display layers.
    pub fn status_line(&self) -> String {
        match self.phase {
            Phase::NotStarted => return "Battle starting...".to_string(),
            Phase::Aborted => return "Battle aborted.".to_string(),
            Phase::Ended(Outcome::Winner(index)) => {
                return format!("{} wins the battle!", self.battlers[index].name)
            }
            Phase::Ended(Outcome::Draw) => return "Battle ends in a draw!".to_string(),
            Phase::Ended(Outcome::Inconclusive) => {
                return format!("No winner after {} turns.", self.turn)
            }
            Phase::InProgress => {}
        }
        match self.records.last() {
            None => "Battle starting...".to_string(),
            Some(record) => match (&record.special, record.self_damage) {
                (Some(special), Some(cost)) => format!(
                    "{} uses {}! Takes {} damage and deals {} damage!",
                    record.attacker,
                    special.name(),
                    cost,
                    record.damage
                ),
                (Some(special), None) => {
                    format!("{} uses {}!", record.attacker, special.name())
                }
                _ => format!(
                    "{} performs a {}!",
                    record.attacker,
                    record.attack_type.label()
                ),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub seed: u64,
    pub turn_limit: u32,
    /// Slot number stamped into the report header ("Simulation N").
    pub simulation: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            turn_limit: DEFAULT_TURN_LIMIT,
            simulation: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    pub outcome: Outcome,
    pub turns: u32,
    pub final_hp: [i32; 2],
    pub report: String,
}

/// Batch entry point: run a whole duel synchronously and render its report.
pub fn simulate(battlers: Vec<Battler>, cfg: &SimulationConfig) -> Result<Simulation, BattleError> {
    let mut battle = Battle::with_turn_limit(battlers, cfg.turn_limit)?;
    let mut dice = Dice::from_seed(cfg.seed);
    battle.run(&mut dice);
    let Phase::Ended(outcome) = battle.phase() else {
        // A fresh battle that ran to completion is always `Ended`; the turn
        // limit bounds the loop and nothing can abort it mid-run.
        unreachable!("battle finished without a terminal outcome");
    };
    let result = BattleResult {
        outcome,
        final_hp: battle.hp(),
        turns: battle.turns().to_vec(),
    };
    let report = report::render(battle.battlers(), &result, cfg.simulation);
    Ok(Simulation {
        outcome,
        turns: result.turns.len() as u32,
        final_hp: result.final_hp,
        report,
    })
}

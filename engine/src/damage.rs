use crate::attack::SpecialAttack;
use crate::battler::Battler;
use crate::Dice;

/// A fully resolved action for one turn. `Special` carries the catalog
/// entry selected for this turn, so damage, self-damage, and the log all
/// see the same one.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    Basic,
    Critical,
    Special(&'static SpecialAttack),
}

/// Damage dealt to the defender, floored to an integer, never negative.
pub fn attack_damage(attacker: &Battler, action: &Action, dice: &mut Dice) -> i32 {
    let raw = match *action {
        Action::Basic => attacker.attack,
        Action::Critical => attacker.attack * attacker.crit_rate,
        Action::Special(special) => match special {
            SpecialAttack::BaseFraction { fraction, .. } => attacker.attack * fraction,
            SpecialAttack::RangedMultiplier { low, high, .. } => {
                attacker.attack * dice.between(*low, *high)
            }
            SpecialAttack::SelfDamage {
                opponent_multiplier,
                ..
            } => attacker.attack * opponent_multiplier,
            SpecialAttack::Redirect { .. } => 0.0,
        },
    };
    raw.floor().max(0.0) as i32
}

/// Cost the attacker pays for the action; nonzero only for self-damaging
/// specials.
pub fn self_damage(attacker: &Battler, action: &Action) -> i32 {
    match *action {
        Action::Special(SpecialAttack::SelfDamage { self_fraction, .. }) => {
            (attacker.attack * self_fraction).floor().max(0.0) as i32
        }
        _ => 0,
    }
}

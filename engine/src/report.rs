use crate::attack::{AttackType, SpecialAttack};
use crate::battle::{BattleResult, Outcome, TurnRecord};
use crate::battler::Battler;

/// Render the battle report. Pure: the same result always yields the same
/// bytes, and the outcome is read from the controller, never recomputed.
pub fn render(battlers: &[Battler; 2], result: &BattleResult, simulation: u32) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Simulation {}", simulation));
    lines.push("Battle Start!".to_string());
    for battler in battlers {
        lines.push(format!("{}: {} HP", battler.name, battler.hp));
    }

    for record in &result.turns {
        render_turn(&mut lines, record);
    }

    lines.push("Battle Over!".to_string());
    match result.outcome {
        Outcome::Winner(winner) => {
            let loser = winner ^ 1;
            lines.push(format!(
                "{}: {} HP",
                battlers[winner].name, result.final_hp[winner]
            ));
            // The loser's line is pinned to 0 so float multipliers can't
            // leave a stray remainder in the report.
            lines.push(format!("{}: 0 HP", battlers[loser].name));
        }
        Outcome::Draw => {
            for battler in battlers {
                lines.push(format!("{}: 0 HP", battler.name));
            }
        }
        Outcome::Inconclusive => {
            lines.push(format!("No winner after {} turns.", result.turns.len()));
            for (battler, hp) in battlers.iter().zip(result.final_hp) {
                lines.push(format!("{}: {} HP", battler.name, hp));
            }
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn render_turn(lines: &mut Vec<String>, record: &TurnRecord) {
    lines.push(format!("Turn: {}", record.attacker));
    match (record.attack_type, &record.special) {
        (AttackType::Special, Some(special)) => {
            lines.push(format!("[{}] {}", record.attacker, special.name()));
            match special {
                SpecialAttack::SelfDamage { .. } => {
                    lines.push(format!("{} uses {}!", record.attacker, special.name()));
                    if let (Some(cost), Some(before), Some(after)) = (
                        record.self_damage,
                        record.attacker_hp_before,
                        record.attacker_hp_after,
                    ) {
                        lines.push(format!(
                            "{} took {} self-damage. HP: {} > {}",
                            record.attacker, cost, before, after
                        ));
                    }
                    lines.push(format!(
                        "{} took {} damage. HP: {} > {}",
                        record.defender,
                        record.damage,
                        record.defender_hp_before,
                        record.defender_hp_after
                    ));
                }
                SpecialAttack::Redirect { effect, .. } => {
                    lines.push(format!(
                        "{} is now using {}! {}.",
                        record.attacker,
                        special.name(),
                        effect
                    ));
                }
                _ => {
                    lines.push(format!(
                        "{} attacks with {} for {} damage",
                        record.attacker,
                        special.name(),
                        record.damage
                    ));
                    lines.push(target_line(record));
                }
            }
        }
        (AttackType::Critical, _) => {
            lines.push(format!("[{}] Critical Attack", record.attacker));
            lines.push(format!(
                "{} attacks for {} damage (CRITICAL!)",
                record.attacker, record.damage
            ));
            lines.push(target_line(record));
        }
        _ => {
            lines.push(format!("[{}] Basic Attack", record.attacker));
            lines.push(format!(
                "{} attacks for {} damage",
                record.attacker, record.damage
            ));
            lines.push(target_line(record));
        }
    }
}

fn target_line(record: &TurnRecord) -> String {
    format!(
        "Target took {} damage. HP: {} > {}",
        record.damage, record.defender_hp_before, record.defender_hp_after
    )
}

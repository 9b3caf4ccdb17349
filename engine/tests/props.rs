use engine::{attack_damage, self_damage, Action, AttackType, Battle, Battler, Dice};
use proptest::prelude::*;

fn battler(name: &str, hp: i32, attack: f64) -> Battler {
    Battler {
        name: name.into(),
        level: 1,
        hp,
        attack,
        crit_rate: 1.5,
        image: String::new(),
    }
}

proptest! {
    #[test]
    fn damage_is_never_negative(attack in 0.01f64..5000.0, crit in 0.01f64..5.0) {
        let attacker = Battler {
            name: "P".into(),
            level: 1,
            hp: 100,
            attack,
            crit_rate: crit,
            image: String::new(),
        };
        let mut dice = Dice::from_seed(7);
        prop_assert!(attack_damage(&attacker, &Action::Basic, &mut dice) >= 0);
        prop_assert!(attack_damage(&attacker, &Action::Critical, &mut dice) >= 0);
        prop_assert_eq!(self_damage(&attacker, &Action::Basic), 0);
        prop_assert_eq!(self_damage(&attacker, &Action::Critical), 0);
    }

    #[test]
    fn turn_ledger_is_consistent_for_any_seed(seed in any::<u64>()) {
        let battlers = vec![battler("Alice", 500, 40.0), battler("Bob", 450, 35.0)];
        let mut battle = Battle::new(battlers).unwrap();
        let mut dice = Dice::from_seed(seed);
        battle.run(&mut dice);
        let result = battle.result().unwrap();
        prop_assert!(!result.turns.is_empty());

        for (i, record) in result.turns.iter().enumerate() {
            prop_assert_eq!(record.turn as usize, i + 1);
            prop_assert!(record.damage >= 0);
            prop_assert_eq!(
                record.defender_hp_after,
                (record.defender_hp_before - record.damage).max(0)
            );
            if record.attack_type == AttackType::Special {
                prop_assert!(record.special.is_some());
            } else {
                prop_assert!(record.special.is_none());
            }
            if let (Some(cost), Some(before), Some(after)) = (
                record.self_damage,
                record.attacker_hp_before,
                record.attacker_hp_after,
            ) {
                prop_assert!(cost >= 0);
                prop_assert_eq!(after, (before - cost).max(0));
            }
        }
    }
}

use engine::{render, Battle, Battler, Dice, Phase};

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

fn run_scripted(battlers: Vec<Battler>, rolls: Vec<u32>) -> (Battle, engine::BattleResult) {
    let mut battle = Battle::new(battlers).expect("valid battle");
    let mut dice = Dice::from_scripted(rolls);
    let phase = battle.run(&mut dice);
    assert!(matches!(phase, Phase::Ended(_)));
    let result = battle.result().expect("finished battle has a result");
    (battle, result)
}

#[test]
fn basic_kill_report_matches_line_for_line() {
    let (battle, result) = run_scripted(
        vec![battler("Alice", 30, 10.0), battler("Bob", 8, 5.0)],
        vec![1],
    );
    let report = render(battle.battlers(), &result, 3);
    let expected = "\
Simulation 3
Battle Start!
Alice: 30 HP
Bob: 8 HP
Turn: Alice
[Alice] Basic Attack
Alice attacks for 10 damage
Target took 10 damage. HP: 8 > 0
Battle Over!
Alice: 30 HP
Bob: 0 HP
";
    assert_eq!(report, expected);
}

#[test]
fn self_damage_block_shows_both_sides() {
    let (battle, result) = run_scripted(
        vec![battler("Alice", 50, 100.0), battler("Bob", 500, 10.0)],
        vec![6, 2],
    );
    let report = render(battle.battlers(), &result, 1);
    let expected = "\
Simulation 1
Battle Start!
Alice: 50 HP
Bob: 500 HP
Turn: Alice
[Alice] Maldquake
Alice uses Maldquake!
Alice took 60 self-damage. HP: 50 > 0
Bob took 240 damage. HP: 500 > 260
Battle Over!
Bob: 260 HP
Alice: 0 HP
";
    assert_eq!(report, expected);
}

#[test]
fn redirect_renders_only_its_effect_text() {
    let (battle, result) = run_scripted(
        vec![battler("Alice", 5, 7.0), battler("Bob", 100, 10.0)],
        vec![6, 3, 1],
    );
    let report = render(battle.battlers(), &result, 2);
    let expected = "\
Simulation 2
Battle Start!
Alice: 5 HP
Bob: 100 HP
Turn: Alice
[Alice] Delulu Strike
Alice is now using Delulu Strike! Redirect opponent's next attack.
Turn: Bob
[Bob] Basic Attack
Bob attacks for 10 damage
Target took 10 damage. HP: 5 > 0
Battle Over!
Bob: 100 HP
Alice: 0 HP
";
    assert_eq!(report, expected);
}

#[test]
fn draw_reports_both_battlers_at_zero() {
    let (battle, result) = run_scripted(
        vec![battler("Alice", 1, 100.0), battler("Bob", 1, 100.0)],
        vec![6, 2],
    );
    let report = render(battle.battlers(), &result, 1);
    let expected = "\
Simulation 1
Battle Start!
Alice: 1 HP
Bob: 1 HP
Turn: Alice
[Alice] Maldquake
Alice uses Maldquake!
Alice took 60 self-damage. HP: 1 > 0
Bob took 240 damage. HP: 1 > 0
Battle Over!
Alice: 0 HP
Bob: 0 HP
";
    assert_eq!(report, expected);
}

#[test]
fn critical_turns_are_flagged() {
    let (battle, result) = run_scripted(
        vec![battler("Alice", 30, 10.0), battler("Bob", 8, 5.0)],
        vec![4],
    );
    let report = render(battle.battlers(), &result, 1);
    assert!(report.contains("[Alice] Critical Attack"));
    assert!(report.contains("Alice attacks for 15 damage (CRITICAL!)"));
}

#[test]
fn rendering_is_idempotent() {
    let (battle, result) = run_scripted(
        vec![battler("Alice", 50, 100.0), battler("Bob", 500, 10.0)],
        vec![6, 2],
    );
    let first = render(battle.battlers(), &result, 7);
    let second = render(battle.battlers(), &result, 7);
    assert_eq!(first, second);
}

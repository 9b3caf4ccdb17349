use engine::{classify, select_special, AttackType, Dice, SPECIAL_ATTACKS};

#[test]
fn every_roll_maps_to_its_band() {
    for roll in 1..=10u32 {
        let expected = match roll {
            1..=3 => AttackType::Basic,
            4..=5 => AttackType::Critical,
            _ => AttackType::Special,
        };
        assert_eq!(classify(roll), expected, "roll {}", roll);
    }
}

#[test]
fn catalog_is_fixed_and_uniquely_named() {
    assert_eq!(SPECIAL_ATTACKS.len(), 4);
    let mut names: Vec<_> = SPECIAL_ATTACKS.iter().map(|s| s.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 4);
}

#[test]
fn scripted_selection_is_deterministic() {
    let mut dice = Dice::from_scripted(vec![2]);
    assert_eq!(select_special(&mut dice).name(), "Maldquake");

    let mut dice = Dice::from_scripted(vec![0, 1, 3]);
    assert_eq!(select_special(&mut dice).name(), "Spam Punch");
    assert_eq!(select_special(&mut dice).name(), "Flaming Bonk");
    assert_eq!(select_special(&mut dice).name(), "Delulu Strike");
}

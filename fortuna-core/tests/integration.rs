use fortuna_core::{winning_index, OptionSet, SpinEngine, SpinPhase};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn four_option_wheel_full_lifecycle() {
    let mut options = OptionSet::new();
    for text in ["A", "B", "C", "D"] {
        options.add(text);
    }

    let mut engine = SpinEngine::new();
    assert_eq!(engine.phase(), SpinPhase::Idle);

    // A jitter of 45 lands the wheel at 1845 degrees: effective angle
    // (360 - 45) mod 360 = 315, slice 90 degrees, index 3.
    assert!(engine.begin_spin(&options, 45.0));
    assert_eq!(engine.phase(), SpinPhase::Spinning);

    let winner = engine.settle(&options).unwrap().clone();
    assert_eq!(winner.text, "D");
    assert_eq!(engine.phase(), SpinPhase::Settled);

    engine.dismiss();
    assert_eq!(engine.phase(), SpinPhase::Idle);
    assert!(engine.winner().is_none());
    assert_eq!(engine.rotation(), 1845.0);
}

#[test]
fn editing_the_set_between_spins_changes_the_mapping() {
    let mut options = OptionSet::new();
    options.add("A");
    let b = options.add("B").unwrap();
    options.add("C");
    options.add("D");

    let mut engine = SpinEngine::new();
    engine.begin_spin(&options, 45.0);
    assert_eq!(engine.settle(&options).unwrap().text, "D");
    engine.dismiss();

    // Dropping B leaves three 120-degree slices; the same effective angle
    // of 315 now points at the third remaining option.
    options.remove(b);
    assert_eq!(winning_index(1845.0, 3), Some(2));
    assert_eq!(options.get(2).unwrap().text, "D");
}

#[test]
fn winner_is_a_copy_not_a_live_reference() {
    let mut options = OptionSet::new();
    let a = options.add("keep").unwrap();
    options.add("other");

    let mut engine = SpinEngine::new();
    engine.begin_spin(&options, 0.0);
    let winner = engine.settle(&options).unwrap().clone();

    // Removing the winning option afterwards does not invalidate the result.
    options.remove(a);
    options.remove(winner.id);
    assert!(engine.winner().is_some());
}

#[test]
fn random_spins_always_resolve_a_valid_winner() {
    let mut options = OptionSet::new();
    for text in ["a", "b", "c", "d", "e"] {
        options.add(text);
    }

    let mut engine = SpinEngine::new();
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        assert!(engine.spin(&options, &mut rng));
        let winner = engine.settle(&options).unwrap();
        assert!(options.iter().any(|o| o.id == winner.id));
        engine.dismiss();
    }
}

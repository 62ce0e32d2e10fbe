//! End-to-end tests exercising the transform -> emit pipeline and the
//! native runtime constructs together, the way `kinda transform`/`kinda run`
//! compose the library crates (spec §8).

use kinda_personality::profile::RELIABLE;
use kinda_personality::PersonalityContext;
use kinda_runtime::{kinda_int, sometimes, welp_fallback};
use kinda_stats::EventuallyEvaluator;

#[test]
fn transform_and_emit_produce_consistent_helper_set() {
    let source = "~kinda int lives = 3\n~sometimes(lives > 0):\n    print('alive')\n";
    let output = kinda_transform::transform_file(source).unwrap();
    assert!(output.source.contains("lives = kinda_int(3)"));
    assert!(output.source.contains("if sometimes(lives > 0):"));

    let rendered = kinda_emit::render_runtime(&output.used_helpers).unwrap();
    assert!(rendered.contains("def kinda_int"));
    assert!(rendered.contains("def sometimes"));
}

#[test]
fn kinda_int_is_deterministic_under_a_fixed_seed() {
    let mut a = PersonalityContext::new(RELIABLE, 1234);
    let mut b = PersonalityContext::new(RELIABLE, 1234);
    let sequence_a: Vec<i64> = (0..50).map(|_| kinda_int(&mut a, 100)).collect();
    let sequence_b: Vec<i64> = (0..50).map(|_| kinda_int(&mut b, 100)).collect();
    assert_eq!(sequence_a, sequence_b);
}

#[test]
fn sometimes_never_fires_when_condition_is_false() {
    let mut ctx = PersonalityContext::new(RELIABLE, 7);
    for _ in 0..200 {
        assert!(!sometimes(&mut ctx, false));
    }
}

#[test]
fn welp_fallback_reports_failure_only_on_none() {
    let mut ctx = PersonalityContext::new(RELIABLE, 1);
    let (ok_value, ok_message) = welp_fallback(&mut ctx, || Some(10), -1);
    assert_eq!(ok_value, 10);
    assert!(ok_message.is_none());

    let (fallback_value, fallback_message) = welp_fallback(&mut ctx, || None::<i64>, -1);
    assert_eq!(fallback_value, -1);
    assert!(fallback_message.is_some());
}

#[test]
fn eventually_until_reaches_confidence_on_a_consistently_true_condition() {
    let mut evaluator = EventuallyEvaluator::new();
    let mut iterations = 0;
    while !evaluator.confidence_met(0.9) && iterations < 1000 {
        evaluator.record(true);
        iterations += 1;
    }
    assert!(evaluator.confidence_met(0.9), "expected confidence within 1000 trials");
}

#[test]
fn empty_block_body_is_rejected_before_it_reaches_the_emitter() {
    let source = "~sometimes(ready):\nprint('too soon')\n";
    assert!(kinda_transform::transform_file(source).is_err());
}

#[test]
fn dependency_closure_orders_ish_after_its_dependencies() {
    let closure = kinda_registry::dependency_closure(&["ish"]).unwrap();
    let position = |name: &str| closure.iter().position(|n| *n == name).unwrap();
    assert!(position("kinda_float") < position("ish"));
    assert!(position("probably") < position("ish"));
}

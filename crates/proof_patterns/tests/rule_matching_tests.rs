//! Integration tests for rule matching
//!
//! Exercises compiled rules end to end: pattern parsing, premise
//! permutations, partial checks, side conditions and rule-set loading.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use proof_patterns::{
    Axiom, Error, Formula, PatternRule, Rule1, Rule2, Rule3, RuleOutcome, RuleSet, Substitution,
    Verdict,
};

fn f(text: &str) -> Formula {
    text.parse().unwrap()
}

/// Accepts only when `N` is bound to a leaf whose name is an even number.
fn even_leaf(sub: &Substitution) -> bool {
    match sub.get("N") {
        Some(Formula::Variable(name)) => name.parse::<u32>().is_ok_and(|n| n % 2 == 0),
        _ => false,
    }
}

// ============================================================================
// Single-alignment rules
// ============================================================================

#[test]
fn test_axiom_true() {
    let rule = Axiom::new("top_intro", "true").unwrap();
    assert_eq!(rule.check(&f("true")), RuleOutcome::success("top_intro"));
    assert_eq!(rule.check(&f("false")), RuleOutcome::no_match("top_intro"));
}

#[test]
fn test_axiom_with_repeated_variable() {
    let rule = Axiom::new("refl", "eq(X, X)").unwrap();
    assert!(rule.check(&f("eq(a, a)")).is_success());
    assert!(!rule.check(&f("eq(a, b)")).is_success());
}

#[test]
fn test_rule1_partial_leniency() {
    let rule = Rule1::new("box_intro", "A", "box(A)")
        .unwrap()
        .when(|_: &Substitution| Verdict::Reject);

    // The condition would reject, but it is never asked during a partial check.
    assert_eq!(
        rule.check(None, &f("box(p)")),
        RuleOutcome::success("box_intro")
    );
    assert_eq!(
        rule.check(Some(&f("p")), &f("box(p)")),
        RuleOutcome::no_match("box_intro")
    );
}

#[test]
fn test_arity_above_three_uses_slot_order() {
    let rule = PatternRule::new(
        "chain",
        &["imply(A, B)", "imply(B, C)", "imply(C, D)", "A"],
        "D",
    )
    .unwrap();
    let (ab, bc, cd, a) = (f("imply(a, b)"), f("imply(b, c)"), f("imply(c, d)"), f("a"));

    assert!(rule
        .check(&[Some(&ab), Some(&bc), Some(&cd), Some(&a)], &f("d"))
        .is_success());
    assert!(!rule
        .check(&[Some(&bc), Some(&ab), Some(&cd), Some(&a)], &f("d"))
        .is_success());
}

// ============================================================================
// Permutation search
// ============================================================================

#[test]
fn test_conjunction_intro_any_order() {
    let rule = Rule2::new("and_intro", "A", "B", "and(A,B)").unwrap();
    let (p, q) = (f("p"), f("q"));
    let conclusion = f("and(p,q)");

    assert!(rule.check(Some(&p), Some(&q), &conclusion).is_success());
    assert!(rule.check(Some(&q), Some(&p), &conclusion).is_success());
}

#[test]
fn test_three_premises_all_orderings() {
    let rule = Rule3::new("triple", "A", "B", "C", "f(A,B,C)").unwrap();
    let (a, b, c) = (f("a"), f("b"), f("c"));
    let conclusion = f("f(a,b,c)");

    let orderings = [
        [&a, &b, &c],
        [&a, &c, &b],
        [&b, &a, &c],
        [&b, &c, &a],
        [&c, &a, &b],
        [&c, &b, &a],
    ];
    for [x, y, z] in orderings {
        assert!(rule.check(Some(x), Some(y), Some(z), &conclusion).is_success());
    }

    assert!(!rule
        .check(Some(&a), Some(&b), Some(&c), &f("f(a,b,d)"))
        .is_success());
}

#[test]
fn test_three_premises_partial() {
    let rule = Rule3::new("triple", "A", "B", "C", "f(A,B,C)").unwrap();
    let b = f("b");
    assert!(rule.check(None, Some(&b), None, &f("f(a,b,c)")).is_success());
    assert!(rule.check(Some(&b), None, None, &f("f(a,b,c)")).is_success());
    assert!(!rule.check(Some(&b), None, None, &f("f(a,c,d)")).is_success());
}

// ============================================================================
// Side conditions
// ============================================================================

#[test]
fn test_condition_rejects_odd_leaf() {
    let rule = Rule1::new("even", "N", "succ(succ(N))")
        .unwrap()
        .when(even_leaf);

    assert!(rule.check(Some(&f("4")), &f("succ(succ(4))")).is_success());
    assert!(!rule.check(Some(&f("3")), &f("succ(succ(3))")).is_success());
}

#[test]
fn test_condition_falls_through_to_next_permutation() {
    let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let rule = Rule2::new("pick_even", "N", "M", "pair")
        .unwrap()
        .when(move |sub: &Substitution| {
            seen.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            even_leaf(sub)
        });

    // First order binds N to 1 and is rejected; second binds N to 2.
    assert!(rule.check(Some(&f("1")), Some(&f("2")), &f("pair")).is_success());
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 2);

    assert!(!rule.check(Some(&f("1")), Some(&f("3")), &f("pair")).is_success());
}

#[test]
fn test_condition_outcomes_are_normalized() {
    let plain = Rule1::new("plain", "A", "A")
        .unwrap()
        .when(|_: &Substitution| Verdict::Accept);
    let with_msg = Rule1::new("noted", "A", "A")
        .unwrap()
        .when(|sub: &Substitution| Verdict::accept_with(format!("A is {}", sub["A"])));

    let p = f("p");
    assert_eq!(plain.check(Some(&p), &p), RuleOutcome::success("plain"));
    assert_eq!(
        with_msg.check(Some(&p), &p),
        RuleOutcome::success_with("noted", "A is p")
    );
}

// ============================================================================
// Rule sets
// ============================================================================

#[test]
fn test_rule_set_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "name": "hilbert",
            "rules": [
                {{ "name": "mp", "premises": ["imply(A, B)", "A"], "conclusion": "B" }},
                {{ "name": "k", "conclusion": "imply(A, imply(B, A))" }}
            ]
        }}"#
    )
    .unwrap();

    let set = RuleSet::load(file.path()).unwrap();
    assert_eq!(set.name, "hilbert");

    let (imp, p) = (f("imply(p, q)"), f("p"));
    assert!(set
        .check("mp", &[Some(&p), Some(&imp)], &f("q"))
        .unwrap()
        .is_success());
    assert!(set
        .check("k", &[], &f("imply(p, imply(q, p))"))
        .unwrap()
        .is_success());
    assert!(!set
        .check("k", &[], &f("imply(p, imply(q, q))"))
        .unwrap()
        .is_success());
}

#[test]
fn test_rule_set_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = RuleSet::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

// ============================================================================
// Sharing
// ============================================================================

#[test]
fn test_rule_shared_across_threads() {
    let rule = Arc::new(
        PatternRule::builder("and_intro")
            .premise("A")
            .premise("B")
            .conclusion("and(A, B)")
            .when(|sub: &Substitution| sub["A"] != sub["B"])
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rule = Arc::clone(&rule);
            thread::spawn(move || {
                let (a, b) = (f(&format!("p{}", i)), f("q"));
                let conclusion = f(&format!("and(p{}, q)", i));
                rule.check(&[Some(&b), Some(&a)], &conclusion)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_success());
    }
}

//! Construction tests
//!
//! Invalid descriptions must never produce an automaton.

mod common;
use common::a_before_b;
use dfa_core::{Automaton, Completion, InvalidAutomaton};
use std::collections::{HashMap, HashSet};

#[test]
fn test_start_outside_states() {
    let err = Automaton::new([0u32, 1], ['a'], [], 2, [0]).unwrap_err();
    assert_eq!(err, InvalidAutomaton::StartNotInStates { start: 2 });
}

#[test]
fn test_accepting_outside_states() {
    let err = Automaton::new([0u32, 1], ['a'], [], 0, [0, 5]).unwrap_err();
    assert_eq!(err, InvalidAutomaton::AcceptingNotInStates { state: 5 });
}

#[test]
fn test_transition_outside_declared_sets() {
    let err = Automaton::new([0u32], ['a'], [((0, 'b'), 0)], 0, []).unwrap_err();
    assert_eq!(err.kind(), "unknown_symbol");

    let err = Automaton::new([0u32], ['a'], [((1, 'a'), 0)], 0, []).unwrap_err();
    assert_eq!(err.kind(), "unknown_source_state");

    let err = Automaton::new([0u32], ['a'], [((0, 'a'), 1)], 0, []).unwrap_err();
    assert_eq!(err.kind(), "unknown_target_state");
}

#[test]
fn test_from_hash_collections() {
    let states: HashSet<u32> = [0, 1, 2].into_iter().collect();
    let alphabet: HashSet<char> = ['a', 'b'].into_iter().collect();
    let delta: HashMap<(u32, char), u32> = [
        ((0, 'a'), 0),
        ((0, 'b'), 1),
        ((1, 'a'), 2),
        ((1, 'b'), 1),
        ((2, 'a'), 2),
        ((2, 'b'), 2),
    ]
    .into_iter()
    .collect();
    let accepting: HashSet<u32> = [0, 1].into_iter().collect();

    let dfa = Automaton::new(states, alphabet, delta, 0, accepting).unwrap();
    assert_eq!(dfa, a_before_b());
}

#[test]
fn test_all_states_accepting_and_none_accepting() {
    let all = Automaton::new([0u32, 1], ['a'], [((0, 'a'), 1)], 0, [0, 1]).unwrap();
    assert_eq!(all.accepting().count(), 2);

    let none = Automaton::new([0u32, 1], ['a'], [((0, 'a'), 1)], 0, []).unwrap();
    assert_eq!(none.accepting().count(), 0);
    assert!(!none.run("".chars()).unwrap());
    assert!(!none.run("a".chars()).unwrap());
}

#[test]
fn test_total_policy_matches_sample() {
    let dfa = Automaton::builder()
        .states(a_before_b().states().copied())
        .alphabet(a_before_b().alphabet().copied())
        .transitions(a_before_b().transitions().map(|(s, a, t)| ((*s, *a), *t)))
        .start(0)
        .accepting([0, 1])
        .completion(Completion::Total)
        .build()
        .unwrap();
    assert!(dfa.run("aabb".chars()).unwrap());
    // same language, different policy
    assert_ne!(dfa, a_before_b());
}

#[test]
fn test_string_tokens() {
    let dfa: Automaton<String, String> = Automaton::new(
        ["closed".to_string(), "open".to_string()],
        ["push".to_string(), "coin".to_string()],
        [
            (("closed".to_string(), "coin".to_string()), "open".to_string()),
            (("open".to_string(), "push".to_string()), "closed".to_string()),
        ],
        "closed".to_string(),
        ["closed".to_string()],
    )
    .unwrap();

    let input = ["coin", "push"].map(String::from);
    assert!(dfa.run(&input).unwrap());
    assert_eq!(dfa.transition(&"closed".into(), &"coin".into()), Some(&"open".to_string()));
}

//! Shared helpers for the integration tests

#![allow(dead_code)]

use dfa_core::{samples, Automaton, Location, RunError};

pub type Dfa = Automaton<u32, char>;

/// The "a's before b's" sample
pub fn a_before_b() -> Dfa {
    samples::a_before_b().expect("sample automaton is valid")
}

/// Run a word given as a string, one symbol per char
pub fn run_str(dfa: &Dfa, word: &str) -> Result<bool, RunError<u32, char>> {
    dfa.run(word.chars())
}

/// States visited by a word, with the sink shown as `None`
pub fn path(dfa: &Dfa, word: &str) -> Vec<Option<u32>> {
    dfa.trace(word.chars())
        .expect("word is over the alphabet")
        .into_iter()
        .map(|loc| loc.state().copied())
        .collect()
}

/// Every word over `alphabet` up to `max_len` symbols, shortest first
pub fn words(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * alphabet.len());
        for prefix in &frontier {
            for &c in alphabet {
                let mut word = prefix.clone();
                word.push(c);
                next.push(word);
            }
        }
        all.extend(next.iter().cloned());
        frontier = next;
    }
    all
}

/// Reference membership test for the "a's before b's" language
pub fn is_a_before_b(word: &str) -> bool {
    !word.contains("ba")
}

pub fn state_of(loc: Location<'_, u32>) -> Option<u32> {
    loc.state().copied()
}

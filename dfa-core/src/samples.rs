//! Ready-made automata
//!
//! Each factory returns a fresh immutable value; nothing here is shared.

use crate::automaton::Automaton;
use crate::error::InvalidAutomaton;

/// Words over `{a, b}` in which every `a` comes before every `b`.
///
/// State `0` has seen only `a`s, state `1` has seen at least one `b`, state
/// `2` has seen an `a` after a `b` and never leaves.
pub fn a_before_b() -> Result<Automaton<u32, char>, InvalidAutomaton<u32, char>> {
    Automaton::new(
        [0, 1, 2],
        ['a', 'b'],
        [
            ((0, 'a'), 0),
            ((0, 'b'), 1),
            ((1, 'a'), 2),
            ((1, 'b'), 1),
            ((2, 'a'), 2),
            ((2, 'b'), 2),
        ],
        0,
        [0, 1],
    )
}

/// Exactly the word `keyword`, one state per consumed character.
///
/// Only the spine of the word is declared; every other pair falls into the
/// sink.
pub fn keyword(keyword: &str) -> Result<Automaton<usize, char>, InvalidAutomaton<usize, char>> {
    let chars: Vec<char> = keyword.chars().collect();
    let mut builder = Automaton::builder()
        .states(0..=chars.len())
        .alphabet(chars.iter().copied())
        .start(0)
        .accept(chars.len());
    for (i, c) in chars.into_iter().enumerate() {
        builder = builder.transition(i, c, i + 1);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a_before_b_shape() {
        let dfa = a_before_b().unwrap();
        assert_eq!(dfa.state_count(), 3);
        assert_eq!(dfa.symbol_count(), 2);
        assert!(dfa.is_total());
        assert_eq!(dfa.accepting().copied().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_factory_returns_fresh_equal_values() {
        assert_eq!(a_before_b().unwrap(), a_before_b().unwrap());
    }

    #[test]
    fn test_keyword() {
        let dfa = keyword("null").unwrap();
        assert!(dfa.run("null".chars()).unwrap());
        assert!(!dfa.run("nul".chars()).unwrap());
        assert!(!dfa.run("nulll".chars()).unwrap());
        assert!(dfa.run("nulx".chars()).is_err());
        // repeated letters share one symbol
        assert_eq!(dfa.symbol_count(), 3);
    }

    #[test]
    fn test_empty_keyword_accepts_only_empty_input() {
        let dfa = keyword("").unwrap();
        assert!(dfa.run("".chars()).unwrap());
        assert_eq!(dfa.symbol_count(), 0);
    }
}

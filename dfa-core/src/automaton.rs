//! The automaton value
//!
//! An [`Automaton`] is the five-tuple `(states, alphabet, transition, start,
//! accepting)` plus the [`Completion`] policy for undefined transitions. It is
//! validated once, by [`AutomatonBuilder::build`], and never changes after
//! that.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use dfa_config::Completion;

use crate::builder::AutomatonBuilder;
use crate::error::InvalidAutomaton;
use crate::table::{StateId, SymbolId, TransitionTable};

/// Deterministic finite automaton over states `S` and symbols `A`
#[derive(Clone)]
pub struct Automaton<S, A> {
    pub(crate) states: Vec<S>,
    pub(crate) state_ids: HashMap<S, StateId>,
    pub(crate) alphabet: Vec<A>,
    pub(crate) symbol_ids: HashMap<A, SymbolId>,
    pub(crate) table: TransitionTable,
    pub(crate) start: StateId,
    pub(crate) accepting: Vec<bool>,
    pub(crate) completion: Completion,
}

impl<S, A> Automaton<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    /// Build an automaton with the default [`Completion::Sink`] policy.
    ///
    /// `transitions` yields `((state, symbol), target)` entries, so a
    /// `HashMap<(S, A), S>` can be passed as is.
    ///
    /// # Example
    /// ```
    /// use dfa_core::Automaton;
    ///
    /// let dfa = Automaton::new(
    ///     [0, 1],
    ///     ['x'],
    ///     [((0, 'x'), 1), ((1, 'x'), 0)],
    ///     0,
    ///     [0],
    /// )
    /// .unwrap();
    /// assert!(dfa.run("xx".chars()).unwrap());
    /// assert!(!dfa.run("xxx".chars()).unwrap());
    /// ```
    pub fn new<Q, X, T, F>(
        states: Q,
        alphabet: X,
        transitions: T,
        start: S,
        accepting: F,
    ) -> Result<Self, InvalidAutomaton<S, A>>
    where
        Q: IntoIterator<Item = S>,
        X: IntoIterator<Item = A>,
        T: IntoIterator<Item = ((S, A), S)>,
        F: IntoIterator<Item = S>,
    {
        AutomatonBuilder::new()
            .states(states)
            .alphabet(alphabet)
            .transitions(transitions)
            .start(start)
            .accepting(accepting)
            .build()
    }

    pub fn builder() -> AutomatonBuilder<S, A> {
        AutomatonBuilder::new()
    }

    /// Declared states, in first-declaration order
    pub fn states(&self) -> std::slice::Iter<'_, S> {
        self.states.iter()
    }

    /// Declared symbols, in first-declaration order
    pub fn alphabet(&self) -> std::slice::Iter<'_, A> {
        self.alphabet.iter()
    }

    pub fn start(&self) -> &S {
        &self.states[self.start]
    }

    pub fn accepting(&self) -> impl Iterator<Item = &S> + '_ {
        self.states
            .iter()
            .zip(&self.accepting)
            .filter_map(|(s, &acc)| acc.then_some(s))
    }

    /// Whether `state` is a declared accepting state
    pub fn is_accepting(&self, state: &S) -> bool {
        self.state_ids
            .get(state)
            .is_some_and(|&id| self.accepting[id])
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.state_ids.contains_key(state)
    }

    pub fn contains_symbol(&self, symbol: &A) -> bool {
        self.symbol_ids.contains_key(symbol)
    }

    /// The declared successor of `(state, symbol)`.
    ///
    /// `None` for a pair the description left undefined, whatever the
    /// completion policy makes of it during a run, and for tokens that are
    /// not part of the automaton.
    pub fn transition(&self, state: &S, symbol: &A) -> Option<&S> {
        let from = *self.state_ids.get(state)?;
        let sym = *self.symbol_ids.get(symbol)?;
        self.table.get(from, sym).map(|to| &self.states[to])
    }

    /// Declared transitions as `(state, symbol, target)`
    pub fn transitions(&self) -> impl Iterator<Item = (&S, &A, &S)> + '_ {
        self.table
            .entries()
            .map(|(from, sym, to)| (&self.states[from], &self.alphabet[sym], &self.states[to]))
    }

    pub fn completion(&self) -> Completion {
        self.completion
    }

    /// Whether every `(state, symbol)` pair has a declared transition
    pub fn is_total(&self) -> bool {
        self.table.is_total()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn symbol_count(&self) -> usize {
        self.alphabet.len()
    }

    pub fn transition_count(&self) -> usize {
        self.table.defined()
    }
}

// Set semantics: declaration order does not matter.
impl<S, A> PartialEq for Automaton<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.completion == other.completion
            && self.states.len() == other.states.len()
            && self.alphabet.len() == other.alphabet.len()
            && self.start() == other.start()
            && self.states.iter().all(|s| other.contains_state(s))
            && self.alphabet.iter().all(|a| other.contains_symbol(a))
            && self
                .states
                .iter()
                .all(|s| self.is_accepting(s) == other.is_accepting(s))
            && self.transition_count() == other.transition_count()
            && self
                .transitions()
                .all(|(s, a, t)| other.transition(s, a) == Some(t))
    }
}

impl<S, A> Eq for Automaton<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
}

impl<S, A> fmt::Debug for Automaton<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("state_count", &self.states.len())
            .field("symbol_count", &self.alphabet.len())
            .field("transition_count", &self.table.defined())
            .field("accepting_count", &self.accepting.iter().filter(|a| **a).count())
            .field("completion", &self.completion)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle() -> Automaton<&'static str, char> {
        Automaton::new(
            ["even", "odd"],
            ['1', '0'],
            [
                (("even", '1'), "odd"),
                (("odd", '1'), "even"),
                (("even", '0'), "even"),
                (("odd", '0'), "odd"),
            ],
            "even",
            ["even"],
        )
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let dfa = toggle();
        assert_eq!(dfa.states().copied().collect::<Vec<_>>(), vec!["even", "odd"]);
        assert_eq!(dfa.alphabet().copied().collect::<Vec<_>>(), vec!['1', '0']);
        assert_eq!(*dfa.start(), "even");
        assert_eq!(dfa.accepting().copied().collect::<Vec<_>>(), vec!["even"]);
        assert!(dfa.is_accepting(&"even"));
        assert!(!dfa.is_accepting(&"odd"));
        assert!(!dfa.is_accepting(&"missing"));
        assert!(dfa.contains_state(&"odd"));
        assert!(dfa.contains_symbol(&'0'));
        assert!(!dfa.contains_symbol(&'2'));
        assert_eq!(dfa.state_count(), 2);
        assert_eq!(dfa.symbol_count(), 2);
        assert_eq!(dfa.transition_count(), 4);
        assert!(dfa.is_total());
        assert_eq!(dfa.completion(), Completion::Sink);
    }

    #[test]
    fn test_transition_lookup() {
        let dfa = toggle();
        assert_eq!(dfa.transition(&"even", &'1'), Some(&"odd"));
        assert_eq!(dfa.transition(&"odd", &'0'), Some(&"odd"));
        assert_eq!(dfa.transition(&"odd", &'2'), None);
        assert_eq!(dfa.transition(&"gone", &'1'), None);
        assert_eq!(dfa.transitions().count(), 4);
    }

    #[test]
    fn test_equality_ignores_declaration_order() {
        let reordered = Automaton::new(
            ["odd", "even", "odd"],
            ['0', '1'],
            [
                (("odd", '0'), "odd"),
                (("even", '0'), "even"),
                (("odd", '1'), "even"),
                (("even", '1'), "odd"),
            ],
            "even",
            ["even", "even"],
        )
        .unwrap();
        assert_eq!(toggle(), reordered);
    }

    #[test]
    fn test_inequality() {
        let other_start = Automaton::builder()
            .states(["even", "odd"])
            .alphabet(['1', '0'])
            .transitions(toggle().transitions().map(|(s, a, t)| ((*s, *a), *t)))
            .start("odd")
            .accept("even")
            .build()
            .unwrap();
        assert_ne!(toggle(), other_start);

        let partial = Automaton::new(
            ["even", "odd"],
            ['1', '0'],
            [(("even", '1'), "odd")],
            "even",
            ["even"],
        )
        .unwrap();
        assert_ne!(toggle(), partial);
    }

    #[test]
    fn test_debug_shows_counts() {
        let debug = format!("{:?}", toggle());
        assert!(debug.contains("state_count: 2"));
        assert!(debug.contains("transition_count: 4"));
        assert!(debug.contains("Sink"));
    }

    #[test]
    fn test_automaton_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Automaton<u32, char>>();
        assert_send_sync::<Automaton<String, String>>();
    }
}

//! Automaton construction and validation

use std::collections::HashMap;
use std::hash::Hash;

use dfa_config::{Completion, Phase};
use tracing::debug;

use crate::automaton::Automaton;
use crate::error::InvalidAutomaton;
use crate::table::TransitionTable;

const TARGET: &str = Phase::Build.target();

/// Collects the parts of an automaton description.
///
/// Nothing is checked until [`build`](Self::build), which validates every
/// part at once. Repeated states, symbols and accepting states collapse.
pub struct AutomatonBuilder<S, A> {
    states: Vec<S>,
    alphabet: Vec<A>,
    transitions: Vec<(S, A, S)>,
    start: Option<S>,
    accepting: Vec<S>,
    completion: Completion,
}

impl<S, A> Default for AutomatonBuilder<S, A> {
    fn default() -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            transitions: Vec::new(),
            start: None,
            accepting: Vec::new(),
            completion: Completion::default(),
        }
    }
}

impl<S, A> AutomatonBuilder<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    pub fn symbol(mut self, symbol: A) -> Self {
        self.alphabet.push(symbol);
        self
    }

    pub fn alphabet(mut self, alphabet: impl IntoIterator<Item = A>) -> Self {
        self.alphabet.extend(alphabet);
        self
    }

    pub fn transition(mut self, from: S, symbol: A, to: S) -> Self {
        self.transitions.push((from, symbol, to));
        self
    }

    pub fn transitions(mut self, transitions: impl IntoIterator<Item = ((S, A), S)>) -> Self {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|((from, symbol), to)| (from, symbol, to)),
        );
        self
    }

    /// Set the start state, replacing any earlier one.
    pub fn start(mut self, start: S) -> Self {
        self.start = Some(start);
        self
    }

    pub fn accept(mut self, state: S) -> Self {
        self.accepting.push(state);
        self
    }

    pub fn accepting(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.accepting.extend(states);
        self
    }

    pub fn completion(mut self, completion: Completion) -> Self {
        self.completion = completion;
        self
    }

    /// Validate the description and freeze it into an [`Automaton`].
    ///
    /// Checks, in order: the start state, the accepting states, every
    /// transition entry, and finally totality when the policy is
    /// [`Completion::Total`]. The first violation found is returned.
    pub fn build(self) -> Result<Automaton<S, A>, InvalidAutomaton<S, A>> {
        self.validate().inspect_err(|err| {
            debug!(target: TARGET, kind = err.kind(), "rejected automaton description");
        })
    }

    fn validate(self) -> Result<Automaton<S, A>, InvalidAutomaton<S, A>> {
        let (states, state_ids) = intern(self.states);
        let (alphabet, symbol_ids) = intern(self.alphabet);

        let start = self.start.ok_or(InvalidAutomaton::MissingStart)?;
        let start = match state_ids.get(&start) {
            Some(&id) => id,
            None => return Err(InvalidAutomaton::StartNotInStates { start }),
        };

        let mut accepting = vec![false; states.len()];
        for state in self.accepting {
            match state_ids.get(&state) {
                Some(&id) => accepting[id] = true,
                None => return Err(InvalidAutomaton::AcceptingNotInStates { state }),
            }
        }

        let mut table = TransitionTable::new(states.len(), alphabet.len());
        for (state, symbol, target) in self.transitions {
            let Some(&from) = state_ids.get(&state) else {
                return Err(InvalidAutomaton::UnknownSourceState { state, symbol });
            };
            let Some(&sym) = symbol_ids.get(&symbol) else {
                return Err(InvalidAutomaton::UnknownSymbol { state, symbol });
            };
            let Some(&to) = state_ids.get(&target) else {
                return Err(InvalidAutomaton::UnknownTargetState {
                    state,
                    symbol,
                    target,
                });
            };
            if let Some(previous) = table.set(from, sym, to) {
                if previous != to {
                    return Err(InvalidAutomaton::ConflictingTransition {
                        state,
                        symbol,
                        first: states[previous].clone(),
                        second: target,
                    });
                }
            }
        }

        if self.completion == Completion::Total {
            if let Some((from, sym)) = table.missing().next() {
                return Err(InvalidAutomaton::MissingTransition {
                    state: states[from].clone(),
                    symbol: alphabet[sym].clone(),
                });
            }
        }

        debug!(
            target: TARGET,
            states = states.len(),
            symbols = alphabet.len(),
            transitions = table.defined(),
            completion = self.completion.as_str(),
            "automaton constructed"
        );

        Ok(Automaton {
            states,
            state_ids,
            alphabet,
            symbol_ids,
            table,
            start,
            accepting,
            completion: self.completion,
        })
    }
}

/// Deduplicate `items` keeping first occurrences, and index them.
fn intern<T: Clone + Eq + Hash>(items: Vec<T>) -> (Vec<T>, HashMap<T, usize>) {
    let mut unique = Vec::with_capacity(items.len());
    let mut ids = HashMap::with_capacity(items.len());
    for item in items {
        if !ids.contains_key(&item) {
            ids.insert(item.clone(), unique.len());
            unique.push(item);
        }
    }
    (unique, ids)
}

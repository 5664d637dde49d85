//! Evaluation
//!
//! A run is a single deterministic walk from the start state driven by the
//! input. All execution state lives in a [`Walker`]; the automaton itself is
//! only read, so any number of runs may share it across threads.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use dfa_config::{Completion, Phase};
use tracing::{debug, trace};

use crate::automaton::Automaton;
use crate::error::RunError;
use crate::table::StateId;

const TARGET: &str = Phase::Run.target();

/// Where a walk currently is
#[derive(Debug, PartialEq, Eq)]
pub enum Location<'a, S> {
    /// A declared state
    State(&'a S),
    /// The implicit non-accepting sink of [`Completion::Sink`]
    Sink,
}

impl<S> Clone for Location<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Location<'_, S> {}

impl<'a, S> Location<'a, S> {
    pub fn state(&self) -> Option<&'a S> {
        match *self {
            Location::State(s) => Some(s),
            Location::Sink => None,
        }
    }

    pub fn is_sink(&self) -> bool {
        matches!(self, Location::Sink)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    At(StateId),
    Sink,
}

impl<S, A> Automaton<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    /// Decide whether `input` belongs to the language.
    ///
    /// Symbols are consumed in order. An empty input is accepted exactly when
    /// the start state is accepting.
    ///
    /// # Errors
    /// - [`RunError::SymbolNotInAlphabet`] for the first symbol outside the
    ///   alphabet, even after the walk has fallen into the sink.
    /// - [`RunError::UndefinedTransition`] when a [`Completion::Partial`]
    ///   automaton reaches a pair without a transition.
    pub fn run<I>(&self, input: I) -> Result<bool, RunError<S, A>>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let mut walker = self.walker();
        walker.feed(input)?;
        let accepted = walker.is_accepting();
        debug!(
            target: TARGET,
            consumed = walker.consumed(),
            sink = walker.cursor == Cursor::Sink,
            accepted,
            "run finished"
        );
        Ok(accepted)
    }

    /// Same as [`run`](Self::run).
    pub fn accepts<I>(&self, input: I) -> Result<bool, RunError<S, A>>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        self.run(input)
    }

    /// Where the walk over `input` ends
    pub fn final_location<I>(&self, input: I) -> Result<Location<'_, S>, RunError<S, A>>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let mut walker = self.walker();
        walker.feed(input)
    }

    /// Every location the walk over `input` visits, starting with the start
    /// state. The path is one longer than the input.
    pub fn trace<I>(&self, input: I) -> Result<Vec<Location<'_, S>>, RunError<S, A>>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let input = input.into_iter();
        let mut path = Vec::with_capacity(input.size_hint().0 + 1);
        let mut walker = self.walker();
        path.push(walker.location());
        for symbol in input {
            path.push(walker.step(symbol.borrow())?);
        }
        Ok(path)
    }

    /// Start an incremental walk at the start state.
    pub fn walker(&self) -> Walker<'_, S, A> {
        Walker {
            automaton: self,
            cursor: Cursor::At(self.start),
            consumed: 0,
        }
    }

    fn advance(&self, cursor: Cursor, symbol: &A, index: usize) -> Result<Cursor, RunError<S, A>> {
        let Some(&sym) = self.symbol_ids.get(symbol) else {
            trace!(target: TARGET, index, "symbol outside alphabet");
            return Err(RunError::SymbolNotInAlphabet {
                symbol: symbol.clone(),
                index,
            });
        };
        let from = match cursor {
            Cursor::At(from) => from,
            Cursor::Sink => return Ok(Cursor::Sink),
        };
        match (self.table.get(from, sym), self.completion) {
            (Some(to), _) => {
                trace!(target: TARGET, index, from, to, "step");
                Ok(Cursor::At(to))
            }
            (None, Completion::Sink) => {
                trace!(target: TARGET, index, from, "step into sink");
                Ok(Cursor::Sink)
            }
            (None, Completion::Partial | Completion::Total) => {
                trace!(target: TARGET, index, from, "undefined transition");
                Err(RunError::UndefinedTransition {
                    state: self.states[from].clone(),
                    symbol: symbol.clone(),
                    index,
                })
            }
        }
    }

    fn locate(&self, cursor: Cursor) -> Location<'_, S> {
        match cursor {
            Cursor::At(id) => Location::State(&self.states[id]),
            Cursor::Sink => Location::Sink,
        }
    }
}

/// An in-progress walk over one automaton.
///
/// Symbols can be fed one at a time or in chunks, so input that arrives as a
/// stream is evaluated as it comes. Indices in errors count every symbol the
/// walker has consumed since it was created or last reset. A failed step
/// leaves the walker where it was.
pub struct Walker<'a, S, A> {
    automaton: &'a Automaton<S, A>,
    cursor: Cursor,
    consumed: usize,
}

impl<S, A> Clone for Walker<'_, S, A> {
    fn clone(&self) -> Self {
        Self {
            automaton: self.automaton,
            cursor: self.cursor,
            consumed: self.consumed,
        }
    }
}

impl<'a, S, A> Walker<'a, S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    pub fn step(&mut self, symbol: &A) -> Result<Location<'a, S>, RunError<S, A>> {
        self.cursor = self.automaton.advance(self.cursor, symbol, self.consumed)?;
        self.consumed += 1;
        Ok(self.location())
    }

    pub fn feed<I>(&mut self, input: I) -> Result<Location<'a, S>, RunError<S, A>>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        for symbol in input {
            self.step(symbol.borrow())?;
        }
        Ok(self.location())
    }

    pub fn location(&self) -> Location<'a, S> {
        self.automaton.locate(self.cursor)
    }

    /// Whether the input consumed so far is accepted
    pub fn is_accepting(&self) -> bool {
        match self.cursor {
            Cursor::At(id) => self.automaton.accepting[id],
            Cursor::Sink => false,
        }
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Go back to the start state and forget the consumed count.
    pub fn reset(&mut self) {
        self.cursor = Cursor::At(self.automaton.start);
        self.consumed = 0;
    }

    pub fn automaton(&self) -> &'a Automaton<S, A> {
        self.automaton
    }
}

impl<S, A> fmt::Debug for Walker<'_, S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walker")
            .field("cursor", &self.cursor)
            .field("consumed", &self.consumed)
            .finish()
    }
}

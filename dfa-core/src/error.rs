//! Error types
//!
//! Construction problems and run problems are kept apart: an
//! [`InvalidAutomaton`] can only come out of building an automaton, a
//! [`RunError`] only out of evaluating one. Both carry the offending tokens.

use thiserror::Error;

/// The supplied description violates a structural invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidAutomaton<S, A> {
    #[error("no start state was given")]
    MissingStart,

    #[error("start state {start:?} is not a declared state")]
    StartNotInStates { start: S },

    #[error("accepting state {state:?} is not a declared state")]
    AcceptingNotInStates { state: S },

    #[error("transition ({state:?}, {symbol:?}) leaves from undeclared state {state:?}")]
    UnknownSourceState { state: S, symbol: A },

    #[error("transition ({state:?}, {symbol:?}) leads to undeclared state {target:?}")]
    UnknownTargetState { state: S, symbol: A, target: S },

    #[error("transition ({state:?}, {symbol:?}) uses symbol {symbol:?} outside the alphabet")]
    UnknownSymbol { state: S, symbol: A },

    #[error("transition ({state:?}, {symbol:?}) is defined twice: to {first:?} and to {second:?}")]
    ConflictingTransition {
        state: S,
        symbol: A,
        first: S,
        second: S,
    },

    #[error("no transition defined for ({state:?}, {symbol:?})")]
    MissingTransition { state: S, symbol: A },
}

impl<S, A> InvalidAutomaton<S, A> {
    /// Short machine-friendly name of the violation
    pub fn kind(&self) -> &'static str {
        match self {
            InvalidAutomaton::MissingStart => "missing_start",
            InvalidAutomaton::StartNotInStates { .. } => "start_not_in_states",
            InvalidAutomaton::AcceptingNotInStates { .. } => "accepting_not_in_states",
            InvalidAutomaton::UnknownSourceState { .. } => "unknown_source_state",
            InvalidAutomaton::UnknownTargetState { .. } => "unknown_target_state",
            InvalidAutomaton::UnknownSymbol { .. } => "unknown_symbol",
            InvalidAutomaton::ConflictingTransition { .. } => "conflicting_transition",
            InvalidAutomaton::MissingTransition { .. } => "missing_transition",
        }
    }
}

/// Evaluating an input against a valid automaton failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError<S, A> {
    #[error("symbol {symbol:?} at index {index} is not in the alphabet")]
    SymbolNotInAlphabet { symbol: A, index: usize },

    #[error("no transition from state {state:?} on symbol {symbol:?} (index {index})")]
    UndefinedTransition { state: S, symbol: A, index: usize },
}

impl<S, A> RunError<S, A> {
    /// Position in the input of the symbol that stopped the run
    pub fn index(&self) -> usize {
        match self {
            RunError::SymbolNotInAlphabet { index, .. }
            | RunError::UndefinedTransition { index, .. } => *index,
        }
    }

    /// The symbol that stopped the run
    pub fn symbol(&self) -> &A {
        match self {
            RunError::SymbolNotInAlphabet { symbol, .. }
            | RunError::UndefinedTransition { symbol, .. } => symbol,
        }
    }
}

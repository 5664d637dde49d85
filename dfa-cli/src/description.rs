//! JSON automaton descriptions
//!
//! ```json
//! {
//!   "states": [0, 1],
//!   "alphabet": ["a"],
//!   "transitions": [{ "from": 0, "symbol": "a", "to": 1 }],
//!   "start": 0,
//!   "accepting": [1],
//!   "completion": "partial"
//! }
//! ```
//!
//! Labels may be strings or integers; both become strings.

use std::path::Path;

use dfa_config::Completion;
use dfa_core::{Automaton, InvalidAutomaton};
use serde::Deserialize;

use crate::error::CliError;

const BUNDLED: &str = include_str!("../automata/a_before_b.json");

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Int(i64),
    Text(String),
}

/// A state or symbol name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawLabel")]
pub struct Label(pub String);

impl From<RawLabel> for Label {
    fn from(raw: RawLabel) -> Self {
        match raw {
            RawLabel::Int(n) => Label(n.to_string()),
            RawLabel::Text(s) => Label(s),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionEntry {
    pub from: Label,
    pub symbol: Label,
    pub to: Label,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Description {
    pub states: Vec<Label>,
    #[serde(default)]
    pub alphabet: Vec<Label>,
    #[serde(default)]
    pub transitions: Vec<TransitionEntry>,
    pub start: Label,
    #[serde(default)]
    pub accepting: Vec<Label>,
    #[serde(default)]
    pub completion: Completion,
}

impl Description {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// The "a's before b's" automaton shipped with the binary
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED)
    }

    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&text)?)
    }

    pub fn build(self) -> Result<Automaton<String, String>, InvalidAutomaton<String, String>> {
        Automaton::builder()
            .states(self.states.into_iter().map(|l| l.0))
            .alphabet(self.alphabet.into_iter().map(|l| l.0))
            .transitions(
                self.transitions
                    .into_iter()
                    .map(|t| ((t.from.0, t.symbol.0), t.to.0)),
            )
            .start(self.start.0)
            .accepting(self.accepting.into_iter().map(|l| l.0))
            .completion(self.completion)
            .build()
    }
}

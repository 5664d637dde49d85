//! Dense transition table
//!
//! States and symbols are interned to indices, so the transition function is
//! stored as one row per state and one column per symbol. A `None` cell is a
//! pair the description left undefined.

pub type StateId = usize;
pub type SymbolId = usize;

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct TransitionTable {
    width: usize,
    cells: Vec<Option<StateId>>,
}

impl TransitionTable {
    pub fn new(states: usize, symbols: usize) -> Self {
        Self {
            width: symbols,
            cells: vec![None; states * symbols],
        }
    }

    #[inline]
    fn cell(&self, state: StateId, symbol: SymbolId) -> usize {
        debug_assert!(symbol < self.width);
        state * self.width + symbol
    }

    #[inline]
    pub fn get(&self, state: StateId, symbol: SymbolId) -> Option<StateId> {
        self.cells[self.cell(state, symbol)]
    }

    /// Set a cell, returning the target that was already there.
    pub fn set(&mut self, state: StateId, symbol: SymbolId, target: StateId) -> Option<StateId> {
        let cell = self.cell(state, symbol);
        self.cells[cell].replace(target)
    }

    pub fn defined(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_total(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Undefined pairs, row by row.
    pub fn missing(&self) -> impl Iterator<Item = (StateId, SymbolId)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(move |(i, _)| (i / width, i % width))
    }

    /// Defined pairs with their targets, row by row.
    pub fn entries(&self) -> impl Iterator<Item = (StateId, SymbolId, StateId)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.map(|to| (i / width, i % width, to)))
    }
}

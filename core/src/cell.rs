use serde::{Deserialize, Serialize};

/// What a cell holds underneath, fixed at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Mine,
    Empty { adjacent_mines: u8 },
}

/// A single board cell: the immutable kind plus the player-visible state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) kind: CellKind,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
}

impl Cell {
    pub(crate) const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            revealed: false,
            flagged: false,
        }
    }

    pub const fn kind(self) -> CellKind {
        self.kind
    }

    pub const fn is_mine(self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    /// Precomputed adjacent-mine count, `None` for mine cells.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self.kind {
            CellKind::Mine => None,
            CellKind::Empty { adjacent_mines } => Some(adjacent_mines),
        }
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Whether neither reveal nor flag has touched this cell.
    pub(crate) const fn is_untouched(self) -> bool {
        !self.revealed && !self.flagged
    }

    /// Whether this cell on its own has lost the game.
    pub const fn has_lost(self) -> bool {
        self.revealed && self.is_mine()
    }

    /// Per-kind winning predicate: a mine must be flagged, an empty cell
    /// must be revealed.
    pub const fn is_winning(self) -> bool {
        match self.kind {
            CellKind::Mine => self.flagged,
            CellKind::Empty { .. } => self.revealed,
        }
    }
}

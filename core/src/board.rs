use std::collections::{HashSet, VecDeque};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::nd;
use crate::*;

/// Grid state for one game: cells with precomputed adjacency, running
/// counters, and the reveal/flag transitions the interaction layer drives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    hidden_count: CellCount,
    revealed_count: CellCount,
    flagged_count: CellCount,
    triggered_mine: Option<Coord2>,
    mines_shown: bool,
}

impl Board {
    /// Builds a board over a fixed mine layout. Every empty cell's
    /// adjacency count is computed here, once.
    pub fn new(layout: MineLayout) -> Self {
        let size = layout.size();
        let cells = Array2::from_shape_fn([size as usize, size as usize], |(x, y)| {
            let coords = (x as Coord, y as Coord);
            let kind = if layout.contains_mine(coords) {
                CellKind::Mine
            } else {
                CellKind::Empty {
                    adjacent_mines: layout.adjacent_mine_count(coords),
                }
            };
            Cell::new(kind)
        });

        Self {
            cells,
            mine_count: layout.mine_count(),
            hidden_count: layout.total_cells(),
            revealed_count: 0,
            flagged_count: 0,
            triggered_mine: None,
            mines_shown: false,
        }
    }

    /// New-game path: random placement from the given seed over validated
    /// parameters.
    pub fn generate(config: BoardConfig, seed: u64) -> Self {
        Self::new(RandomMineGenerator::new(seed).generate(config))
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub const fn hidden_count(&self) -> CellCount {
        self.hidden_count
    }

    pub const fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub const fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// How many mines have not been flagged yet; negative once the player
    /// has planted more flags than there are mines.
    pub const fn mines_left(&self) -> isize {
        (self.mine_count as isize) - (self.flagged_count as isize)
    }

    /// The first mine the player revealed, if any.
    pub const fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[nd(coords)])
    }

    /// Every cell with its position, for rendering.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), &cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn is_lost(&self) -> bool {
        self.cells.iter().any(|cell| cell.has_lost())
    }

    pub fn is_won(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_winning())
    }

    /// Display toggle that lets the UI paint unrevealed mines. Touches no
    /// reveal or flag state.
    pub fn show_mines(&mut self, shown: bool) {
        self.mines_shown = shown;
    }

    pub const fn mines_shown(&self) -> bool {
        self.mines_shown
    }

    /// Reveals a cell. Already-revealed and flagged cells are left
    /// untouched. Revealing a mine is permitted; the caller observes the
    /// loss through [`Board::is_lost`].
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        let cell = self.cells[nd(coords)];
        if !cell.is_untouched() {
            return Ok(RevealOutcome::NoChange);
        }

        self.reveal_cell(coords);

        Ok(match cell.kind {
            CellKind::Mine => {
                self.triggered_mine.get_or_insert(coords);
                log::debug!("revealed mine at {:?}", coords);
                RevealOutcome::HitMine
            }
            CellKind::Empty { adjacent_mines } => {
                log::debug!("revealed {:?}, adjacent mines: {}", coords, adjacent_mines);
                if adjacent_mines == 0 {
                    self.flood_reveal(coords);
                }
                RevealOutcome::Revealed
            }
        })
    }

    /// Flags or unflags a hidden cell. Revealed cells cannot be flagged.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.validate_coords(coords)?;

        let cell = &mut self.cells[nd(coords)];
        if cell.revealed {
            return Ok(FlagOutcome::NoChange);
        }

        cell.flagged = !cell.flagged;
        if cell.flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        Ok(FlagOutcome::Changed)
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn reveal_cell(&mut self, coords: Coord2) {
        self.cells[nd(coords)].revealed = true;
        self.hidden_count -= 1;
        self.revealed_count += 1;
    }

    /// Breadth-first cascade from a zero-adjacency cell. Numbered border
    /// cells get revealed but do not spread further; flagged cells stop the
    /// cascade. A zero cell has no mine neighbours, so the cascade can
    /// never reveal a mine.
    fn flood_reveal(&mut self, start: Coord2) {
        let size = self.size();
        let mut visited = HashSet::from([start]);
        let mut to_visit: VecDeque<_> = neighbors(start, size)
            .filter(|&pos| self.cells[nd(pos)].is_untouched())
            .collect();

        while let Some(visit) = to_visit.pop_front() {
            if !visited.insert(visit) {
                continue;
            }

            let cell = self.cells[nd(visit)];
            if !cell.is_untouched() {
                continue;
            }

            self.reveal_cell(visit);
            log::trace!("flood revealed {:?}", visit);

            if matches!(cell.kind, CellKind::Empty { adjacent_mines: 0 }) {
                to_visit.extend(
                    neighbors(visit, size)
                        .filter(|&pos| self.cells[nd(pos)].is_untouched())
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }
}

use core::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod session;
mod types;

use crate::types::nd;

/// Maximum allowed board edge length.
pub const MAX_BOARD_SIZE: Coord = 30;

/// Validated game parameters. Construction is the only place bad sizes or
/// mine counts can be rejected, so holders never see a half-valid config.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    mines: CellCount,
    size: Coord,
}

impl BoardConfig {
    pub fn new(mines: CellCount, size: Coord) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(size));
        }
        if mines >= area(size) {
            return Err(GameError::InvalidMineCount(mines));
        }
        Ok(Self { mines, size })
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// Ground-truth mine placement for one game. Mines never move once the
/// layout exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout with mines at exactly the given positions. Intended
    /// for fixed fixtures; random games go through a [`MineGenerator`].
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(size));
        }

        let mut mine_mask = Array2::from_elem([size as usize, size as usize], false);
        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[nd(coords)] = true;
        }

        let layout = Self::from_mine_mask(mine_mask);
        if layout.mine_count >= layout.total_cells() {
            return Err(GameError::InvalidMineCount(layout.mine_count));
        }
        Ok(layout)
    }

    pub fn size(&self) -> Coord {
        self.mine_mask.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Mine count in the in-bounds 8-neighbourhood of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size())
            .filter(|&pos| self[pos])
            .count()
            .try_into()
            .unwrap()
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[nd(coords)]
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of revealing a cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_out_of_range_parameters() {
        assert_eq!(
            BoardConfig::new(1, 0),
            Err(GameError::InvalidBoardSize(0))
        );
        assert_eq!(
            BoardConfig::new(1, 31),
            Err(GameError::InvalidBoardSize(31))
        );
        assert_eq!(
            BoardConfig::new(81, 9),
            Err(GameError::InvalidMineCount(81))
        );
        assert!(BoardConfig::new(80, 9).is_ok());
        assert!(BoardConfig::new(0, 1).is_ok());
    }

    #[test]
    fn layout_rejects_mine_outside_the_board() {
        assert_eq!(
            MineLayout::from_mine_coords(2, &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn layout_rejects_fully_mined_board() {
        let everywhere = [(0, 0), (0, 1), (1, 0), (1, 1)];
        assert_eq!(
            MineLayout::from_mine_coords(2, &everywhere),
            Err(GameError::InvalidMineCount(4))
        );
    }

    #[test]
    fn adjacency_counts_come_from_the_in_bounds_neighbourhood() {
        let layout = MineLayout::from_mine_coords(3, &[(0, 0), (2, 1)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.adjacent_mine_count((1, 0)), 2);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((0, 1)), 1);
        assert_eq!(layout.adjacent_mine_count((2, 2)), 1);
        assert_eq!(layout.adjacent_mine_count((0, 2)), 0);
    }
}

use ndarray::Array2;
use rand::prelude::*;

use crate::types::nd;

use super::*;

/// Uniform placement by rejection sampling: draw random positions and keep
/// the unoccupied ones until the requested number of mines is down. A valid
/// config always leaves at least one free cell, so the loop terminates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout {
        let size = config.size();
        let mut mine_mask = Array2::from_elem([size as usize, size as usize], false);
        let mut placed: CellCount = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        while placed < config.mines() {
            let coords: Coord2 = (rng.random_range(0..size), rng.random_range(0..size));
            if !mine_mask[nd(coords)] {
                mine_mask[nd(coords)] = true;
                placed += 1;
            }
        }

        log::debug!("placed {} mines on a {}x{} board", placed, size, size);
        MineLayout::from_mine_mask(mine_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_the_layout() {
        let config = BoardConfig::new(10, 9).unwrap();

        let first = RandomMineGenerator::new(7).generate(config);
        let second = RandomMineGenerator::new(7).generate(config);

        assert_eq!(first, second);
        assert_eq!(first.mine_count(), 10);
    }

    #[test]
    fn places_exact_count_on_a_nearly_full_board() {
        let config = BoardConfig::new(80, 9).unwrap();

        let layout = RandomMineGenerator::new(1).generate(config);

        assert_eq!(layout.mine_count(), 80);
        assert_eq!(layout.safe_cells(), 1);
    }

    #[test]
    fn mineless_config_generates_an_empty_layout() {
        let config = BoardConfig::new(0, 3).unwrap();

        let layout = RandomMineGenerator::new(3).generate(config);

        assert_eq!(layout.mine_count(), 0);
    }
}

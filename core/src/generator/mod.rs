use crate::*;
pub use random::*;

mod random;

/// Produces the fixed mine placement a board is built over.
pub trait MineGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout;
}

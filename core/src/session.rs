use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cap the new-game menu applies to the mine-count input. Advisory for the
/// UI; board validity is still `mines < size * size`.
pub const MENU_MAX_MINES: CellCount = 150;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// One game from the moment the player submits the menu form: the player's
/// name, the live board, and the wall-clock bookkeeping behind the header
/// timer. The ticking display itself belongs to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    player_name: String,
    board: Board,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl GameSession {
    pub fn start(
        player_name: impl Into<String>,
        config: BoardConfig,
        generator: impl MineGenerator,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            board: Board::new(generator.generate(config)),
            started_at: None,
            ended_at: None,
        }
    }

    /// Cosmetic only; shown in the header next to the counters.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = name.into();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        if self.board.is_lost() {
            GameStatus::Lost
        } else if self.board.is_won() {
            GameStatus::Won
        } else if self.started_at.is_some() {
            GameStatus::InProgress
        } else {
            GameStatus::NotStarted
        }
    }

    /// Seconds since the first move, frozen once the game ends; 0 before
    /// the first move.
    pub fn elapsed_secs(&self) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or_else(Utc::now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }

    pub fn mines_left(&self) -> isize {
        self.board.mines_left()
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.check_not_finished()?;

        let outcome = self.board.reveal(coords)?;
        if outcome.has_update() {
            self.mark_started();
            self.mark_ended_if_finished();
        }
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        self.check_not_finished()?;

        let outcome = self.board.toggle_flag(coords)?;
        if outcome.has_update() {
            self.mark_started();
            // flagging the last mine can end the game
            self.mark_ended_if_finished();
        }
        Ok(outcome)
    }

    /// Menu cheat that paints every mine; purely cosmetic.
    pub fn show_mines(&mut self, shown: bool) {
        self.board.show_mines(shown);
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status().is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn mark_started(&mut self) {
        if self.started_at.is_none() {
            let now = Utc::now();
            log::debug!("game started at {}", now);
            self.started_at.replace(now);
        }
    }

    fn mark_ended_if_finished(&mut self) {
        if self.ended_at.is_some() {
            return;
        }

        if self.board.is_lost() || self.board.is_won() {
            let now = Utc::now();
            log::debug!("game ended at {}", now);
            self.ended_at.replace(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: Coord, mines: &[Coord2]) -> GameSession {
        let layout = MineLayout::from_mine_coords(size, mines).unwrap();
        GameSession {
            player_name: "Hal".into(),
            board: Board::new(layout),
            started_at: None,
            ended_at: None,
        }
    }

    #[test]
    fn starts_idle_and_moves_to_in_progress() {
        let mut session = session(2, &[(0, 0)]);

        assert_eq!(session.status(), GameStatus::NotStarted);
        assert_eq!(session.elapsed_secs(), 0);

        session.reveal((1, 1)).unwrap();
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn flagging_the_last_mine_wins_the_session() {
        let mut session = session(2, &[(0, 0)]);

        session.reveal((0, 1)).unwrap();
        session.reveal((1, 0)).unwrap();
        session.reveal((1, 1)).unwrap();
        assert_eq!(session.status(), GameStatus::InProgress);

        session.toggle_flag((0, 0)).unwrap();
        assert_eq!(session.status(), GameStatus::Won);

        assert_eq!(session.reveal((1, 1)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn a_loss_locks_the_session() {
        let mut session = session(2, &[(0, 0)]);

        session.reveal((0, 0)).unwrap();
        assert_eq!(session.status(), GameStatus::Lost);

        assert_eq!(session.toggle_flag((1, 1)), Err(GameError::AlreadyEnded));
        assert_eq!(session.reveal((1, 1)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn generated_session_respects_the_config() {
        let config = BoardConfig::new(3, 4).unwrap();
        let session = GameSession::start("Kit", config, RandomMineGenerator::new(11));

        assert_eq!(session.player_name(), "Kit");
        assert_eq!(session.board().mine_count(), 3);
        assert_eq!(session.board().size(), 4);
        assert_eq!(session.mines_left(), 3);
    }
}

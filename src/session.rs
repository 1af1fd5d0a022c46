use crate::board::Board;
use crate::cell_content::CellContent;
use crate::cell_state::CellState;
use crate::clock::GameClock;
use crate::config::GameConfig;
use crate::game_state::GameState;
use crate::reveal::flood_reveal;
use crate::util::{Pos, pos_index};
use std::fmt;
use std::fmt::{Display, Formatter, Write};

/// One running game: config, board, per-cell visual state, counters and the
/// clock, owned together and replaced wholesale on restart.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    cells: Vec<CellState>,
    state: GameState,
    flags_placed: u32,
    revealed_cells: u32,
    clock: GameClock,
    notice: Option<String>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let (config, clamped) = config.normalize();
        let notice =
            clamped.map(|mines| format!("Too many mines for the grid. Mines adjusted to {mines}"));
        log::info!(
            "new game: {}x{} with {} mines",
            config.rows,
            config.cols,
            config.mines
        );
        Self {
            notice,
            ..Self::with_board(Board::generate(config))
        }
    }

    /// Session over a fixed board. Lets tests drive known layouts.
    pub fn with_board(board: Board) -> Self {
        let config = GameConfig::new(board.rows(), board.cols(), board.mine_count());
        let cells = vec![CellState::default(); board.total_cells() as usize];
        Self {
            config,
            board,
            cells,
            state: GameState::Playing,
            flags_placed: 0,
            revealed_cells: 0,
            clock: GameClock::start(),
            notice: None,
        }
    }

    /// Fresh board, same config.
    pub fn restart(&mut self) {
        *self = Self::new(self.config);
    }

    /// Fresh board with a different config (difficulty change).
    pub fn reconfigure(&mut self, config: GameConfig) {
        *self = Self::new(config);
    }

    /// Primary click. Opens the cell, cascading through zero-count regions;
    /// a mine ends the game and uncovers the full mine layout.
    pub fn reveal(&mut self, pos: Pos) {
        if self.state.is_over() {
            return;
        }
        let Some(index) = pos_index(pos, self.config.rows, self.config.cols) else {
            return;
        };
        if self.cells[index] != CellState::Hidden {
            return;
        }

        if self.board.is_mine(pos) {
            self.explode();
            return;
        }

        let opened = flood_reveal(&self.board, &self.cells, pos);
        self.revealed_cells += opened.len() as u32;
        for &p in &opened {
            let i = pos_index(p, self.config.rows, self.config.cols).unwrap();
            self.cells[i] = CellState::Revealed;
        }

        if self.revealed_cells == self.board.safe_cells() {
            self.state = GameState::Won;
            self.clock.stop();
            log::info!("won after {}", self.clock.mmss());
        }
    }

    fn explode(&mut self) {
        let mine_indices: Vec<usize> = self
            .board
            .mine_positions()
            .map(|p| pos_index(p, self.config.rows, self.config.cols).unwrap())
            .collect();
        for i in mine_indices {
            self.cells[i] = CellState::Revealed;
        }
        self.state = GameState::Lost;
        self.clock.stop();
        log::info!("hit a mine after {}", self.clock.mmss());
        log::debug!("final board:\n{self}");
    }

    /// Secondary click. Hidden <-> Flagged; revealed cells are left alone.
    pub fn toggle_flag(&mut self, pos: Pos) {
        if self.state.is_over() {
            return;
        }
        let Some(index) = pos_index(pos, self.config.rows, self.config.cols) else {
            return;
        };
        match self.cells[index] {
            CellState::Revealed => {}
            CellState::Flagged => {
                self.cells[index] = CellState::Hidden;
                self.flags_placed -= 1;
            }
            CellState::Hidden => {
                self.cells[index] = CellState::Flagged;
                self.flags_placed += 1;
            }
        }
    }

    /// Counter shown next to the timer. Goes negative when the player plants
    /// more flags than there are mines; that matches the classic display.
    pub fn remaining_mines(&self) -> i64 {
        self.board.mine_count() as i64 - self.flags_placed as i64
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn elapsed_mmss(&self) -> String {
        self.clock.mmss()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn cell(&self, pos: Pos) -> Option<(CellState, CellContent)> {
        let index = pos_index(pos, self.config.rows, self.config.cols)?;
        Some((self.cells[index], self.board.content_at(pos)?))
    }
}

impl Display for GameSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..self.config.rows {
            for col in 0..self.config.cols {
                let Some((state, content)) = self.cell((row, col)) else {
                    continue;
                };
                let c = match state {
                    CellState::Hidden => '#',
                    CellState::Flagged => '!',
                    CellState::Revealed => match content {
                        CellContent::Mine => '*',
                        CellContent::Empty(0) => '.',
                        CellContent::Empty(n) => {
                            std::char::from_digit(n as u32, 10).unwrap_or('?')
                        }
                    },
                };
                f.write_char(c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

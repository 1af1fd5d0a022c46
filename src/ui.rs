use crate::action::Action;
use crate::args::MinegridArgs;
use crate::cell_content::CellContent;
use crate::cell_state::CellState;
use crate::config::{Difficulty, GameConfig};
use crate::game_state::GameState;
use crate::input_state::InputState;
use crate::session::GameSession;
use color_eyre::Result;
use crossterm::ExecutableCommand;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color::*;
use ratatui::{
    DefaultTerminal, Frame,
    style::Stylize,
    text::Line,
    widgets::{Block, Paragraph},
};
use std::cmp::min;
use std::time::Duration;

const TITLE: &str = "Minesweeper!";
const LOST_MSG: &str = "Game Over!";
const WON_MSG: &str = "You Win!";
const HELP: &str = "(R)estart (Q)uit";

/// Redraw cadence between input events, keeps the clock display moving.
const TICK: Duration = Duration::from_millis(200);

pub fn main(args: MinegridArgs, config: GameConfig) -> Result<()> {
    let terminal = ratatui::init();
    let result = App::new(args, config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    args: MinegridArgs,
    game: GameSession,
    input: InputState,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(args: MinegridArgs, config: GameConfig) -> Self {
        Self {
            running: false,
            game: GameSession::new(config),
            args,
            input: InputState::default(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        std::io::stdout().execute(event::EnableMouseCapture)?;

        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.update();
        }

        std::io::stdout().execute(event::DisableMouseCapture)?;
        Ok(())
    }

    /// Applies the pending input action, if any, to the game session.
    fn update(&mut self) {
        let Some(action) = self.input.action.take() else {
            return;
        };
        let cursor = self.input.cursor;
        match action {
            Action::Reveal => self.game.reveal(cursor),
            Action::ToggleFlag => self.game.toggle_flag(cursor),
            Action::Restart => self.game.restart(),
            Action::SetDifficulty(difficulty) => {
                // 'custom' falls back to the size given on the command line
                let config = difficulty.preset().or_else(|| self.args.custom_config());
                if let Some(config) = config {
                    self.game.reconfigure(config);
                }
            }
        }
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let GameConfig { rows, cols, .. } = self.game.config();
        let (row, col) = &mut self.input.cursor;
        *row = min(*row, rows - 1);
        *col = min(*col, cols - 1);
    }

    fn move_cursor(&mut self, dr: i32, dc: i32) {
        let GameConfig { rows, cols, .. } = self.game.config();
        let (row, col) = &mut self.input.cursor;
        *row = if dr < 0 {
            row.saturating_sub(-dr as u16)
        } else {
            min(rows - 1, *row + dr as u16)
        };

        *col = if dc < 0 {
            col.saturating_sub(-dc as u16)
        } else {
            min(cols - 1, *col + dc as u16)
        };
    }

    /// Renders the user interface: bordered grid, title line, and a status
    /// line with the clock and the remaining-mine counter.
    fn render(&mut self, frame: &mut Frame) {
        let GameConfig { rows, cols, mines } = self.game.config();
        let (cursor_row, cursor_col) = self.input.cursor;

        let (title, bottom) = match self.game.state() {
            GameState::Won => (
                Line::from(WON_MSG).bold().light_green().centered(),
                Line::from(format!("{} {}", self.game.elapsed_mmss(), HELP))
                    .bold()
                    .light_green()
                    .centered(),
            ),
            GameState::Lost => (
                Line::from(LOST_MSG).bold().light_red().centered(),
                Line::from(format!("{} {}", self.game.elapsed_mmss(), HELP))
                    .bold()
                    .light_red()
                    .centered(),
            ),
            _ => {
                let stats = match self.game.notice() {
                    Some(notice) => notice.to_string(),
                    None => {
                        let long = format!(
                            "{} {}/{} ({},{})",
                            self.game.elapsed_mmss(),
                            self.game.remaining_mines(),
                            mines,
                            cursor_row,
                            cursor_col,
                        );
                        if long.len() as u16 > cols {
                            format!("{} {}", self.game.elapsed_mmss(), self.game.remaining_mines())
                        } else {
                            long
                        }
                    }
                };
                (
                    Line::from(TITLE).bold().light_blue().centered(),
                    Line::from(stats).centered(),
                )
            }
        };

        let area = frame.area().clamp(Rect::new(0, 0, cols + 2, rows + 2));

        frame.render_widget(
            Paragraph::new("")
                .block(Block::bordered().title(title).title_bottom(bottom))
                .centered(),
            area,
        );

        if area.height == 0 && area.width == 0 {
            return;
        }

        for j in area.y + 1..area.y + area.height - 1 {
            for i in area.x + 1..area.x + area.width - 1 {
                let Some((state, content)) = self.game.cell((j - 1, i - 1)) else {
                    continue;
                };

                let (char, bg, fg) = match state {
                    CellState::Hidden => ('#', Reset, Reset),
                    CellState::Flagged => ('!', LightRed, LightYellow),
                    CellState::Revealed => match content {
                        CellContent::Empty(n) => match n {
                            0 => (' ', Black, Reset),
                            1 => ('1', LightBlue, Black),
                            2 => ('2', LightCyan, Black),
                            3 => ('3', LightGreen, Black),
                            4 => ('4', LightYellow, Black),
                            5 => ('5', LightMagenta, Black),
                            6 => ('6', Gray, Black),
                            7 => ('7', White, Black),
                            8.. => ('8', LightRed, Black),
                        },
                        CellContent::Mine => ('*', Black, LightRed),
                    },
                };

                let w = frame.area().width;
                let mut c = Cell::new("");
                c.set_char(char).set_fg(fg).set_bg(bg);
                frame.buffer_mut().content[w as usize * j as usize + i as usize] = c;
            }
        }

        frame.set_cursor_position(Position {
            x: cursor_col + 1,
            y: cursor_row + 1,
        });
    }

    fn handle_crossterm_events(&mut self) -> Result<()> {
        // poll with a timeout instead of blocking, so the clock keeps ticking
        if !event::poll(TICK)? {
            return Ok(());
        }
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(m) => match m.kind {
                MouseEventKind::Down(button) => 'block: {
                    let GameConfig { rows, cols, .. } = self.game.config();
                    if !(1..cols + 1).contains(&m.column) || !(1..rows + 1).contains(&m.row) {
                        break 'block;
                    }
                    self.input.cursor = (m.row - 1, m.column - 1);
                    match button {
                        MouseButton::Left => self.input.action = Some(Action::Reveal),
                        MouseButton::Right | MouseButton::Middle => {
                            self.input.action = Some(Action::ToggleFlag)
                        }
                    };
                }
                _ => {}
            },
            Event::Resize(_, _) => {}
            _ => {}
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('r')) => {
                self.input.action = Some(Action::Restart);
            }
            (_, KeyCode::Char('1')) => {
                self.input.action = Some(Action::SetDifficulty(Difficulty::Beginner));
            }
            (_, KeyCode::Char('2')) => {
                self.input.action = Some(Action::SetDifficulty(Difficulty::Intermediate));
            }
            (_, KeyCode::Char('3')) => {
                self.input.action = Some(Action::SetDifficulty(Difficulty::Expert));
            }
            (_, KeyCode::Char('c')) => {
                self.input.action = Some(Action::SetDifficulty(Difficulty::Custom));
            }
            (_, KeyCode::Char('x' | ' ') | KeyCode::Enter) => {
                self.input.action = Some(Action::Reveal);
            }
            (_, KeyCode::Char('z' | 'f')) => {
                self.input.action = Some(Action::ToggleFlag);
            }
            (_, key @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down)) => {
                let (dr, dc) = match key {
                    KeyCode::Left => (0, -1),
                    KeyCode::Right => (0, 1),
                    KeyCode::Up => (-1, 0),
                    KeyCode::Down => (1, 0),
                    _ => unreachable!(),
                };
                self.move_cursor(dr, dc);
            }

            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub enum MenuAction {
    Play,
    About,
    Quit,
}

const ENTRIES: [&str; 3] = ["Play", "How to Play", "Quit"];

/// Title screen. Remembers the highlighted entry across visits.
pub struct MainMenu {
    selected: usize,
}

impl MainMenu {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<MenuAction> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Up => self.selected = self.selected.saturating_sub(1),
                        KeyCode::Down => {
                            self.selected = (self.selected + 1).min(ENTRIES.len() - 1)
                        }
                        KeyCode::Enter => {
                            return Ok(match self.selected {
                                0 => MenuAction::Play,
                                1 => MenuAction::About,
                                _ => MenuAction::Quit,
                            });
                        }
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(MenuAction::Quit),
                        _ => {}
                    }
                }
            }
        }
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(f.area());

        f.render_widget(
            Paragraph::new(" HANGTERM ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let items: Vec<ListItem> = ENTRIES
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!("  {entry}")).style(style)
            })
            .collect();

        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(" Menu ")),
            chunks[1],
        );

        f.render_widget(
            Paragraph::new("Up/Down: select   Enter: confirm   q: quit")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[2],
        );
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

const ABOUT_TEXT: &str = "\
Guess the hidden word one letter at a time. Every wrong guess costs a life;
six wrong guesses and the game is over.

One blank in every word is a SUPER BLANK, shown as '~'. Guess its letter and
you get to open one of nine mystery boxes. Three of them hold a power-up:

  - Reveal a random letter
  - An extra life
  - Reveal all vowels
  - A shield that absorbs your next wrong guess
  - A gamble: usually nothing, rarely a bonus power, rarely a lost life

In game: type letters to guess, Esc pauses.

Press Esc or Enter to go back.";

/// Rules screen; blocks until dismissed.
pub fn run_about(terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
    loop {
        terminal.draw(|f| {
            f.render_widget(
                Paragraph::new(ABOUT_TEXT)
                    .block(Block::default().borders(Borders::ALL).title(" How to Play "))
                    .alignment(Alignment::Left),
                f.area(),
            );
        })?;

        if event::poll(Duration::from_millis(33))? {
            if let Event::Key(key) = event::read()? {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
                ) {
                    return Ok(());
                }
            }
        }
    }
}

//! Ratatui rendering for a hangman session. Pure drawing, no game logic.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::game::{GameState, MAX_LIVES, SUPER_BLANK};
use super::session::{HangmanSession, Phase};

/// Gallows stages, one per wrong guess from zero to six.
const GALLOWS: [&str; 7] = [
    "\n\n\n\n\n\n=========",
    "\n+\n|\n|\n|\n|\n=========",
    "+---+\n|   |\n|\n|\n|\n|\n=========",
    "+---+\n|   |\n|   O\n|\n|\n|\n=========",
    "+---+\n|   |\n|   O\n|  /|\\\n|\n|\n=========",
    "+---+\n|   |\n|   O\n|  /|\\\n|  /\n|\n=========",
    "+---+\n|   |\n|   O\n|  /|\\\n|  / \\\n|\n=========",
];

pub fn draw(frame: &mut Frame, session: &HangmanSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let state = session.state();

    frame.render_widget(
        Paragraph::new(format!(" HANGTERM - hint: {} ", state.category()))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[0],
    );

    match session.phase() {
        Phase::PickingPower(_) => render_power_grid(frame, chunks[1]),
        Phase::Paused => {
            frame.render_widget(
                Paragraph::new("\nPAUSED\n\nEsc to resume, Enter to quit to menu")
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL)),
                chunks[1],
            );
        }
        Phase::Playing | Phase::Over { .. } => render_board(frame, session, chunks[1]),
    }

    render_status(frame, state, chunks[2]);

    frame.render_widget(
        Paragraph::new(session.banner())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[3],
    );
}

fn render_board(frame: &mut Frame, session: &HangmanSession, area: ratatui::layout::Rect) {
    let state = session.state();
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(20)])
        .split(area);

    let wrong = MAX_LIVES.saturating_sub(state.lives()).min(6) as usize;
    frame.render_widget(
        Paragraph::new(GALLOWS[wrong]).block(Block::default().borders(Borders::ALL)),
        halves[0],
    );

    let mut word_line: String = String::new();
    for &c in state.revealed() {
        word_line.push(c);
        word_line.push(' ');
    }

    let body = match session.phase() {
        Phase::Over { won: false } => format!(
            "\n{word_line}\n\nThe word was '{}'.\n\nEnter: new word   Esc: menu",
            state.word()
        ),
        Phase::Over { won: true } => {
            format!("\n{word_line}\n\nYou guessed it!\n\nEnter: new word   Esc: menu")
        }
        _ if state.revealed().contains(&SUPER_BLANK) => {
            format!("\n{word_line}\n\nThe '~' hides a power-up. Find it!")
        }
        _ => format!("\n{word_line}"),
    };

    frame.render_widget(
        Paragraph::new(body)
            .block(Block::default().borders(Borders::ALL).title(" Word "))
            .alignment(Alignment::Center),
        halves[1],
    );
}

// The grid itself is not drawn: boxes stay a mystery until one is opened.
fn render_power_grid(frame: &mut Frame, area: ratatui::layout::Rect) {
    let text = "\nSuper blank found!\n\n\
                 [1] [2] [3]\n\n\
                 [4] [5] [6]\n\n\
                 [7] [8] [9]\n\n\
                 Three boxes hold a power-up. Pick one.";
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title(" Power-Up "))
            .alignment(Alignment::Center),
        area,
    );
}

fn render_status(frame: &mut Frame, state: &GameState, area: ratatui::layout::Rect) {
    let guessed: String = state
        .guessed()
        .iter()
        .flat_map(|c| [*c, ' '])
        .collect();
    let shield = if state.shield_active() { "  [shield up]" } else { "" };
    let status = format!(
        "Lives: {}{}    Guessed: {}",
        "\u{2764} ".repeat(state.lives() as usize),
        shield,
        guessed
    );
    frame.render_widget(
        Paragraph::new(status).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

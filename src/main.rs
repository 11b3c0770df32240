use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
};
use tracing::info;

use hangterm::core::menu::{self, MainMenu, MenuAction};
use hangterm::core::words::{self, LoadHandle, WordStore};
use hangterm::games::hangman::HangmanSession;
use hangterm::Engine;

fn main() -> Result<()> {
    // the TUI owns the terminal, so logs go to a file
    let log = std::fs::File::create("hangterm.log")?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .init();

    // optional word pack path, same JSON shape as the built-in one
    let pack_path = std::env::args().nth(1).map(PathBuf::from);
    let handle = words::load_in_background(pack_path);

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, handle);
    ratatui::restore();
    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, mut handle: LoadHandle) -> Result<()> {
    let Some(store) = wait_for_words(terminal, &mut handle)? else {
        return Ok(());
    };

    let mut main_menu = MainMenu::new();
    loop {
        match main_menu.run(terminal)? {
            MenuAction::Play => {
                info!("launching hangman session");
                let session = HangmanSession::new(store.clone());
                Engine::new(session).run(terminal)?;
            }
            MenuAction::About => menu::run_about(terminal)?,
            MenuAction::Quit => return Ok(()),
        }
    }
}

/// Loading screen: poll the background load until the packs arrive. Returns
/// None if the player quits while waiting.
fn wait_for_words(
    terminal: &mut ratatui::DefaultTerminal,
    handle: &mut LoadHandle,
) -> Result<Option<WordStore>> {
    loop {
        terminal.draw(|f| {
            f.render_widget(
                Paragraph::new("\nLoading word packs...")
                    .block(Block::default().borders(Borders::ALL))
                    .alignment(Alignment::Center),
                f.area(),
            );
        })?;

        if let Some(result) = handle.poll() {
            return Ok(Some(result?));
        }

        if event::poll(Duration::from_millis(33))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(None);
                }
            }
        }
    }
}

//! Category word packs. A pack is a JSON map of category name to word list;
//! the built-in pack ships the classic six categories. Loading happens on a
//! background thread so the UI can show a loading screen and poll for the
//! result.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::{ensure, Context, Result};
use rand::Rng;
use serde::Deserialize;
use tracing::{info, warn};

const BUILTIN_PACK: &str = include_str!("../../resources/words.json");

/// All loaded categories and their words.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct WordStore {
    packs: BTreeMap<String, Vec<String>>,
}

impl WordStore {
    /// Parse the pack bundled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_PACK).context("built-in word pack is malformed")
    }

    /// Load from a user-supplied JSON file, same shape as the built-in pack.
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading word pack {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing word pack {}", path.display()))
    }

    pub(crate) fn from_json(raw: &str) -> Result<Self> {
        let mut store: WordStore = serde_json::from_str(raw)?;
        // drop empty categories rather than erroring round start later
        store.packs.retain(|name, words| {
            if words.is_empty() {
                warn!(category = %name, "ignoring empty word category");
            }
            !words.is_empty()
        });
        ensure!(!store.packs.is_empty(), "word pack has no usable categories");
        Ok(store)
    }

    /// Pick a random category, then a random word from it.
    pub fn pick(&self, rng: &mut impl Rng) -> (String, String) {
        // packs is never empty after load validation
        let idx = rng.random_range(0..self.packs.len());
        let (category, words) = self
            .packs
            .iter()
            .nth(idx)
            .unwrap_or_else(|| unreachable!("validated non-empty"));
        let word = &words[rng.random_range(0..words.len())];
        (category.clone(), word.clone())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.packs.keys().map(String::as_str)
    }
}

/// Polled handle to a word-pack load running on a background thread.
pub struct LoadHandle {
    rx: mpsc::Receiver<Result<WordStore>>,
}

impl LoadHandle {
    /// Non-blocking check. Returns the load result once, when it is ready.
    pub fn poll(&mut self) -> Option<Result<WordStore>> {
        self.rx.try_recv().ok()
    }
}

/// Kick off loading in the background. With no path the built-in pack is
/// parsed; with a path, a failed file load falls back to the built-in pack.
pub fn load_in_background(path: Option<PathBuf>) -> LoadHandle {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = match path {
            Some(path) => WordStore::from_file(&path).or_else(|err| {
                warn!(error = %err, "word pack load failed, using built-in pack");
                WordStore::builtin()
            }),
            None => WordStore::builtin(),
        };
        if let Ok(store) = &result {
            info!(categories = store.packs.len(), "word packs loaded");
        }
        // receiver gone means the UI quit during loading
        let _ = tx.send(result);
    });
    LoadHandle { rx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn builtin_pack_parses_with_six_categories() {
        let store = WordStore::builtin().unwrap();
        let cats: Vec<&str> = store.categories().collect();
        assert_eq!(
            cats,
            [
                "animals",
                "continents",
                "countries",
                "fruits",
                "planets",
                "vegetables"
            ]
        );
    }

    #[test]
    fn pick_returns_a_word_from_the_named_category() {
        let store = WordStore::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let (category, word) = store.pick(&mut rng);
            assert!(store.packs[&category].contains(&word));
        }
    }

    #[test]
    fn empty_categories_are_dropped() {
        let store =
            WordStore::from_json(r#"{"empty": [], "ok": ["cat"]}"#).unwrap();
        let cats: Vec<&str> = store.categories().collect();
        assert_eq!(cats, ["ok"]);
    }

    #[test]
    fn all_empty_pack_is_an_error() {
        assert!(WordStore::from_json(r#"{"empty": []}"#).is_err());
    }

    #[test]
    fn background_load_delivers_builtin() {
        let mut handle = load_in_background(None);
        let store = loop {
            if let Some(result) = handle.poll() {
                break result.unwrap();
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        };
        assert!(store.categories().count() >= 1);
    }
}

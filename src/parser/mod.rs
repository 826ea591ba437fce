pub mod date;
pub mod fields;
pub mod nav;
pub mod walker;

use std::path::Path;

use scraper::Html;

use crate::config::Settings;
use crate::error::LineupError;
use crate::model::Lineup;

/// Two-step pipeline: bytes → html tree → lineup.
pub fn parse_lineup(raw: &[u8], settings: &Settings) -> Result<Lineup, LineupError> {
    let text = std::str::from_utf8(raw)?;
    let document = Html::parse_document(text);
    Ok(extract(&document, settings))
}

/// Read a saved page from disk and parse it.
pub fn parse_lineup_file(path: impl AsRef<Path>, settings: &Settings) -> Result<Lineup, LineupError> {
    let raw = std::fs::read(path)?;
    parse_lineup(&raw, settings)
}

/// Walk an already-parsed document. Never fails; missing nodes become empty fields.
pub fn extract(document: &Html, settings: &Settings) -> Lineup {
    walker::walk(document.tree.root(), settings)
}

// ── Tests ──

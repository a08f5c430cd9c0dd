use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use super::types::{Card, Talent};

pub const CARDS_FILE: &str = "cards.json";
pub const TALENTS_FILE: &str = "talents.json";
pub const CHALLENGE_STATS_FILE: &str = "challenge_stats.json";

pub fn cards_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CARDS_FILE)
}

pub fn talents_path(data_dir: &Path) -> PathBuf {
    data_dir.join(TALENTS_FILE)
}

pub fn challenge_stats_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CHALLENGE_STATS_FILE)
}

/// Read a JSON cache file.
///
/// A missing file is reported with a hint to fetch fresh data.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        anyhow::bail!(
            "No data file found at {}! Run with --fetch to fetch new data.",
            path.display()
        );
    }

    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write a value as pretty JSON atomically, creating the parent directory.
pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory at {}", dir.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    serde_json::to_writer_pretty(&mut file, value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;

    Ok(())
}

pub fn load_cards(data_dir: &Path) -> Result<Vec<Card>> {
    load_json(&cards_path(data_dir))
}

pub fn save_cards(data_dir: &Path, cards: &[Card]) -> Result<()> {
    save_json(&cards_path(data_dir), cards)
}

pub fn load_talents(data_dir: &Path) -> Result<Vec<Talent>> {
    load_json(&talents_path(data_dir))
}

pub fn save_talents(data_dir: &Path, talents: &[Talent]) -> Result<()> {
    save_json(&talents_path(data_dir), talents)
}

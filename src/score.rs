use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "arcade-snake";
const SCORE_FILE_NAME: &str = "high_score.json";

/// On-disk shape of the persisted high score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// Returns the platform-correct high-score file path.
#[must_use]
pub fn high_score_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the persisted high score.
///
/// A missing file means a first run and yields `Ok(0)`. A file that exists
/// but cannot be read or parsed yields `Err`, so the caller can report it
/// before entering raw terminal mode.
pub fn load_high_score() -> io::Result<u32> {
    load_from_path(&high_score_path())
}

/// Persists the high score, creating parent directories when needed.
pub fn save_high_score(high_score: u32) -> io::Result<()> {
    save_to_path(&high_score_path(), high_score)
}

fn load_from_path(path: &Path) -> io::Result<u32> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(error) => return Err(error),
    };

    serde_json::from_str::<HighScoreFile>(&raw)
        .map(|file| file.high_score)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
}

fn save_to_path(path: &Path, high_score: u32) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&HighScoreFile { high_score })
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    fs::write(path, json)
}

use anyhow::Result;
use std::path::PathBuf;

const SKILLTRADE_DIR: &str = ".skilltrade";
const DB_FILE: &str = "skilltrade.db";

/// Environment variable to override the Skilltrade directory.
const SKILLTRADE_DIR_ENV: &str = "SKILLTRADE_DIR";

/// Resolve the Skilltrade data directory.
/// Priority: SKILLTRADE_DIR env var > ~/.skilltrade/
pub fn resolve_skilltrade_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(SKILLTRADE_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|h| h.join(SKILLTRADE_DIR))
        .ok_or_else(|| anyhow::anyhow!("Failed to determine home directory"))
}

/// Ensure the Skilltrade directory exists and return its path.
pub fn ensure_skilltrade_dir() -> Result<PathBuf> {
    let dir = resolve_skilltrade_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Ensure database path exists and return as path.
pub fn ensure_database_path() -> Result<PathBuf> {
    Ok(ensure_skilltrade_dir()?.join(DB_FILE))
}

/// Convenience helper returning the database path as a UTF-8 string.
pub fn ensure_database_path_string() -> Result<String> {
    Ok(ensure_database_path()?.to_string_lossy().into_owned())
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Used when discovery finds nothing; storage calls then fail as unavailable.
pub const FALLBACK_DATABASE: &str = "sqlite";

/// Data file names probed, in order, before falling back to an extension scan.
pub const DATABASE_CANDIDATES: &[&str] = &[
    "sqlite",
    "sqlite.db",
    "sqlite.sqlite",
    "sqlite.sqlite3",
    "conference.db",
    "companies.db",
    "database.db",
    "db.sqlite3",
    "database.sqlite",
];

/// Patterns recognized as SQLite data files during the extension scan.
pub const DATABASE_PATTERNS: &[&str] = &["*.db", "*.sqlite", "*.sqlite3"];

/// Contents of `boothbook.toml`. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BoothbookConfig {
    pub database: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<String>,
}

/// Fully resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub database: PathBuf,
    pub static_dir: PathBuf,
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("boothbook.toml")
}

pub fn load_config(path: Option<&Path>) -> Result<Option<BoothbookConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: BoothbookConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}

impl ServerSettings {
    /// Merge CLI overrides, the config file and defaults. The database path is
    /// resolved here, once, relative to `base`.
    pub fn resolve(overrides: SettingsOverrides, config: Option<BoothbookConfig>, base: &Path) -> Self {
        let config = config.unwrap_or_default();

        let database = overrides
            .database
            .or_else(|| config.database.map(PathBuf::from))
            .unwrap_or_else(|| resolve_database_path(base));

        Self {
            host: overrides
                .host
                .or(config.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(config.port).unwrap_or(DEFAULT_PORT),
            database,
            static_dir: overrides
                .static_dir
                .or_else(|| config.static_dir.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        }
    }
}

/// Find a data file in `dir`: named candidates first, then the first file
/// (by name) matching a recognized extension.
pub fn discover_database(dir: &Path) -> Option<PathBuf> {
    for name in DATABASE_CANDIDATES {
        let path = dir.join(name);
        if path.is_file() {
            tracing::info!("Found database: {}", path.display());
            return Some(path);
        }
    }

    let mut matches: Vec<PathBuf> = DATABASE_PATTERNS
        .iter()
        .filter_map(|pattern| {
            let pattern = dir.join(pattern);
            glob::glob(&pattern.to_string_lossy()).ok()
        })
        .flat_map(|paths| paths.filter_map(|p| p.ok()))
        .filter(|p| p.is_file())
        .collect();
    matches.sort();

    if let Some(path) = matches.into_iter().next() {
        tracing::info!("Trying database file: {}", path.display());
        return Some(path);
    }

    None
}

/// `discover_database`, or `dir/sqlite` when nothing is found.
pub fn resolve_database_path(dir: &Path) -> PathBuf {
    discover_database(dir).unwrap_or_else(|| {
        tracing::error!("No database file found in {}", dir.display());
        tracing::info!(
            "Place a SQLite file named 'sqlite' or ending in .db/.sqlite/.sqlite3 next to the server"
        );
        dir.join(FALLBACK_DATABASE)
    })
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_candidates_win_in_order() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "aaa.db");
        touch(dir.path(), "companies.db");
        let expected = touch(dir.path(), "sqlite.db");

        assert_eq!(discover_database(dir.path()), Some(expected));
    }

    #[test]
    fn test_extension_scan_fallback() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "zeta.sqlite3");
        let expected = touch(dir.path(), "expo.db");

        assert_eq!(discover_database(dir.path()), Some(expected));
    }

    #[test]
    fn test_default_name_when_nothing_found() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "readme.md");

        assert_eq!(discover_database(dir.path()), None);
        assert_eq!(resolve_database_path(dir.path()), dir.path().join(FALLBACK_DATABASE));
    }

    #[test]
    fn test_settings_precedence() {
        let dir = TempDir::new().unwrap();
        let config = BoothbookConfig {
            database: Some("from-config.db".into()),
            host: Some("127.0.0.1".into()),
            port: Some(8080),
            static_dir: None,
        };
        let overrides = SettingsOverrides {
            port: Some(9000),
            ..Default::default()
        };

        let settings = ServerSettings::resolve(overrides, Some(config), dir.path());
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.database, PathBuf::from("from-config.db"));
        assert_eq!(settings.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    }

    #[test]
    fn test_settings_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = ServerSettings::resolve(SettingsOverrides::default(), None, dir.path());
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.host, DEFAULT_HOST);
        assert_eq!(settings.database, dir.path().join(FALLBACK_DATABASE));
    }

    #[test]
    fn test_load_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("boothbook.toml");
        assert!(load_config(Some(&path)).unwrap().is_none());

        std::fs::write(&path, "port = 4000\ndatabase = \"expo.db\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.port, Some(4000));
        assert_eq!(config.database.as_deref(), Some("expo.db"));

        std::fs::write(&path, "port = \"nope\"\n").unwrap();
        assert!(matches!(load_config(Some(&path)), Err(Error::Config(_))));
    }
}

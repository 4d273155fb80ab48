use std::env;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "SNIPGEN_HOME";
pub const CONFIG_DIR_NAME: &str = ".snipgen";
pub const SNIPPETS_DIR_NAME: &str = "snippets";

/// Paths the commands work with, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub config_dir: PathBuf,
    pub snippets_dir: PathBuf,
}

impl Config {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(env::var(HOME_ENV).ok(), env::var("HOME").ok())
    }

    /// `$SNIPGEN_HOME` wins, then `$HOME/.snipgen`, then `./.snipgen`.
    pub fn resolve(snipgen_home: Option<String>, home: Option<String>) -> Self {
        let config_dir = match (snipgen_home, home) {
            (Some(dir), _) if !dir.is_empty() => PathBuf::from(dir),
            (_, Some(home)) if !home.is_empty() => PathBuf::from(home).join(CONFIG_DIR_NAME),
            _ => PathBuf::from(CONFIG_DIR_NAME),
        };
        Self::with_config_dir(config_dir)
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        let snippets_dir = config_dir.join(SNIPPETS_DIR_NAME);
        Self {
            config_dir,
            snippets_dir,
        }
    }

    /// Directory for snippet files, unless a command overrides it.
    pub fn snippets_dir_or<'a>(&'a self, out_dir: Option<&'a Path>) -> &'a Path {
        out_dir.unwrap_or(self.snippets_dir.as_path())
    }
}

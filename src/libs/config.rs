//! Configuration resolution for the choo-choo application.
//!
//! The configuration is assembled from three layers, highest precedence
//! first:
//!
//! 1. **Environment**: `CHOO_CHOO_<FIELD>` variables (ignored when empty)
//! 2. **Config file**: a YAML document, by default
//!    `$HOME/.config/choo-choo/config.yml`, relocatable with `CHOO_CHOO_CONFIG`
//! 3. **Defaults**: built into [`Config::defaults`]
//!
//! Every resolved value goes through shell-style variable expansion, so both
//! the defaults and user supplied values may refer to `$HOME` or `${HOME}`.
//!
//! ## File Format
//!
//! ```yaml
//! database: $HOME/climbing/db
//! server: /srv/choo-choo
//! moonboard_set: 2016 A+B+O
//! moonboard_user: Sean Christopherson
//! github: git@github.com:someone/ticks.git
//! ```
//!
//! Keys that are absent keep their default value. A missing file is not an
//! error; an unreadable or malformed one is.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use choo_choo::libs::config::Config;
//!
//! let config = Config::load()?;
//! println!("Database directory: {}", config.database);
//! # Ok::<(), choo_choo::libs::config::ConfigError>(())
//! ```

use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Prefix shared by every environment variable the resolver reads.
pub const ENV_PREFIX: &str = "CHOO_CHOO_";

pub const DEFAULT_MOONBOARD_SET: &str = "2016 A+B+O";
pub const DEFAULT_MOONBOARD_USER: &str = "Sean Christopherson";

/// Failures that prevent the application from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{0} must be a non-empty string")]
    Missing(&'static str),

    #[error("cannot create database directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Fully resolved application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Location of the config file itself. Only settable through
    /// `CHOO_CHOO_CONFIG`, never from inside the file.
    pub config: String,

    /// Directory holding the SQLite database. Created if absent.
    pub database: String,

    /// Root directory of the web server assets.
    pub server: String,

    /// Moonboard set, i.e. year and hold combination.
    pub moonboard_set: String,

    /// Moonboard user display name.
    pub moonboard_user: String,

    /// Repository URL backing the database. Optional.
    pub github: String,
}

/// Layer read from the YAML file; every key is optional.
#[derive(Deserialize, Default, Debug)]
#[serde(default)]
struct ConfigFile {
    database: Option<String>,
    server: Option<String>,
    moonboard_set: Option<String>,
    moonboard_user: Option<String>,
    github: Option<String>,
}

impl Config {
    /// Built-in defaults rooted at `home`. Values are left unexpanded.
    pub fn defaults(home: &str) -> Self {
        let home = Path::new(home);
        let join = |parts: &[&str]| parts.iter().fold(home.to_path_buf(), |path, part| path.join(part)).to_string_lossy().into_owned();

        Config {
            config: join(&[".config", "choo-choo", "config.yml"]),
            database: join(&[".db"]),
            server: join(&["Development", "go", "src", "github.com", "zombull", "choo-choo", "server"]),
            moonboard_set: DEFAULT_MOONBOARD_SET.to_string(),
            moonboard_user: DEFAULT_MOONBOARD_USER.to_string(),
            github: String::new(),
        }
    }

    /// Resolves the configuration from the process environment.
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_with(|name| env::var(name).ok())
    }

    /// Resolves the configuration, reading environment variables through
    /// `lookup`, and makes sure the database directory exists.
    pub fn load_with<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::defaults(&home_dir(&lookup));

        config.config = env_or(&lookup, "CONFIG", &config.config);
        match fs::read_to_string(&config.config) {
            Ok(contents) => config.merge_file(&contents)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %config.config, "no config file, using defaults");
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: config.config.clone(),
                    source,
                })
            }
        }

        config.database = env_or(&lookup, "DATABASE", &config.database);
        config.server = env_or(&lookup, "SERVER", &config.server);
        config.moonboard_set = env_or(&lookup, "MOONBOARD_SET", &config.moonboard_set);
        config.moonboard_user = env_or(&lookup, "MOONBOARD_USER", &config.moonboard_user);
        config.github = env_or(&lookup, "GITHUB", &config.github);

        if config.database.is_empty() {
            return Err(ConfigError::Missing("database"));
        }
        if config.server.is_empty() {
            return Err(ConfigError::Missing("server"));
        }

        create_database_dir(&config.database)?;
        Ok(config)
    }

    /// Overlays the keys present in a YAML document.
    fn merge_file(&mut self, contents: &str) -> Result<(), ConfigError> {
        if contents.trim().is_empty() {
            return Ok(());
        }
        let file: ConfigFile = serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: self.config.clone(),
            source,
        })?;

        let fields = [
            (&mut self.database, file.database),
            (&mut self.server, file.server),
            (&mut self.moonboard_set, file.moonboard_set),
            (&mut self.moonboard_user, file.moonboard_user),
            (&mut self.github, file.github),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
        Ok(())
    }
}

/// `$HOME`, or on Windows shells without it, `HOMEDRIVE` joined with
/// `HOMEPATH`.
fn home_dir<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());
    match (non_empty("HOME"), non_empty("HOMEDRIVE"), non_empty("HOMEPATH")) {
        (None, Some(drive), Some(path)) => Path::new(&drive).join(path).to_string_lossy().into_owned(),
        _ => "$HOME".to_string(),
    }
}

/// The `CHOO_CHOO_<name>` variable if set and non-empty, else `current`,
/// expanded either way.
fn env_or<F>(lookup: &F, name: &str, current: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(&format!("{}{}", ENV_PREFIX, name)).filter(|value| !value.is_empty()).unwrap_or_else(|| current.to_string());
    expand_env(&value, lookup)
}

/// Replaces `$NAME` and `${NAME}` with the variable's value, or with nothing
/// when the variable is unset. A `$` not followed by a name is kept.
pub fn expand_env<F>(input: &str, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let is_name_char = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        output.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            if let Some(end) = braced.find('}') {
                output.push_str(&lookup(&braced[..end]).unwrap_or_default());
                rest = &braced[end + 1..];
                continue;
            }
        }

        let len = after.find(|c: char| !is_name_char(c)).unwrap_or(after.len());
        if len == 0 {
            output.push('$');
        } else {
            output.push_str(&lookup(&after[..len]).unwrap_or_default());
        }
        rest = &after[len..];
    }

    output.push_str(rest);
    output
}

fn create_database_dir(path: &str) -> Result<(), ConfigError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o770);
    }
    builder.create(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })
}

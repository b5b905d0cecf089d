//! Layered settings: built-in defaults, then an optional TOML file, then flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::{CryptoRng, Rng, RngCore};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tictac_core::{FirstMover, GameConfig, GameError, MAX_LABELLED_SIZE};
use tracing::{debug, info, instrument};

/// Bounds for the computer's cosmetic "thinking" pause, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkDelay {
    min_ms: u64,
    max_ms: u64,
}

impl ThinkDelay {
    /// One to two seconds.
    pub const DEFAULT: Self = Self {
        min_ms: 1000,
        max_ms: 2000,
    };

    /// No pause at all.
    pub const NONE: Self = Self { min_ms: 0, max_ms: 0 };

    /// Creates a delay range.
    ///
    /// # Errors
    ///
    /// Fails if `min_ms > max_ms`.
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self, SettingsError> {
        if min_ms > max_ms {
            return Err(SettingsError::new(format!(
                "Invalid configuration: think delay minimum {min_ms}ms exceeds maximum {max_ms}ms"
            )));
        }
        Ok(Self { min_ms, max_ms })
    }

    /// Lower bound in milliseconds.
    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    /// Upper bound in milliseconds.
    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    /// Draws a pause length uniformly from the range. A fixed delay draws nothing.
    pub fn sample<R>(&self, rng: &mut R) -> Duration
    where
        R: RngCore + CryptoRng,
    {
        if self.min_ms == self.max_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rng.gen_range(self.min_ms..=self.max_ms))
    }
}

impl Default for ThinkDelay {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for ThinkDelay {
    type Err = SettingsError;

    /// Parses `"MIN-MAX"` or a single fixed `"MS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim().parse::<u64>().map_err(|e| {
                SettingsError::new(format!("Invalid think delay {s:?}: {e}"))
            })
        };
        match s.split_once('-') {
            Some((min, max)) => Self::new(parse(min)?, parse(max)?),
            None => {
                let fixed = parse(s)?;
                Self::new(fixed, fixed)
            }
        }
    }
}

/// Contents of a settings file. Every key is optional.
///
/// ```toml
/// size = 4
/// first = "random"
/// multi = false
/// think_min_ms = 250
/// think_max_ms = 750
/// ascii = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    size: Option<usize>,
    first: Option<FirstMover>,
    multi: Option<bool>,
    think_min_ms: Option<u64>,
    think_max_ms: Option<u64>,
    ascii: Option<bool>,
}

impl SettingsFile {
    /// Loads a settings file from TOML.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses settings from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        toml::from_str(content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))
    }
}

/// Values given on the command line. `None` means "not given" and defers to
/// the file or the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--size`
    pub size: Option<usize>,
    /// `--first`
    pub first: Option<FirstMover>,
    /// `--multi` / `--no-multi`
    pub multi: Option<bool>,
    /// `--think-ms`
    pub think: Option<ThinkDelay>,
    /// `--ascii` / `--no-ascii`
    pub ascii: Option<bool>,
}

/// Fully resolved and validated settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Settings {
    /// Engine configuration.
    game: GameConfig,
    /// Computer pause bounds.
    think: ThinkDelay,
    /// Draw `X`/`O` instead of block glyphs.
    ascii: bool,
}

impl Settings {
    /// Layers the file (if any) and the flags over the defaults, then validates.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or if the result is not a
    /// playable configuration.
    #[instrument(skip(path), fields(path = ?path.map(Path::display)))]
    pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> Result<Self, SettingsError> {
        let file = match path {
            Some(path) => SettingsFile::from_file(path)?,
            None => SettingsFile::default(),
        };
        Self::layer(&file, overrides)
    }

    /// Layers already-loaded file contents and flags over the defaults.
    ///
    /// # Errors
    ///
    /// Fails on an oversized board or an inverted think-delay range.
    #[instrument]
    pub fn layer(file: &SettingsFile, overrides: &Overrides) -> Result<Self, SettingsError> {
        let defaults = GameConfig::default();

        let size = overrides
            .size
            .or(file.size)
            .unwrap_or(*defaults.size());
        if size > MAX_LABELLED_SIZE {
            return Err(GameError::invalid_configuration(format!(
                "board size {size} is larger than {MAX_LABELLED_SIZE}, the widest board with lettered columns"
            ))
            .into());
        }

        let first = overrides.first.or(file.first).unwrap_or(*defaults.first());
        let multi = overrides.multi.or(file.multi).unwrap_or(*defaults.multi());

        let think = match overrides.think {
            Some(think) => think,
            None => ThinkDelay::new(
                file.think_min_ms.unwrap_or(ThinkDelay::DEFAULT.min_ms),
                file.think_max_ms.unwrap_or(ThinkDelay::DEFAULT.max_ms),
            )?,
        };

        let ascii = overrides.ascii.or(file.ascii).unwrap_or(false);

        let settings = Self {
            game: GameConfig::new(size, first, multi),
            think,
            ascii,
        };
        info!(?settings, "Settings resolved");
        Ok(settings)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<GameError> for SettingsError {
    #[track_caller]
    fn from(err: GameError) -> Self {
        Self::new(err.to_string())
    }
}

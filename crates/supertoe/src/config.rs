//! Game configuration loaded from TOML and overridden from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use supertoe_core::{Budget, Mark, SearchEngine, TieBreak, Variant};
use tracing::{debug, info, instrument};

/// Which kind of player takes a mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PlayerKind {
    /// Keyboard input.
    #[default]
    Human,
    /// Uniformly random open square.
    Random,
    /// Wins or blocks one move ahead, otherwise random.
    PeekAhead,
    /// Time-boxed adversarial search.
    Flawless,
}

impl PlayerKind {
    /// Returns the display name used in the game header.
    #[instrument]
    pub fn title(self) -> &'static str {
        match self {
            Self::Human => "The Human",
            Self::Random => "The Random AI Agent",
            Self::PeekAhead => "The Peek Ahead AI Agent",
            Self::Flawless => "The Flawless AI Agent",
        }
    }
}

/// Who plays each mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSlots {
    /// Player for X, who moves first.
    x: PlayerKind,
    /// Player for O.
    o: PlayerKind,
}

impl Default for PlayerSlots {
    fn default() -> Self {
        Self {
            x: PlayerKind::Human,
            o: PlayerKind::Flawless,
        }
    }
}

impl PlayerSlots {
    /// Player kind assigned to `mark`; `Empty` maps to X's slot.
    #[instrument]
    pub fn for_mark(&self, mark: Mark) -> PlayerKind {
        match mark {
            Mark::O => self.o,
            Mark::X | Mark::Empty => self.x,
        }
    }
}

/// Settings for one session of games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Board variant.
    game: Variant,

    /// Thinking time per decision for the flawless player, in milliseconds.
    time_budget_ms: u64,

    /// Seed for every random choice; fresh entropy when absent.
    seed: Option<u64>,

    /// Player assignment.
    players: PlayerSlots,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            game: Variant::Classic,
            time_budget_ms: default_time_budget_ms(),
            seed: None,
            players: PlayerSlots::default(),
        }
    }
}

#[instrument]
fn default_time_budget_ms() -> u64 {
    supertoe_core::search::DEFAULT_TIME_BUDGET.as_millis() as u64
}

/// Command-line values that replace file settings when present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Board variant.
    pub game: Option<Variant>,
    /// Player for X.
    pub x: Option<PlayerKind>,
    /// Player for O.
    pub o: Option<PlayerKind>,
    /// Thinking time in milliseconds.
    pub time_budget_ms: Option<u64>,
    /// Random seed.
    pub seed: Option<u64>,
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            game = %config.game,
            x = %config.players.x,
            o = %config.players.o,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(game) = overrides.game {
            self.game = game;
        }
        if let Some(x) = overrides.x {
            self.players.x = x;
        }
        if let Some(o) = overrides.o {
            self.players.o = o;
        }
        if let Some(ms) = overrides.time_budget_ms {
            self.time_budget_ms = ms;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    /// Thinking time as a duration.
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }

    /// Seed for the player holding `mark`, so X and O draw different streams.
    pub fn seed_for(&self, mark: Mark) -> Option<u64> {
        let salt = match mark {
            Mark::O => 1,
            Mark::X | Mark::Empty => 0,
        };
        self.seed.map(|seed| seed.wrapping_add(salt))
    }

    /// Search engine configured for the player holding `mark`.
    #[instrument(skip(self))]
    pub fn search_engine(&self, mark: Mark) -> SearchEngine {
        let tie_break = match self.seed_for(mark) {
            Some(seed) => TieBreak::seeded(seed),
            None => TieBreak::default(),
        };
        SearchEngine::new(Budget::Time(self.time_budget()), tie_break)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//=========================================================================
// Session Configuration
//=========================================================================
//
// Explicit configuration for a catalog session. Textual settings map to
// an enumerated set of keys; anything else is rejected.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::str::FromStr;

//=== ConfigKey ===========================================================

/// Recognized configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    ChannelCapacity,
    MaxEventsPerPump,
    MinSubcategoryChips,
    StripLabelCounts,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::ChannelCapacity,
        ConfigKey::MaxEventsPerPump,
        ConfigKey::MinSubcategoryChips,
        ConfigKey::StripLabelCounts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChannelCapacity => "channel_capacity",
            Self::MaxEventsPerPump => "max_events_per_pump",
            Self::MinSubcategoryChips => "min_subcategory_chips",
            Self::StripLabelCounts => "strip_label_counts",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//=== ConfigError =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Key is not one of [`ConfigKey`].
    UnknownKey(String),

    /// Value could not be parsed or is out of range for the key.
    InvalidValue { key: ConfigKey, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey(key) => write!(f, "Unknown configuration key '{}'", key),
            Self::InvalidValue { key, value } => {
                write!(f, "Invalid value '{}' for '{}'", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

//=== SessionConfig =======================================================

/// Tunables of a [`CatalogSession`](super::CatalogSession).
///
/// # Default Values
///
/// - **channel_capacity**: 64 collaborator events
/// - **max_events_per_pump**: 100
/// - **min_subcategory_chips**: 2
/// - **strip_label_counts**: true
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub channel_capacity: usize,
    pub max_events_per_pump: usize,
    pub min_subcategory_chips: usize,
    pub strip_label_counts: bool,
}

impl SessionConfig {
    /// Applies one textual setting.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownKey`] for unrecognized keys,
    /// [`ConfigError::InvalidValue`] for unparsable or zero counts. The
    /// config is unchanged on error.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let key: ConfigKey = key.parse()?;
        let invalid = || ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        };

        match key {
            ConfigKey::ChannelCapacity => {
                self.channel_capacity = parse_positive(value).ok_or_else(invalid)?;
            }
            ConfigKey::MaxEventsPerPump => {
                self.max_events_per_pump = parse_positive(value).ok_or_else(invalid)?;
            }
            ConfigKey::MinSubcategoryChips => {
                self.min_subcategory_chips = parse_positive(value).ok_or_else(invalid)?;
            }
            ConfigKey::StripLabelCounts => {
                self.strip_label_counts = value.trim().parse().map_err(|_| invalid())?;
            }
        }
        Ok(())
    }

    /// Builds a config from `(key, value)` pairs on top of the defaults.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            config.apply(key, value)?;
        }
        Ok(config)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 64,
            max_events_per_pump: 100,
            min_subcategory_chips: 2,
            strip_label_counts: true,
        }
    }
}

fn parse_positive(value: &str) -> Option<usize> {
    value.trim().parse().ok().filter(|&n: &usize| n > 0)
}

//=========================================================================
// Unit Tests
//=========================================================================

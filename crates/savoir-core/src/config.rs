use crate::constants::{DEFAULT_MINIMUM_BEAMS, MAX_MINIMUM_BEAMS, POOL_SIZE_FACTOR};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown intensity `{0}` (expected subtle, medium or strong)")]
    UnknownIntensity(String),
    #[error("unknown recycle policy `{0}` (expected columns or respawn)")]
    UnknownRecycle(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidNumber { key: &'static str, value: String },
}

/// Named opacity profile applied uniformly to every beam.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Intensity {
    Subtle,
    Medium,
    #[default]
    Strong,
}

impl Intensity {
    pub fn multiplier(self) -> f32 {
        match self {
            Intensity::Subtle => 0.7,
            Intensity::Medium => 0.85,
            Intensity::Strong => 1.0,
        }
    }
}

impl FromStr for Intensity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "subtle" => Ok(Intensity::Subtle),
            "medium" => Ok(Intensity::Medium),
            "strong" => Ok(Intensity::Strong),
            _ => Err(ConfigError::UnknownIntensity(s.to_string())),
        }
    }
}

/// What happens to a beam once it has scrolled off the top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecyclePolicy {
    /// Re-enter below the fold in one of three hue-banded columns.
    #[default]
    Columns,
    /// Draw a completely fresh beam anywhere in the spawn area.
    Respawn,
}

impl FromStr for RecyclePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "columns" => Ok(RecyclePolicy::Columns),
            "respawn" => Ok(RecyclePolicy::Respawn),
            _ => Err(ConfigError::UnknownRecycle(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub intensity: Intensity,
    pub minimum_beams: u32,
    pub recycle: RecyclePolicy,
    /// Fixed seed for reproducible fields; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            intensity: Intensity::default(),
            minimum_beams: DEFAULT_MINIMUM_BEAMS,
            recycle: RecyclePolicy::default(),
            seed: None,
        }
    }
}

impl FieldConfig {
    /// `round(1.5 * minimum_beams)`, with the minimum capped at
    /// `MAX_MINIMUM_BEAMS`.
    pub fn pool_size(&self) -> usize {
        let minimum = self.minimum_beams.min(MAX_MINIMUM_BEAMS);
        (minimum as f32 * POOL_SIZE_FACTOR).round() as usize
    }

    /// Build a config from string options (`intensity`, `min-beams`,
    /// `recycle`, `seed`). Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup("intensity") {
            cfg.intensity = v.parse()?;
        }
        if let Some(v) = lookup("min-beams") {
            let invalid = || ConfigError::InvalidNumber {
                key: "min-beams",
                value: v.clone(),
            };
            let minimum: u32 = v.trim().parse().map_err(|_| invalid())?;
            if minimum > MAX_MINIMUM_BEAMS {
                return Err(invalid());
            }
            cfg.minimum_beams = minimum;
        }
        if let Some(v) = lookup("recycle") {
            cfg.recycle = v.parse()?;
        }
        if let Some(v) = lookup("seed") {
            cfg.seed = Some(v.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                key: "seed",
                value: v.clone(),
            })?);
        }
        Ok(cfg)
    }
}

//! Session configuration
//!
//! Deserialises from partial JSON: missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_HEIGHT, DEFAULT_SPAWN_GROUP_SIZE, DEFAULT_SPEED_UP_MULTIPLIER,
    DEFAULT_SPEED_UP_RATE, DEFAULT_TICK_INTERVAL, DEFAULT_WIDTH, MAX_GROUP_SIZE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Board columns, odd and at least 3
    pub width: usize,
    /// Board rows, at least 1 and at least the group size
    pub height: usize,
    /// Tiles per spawned group, 1..=MAX_GROUP_SIZE
    pub spawn_group_size: usize,
    /// Initial seconds between ticks
    pub tick_interval: f64,
    /// Groups spawned between difficulty ramps
    pub speed_up_rate: u32,
    /// Tick interval factor per ramp, in (0, 1]
    pub speed_up_multiplier: f64,
    /// Seed for the default colour source
    pub seed: u32,
    /// Drop the whole group within the slam intent instead of one row per frame
    pub instant_slam: bool,
}

impl SessionConfig {
    pub fn new(
        width: usize,
        height: usize,
        spawn_group_size: usize,
        tick_interval: f64,
        speed_up_rate: u32,
        speed_up_multiplier: f64,
    ) -> Self {
        Self {
            width,
            height,
            spawn_group_size,
            tick_interval,
            speed_up_rate,
            speed_up_multiplier,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_instant_slam(mut self, instant_slam: bool) -> Self {
        self.instant_slam = instant_slam;
        self
    }

    /// Column new groups spawn in (the centre)
    pub fn spawner_column(&self) -> i32 {
        (self.width / 2) as i32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 3 {
            return Err(ConfigError::WidthTooSmall(self.width));
        }
        if self.width % 2 == 0 {
            return Err(ConfigError::EvenWidth(self.width));
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.spawn_group_size == 0 {
            return Err(ConfigError::EmptyGroup);
        }
        if self.spawn_group_size > MAX_GROUP_SIZE {
            return Err(ConfigError::GroupTooLarge(self.spawn_group_size));
        }
        if self.spawn_group_size > self.height {
            return Err(ConfigError::GroupTallerThanBoard {
                size: self.spawn_group_size,
                height: self.height,
            });
        }
        if !(self.tick_interval.is_finite() && self.tick_interval > 0.0) {
            return Err(ConfigError::TickInterval(self.tick_interval));
        }
        if self.speed_up_rate == 0 {
            return Err(ConfigError::SpeedUpRate);
        }
        if !(self.speed_up_multiplier > 0.0 && self.speed_up_multiplier <= 1.0) {
            return Err(ConfigError::SpeedUpMultiplier(self.speed_up_multiplier));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            spawn_group_size: DEFAULT_SPAWN_GROUP_SIZE,
            tick_interval: DEFAULT_TICK_INTERVAL,
            speed_up_rate: DEFAULT_SPEED_UP_RATE,
            speed_up_multiplier: DEFAULT_SPEED_UP_MULTIPLIER,
            seed: 1,
            instant_slam: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SessionConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.spawner_column(), 3);
    }

    #[test]
    fn test_rejections() {
        let base = SessionConfig::new(5, 6, 2, 0.5, 10, 0.9);
        assert_eq!(base.validate(), Ok(()));

        let cases = [
            (SessionConfig { width: 4, ..base.clone() }, ConfigError::EvenWidth(4)),
            (SessionConfig { width: 1, ..base.clone() }, ConfigError::WidthTooSmall(1)),
            (SessionConfig { height: 0, ..base.clone() }, ConfigError::ZeroHeight),
            (SessionConfig { spawn_group_size: 0, ..base.clone() }, ConfigError::EmptyGroup),
            (SessionConfig { spawn_group_size: 9, height: 20, ..base.clone() }, ConfigError::GroupTooLarge(9)),
            (
                SessionConfig { spawn_group_size: 7, ..base.clone() },
                ConfigError::GroupTallerThanBoard { size: 7, height: 6 },
            ),
            (SessionConfig { tick_interval: 0.0, ..base.clone() }, ConfigError::TickInterval(0.0)),
            (SessionConfig { speed_up_rate: 0, ..base.clone() }, ConfigError::SpeedUpRate),
            (
                SessionConfig { speed_up_multiplier: 1.5, ..base.clone() },
                ConfigError::SpeedUpMultiplier(1.5),
            ),
        ];
        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }

        assert!(SessionConfig { tick_interval: f64::NAN, ..base.clone() }.validate().is_err());
        assert!(SessionConfig { speed_up_multiplier: 0.0, ..base }.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"width": 5, "spawn_group_size": 1}"#).unwrap();
        assert_eq!(config.width, 5);
        assert_eq!(config.spawn_group_size, 1);
        assert_eq!(config.height, SessionConfig::default().height);
        assert!(!config.instant_slam);
    }
}

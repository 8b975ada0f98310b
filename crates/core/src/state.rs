//! Session bookkeeping - score, spawn total, tick interval, game over

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::scoring::{clear_points, next_tick_interval, should_speed_up};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub score: u32,
    /// Tiles spawned since the session started
    pub total_spawned: u64,
    /// Seconds between ticks; only ever shrinks
    pub tick_interval: f64,
    /// Terminal once set
    pub game_over: bool,
}

impl SessionState {
    pub fn new(tick_interval: f64) -> Self {
        Self {
            score: 0,
            total_spawned: 0,
            tick_interval,
            game_over: false,
        }
    }

    /// Add the points for a clear phase and return them
    pub fn award_clear(&mut self, cleared: usize) -> u32 {
        let points = clear_points(cleared);
        self.score = self.score.saturating_add(points);
        points
    }

    /// Count a successful spawn of `group_size` tiles and apply the difficulty ramp.
    /// Returns whether the tick interval shortened.
    pub fn record_spawn(&mut self, group_size: usize, speed_up_rate: u32, multiplier: f64) -> bool {
        self.total_spawned += group_size as u64;
        if !should_speed_up(self.total_spawned, speed_up_rate, group_size) {
            return false;
        }
        self.tick_interval = next_tick_interval(self.tick_interval, multiplier);
        info!(
            total_spawned = self.total_spawned,
            tick_interval = self.tick_interval,
            "speed up"
        );
        true
    }

    pub fn end(&mut self) {
        self.game_over = true;
    }
}

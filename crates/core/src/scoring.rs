//! Scoring module - clear points and the difficulty schedule
//!
//! Compatibility note:
//! A phase that clears exactly two saturated tiles awards three points; every other
//! count awards one point per tile. Only the pair is special, there is no general
//! combo curve.

use crate::types::PAIR_CLEAR_POINTS;

/// Points awarded for `cleared` saturated tiles removed in one clear phase
pub fn clear_points(cleared: usize) -> u32 {
    match cleared {
        2 => PAIR_CLEAR_POINTS,
        n => u32::try_from(n).unwrap_or(u32::MAX),
    }
}

/// Whether the tick interval shortens after a spawn brought the running total to
/// `total_spawned` tiles.
///
/// The ramp fires every `speed_up_rate` groups, i.e. whenever the total is a nonzero
/// multiple of `speed_up_rate * group_size`.
pub fn should_speed_up(total_spawned: u64, speed_up_rate: u32, group_size: usize) -> bool {
    let period = u64::from(speed_up_rate).saturating_mul(group_size as u64);
    period != 0 && total_spawned != 0 && total_spawned % period == 0
}

/// The tick interval after one ramp step
pub fn next_tick_interval(interval: f64, multiplier: f64) -> f64 {
    interval * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_bonus() {
        assert_eq!(clear_points(0), 0);
        assert_eq!(clear_points(1), 1);
        assert_eq!(clear_points(2), 3);
        assert_eq!(clear_points(3), 3);
        assert_eq!(clear_points(4), 4);
        assert_eq!(clear_points(9), 9);
    }

    #[test]
    fn test_speed_up_schedule() {
        // every 3 groups of 2 tiles
        assert!(!should_speed_up(0, 3, 2));
        assert!(!should_speed_up(2, 3, 2));
        assert!(!should_speed_up(4, 3, 2));
        assert!(should_speed_up(6, 3, 2));
        assert!(!should_speed_up(8, 3, 2));
        assert!(should_speed_up(12, 3, 2));
    }

    #[test]
    fn test_speed_up_degenerate_period() {
        assert!(!should_speed_up(6, 0, 2));
        assert!(!should_speed_up(6, 3, 0));
    }

    #[test]
    fn test_next_tick_interval_shortens() {
        let next = next_tick_interval(0.5, 0.9);
        assert!((next - 0.45).abs() < 1e-12);
        assert_eq!(next_tick_interval(0.5, 1.0), 0.5);
    }
}

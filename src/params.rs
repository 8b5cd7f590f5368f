use std::env;

use serde::{Deserialize, Serialize};

/// Faceoff ratings require a minimum combined sample of attempts.
pub const MIN_FACEOFF_ATTEMPTS: u32 = 10;

/// Pairs below this much shared ice time stay queryable but are excluded
/// from ranked best/worst lists.
pub const MIN_PAIR_TOI_SECS: u32 = 300;

/// Rebound ratio is meaningless on a handful of saves.
pub const MIN_REBOUND_SAVES: u32 = 50;

/// Defensemen are held to a lower offensive bar.
pub const DEFENSE_PRODUCTION_BOOST: f64 = 1.3;

// Chemistry percentages cluster near 50%, so the heat scale is compressed
// to [35, 65] instead of spanning the full 0–100 range.
pub const HEAT_PCT_FLOOR: f64 = 35.0;
pub const HEAT_PCT_CEIL: f64 = 65.0;

/// Weighted-sum parameters for the composite scores. Kept in one place so
/// the displayed rankings can be tuned (or replayed) without hunting
/// through call sites.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub points: f64,
    pub luck: f64,
    pub possession: f64,
    pub volume: f64,
    /// Bonus/penalty per year away from `age_peak`, younger scoring higher.
    pub age_per_year: f64,
    pub age_peak: f64,
    /// Bound on the age term so it cannot dominate production.
    pub age_cap: f64,
}

impl ScoreWeights {
    pub fn rookie() -> Self {
        Self {
            points: 2.0,
            luck: 1.5,
            possession: 0.4,
            volume: 0.8,
            age_per_year: 1.0,
            age_peak: 22.0,
            age_cap: 5.0,
        }
    }

    pub fn breakout() -> Self {
        Self {
            points: 2.0,
            luck: 2.0,
            possession: 0.5,
            volume: 1.2,
            age_per_year: 0.8,
            age_peak: 23.0,
            age_cap: 4.0,
        }
    }

    /// Rookie weights with `RINKBOARD_W_*` environment overrides applied.
    pub fn rookie_from_env() -> Self {
        let mut w = Self::rookie();
        if let Some(v) = env_f64("RINKBOARD_W_LUCK") {
            w.luck = v;
        }
        if let Some(v) = env_f64("RINKBOARD_W_POSSESSION") {
            w.possession = v;
        }
        if let Some(v) = env_f64("RINKBOARD_W_VOLUME") {
            w.volume = v;
        }
        w
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::rookie()
    }
}

fn env_f64(name: &str) -> Option<f64> {
    env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rookie_base_weight_doubles_points() {
        assert_eq!(ScoreWeights::rookie().points, 2.0);
        assert_eq!(ScoreWeights::default().points, 2.0);
    }

    #[test]
    fn weights_round_trip_json() {
        let w = ScoreWeights::breakout();
        let raw = serde_json::to_string(&w).unwrap();
        let back: ScoreWeights = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.volume, w.volume);
        assert_eq!(back.age_peak, w.age_peak);
    }
}

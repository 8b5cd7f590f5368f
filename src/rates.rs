//! Single-pass rate and ratio helpers shared by the tier rater, the
//! composite scores, and the leaderboard assembly.

/// Count scaled to a per-60-minutes rate. No ice time yields 0, not NaN.
pub fn per_sixty(count: u32, toi_secs: u32) -> f64 {
    if toi_secs == 0 {
        return 0.0;
    }
    count as f64 * 3600.0 / toi_secs as f64
}

/// Shooting percentage on the [0, 100] scale. None without a shot on record.
pub fn shooting_pct(goals: u32, shots: u32) -> Option<f64> {
    if shots == 0 {
        return None;
    }
    Some(goals as f64 / shots as f64 * 100.0)
}

/// Faceoff win percentage over combined attempts.
pub fn faceoff_pct(won: u32, lost: u32) -> Option<f64> {
    let total = won + lost;
    if total == 0 {
        return None;
    }
    Some(won as f64 / total as f64 * 100.0)
}

/// Save percentage on the [0, 100] scale.
pub fn save_pct(saves: u32, shots_against: u32) -> Option<f64> {
    if shots_against == 0 {
        return None;
    }
    Some(saves as f64 / shots_against as f64 * 100.0)
}

/// PDO: shooting% + save%, nominally centered at 100. A luck/sustainability
/// indicator, so both inputs must actually exist.
pub fn pdo(shooting_pct: Option<f64>, save_pct: Option<f64>) -> Option<f64> {
    Some(shooting_pct? + save_pct?)
}

/// Goals above (positive) or below (negative) the shot-quality model.
pub fn xg_differential(goals: u32, expected_goals: Option<f64>) -> Option<f64> {
    expected_goals.map(|xg| goals as f64 - xg)
}

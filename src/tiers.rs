use once_cell::sync::Lazy;

use crate::params::MIN_FACEOFF_ATTEMPTS;
use crate::rates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierStyle {
    Elite,
    Strong,
    Average,
    Below,
    Poor,
}

/// One ordered threshold band: the first band whose `min` the value meets
/// wins, so tables are listed highest threshold first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierBand {
    pub min: f64,
    pub label: &'static str,
    pub style: TierStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub label: &'static str,
    pub style: TierStyle,
}

/// Classify `value` against ordered `bands`. None means "no data": a missing
/// value never rates, and neither does a value no band covers.
pub fn rate(value: Option<f64>, bands: &[TierBand]) -> Option<Tier> {
    let value = value?;
    if !value.is_finite() {
        return None;
    }
    bands.iter().find(|band| value >= band.min).map(|band| Tier {
        label: band.label,
        style: band.style,
    })
}

/// Faceoff rating. Requires a combined sample of at least
/// `MIN_FACEOFF_ATTEMPTS`; a 2-for-2 night is not an elite faceoff man.
pub fn rate_faceoffs(won: u32, lost: u32) -> Option<Tier> {
    if won + lost < MIN_FACEOFF_ATTEMPTS {
        return None;
    }
    rate(rates::faceoff_pct(won, lost), &FACEOFF_BANDS)
}

/// Takeaway/giveaway rating. A zero giveaway denominator is statistically
/// meaningless, not infinitely good.
pub fn rate_turnovers(takeaways: u32, giveaways: u32) -> Option<Tier> {
    if giveaways == 0 {
        return None;
    }
    rate(Some(takeaways as f64 / giveaways as f64), &TURNOVER_BANDS)
}

pub fn rate_shooting(goals: u32, shots: u32) -> Option<Tier> {
    rate(rates::shooting_pct(goals, shots), &SHOOTING_BANDS)
}

pub fn rate_save_pct(saves: u32, shots_against: u32) -> Option<Tier> {
    rate(rates::save_pct(saves, shots_against), &SAVE_PCT_BANDS)
}

pub static FACEOFF_BANDS: Lazy<Vec<TierBand>> = Lazy::new(|| {
    vec![
        band(55.0, "Elite", TierStyle::Elite),
        band(52.0, "Strong", TierStyle::Strong),
        band(48.0, "Average", TierStyle::Average),
        band(45.0, "Below average", TierStyle::Below),
        band(f64::NEG_INFINITY, "Poor", TierStyle::Poor),
    ]
});

pub static TURNOVER_BANDS: Lazy<Vec<TierBand>> = Lazy::new(|| {
    vec![
        band(2.0, "Elite", TierStyle::Elite),
        band(1.5, "Strong", TierStyle::Strong),
        band(1.0, "Average", TierStyle::Average),
        band(0.5, "Below average", TierStyle::Below),
        band(f64::NEG_INFINITY, "Poor", TierStyle::Poor),
    ]
});

pub static SHOOTING_BANDS: Lazy<Vec<TierBand>> = Lazy::new(|| {
    vec![
        band(15.0, "Elite", TierStyle::Elite),
        band(12.0, "Strong", TierStyle::Strong),
        band(9.0, "Average", TierStyle::Average),
        band(6.0, "Below average", TierStyle::Below),
        band(f64::NEG_INFINITY, "Poor", TierStyle::Poor),
    ]
});

pub static SAVE_PCT_BANDS: Lazy<Vec<TierBand>> = Lazy::new(|| {
    vec![
        band(92.0, "Elite", TierStyle::Elite),
        band(91.0, "Strong", TierStyle::Strong),
        band(90.0, "Average", TierStyle::Average),
        band(88.5, "Below average", TierStyle::Below),
        band(f64::NEG_INFINITY, "Poor", TierStyle::Poor),
    ]
});

fn band(min: f64, label: &'static str, style: TierStyle) -> TierBand {
    TierBand { min, label, style }
}

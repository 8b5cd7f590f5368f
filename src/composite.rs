use chrono::NaiveDate;

use crate::params::{DEFENSE_PRODUCTION_BOOST, ScoreWeights};
use crate::rates;
use crate::rows::{Position, SkaterRow};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreContext {
    pub age_adjust: bool,
    pub position_adjust: bool,
    /// Date the age is measured at. Defaults to today, which is what the
    /// live dashboard wants; tests pin it.
    pub season_cutoff: Option<NaiveDate>,
}

/// Weighted composite of production, shot-quality luck, possession, and
/// shot volume. Total over its input domain: a row with nothing but games
/// played and points still scores, and every missing optional term
/// contributes zero instead of nulling the whole number out.
pub fn composite_score(row: &SkaterRow, weights: &ScoreWeights, ctx: &ScoreContext) -> f64 {
    let mut production = row.points() as f64 * weights.points;
    if let Some(diff) = rates::xg_differential(row.goals, row.expected_goals) {
        production += diff * weights.luck;
    }
    production += rates::per_sixty(row.shots, row.toi_secs) * weights.volume;

    if ctx.position_adjust && row.position == Position::Defense {
        production *= DEFENSE_PRODUCTION_BOOST;
    }

    let mut score = production;
    if let Some(share) = row.corsi_for {
        score += share.pct() * weights.possession;
    }
    if ctx.age_adjust {
        score += age_bonus(row.birth_date.as_deref(), ctx.season_cutoff, weights);
    }

    if score.is_finite() { score } else { 0.0 }
}

pub fn rookie_score(row: &SkaterRow, ctx: &ScoreContext) -> f64 {
    composite_score(row, &ScoreWeights::rookie(), ctx)
}

pub fn breakout_score(row: &SkaterRow, ctx: &ScoreContext) -> f64 {
    composite_score(row, &ScoreWeights::breakout(), ctx)
}

// Monotonically decreasing in age, clamped so it cannot dominate the
// production terms. An unparseable or absent birth date contributes zero.
fn age_bonus(birth_date: Option<&str>, cutoff: Option<NaiveDate>, weights: &ScoreWeights) -> f64 {
    let Some(raw) = birth_date else {
        return 0.0;
    };
    let Ok(born) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") else {
        return 0.0;
    };
    let cutoff = cutoff.unwrap_or_else(|| chrono::Utc::now().date_naive());
    let Some(age) = cutoff.years_since(born) else {
        return 0.0;
    };
    ((weights.age_peak - age as f64) * weights.age_per_year).clamp(-weights.age_cap, weights.age_cap)
}

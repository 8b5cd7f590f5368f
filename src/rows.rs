use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Center,
    Wing,
    Defense,
    Goalie,
}

impl Position {
    /// Map an API position code ("C", "LW", "RW", "D", "G") to a category.
    pub fn from_code(raw: &str) -> Option<Position> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "C" => Some(Position::Center),
            "L" | "R" | "LW" | "RW" | "W" | "F" => Some(Position::Wing),
            "D" | "LD" | "RD" => Some(Position::Defense),
            "G" => Some(Position::Goalie),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Position::Center => "C",
            Position::Wing => "W",
            Position::Defense => "D",
            Position::Goalie => "G",
        }
    }
}

/// An on-ice share stored as a fraction in [0, 1].
///
/// Upstream sources mix fraction-scaled and percent-scaled fields. Keeping the
/// fraction behind its own type means every conversion is spelled out at the
/// call site, and a true 1% share (0.01) can never be confused with 100%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Share(f64);

impl Share {
    pub fn from_fraction(v: f64) -> Option<Share> {
        if v.is_finite() && (0.0..=1.0).contains(&v) {
            Some(Share(v))
        } else {
            None
        }
    }

    pub fn from_percent(v: f64) -> Option<Share> {
        Share::from_fraction(v / 100.0)
    }

    pub fn fraction(self) -> f64 {
        self.0
    }

    /// The share on the [0, 100] percentage scale.
    pub fn pct(self) -> f64 {
        self.0 * 100.0
    }
}

/// One skater-season record as supplied by the stats API. Never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkaterRow {
    pub id: u32,
    pub name: String,
    pub team: String,
    pub position: Position,
    pub games_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub shots: u32,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub blocks: u32,
    #[serde(default)]
    pub faceoffs_won: u32,
    #[serde(default)]
    pub faceoffs_lost: u32,
    #[serde(default)]
    pub takeaways: u32,
    #[serde(default)]
    pub giveaways: u32,
    #[serde(default)]
    pub toi_secs: u32,
    #[serde(default)]
    pub rookie: bool,
    // Model-driven fields are nullable when the underlying sample is too small.
    #[serde(default)]
    pub expected_goals: Option<f64>,
    #[serde(default)]
    pub corsi_for: Option<Share>,
    #[serde(default)]
    pub on_ice_xg: Option<Share>,
    // ISO date string; parsed on use.
    #[serde(default)]
    pub birth_date: Option<String>,
}

impl SkaterRow {
    pub fn points(&self) -> u32 {
        self.goals + self.assists
    }
}

/// One goalie-season record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalieRow {
    pub id: u32,
    pub name: String,
    pub team: String,
    pub games_played: u32,
    pub starts: u32,
    /// Games the goalie's team has played, for workload share.
    #[serde(default)]
    pub team_games: u32,
    pub shots_against: u32,
    pub saves: u32,
    pub goals_against: u32,
    #[serde(default)]
    pub rebounds_allowed: u32,
    #[serde(default)]
    pub toi_secs: u32,
    #[serde(default)]
    pub expected_goals_against: Option<f64>,
}

/// Aggregate on-ice outcomes for two players sharing ice time in one
/// (team, season, situation) slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChemistryPairRow {
    pub player_a: u32,
    pub player_b: u32,
    pub toi_secs: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    #[serde(default)]
    pub shot_attempts_for: u32,
    #[serde(default)]
    pub shot_attempts_against: u32,
    #[serde(default)]
    pub xg_share: Option<Share>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_rejects_out_of_range() {
        assert!(Share::from_fraction(0.53).is_some());
        assert!(Share::from_fraction(1.0).is_some());
        assert!(Share::from_fraction(-0.1).is_none());
        assert!(Share::from_fraction(1.7).is_none());
        assert!(Share::from_fraction(f64::NAN).is_none());
    }

    #[test]
    fn share_percent_scale_is_explicit() {
        // A true 1% share stays 1%, it is never reinterpreted as 100%.
        let one_percent = Share::from_percent(1.0).unwrap();
        assert!((one_percent.fraction() - 0.01).abs() < 1e-12);
        assert!((one_percent.pct() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn position_codes_round_trip_categories() {
        assert_eq!(Position::from_code("lw"), Some(Position::Wing));
        assert_eq!(Position::from_code("D"), Some(Position::Defense));
        assert_eq!(Position::from_code("X"), None);
    }
}

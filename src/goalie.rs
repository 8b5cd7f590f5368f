use once_cell::sync::Lazy;

use crate::params::MIN_REBOUND_SAVES;
use crate::rates;
use crate::rows::GoalieRow;
use crate::tiers::{self, Tier, TierBand, TierStyle};

/// Share of the team's games this goalie started, on the [0, 100] scale.
pub fn start_share(row: &GoalieRow) -> Option<f64> {
    if row.team_games == 0 {
        return None;
    }
    Some(row.starts as f64 / row.team_games as f64 * 100.0)
}

pub fn saves_per_game(row: &GoalieRow) -> f64 {
    if row.games_played == 0 {
        return 0.0;
    }
    row.saves as f64 / row.games_played as f64
}

/// Goals saved above expected: positive means the goalie beat the model.
pub fn gsax(row: &GoalieRow) -> Option<f64> {
    row.expected_goals_against
        .map(|xga| xga - row.goals_against as f64)
}

/// Rebounds allowed per save. None below the save-sample floor; a backup
/// with a dozen saves does not have a rebound problem, he has a small n.
pub fn rebound_ratio(row: &GoalieRow) -> Option<f64> {
    if row.saves < MIN_REBOUND_SAVES {
        return None;
    }
    Some(row.rebounds_allowed as f64 / row.saves as f64)
}

pub fn save_pct(row: &GoalieRow) -> Option<f64> {
    rates::save_pct(row.saves, row.shots_against)
}

pub fn workload_tier(row: &GoalieRow) -> Option<Tier> {
    tiers::rate(start_share(row), &WORKLOAD_BANDS)
}

pub static WORKLOAD_BANDS: Lazy<Vec<TierBand>> = Lazy::new(|| {
    vec![
        TierBand {
            min: 65.0,
            label: "Workhorse",
            style: TierStyle::Elite,
        },
        TierBand {
            min: 50.0,
            label: "Starter",
            style: TierStyle::Strong,
        },
        TierBand {
            min: 35.0,
            label: "Tandem",
            style: TierStyle::Average,
        },
        TierBand {
            min: 15.0,
            label: "Backup",
            style: TierStyle::Below,
        },
        TierBand {
            min: f64::NEG_INFINITY,
            label: "Fringe",
            style: TierStyle::Poor,
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    fn goalie(starts: u32, team_games: u32, saves: u32, rebounds: u32) -> GoalieRow {
        GoalieRow {
            id: 30,
            name: "Test Goalie".to_string(),
            team: "BOS".to_string(),
            games_played: starts,
            starts,
            team_games,
            shots_against: saves + 10,
            saves,
            goals_against: 10,
            rebounds_allowed: rebounds,
            toi_secs: starts * 3600,
            expected_goals_against: None,
        }
    }

    #[test]
    fn start_share_needs_team_games() {
        assert_eq!(start_share(&goalie(10, 0, 200, 20)), None);
        let share = start_share(&goalie(30, 50, 700, 60)).unwrap();
        assert!((share - 60.0).abs() < 1e-9);
    }

    #[test]
    fn workload_tiers() {
        assert_eq!(workload_tier(&goalie(40, 50, 900, 80)).unwrap().label, "Workhorse");
        assert_eq!(workload_tier(&goalie(20, 50, 500, 40)).unwrap().label, "Tandem");
        assert_eq!(workload_tier(&goalie(10, 0, 200, 20)), None);
    }

    #[test]
    fn rebound_ratio_guards_small_samples() {
        assert_eq!(rebound_ratio(&goalie(5, 50, 49, 10)), None);
        let ratio = rebound_ratio(&goalie(30, 50, 500, 50)).unwrap();
        assert!((ratio - 0.10).abs() < 1e-9);
    }

    #[test]
    fn gsax_sign_follows_the_model() {
        let mut g = goalie(30, 50, 700, 60);
        g.expected_goals_against = Some(14.5);
        assert!((gsax(&g).unwrap() - 4.5).abs() < 1e-9);
        g.expected_goals_against = None;
        assert_eq!(gsax(&g), None);
    }

    #[test]
    fn saves_per_game_zero_games() {
        let mut g = goalie(0, 50, 0, 0);
        g.games_played = 0;
        assert_eq!(saves_per_game(&g), 0.0);
    }
}

//! Seeded sample league used by the demo binary and the benches. Shapes and
//! magnitudes are plausible rather than real; nothing here touches the
//! network.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::percentile::{ThresholdBook, ThresholdTable};
use crate::rates;
use crate::rows::{ChemistryPairRow, GoalieRow, Position, Share, SkaterRow};

const TEAMS: [&str; 8] = ["BOS", "TOR", "NYR", "MTL", "DET", "CHI", "EDM", "COL"];

const FIRST_NAMES: [&str; 16] = [
    "Alex", "Brady", "Cole", "Dylan", "Elias", "Filip", "Gabe", "Henri", "Ivan", "Jake", "Kirill",
    "Liam", "Mats", "Nico", "Owen", "Pavel",
];

const LAST_NAMES: [&str; 16] = [
    "Andersson", "Bouchard", "Carlsson", "Dubois", "Ekholm", "Fontaine", "Girard", "Holmberg",
    "Ivanov", "Jarvis", "Kubalik", "Lindgren", "Moreau", "Novak", "Ostapenko", "Petrov",
];

#[derive(Debug, Clone)]
pub struct SampleLeague {
    pub skaters: Vec<SkaterRow>,
    pub goalies: Vec<GoalieRow>,
    pub pairs: Vec<ChemistryPairRow>,
    pub thresholds: ThresholdBook,
}

/// Build a deterministic sample league. The same seed always yields the
/// same league, so demo output and bench inputs are reproducible.
pub fn sample_league(seed: u64, skater_count: usize) -> SampleLeague {
    let mut rng = StdRng::seed_from_u64(seed);

    let skaters: Vec<SkaterRow> = (0..skater_count)
        .map(|i| sample_skater(&mut rng, i as u32 + 1))
        .collect();
    let goalies: Vec<GoalieRow> = TEAMS
        .iter()
        .enumerate()
        .flat_map(|(t, team)| {
            let starter_id = 9000 + t as u32 * 2;
            [
                sample_goalie(&mut rng, starter_id, team, true),
                sample_goalie(&mut rng, starter_id + 1, team, false),
            ]
        })
        .collect();
    let pairs = sample_pairs(&mut rng, &skaters);
    let thresholds = sample_thresholds(&skaters);

    SampleLeague {
        skaters,
        goalies,
        pairs,
        thresholds,
    }
}

fn sample_skater(rng: &mut StdRng, id: u32) -> SkaterRow {
    let position = match id % 6 {
        0 | 1 => Position::Wing,
        2 | 3 => Position::Center,
        _ => Position::Defense,
    };
    let rookie = rng.gen_bool(0.25);
    let games_played = rng.gen_range(20..=62);
    let toi_per_game = match position {
        Position::Defense => rng.gen_range(900..=1500),
        _ => rng.gen_range(720..=1320),
    };
    let toi_secs = games_played * toi_per_game;

    let shots_per_game = rng.gen_range(1.0..4.0_f64);
    let shots = (games_played as f64 * shots_per_game) as u32;
    let shooting = rng.gen_range(0.05..0.16);
    let goals = (shots as f64 * shooting) as u32;
    let assists = (goals as f64 * rng.gen_range(0.8..1.8)) as u32;

    let takes_faceoffs = position == Position::Center;
    let faceoffs_total = if takes_faceoffs {
        games_played * rng.gen_range(8..22)
    } else {
        rng.gen_range(0..8)
    };
    let faceoffs_won = (faceoffs_total as f64 * rng.gen_range(0.40..0.60)) as u32;

    SkaterRow {
        id,
        name: sample_name(rng),
        team: TEAMS[(id as usize) % TEAMS.len()].to_string(),
        position,
        games_played,
        goals,
        assists,
        shots,
        hits: games_played * rng.gen_range(0..4),
        blocks: games_played * rng.gen_range(0..3),
        faceoffs_won,
        faceoffs_lost: faceoffs_total - faceoffs_won,
        takeaways: rng.gen_range(5..45),
        giveaways: rng.gen_range(5..50),
        toi_secs,
        rookie,
        // Every tenth skater has too small a model sample, like the real feed.
        expected_goals: if id % 10 == 0 {
            None
        } else {
            Some(goals as f64 * rng.gen_range(0.7..1.3))
        },
        corsi_for: Share::from_fraction(rng.gen_range(0.40..0.60)),
        on_ice_xg: Share::from_fraction(rng.gen_range(0.40..0.60)),
        birth_date: Some(sample_birth_date(rng, rookie)),
    }
}

fn sample_goalie(rng: &mut StdRng, id: u32, team: &str, starter: bool) -> GoalieRow {
    let team_games = 62;
    let starts = if starter {
        rng.gen_range(35..=50)
    } else {
        rng.gen_range(10..=24)
    };
    let shots_against = starts * rng.gen_range(25..=34);
    let save_rate = rng.gen_range(0.885..0.925);
    let saves = (shots_against as f64 * save_rate) as u32;
    GoalieRow {
        id,
        name: sample_name(rng),
        team: team.to_string(),
        games_played: starts + rng.gen_range(0..4),
        starts,
        team_games,
        shots_against,
        saves,
        goals_against: shots_against - saves,
        rebounds_allowed: (saves as f64 * rng.gen_range(0.06..0.14)) as u32,
        toi_secs: starts * 3600,
        expected_goals_against: Some((shots_against - saves) as f64 * rng.gen_range(0.85..1.15)),
    }
}

fn sample_pairs(rng: &mut StdRng, skaters: &[SkaterRow]) -> Vec<ChemistryPairRow> {
    let mut pairs = Vec::new();
    for team in TEAMS {
        let ids: Vec<u32> = skaters
            .iter()
            .filter(|s| s.team == team)
            .map(|s| s.id)
            .collect();
        for (i, &a) in ids.iter().enumerate() {
            for &b in ids.iter().skip(i + 1) {
                // Not every teammate combination shares meaningful ice.
                if !rng.gen_bool(0.45) {
                    continue;
                }
                let toi_secs = rng.gen_range(60..6000);
                let attempts_for = toi_secs / rng.gen_range(50..90);
                let attempts_against = toi_secs / rng.gen_range(50..90);
                pairs.push(ChemistryPairRow {
                    player_a: a,
                    player_b: b,
                    toi_secs,
                    goals_for: rng.gen_range(0..6),
                    goals_against: rng.gen_range(0..6),
                    shot_attempts_for: attempts_for,
                    shot_attempts_against: attempts_against,
                    xg_share: if rng.gen_bool(0.9) {
                        Share::from_fraction(rng.gen_range(0.36..0.64))
                    } else {
                        None
                    },
                });
            }
        }
    }
    pairs
}

// Decile boundaries computed from the generated league itself, the way the
// real tables are built upstream from the full player population.
fn sample_thresholds(skaters: &[SkaterRow]) -> ThresholdBook {
    let points_per_60: Vec<f64> = skaters
        .iter()
        .map(|s| rates::per_sixty(s.points(), s.toi_secs))
        .collect();
    let shots_per_60: Vec<f64> = skaters
        .iter()
        .map(|s| rates::per_sixty(s.shots, s.toi_secs))
        .collect();
    ThresholdBook::from_tables(vec![
        decile_table("pointsPer60", &points_per_60),
        decile_table("shotsPer60", &shots_per_60),
    ])
}

fn decile_table(metric: &str, values: &[f64]) -> ThresholdTable {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    let bounds = if sorted.is_empty() {
        Vec::new()
    } else {
        (0..10)
            .map(|d| sorted[(d * sorted.len()) / 10])
            .collect()
    };
    ThresholdTable {
        metric: metric.to_string(),
        season: "2025-26".to_string(),
        bounds,
    }
}

fn sample_name(rng: &mut StdRng) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}

fn sample_birth_date(rng: &mut StdRng, rookie: bool) -> String {
    let year = if rookie {
        rng.gen_range(2003..=2007)
    } else {
        rng.gen_range(1988..=2002)
    };
    format!(
        "{year}-{:02}-{:02}",
        rng.gen_range(1..=12),
        rng.gen_range(1..=28)
    )
}

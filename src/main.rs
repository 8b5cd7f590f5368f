use std::env;

use anyhow::Result;

use rinkboard::chemistry::ChemistryLookup;
use rinkboard::composite::ScoreContext;
use rinkboard::goalie;
use rinkboard::heat::{SELF_COLOR, heat_color};
use rinkboard::params::ScoreWeights;
use rinkboard::rankings::{self, default_radar_axes};
use rinkboard::rates;
use rinkboard::rows::Share;
use rinkboard::sample_feed::sample_league;
use rinkboard::tiers;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let seed = env_u64("SAMPLE_SEED", 20260407);
    let skater_count = env_usize("SAMPLE_SKATERS", 120).clamp(20, 2000);

    let league = sample_league(seed, skater_count);
    let weights = ScoreWeights::rookie_from_env();
    let ctx = ScoreContext {
        age_adjust: true,
        position_adjust: true,
        season_cutoff: None,
    };

    println!("rinkboard sample report (seed {seed}, {skater_count} skaters)");

    println!("\n== Rookie board ==");
    let board = rankings::rookie_rankings(&league.skaters, &weights, &ctx);
    for (i, entry) in board.iter().take(10).enumerate() {
        let decile = league
            .skaters
            .iter()
            .find(|s| s.id == entry.player_id)
            .and_then(|r| {
                league
                    .thresholds
                    .percentile("pointsPer60", rates::per_sixty(r.points(), r.toi_secs))
            })
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>2}. {:<20} {:<4} score {:>6.1}  pts {:>3}  gp {:>2}  p/60 decile {}",
            i + 1,
            entry.name,
            entry.team,
            entry.score,
            entry.points,
            entry.games_played,
            decile
        );
    }

    println!("\n== Faceoff tiers ==");
    for row in league
        .skaters
        .iter()
        .filter(|s| s.faceoffs_won + s.faceoffs_lost > 0)
        .take(8)
    {
        let label = tiers::rate_faceoffs(row.faceoffs_won, row.faceoffs_lost)
            .map(|t| t.label)
            .unwrap_or("no data");
        let pct = rates::faceoff_pct(row.faceoffs_won, row.faceoffs_lost)
            .map(|p| format!("{p:>5.1}%"))
            .unwrap_or_else(|| "    -".to_string());
        println!("{:<20} {:<4} {}  {}", row.name, row.team, pct, label);
    }

    println!("\n== Goalie workload ==");
    for g in league.goalies.iter().take(8) {
        let share = goalie::start_share(g)
            .map(|s| format!("{s:>5.1}%"))
            .unwrap_or_else(|| "    -".to_string());
        let tier = goalie::workload_tier(g)
            .map(|t| t.label)
            .unwrap_or("no data");
        let gsax = goalie::gsax(g)
            .map(|v| format!("{v:+.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<20} {:<4} starts {}  {:<9}  gsax {}",
            g.name, g.team, share, tier, gsax
        );
    }

    println!("\n== Chemistry ==");
    let lookup = ChemistryLookup::build(league.pairs.clone());
    for p in rankings::best_pairs(&lookup, 5) {
        let pct = p.xg_share.map(Share::pct);
        let color = heat_color(pct, true);
        println!(
            "{:>5} + {:<5} xGF {}  toi {:>4}s  {}",
            p.player_a,
            p.player_b,
            pct.map(|v| format!("{v:.1}%"))
                .unwrap_or_else(|| "-".to_string()),
            p.toi_secs,
            color.css()
        );
    }
    println!("diagonal fill: {}", SELF_COLOR.css());

    if let [a, b, ..] = board.as_slice() {
        println!("\n== Radar: {} vs {} ==", a.name, b.name);
        let profile = rankings::radar_profile(
            &league.skaters,
            &[a.player_id, b.player_id],
            &default_radar_axes(),
        );
        for axis in &profile.axes {
            println!(
                "{:<14} {:>6.2} | {:>6.2}",
                axis.label, axis.values[0], axis.values[1]
            );
        }
    }

    Ok(())
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|val| val.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|val| val.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

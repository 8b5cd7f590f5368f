//! Parsers for the dashboard API payloads. Transport lives elsewhere; this
//! module only owns the JSON shape and its conversion into typed rows.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::percentile::{ThresholdBook, ThresholdTable};
use crate::rows::{ChemistryPairRow, GoalieRow, Position, Share, SkaterRow};

#[derive(Debug, Deserialize)]
struct RawSkaterPayload {
    #[serde(alias = "skaters")]
    data: Vec<RawSkaterRow>,
}

// Share-typed fields are declared fractions by the payload schema; the unit
// is part of the contract, never guessed from the value's magnitude.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSkaterRow {
    player_id: u32,
    #[serde(alias = "skaterFullName")]
    name: String,
    #[serde(alias = "teamAbbrev", default)]
    team: String,
    #[serde(alias = "positionCode")]
    position: String,
    games_played: u32,
    goals: u32,
    assists: u32,
    shots: u32,
    #[serde(default)]
    hits: u32,
    #[serde(default)]
    blocks: u32,
    #[serde(default)]
    faceoffs_won: u32,
    #[serde(default)]
    faceoffs_lost: u32,
    #[serde(default)]
    takeaways: u32,
    #[serde(default)]
    giveaways: u32,
    #[serde(alias = "timeOnIceSecs", default)]
    toi_secs: u32,
    #[serde(alias = "isRookie", default)]
    rookie: bool,
    #[serde(default)]
    expected_goals: Option<f64>,
    #[serde(alias = "corsiForFraction", default)]
    corsi_for: Option<f64>,
    #[serde(alias = "onIceXgFraction", default)]
    on_ice_xg: Option<f64>,
    #[serde(default)]
    birth_date: Option<String>,
}

/// Parse a skater payload. Rows with a position code we do not chart are
/// dropped rather than failing the whole payload.
pub fn parse_skater_rows_json(raw: &str) -> Result<Vec<SkaterRow>> {
    let payload: RawSkaterPayload =
        serde_json::from_str(raw).context("parse skater payload")?;
    Ok(payload
        .data
        .into_iter()
        .filter_map(|r| {
            let position = Position::from_code(&r.position)?;
            Some(SkaterRow {
                id: r.player_id,
                name: r.name,
                team: r.team,
                position,
                games_played: r.games_played,
                goals: r.goals,
                assists: r.assists,
                shots: r.shots,
                hits: r.hits,
                blocks: r.blocks,
                faceoffs_won: r.faceoffs_won,
                faceoffs_lost: r.faceoffs_lost,
                takeaways: r.takeaways,
                giveaways: r.giveaways,
                toi_secs: r.toi_secs,
                rookie: r.rookie,
                expected_goals: r.expected_goals.filter(|v| v.is_finite()),
                corsi_for: r.corsi_for.and_then(Share::from_fraction),
                on_ice_xg: r.on_ice_xg.and_then(Share::from_fraction),
                birth_date: r.birth_date,
            })
        })
        .collect())
}

#[derive(Debug, Deserialize)]
struct RawGoaliePayload {
    #[serde(alias = "goalies")]
    data: Vec<RawGoalieRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGoalieRow {
    player_id: u32,
    #[serde(alias = "goalieFullName")]
    name: String,
    #[serde(alias = "teamAbbrev", default)]
    team: String,
    games_played: u32,
    #[serde(alias = "gamesStarted", default)]
    starts: u32,
    #[serde(default)]
    team_games: u32,
    shots_against: u32,
    saves: u32,
    goals_against: u32,
    #[serde(default)]
    rebounds_allowed: u32,
    #[serde(alias = "timeOnIceSecs", default)]
    toi_secs: u32,
    #[serde(default)]
    expected_goals_against: Option<f64>,
}

pub fn parse_goalie_rows_json(raw: &str) -> Result<Vec<GoalieRow>> {
    let payload: RawGoaliePayload =
        serde_json::from_str(raw).context("parse goalie payload")?;
    Ok(payload
        .data
        .into_iter()
        .map(|r| GoalieRow {
            id: r.player_id,
            name: r.name,
            team: r.team,
            games_played: r.games_played,
            starts: r.starts,
            team_games: r.team_games,
            shots_against: r.shots_against,
            saves: r.saves,
            goals_against: r.goals_against,
            rebounds_allowed: r.rebounds_allowed,
            toi_secs: r.toi_secs,
            expected_goals_against: r.expected_goals_against.filter(|v| v.is_finite()),
        })
        .collect())
}

#[derive(Debug, Deserialize)]
struct RawChemistryPayload {
    #[serde(alias = "pairs")]
    data: Vec<RawChemistryRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChemistryRow {
    player_a: u32,
    player_b: u32,
    #[serde(alias = "sharedToiSecs")]
    toi_secs: u32,
    goals_for: u32,
    goals_against: u32,
    #[serde(default)]
    shot_attempts_for: u32,
    #[serde(default)]
    shot_attempts_against: u32,
    #[serde(alias = "xgShareFraction", default)]
    xg_share: Option<f64>,
}

pub fn parse_chemistry_rows_json(raw: &str) -> Result<Vec<ChemistryPairRow>> {
    let payload: RawChemistryPayload =
        serde_json::from_str(raw).context("parse chemistry payload")?;
    Ok(payload
        .data
        .into_iter()
        .map(|r| ChemistryPairRow {
            player_a: r.player_a,
            player_b: r.player_b,
            toi_secs: r.toi_secs,
            goals_for: r.goals_for,
            goals_against: r.goals_against,
            shot_attempts_for: r.shot_attempts_for,
            shot_attempts_against: r.shot_attempts_against,
            xg_share: r.xg_share.and_then(Share::from_fraction),
        })
        .collect())
}

#[derive(Debug, Deserialize)]
struct RawThresholdPayload {
    season: String,
    #[serde(default)]
    metrics: Vec<RawThresholdTable>,
}

#[derive(Debug, Deserialize)]
struct RawThresholdTable {
    metric: String,
    bounds: Vec<f64>,
}

/// Parse one season's percentile boundaries. Boundaries are sorted on
/// ingest so the scan in `percentile_of` can rely on ascending order even
/// if an upstream table arrives shuffled.
pub fn parse_threshold_book_json(raw: &str) -> Result<ThresholdBook> {
    let payload: RawThresholdPayload =
        serde_json::from_str(raw).context("parse threshold payload")?;
    let mut book = ThresholdBook::new();
    for table in payload.metrics {
        let mut bounds: Vec<f64> = table.bounds.into_iter().filter(|b| b.is_finite()).collect();
        bounds.sort_by(f64::total_cmp);
        book.insert(ThresholdTable {
            metric: table.metric,
            season: payload.season.clone(),
            bounds,
        });
    }
    Ok(book)
}

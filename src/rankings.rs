use crate::chemistry::ChemistryLookup;
use crate::composite::{ScoreContext, composite_score};
use crate::normalize::{NormalizeOpts, display_round, normalize};
use crate::params::{MIN_PAIR_TOI_SECS, ScoreWeights};
use crate::rates;
use crate::rows::{ChemistryPairRow, Share, SkaterRow};

#[derive(Debug, Clone)]
pub struct RookieRankingEntry {
    pub player_id: u32,
    pub name: String,
    pub team: String,
    pub score: f64,
    pub points: u32,
    pub games_played: u32,
}

/// Score every rookie with at least one game played and sort best first.
/// Ties break on points, then fewer games (same production in fewer games
/// ranks higher), then name so the board is deterministic.
pub fn rookie_rankings(
    rows: &[SkaterRow],
    weights: &ScoreWeights,
    ctx: &ScoreContext,
) -> Vec<RookieRankingEntry> {
    let mut out: Vec<RookieRankingEntry> = rows
        .iter()
        .filter(|r| r.rookie && r.games_played > 0)
        .map(|r| RookieRankingEntry {
            player_id: r.id,
            name: r.name.clone(),
            team: r.team.clone(),
            score: composite_score(r, weights, ctx),
            points: r.points(),
            games_played: r.games_played,
        })
        .collect();
    out.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.points.cmp(&a.points))
            .then_with(|| a.games_played.cmp(&b.games_played))
            .then_with(|| a.name.cmp(&b.name))
    });
    out
}

/// Metrics a comparison radar can plot. Each knows how to read itself off a
/// row and which direction reads as "better".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadarMetric {
    PointsPer60,
    ShotsPer60,
    HitsPer60,
    BlocksPer60,
    CorsiPct,
    FaceoffPct,
    GiveawaysPer60,
}

impl RadarMetric {
    pub fn value(self, row: &SkaterRow) -> Option<f64> {
        match self {
            RadarMetric::PointsPer60 => Some(rates::per_sixty(row.points(), row.toi_secs)),
            RadarMetric::ShotsPer60 => Some(rates::per_sixty(row.shots, row.toi_secs)),
            RadarMetric::HitsPer60 => Some(rates::per_sixty(row.hits, row.toi_secs)),
            RadarMetric::BlocksPer60 => Some(rates::per_sixty(row.blocks, row.toi_secs)),
            RadarMetric::CorsiPct => row.corsi_for.map(Share::pct),
            RadarMetric::FaceoffPct => rates::faceoff_pct(row.faceoffs_won, row.faceoffs_lost),
            RadarMetric::GiveawaysPer60 => Some(rates::per_sixty(row.giveaways, row.toi_secs)),
        }
    }

    pub fn higher_is_better(self) -> bool {
        !matches!(self, RadarMetric::GiveawaysPer60)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AxisSpec {
    pub metric: RadarMetric,
    pub label: &'static str,
    /// Fixed basis for metrics that already live on a known scale.
    pub ceiling: Option<f64>,
}

pub fn default_radar_axes() -> Vec<AxisSpec> {
    vec![
        AxisSpec {
            metric: RadarMetric::PointsPer60,
            label: "Points/60",
            ceiling: None,
        },
        AxisSpec {
            metric: RadarMetric::ShotsPer60,
            label: "Shots/60",
            ceiling: None,
        },
        AxisSpec {
            metric: RadarMetric::CorsiPct,
            label: "CF%",
            ceiling: Some(100.0),
        },
        AxisSpec {
            metric: RadarMetric::FaceoffPct,
            label: "FO%",
            ceiling: Some(100.0),
        },
        AxisSpec {
            metric: RadarMetric::HitsPer60,
            label: "Hits/60",
            ceiling: None,
        },
        AxisSpec {
            metric: RadarMetric::GiveawaysPer60,
            label: "Giveaways/60",
            ceiling: None,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct RadarAxis {
    pub label: &'static str,
    /// One 0–100 value per compared player, display-rounded.
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct RadarProfile {
    pub player_ids: Vec<u32>,
    pub player_names: Vec<String>,
    pub axes: Vec<RadarAxis>,
}

/// Per-axis 0–100 values for the selected players, normalized against each
/// other (or a fixed ceiling where the metric has a natural one).
pub fn radar_profile(rows: &[SkaterRow], ids: &[u32], axes: &[AxisSpec]) -> RadarProfile {
    let selected: Vec<&SkaterRow> = ids
        .iter()
        .filter_map(|id| rows.iter().find(|r| r.id == *id))
        .collect();

    let mut out = Vec::with_capacity(axes.len());
    for spec in axes {
        let raw: Vec<Option<f64>> = selected.iter().map(|r| spec.metric.value(r)).collect();
        let comparison: Vec<f64> = raw.iter().flatten().copied().collect();
        let opts = NormalizeOpts {
            ceiling: spec.ceiling,
            higher_is_better: spec.metric.higher_is_better(),
        };
        let values = raw
            .iter()
            .map(|v| display_round(normalize(*v, &comparison, &opts)))
            .collect();
        out.push(RadarAxis {
            label: spec.label,
            values,
        });
    }

    RadarProfile {
        player_ids: selected.iter().map(|r| r.id).collect(),
        player_names: selected.iter().map(|r| r.name.clone()).collect(),
        axes: out,
    }
}

/// Best chemistry pairs above the shared-ice floor.
pub fn best_pairs(lookup: &ChemistryLookup, n: usize) -> Vec<&ChemistryPairRow> {
    lookup
        .ranked_pairs(MIN_PAIR_TOI_SECS)
        .into_iter()
        .take(n)
        .collect()
}

/// Worst qualifying pairs. Pairs without an xG share are not "worst", they
/// are unknown, so they are skipped here.
pub fn worst_pairs(lookup: &ChemistryLookup, n: usize) -> Vec<&ChemistryPairRow> {
    let mut ranked: Vec<&ChemistryPairRow> = lookup
        .ranked_pairs(MIN_PAIR_TOI_SECS)
        .into_iter()
        .filter(|p| p.xg_share.is_some())
        .collect();
    ranked.reverse();
    ranked.into_iter().take(n).collect()
}

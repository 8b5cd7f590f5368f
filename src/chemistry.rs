use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::rows::{ChemistryPairRow, Share};

/// Canonical unordered player-pair key: insertion order and query order
/// never matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: u32,
    high: u32,
}

impl PairKey {
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn ids(self) -> (u32, u32) {
        (self.low, self.high)
    }
}

/// Lookup over every chemistry pair in one (team, season, situation) slice.
#[derive(Debug, Clone, Default)]
pub struct ChemistryLookup {
    pairs: HashMap<PairKey, ChemistryPairRow>,
}

impl ChemistryLookup {
    /// Key rows by canonical pair. A source that reports (a, b) and (b, a)
    /// separately gets its halves merged into one row.
    pub fn build(rows: Vec<ChemistryPairRow>) -> Self {
        let mut pairs: HashMap<PairKey, ChemistryPairRow> = HashMap::with_capacity(rows.len());
        for row in rows {
            match pairs.entry(PairKey::new(row.player_a, row.player_b)) {
                Entry::Occupied(mut existing) => merge_into(existing.get_mut(), &row),
                Entry::Vacant(slot) => {
                    slot.insert(row);
                }
            }
        }
        Self { pairs }
    }

    /// Order-independent pair lookup. Self-pairs are always None: the matrix
    /// diagonal renders with its own fixed treatment, which is not the same
    /// thing as "no data".
    pub fn query(&self, a: u32, b: u32) -> Option<&ChemistryPairRow> {
        if a == b {
            return None;
        }
        self.pairs.get(&PairKey::new(a, b))
    }

    /// Pairs with at least `min_toi_secs` of shared ice, sorted best first
    /// by xG share. Pairs below the floor stay queryable via `query`; they
    /// are only excluded from ranked lists.
    pub fn ranked_pairs(&self, min_toi_secs: u32) -> Vec<&ChemistryPairRow> {
        let mut out: Vec<&ChemistryPairRow> = self
            .pairs
            .values()
            .filter(|p| p.toi_secs >= min_toi_secs)
            .collect();
        out.sort_by(|x, y| {
            rank_value(y)
                .total_cmp(&rank_value(x))
                .then_with(|| y.toi_secs.cmp(&x.toi_secs))
                .then_with(|| {
                    PairKey::new(x.player_a, x.player_b).cmp(&PairKey::new(y.player_a, y.player_b))
                })
        });
        out
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

// Pairs without an xG share sort behind every pair that has one.
fn rank_value(p: &ChemistryPairRow) -> f64 {
    p.xg_share.map(Share::fraction).unwrap_or(f64::NEG_INFINITY)
}

fn merge_into(acc: &mut ChemistryPairRow, row: &ChemistryPairRow) {
    // TOI-weighted xG share, falling back to whichever half has one.
    acc.xg_share = match (acc.xg_share, row.xg_share) {
        (Some(a), Some(b)) => {
            let (wa, wb) = (acc.toi_secs as f64, row.toi_secs as f64);
            let total = wa + wb;
            if total > 0.0 {
                Share::from_fraction((a.fraction() * wa + b.fraction() * wb) / total)
            } else {
                Some(a)
            }
        }
        (a, b) => a.or(b),
    };
    acc.toi_secs += row.toi_secs;
    acc.goals_for += row.goals_for;
    acc.goals_against += row.goals_against;
    acc.shot_attempts_for += row.shot_attempts_for;
    acc.shot_attempts_against += row.shot_attempts_against;
}

use crate::params::{HEAT_PCT_CEIL, HEAT_PCT_FLOOR};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// The `hsl(h, s%, l%)` string the dashboard cells consume.
    pub fn css(&self) -> String {
        format!("hsl({:.0}, {:.0}%, {:.0}%)", self.h, self.s, self.l)
    }
}

/// Fixed fill for cells with no shared ice time (dashed/empty treatment).
pub const NO_DATA_COLOR: Hsl = Hsl {
    h: 0.0,
    s: 0.0,
    l: 82.0,
};

/// Fixed neutral fill for the matrix diagonal (a player with themselves).
pub const SELF_COLOR: Hsl = Hsl {
    h: 210.0,
    s: 12.0,
    l: 60.0,
};

const HEAT_SATURATION: f64 = 70.0;
const HEAT_LIGHTNESS: f64 = 45.0;

/// Heat-scale fill for a chemistry percentage.
///
/// The input is clamped to [HEAT_PCT_FLOOR, HEAT_PCT_CEIL] and mapped
/// linearly onto hue 0°–120° (red through amber to green). Chemistry
/// percentages cluster near 50, hence the compressed window.
pub fn heat_color(pct: Option<f64>, has_data: bool) -> Hsl {
    if !has_data {
        return NO_DATA_COLOR;
    }
    // A pair with ice time but no computable share renders at the midpoint.
    let pct = pct.filter(|p| p.is_finite()).unwrap_or(50.0);
    let clamped = pct.clamp(HEAT_PCT_FLOOR, HEAT_PCT_CEIL);
    let t = (clamped - HEAT_PCT_FLOOR) / (HEAT_PCT_CEIL - HEAT_PCT_FLOOR);
    Hsl {
        h: t * 120.0,
        s: HEAT_SATURATION,
        l: HEAT_LIGHTNESS,
    }
}

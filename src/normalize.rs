/// How a raw metric maps onto the shared 0–100 chart axis.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOpts {
    /// Fixed basis instead of the comparison-set maximum.
    pub ceiling: Option<f64>,
    /// When false the result is flipped so "better" always reads as a
    /// longer bar/larger radius (GAA and friends).
    pub higher_is_better: bool,
}

impl NormalizeOpts {
    pub fn higher() -> Self {
        Self {
            ceiling: None,
            higher_is_better: true,
        }
    }

    pub fn lower() -> Self {
        Self {
            ceiling: None,
            higher_is_better: false,
        }
    }

    pub fn with_ceiling(mut self, ceiling: f64) -> Self {
        self.ceiling = Some(ceiling);
        self
    }
}

/// Rescale `value` onto [0, 100] against `comparison`.
///
/// A missing or non-finite value returns 0, not None: the entry still
/// occupies an axis position and must not break the chart geometry. A
/// degenerate basis (empty set, or max <= 0) returns 0 for every input
/// rather than propagating NaN.
pub fn normalize(value: Option<f64>, comparison: &[f64], opts: &NormalizeOpts) -> f64 {
    let Some(v) = value else {
        return 0.0;
    };
    if !v.is_finite() {
        return 0.0;
    }

    let basis = match opts.ceiling {
        Some(c) => c,
        None => comparison
            .iter()
            .copied()
            .filter(|c| c.is_finite())
            .fold(0.0_f64, f64::max),
    };
    if !basis.is_finite() || basis <= 0.0 {
        return 0.0;
    }

    // Outliers above the basis pin at 100 instead of escaping the axis.
    let scaled = (v / basis).clamp(0.0, 1.0) * 100.0;
    if opts.higher_is_better {
        scaled
    } else {
        100.0 - scaled
    }
}

/// Display rounding used by the chart assemblers (two decimals).
pub fn display_round(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_of_comparison_set_is_full_scale() {
        let v = normalize(Some(30.0), &[10.0, 20.0, 30.0], &NormalizeOpts::higher());
        assert_eq!(v, 100.0);
    }

    #[test]
    fn lower_is_better_inverts() {
        let v = normalize(Some(10.0), &[10.0, 20.0, 30.0], &NormalizeOpts::lower());
        assert!((display_round(v) - 66.67).abs() < 1e-9);
    }

    #[test]
    fn missing_value_occupies_axis_at_zero() {
        assert_eq!(normalize(None, &[1.0, 2.0], &NormalizeOpts::higher()), 0.0);
        assert_eq!(
            normalize(Some(f64::NAN), &[1.0, 2.0], &NormalizeOpts::higher()),
            0.0
        );
    }

    #[test]
    fn empty_comparison_set_is_zero() {
        assert_eq!(normalize(Some(7.0), &[], &NormalizeOpts::higher()), 0.0);
        assert_eq!(normalize(Some(7.0), &[], &NormalizeOpts::lower()), 0.0);
    }

    #[test]
    fn zero_basis_never_divides() {
        let v = normalize(Some(5.0), &[0.0, 0.0], &NormalizeOpts::higher());
        assert_eq!(v, 0.0);
    }

    #[test]
    fn outliers_clamp_to_the_axis() {
        let v = normalize(Some(500.0), &[10.0, 20.0], &NormalizeOpts::higher());
        assert_eq!(v, 100.0);
        let inv = normalize(Some(500.0), &[10.0, 20.0], &NormalizeOpts::lower());
        assert_eq!(inv, 0.0);
    }

    #[test]
    fn fixed_ceiling_overrides_comparison_max() {
        let opts = NormalizeOpts::higher().with_ceiling(50.0);
        let v = normalize(Some(25.0), &[100.0, 200.0], &opts);
        assert_eq!(v, 50.0);
    }

    #[test]
    fn monotonic_in_value() {
        let set = [4.0, 9.0, 16.0];
        let up = NormalizeOpts::higher();
        let down = NormalizeOpts::lower();
        let mut prev_up = f64::MIN;
        let mut prev_down = f64::MAX;
        for i in 0..200 {
            let v = i as f64 * 0.1;
            let nu = normalize(Some(v), &set, &up);
            let nd = normalize(Some(v), &set, &down);
            assert!(nu >= prev_up);
            assert!(nd <= prev_down);
            assert!((0.0..=100.0).contains(&nu));
            assert!((0.0..=100.0).contains(&nd));
            prev_up = nu;
            prev_down = nd;
        }
    }
}

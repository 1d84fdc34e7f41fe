// Display formatting shared by every view.

/// Placeholder shown for absent or non-numeric stats.
pub const PLACEHOLDER: &str = "-";

/// Format a stat for display.
///
/// Absent or non-finite input yields the placeholder regardless of the
/// requested precision. `force_float` renders fixed-point with `digits`
/// decimals; otherwise the value is truncated toward zero to an integer.
pub fn format_stat(value: Option<f64>, digits: usize, force_float: bool) -> String {
    let Some(v) = value else {
        return PLACEHOLDER.to_string();
    };
    if !v.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if force_float {
        format!("{v:.digits$}")
    } else {
        format!("{}", v.trunc() as i64)
    }
}

/// Format an innings-pitched value as whole innings plus a thirds suffix.
///
/// The fractional remainder is thresholded at 0.33 and 0.66 rather than at
/// exact thirds; the cutoffs are inherited display behavior, preserved as-is.
pub fn format_innings(value: Option<f64>) -> String {
    let Some(v) = value else {
        return PLACEHOLDER.to_string();
    };
    if !v.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let whole = v.floor() as i64;
    let remainder = v - v.floor();
    if remainder >= 0.66 {
        format!("{whole} 2/3")
    } else if remainder >= 0.33 {
        format!("{whole} 1/3")
    } else {
        format!("{whole}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_is_placeholder() {
        assert_eq!(format_stat(None, 2, true), "-");
        assert_eq!(format_stat(None, 0, false), "-");
        assert_eq!(format_stat(Some(f64::NAN), 2, true), "-");
    }

    #[test]
    fn fixed_point_formatting() {
        assert_eq!(format_stat(Some(0.3456), 3, true), "0.346");
        assert_eq!(format_stat(Some(2.0), 2, true), "2.00");
        assert_eq!(format_stat(Some(0.0), 3, true), "0.000");
    }

    #[test]
    fn integer_formatting_truncates() {
        assert_eq!(format_stat(Some(12.9), 0, false), "12");
        assert_eq!(format_stat(Some(-3.7), 0, false), "-3");
        assert_eq!(format_stat(Some(0.0), 0, false), "0");
    }

    #[test]
    fn innings_thirds() {
        assert_eq!(format_innings(Some(5.333)), "5 1/3");
        assert_eq!(format_innings(Some(5.667)), "5 2/3");
        assert_eq!(format_innings(Some(5.0)), "5");
    }

    #[test]
    fn innings_zero_is_zero_not_placeholder() {
        assert_eq!(format_innings(Some(0.0)), "0");
    }

    #[test]
    fn innings_absent_is_placeholder() {
        assert_eq!(format_innings(None), "-");
    }

    #[test]
    fn innings_threshold_edges() {
        assert_eq!(format_innings(Some(5.32)), "5");
        assert_eq!(format_innings(Some(5.33)), "5 1/3");
        assert_eq!(format_innings(Some(5.65)), "5 1/3");
        assert_eq!(format_innings(Some(5.66)), "5 2/3");
    }
}

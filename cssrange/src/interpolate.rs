use crate::limits::QUANT_SCALE;
use crate::range::ResolvedRange;

/// Output interval the signal is mapped into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetRange {
    pub min: f64,
    pub max: f64,
}

/// Maps `v` from `range` into `target`, truncated toward -inf at 0.1.
/// Returns `None` when `v` lies outside `range` (or is NaN).
///
/// `invert` mirrors within the target range (`tMin + tMax - t`), unlike the
/// original script's `tMax - t`; the two agree only when `tMin == 0`.
pub fn map_value(v: f64, range: ResolvedRange, target: TargetRange, invert: bool) -> Option<f64> {
    if !range.contains(v) {
        return None;
    }
    let mut t = ((v - range.low) / range.width()) * (target.max - target.min) + target.min;
    if invert {
        t = target.max + target.min - t;
    }
    Some(truncate(t))
}

#[inline]
pub fn truncate(t: f64) -> f64 { (t * QUANT_SCALE).floor() / QUANT_SCALE }

/// Renders a number the way a JS `Number#toString` does: integral values
/// without a fractional part, no negative zero, and exponent notation
/// (`1e-7`, `1e+21`) below 1e-6 and from 1e21 up.
pub fn format_number(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    let abs = x.abs();
    if abs < 1e-6 || abs >= 1e21 {
        let s = format!("{:e}", x);
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        };
    }
    format!("{}", x)
}

/// Style string for signal value `v`: the mapped value or the fallback, plus `units`.
pub fn render(
    v: f64,
    range: ResolvedRange,
    target: TargetRange,
    invert: bool,
    fallback: f64,
    units: &str,
) -> String {
    let n = map_value(v, range, target, invert).unwrap_or(fallback);
    format!("{}{}", format_number(n), units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_rounds_toward_negative_infinity() {
        assert_eq!(truncate(5.59), 5.5);
        assert_eq!(truncate(-0.01), -0.1);
        assert_eq!(truncate(2.0), 2.0);
    }

    #[test]
    fn format_drops_trailing_zero_and_sign_of_zero() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(5.5), "5.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-1.5), "-1.5");
    }

    #[test]
    fn format_uses_exponent_at_js_thresholds() {
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-7), "-2.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
    }
}

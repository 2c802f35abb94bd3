use crate::limits::FULL_RANGE;
use crate::model::{Breakpoint, RangeToken};

/// Inclusive `[low, high]` interval the signal value is tested against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedRange {
    pub low: f64,
    pub high: f64,
}

impl ResolvedRange {
    pub fn new(a: f64, b: f64) -> Self {
        ResolvedRange { low: a.min(b), high: a.max(b) }
    }

    pub fn full() -> Self {
        ResolvedRange { low: FULL_RANGE.0, high: FULL_RANGE.1 }
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool { v >= self.low && v <= self.high }

    #[inline]
    pub fn width(&self) -> f64 { self.high - self.low }

    #[inline]
    pub fn is_degenerate(&self) -> bool { self.width() == 0.0 }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub range: ResolvedRange,
    /// Tokens that fell back to the full range, rendered as given.
    pub unrecognized: Vec<String>,
}

pub fn resolve(tokens: &[RangeToken]) -> Resolution {
    if let [RangeToken::Number(a), RangeToken::Number(b)] = tokens {
        return Resolution { range: ResolvedRange::new(*a, *b), unrecognized: Vec::new() };
    }
    if tokens.is_empty() {
        return Resolution { range: ResolvedRange::full(), unrecognized: Vec::new() };
    }

    let mut low = f64::INFINITY;
    let mut high = f64::NEG_INFINITY;
    let mut unrecognized = Vec::new();
    for token in tokens {
        let bp = match token {
            RangeToken::Name(name) => Breakpoint::from_token(name),
            RangeToken::Number(_) | RangeToken::Other(_) => None,
        };
        let (lo, hi) = match bp {
            Some(b) => b.bounds(),
            None => {
                unrecognized.push(token_label(token));
                FULL_RANGE
            }
        };
        low = low.min(lo);
        high = high.max(hi);
    }
    Resolution { range: ResolvedRange { low, high }, unrecognized }
}

fn token_label(token: &RangeToken) -> String {
    match token {
        RangeToken::Number(n) => crate::interpolate::format_number(*n),
        RangeToken::Name(s) => s.clone(),
        RangeToken::Other(v) => v.to_string(),
    }
}

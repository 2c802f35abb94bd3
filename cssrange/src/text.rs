// Small total string predicates used by page scripts alongside the mapper.

use std::str::FromStr;

/// Comparison applied to an occurrence count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exactness {
    Eq,
    Le,
    Ge,
    Lt,
    Gt,
}

impl FromStr for Exactness {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "===" => Ok(Exactness::Eq),
            "<=" => Ok(Exactness::Le),
            ">=" => Ok(Exactness::Ge),
            "<" => Ok(Exactness::Lt),
            ">" => Ok(Exactness::Gt),
            _ => Err(()),
        }
    }
}

impl Exactness {
    /// `times` is a float so a negative or fractional bound compares as JS would.
    pub fn holds(self, count: usize, times: f64) -> bool {
        let count = count as f64;
        match self {
            Exactness::Eq => count == times,
            Exactness::Le => count <= times,
            Exactness::Ge => count >= times,
            Exactness::Lt => count < times,
            Exactness::Gt => count > times,
        }
    }
}

/// Overlapping occurrences of `needle`, tested at every char position.
/// An empty needle matches at each position.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    let hay: Vec<char> = haystack.chars().collect();
    let pat: Vec<char> = needle.chars().collect();
    if pat.is_empty() {
        return hay.len();
    }
    if pat.len() > hay.len() {
        return 0;
    }
    hay.windows(pat.len()).filter(|w| *w == pat.as_slice()).count()
}

/// True when the occurrence count of `needle` compares to `times` per `exactness`
/// (`"==="`, `"<="`, `">="`, `"<"`, `">"`). Any other operator yields false.
pub fn match_num_times(haystack: &str, needle: &str, times: f64, exactness: &str) -> bool {
    match exactness.parse::<Exactness>() {
        Ok(op) => op.holds(count_occurrences(haystack, needle), times),
        Err(()) => false,
    }
}

/// True when both single-char markers occur and the last `second` follows the last `first`.
pub fn match_last_is_after_first(haystack: &str, first: &str, second: &str) -> bool {
    let (Some(f), Some(s)) = (single_char(first), single_char(second)) else {
        return false;
    };
    let mut first_i = None;
    let mut second_i = None;
    for (i, c) in haystack.chars().enumerate() {
        if c == f {
            first_i = Some(i);
        }
        if c == s {
            second_i = Some(i);
        }
    }
    match (first_i, second_i) {
        (Some(a), Some(b)) => b > a,
        _ => false,
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut it = s.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

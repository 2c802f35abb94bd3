use crate::limits;
use serde::Deserialize;
use serde_json::Value;

/// Named viewport-width bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Case-sensitive lookup; anything else is not a breakpoint.
    pub fn from_token(token: &str) -> Option<Breakpoint> {
        match token {
            "xs" => Some(Breakpoint::Xs),
            "sm" => Some(Breakpoint::Sm),
            "md" => Some(Breakpoint::Md),
            "lg" => Some(Breakpoint::Lg),
            "xl" => Some(Breakpoint::Xl),
            _ => None,
        }
    }

    /// Inclusive `(low, high)` pixel bounds.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Breakpoint::Xs => limits::XS,
            Breakpoint::Sm => limits::SM,
            Breakpoint::Md => limits::MD,
            Breakpoint::Lg => limits::LG,
            Breakpoint::Xl => limits::XL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}

/// One element of a `mediaQueryRange` array. Anything that is neither a
/// number nor a string lands in `Other` and resolves as unrecognized.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RangeToken {
    Number(f64),
    Name(String),
    Other(Value),
}

impl From<f64> for RangeToken {
    fn from(v: f64) -> Self { RangeToken::Number(v) }
}

impl From<&str> for RangeToken {
    fn from(v: &str) -> Self { RangeToken::Name(v.to_string()) }
}

impl From<Breakpoint> for RangeToken {
    fn from(b: Breakpoint) -> Self { RangeToken::Name(b.as_str().to_string()) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum SourceType {
    #[default]
    #[serde(rename = "windowInnerWidth")]
    WindowInnerWidth,
}

/// Construction input for a mapper. Parsed field by field from the JS params
/// object (camelCase keys) in `config.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct MapperConfig {
    pub target_range_min: f64,
    pub target_range_max: f64,
    pub target_units: String,
    pub target_id: String,
    pub target_params: Vec<String>,
    pub source_type: SourceType,
    pub target_else: f64,
    pub invert: bool,
    pub media_query_range: Vec<RangeToken>,
}

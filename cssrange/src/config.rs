use crate::error::{MapperError, Result};
use crate::model::{MapperConfig, RangeToken};
use crate::range::{resolve, Resolution};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

impl MapperConfig {
    pub fn from_json_str(s: &str) -> Result<MapperConfig> {
        MapperConfig::from_json_value(serde_json::from_str(s)?)
    }

    /// Reads the params object. A missing or mistyped field is a
    /// [`MapperError::Configuration`] naming that field; anything other
    /// than an object is [`MapperError::Params`].
    pub fn from_json_value(v: Value) -> Result<MapperConfig> {
        let mut obj = match v {
            Value::Object(obj) => obj,
            other => {
                return Err(MapperError::Params(format!("expected a params object, got {}", kind(&other))))
            }
        };
        Ok(MapperConfig {
            target_range_min: required(&mut obj, "targetRangeMin")?,
            target_range_max: required(&mut obj, "targetRangeMax")?,
            target_units: optional(&mut obj, "targetUnits")?.unwrap_or_default(),
            target_id: required(&mut obj, "targetId")?,
            target_params: required(&mut obj, "targetParams")?,
            source_type: optional(&mut obj, "sourceType")?.unwrap_or_default(),
            target_else: required(&mut obj, "targetElse")?,
            invert: optional(&mut obj, "invert")?.unwrap_or_default(),
            media_query_range: required(&mut obj, "mediaQueryRange")?,
        })
    }

    /// Checks every field and resolves the breakpoint descriptor.
    ///
    /// Unrecognized breakpoint tokens are not an error; they are reported in
    /// [`Resolution::unrecognized`] and widen the range to the full envelope.
    pub fn validate(&self) -> Result<Resolution> {
        finite("targetRangeMin", self.target_range_min)?;
        finite("targetRangeMax", self.target_range_max)?;
        finite("targetElse", self.target_else)?;
        if self.target_id.trim().is_empty() {
            return Err(MapperError::config("targetId", "must not be empty"));
        }
        if self.target_params.is_empty() {
            return Err(MapperError::config("targetParams", "must name at least one style property"));
        }
        if let Some(i) = self.target_params.iter().position(|p| p.trim().is_empty()) {
            return Err(MapperError::config("targetParams", format!("entry {} is empty", i)));
        }
        // numbers anywhere else are just unrecognized tokens
        if let [RangeToken::Number(a), RangeToken::Number(b)] = self.media_query_range.as_slice() {
            finite("mediaQueryRange", *a)?;
            finite("mediaQueryRange", *b)?;
        }

        let resolution = resolve(&self.media_query_range);
        if resolution.range.is_degenerate() {
            return Err(MapperError::DegenerateRange {
                low: resolution.range.low,
                high: resolution.range.high,
            });
        }
        Ok(resolution)
    }
}

// null counts as absent, like an omitted key
fn optional<T: DeserializeOwned>(obj: &mut Map<String, Value>, field: &'static str) -> Result<Option<T>> {
    match obj.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => serde_json::from_value(v)
            .map(Some)
            .map_err(|e| MapperError::config(field, e.to_string())),
    }
}

fn required<T: DeserializeOwned>(obj: &mut Map<String, Value>, field: &'static str) -> Result<T> {
    optional(obj, field)?.ok_or_else(|| MapperError::config(field, "missing required field"))
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn finite(field: &'static str, v: f64) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(MapperError::config(field, "must be finite"))
    }
}

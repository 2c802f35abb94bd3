use crate::error::{MapperError, Result};
use crate::interpolate::{render, TargetRange};
use crate::model::MapperConfig;
use crate::range::{Resolution, ResolvedRange};

/// Something that accepts style declarations, e.g. an element's inline style.
pub trait StyleSink {
    type Error;
    fn set_style(&mut self, property: &str, value: &str) -> std::result::Result<(), Self::Error>;
}

/// Converts a camelCase style key (`marginBottom`) to its CSS name (`margin-bottom`).
/// Hyphenated names and custom properties are returned unchanged.
pub fn css_property_name(name: &str) -> String {
    if name.starts_with("--") || name.contains('-') {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            // a leading capital is a vendor prefix: WebkitTransform -> -webkit-transform
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Resolved, validated mapper. Immutable after construction.
#[derive(Clone, Debug)]
pub struct RangeMapper {
    config: MapperConfig,
    resolution: Resolution,
    properties: Vec<String>,
}

impl RangeMapper {
    pub fn new(config: MapperConfig) -> Result<RangeMapper> {
        let resolution = config.validate()?;
        let properties = config.target_params.iter().map(|p| css_property_name(p)).collect();
        Ok(RangeMapper { config, resolution, properties })
    }

    pub fn from_json_str(s: &str) -> Result<RangeMapper> {
        RangeMapper::new(MapperConfig::from_json_str(s)?)
    }

    pub fn config(&self) -> &MapperConfig { &self.config }
    pub fn range(&self) -> ResolvedRange { self.resolution.range }
    pub fn unrecognized_tokens(&self) -> &[String] { &self.resolution.unrecognized }
    /// CSS declaration names, in the configured order.
    pub fn properties(&self) -> &[String] { &self.properties }

    pub fn target(&self) -> TargetRange {
        TargetRange { min: self.config.target_range_min, max: self.config.target_range_max }
    }

    /// Style value for a viewport width.
    pub fn value_at(&self, width: f64) -> String {
        render(
            width,
            self.resolution.range,
            self.target(),
            self.config.invert,
            self.config.target_else,
            &self.config.target_units,
        )
    }

    /// Writes the value for `width` to every configured property, in order.
    /// Stops at the first sink error.
    pub fn apply<S: StyleSink>(&self, width: f64, sink: &mut S) -> std::result::Result<String, S::Error> {
        let value = self.value_at(width);
        for prop in &self.properties {
            sink.set_style(prop, &value)?;
        }
        Ok(value)
    }

    /// Like [`RangeMapper::apply`] but looks the sink up first; a missing target is an error.
    pub fn apply_to<S, F>(&self, width: f64, lookup: F) -> Result<String>
    where
        S: StyleSink,
        S::Error: std::fmt::Display,
        F: FnOnce(&str) -> Option<S>,
    {
        let id = &self.config.target_id;
        let mut sink = lookup(id).ok_or_else(|| MapperError::TargetNotFound { id: id.clone() })?;
        self.apply(width, &mut sink)
            .map_err(|e| MapperError::Style(e.to_string()))
    }
}

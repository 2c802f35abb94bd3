pub mod binding;
pub mod config;
pub mod error;
pub mod interpolate;
pub mod limits;
pub mod model;
pub mod range;
pub mod text;

pub use binding::{css_property_name, RangeMapper, StyleSink};
pub use error::{MapperError, Result};
pub use interpolate::{format_number, map_value, TargetRange};
pub use model::{Breakpoint, MapperConfig, RangeToken, SourceType};
pub use range::{resolve, Resolution, ResolvedRange};

// Breakpoint table and range constants (inclusive pixel bounds)

pub const XS: (f64, f64) = (0.0, 575.0);
pub const SM: (f64, f64) = (576.0, 767.0);
pub const MD: (f64, f64) = (768.0, 991.0);
pub const LG: (f64, f64) = (992.0, 1199.0);
pub const XL: (f64, f64) = (2000.0, 6400.0);

// Envelope used for unrecognized tokens and empty descriptors
pub const FULL_RANGE: (f64, f64) = (0.0, 6400.0);

// Output truncation grid (0.1 units)
pub const QUANT_SCALE: f64 = 10.0;

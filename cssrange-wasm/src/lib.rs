mod api;
mod error;
mod interop;
mod reactor;

pub use api::*;
pub use reactor::RangeMapper;

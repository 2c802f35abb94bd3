use crate::{error, interop};
use cssrange::interpolate::render;
use cssrange::{MapperError, RangeToken, ResolvedRange, TargetRange};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// `{ ok: true, value: { low, high, unrecognized } }` for a `mediaQueryRange` array.
#[wasm_bindgen]
pub fn resolve_range(tokens: JsValue) -> JsValue {
    let tokens: Vec<RangeToken> = match serde_wasm_bindgen::from_value(tokens) {
        Ok(t) => t,
        Err(e) => return error::invalid_params(e.to_string()),
    };
    let res = cssrange::resolve(&tokens);
    let o = interop::new_obj();
    interop::set_kv(&o, "low", &JsValue::from_f64(res.range.low));
    interop::set_kv(&o, "high", &JsValue::from_f64(res.range.high));
    interop::set_kv(&o, "unrecognized", &interop::arr_str(&res.unrecognized).into());
    error::ok(o.into())
}

/// Stateless form of `RangeMapper.value_at`; rejects a zero-width or non-finite range.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn map_width(
    width: f64,
    low: f64,
    high: f64,
    target_min: f64,
    target_max: f64,
    invert: bool,
    fallback: f64,
    units: &str,
) -> JsValue {
    let params = [
        ("low", low),
        ("high", high),
        ("target_min", target_min),
        ("target_max", target_max),
        ("fallback", fallback),
    ];
    for (name, v) in params {
        if !v.is_finite() {
            return error::err("config", format!("parameter '{}' must be finite", name), None);
        }
    }
    let range = ResolvedRange::new(low, high);
    if range.is_degenerate() {
        return error::from_mapper(&MapperError::DegenerateRange { low, high });
    }
    let target = TargetRange { min: target_min, max: target_max };
    error::ok(JsValue::from_str(&render(width, range, target, invert, fallback, units)))
}

#[wasm_bindgen]
pub fn match_num_times(haystack: &str, needle: &str, times: f64, exactness: &str) -> bool {
    cssrange::text::match_num_times(haystack, needle, times, exactness)
}

#[wasm_bindgen]
pub fn match_last_is_after_first(haystack: &str, first: &str, second: &str) -> bool {
    cssrange::text::match_last_is_after_first(haystack, first, second)
}

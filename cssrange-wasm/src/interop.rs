use js_sys::{Array, Float64Array, Object, Reflect};
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }

pub fn set_kv(obj: &Object, key: &str, val: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), val);
}

pub fn arr_f64(data: &[f64]) -> Float64Array { Float64Array::from(data) }

pub fn arr_str<S: AsRef<str>>(items: &[S]) -> Array {
    items.iter().map(|s| JsValue::from_str(s.as_ref())).collect()
}

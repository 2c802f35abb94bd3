use crate::interop::{new_obj, set_kv};
use cssrange::MapperError;
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

pub fn from_mapper(e: &MapperError) -> JsValue {
    let d = new_obj();
    match e {
        MapperError::Configuration { field, .. } => set_kv(&d, "field", &JsValue::from_str(field)),
        MapperError::TargetNotFound { id } => set_kv(&d, "id", &JsValue::from_str(id)),
        MapperError::DegenerateRange { low, high } => {
            set_kv(&d, "low", &JsValue::from_f64(*low));
            set_kv(&d, "high", &JsValue::from_f64(*high));
        }
        MapperError::Style(_) | MapperError::Params(_) | MapperError::Json(_) => return err(e.code(), e.to_string(), None),
    }
    err(e.code(), e.to_string(), Some(d.into()))
}

#[inline]
pub fn invalid_params(message: impl Into<String>) -> JsValue { err("invalid_params", message, None) }

#[inline]
pub fn dom(cause: JsValue) -> JsValue {
    let message = cause.as_string().unwrap_or_else(|| "DOM operation failed".to_string());
    err("dom", message, Some(cause))
}

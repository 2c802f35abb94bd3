use crate::{error, interop};
use cssrange::{MapperConfig, StyleSink};
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CssStyleDeclaration, HtmlElement, Window};

const RESIZE: &str = "resize";

/// Maps `window.innerWidth` onto style properties of one element and keeps
/// them current on every `resize` until disposed.
#[wasm_bindgen]
pub struct RangeMapper {
    inner: Rc<cssrange::RangeMapper>,
    window: Window,
    listener: Option<Closure<dyn FnMut()>>,
}

struct InlineStyle(CssStyleDeclaration);

impl StyleSink for InlineStyle {
    type Error = DomError;
    fn set_style(&mut self, property: &str, value: &str) -> Result<(), DomError> {
        self.0.set_property(property, value).map_err(DomError)
    }
}

struct DomError(JsValue);

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_string() {
            Some(s) => f.write_str(&s),
            None => write!(f, "{:?}", self.0),
        }
    }
}

fn viewport_width(window: &Window) -> f64 {
    window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(f64::NAN)
}

// Looks the element up on every run so a replaced node still gets styled.
fn run(mapper: &cssrange::RangeMapper, window: &Window) -> cssrange::Result<String> {
    let document = window.document();
    mapper.apply_to(viewport_width(window), |id| {
        let el = document.as_ref()?.get_element_by_id(id)?;
        let el = el.dyn_into::<HtmlElement>().ok()?;
        Some(InlineStyle(el.style()))
    })
}

fn warn(msg: &str) { console::warn_1(&JsValue::from_str(msg)); }

impl RangeMapper {
    pub(crate) fn build(params: JsValue) -> Result<RangeMapper, JsValue> {
        let value = serde_wasm_bindgen::from_value::<serde_json::Value>(params)
            .map_err(|e| error::invalid_params(e.to_string()))?;
        let config = MapperConfig::from_json_value(value).map_err(|e| error::from_mapper(&e))?;
        let mapper = cssrange::RangeMapper::new(config).map_err(|e| error::from_mapper(&e))?;
        if !mapper.unrecognized_tokens().is_empty() {
            warn(&format!(
                "cssrange: unrecognized mediaQueryRange tokens {:?}, using [{}, {}]",
                mapper.unrecognized_tokens(),
                mapper.range().low,
                mapper.range().high
            ));
        }
        let window = web_sys::window().ok_or_else(|| error::err("dom", "no global window", None))?;
        run(&mapper, &window).map_err(|e| error::from_mapper(&e))?;

        let inner = Rc::new(mapper);
        let (m, w) = (Rc::clone(&inner), window.clone());
        let listener = Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = run(&m, &w) {
                warn(&format!("cssrange: {}", e));
            }
        });
        window
            .add_event_listener_with_callback(RESIZE, listener.as_ref().unchecked_ref())
            .map_err(error::dom)?;
        Ok(RangeMapper { inner, window, listener: Some(listener) })
    }
}

#[wasm_bindgen]
impl RangeMapper {
    /// Throws an error envelope on invalid params or a missing target element.
    #[wasm_bindgen(constructor)]
    pub fn new(params: JsValue) -> Result<RangeMapper, JsValue> {
        RangeMapper::build(params)
    }

    /// Non-throwing constructor: `{ ok: true, value: RangeMapper }` or an error envelope.
    pub fn create(params: JsValue) -> JsValue {
        match RangeMapper::build(params) {
            Ok(m) => error::ok(m.into()),
            Err(e) => e,
        }
    }

    /// Recomputes and applies for the current width.
    pub fn apply(&self) -> JsValue {
        match run(&self.inner, &self.window) {
            Ok(v) => error::ok(JsValue::from_str(&v)),
            Err(e) => error::from_mapper(&e),
        }
    }

    /// Style value for the current width, without touching the element.
    pub fn value(&self) -> String { self.inner.value_at(viewport_width(&self.window)) }

    pub fn value_at(&self, width: f64) -> String { self.inner.value_at(width) }

    /// `[low, high]`
    pub fn resolved_range(&self) -> JsValue {
        let r = self.inner.range();
        interop::arr_f64(&[r.low, r.high]).into()
    }

    pub fn properties(&self) -> JsValue { interop::arr_str(self.inner.properties()).into() }

    pub fn unrecognized_tokens(&self) -> JsValue {
        interop::arr_str(self.inner.unrecognized_tokens()).into()
    }

    pub fn is_active(&self) -> bool { self.listener.is_some() }

    /// Removes the resize listener. Safe to call more than once.
    pub fn dispose(&mut self) {
        if let Some(listener) = self.listener.take() {
            let removed = self
                .window
                .remove_event_listener_with_callback(RESIZE, listener.as_ref().unchecked_ref());
            if let Err(e) = removed {
                warn(&format!("cssrange: failed to remove resize listener: {:?}", e));
                // still registered, so the closure must outlive this mapper
                listener.forget();
            }
        }
    }
}

impl Drop for RangeMapper {
    fn drop(&mut self) { self.dispose(); }
}

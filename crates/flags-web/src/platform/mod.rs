//! Browser implementations of the platform seams
//!
//! Vendor-prefixed members (`webkitFullscreenEnabled` and friends) are not
//! part of the typed web-sys bindings, so lookups go through `js_sys::Reflect`.

pub mod fullscreen;
pub mod speech;
pub mod storage;

pub use fullscreen::WebFullscreen;
pub use speech::WebSpeech;
pub use storage::LocalStorageStore;

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use flags_core::prelude::*;

/// Read `target[name]`, treating `undefined` and `null` as absent
pub(crate) fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// Call the zero-argument method `target[name]()`
pub(crate) fn call_method(target: &JsValue, name: &str) -> Result<JsValue> {
    let function = property(target, name)
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| Error::fullscreen(format!("{name} is not available")))?;

    function
        .call0(target)
        .map_err(|err| Error::fullscreen(format!("{name} threw {err:?}")))
}

/// Observe a possibly-promise return value so rejections are logged, not thrown
pub(crate) fn settle(name: &'static str, value: JsValue) {
    let Ok(promise) = value.dyn_into::<Promise>() else {
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            debug!("{} rejected: {:?}", name, err);
        }
    });
}

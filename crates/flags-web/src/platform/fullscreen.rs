//! Fullscreen API adapter (standard and webkit-prefixed)

use std::rc::Rc;

use flags_app::{FullscreenApi, FullscreenPlatform, VendorSupport};
use flags_core::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};

use super::{call_method, property, settle};

const CHANGE_EVENTS: [&str; 2] = ["fullscreenchange", "webkitfullscreenchange"];

/// Document fullscreen behind [`FullscreenPlatform`].
///
/// Requests target the document root. Change notifications from either
/// variant invoke `sink`.
pub struct WebFullscreen {
    document: Option<Document>,
    sink: Rc<dyn Fn()>,
    listener: Option<Closure<dyn FnMut(Event)>>,
}

impl WebFullscreen {
    pub fn new(sink: impl Fn() + 'static) -> Self {
        Self {
            document: web_sys::window().and_then(|window| window.document()),
            sink: Rc::new(sink),
            listener: None,
        }
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or_else(|| Error::fullscreen("no document"))
    }

    fn flag(&self, name: &str) -> bool {
        self.document
            .as_ref()
            .and_then(|document| property(document, name))
            .is_some_and(|value| value.is_truthy())
    }
}

impl FullscreenPlatform for WebFullscreen {
    fn support(&self) -> VendorSupport {
        VendorSupport {
            standard: self.flag("fullscreenEnabled"),
            webkit: self.flag("webkitFullscreenEnabled"),
        }
    }

    fn is_fullscreen(&self) -> bool {
        let Some(document) = &self.document else {
            return false;
        };
        property(document, "fullscreenElement").is_some()
            || property(document, "webkitFullscreenElement").is_some()
    }

    fn request(&mut self, api: FullscreenApi) -> Result<()> {
        let root = self
            .document()?
            .document_element()
            .ok_or_else(|| Error::fullscreen("no document element"))?;

        let method = match api {
            FullscreenApi::Standard => "requestFullscreen",
            FullscreenApi::Webkit => "webkitRequestFullscreen",
        };
        settle(method, call_method(&root, method)?);
        Ok(())
    }

    fn exit(&mut self, api: FullscreenApi) -> Result<()> {
        let method = match api {
            FullscreenApi::Standard => "exitFullscreen",
            FullscreenApi::Webkit => "webkitExitFullscreen",
        };
        settle(method, call_method(self.document()?, method)?);
        Ok(())
    }

    fn subscribe(&mut self) -> Result<()> {
        if self.listener.is_some() {
            return Ok(());
        }
        let document = self.document()?.clone();

        let sink = Rc::clone(&self.sink);
        let listener = Closure::<dyn FnMut(Event)>::new(move |_| sink());

        let mut result = Ok(());
        for event in CHANGE_EVENTS {
            if let Err(err) =
                document.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            {
                result = Err(Error::fullscreen(format!("listening for {event}: {err:?}")));
            }
        }
        // Kept even on partial failure; one variant may still be registered
        self.listener = Some(listener);
        result
    }

    fn unsubscribe(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };
        let Some(document) = &self.document else {
            return;
        };
        for event in CHANGE_EVENTS {
            if let Err(err) =
                document.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            {
                debug!("Removing {} listener: {:?}", event, err);
            }
        }
    }
}

impl Drop for WebFullscreen {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

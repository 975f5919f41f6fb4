//! flags-web - Browser front end for World Flags
//!
//! Hosts the [`Engine`](flags_app::Engine) behind a [`Dispatcher`], wires the
//! Web Speech, Fullscreen and `localStorage` facilities into it, and renders
//! the published state with Leptos.

pub mod components;
pub mod dispatcher;
pub mod logging;
pub mod platform;
pub mod theme;

use components::{FilterBar, FlagGrid, FlagModal, Header, LanguagePicker, SettingsPanel};
use dispatcher::{Dispatch, Dispatcher};
use flags_app::{Message, UiMode};
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let dispatch = Dispatch::new(Dispatcher::new());
    provide_context(dispatch);
    let state = dispatch.state();

    let keys = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            dispatch.send(Message::Dismiss);
        }
    });

    let overlay_open = Memo::new(move |_| state.with(|s| s.is_overlay_open()));
    Effect::new(move || lock_body_scroll(overlay_open.get()));

    on_cleanup(move || {
        keys.remove();
        lock_body_scroll(false);
        dispatch.shutdown();
    });

    let picking_language = Memo::new(move |_| state.with(|s| s.ui_mode == UiMode::LanguagePicker));

    move || {
        if picking_language.get() {
            view! { <LanguagePicker /> }.into_any()
        } else {
            view! {
                <div class="min-h-screen bg-gradient-to-br from-sky-100 via-purple-50 to-pink-100">
                    <Header />
                    <FilterBar />
                    <FlagGrid />
                    <FlagModal />
                    <SettingsPanel />
                </div>
            }
            .into_any()
        }
    }
}

/// Keep the page behind an overlay from scrolling
fn lock_body_scroll(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(err) = result {
        tracing::debug!("Updating body overflow: {:?}", err);
    }
}

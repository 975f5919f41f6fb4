use flags_app::Message;
use flags_core::{resolve_message, text, Catalogue};
use leptos::prelude::*;

use crate::dispatcher::use_dispatch;
use crate::theme::{self, gradients};

#[component]
pub fn Header() -> impl IntoView {
    let dispatch = use_dispatch();
    let state = dispatch.state();
    let locale = Memo::new(move |_| state.with(|s| s.effective_locale()));

    let filter_open = move || state.with(|s| s.filter_bar_visible);
    let fullscreen_supported = move || state.with(|s| s.fullscreen.is_supported);
    let is_fullscreen = move || state.with(|s| s.fullscreen.is_fullscreen);

    let subtitle = move || {
        let count = Catalogue::builtin().len().to_string();
        resolve_message(locale.get(), "app.subtitle", &[("count", &count)])
    };

    let fullscreen_label = move || {
        let key = if is_fullscreen() {
            "header.fullscreen.exit"
        } else {
            "header.fullscreen.enter"
        };
        text(locale.get(), key)
    };

    view! {
        <header class="sticky top-0 z-40 bg-white/70 backdrop-blur-md border-b border-white/50 shadow-sm">
            <div class="max-w-4xl mx-auto px-4 py-3 flex items-center gap-3">
                <span class="text-3xl">"🌍"</span>
                <div class="flex-1">
                    <h1 class="text-xl font-bold text-gray-800 leading-tight">
                        {move || text(locale.get(), "app.title")}
                    </h1>
                    <p class="text-xs text-gray-500">{subtitle}</p>
                </div>

                // Filter toggle
                <button
                    class=move || {
                        let gradient = if filter_open() {
                            gradients::ACTIVE
                        } else {
                            gradients::SECONDARY
                        };
                        theme::icon_button(gradient)
                    }
                    aria-pressed=move || filter_open().to_string()
                    title=move || text(locale.get(), "header.filter")
                    on:click=move |_| dispatch.send(Message::ToggleFilterBar)
                >
                    <FilterIcon />
                    <span class="sr-only">{move || text(locale.get(), "header.filter")}</span>
                </button>

                <button
                    class=theme::icon_button(gradients::SETTINGS)
                    title=move || text(locale.get(), "header.settings")
                    on:click=move |_| dispatch.send(Message::OpenSettings)
                >
                    "⚙️"
                    <span class="sr-only">{move || text(locale.get(), "header.settings")}</span>
                </button>

                // Hidden entirely when the platform has no fullscreen
                {move || {
                    fullscreen_supported().then(|| view! {
                        <button
                            class=theme::icon_button(gradients::INFO)
                            title=fullscreen_label
                            on:click=move |_| dispatch.send(Message::ToggleFullscreen)
                        >
                            {move || if is_fullscreen() {
                                view! { <ExitFullscreenIcon /> }.into_any()
                            } else {
                                view! { <EnterFullscreenIcon /> }.into_any()
                            }}
                            <span class="sr-only">{fullscreen_label}</span>
                        </button>
                    })
                }}
            </div>
        </header>
    }
}

#[component]
fn FilterIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2.5">
            <path stroke-linecap="round" stroke-linejoin="round" d="M3 4h18M7 8h10M10 12h4" />
        </svg>
    }
}

#[component]
fn EnterFullscreenIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2.5">
            <path stroke-linecap="round" stroke-linejoin="round" d="M4 8V4m0 0h4M4 4l5 5m11-5h-4m4 0v4m0-4l-5 5M4 16v4m0 0h4m-4 0l5-5m11 5l-5-5m5 5v-4m0 4h-4" />
        </svg>
    }
}

#[component]
fn ExitFullscreenIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2.5">
            <path stroke-linecap="round" stroke-linejoin="round" d="M9 9V4m0 5H4m11-5v5m0 0h5M9 20v-5m0 0H4m11 5v-5m0 0h5" />
        </svg>
    }
}


use flags_app::Message;
use flags_core::{text, FilterMode};
use leptos::prelude::*;

use crate::dispatcher::use_dispatch;
use crate::theme;

/// Sort/group selector; collapses when hidden from the header
#[component]
pub fn FilterBar() -> impl IntoView {
    let dispatch = use_dispatch();
    let state = dispatch.state();
    let locale = Memo::new(move |_| state.with(|s| s.effective_locale()));
    let mode = Memo::new(move |_| state.with(|s| s.filter_mode));
    let visible = move || state.with(|s| s.filter_bar_visible);

    view! {
        <div class=move || {
            let shown = if visible() {
                "max-h-24 opacity-100"
            } else {
                "max-h-0 opacity-0"
            };
            format!("overflow-hidden transition-all duration-300 ease-in-out {shown}")
        }>
            <div class="sticky top-[64px] z-30 bg-white/80 backdrop-blur-md border-b border-white/50 shadow-sm">
                <div class="max-w-4xl mx-auto px-4 py-3 flex gap-2" role="group">
                    {FilterMode::ALL.into_iter().map(|option| {
                        view! {
                            <button
                                class=move || theme::pill_button(mode.get() == option)
                                aria-pressed=move || (mode.get() == option).to_string()
                                data-mode=option.as_str()
                                on:click=move |_| dispatch.send(Message::SetFilterMode(option))
                            >
                                {move || text(locale.get(), option.message_key())}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

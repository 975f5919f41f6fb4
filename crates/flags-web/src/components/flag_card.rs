use flags_app::Message;
use flags_core::{localized_name, CountryRecord, Locale};
use leptos::prelude::*;

use crate::dispatcher::use_dispatch;
use crate::theme;

/// One tappable flag in the grid.
///
/// `index` is the position across all groups and picks the background
/// from the rotating palette.
#[component]
pub fn FlagCard(record: &'static CountryRecord, index: usize, locale: Locale) -> impl IntoView {
    let dispatch = use_dispatch();
    let name = localized_name(record, locale.tag());

    view! {
        <button
            class=format!(
                "group relative flex flex-col items-center gap-3 bg-gradient-to-br {} \
                 rounded-3xl p-4 pt-5 pb-4 shadow-lg border-4 border-white \
                 hover:-translate-y-2 hover:shadow-2xl hover:scale-105 \
                 active:scale-95 active:shadow-md \
                 transition-all duration-200 ease-out w-full overflow-hidden \
                 focus:outline-none focus:ring-4 focus:ring-white/60",
                theme::card_gradient(index),
            )
            aria-label=name.clone()
            on:click=move |_| dispatch.send(Message::SelectCountry(record.code.to_string()))
        >
            <div class="absolute -top-3 -right-3 w-10 h-10 bg-white/25 rounded-full" />
            <div class="absolute -top-1 -right-1 w-5 h-5 bg-white/20 rounded-full" />

            <div class="relative w-16 h-16 flex items-center justify-center bg-white/30 rounded-full shadow-inner group-hover:bg-white/50 transition-colors duration-200">
                <span class="text-4xl leading-none select-none" role="img" aria-hidden="true">
                    {record.glyph}
                </span>
            </div>

            <span class="text-xs font-black text-white text-center leading-tight line-clamp-2 drop-shadow-sm tracking-wide uppercase">
                {name.clone()}
            </span>
        </button>
    }
}

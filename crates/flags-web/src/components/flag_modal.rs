use flags_app::{Message, UiMode};
use flags_core::{localized_name, text};
use leptos::prelude::*;

use crate::dispatcher::use_dispatch;
use crate::theme::gradients;

/// Detail sheet for the selected country.
///
/// Narration starts when the country is selected; this view only offers
/// a replay and reflects the speaking flag.
#[component]
pub fn FlagModal() -> impl IntoView {
    let dispatch = use_dispatch();
    let state = dispatch.state();
    let locale = Memo::new(move |_| state.with(|s| s.effective_locale()));
    let record = Memo::new(move |_| {
        state.with(|s| (s.ui_mode == UiMode::Detail).then(|| s.selected_record()).flatten())
    });
    let speaking = move || state.with(|s| s.speaking);
    let speech_supported = move || state.with(|s| s.speech_supported);

    move || {
        let record = record.get()?;
        let locale = locale.get();
        let name = localized_name(record, locale.tag());

        Some(view! {
            <div
                class="fixed inset-0 z-50 flex items-end sm:items-center justify-center sm:p-4 sm:bg-black/50 sm:backdrop-blur-sm bg-white animate-[fadeIn_0.2s_ease-out]"
                role="dialog"
                aria-modal="true"
                aria-label=name.clone()
                on:click=move |_| dispatch.send(Message::CloseDetail)
            >
                <div
                    class="relative bg-white w-full h-full sm:h-auto sm:rounded-3xl sm:shadow-2xl sm:max-w-lg flex flex-col items-center justify-center gap-7 p-10 animate-[popIn_0.3s_cubic-bezier(0.34,1.56,0.64,1)]"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        class="absolute top-5 right-5 w-10 h-10 flex items-center justify-center rounded-full bg-gray-100 hover:bg-gray-200 text-gray-500 hover:text-gray-800 transition-colors duration-150 text-xl leading-none font-bold"
                        on:click=move |_| dispatch.send(Message::CloseDetail)
                    >
                        "✕"
                    </button>

                    <span class="text-[160px] sm:text-[180px] leading-none drop-shadow-xl select-none" role="img" aria-hidden="true">
                        {record.glyph}
                    </span>

                    <div class="text-center space-y-1">
                        <h2 class="text-4xl font-black text-gray-800">{name.clone()}</h2>
                        <p class="text-sm text-gray-400 uppercase tracking-widest font-bold">
                            {text(locale, "modal.country.label")}
                        </p>
                    </div>

                    <div class="w-20 h-1.5 rounded-full bg-gradient-to-r from-blue-400 to-purple-400" />

                    <div class="flex flex-col items-center gap-2">
                        <span class="text-5xl">"🏛️"</span>
                        <p class="text-3xl font-black text-gray-700">{record.capital}</p>
                        <p class="text-sm text-gray-400 uppercase tracking-widest font-bold">
                            {text(locale, "modal.capital.label")}
                        </p>
                    </div>

                    // No replay affordance without speech synthesis
                    {move || speech_supported().then(|| view! {
                        <button
                            class=move || {
                                if speaking() {
                                    "flex items-center gap-2 px-8 py-3 rounded-full font-black text-base transition-all duration-150 active:scale-95 bg-purple-100 text-purple-500 animate-pulse".to_string()
                                } else {
                                    format!(
                                        "flex items-center gap-2 px-8 py-3 rounded-full font-black text-base transition-all duration-150 active:scale-95 bg-gradient-to-r {} text-white shadow-md hover:shadow-lg hover:-translate-y-0.5",
                                        gradients::PRIMARY
                                    )
                                }
                            }
                            on:click=move |_| dispatch.send(Message::SpeakAgain)
                        >
                            <span class="text-xl">{move || if speaking() { "🔊" } else { "🔈" }}</span>
                            {move || {
                                let key = if speaking() { "modal.speaking" } else { "modal.speak" };
                                text(locale, key)
                            }}
                        </button>
                    })}

                    <p class="hidden sm:block text-xs text-gray-300 -mt-3">
                        {text(locale, "modal.tap.hint")}
                    </p>
                </div>
            </div>
        })
    }
}

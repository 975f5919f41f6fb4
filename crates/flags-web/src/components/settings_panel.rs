use flags_app::{Message, SpeechRate, UiMode};
use flags_core::{text, Locale};
use leptos::prelude::*;

use crate::dispatcher::use_dispatch;
use crate::theme::{self, gradients};

/// Speech rate presets and language choice
#[component]
pub fn SettingsPanel() -> impl IntoView {
    let dispatch = use_dispatch();
    let state = dispatch.state();
    let open = Memo::new(move |_| state.with(|s| s.ui_mode == UiMode::Settings));
    let locale = Memo::new(move |_| state.with(|s| s.effective_locale()));
    let active_rate = Memo::new(move |_| state.with(|s| SpeechRate::from_value(s.speech_rate)));

    move || {
        if !open.get() {
            return None;
        }

        Some(view! {
            <div
                class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/40 backdrop-blur-sm animate-[fadeIn_0.2s_ease-out]"
                role="dialog"
                aria-modal="true"
                on:click=move |_| dispatch.send(Message::CloseSettings)
            >
                <div
                    class="bg-white rounded-3xl shadow-2xl p-7 w-full max-w-xs flex flex-col gap-5 animate-[popIn_0.3s_cubic-bezier(0.34,1.56,0.64,1)]"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex items-center justify-between">
                        <h2 class="text-xl font-black text-gray-800 flex items-center gap-2">
                            {move || text(locale.get(), "settings.title")}
                        </h2>
                        <button
                            class="w-8 h-8 flex items-center justify-center rounded-full bg-gray-100 hover:bg-gray-200 text-gray-500 transition-colors"
                            on:click=move |_| dispatch.send(Message::CloseSettings)
                        >
                            "✕"
                        </button>
                    </div>

                    // Speaking speed
                    <div class="flex flex-col gap-3">
                        <p class="text-sm font-black text-gray-600 uppercase tracking-wider">
                            {move || text(locale.get(), "settings.speed")}
                        </p>
                        <div class="flex gap-2">
                            {SpeechRate::ALL.into_iter().map(|preset| view! {
                                <button
                                    class=move || theme::option_button(active_rate.get() == Some(preset))
                                    on:click=move |_| dispatch.send(Message::SetSpeechRate(preset.value()))
                                >
                                    {move || text(locale.get(), preset.message_key())}
                                </button>
                            }).collect_view()}
                        </div>
                    </div>

                    // Language
                    <div class="flex flex-col gap-3">
                        <p class="text-sm font-black text-gray-600 uppercase tracking-wider">
                            {move || text(locale.get(), "settings.language")}
                        </p>
                        <div class="flex gap-2">
                            {Locale::ALL.into_iter().map(|option| view! {
                                <button
                                    class=move || theme::option_button(locale.get() == option)
                                    lang=option.tag()
                                    on:click=move |_| dispatch.send(Message::ChooseLocale(option))
                                >
                                    {move || text(locale.get(), &format!("lang.{}", option.tag()))}
                                </button>
                            }).collect_view()}
                        </div>
                    </div>

                    <button
                        class=theme::action_button(gradients::PRIMARY)
                        on:click=move |_| dispatch.send(Message::CloseSettings)
                    >
                        {move || text(locale.get(), "settings.done")}
                    </button>
                </div>
            </div>
        })
    }
}

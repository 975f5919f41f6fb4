use flags_app::Message;
use flags_core::{text, Locale};
use leptos::prelude::*;

use crate::dispatcher::use_dispatch;
use crate::theme::gradients;

/// First-run language choice, shown in every supported language at once
#[component]
pub fn LanguagePicker() -> impl IntoView {
    let dispatch = use_dispatch();

    view! {
        <div class=format!(
            "fixed inset-0 z-50 flex flex-col items-center justify-center bg-gradient-to-br {} p-6 animate-[fadeIn_0.3s_ease-out]",
            gradients::BRAND
        )>
            <div class="text-8xl mb-6">"🌍"</div>

            {Locale::ALL.into_iter().enumerate().map(|(i, locale)| {
                let title_class = if i == 0 {
                    "text-3xl font-black text-white text-center mb-1 drop-shadow"
                } else {
                    "text-xl font-black text-white/80 text-center mb-1"
                };
                view! {
                    <h1 class=title_class lang=locale.tag()>
                        {text(locale, "langpicker.title")}
                    </h1>
                }
            }).collect_view()}

            <p class="text-sm text-white/60 text-center mt-1 mb-10">
                {Locale::ALL
                    .iter()
                    .map(|locale| text(*locale, "langpicker.subtitle"))
                    .collect::<Vec<_>>()
                    .join(" • ")}
            </p>

            <div class="flex flex-col gap-4 w-full max-w-xs">
                {Locale::ALL.into_iter().map(|locale| view! {
                    <button
                        class="flex items-center gap-5 px-7 py-5 rounded-3xl bg-white shadow-xl hover:scale-105 active:scale-95 transition-all duration-150 hover:shadow-2xl"
                        lang=locale.tag()
                        on:click=move |_| dispatch.send(Message::ChooseLocale(locale))
                    >
                        <span class="text-5xl">{locale.glyph()}</span>
                        <div class="text-left">
                            <p class="text-xl font-black text-gray-800">{locale.native_name()}</p>
                            <p class="text-sm text-gray-400">{locale.english_name()}</p>
                        </div>
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}

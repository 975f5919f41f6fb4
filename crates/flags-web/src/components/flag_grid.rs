use flags_core::{group, text, Catalogue, CountryGroup, GroupLabel, Locale};
use leptos::prelude::*;

use crate::components::FlagCard;
use crate::dispatcher::use_dispatch;
use crate::theme::{self, gradients};

/// The catalogue as a grid, grouped per the current filter mode
#[component]
pub fn FlagGrid() -> impl IntoView {
    let state = use_dispatch().state();
    let locale = Memo::new(move |_| state.with(|s| s.effective_locale()));
    let mode = Memo::new(move |_| state.with(|s| s.filter_mode));

    let groups: Memo<Vec<CountryGroup<'static>>> = Memo::new(move |_| {
        group(Catalogue::builtin(), mode.get(), locale.get().tag())
    });

    view! {
        <main class="max-w-4xl mx-auto px-4 py-8 space-y-10">
            {move || {
                let locale = locale.get();
                let groups = groups.get();
                let offsets = card_offsets(&groups);
                groups
                    .into_iter()
                    .zip(offsets)
                    .map(|(group, first)| {
                        view! { <GroupSection group=group first_index=first locale=locale /> }
                    })
                    .collect_view()
            }}
        </main>
    }
}

/// Position of each group's first card across the whole grid
fn card_offsets(groups: &[CountryGroup<'_>]) -> Vec<usize> {
    groups
        .iter()
        .scan(0, |next, group| {
            let first = *next;
            *next += group.len();
            Some(first)
        })
        .collect()
}

#[component]
fn GroupSection(group: CountryGroup<'static>, first_index: usize, locale: Locale) -> impl IntoView {
    let header = group
        .label
        .as_ref()
        .map(|label| view! { <GroupHeader label=label.clone() count=group.len() locale=locale /> });

    view! {
        <section>
            {header}
            <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-4">
                {group
                    .items
                    .iter()
                    .enumerate()
                    .map(|(offset, record)| {
                        view! { <FlagCard record=*record index=first_index + offset locale=locale /> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn GroupHeader(label: GroupLabel, count: usize, locale: Locale) -> impl IntoView {
    let (gradient, badge, title) = match &label {
        GroupLabel::Continent(continent) => (
            theme::continent_gradient(*continent),
            continent.emoji().to_string(),
            Some(text(locale, continent.message_key())),
        ),
        GroupLabel::Letter(letter) => (gradients::PRIMARY, letter.clone(), None),
    };

    view! {
        <div class=format!(
            "flex items-center gap-3 mb-5 px-4 py-2.5 rounded-2xl w-fit shadow-md bg-gradient-to-r {gradient}"
        )>
            <span class="text-2xl font-black text-white">{badge}</span>
            {title.map(|title| view! {
                <h2 class="text-lg font-black text-white tracking-wide">{title}</h2>
            })}
            <span class="bg-white/30 text-white text-xs font-black px-2 py-0.5 rounded-full">
                {count}
            </span>
        </div>
    }
}

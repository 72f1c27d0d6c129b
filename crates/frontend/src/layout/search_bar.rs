use contracts::catalog::FilterCriteria;
use contracts::enums::ServiceCategory;
use leptos::prelude::*;

use crate::i18n::{t, use_lang};

/// Строка поиска: текст, категория и (опционально) город.
///
/// Каждое изменение собирает свежие критерии и отдает их наверх —
/// фильтрация происходит у владельца снимка каталога.
#[component]
pub fn SearchBar(
    #[prop(into)] on_search: Callback<FilterCriteria>,
    #[prop(optional)] show_city: bool,
) -> impl IntoView {
    let lang = use_lang();

    let (term, set_term) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (city, set_city) = signal(String::new());

    let emit = move || {
        let category = category.get_untracked();
        let city = city.get_untracked();
        on_search.run(FilterCriteria {
            term: term.get_untracked(),
            category: (!category.is_empty()).then_some(category),
            city: (!city.trim().is_empty()).then_some(city),
        });
    };

    view! {
        <div class="search-bar">
            <input
                type="text"
                class="search-input"
                placeholder=move || t(lang.get(), "search-placeholder")
                prop:value=move || term.get()
                on:input=move |ev| {
                    set_term.set(event_target_value(&ev));
                    emit();
                }
            />
            <select
                class="search-category"
                on:change=move |ev| {
                    set_category.set(event_target_value(&ev));
                    emit();
                }
            >
                <option value="">{move || t(lang.get(), "search-all-categories")}</option>
                {ServiceCategory::all()
                    .into_iter()
                    .map(|c| {
                        view! {
                            <option value=c.code()>
                                {move || c.display_name(lang.get())}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {show_city
                .then(|| {
                    view! {
                        <input
                            type="text"
                            class="search-city"
                            placeholder=move || t(lang.get(), "search-city-placeholder")
                            prop:value=move || city.get()
                            on:input=move |ev| {
                                set_city.set(event_target_value(&ev));
                                emit();
                            }
                        />
                    }
                })}
        </div>
    }
}

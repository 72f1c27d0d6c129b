use contracts::catalog::{filter_groups, group_by_category, CategoryGroups, FilterCriteria};
use contracts::enums::ServiceCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::domain::a001_service_listing::ui::ServiceCard;
use crate::i18n::{t, use_lang};
use crate::layout::{Footer, Header};
use crate::shared::api;

/// Сервисы одного города, сгруппированные по категориям
#[component]
pub fn CityPage() -> impl IntoView {
    let lang = use_lang();
    let params = use_params_map();

    let slug = Memo::new(move |_| {
        let raw = params.get().get("slug").unwrap_or_default();
        urlencoding::decode(&raw)
            .map(|decoded| decoded.into_owned())
            .unwrap_or(raw)
    });

    let (loading, set_loading) = signal(true);
    let (fetch_failed, set_fetch_failed) = signal(false);
    let (groups, set_groups) = signal(CategoryGroups::new());

    spawn_local(async move {
        match api::fetch_all_services().await {
            Ok(services) => set_groups.set(group_by_category(&services)),
            Err(e) => {
                log::error!("Error fetching services: {e}");
                set_fetch_failed.set(true);
            }
        }
        set_loading.set(false);
    });

    let filtered = Memo::new(move |_| {
        let criteria = FilterCriteria {
            city: Some(slug.get()),
            ..Default::default()
        };
        groups.with(|g| filter_groups(g, &criteria))
    });

    let content = move || {
        if loading.get() {
            return view! { <div class="loading">{t(lang.get(), "loading")}</div> }.into_any();
        }
        if fetch_failed.get() {
            return view! { <div class="loading">{t(lang.get(), "fetch-error")}</div> }.into_any();
        }
        let filtered = filtered.get();
        if filtered.is_empty() {
            return view! { <div class="loading">{t(lang.get(), "no-services")}</div> }.into_any();
        }
        filtered
            .into_iter()
            .map(|(category, services)| {
                let title_code = category.clone();
                view! {
                    <section class="category-section">
                        <h2 class="category-title">
                            {move || {
                                ServiceCategory::display_name_for_code(&title_code, lang.get())
                            }}
                        </h2>
                        <div class="services-grid">
                            {services
                                .into_iter()
                                .map(|service| view! { <ServiceCard service=service /> })
                                .collect_view()}
                        </div>
                    </section>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="city-page">
            <Header />
            <h1 class="main-title">{move || slug.get()}</h1>
            {content}
            <Footer />
        </div>
    }
}

use contracts::catalog::{filter_groups, group_by_category, CategoryGroups, FilterCriteria};
use contracts::enums::ServiceCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::domain::a001_service_listing::ui::ServiceCard;
use crate::i18n::{t, use_lang};
use crate::layout::{Footer, Header};
use crate::shared::api;

/// Все сервисы одной категории (ограничение категории + поиск по тексту)
#[component]
pub fn CategoryPage() -> impl IntoView {
    let lang = use_lang();
    let params = use_params_map();

    let category = Memo::new(move |_| {
        let raw = params.get().get("category").unwrap_or_default();
        urlencoding::decode(&raw)
            .map(|decoded| decoded.into_owned())
            .unwrap_or(raw)
    });

    let (loading, set_loading) = signal(true);
    let (fetch_failed, set_fetch_failed) = signal(false);
    let (groups, set_groups) = signal(CategoryGroups::new());
    let (criteria, set_criteria) = signal(FilterCriteria::default());

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

    // Ограничение категории фиксировано адресом страницы
    let services = Memo::new(move |_| {
        let constrained = FilterCriteria {
            category: Some(category.get()),
            ..criteria.get()
        };
        groups.with(|g| {
            filter_groups(g, &constrained)
                .remove(&category.get())
                .unwrap_or_default()
        })
    });

    let content = move || {
        if loading.get() {
            return view! { <div class="loading">{t(lang.get(), "loading")}</div> }.into_any();
        }
        if fetch_failed.get() {
            return view! { <div class="loading">{t(lang.get(), "fetch-error")}</div> }.into_any();
        }
        let services = services.get();
        if services.is_empty() {
            return view! { <div class="loading">{t(lang.get(), "no-services")}</div> }.into_any();
        }
        view! {
            <div class="services-grid">
                {services
                    .into_iter()
                    .map(|service| view! { <ServiceCard service=service /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="category-page">
            <Header on_search=Callback::new(move |c: FilterCriteria| set_criteria.set(c)) />
            <h1 class="main-title">
                {move || ServiceCategory::display_name_for_code(&category.get(), lang.get())}
            </h1>
            {content}
            <Footer />
        </div>
    }
}

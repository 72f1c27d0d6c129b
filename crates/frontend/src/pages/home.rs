use std::collections::BTreeMap;

use contracts::catalog::{
    filter_groups, group_by_category, sample_featured, CategoryGroups, FilterCriteria,
    FEATURED_PER_CATEGORY,
};
use contracts::domain::a001_service_listing::aggregate::ServiceListing;
use contracts::enums::ServiceCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::domain::a001_service_listing::ui::ServiceCard;
use crate::i18n::{t, use_lang};
use crate::layout::{Footer, Header};
use crate::shared::api;

const HERO_IMAGES: &[&str] = &[
    "/images/car-1.png",
    "/images/car-2.png",
    "/images/car-3.png",
    "/images/car-4.png",
    "/images/car-5.webp",
    "/images/car-6.png",
    "/images/car-7.png",
    "/images/car-8.png",
    "/images/car-9.png",
];

struct CityAreaInfo {
    name: &'static str,
    slug: &'static str,
    count: u32,
    areas: &'static [&'static str],
}

const CITY_AREAS: &[CityAreaInfo] = &[
    CityAreaInfo {
        name: "القاهرة",
        slug: "cairo",
        count: 213,
        areas: &[
            "Elmanial",
            "المنيل",
            "مدينة الشروق",
            "مدينة السلام",
            "الرحاب",
            "المقطم",
        ],
    },
    CityAreaInfo {
        name: "الجيزة",
        slug: "giza",
        count: 83,
        areas: &["الدقي", "العياط", "المهندسين", "الهرم", "6 أكتوبر"],
    },
    CityAreaInfo {
        name: "الاسكندرية",
        slug: "alexandria",
        count: 36,
        areas: &["العامرية", "الطريق الدائري", "برج العرب", "EIRAML Station", "المندرة"],
    },
];

/// Главная: hero, быстрые категории, города, секции каталога.
///
/// Снимок каталога загружается один раз; группировка и случайная подборка
/// считаются однократно на fetch, фильтрация — заново на каждое изменение
/// критериев поиска.
#[component]
pub fn HomePage() -> impl IntoView {
    let lang = use_lang();

    let (loading, set_loading) = signal(true);
    let (fetch_failed, set_fetch_failed) = signal(false);
    let (groups, set_groups) = signal(CategoryGroups::new());
    let (featured, set_featured) = signal(BTreeMap::<String, Vec<ServiceListing>>::new());
    let (criteria, set_criteria) = signal(FilterCriteria::default());

    Effect::new(move |_| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(t(lang.get(), "title"));
        }
    });

    // Один fetch на загрузку страницы; без внутренних ретраев
    spawn_local(async move {
        match api::fetch_all_services().await {
            Ok(services) => {
                let grouped = group_by_category(&services);

                // Подборка "featured" фиксируется на время визита
                let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
                let mut samples = BTreeMap::new();
                for (category, records) in &grouped {
                    match sample_featured(records, FEATURED_PER_CATEGORY, &mut rng) {
                        Ok(picked) => {
                            samples.insert(category.clone(), picked);
                        }
                        Err(e) => log::error!("featured sampling failed: {e}"),
                    }
                }

                set_groups.set(grouped);
                set_featured.set(samples);
            }
            Err(e) => {
                log::error!("Error fetching services: {e}");
                set_fetch_failed.set(true);
            }
        }
        set_loading.set(false);
    });

    let filtered =
        Memo::new(move |_| groups.with(|g| criteria.with(|c| filter_groups(g, c))));

    let (hero_index, set_hero_index) = signal(0usize);
    let interval_handle = leptos::leptos_dom::helpers::set_interval_with_handle(
        move || {
            set_hero_index.update(|i| *i = (*i + 1) % HERO_IMAGES.len());
        },
        std::time::Duration::from_millis(3000),
    )
    .expect("failed to set hero rotation interval");
    on_cleanup(move || interval_handle.clear());

    let catalog_sections = move || {
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

        let featured = featured.get();
        let search_active = criteria.get().is_active();

        filtered
            .into_iter()
            .map(|(category, services)| {
                // без активного поиска секция показывает случайную подборку
                let cards = if search_active {
                    services
                } else {
                    featured.get(&category).cloned().unwrap_or(services)
                };
                let title_code = category.clone();
                let href = format!("/category/{}", urlencoding::encode(&category));

                view! {
                    <section class="category-section" id="categories">
                        <div class="category-header">
                            <h2 class="category-title">
                                {move || {
                                    ServiceCategory::display_name_for_code(&title_code, lang.get())
                                }}
                            </h2>
                            <a href=href class="button">
                                {move || t(lang.get(), "category-button")}
                            </a>
                        </div>
                        <div class="services-grid">
                            {cards
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
        <div class="home-container">
            <Header
                on_search=Callback::new(move |c: FilterCriteria| set_criteria.set(c))
                show_city=true
            />
            <section class="hero-section-with-image">
                <div class="hero-text-content">
                    <h1 class="website-title">{move || t(lang.get(), "website-title")}</h1>
                    <h1 class="hero-title">{move || t(lang.get(), "hero-title")}</h1>
                    <p class="hero-desc">{move || t(lang.get(), "hero-desc")}</p>
                    <a href="#categories" class="hero-cta">
                        {move || t(lang.get(), "hero-cta")}
                    </a>
                </div>
                <div class="hero-image-wrapper">
                    <img
                        class="hero-image"
                        src=move || HERO_IMAGES[hero_index.get()]
                        alt="Hero Car"
                    />
                </div>
            </section>
            <BestCategories />
            <CarServicesArea />
            <h1 class="main-title">{move || t(lang.get(), "main-title")}</h1>
            {catalog_sections}
            <Footer />
        </div>
    }
}

/// Полоса быстрых переходов по категориям
#[component]
fn BestCategories() -> impl IntoView {
    let lang = use_lang();

    view! {
        <div class="best-categories">
            <h2>{move || t(lang.get(), "best-categories")}</h2>
            <div class="best-categories-links">
                {ServiceCategory::all()
                    .into_iter()
                    .map(|category| {
                        let href = format!(
                            "/category/{}",
                            urlencoding::encode(category.code()),
                        );
                        view! {
                            <a href=href class="best-category-link">
                                {move || category.display_name(lang.get())}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Карточки городов с популярными районами
#[component]
fn CarServicesArea() -> impl IntoView {
    let lang = use_lang();

    view! {
        <div class="car-services-area-cards">
            <div class="car-services-area-heading">
                <h2>{move || t(lang.get(), "car-services-area-title")}</h2>
                <p>{move || t(lang.get(), "car-services-area-p")}</p>
            </div>
            <div class="areas">
                {CITY_AREAS
                    .iter()
                    .map(|city| {
                        let href = format!("/city/{}", city.slug);
                        view! {
                            <a href=href class="car-service-card">
                                <div class="city-title">{city.name}</div>
                                <div class="service-count">
                                    {move || t(lang.get(), "more-than")}
                                    " "
                                    {city.count}
                                    " "
                                    {move || t(lang.get(), "service-centers")}
                                </div>
                                <div class="areas-title">
                                    {move || t(lang.get(), "popular-areas")}
                                </div>
                                <ul class="areas-list">
                                    {city.areas
                                        .iter()
                                        .map(|area| view! { <li>" • " {*area}</li> })
                                        .collect_view()}
                                </ul>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

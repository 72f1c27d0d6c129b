use contracts::domain::a001_service_listing::aggregate::ServiceListing;
use contracts::enums::ServiceCategory;
use leptos::prelude::*;

use crate::i18n::use_lang;

/// Карточка сервиса в сетке каталога
#[component]
pub fn ServiceCard(service: ServiceListing) -> impl IntoView {
    let lang = use_lang();

    let href = format!("/service/{}", service.to_string_id());
    let image = service
        .primary_image()
        .map(str::to_string)
        .or_else(|| service.logo.clone());
    let category = service.category.clone();
    let name = service.name.clone();
    let city = service.city.clone();

    view! {
        <a href=href class="service-card">
            {image
                .map(|src| {
                    view! { <img class="service-card-image" src=src alt=name.clone() /> }
                })}
            <div class="service-card-body">
                <h3 class="service-card-name">{name}</h3>
                <span class="service-card-category">
                    {move || ServiceCategory::display_name_for_code(&category, lang.get())}
                </span>
                <span class="service-card-city">{"📍 "}{city}</span>
            </div>
        </a>
    }
}

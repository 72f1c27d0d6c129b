use contracts::domain::a001_service_listing::aggregate::ServiceListing;
use contracts::enums::ServiceCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::i18n::{t, use_lang};
use crate::layout::{Footer, Header};
use crate::shared::api;

/// Страница сервиса: галерея, контакты, карта
#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let lang = use_lang();
    let params = use_params_map();

    let (service, set_service) = signal(None::<ServiceListing>);
    let (fetch_failed, set_fetch_failed) = signal(false);
    let (selected_image, set_selected_image) = signal(0usize);

    Effect::new(move |_| {
        let Some(id) = params.get().get("id") else {
            return;
        };
        spawn_local(async move {
            match api::fetch_service(&id).await {
                Ok(found) => {
                    set_selected_image.set(0);
                    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                        doc.set_title(&format!("{} | {}", found.name, t(lang.get_untracked(), "title")));
                    }
                    set_service.set(Some(found));
                }
                Err(e) => {
                    log::error!("Error fetching service {id}: {e}");
                    set_fetch_failed.set(true);
                }
            }
        });
    });

    let content = move || {
        if fetch_failed.get() {
            return view! { <div class="service-loading">{t(lang.get(), "fetch-error")}</div> }
                .into_any();
        }
        let Some(service) = service.get() else {
            return view! { <div class="service-loading">{t(lang.get(), "loading")}</div> }
                .into_any();
        };

        let category = service.category.clone();
        let images = service.images.clone();
        let gallery_images = images.clone();
        let name = service.name.clone();
        let first_social = service.social.first().cloned();

        view! {
            <div class="service-details-container">
                <div class="service-header">
                    {service
                        .logo
                        .clone()
                        .map(|logo| {
                            view! {
                                <div class="service-logo-wrapper">
                                    <img src=logo alt=format!("{} logo", name) class="service-logo" />
                                </div>
                            }
                        })}
                    <div class="service-header-info">
                        <h1 class="service-title">{service.name.clone()}</h1>
                        <span class="service-category">
                            {move || ServiceCategory::display_name_for_code(&category, lang.get())}
                        </span>
                    </div>
                </div>

                {(!images.is_empty())
                    .then(|| {
                        view! {
                            <div class="service-image-gallery">
                                <div class="service-primary-image-wrapper">
                                    <img
                                        class="service-primary-image"
                                        src=move || {
                                            gallery_images
                                                .get(selected_image.get())
                                                .cloned()
                                                .unwrap_or_default()
                                        }
                                        alt=service.name.clone()
                                    />
                                </div>
                                <div class="service-image-nav">
                                    {images
                                        .iter()
                                        .enumerate()
                                        .map(|(idx, img)| {
                                            view! {
                                                <button
                                                    class=move || {
                                                        if selected_image.get() == idx {
                                                            "service-image-thumb-btn active"
                                                        } else {
                                                            "service-image-thumb-btn"
                                                        }
                                                    }
                                                    on:click=move |_| set_selected_image.set(idx)
                                                >
                                                    <img class="service-image-thumb" src=img.clone() />
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })}

                {service
                    .description
                    .clone()
                    .map(|description| view! { <p class="service-description">{description}</p> })}

                <div class="service-info-section">
                    <div class="service-info-details">
                        <p class="service-address">"📍 " {service.city.clone()}</p>
                        <p class="service-address">"📍 " {service.address.clone()}</p>
                        {service
                            .contact
                            .iter()
                            .map(|number| contact_link(number))
                            .collect_view()}

                        <div class="service-offered-section">
                            <h2 class="service-offered-title">{move || t(lang.get(), "services")}</h2>
                            <ul class="service-offered-list">
                                {service
                                    .services_offered
                                    .iter()
                                    .map(|item| {
                                        view! { <li class="service-offered-item">{item.clone()}</li> }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                    {service
                        .location
                        .clone()
                        .map(|location| {
                            let map_frame = view! {
                                <iframe
                                    src=location
                                    width="600"
                                    height="450"
                                    referrerpolicy="no-referrer-when-downgrade"
                                ></iframe>
                            }
                                .attr("loading", "lazy");
                            view! {
                                <div class="service-map-wrapper">{map_frame}</div>
                            }
                        })}
                </div>

                {first_social
                    .map(|url| {
                        view! {
                            <div class="service-social">
                                <a href=url target="_blank" rel="noopener noreferrer">
                                    "Facebook"
                                </a>
                            </div>
                        }
                    })}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="service-detail-page">
            <Header />
            {content}
            <Footer />
        </div>
    }
}

/// Номер с префиксом "+" открывается в WhatsApp, остальные — по tel:
fn contact_link(number: &str) -> impl IntoView {
    let number = number.to_string();
    if number.starts_with('+') {
        let href = format!("https://wa.me/{}", number);
        view! {
            <a href=href class="service-contact whatsapp">
                "WhatsApp: "
                {number}
            </a>
        }
        .into_any()
    } else {
        let href = format!("tel:{}", number);
        view! {
            <a href=href class="service-contact">
                "📞 "
                {number}
            </a>
        }
        .into_any()
    }
}

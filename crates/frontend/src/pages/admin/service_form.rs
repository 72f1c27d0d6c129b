use contracts::domain::a001_service_listing::aggregate::{ServiceListing, ServiceListingDto};
use contracts::enums::ServiceCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::i18n::{t, use_lang};
use crate::shared::{api, auth_storage};

fn parse_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Форма создания/редактирования карточки.
///
/// Списочные поля (телефоны, фото, соцсети, услуги) редактируются
/// текстом — одна строка на значение.
#[component]
pub fn ServiceForm(
    existing: Option<ServiceListing>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let lang = use_lang();

    let editing_id = existing.as_ref().map(|s| s.to_string_id());
    let base = existing.map(|s| s.to_dto()).unwrap_or_else(|| ServiceListingDto {
        category: ServiceCategory::Repair.code().to_string(),
        ..Default::default()
    });

    let (name, set_name) = signal(base.name.clone());
    let (description, set_description) = signal(base.description.clone().unwrap_or_default());
    let (category, set_category) = signal(base.category.clone());
    let (city, set_city) = signal(base.city.clone());
    let (address, set_address) = signal(base.address.clone());
    let (contact, set_contact) = signal(base.contact.join("\n"));
    let (images, set_images) = signal(base.images.join("\n"));
    let (logo, set_logo) = signal(base.logo.clone().unwrap_or_default());
    let (location, set_location) = signal(base.location.clone().unwrap_or_default());
    let (social, set_social) = signal(base.social.join("\n"));
    let (services_offered, set_services_offered) = signal(base.services_offered.join("\n"));
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(token) = auth_storage::get_admin_token() else {
            set_error.set(Some("Not authorized".to_string()));
            return;
        };

        let dto = ServiceListingDto {
            name: name.get_untracked(),
            description: optional(description.get_untracked()),
            category: category.get_untracked(),
            city: city.get_untracked(),
            address: address.get_untracked(),
            contact: parse_lines(&contact.get_untracked()),
            images: parse_lines(&images.get_untracked()),
            logo: optional(logo.get_untracked()),
            location: optional(location.get_untracked()),
            social: parse_lines(&social.get_untracked()),
            services_offered: parse_lines(&services_offered.get_untracked()),
        };

        let editing_id = editing_id.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_service(&token, &id, &dto).await,
                None => api::create_service(&token, &dto).await,
            };
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <form class="admin-service-form" on:submit=submit>
            {move || error.get().map(|e| view! { <div class="admin-error">{e}</div> })}

            <div class="form-row">
                <label>"Name"</label>
                <input
                    type="text"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <label>"Category"</label>
                <select on:change=move |ev| set_category.set(event_target_value(&ev))>
                    {ServiceCategory::all()
                        .into_iter()
                        .map(|c| {
                            view! {
                                <option
                                    value=c.code()
                                    selected=move || category.get() == c.code()
                                >
                                    {move || c.display_name(lang.get())}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="form-row">
                <label>"City"</label>
                <input
                    type="text"
                    required
                    prop:value=move || city.get()
                    on:input=move |ev| set_city.set(event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <label>"Address"</label>
                <input
                    type="text"
                    prop:value=move || address.get()
                    on:input=move |ev| set_address.set(event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <label>"Description"</label>
                <textarea
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-row">
                <label>"Contact numbers (one per line, \"+\" for WhatsApp)"</label>
                <textarea
                    rows="3"
                    prop:value=move || contact.get()
                    on:input=move |ev| set_contact.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-row">
                <label>"Image URLs (one per line, first is primary)"</label>
                <textarea
                    rows="3"
                    prop:value=move || images.get()
                    on:input=move |ev| set_images.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-row">
                <label>"Logo URL"</label>
                <input
                    type="text"
                    prop:value=move || logo.get()
                    on:input=move |ev| set_logo.set(event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <label>"Map embed URL"</label>
                <input
                    type="text"
                    prop:value=move || location.get()
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <label>"Social links (one per line)"</label>
                <textarea
                    rows="2"
                    prop:value=move || social.get()
                    on:input=move |ev| set_social.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-row">
                <label>"Services offered (one per line)"</label>
                <textarea
                    rows="3"
                    prop:value=move || services_offered.get()
                    on:input=move |ev| set_services_offered.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-actions">
                <button type="submit" class="button">
                    {move || t(lang.get(), "admin-save")}
                </button>
                <button
                    type="button"
                    class="button button-secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    {move || t(lang.get(), "admin-cancel")}
                </button>
            </div>
        </form>
    }
}

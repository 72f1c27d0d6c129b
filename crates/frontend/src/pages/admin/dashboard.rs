use contracts::domain::a001_service_listing::aggregate::ServiceListing;
use contracts::enums::ServiceCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::service_form::ServiceForm;
use crate::i18n::{t, use_lang};
use crate::shared::{api, auth_storage};

/// Что сейчас открыто в форме
#[derive(Clone)]
enum FormTarget {
    Create,
    Edit(Box<ServiceListing>),
}

/// Админ-панель: таблица карточек каталога + CRUD
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let lang = use_lang();
    let navigate = use_navigate();

    // Без токена сразу на страницу входа; сам токен проверяет бэкенд
    if auth_storage::get_admin_token().is_none() {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            navigate("/admin/login", Default::default());
        });
    }

    let (items, set_items) = signal(Vec::<ServiceListing>::new());
    let (error, set_error) = signal(None::<String>);
    let (form_target, set_form_target) = signal(None::<FormTarget>);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_all_services().await {
                Ok(services) => {
                    set_items.set(services);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let logout = {
        let navigate = navigate.clone();
        move |_| {
            auth_storage::clear_admin_token();
            navigate("/admin/login", Default::default());
        }
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Delete this service?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let Some(token) = auth_storage::get_admin_token() else {
            return;
        };
        spawn_local(async move {
            match api::delete_service(&token, &id).await {
                Ok(()) => {
                    set_items.update(|items| items.retain(|s| s.to_string_id() != id));
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let rows = move || {
        items
            .get()
            .into_iter()
            .map(|service| {
                let id = service.to_string_id();
                let edit_id = id.clone();
                let category = service.category.clone();
                view! {
                    <tr>
                        <td>{service.name.clone()}</td>
                        <td>
                            {move || {
                                ServiceCategory::display_name_for_code(&category, lang.get())
                            }}
                        </td>
                        <td>{service.city.clone()}</td>
                        <td class="admin-row-actions">
                            <button
                                class="button"
                                on:click=move |_| {
                                    let listing = items
                                        .get_untracked()
                                        .into_iter()
                                        .find(|s| s.to_string_id() == edit_id);
                                    if let Some(listing) = listing {
                                        set_form_target
                                            .set(Some(FormTarget::Edit(Box::new(listing))));
                                    }
                                }
                            >
                                {move || t(lang.get(), "admin-edit")}
                            </button>
                            <button
                                class="button button-danger"
                                on:click=move |_| handle_delete(id.clone())
                            >
                                {move || t(lang.get(), "admin-delete")}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="admin-dashboard">
            <div class="admin-header">
                <h1>{move || t(lang.get(), "admin-dashboard-title")}</h1>
                <div class="admin-header-actions">
                    <button
                        class="button"
                        on:click=move |_| set_form_target.set(Some(FormTarget::Create))
                    >
                        {move || t(lang.get(), "admin-new-service")}
                    </button>
                    <button class="button" on:click=logout>
                        {move || t(lang.get(), "admin-logout")}
                    </button>
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| view! { <div class="admin-error">{e}</div> })
            }}

            {move || {
                form_target
                    .get()
                    .map(|target| {
                        let existing = match target {
                            FormTarget::Create => None,
                            FormTarget::Edit(listing) => Some(*listing),
                        };
                        view! {
                            <ServiceForm
                                existing=existing
                                on_saved=Callback::new(move |_| {
                                    set_form_target.set(None);
                                    fetch();
                                })
                                on_cancel=Callback::new(move |_| set_form_target.set(None))
                            />
                        }
                    })
            }}

            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"City"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

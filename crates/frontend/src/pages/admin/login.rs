use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::i18n::{t, use_lang};
use crate::shared::{api, auth_storage};

/// Вход администратора: токен сохраняется в localStorage
#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let lang = use_lang();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<&'static str>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        let username = username.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            match api::login(username, password).await {
                Ok(response) => {
                    auth_storage::save_admin_token(&response.access_token);
                    navigate("/admin/dashboard", Default::default());
                }
                Err(e) => {
                    log::warn!("Login failed: {e}");
                    set_error.set(Some("admin-login-failed"));
                }
            }
        });
    };

    view! {
        <div class="admin-login-page">
            <div class="admin-login-card">
                <h1>{move || t(lang.get(), "admin-login-title")}</h1>
                {move || {
                    error
                        .get()
                        .map(|key| view! { <div class="admin-login-error">{t(lang.get(), key)}</div> })
                }}
                <form on:submit=submit class="admin-login-form">
                    <div>
                        <label>{move || t(lang.get(), "admin-username")}</label>
                        <input
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label>{move || t(lang.get(), "admin-password")}</label>
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="button">
                        {move || t(lang.get(), "admin-login-button")}
                    </button>
                </form>
            </div>
        </div>
    }
}

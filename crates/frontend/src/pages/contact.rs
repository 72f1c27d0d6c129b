use contracts::domain::a002_contact_message::aggregate::ContactMessageDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::i18n::{t, use_lang};
use crate::layout::{Footer, Header};
use crate::shared::api;

#[derive(Clone, Copy, PartialEq)]
enum SubmitState {
    Idle,
    Sent,
    Failed,
}

/// Форма обратной связи; обращение уходит в каталожный API
#[component]
pub fn ContactPage() -> impl IntoView {
    let lang = use_lang();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (state, set_state) = signal(SubmitState::Idle);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = ContactMessageDto {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        spawn_local(async move {
            match api::submit_contact(&dto).await {
                Ok(()) => {
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_message.set(String::new());
                    set_state.set(SubmitState::Sent);
                }
                Err(e) => {
                    log::error!("Contact form failed: {e}");
                    set_state.set(SubmitState::Failed);
                }
            }
        });
    };

    view! {
        <div class="contact-page">
            <Header />
            <div class="contact-container">
                <div class="contact-grid">
                    <div class="contact-left">
                        <h1 class="contact-title">{move || t(lang.get(), "contact-title")}</h1>
                        <div class="contact-info">
                            <p class="contact-detail">
                                "📞 " <a href="tel:01095016685">"01095016685"</a>
                            </p>
                            <p class="contact-detail">
                                "✉ "
                                <a href="mailto:info@emereld-marketing.online">
                                    "info@emereld-marketing.online"
                                </a>
                            </p>
                            <p class="contact-detail">
                                "WhatsApp: "
                                <a
                                    href="https://wa.me/201095016685"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "01095016685"
                                </a>
                            </p>
                        </div>
                        <div class="contact-advertise">
                            {move || t(lang.get(), "contact-advertise")}
                        </div>
                    </div>
                    <div class="contact-right">
                        <form class="contact-form" on:submit=submit>
                            <div>
                                <label for="name" class="contact-label">
                                    {move || t(lang.get(), "contact-name")}
                                </label>
                                <input
                                    type="text"
                                    id="name"
                                    class="contact-input"
                                    required
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label for="email" class="contact-label">
                                    {move || t(lang.get(), "contact-email")}
                                </label>
                                <input
                                    type="email"
                                    id="email"
                                    class="contact-input"
                                    required
                                    prop:value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label for="message" class="contact-label">
                                    {move || t(lang.get(), "contact-message")}
                                </label>
                                <textarea
                                    id="message"
                                    class="contact-textarea"
                                    rows="4"
                                    required
                                    prop:value=move || message.get()
                                    on:input=move |ev| set_message.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <button type="submit" class="button">
                                {move || t(lang.get(), "contact-send")}
                            </button>
                            {move || match state.get() {
                                SubmitState::Idle => ().into_any(),
                                SubmitState::Sent => {
                                    view! {
                                        <p class="contact-status ok">
                                            {t(lang.get(), "contact-thanks")}
                                        </p>
                                    }
                                        .into_any()
                                }
                                SubmitState::Failed => {
                                    view! {
                                        <p class="contact-status error">
                                            {t(lang.get(), "contact-error")}
                                        </p>
                                    }
                                        .into_any()
                                }
                            }}
                        </form>
                    </div>
                </div>
            </div>
            <Footer />
        </div>
    }
}

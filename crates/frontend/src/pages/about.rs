use leptos::prelude::*;

use crate::i18n::{t, use_lang};
use crate::layout::{Footer, Header};

#[component]
pub fn AboutPage() -> impl IntoView {
    let lang = use_lang();

    view! {
        <div class="about-page">
            <Header />
            <div class="about-container">
                <h1 class="about-title">{move || t(lang.get(), "about-title")}</h1>
                <p class="about-text">{move || t(lang.get(), "about-text")}</p>
            </div>
            <Footer />
        </div>
    }
}

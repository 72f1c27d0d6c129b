use leptos::prelude::*;

use crate::i18n::{t, use_lang};

#[component]
pub fn Footer() -> impl IntoView {
    let lang = use_lang();

    view! {
        <footer class="site-footer">
            <div class="footer-links">
                <a href="/about">{move || t(lang.get(), "nav_about")}</a>
                <a href="/contact">{move || t(lang.get(), "nav_contact")}</a>
                <a href="/blog">{move || t(lang.get(), "nav_blog")}</a>
            </div>
            <div class="footer-copy">
                {move || t(lang.get(), "title")}
                " © 2025"
            </div>
        </footer>
    }
}

use contracts::catalog::FilterCriteria;
use leptos::prelude::*;

use crate::i18n::{t, toggle_lang, use_lang};
use crate::layout::SearchBar;

/// Шапка сайта: навигация, переключатель языка, опциональный поиск
#[component]
pub fn Header(
    #[prop(optional, into)] on_search: Option<Callback<FilterCriteria>>,
    #[prop(optional)] show_city: bool,
) -> impl IntoView {
    let lang = use_lang();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="site-header">
            <div class="site-title">
                <a href="/">{move || t(lang.get(), "title")}</a>
            </div>
            <button
                class="menu-toggle"
                aria-label="Toggle navigation menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                <span class="menu-icon">"\u{2630}"</span>
            </button>
            <nav class=move || {
                if menu_open.get() { "site-nav open" } else { "site-nav" }
            }>
                <ul class="nav-list">
                    <li class="nav-item">
                        <a href="/" class="nav-link" on:click=move |_| set_menu_open.set(false)>
                            {move || t(lang.get(), "nav_home")}
                        </a>
                    </li>
                    <li class="nav-item">
                        <a href="/about" class="nav-link" on:click=move |_| set_menu_open.set(false)>
                            {move || t(lang.get(), "nav_about")}
                        </a>
                    </li>
                    <li class="nav-item">
                        <a href="/blog" class="nav-link" on:click=move |_| set_menu_open.set(false)>
                            {move || t(lang.get(), "nav_blog")}
                        </a>
                    </li>
                    <li class="nav-item">
                        <a href="/contact" class="nav-link" on:click=move |_| set_menu_open.set(false)>
                            {move || t(lang.get(), "nav_contact")}
                        </a>
                    </li>
                </ul>
            </nav>
            <div class="header-search">
                {on_search
                    .map(|cb| view! { <SearchBar on_search=cb show_city=show_city /> })}
            </div>
            <button class="language-switch-btn" on:click=move |_| toggle_lang(lang)>
                {move || t(lang.get(), "switch_language")}
            </button>
        </header>
    }
}

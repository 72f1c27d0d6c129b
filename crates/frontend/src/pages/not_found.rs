use leptos::prelude::*;

use crate::layout::{Footer, Header};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <Header />
            <div class="loading">"404"</div>
            <Footer />
        </div>
    }
}

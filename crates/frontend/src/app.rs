use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::i18n::{provide_lang, use_lang};
use crate::pages;
use crate::pages::not_found::NotFoundPage;

#[component]
pub fn App() -> impl IntoView {
    // Сигнал языка доступен всему дереву через context
    provide_lang();
    let lang = use_lang();

    view! {
        <div class="app-root" dir=move || lang.get().dir()>
            <Router>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=pages::home::HomePage />
                    <Route path=path!("/category/:category") view=pages::category::CategoryPage />
                    <Route path=path!("/city/:slug") view=pages::city::CityPage />
                    <Route path=path!("/service/:id") view=pages::service_detail::ServiceDetailPage />
                    <Route path=path!("/about") view=pages::about::AboutPage />
                    <Route path=path!("/contact") view=pages::contact::ContactPage />
                    <Route path=path!("/blog") view=pages::blog::BlogPage />
                    <Route path=path!("/blog/:slug") view=pages::blog_article::BlogArticlePage />
                    <Route path=path!("/admin/login") view=pages::admin::login::AdminLoginPage />
                    <Route path=path!("/admin/dashboard") view=pages::admin::dashboard::AdminDashboardPage />
                </Routes>
            </Router>
        </div>
    }
}

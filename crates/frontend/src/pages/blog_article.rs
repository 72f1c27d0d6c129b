use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::i18n::{t, use_lang};
use crate::layout::{Footer, Header};

/// Статья блога; контент пока статический
#[component]
pub fn BlogArticlePage() -> impl IntoView {
    let lang = use_lang();
    let params = use_params_map();
    let slug = Memo::new(move |_| params.get().get("slug").unwrap_or_default());

    let article = move || match slug.get().as_str() {
        "led" => view! {
            <article class="blog-article">
                <h1>"ما هي أفضل لمبات LED سيارات في مصر ؟"</h1>
                <span class="blog-article-date">"19 / 7 / 2025"</span>
                <img
                    src="https://i.ibb.co/V0XJZKVc/Best-Car-LED-Bulbs.webp"
                    alt="Best Car LED Bulbs"
                />
                <p>
                    "إضاءة السيارة من أهم عناصر الأمان أثناء القيادة الليلية. في هذا المقال نقارن بين أشهر لمبات الليد المتاحة في السوق المصري من حيث قوة الإضاءة والعمر الافتراضي والسعر."
                </p>
                <p>
                    "قبل الشراء تأكد من توافق مقاس اللمبة مع فانوس سيارتك، وركبها لدى مركز موثوق — يمكنك العثور على أقرب مركز عبر الكتالوج على الصفحة الرئيسية."
                </p>
            </article>
        }
        .into_any(),
        _ => view! { <div class="loading">{t(lang.get(), "no-services")}</div> }.into_any(),
    };

    view! {
        <div class="blog-article-page">
            <Header />
            {article}
            <Footer />
        </div>
    }
}

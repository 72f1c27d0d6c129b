use leptos::prelude::*;

use crate::layout::{Footer, Header};

struct BlogPost {
    slug: &'static str,
    heading: &'static str,
    paragraph: &'static str,
    img_link: &'static str,
    date: &'static str,
}

const BLOG_POSTS: &[BlogPost] = &[BlogPost {
    slug: "led",
    heading: "ما هي أفضل لمبات LED سيارات في مصر ؟",
    paragraph: "بمقارنة واضحة تعرف على أفضل لمبات ليد للسيارات تباع في السوق المصري، وتعرف على نقاط قوة وضعف كل اللمبات المتميزة.",
    img_link: "https://i.ibb.co/V0XJZKVc/Best-Car-LED-Bulbs.webp",
    date: "19 / 7 / 2025",
}];

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <div class="blog-page">
            <Header />
            <div class="blog">
                {BLOG_POSTS
                    .iter()
                    .map(|post| {
                        let href = format!("/blog/{}", post.slug);
                        view! {
                            <a href=href class="blog-card">
                                <div class="image">
                                    <img src=post.img_link alt=post.heading />
                                </div>
                                <div class="description">
                                    <span>{post.date}</span>
                                    <h2>{post.heading}</h2>
                                    <p>{post.paragraph}</p>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <Footer />
        </div>
    }
}

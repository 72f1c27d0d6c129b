//! Двуязычный интерфейс (ar/en): таблица строк и сигнал текущего языка.
//!
//! Надписи категорий живут не здесь, а в `ServiceCategory::display_name` —
//! единый словарь, отвязанный от логики фильтрации.

use contracts::enums::Lang;
use leptos::prelude::*;

const LANG_STORAGE_KEY: &str = "lang";

/// Сигнал текущего языка, доступный всему дереву компонентов
#[derive(Clone, Copy)]
pub struct LangContext(pub RwSignal<Lang>);

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn stored_lang() -> Lang {
    local_storage()
        .and_then(|s| s.get_item(LANG_STORAGE_KEY).ok().flatten())
        .and_then(|code| Lang::from_code(&code))
        .unwrap_or_default()
}

/// Инициализировать контекст языка (однократно в App)
pub fn provide_lang() {
    provide_context(LangContext(RwSignal::new(stored_lang())));
}

pub fn use_lang() -> RwSignal<Lang> {
    use_context::<LangContext>()
        .expect("LangContext not found in component tree")
        .0
}

/// Переключить язык и запомнить выбор
pub fn toggle_lang(lang: RwSignal<Lang>) {
    let next = lang.get_untracked().toggled();
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(LANG_STORAGE_KEY, next.code());
    }
    lang.set(next);
}

/// Перевод строки интерфейса; незнакомый ключ отображается как есть
pub fn t(lang: Lang, key: &'static str) -> &'static str {
    for &(k, en, ar) in TRANSLATIONS {
        if k == key {
            return match lang {
                Lang::En => en,
                Lang::Ar => ar,
            };
        }
    }
    key
}

/// (ключ, английский, арабский)
pub const TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("title", "Car Market", "كار ماركت"),
    ("website-title", "Car Market", "كار ماركت"),
    (
        "hero-title",
        "Everything your car needs in one place",
        "كل ما تحتاجه سيارتك في مكان واحد",
    ),
    (
        "hero-desc",
        "Find trusted repair centers, car washes, spare parts and more near you.",
        "اعثر على أفضل مراكز الصيانة وغسيل السيارات وقطع الغيار بالقرب منك.",
    ),
    ("hero-cta", "Browse services", "تصفح الخدمات"),
    ("main-title", "Car services", "خدمات السيارات"),
    ("nav_home", "Home", "الرئيسية"),
    ("nav_about", "About", "من نحن"),
    ("nav_contact", "Contact", "اتصل بنا"),
    ("nav_blog", "Blog", "المدونة"),
    ("switch_language", "العربية", "English"),
    ("category-button", "View all", "عرض الكل"),
    ("best-categories", "Best categories", "أفضل الفئات"),
    ("services", "Services", "الخدمات"),
    ("loading", "Loading...", "جار التحميل..."),
    ("no-services", "No services found.", "لا توجد خدمات."),
    (
        "fetch-error",
        "Could not load services. Please try again later.",
        "تعذر تحميل الخدمات. حاول مرة أخرى لاحقا.",
    ),
    ("search-placeholder", "Search services...", "ابحث عن خدمة..."),
    ("search-city-placeholder", "City...", "المدينة..."),
    ("search-all-categories", "All categories", "كل الفئات"),
    (
        "car-services-area-title",
        "Car services near you",
        "خدمات السيارات بالقرب منك",
    ),
    (
        "car-services-area-p",
        "Pick your city and find trusted workshops around you.",
        "اختر مدينتك واعثر على مراكز موثوقة حولك.",
    ),
    ("popular-areas", "Popular areas", "مناطق شائعة"),
    ("more-than", "More than", "أكثر من"),
    ("service-centers", "service centers", "مركز صيانة"),
    ("contact-title", "Contact Us", "اتصل بنا"),
    ("contact-name", "Name", "الاسم"),
    ("contact-email", "Email", "البريد الإلكتروني"),
    ("contact-message", "Message", "الرسالة"),
    ("contact-send", "Send Message", "إرسال"),
    (
        "contact-thanks",
        "Thank you for contacting us!",
        "شكرا لتواصلك معنا!",
    ),
    (
        "contact-error",
        "There was an error. Please try again later.",
        "حدث خطأ. حاول مرة أخرى لاحقا.",
    ),
    (
        "contact-advertise",
        "If you want to advertise your service, give us a call to display your service on our website.",
        "إذا كنت تريد الإعلان عن خدمتك، اتصل بنا لعرضها على موقعنا.",
    ),
    ("about-title", "About Car Market", "عن كار ماركت"),
    (
        "about-text",
        "Car Market gathers the best car services in Egypt: repair centers, car washes, paint shops, spare parts, tire shops and showrooms. We help drivers find a trusted service nearby, compare offerings and get in touch directly.",
        "يجمع كار ماركت أفضل خدمات السيارات في مصر: مراكز الصيانة، غسيل السيارات، السمكرة والدوكو، قطع الغيار، محلات الإطارات ومعارض السيارات. نساعد السائقين في العثور على خدمة موثوقة قريبة والتواصل معها مباشرة.",
    ),
    ("admin-login-title", "Admin Login", "دخول المشرف"),
    ("admin-username", "Username", "اسم المستخدم"),
    ("admin-password", "Password", "كلمة المرور"),
    ("admin-login-button", "Login", "دخول"),
    (
        "admin-login-failed",
        "Invalid credentials",
        "بيانات الدخول غير صحيحة",
    ),
    ("admin-dashboard-title", "Service listings", "إدارة الخدمات"),
    ("admin-new-service", "New service", "خدمة جديدة"),
    ("admin-edit", "Edit", "تعديل"),
    ("admin-delete", "Delete", "حذف"),
    ("admin-save", "Save", "حفظ"),
    ("admin-cancel", "Cancel", "إلغاء"),
    ("admin-logout", "Logout", "خروج"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_both_translations() {
        for (key, en, ar) in TRANSLATIONS {
            assert!(!en.is_empty(), "missing en for {key}");
            assert!(!ar.is_empty(), "missing ar for {key}");
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        let mut keys: Vec<&str> = TRANSLATIONS.iter().map(|(k, _, _)| *k).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_lookup_and_fallback() {
        assert_eq!(t(Lang::En, "nav_home"), "Home");
        assert_eq!(t(Lang::Ar, "nav_home"), "الرئيسية");
        assert_eq!(t(Lang::En, "unknown-key"), "unknown-key");
    }
}

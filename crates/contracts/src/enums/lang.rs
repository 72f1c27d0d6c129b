use serde::{Deserialize, Serialize};

/// Языки интерфейса сайта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lang {
    En,
    Ar,
}

impl Lang {
    /// Получить код языка
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Lang::En),
            "ar" => Some(Lang::Ar),
            _ => None,
        }
    }

    /// Направление текста для HTML атрибута dir
    pub fn dir(&self) -> &'static str {
        match self {
            Lang::En => "ltr",
            Lang::Ar => "rtl",
        }
    }

    /// Переключить язык (на сайте ровно два языка)
    pub fn toggled(&self) -> Self {
        match self {
            Lang::En => Lang::Ar,
            Lang::Ar => Lang::En,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Ar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        assert_eq!(Lang::from_code(Lang::En.code()), Some(Lang::En));
        assert_eq!(Lang::from_code(Lang::Ar.code()), Some(Lang::Ar));
        assert_eq!(Lang::from_code("fr"), None);
    }

    #[test]
    fn test_dir() {
        assert_eq!(Lang::En.dir(), "ltr");
        assert_eq!(Lang::Ar.dir(), "rtl");
    }
}

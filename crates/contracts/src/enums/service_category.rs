use serde::{Deserialize, Serialize};

use crate::enums::lang::Lang;

/// Типы автосервисов (закрытый набор категорий каталога)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCategory {
    Repair,
    Carwash,
    Spray,
    SpareParts,
    Tires,
    Accessorize,
    Showroom,
}

impl ServiceCategory {
    /// Получить код категории (значение, хранимое в каталоге)
    ///
    /// Внимание: исторический формат — "spare parts" с пробелом.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceCategory::Repair => "repair",
            ServiceCategory::Carwash => "carwash",
            ServiceCategory::Spray => "spray",
            ServiceCategory::SpareParts => "spare parts",
            ServiceCategory::Tires => "tires",
            ServiceCategory::Accessorize => "accessorize",
            ServiceCategory::Showroom => "showroom",
        }
    }

    /// Человекочитаемое название категории на выбранном языке.
    ///
    /// Единственное место соответствия категория -> надпись; логика
    /// фильтрации каталога работает только с кодами.
    pub fn display_name(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (ServiceCategory::Repair, Lang::En) => "Repair Centers",
            (ServiceCategory::Repair, Lang::Ar) => "مراكز الصيانة",
            (ServiceCategory::Carwash, Lang::En) => "Car Wash",
            (ServiceCategory::Carwash, Lang::Ar) => "غسيل السيارات",
            (ServiceCategory::Spray, Lang::En) => "Paint & Spray Shops",
            (ServiceCategory::Spray, Lang::Ar) => "السمكرة والدوكو",
            (ServiceCategory::SpareParts, Lang::En) => "Spare Parts",
            (ServiceCategory::SpareParts, Lang::Ar) => "قطع الغيار",
            (ServiceCategory::Tires, Lang::En) => "Tire Shops",
            (ServiceCategory::Tires, Lang::Ar) => "محلات الإطارات",
            (ServiceCategory::Accessorize, Lang::En) => "Accessories",
            (ServiceCategory::Accessorize, Lang::Ar) => "اكسسوارات السيارات",
            (ServiceCategory::Showroom, Lang::En) => "Showrooms",
            (ServiceCategory::Showroom, Lang::Ar) => "معارض السيارات",
        }
    }

    /// Получить все категории в порядке показа на главной
    pub fn all() -> Vec<ServiceCategory> {
        vec![
            ServiceCategory::Repair,
            ServiceCategory::Carwash,
            ServiceCategory::Spray,
            ServiceCategory::SpareParts,
            ServiceCategory::Tires,
            ServiceCategory::Accessorize,
            ServiceCategory::Showroom,
        ]
    }

    /// Парсинг из кода; незнакомые значения каталог не отбрасывает,
    /// но отображаются они пустой надписью
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "repair" => Some(ServiceCategory::Repair),
            "carwash" => Some(ServiceCategory::Carwash),
            "spray" => Some(ServiceCategory::Spray),
            "spare parts" => Some(ServiceCategory::SpareParts),
            "tires" => Some(ServiceCategory::Tires),
            "accessorize" => Some(ServiceCategory::Accessorize),
            "showroom" => Some(ServiceCategory::Showroom),
            _ => None,
        }
    }

    /// Надпись для произвольного кода категории: пустая строка для незнакомых
    pub fn display_name_for_code(code: &str, lang: Lang) -> &'static str {
        ServiceCategory::from_code(code)
            .map(|c| c.display_name(lang))
            .unwrap_or("")
    }
}

impl ToString for ServiceCategory {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for category in ServiceCategory::all() {
            assert_eq!(ServiceCategory::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn test_spare_parts_keeps_historic_space() {
        assert_eq!(ServiceCategory::SpareParts.code(), "spare parts");
        assert_eq!(
            ServiceCategory::from_code("spare parts"),
            Some(ServiceCategory::SpareParts)
        );
        assert_eq!(ServiceCategory::from_code("spare-parts"), None);
    }

    #[test]
    fn test_unknown_code_renders_blank() {
        assert_eq!(ServiceCategory::display_name_for_code("towing", Lang::En), "");
        assert_eq!(ServiceCategory::display_name_for_code("towing", Lang::Ar), "");
    }

    #[test]
    fn test_display_names_filled_for_both_languages() {
        for category in ServiceCategory::all() {
            assert!(!category.display_name(Lang::En).is_empty());
            assert!(!category.display_name(Lang::Ar).is_empty());
        }
    }
}

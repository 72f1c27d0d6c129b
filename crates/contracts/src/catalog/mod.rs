//! Каталожный движок: группировка, фильтрация и случайная выборка карточек.
//!
//! Все операции чистые: снимок каталога не мутируется, каждый производный
//! вид аллоцируется заново и живет один цикл отрисовки.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::domain::a001_service_listing::aggregate::ServiceListing;

/// Сколько карточек показывается в категории на главной
pub const FEATURED_PER_CATEGORY: i64 = 4;

/// Снимок каталога, разложенный по категориям.
///
/// Ключ — сырой код категории (незнакомые коды образуют собственные группы),
/// порядок записей внутри группы повторяет порядок снимка.
pub type CategoryGroups = BTreeMap<String, Vec<ServiceListing>>;

/// Критерии одного цикла поиска
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Подстрока для поиска по имени и описанию (case-insensitive)
    pub term: String,
    /// Точное совпадение кода категории
    pub category: Option<String>,
    /// Подстрока для поиска по городу (case-insensitive)
    pub city: Option<String>,
}

impl FilterCriteria {
    /// Есть ли хоть одно активное ограничение
    pub fn is_active(&self) -> bool {
        !self.term.trim().is_empty()
            || self.category.is_some()
            || self.city.as_deref().is_some_and(|c| !c.trim().is_empty())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("sample size must be non-negative, got {0}")]
    InvalidSampleSize(i64),
}

/// Разложить снимок каталога по категориям.
///
/// Каждая запись попадает ровно в одну группу — под собственным значением
/// `category`; пустой вход дает пустую карту.
pub fn group_by_category(services: &[ServiceListing]) -> CategoryGroups {
    let mut groups = CategoryGroups::new();
    for service in services {
        groups
            .entry(service.category.clone())
            .or_default()
            .push(service.clone());
    }
    groups
}

/// Отфильтровать сгруппированный каталог по критериям поиска.
///
/// Ограничение категории отбрасывает чужие группы целиком; внутри группы
/// запись выживает, только если проходит и поиск по тексту, и поиск по
/// городу. Группы, оставшиеся пустыми, в результат не попадают.
pub fn filter_groups(groups: &CategoryGroups, criteria: &FilterCriteria) -> CategoryGroups {
    let term = criteria.term.to_lowercase();
    let city = criteria
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase);

    let mut result = CategoryGroups::new();
    for (category, services) in groups {
        if let Some(wanted) = &criteria.category {
            if wanted != category {
                continue;
            }
        }

        let matched: Vec<ServiceListing> = services
            .iter()
            .filter(|s| matches_term(s, &term) && matches_city(s, city.as_deref()))
            .cloned()
            .collect();

        if !matched.is_empty() {
            result.insert(category.clone(), matched);
        }
    }
    result
}

fn matches_term(service: &ServiceListing, term: &str) -> bool {
    service.name.to_lowercase().contains(term)
        || service
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(term))
}

fn matches_city(service: &ServiceListing, city: Option<&str>) -> bool {
    match city {
        None => true,
        Some(city) => service.city.to_lowercase().contains(city),
    }
}

/// Случайная выборка `min(k, len)` карточек без повторов.
///
/// Частичный Fisher-Yates (`partial_shuffle`): O(n), равномерная вероятность
/// попадания для каждой записи. Порядок результата перемешан всегда, в том
/// числе при `k >= len` — каждая загрузка страницы дает свежую подборку.
/// Отрицательный `k` отклоняется без частичного результата.
pub fn sample_featured<R: Rng + ?Sized>(
    services: &[ServiceListing],
    k: i64,
    rng: &mut R,
) -> Result<Vec<ServiceListing>, CatalogError> {
    let k = usize::try_from(k).map_err(|_| CatalogError::InvalidSampleSize(k))?;

    let mut pool: Vec<ServiceListing> = services.to_vec();
    let take = k.min(pool.len());
    let (picked, _) = pool.partial_shuffle(rng, take);
    Ok(picked.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_service_listing::aggregate::{ServiceListing, ServiceListingDto};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn listing(name: &str, category: &str, city: &str) -> ServiceListing {
        ServiceListing::new_for_insert(ServiceListingDto {
            name: name.to_string(),
            category: category.to_string(),
            city: city.to_string(),
            ..Default::default()
        })
    }

    fn with_description(mut service: ServiceListing, description: &str) -> ServiceListing {
        service.description = Some(description.to_string());
        service
    }

    fn snapshot() -> Vec<ServiceListing> {
        vec![
            listing("Ahmed Tires", "tires", "Giza"),
            listing("Cairo Wash", "carwash", "Cairo"),
            listing("Giza Wash", "carwash", "Giza"),
            with_description(
                listing("El Nasr Center", "repair", "Cairo"),
                "Engine diagnostics and wash add-on",
            ),
            listing("Road Helpers", "towing", "Alexandria"),
        ]
    }

    fn names(groups: &CategoryGroups, category: &str) -> Vec<String> {
        groups
            .get(category)
            .map(|services| services.iter().map(|s| s.name.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_group_partitions_exactly() {
        let services = snapshot();
        let groups = group_by_category(&services);

        // Каждая запись ровно в одной группе, под своим значением категории
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, services.len());
        for (category, members) in &groups {
            for member in members {
                assert_eq!(&member.category, category);
            }
        }

        // Объединение групп — тот же мультимножественный состав
        let mut grouped_ids: Vec<String> = groups
            .values()
            .flatten()
            .map(ServiceListing::to_string_id)
            .collect();
        let mut input_ids: Vec<String> =
            services.iter().map(ServiceListing::to_string_id).collect();
        grouped_ids.sort();
        input_ids.sort();
        assert_eq!(grouped_ids, input_ids);
    }

    #[test]
    fn test_group_preserves_record_order() {
        let groups = group_by_category(&snapshot());
        assert_eq!(names(&groups, "carwash"), vec!["Cairo Wash", "Giza Wash"]);
    }

    #[test]
    fn test_group_keeps_unrecognized_category_as_own_key() {
        let groups = group_by_category(&snapshot());
        assert_eq!(names(&groups, "towing"), vec!["Road Helpers"]);
    }

    #[test]
    fn test_group_empty_input() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_filter_identity_law() {
        let groups = group_by_category(&snapshot());
        let filtered = filter_groups(&groups, &FilterCriteria::default());
        assert_eq!(filtered, groups);
    }

    #[test]
    fn test_filter_term_matches_name_and_description() {
        let groups = group_by_category(&snapshot());
        let filtered = filter_groups(
            &groups,
            &FilterCriteria {
                term: "WASH".to_string(),
                ..Default::default()
            },
        );

        // имя у carwash, описание у repair; пустые группы выпадают целиком
        assert_eq!(
            filtered.keys().collect::<Vec<_>>(),
            vec!["carwash", "repair"]
        );
        assert_eq!(names(&filtered, "carwash"), vec!["Cairo Wash", "Giza Wash"]);
    }

    #[test]
    fn test_filter_city_soundness() {
        let groups = group_by_category(&snapshot());
        let filtered = filter_groups(
            &groups,
            &FilterCriteria {
                city: Some("giza".to_string()),
                ..Default::default()
            },
        );

        assert!(!filtered.is_empty());
        for services in filtered.values() {
            for service in services {
                assert!(service.city.to_lowercase().contains("giza"));
            }
        }
    }

    #[test]
    fn test_filter_category_constraint_single_key() {
        let groups = group_by_category(&snapshot());

        let filtered = filter_groups(
            &groups,
            &FilterCriteria {
                category: Some("carwash".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(filtered.keys().collect::<Vec<_>>(), vec!["carwash"]);

        // Ограничение + поиск, не оставляющий записей — ни одного ключа
        let emptied = filter_groups(
            &groups,
            &FilterCriteria {
                term: "no such name".to_string(),
                category: Some("carwash".to_string()),
                ..Default::default()
            },
        );
        assert!(emptied.is_empty());
    }

    #[test]
    fn test_filter_blank_city_constraint_is_ignored() {
        let groups = group_by_category(&snapshot());
        let filtered = filter_groups(
            &groups,
            &FilterCriteria {
                city: Some("   ".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(filtered, groups);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let services = vec![
            listing("Ahmed Tires", "tires", "Giza"),
            listing("Cairo Wash", "carwash", "Cairo"),
        ];
        let groups = group_by_category(&services);
        assert_eq!(names(&groups, "tires"), vec!["Ahmed Tires"]);
        assert_eq!(names(&groups, "carwash"), vec!["Cairo Wash"]);

        let by_term = filter_groups(
            &groups,
            &FilterCriteria {
                term: "wash".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_term.keys().collect::<Vec<_>>(), vec!["carwash"]);
        assert_eq!(names(&by_term, "carwash"), vec!["Cairo Wash"]);

        let by_city = filter_groups(
            &groups,
            &FilterCriteria {
                city: Some("Giza".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_city.keys().collect::<Vec<_>>(), vec!["tires"]);
        assert_eq!(names(&by_city, "tires"), vec!["Ahmed Tires"]);
    }

    #[test]
    fn test_sample_is_permutation_when_k_covers_input() {
        let services = snapshot();
        let mut rng = StdRng::seed_from_u64(7);
        let sampled = sample_featured(&services, services.len() as i64 + 3, &mut rng).unwrap();

        assert_eq!(sampled.len(), services.len());
        let mut sampled_ids: Vec<String> =
            sampled.iter().map(ServiceListing::to_string_id).collect();
        let mut input_ids: Vec<String> =
            services.iter().map(ServiceListing::to_string_id).collect();
        sampled_ids.sort();
        input_ids.sort();
        assert_eq!(sampled_ids, input_ids);
    }

    #[test]
    fn test_sample_draws_k_distinct_records() {
        let services = snapshot();
        let mut rng = StdRng::seed_from_u64(42);
        let sampled = sample_featured(&services, 3, &mut rng).unwrap();

        assert_eq!(sampled.len(), 3);
        let ids: HashSet<String> = sampled.iter().map(ServiceListing::to_string_id).collect();
        assert_eq!(ids.len(), 3);
        let input_ids: HashSet<String> =
            services.iter().map(ServiceListing::to_string_id).collect();
        assert!(ids.is_subset(&input_ids));
    }

    #[test]
    fn test_sample_does_not_mutate_input() {
        let services = snapshot();
        let before: Vec<String> = services.iter().map(|s| s.name.clone()).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let _ = sample_featured(&services, 2, &mut rng).unwrap();
        let after: Vec<String> = services.iter().map(|s| s.name.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sample_zero_yields_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let sampled = sample_featured(&snapshot(), 0, &mut rng).unwrap();
        assert!(sampled.is_empty());
    }

    #[test]
    fn test_sample_rejects_negative_size() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = sample_featured(&snapshot(), -1, &mut rng);
        assert_eq!(result, Err(CatalogError::InvalidSampleSize(-1)));
    }

    #[test]
    fn test_criteria_activity() {
        assert!(!FilterCriteria::default().is_active());
        assert!(!FilterCriteria {
            city: Some("  ".to_string()),
            ..Default::default()
        }
        .is_active());
        assert!(FilterCriteria {
            term: "wash".to_string(),
            ..Default::default()
        }
        .is_active());
        assert!(FilterCriteria {
            category: Some("tires".to_string()),
            ..Default::default()
        }
        .is_active());
    }
}

//! Fixed lookup tables shared by every view.
//!
//! All tables are plain constants; callers copy what they need.

use crate::filters::{SortBy, SortOrder};
use crate::stats::Period;

/// Reasons a moderator may give when rejecting an ad or asking for changes.
pub const REJECTION_REASONS: [&str; 6] = [
    "Запрещенный товар",
    "Неверная категория",
    "Некорректное описание",
    "Проблемы с фото",
    "Подозрение на мошенничество",
    "Другое",
];

/// Categories offered by the list filter, keyed by API category id.
pub const CATEGORIES: [(u32, &str); 5] = [
    (1, "Электроника"),
    (2, "Одежда"),
    (3, "Мебель"),
    (4, "Авто"),
    (5, "Недвижимость"),
];

/// A sort choice as shown in the list header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub label: &'static str,
}

impl SortOption {
    /// Compound `"<field>-<order>"` value used by the select element.
    pub fn value(&self) -> String {
        format!("{}-{}", self.sort_by.as_str(), self.sort_order.as_str())
    }
}

pub const SORT_OPTIONS: [SortOption; 5] = [
    SortOption {
        sort_by: SortBy::CreatedAt,
        sort_order: SortOrder::Desc,
        label: "Сначала новые",
    },
    SortOption {
        sort_by: SortBy::CreatedAt,
        sort_order: SortOrder::Asc,
        label: "Сначала старые",
    },
    SortOption {
        sort_by: SortBy::Price,
        sort_order: SortOrder::Asc,
        label: "Сначала дешевые",
    },
    SortOption {
        sort_by: SortBy::Price,
        sort_order: SortOrder::Desc,
        label: "Сначала дорогие",
    },
    SortOption {
        sort_by: SortBy::Priority,
        sort_order: SortOrder::Desc,
        label: "По приоритету",
    },
];

/// Statistics periods with their selector labels.
pub const PERIODS: [(Period, &str); 3] = [
    (Period::Today, "Сегодня"),
    (Period::Week, "Неделя"),
    (Period::Month, "Месяц"),
];

/// Shown on cards for ads that have no images.
pub const IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// Whether `reason` is one of [`REJECTION_REASONS`].
pub fn is_known_reason(reason: &str) -> bool {
    REJECTION_REASONS.contains(&reason)
}

/// Display name of a category id, if the id is in [`CATEGORIES`].
pub fn category_name(id: u32) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|(category_id, _)| *category_id == id)
        .map(|(_, name)| *name)
}

/// Look up a sort option by its compound select value.
pub fn sort_option(value: &str) -> Option<SortOption> {
    SORT_OPTIONS.iter().copied().find(|opt| opt.value() == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_values_round_trip_through_lookup() {
        for opt in SORT_OPTIONS {
            assert_eq!(sort_option(&opt.value()), Some(opt));
        }
        assert_eq!(sort_option("title-asc"), None);
        assert_eq!(SORT_OPTIONS[0].value(), "createdAt-desc");
    }

    #[test]
    fn reasons_and_categories() {
        assert!(is_known_reason("Другое"));
        assert!(!is_known_reason("другое"));
        assert_eq!(category_name(3), Some("Мебель"));
        assert_eq!(category_name(9), None);
    }
}

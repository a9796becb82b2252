//! List query descriptor and the reducer that keeps it consistent.

use serde::{Deserialize, Serialize};

use crate::ad::{AdStatus, Advertisement};

/// Page size used by the list view.
pub const ITEMS_PER_PAGE: u32 = 10;

/// Field the list is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    CreatedAt,
    Price,
    Priority,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::CreatedAt => "createdAt",
            SortBy::Price => "price",
            SortBy::Priority => "priority",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query descriptor for the ad list. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdFilters {
    pub search: Option<String>,
    pub status: Vec<AdStatus>,
    pub category_id: Option<u32>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub page: u32,
    pub limit: u32,
}

impl Default for AdFilters {
    fn default() -> Self {
        Self {
            search: None,
            status: Vec::new(),
            category_id: None,
            min_price: None,
            max_price: None,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            page: 1,
            limit: ITEMS_PER_PAGE,
        }
    }
}

/// A single edit coming from the filter panel, sort select or pager.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Search(Option<String>),
    Statuses(Vec<AdStatus>),
    ToggleStatus(AdStatus),
    Category(Option<u32>),
    MinPrice(Option<f64>),
    MaxPrice(Option<f64>),
    Sort(SortBy, SortOrder),
    Page(u32),
    Clear,
}

impl AdFilters {
    /// Merge a complete candidate descriptor into the current one.
    ///
    /// If a narrowing field changed while neither the page nor the sort
    /// moved, the result starts again from page 1. Otherwise the candidate
    /// is taken as is.
    pub fn merge(&self, next: AdFilters) -> AdFilters {
        let page_changed = next.page != self.page;
        let sort_changed = next.sort_by != self.sort_by || next.sort_order != self.sort_order;

        if page_changed || sort_changed || !self.narrowing_differs(&next) {
            next
        } else {
            AdFilters { page: 1, ..next }
        }
    }

    fn narrowing_differs(&self, other: &AdFilters) -> bool {
        self.search != other.search
            || self.status != other.status
            || self.category_id != other.category_id
            || self.min_price != other.min_price
            || self.max_price != other.max_price
    }

    /// Apply one typed edit.
    ///
    /// Page and sort edits never touch the other fields; every other edit
    /// goes through [`AdFilters::merge`].
    pub fn apply(&self, change: FilterChange) -> AdFilters {
        let mut next = self.clone();
        match change {
            FilterChange::Search(text) => {
                next.search = text.filter(|t| !t.trim().is_empty());
            }
            FilterChange::Statuses(statuses) => next.status = statuses,
            FilterChange::ToggleStatus(status) => {
                if let Some(pos) = next.status.iter().position(|s| *s == status) {
                    next.status.remove(pos);
                } else {
                    next.status.push(status);
                }
            }
            FilterChange::Category(id) => next.category_id = id,
            FilterChange::MinPrice(price) => next.min_price = price,
            FilterChange::MaxPrice(price) => next.max_price = price,
            FilterChange::Sort(sort_by, sort_order) => {
                next.sort_by = sort_by;
                next.sort_order = sort_order;
                return next;
            }
            FilterChange::Page(page) => {
                next.page = page.max(1);
                return next;
            }
            FilterChange::Clear => return AdFilters::default(),
        }
        self.merge(next)
    }

    /// Whether any narrowing filter (not page, sort or limit) is active.
    pub fn has_criteria(&self) -> bool {
        self.search.is_some()
            || !self.status.is_empty()
            || self.category_id.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
    }

    /// Query-string pairs for `GET /ads`.
    ///
    /// Multi-valued status is sent as repeated `status[]` keys.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("sortOrder", self.sort_order.as_str().to_string()),
        ];
        if let Some(search) = self.search.as_deref().map(str::trim)
            && !search.is_empty()
        {
            pairs.push(("search", search.to_string()));
        }
        for status in &self.status {
            pairs.push(("status[]", status.as_str().to_string()));
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("categoryId", category_id.to_string()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice", max.to_string()));
        }
        pairs
    }
}

/// Pagination block of a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            items_per_page: ITEMS_PER_PAGE,
        }
    }
}

impl Pagination {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page numbers to show in the pager: at most `width` pages centered on
    /// the current one.
    pub fn window(&self, width: u32) -> Vec<u32> {
        let total = self.total_pages.max(1);
        let width = width.clamp(1, total);
        let current = self.current_page.clamp(1, total);
        let start = current
            .saturating_sub(width / 2)
            .max(1)
            .min(total + 1 - width);
        (start..start + width).collect()
    }
}

/// One page of `GET /ads`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdsPage {
    pub ads: Vec<Advertisement>,
    pub pagination: Pagination,
}

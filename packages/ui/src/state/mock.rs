//! In-memory moderation backend for view-state tests.

#![allow(clippy::disallowed_methods)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use api::{ApiError, ModerationApi, ModerationReceipt};
use chrono::{TimeZone, Utc};
use moderation_core::{
    ActivityData, AdFilters, AdId, AdStatus, AdsPage, Advertisement, DecisionsData, Pagination,
    Period, Priority, ReasonPayload, Seller, StatsSummary,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListAds(AdFilters),
    GetAd(AdId),
    Approve(AdId),
    Reject(AdId, ReasonPayload),
    RequestChanges(AdId, ReasonPayload),
    Stats(&'static str, Period),
}

#[derive(Default)]
pub struct MockApi {
    pub calls: RefCell<Vec<Call>>,
    pub fail_mutations: bool,
    pub fail_get: bool,
    pub missing: Vec<AdId>,
    pub fail_stats: Option<&'static str>,
    /// Status reported by `get_ad`.
    pub status: AdStatus,
}

impl MockApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn mutation(&self) -> Result<ModerationReceipt, ApiError> {
        if self.fail_mutations {
            return Err(server_error());
        }
        Ok(ModerationReceipt::default())
    }

    fn stats<T>(&self, name: &'static str, period: Period, value: T) -> Result<T, ApiError> {
        self.record(Call::Stats(name, period));
        if self.fail_stats == Some(name) {
            return Err(server_error());
        }
        Ok(value)
    }
}

pub fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        message: "boom".to_string(),
    }
}

pub fn sample_ad(id: u64, status: AdStatus) -> Advertisement {
    Advertisement {
        id: AdId(id),
        title: format!("Объявление {id}"),
        description: "Описание".to_string(),
        price: 1500.0,
        category: "Мебель".to_string(),
        category_id: Some(3),
        status,
        priority: Priority::Normal,
        created_at: Utc.with_ymd_and_hms(2025, 3, 15, 14, 30, 0).unwrap(),
        updated_at: None,
        images: vec![format!("/images/{id}.jpg")],
        characteristics: BTreeMap::new(),
        seller: Seller {
            id: Some(1),
            name: "Мария".to_string(),
            rating: 4.6,
            total_ads: Some(3),
            registered_at: Utc.with_ymd_and_hms(2022, 5, 1, 0, 0, 0).unwrap(),
        },
        moderation_history: Vec::new(),
    }
}

impl ModerationApi for MockApi {
    async fn list_ads(&self, filters: &AdFilters) -> Result<AdsPage, ApiError> {
        self.record(Call::ListAds(filters.clone()));
        Ok(AdsPage {
            ads: vec![sample_ad(1, AdStatus::Pending)],
            pagination: Pagination {
                current_page: filters.page,
                total_pages: 5,
                total_items: 41,
                items_per_page: filters.limit,
            },
        })
    }

    async fn get_ad(&self, id: AdId) -> Result<Advertisement, ApiError> {
        self.record(Call::GetAd(id));
        if self.missing.contains(&id) {
            return Err(ApiError::Status {
                status: 404,
                message: "Ad not found".to_string(),
            });
        }
        if self.fail_get {
            return Err(server_error());
        }
        Ok(sample_ad(id.0, self.status))
    }

    async fn approve_ad(&self, id: AdId) -> Result<ModerationReceipt, ApiError> {
        self.record(Call::Approve(id));
        self.mutation()
    }

    async fn reject_ad(
        &self,
        id: AdId,
        payload: &ReasonPayload,
    ) -> Result<ModerationReceipt, ApiError> {
        self.record(Call::Reject(id, payload.clone()));
        self.mutation()
    }

    async fn request_changes(
        &self,
        id: AdId,
        payload: &ReasonPayload,
    ) -> Result<ModerationReceipt, ApiError> {
        self.record(Call::RequestChanges(id, payload.clone()));
        self.mutation()
    }

    async fn stats_summary(&self, period: Period) -> Result<StatsSummary, ApiError> {
        let summary = StatsSummary {
            total_reviewed: 120,
            approved_percentage: 62.5,
            rejected_percentage: 25.0,
            average_review_time: 95.0,
            ..StatsSummary::default()
        };
        self.stats("summary", period, summary)
    }

    async fn activity_chart(&self, period: Period) -> Result<Vec<ActivityData>, ApiError> {
        let activity = vec![ActivityData {
            date: "2025-03-15".to_string(),
            approved: 7,
            rejected: 1,
            request_changes: 2,
        }];
        self.stats("activity", period, activity)
    }

    async fn decisions_chart(&self, period: Period) -> Result<DecisionsData, ApiError> {
        let decisions = DecisionsData {
            approved: 62.5,
            rejected: 25.0,
            request_changes: 12.5,
        };
        self.stats("decisions", period, decisions)
    }

    async fn categories_chart(&self, period: Period) -> Result<BTreeMap<String, u64>, ApiError> {
        let categories = BTreeMap::from([("Авто".to_string(), 10), ("Мебель".to_string(), 4)]);
        self.stats("categories", period, categories)
    }
}

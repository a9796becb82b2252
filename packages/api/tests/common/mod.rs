use std::sync::{Arc, Mutex};

use api::{ApiClient, ApiConfig};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};

/// One request as seen by the fake backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Recorded {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn params(&self, key: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl Recorder {
    fn push(&self, method: &'static str, path: String, query: Vec<(String, String)>, body: Option<Value>) {
        self.0.lock().unwrap().push(Recorded {
            method,
            path,
            query,
            body,
        });
    }

    pub fn take(&self) -> Vec<Recorded> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

pub fn ad_json(id: u64, status: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Объявление {id}"),
        "description": "Описание",
        "price": 1500,
        "category": "Мебель",
        "categoryId": 3,
        "status": status,
        "priority": "normal",
        "createdAt": "2025-03-15T14:30:00Z",
        "images": [format!("/images/{id}.jpg")],
        "characteristics": { "Состояние": "б/у" },
        "seller": {
            "id": 9,
            "name": "Мария",
            "rating": 4.6,
            "totalAds": 3,
            "registeredAt": "2022-05-01T00:00:00Z"
        },
        "moderationHistory": []
    })
}

async fn list_ads(
    State(rec): State<Recorder>,
    Query(query): Query<Vec<(String, String)>>,
) -> Json<Value> {
    let page: u32 = query
        .iter()
        .find(|(k, _)| k == "page")
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(1);
    rec.push("GET", "/ads".to_string(), query, None);
    Json(json!({
        "ads": [ad_json(1, "pending"), ad_json(2, "rejected")],
        "pagination": {
            "currentPage": page,
            "totalPages": 3,
            "totalItems": 25,
            "itemsPerPage": 10
        }
    }))
}

async fn get_ad(
    State(rec): State<Recorder>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    rec.push("GET", format!("/ads/{id}"), Vec::new(), None);
    if id == 404 {
        return Err((StatusCode::NOT_FOUND, Json(json!({ "error": "Ad not found" }))));
    }
    Ok(Json(ad_json(id, "approved")))
}

async fn approve(
    State(rec): State<Recorder>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, (StatusCode, String)> {
    rec.push("POST", format!("/ads/{id}/approve"), Vec::new(), None);
    if id == 500 {
        return Err((StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()));
    }
    Ok(Json(json!({ "message": "Ad approved", "status": "approved" })))
}

async fn reject(State(rec): State<Recorder>, Path(id): Path<u64>, Json(body): Json<Value>) -> StatusCode {
    rec.push("POST", format!("/ads/{id}/reject"), Vec::new(), Some(body));
    StatusCode::OK
}

async fn request_changes(
    State(rec): State<Recorder>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    rec.push("POST", format!("/ads/{id}/request-changes"), Vec::new(), Some(body));
    Json(json!({
        "message": "Changes requested",
        "ad": ad_json(id, "draft")
    }))
}

fn period_of(query: &[(String, String)]) -> String {
    query
        .iter()
        .find(|(k, _)| k == "period")
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}

async fn summary(State(rec): State<Recorder>, Query(query): Query<Vec<(String, String)>>) -> Json<Value> {
    rec.push("GET", "/stats/summary".to_string(), query, None);
    Json(json!({
        "totalReviewed": 120,
        "totalReviewedToday": 8,
        "totalReviewedThisWeek": 40,
        "totalReviewedThisMonth": 120,
        "approvedPercentage": 62.5,
        "rejectedPercentage": 25.0,
        "requestChangesPercentage": 12.5,
        "averageReviewTime": 95
    }))
}

async fn activity(State(rec): State<Recorder>, Query(query): Query<Vec<(String, String)>>) -> Json<Value> {
    rec.push("GET", "/stats/chart/activity".to_string(), query, None);
    Json(json!([
        { "date": "2025-03-14", "approved": 5, "rejected": 2, "requestChanges": 1 },
        { "date": "2025-03-15", "approved": 7, "rejected": 1, "requestChanges": 0 }
    ]))
}

async fn decisions(State(rec): State<Recorder>, Query(query): Query<Vec<(String, String)>>) -> Json<Value> {
    rec.push("GET", "/stats/chart/decisions".to_string(), query, None);
    Json(json!({ "approved": 62.5, "rejected": 25.0, "requestChanges": 12.5 }))
}

async fn categories(
    State(rec): State<Recorder>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, StatusCode> {
    let period = period_of(&query);
    rec.push("GET", "/stats/chart/categories".to_string(), query, None);
    if period == "today" {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    Ok(Json(json!({ "Электроника": 14, "Мебель": 6 })))
}

/// Start a fake moderation backend on an ephemeral port.
///
/// Ad 404 does not exist, approving ad 500 fails, and the categories chart
/// is unavailable for the `today` period.
pub async fn spawn_backend() -> std::io::Result<(ApiClient, Recorder)> {
    let recorder = Recorder::default();
    let app = Router::new()
        .route("/api/v1/ads", get(list_ads))
        .route("/api/v1/ads/:id", get(get_ad))
        .route("/api/v1/ads/:id/approve", post(approve))
        .route("/api/v1/ads/:id/reject", post(reject))
        .route("/api/v1/ads/:id/request-changes", post(request_changes))
        .route("/api/v1/stats/summary", get(summary))
        .route("/api/v1/stats/chart/activity", get(activity))
        .route("/api/v1/stats/chart/decisions", get(decisions))
        .route("/api/v1/stats/chart/categories", get(categories))
        .with_state(recorder.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let config = ApiConfig::default().with_base_url(format!("http://{addr}/api/v1"));
    let client = ApiClient::new(config).map_err(std::io::Error::other)?;
    Ok((client, recorder))
}

//! HTTP JSON API over the almanac engine.
//!
//! A thin axum front on the same assemblers the CLI uses. Every response is
//! pretty-printed JSON with permissive CORS; date segments are shape-checked
//! before parsing, so a path that does not even look like a date falls
//! through to the 404 instead of a 400.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::extract::{Path, Query, Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::calendar::{looks_like_date, CalendarError, Lunisolar, SolarDay};
use crate::domain::{
    almanac_for, almanac_range, chart_for, find_auspicious_dates, AlmanacRecord, AuspiciousDate,
    Gender,
};
use crate::render::{image_payload, post_for_platform};

/// Errors the API reports as a JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid date format")]
    InvalidDate,
    #[error("Invalid time format")]
    InvalidTime,
    #[error("Range too large (max 90 days)")]
    RangeTooLarge,
    #[error("Not found. Try / for API docs.")]
    NotFound,
    #[error("{0}")]
    Engine(#[from] CalendarError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        pretty_json(self.status(), &body)
    }
}

#[derive(Clone)]
pub struct AppState {
    oracle: Lunisolar,
}

impl AppState {
    pub fn new() -> Self {
        Self { oracle: Lunisolar }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api_docs))
        .route("/today", get(today))
        .route("/image", get(image))
        .route("/date/:date", get(almanac_by_date))
        .route("/range/:start/:end", get(almanac_by_range))
        .route("/find/*activity", get(find))
        .route("/post/:platform", get(post))
        .route("/bazi/:date", get(bazi_by_date))
        .route("/bazi/:date/:time", get(bazi_by_moment))
        .fallback(not_found)
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

/// Serialize with two-space indentation, the shape every existing consumer
/// of this API reads.
fn pretty_json<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_string_pretty(value) {
        Ok(body) => (status, [(CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            error!(error = %e, "response serialization failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Every response carries the permissive CORS trio; preflight gets an empty
/// 204 without touching the router.
async fn cors(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut res = StatusCode::NO_CONTENT.into_response();
        apply_cors(res.headers_mut());
        res.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        return res;
    }
    let mut res = next.run(req).await;
    apply_cors(res.headers_mut());
    res
}

fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}

/// Date path segments must look like `YYYY-MM-DD` to reach a parser at all;
/// a shaped but impossible date is a 400.
fn parse_shaped_date(raw: &str) -> Result<SolarDay, ApiError> {
    if !looks_like_date(raw) {
        return Err(ApiError::NotFound);
    }
    raw.parse().map_err(|_| ApiError::InvalidDate)
}

async fn api_docs() -> Response {
    let docs = serde_json::json!({
        "name": "tungshing API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/": "This help",
            "/today": "Today's almanac",
            "/date/:YYYY-MM-DD": "Almanac for specific date",
            "/range/:start/:end": "Almanac for date range",
            "/find/:activity": "Find auspicious dates for activity",
            "/post/:platform": "Social media post (twitter/general)",
            "/bazi/:YYYY-MM-DD": "Four Pillars birth chart",
            "/image": "Image generation data"
        },
        "example": "/date/2026-02-14"
    });
    pretty_json(StatusCode::OK, &docs)
}

async fn today(State(state): State<AppState>) -> Result<Response, ApiError> {
    let record = almanac_for(&state.oracle, SolarDay::today())?;
    Ok(pretty_json(StatusCode::OK, &record))
}

async fn image(State(state): State<AppState>) -> Result<Response, ApiError> {
    let record = almanac_for(&state.oracle, SolarDay::today())?;
    Ok(pretty_json(StatusCode::OK, &image_payload(&record)))
}

async fn almanac_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Response, ApiError> {
    let day = parse_shaped_date(&date)?;
    debug!(%day, "almanac request");
    let record = almanac_for(&state.oracle, day)?;
    Ok(pretty_json(StatusCode::OK, &record))
}

#[derive(Serialize)]
struct RangeResponse {
    count: usize,
    dates: Vec<AlmanacRecord>,
}

async fn almanac_by_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let start = parse_shaped_date(&start)?;
    let end = parse_shaped_date(&end)?;
    if end - start + 1 > 90 {
        return Err(ApiError::RangeTooLarge);
    }
    debug!(%start, %end, "range request");
    let dates = almanac_range(&state.oracle, start, end)?;
    let response = RangeResponse {
        count: dates.len(),
        dates,
    };
    Ok(pretty_json(StatusCode::OK, &response))
}

#[derive(Deserialize)]
struct FindParams {
    days: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FindResponse {
    activity: String,
    /// Echoes the requested window, even when it was nonsense; the scan
    /// itself is clamped to 0..=90.
    search_days: i64,
    found: usize,
    dates: Vec<AuspiciousDate>,
}

async fn find(
    State(state): State<AppState>,
    Path(activity): Path<String>,
    Query(params): Query<FindParams>,
) -> Result<Response, ApiError> {
    let requested: i64 = params
        .days
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .filter(|&d| d != 0)
        .unwrap_or(30);
    let window = requested.clamp(0, 90) as u32;
    debug!(%activity, window, "find request");
    let dates = find_auspicious_dates(&state.oracle, &activity, window, SolarDay::today())?;
    let response = FindResponse {
        activity,
        search_days: requested,
        found: dates.len(),
        dates,
    };
    Ok(pretty_json(StatusCode::OK, &response))
}

#[derive(Deserialize)]
struct PostParams {
    date: Option<String>,
}

#[derive(Serialize)]
struct PostResponse {
    platform: String,
    date: String,
    post: String,
}

async fn post(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Query(params): Query<PostParams>,
) -> Result<Response, ApiError> {
    if !platform
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        return Err(ApiError::NotFound);
    }
    let day = match params.date.as_deref() {
        Some(raw) => raw.parse().map_err(|_| ApiError::InvalidDate)?,
        None => SolarDay::today(),
    };
    debug!(%platform, %day, "post request");
    let record = almanac_for(&state.oracle, day)?;
    let response = PostResponse {
        post: post_for_platform(&record, &platform),
        date: record.solar.date,
        platform,
    };
    Ok(pretty_json(StatusCode::OK, &response))
}

#[derive(Deserialize)]
struct BaziParams {
    hour: Option<u32>,
    minute: Option<u32>,
    gender: Option<String>,
}

async fn bazi_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(params): Query<BaziParams>,
) -> Result<Response, ApiError> {
    let day = parse_shaped_date(&date)?;
    let hour = params.hour.unwrap_or(12);
    let minute = params.minute.unwrap_or(0);
    if hour > 24 || minute > 59 {
        return Err(ApiError::InvalidTime);
    }
    bazi_chart(&state, day, hour, minute, params.gender.as_deref())
}

async fn bazi_by_moment(
    State(state): State<AppState>,
    Path((date, time)): Path<(String, String)>,
    Query(params): Query<BaziParams>,
) -> Result<Response, ApiError> {
    let day = parse_shaped_date(&date)?;
    let (hour, minute) = crate::domain::parse_hhmm(&time).ok_or(ApiError::InvalidTime)?;
    bazi_chart(&state, day, hour, minute, params.gender.as_deref())
}

fn bazi_chart(
    state: &AppState,
    day: SolarDay,
    hour: u32,
    minute: u32,
    gender: Option<&str>,
) -> Result<Response, ApiError> {
    let gender = gender.map(Gender::parse).unwrap_or_default();
    debug!(%day, hour, minute, "bazi request");
    let chart = chart_for(&state.oracle, day, hour, minute, gender)?;
    Ok(pretty_json(StatusCode::OK, &chart))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Run the API server on `port`, blocking until Ctrl-C.
pub fn serve(port: u16) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tungshing=info".parse()?))
        .try_init()
        .ok();
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(run(port))
}

async fn run(port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;
    info!(%addr, "listening");
    println!("\n🔮 tungshing API Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();
    println!("Listening on http://localhost:{port}");
    println!();
    println!("Endpoints:");
    println!("  GET /           API documentation");
    println!("  GET /today      Today's almanac");
    println!("  GET /date/YYYY-MM-DD   Specific date");
    println!("  GET /range/start/end   Date range (max 90 days)");
    println!("  GET /find/activity     Find auspicious dates");
    println!("  GET /post/twitter      Social media post");
    println!("  GET /bazi/YYYY-MM-DD   Four Pillars chart");
    println!("  GET /image             Image generation data");
    println!();
    println!("Press Ctrl+C to stop");
    println!();
    axum::serve(listener, create_router(AppState::new()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => println!("\nShutting down..."),
        Err(e) => {
            error!(error = %e, "shutdown signal unavailable");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new())
    }

    async fn get_response(path: &str) -> Response {
        app()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(res: Response) -> serde_json::Value {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn docs_list_every_endpoint() {
        let res = get_response("/").await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[CONTENT_TYPE], "application/json");
        let docs = body_json(res).await;
        assert_eq!(docs["name"], "tungshing API");
        assert_eq!(docs["example"], "/date/2026-02-14");
        for endpoint in [
            "/",
            "/today",
            "/date/:YYYY-MM-DD",
            "/range/:start/:end",
            "/find/:activity",
            "/post/:platform",
            "/bazi/:YYYY-MM-DD",
            "/image",
        ] {
            assert!(!docs["endpoints"][endpoint].is_null(), "missing {endpoint}");
        }
    }

    #[tokio::test]
    async fn preflight_is_an_empty_204() {
        let res = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert_eq!(res.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(res.headers()[ACCESS_CONTROL_ALLOW_METHODS], "GET, OPTIONS");
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn every_response_carries_cors() {
        for path in ["/", "/today", "/nope"] {
            let res = get_response(path).await;
            assert_eq!(res.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*", "{path}");
        }
    }

    #[tokio::test]
    async fn almanac_by_date_resolves() {
        let res = get_response("/date/2026-02-14").await;
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["lunar"]["ganZhiDay"], "己未");
        assert_eq!(json["elements"]["dayElement"], "Earth");
        assert_eq!(json["clash"]["chongDesc"], "(癸丑)牛");
        assert_eq!(json["festivals"]["solar"][0], "情人节");
    }

    #[tokio::test]
    async fn unshaped_date_is_a_404() {
        let res = get_response("/date/tomorrow").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let json = body_json(res).await;
        assert_eq!(json["error"], "Not found. Try / for API docs.");
    }

    #[tokio::test]
    async fn shaped_but_impossible_date_is_a_400() {
        let res = get_response("/date/2026-99-99").await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = body_json(res).await;
        assert_eq!(json["error"], "Invalid date format");
    }

    #[tokio::test]
    async fn range_counts_inclusive_days() {
        let res = get_response("/range/2026-02-01/2026-02-03").await;
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["count"], 3);
        assert_eq!(json["dates"][0]["solar"]["date"], "2026-02-01");
        assert_eq!(json["dates"][2]["solar"]["date"], "2026-02-03");
    }

    #[tokio::test]
    async fn oversized_range_is_rejected() {
        let res = get_response("/range/2026-01-01/2026-06-01").await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = body_json(res).await;
        assert_eq!(json["error"], "Range too large (max 90 days)");
    }

    #[tokio::test]
    async fn reversed_range_is_empty_not_an_error() {
        let res = get_response("/range/2026-02-03/2026-02-01").await;
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["count"], 0);
        assert_eq!(json["dates"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn find_echoes_the_requested_window() {
        // 嫁娶, percent-encoded.
        let res = get_response("/find/%E5%AB%81%E5%A8%B6?days=200").await;
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["activity"], "嫁娶");
        assert_eq!(json["searchDays"], 200);
        let found = json["found"].as_u64().unwrap();
        assert_eq!(found, json["dates"].as_array().unwrap().len() as u64);
    }

    #[tokio::test]
    async fn find_window_defaults_when_unparseable() {
        let res = get_response("/find/%E7%A5%AD%E7%A5%80?days=soon").await;
        let json = body_json(res).await;
        assert_eq!(json["searchDays"], 30);
    }

    #[tokio::test]
    async fn negative_find_window_scans_nothing() {
        let res = get_response("/find/%E5%AB%81%E5%A8%B6?days=-5").await;
        let json = body_json(res).await;
        assert_eq!(json["searchDays"], -5);
        assert_eq!(json["found"], 0);
    }

    #[tokio::test]
    async fn post_returns_platform_date_and_copy() {
        let res = get_response("/post/twitter?date=2026-02-14").await;
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["platform"], "twitter");
        assert_eq!(json["date"], "2026-02-14");
        let post = json["post"].as_str().unwrap();
        assert!(post.contains("#ChineseAlmanac"));
    }

    #[tokio::test]
    async fn post_platform_token_must_be_wordlike() {
        let res = get_response("/post/bad-platform").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_with_bad_date_is_a_400() {
        let res = get_response("/post/general?date=soon").await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = body_json(res).await;
        assert_eq!(json["error"], "Invalid date format");
    }

    #[tokio::test]
    async fn bazi_with_time_segment() {
        let res = get_response("/bazi/1990-05-15/14:30").await;
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["fourPillars"]["day"]["chinese"], "庚辰");
        assert_eq!(json["fourPillars"]["day"]["stem"]["chinese"], "庚");
        assert_eq!(json["dayMaster"]["nature"], "The Sword");
        assert_eq!(json["lifeCycles"][0]["ganZhi"], "壬午");
    }

    #[tokio::test]
    async fn bazi_query_params_stand_in_for_the_segment() {
        let by_segment = body_json(get_response("/bazi/1990-05-15/14:30").await).await;
        let by_query = body_json(get_response("/bazi/1990-05-15?hour=14&minute=30").await).await;
        assert_eq!(by_segment, by_query);
    }

    #[tokio::test]
    async fn bazi_gender_is_echoed_not_honored() {
        let male = body_json(get_response("/bazi/1990-05-15/14:30?gender=male").await).await;
        let female = body_json(get_response("/bazi/1990-05-15/14:30?gender=female").await).await;
        assert_eq!(male["input"]["gender"], "male");
        assert_eq!(female["input"]["gender"], "female");
        assert_eq!(male["lifeCycles"], female["lifeCycles"]);
    }

    #[tokio::test]
    async fn bazi_rejects_bad_times() {
        let res = get_response("/bazi/1990-05-15/25:00").await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = body_json(res).await;
        assert_eq!(json["error"], "Invalid time format");
    }

    #[tokio::test]
    async fn unknown_path_is_the_api_404() {
        let res = get_response("/nope").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let json = body_json(res).await;
        assert_eq!(json["error"], "Not found. Try / for API docs.");
    }

    #[tokio::test]
    async fn bodies_are_pretty_printed() {
        let res = get_response("/date/2026-02-14").await;
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let text = std::str::from_utf8(&bytes).unwrap();
        assert!(text.starts_with("{\n  \""));
    }
}

use crate::infra::AppState;
use crate::render::{not_found_page, talk_page, TALK_PATH};
use axum::extract::Query;
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Extension, Json, Router};
use cities::error::AppError;
use cities::ranking::Criterion;
use cities::views::{CitySummary, CityView};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RankingQuery {
    #[serde(default)]
    pub(crate) by: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RankingResponse {
    pub(crate) title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) criterion: Option<Criterion>,
    pub(crate) cities: Vec<CitySummary>,
}

/// One page route per [`CityView`], plus the JSON and operational endpoints.
pub(crate) fn router(state: AppState) -> Router {
    let mut router = Router::new();
    for view in CityView::ordered() {
        router = router.route(
            view.path(),
            get(move |Extension(state): Extension<AppState>| async move {
                view_page(view, &state)
            }),
        );
    }

    router
        .route(TALK_PATH, get(talk))
        .route("/api/v1/cities", get(cities_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .fallback(not_found)
        .layer(Extension(state))
}

fn view_page(view: CityView, state: &AppState) -> Html<String> {
    debug!(path = view.path(), criterion = ?view.criterion(), "rendering city view");
    let page = view.page(&state.catalog);
    Html(state.renderer.render(&page))
}

pub(crate) async fn cities_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<RankingResponse>, AppError> {
    let (title, criterion, ranked) = match query.by.as_deref() {
        Some(key) => {
            let criterion = key.parse::<Criterion>().map_err(|err| {
                warn!(criterion = key, "rejected ranking criterion");
                err
            })?;
            (
                format!("By {criterion}"),
                Some(criterion),
                state.catalog.ranked_by(criterion),
            )
        }
        None => (
            "All cities".to_string(),
            None,
            state.catalog.cities().to_vec(),
        ),
    };

    Ok(Json(RankingResponse {
        title,
        criterion,
        cities: ranked.iter().map(CitySummary::from).collect(),
    }))
}

pub(crate) async fn healthcheck(Extension(state): Extension<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": &*state.version,
        "started_at": state.started_at,
    }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn talk() -> Html<String> {
    Html(talk_page())
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    debug!(%uri, "no page for path");
    (StatusCode::NOT_FOUND, Html(not_found_page()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HtmlPageRenderer;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use axum::response::Response;
    use chrono::Utc;
    use cities::catalog::Catalog;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            catalog: Arc::new(Catalog::seed()),
            renderer: Arc::new(HtmlPageRenderer),
            version: Arc::from("test"),
            started_at: Utc::now(),
        }
    }

    async fn send(app: Router, method: Method, uri: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request builds");
        app.oneshot(request).await.expect("router responds")
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).expect("json body")
    }

    fn positions(html: &str, names: &[&str]) -> Vec<usize> {
        names
            .iter()
            .map(|name| html.find(&format!("<li>{name}:")).expect("city listed"))
            .collect()
    }

    #[tokio::test]
    async fn index_lists_catalog_in_seed_order() {
        let response = send(router(test_state(true)), Method::GET, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("<h1>Welcome</h1>"));
        let found = positions(&html, &["Barcelona", "Seattle", "New York", "Paradisio"]);
        assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn climate_view_ranks_worst_to_best() {
        let response = send(router(test_state(true)), Method::GET, "/by-climate").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("<h1>By climate</h1>"));
        let found = positions(
            &html,
            &[
                "Deviltown",
                "Copenhagen",
                "Stockholm",
                "Seattle",
                "New York",
                "Barcelona",
                "Paradisio",
            ],
        );
        assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn views_reject_other_methods() {
        let response = send(router(test_state(true)), Method::POST, "/by-cost").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn talk_serves_message_form() {
        let response = send(router(test_state(true)), Method::GET, "/talk").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("<h1>Talk to us</h1>"));
        assert!(html.contains("<form method=\"post\" action=\"/message\">"));

        let response = send(router(test_state(true)), Method::POST, "/talk").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = send(router(test_state(true)), Method::POST, "/message").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let response = send(router(test_state(true)), Method::GET, "/by-elevation").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("There is no such page"));
    }

    #[tokio::test]
    async fn api_ranks_by_requested_criterion() {
        let response = send(
            router(test_state(true)),
            Method::GET,
            "/api/v1/cities?by=name",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["title"], "By name");
        assert_eq!(body["criterion"], "name");
        let names: Vec<_> = body["cities"]
            .as_array()
            .expect("cities array")
            .iter()
            .map(|city| city["name"].as_str().expect("name").to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "Barcelona",
                "Copenhagen",
                "Deviltown",
                "New York",
                "Paradisio",
                "Seattle",
                "Stockholm",
            ]
        );
        assert_eq!(body["cities"][0]["population_label"], "1.6M");
    }

    #[tokio::test]
    async fn api_without_criterion_returns_catalog_order() {
        let response = send(router(test_state(true)), Method::GET, "/api/v1/cities").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["title"], "All cities");
        assert!(body.get("criterion").is_none());
        assert_eq!(
            body["cities"][1]["description"],
            "Seattle: 652 405, cost: expensive, climate: good"
        );
    }

    #[tokio::test]
    async fn api_rejects_unsupported_criterion() {
        let response = send(
            router(test_state(true)),
            Method::GET,
            "/api/v1/cities?by=elevation",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        let message = body["error"].as_str().expect("error message");
        assert!(message.contains("unsupported criterion 'elevation'"));
    }

    #[tokio::test]
    async fn health_reports_version() {
        let response = send(router(test_state(true)), Method::GET, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], "test");
        assert!(body["started_at"].is_string());
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = send(router(test_state(false)), Method::GET, "/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = send(router(test_state(true)), Method::GET, "/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_views_never_disturb_each_other() {
        let state = test_state(true);
        let app = router(state.clone());
        let expected_cost = body_text(send(app.clone(), Method::GET, "/by-cost").await).await;
        let expected_climate =
            body_text(send(app.clone(), Method::GET, "/by-climate").await).await;

        let mut handles = Vec::new();
        for round in 0..32 {
            let app = app.clone();
            let uri = if round % 2 == 0 { "/by-cost" } else { "/by-climate" };
            handles.push(tokio::spawn(async move {
                (uri, body_text(send(app, Method::GET, uri).await).await)
            }));
        }

        for handle in handles {
            let (uri, html) = handle.await.expect("request task completes");
            let expected = if uri == "/by-cost" {
                &expected_cost
            } else {
                &expected_climate
            };
            assert_eq!(&html, expected);
        }
        assert_eq!(*state.catalog, Catalog::seed());
    }
}

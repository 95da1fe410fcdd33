// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTTP surface: `GET /` and `GET /{route_name}` serve the page, everything
//! else falls through to axum's defaults (404 for unknown paths, 405 for
//! other methods on the registered ones).

use axum::{response::Html, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::page::PageValues;

/// Build the router. `route_name` is resolved once at startup and never
/// re-read, so changing `APP_NAME` after launch moves the display value but
/// not the route.
pub fn router(route_name: &str) -> Router {
    Router::new()
        .route("/", get(show_form))
        .route(&format!("/{route_name}"), get(show_form))
        .layer(TraceLayer::new_for_http())
}

/// Render the page from the current environment. Infallible: every lookup
/// has a fallback, and the handler holds no state.
async fn show_form() -> Html<String> {
    Html(PageValues::from_env().render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::{Layer, ServiceExt};
    use tower_http::normalize_path::NormalizePathLayer;

    async fn get_path(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn root_serves_the_page() {
        let (status, body) = get_path(router("python3"), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Hello World!"));
        assert!(body.contains("APP_NAME is "));
        assert!(body.contains("Rust version is "));
    }

    #[tokio::test]
    async fn named_route_serves_the_same_page() {
        let (root_status, root_body) = get_path(router("python3"), "/python3").await;
        assert_eq!(root_status, StatusCode::OK);
        assert!(root_body.contains("Hello World!"));
    }

    #[tokio::test]
    async fn custom_name_moves_the_extra_route() {
        let (status, _) = get_path(router("myapp"), "/myapp").await;
        assert_eq!(status, StatusCode::OK);

        // The default route is gone once a name is configured.
        let (status, _) = get_path(router("myapp"), "/python3").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_paths_fall_through_to_404() {
        let (status, _) = get_path(router("python3"), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn response_is_html() {
        let response = router("python3")
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn trailing_slashes_are_tolerated() {
        // Same wrapper main() applies around the router. // is / with a
        // trailing slash, so it serves the page too.
        for path in ["//", "/python3/"] {
            let app = NormalizePathLayer::trim_trailing_slash().layer(router("python3"));
            let response = app
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {path}");
        }
    }
}

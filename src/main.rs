// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::Request, ServiceExt};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apprunner_rust_sample::{api, config};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The route suffix is resolved once here; the display values are looked
    // up again on every request.
    let route_name = config::route_name();
    let host = config::bind_host();
    let port = config::bind_port();

    // Trailing slashes are trimmed before routing, so /path and /path/ hit
    // the same handler.
    let app = NormalizePathLayer::trim_trailing_slash().layer(api::router(&route_name));

    tracing::info!("Sample app serving / and /{route_name} on http://{host}:{port}");

    // Hostname values like "localhost" are resolved at bind time; an
    // unresolvable host or a taken port is the one fatal error this app has.
    // Let it crash with a non-zero exit so the host notices.
    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .expect("Failed to bind listen address");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .await
        .expect("HTTP server failed");
}

#[cfg(test)]
mod tests {
    #[tokio::test]
    async fn hostname_bind_addresses_resolve() {
        // APP_HOST may carry a hostname rather than an IP literal; the bind
        // path must resolve it instead of rejecting it up front.
        let listener = tokio::net::TcpListener::bind(("localhost", 0)).await;
        assert!(listener.is_ok());
    }
}

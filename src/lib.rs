// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! AppRunner Rust Sample App
//!
//! A deliberately tiny web app used to verify that AppRunner can build and
//! host a Rust binary. It reads its configuration from the environment,
//! registers `GET /` and `GET /{APP_NAME}`, and answers both with one HTML
//! page showing the values AppRunner passed in.
//!
//! ## Modules
//!
//! - `api` - route registration and the single handler (Axum)
//! - `config` - environment variable names and fallbacks
//! - `page` - the HTML template and per-request rendering

pub mod api;
pub mod config;
pub mod page;

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines the environment variable names and default values the
//! sample app understands. AppRunner supplies these variables when it launches
//! the process; all of them are optional.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `APP_NAME` | Extra route suffix and display value | `python3` (route) / `Unknown` (display) |
//! | `APP_PORT` | Server bind port | `5050` |
//! | `APP_HOST` | Server bind address | `0.0.0.0` |
//! | `APP_DATA` | Data directory, display only | `Unknown` |
//! | `TEMP` | Temp directory, display only | `Unknown` |
//! | `RUST_LOG` | Log level filter | `info` |
//!
//! Note the split personality of `APP_NAME`: the route registration falls back
//! to `python3` while the rendered page falls back to `Unknown`. The original
//! sample app behaves this way and host tests run against it, so both
//! defaults are kept as-is.

use std::env;

/// Environment variable naming the app; doubles as the extra route suffix.
pub const APP_NAME_ENV: &str = "APP_NAME";

/// Environment variable for the listen port.
pub const APP_PORT_ENV: &str = "APP_PORT";

/// Environment variable for the listen address.
pub const APP_HOST_ENV: &str = "APP_HOST";

/// Environment variable for the allocated data directory.
pub const APP_DATA_ENV: &str = "APP_DATA";

/// Environment variable for the allocated temp directory.
pub const TEMP_ENV: &str = "TEMP";

/// Route suffix used when `APP_NAME` is absent.
pub const ROUTE_NAME_FALLBACK: &str = "python3";

/// Display value used when a variable is absent.
pub const DISPLAY_FALLBACK: &str = "Unknown";

/// Bind address used when `APP_HOST` is absent.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Bind port used when `APP_PORT` is absent or unparseable.
pub const DEFAULT_PORT: u16 = 5050;

/// A raw lookup resolved against a fallback. Absent and empty values are
/// treated identically.
fn resolve(raw: Option<String>, fallback: &str) -> String {
    raw.filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn resolve_port(raw: Option<String>) -> u16 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}

/// Read `name` from the environment, falling back when absent or empty.
pub fn var_or(name: &str, fallback: &str) -> String {
    resolve(env::var(name).ok(), fallback)
}

/// The route suffix registered next to `/`, read once at startup.
pub fn route_name() -> String {
    var_or(APP_NAME_ENV, ROUTE_NAME_FALLBACK)
}

/// The address to bind the listener to.
pub fn bind_host() -> String {
    var_or(APP_HOST_ENV, DEFAULT_HOST)
}

/// The port to bind the listener to. Unparseable values fall back silently,
/// matching the "missing configuration never fails" contract of the app.
pub fn bind_port() -> u16 {
    resolve_port(env::var(APP_PORT_ENV).ok())
}

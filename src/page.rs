// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The one page this app serves: a fixed HTML template filled in with the
//! current environment values and the compiler version. The page is rebuilt
//! on every request, so environment changes between requests show up
//! immediately; nothing is cached.

use crate::config;

/// `rustc --version` of the toolchain that built this binary, captured by
/// `build.rs`. The closest analogue to the interpreter version the other
/// sample apps print.
pub const RUSTC_VERSION: &str = env!("RUSTC_VERSION");

/// The values substituted into the page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageValues {
    pub app_name: String,
    pub app_port: String,
    pub app_data: String,
    pub temp: String,
    pub rust_version: String,
}

impl PageValues {
    /// Snapshot the display values from the environment. Every lookup falls
    /// back to `Unknown`, including `APP_NAME` (the route registration uses a
    /// different fallback on purpose, see [`crate::config`]).
    pub fn from_env() -> Self {
        Self {
            app_name: config::var_or(config::APP_NAME_ENV, config::DISPLAY_FALLBACK),
            app_port: config::var_or(config::APP_PORT_ENV, config::DISPLAY_FALLBACK),
            app_data: config::var_or(config::APP_DATA_ENV, config::DISPLAY_FALLBACK),
            temp: config::var_or(config::TEMP_ENV, config::DISPLAY_FALLBACK),
            rust_version: RUSTC_VERSION.to_string(),
        }
    }

    /// Render the template.
    pub fn render(&self) -> String {
        format!(
            "<html>\n\
             <head><title>Rust in AppRunner - App {app_name}</title></head>\n\
             <body>\n\
             <h1>Hello World!</h1>\n\
             APP_NAME is {app_name}<br/>\n\
             APP_PORT is {app_port}<br/>\n\
             APP_DATA is {app_data}<br/>\n\
             TEMP is {temp}<br/>\n\
             Rust version is {rust_version}<br/>\n\
             </body>\n\
             </html>\n",
            app_name = self.app_name,
            app_port = self.app_port,
            app_data = self.app_data,
            temp = self.temp,
            rust_version = self.rust_version,
        )
    }
}

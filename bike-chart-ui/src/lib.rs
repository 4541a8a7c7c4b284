//! Shared Dioxus components and D3.js bridge for the bike-share dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `chart_data`: serialization of pipeline output into chart payloads
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (metrics, date pickers, containers, etc.)

pub mod chart_data;
pub mod components;
pub mod js_bridge;
pub mod state;

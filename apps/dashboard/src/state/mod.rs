//! # State Module
//!
//! Session state for the dashboard, split into focused state types so each
//! command declares exactly what it touches.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Session (event loop task)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │      ┌──────────────────┬────┴─────────────┬──────────────────┐        │
//! │      ▼                  ▼                  ▼                  ▼         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │ CatalogState │  │  CartState   │  │ SearchDeb-   │  │ Config-    │  │
//! │  │              │  │              │  │ ouncer       │  │ State      │  │
//! │  │  products    │  │  cart        │  │  raw input   │  │  env +     │  │
//! │  │  query       │  │  overlay     │  │  timer task  │  │  defaults  │  │
//! │  │  page        │  │  updated_at  │  │  watch tx    │  │            │  │
//! │  │  columns     │  │              │  │              │  │            │  │
//! │  │  view cache  │  │              │  │              │  │            │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘  │
//! │                                                                         │
//! │  All mutation happens on the event loop task. The debouncer's timer    │
//! │  task only publishes settled terms.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod search;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::ConfigState;
pub use search::SearchDebouncer;

//! # Catalog Dashboard Entry Point
//!
//! ```text
//! stdin ──► console::parse_line ──► commands::* ──► state ──► console::render ──► stdout
//!                                        ▲
//!   search keystrokes ──► SearchDebouncer┘ (settled after the quiet period)
//!
//! tracing ──► stderr
//! ```
//!
//! The actual setup is in lib.rs so the session can be driven from tests.

#[tokio::main]
async fn main() {
    if let Err(err) = catalog_dashboard::run().await {
        eprintln!("catalog-dashboard: {}", err);
        std::process::exit(1);
    }
}

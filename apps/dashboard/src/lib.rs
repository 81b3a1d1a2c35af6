//! # Catalog Dashboard Library
//!
//! Console front end for the product catalog: a mock catalog, a searchable
//! and sortable paginated table, and a cart overlay.
//!
//! ## Module Organization
//! ```text
//! catalog_dashboard/
//! ├── lib.rs          ◄─── You are here (logging setup & event loop)
//! ├── session.rs      ◄─── Owns the state, routes commands
//! ├── console.rs      ◄─── Line parser + text renderer
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Products, query, page, columns, view cache
//! │   ├── cart.rs     ◄─── Cart + overlay flag
//! │   ├── search.rs   ◄─── Search debouncer
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Search, category, sort, columns, stats
//! │   ├── page.rs     ◄─── Pagination
//! │   └── cart.rs     ◄─── Cart manipulation
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    tokio::select! (one task)                            │
//! │                                                                         │
//! │   stdin line ────────────► session.handle_line() ──► print reply        │
//! │                                                                         │
//! │   settled search term ───► session.apply_settled_search() ──► print     │
//! │   (watch channel fed by                                                 │
//! │    the debounce timer)                                                  │
//! │                                                                         │
//! │   EOF ──► finish_search (settled, then pending) ──► print ──► exit      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod session;
pub mod state;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::RunError;
use session::{Reply, Session};
use state::ConfigState;

/// Runs the dashboard until `quit` or end of input.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr)
/// 2. Read configuration from `DASHBOARD_*` variables
/// 3. Generate the catalog and build the session
/// 4. Print the first screen, then process input
pub async fn run() -> Result<(), RunError> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(
        product_count = config.product_count,
        items_per_page = config.items_per_page,
        search_debounce_ms = config.search_debounce_ms,
        seed = ?config.seed,
        "Starting Catalog Dashboard"
    );

    let mut session = Session::new(config)?;
    let mut settled = session.search.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    print_screen(&mut stdout, &session.render()).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match session.handle_line(&line) {
                    Reply::Screen(text) => print_screen(&mut stdout, &text).await?,
                    Reply::Quit => break,
                }
            }
            Ok(()) = settled.changed() => {
                let term = settled.borrow_and_update().clone();
                session.apply_settled_search(&term);
                print_screen(&mut stdout, &session.render()).await?;
            }
        }
    }

    // Input ended before the last term reached the loop: it still applies.
    if session.finish_search(&mut settled) {
        print_screen(&mut stdout, &session.render()).await?;
    }

    info!("Catalog Dashboard stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=catalog=trace` - Show trace for catalog crates only
/// - Default: INFO, DEBUG for catalog crates
///
/// Logs go to stderr; stdout carries the dashboard itself.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalog=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn print_screen(stdout: &mut Stdout, text: &str) -> std::io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n\n").await?;
    stdout.flush().await
}

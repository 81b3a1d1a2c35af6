//! # Session
//!
//! Owns every state type and routes parsed console commands to the command
//! functions.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  handle_line("add 7")                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  console::parse_line ──► Command::Add(7)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  commands::cart::add_to_cart(&catalog, &mut cart, 7)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Reply::Screen(render())          errors ──► Reply::Screen("error ...") │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::sync::watch;
use tracing::{debug, info};

use catalog_core::generator::{generate, generate_seeded};
use catalog_core::Product;

use crate::commands::{cart, page, product, CartResponse, PageResponse};
use crate::console::{self, Command};
use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState, SearchDebouncer};

/// What the event loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print. Empty means nothing to print.
    Screen(String),
    Quit,
}

#[derive(Debug)]
pub struct Session {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub search: SearchDebouncer,
    pub config: ConfigState,
}

impl Session {
    /// Generates the catalog described by `config`.
    ///
    /// ## Errors
    /// `VALIDATION_ERROR` for a product count outside 1..=100000 or a page
    /// size of 0.
    pub fn new(config: ConfigState) -> Result<Self, ApiError> {
        let products = match config.seed {
            Some(seed) => generate_seeded(config.product_count, seed)?,
            None => generate(config.product_count)?,
        };
        info!(count = products.len(), seed = ?config.seed, "Catalog generated");
        Self::with_products(products, config)
    }

    /// Session over an existing catalog.
    pub fn with_products(products: Vec<Product>, config: ConfigState) -> Result<Self, ApiError> {
        let catalog = CatalogState::new(products, config.items_per_page)?;
        Ok(Session {
            catalog,
            cart: CartState::new(),
            search: SearchDebouncer::new(config.search_debounce()),
            config,
        })
    }

    /// Parses and applies one console line.
    ///
    /// Must be called from within a tokio runtime (search input starts a
    /// timer task).
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match console::parse_line(line) {
            Ok(None) => Reply::Screen(String::new()),
            Ok(Some(command)) => match self.apply(command) {
                Ok(reply) => reply,
                Err(err) => self.error_reply(err),
            },
            Err(err) => self.error_reply(err),
        }
    }

    /// Applies a parsed command.
    pub fn apply(&mut self, command: Command) -> Result<Reply, ApiError> {
        match command {
            Command::Search(text) => product::search_input(&mut self.search, &text),
            Command::Category(category) => {
                product::set_category(&mut self.catalog, category);
            }
            Command::Sort(column) => {
                product::toggle_sort(&mut self.catalog, column)?;
            }
            Command::Move(dragged, target) => {
                product::move_column(&mut self.catalog, dragged, target);
            }
            Command::Add(id) => {
                cart::add_to_cart(&self.catalog, &mut self.cart, id)?;
            }
            Command::Increment(id) => {
                cart::increment_cart_item(&mut self.cart, id);
            }
            Command::Decrement(id) => {
                cart::decrement_cart_item(&mut self.cart, id);
            }
            Command::Quantity(id, quantity) => {
                cart::update_cart_item(&mut self.cart, id, quantity);
            }
            Command::Remove(id) => {
                cart::remove_from_cart(&mut self.cart, id);
            }
            Command::Clear => {
                cart::clear_cart(&mut self.cart);
            }
            Command::Page(n) => {
                page::go_to_page(&mut self.catalog, n);
            }
            Command::Next => {
                page::next_page(&mut self.catalog);
            }
            Command::Prev => {
                page::prev_page(&mut self.catalog);
            }
            Command::OpenCart => {
                cart::open_cart(&mut self.cart);
            }
            Command::CloseCart => {
                cart::close_cart(&mut self.cart);
            }
            Command::Stats => {
                let stats = product::get_stats(&self.catalog);
                return Ok(Reply::Screen(console::render_stats(&stats)));
            }
            Command::Json => {
                let json = serde_json::to_string_pretty(&page::get_page(&self.catalog))
                    .map_err(|e| ApiError::internal(format!("Failed to serialize page: {}", e)))?;
                return Ok(Reply::Screen(json));
            }
            Command::Help => return Ok(Reply::Screen(console::HELP.to_string())),
            Command::Quit => return Ok(Reply::Quit),
        }
        Ok(Reply::Screen(self.render()))
    }

    /// Applies a search term the debouncer settled on.
    pub fn apply_settled_search(&mut self, term: &str) -> PageResponse {
        product::apply_search(&mut self.catalog, term)
    }

    /// Catches up on search input when input ends.
    ///
    /// A term the timer already published but the loop never received is
    /// applied first, then any input still inside its quiet period. Returns
    /// whether either applied.
    pub fn finish_search(&mut self, settled: &mut watch::Receiver<String>) -> bool {
        let mut applied = false;
        if settled.has_changed().unwrap_or(false) {
            let term = settled.borrow_and_update().clone();
            self.apply_settled_search(&term);
            applied = true;
        }
        if let Some(term) = self.search.flush() {
            self.apply_settled_search(&term);
            applied = true;
        }
        applied
    }

    /// Stats cards, table, pagination and (when open) the cart overlay.
    pub fn render(&self) -> String {
        let stats = product::get_stats(&self.catalog);
        let page = PageResponse::from(&self.catalog);
        let cart = CartResponse::from(&self.cart);

        let mut screen = console::render_stats(&stats);
        screen.push('\n');
        screen.push_str(&console::render_page(
            &page,
            self.search.input(),
            cart.item_count,
            &self.config,
        ));
        if cart.is_open {
            screen.push_str("\n\n");
            screen.push_str(&console::render_cart(&cart, &self.config));
        }
        screen
    }

    fn error_reply(&self, err: ApiError) -> Reply {
        debug!(code = err.code.as_str(), message = %err.message, "Command rejected");
        Reply::Screen(format!("error {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config() -> ConfigState {
        ConfigState {
            product_count: 1000,
            seed: Some(21),
            ..ConfigState::default()
        }
    }

    fn screen(reply: Reply) -> String {
        match reply {
            Reply::Screen(text) => text,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let err = Session::new(ConfigState {
            product_count: 0,
            ..config()
        })
        .unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);

        assert!(Session::new(ConfigState {
            items_per_page: 0,
            ..config()
        })
        .is_err());
    }

    #[tokio::test]
    async fn test_cart_flow_renders_overlay() {
        let mut session = Session::new(config()).unwrap();
        let price = session.catalog.product(5).unwrap().price();

        session.handle_line("add 5");
        session.handle_line("add 5");
        session.handle_line("qty 5 3");
        let text = screen(session.handle_line("cart"));

        assert!(text.contains("── Cart (3 items) ──"));
        assert!(text.ends_with(&format!("Total: {}", price * 3)));

        let text = screen(session.handle_line("close"));
        assert!(!text.contains("Total:"));
    }

    #[tokio::test]
    async fn test_errors_do_not_end_session() {
        let mut session = Session::new(config()).unwrap();

        let text = screen(session.handle_line("add 4242"));
        assert_eq!(text, "error [NOT_FOUND] Product not found: 4242");

        let text = screen(session.handle_line("sort image"));
        assert!(text.starts_with("error [VALIDATION_ERROR]"));

        assert_eq!(session.handle_line(""), Reply::Screen(String::new()));
        assert_eq!(session.handle_line("quit"), Reply::Quit);
    }

    #[tokio::test]
    async fn test_oversized_quantity_is_rejected() {
        let mut session = Session::new(config()).unwrap();
        let price = session.catalog.product(1).unwrap().price();
        session.handle_line("add 1");

        let text = screen(session.handle_line("qty 1 9223372036854775807"));
        assert_eq!(text, "error [VALIDATION_ERROR] quantity must be between 0 and 999");

        session.handle_line("qty 1 999");
        let text = screen(session.handle_line("inc 1"));
        assert!(text.contains("cart: 999"));

        let text = screen(session.handle_line("cart"));
        assert!(text.ends_with(&format!("Total: {}", price * 999)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_applies_after_quiet_period() {
        let mut session = Session::new(config()).unwrap();
        let mut settled = session.search.subscribe();

        let text = screen(session.handle_line("search Product"));
        assert!(text.contains("(typing...)"));
        session.handle_line("search Product 5");
        assert_eq!(session.catalog.view_len(), 1000);

        settled.changed().await.unwrap();
        let term = settled.borrow_and_update().clone();
        assert_eq!(term, "Product 5");

        let page = session.apply_settled_search(&term);
        assert_eq!(page.total_items, 111);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(!settled.has_changed().unwrap());
        assert!(!session.render().contains("(typing...)"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_finish_search_applies_unreceived_term() {
        let mut session = Session::new(config()).unwrap();
        let mut settled = session.search.subscribe();

        session.handle_line("search Product 5");
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(!session.search.is_pending());
        assert_eq!(session.catalog.view_len(), 1000);

        assert!(session.finish_search(&mut settled));
        assert_eq!(session.catalog.query().search, "Product 5");
        assert_eq!(session.catalog.view_len(), 111);
        assert!(!session.finish_search(&mut settled));
    }

    #[tokio::test(start_paused = true)]
    async fn test_finish_search_flushes_pending_input() {
        let mut session = Session::new(config()).unwrap();
        let mut settled = session.search.subscribe();

        session.handle_line("search Product 5");
        tokio::time::sleep(Duration::from_millis(400)).await;
        session.handle_line("search Product 50");

        assert!(session.finish_search(&mut settled));
        assert_eq!(session.catalog.query().search, "Product 50");
        assert_eq!(session.catalog.view_len(), 11);
    }

    #[tokio::test]
    async fn test_json_reply_is_page_response() {
        let mut session = Session::new(config()).unwrap();
        session.handle_line("page 3");
        let text = screen(session.handle_line("json"));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["currentPage"], 3);
        assert_eq!(json["rows"].as_array().map(Vec::len), Some(10));
    }
}

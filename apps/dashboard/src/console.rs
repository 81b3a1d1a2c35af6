//! # Console
//!
//! Line parser and text renderer for the dashboard.
//!
//! ## Screen Layout
//! ```text
//! Total Products: 1000 | Total Revenue: $254,321 | Low Stock Items: 187 | Categories: 8
//! Showing 10 of 111 products   search: "Product 5"   category: All   cart: 3
//! ID     Image  Name           Category       Price    Stock      Status        Actions
//! ────────────────────────────────────────────────────────────────────────────────────
//! 5      [img]  Product 5      Books          $129     12 low     Active        [add]
//! ...
//! < Prev  [1] 2 3 4 5  Next >   page 1 of 12
//! ```

use std::fmt::Write as _;

use catalog_core::validation::{parse_page_number, parse_product_id, parse_quantity};
use catalog_core::{Category, ColumnId, CoreError, SortDirection};

use crate::commands::{CartResponse, PageResponse, ProductRow, StatsResponse};
use crate::error::ApiError;
use crate::state::ConfigState;

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Category(Option<Category>),
    Sort(ColumnId),
    Move(ColumnId, ColumnId),
    Add(u32),
    Increment(u32),
    Decrement(u32),
    Quantity(u32, i64),
    Remove(u32),
    Clear,
    Page(usize),
    Next,
    Prev,
    OpenCart,
    CloseCart,
    Stats,
    Json,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  search <text>          type into the search box (applied after the debounce delay)
  category <name>|all    filter by category
  sort <column>          click a column header (asc, then desc)
  move <column> <column> drag a column onto another
  add <id>               add a product to the cart
  inc <id> | dec <id>    cart [+] / [-]
  qty <id> <n>           set a cart quantity (n <= 0 removes)
  remove <id> | clear    remove a cart line / empty the cart
  page <n> | next | prev pagination
  cart | close           open / close the cart overlay
  stats | json | help | quit";

/// Parses one input line. Blank lines yield `None`.
///
/// ## Errors
/// `VALIDATION_ERROR` for unknown commands and malformed arguments.
pub fn parse_line(line: &str) -> Result<Option<Command>, ApiError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match verb.to_ascii_lowercase().as_str() {
        // Spaces after the verb separate; inner and trailing spaces are kept.
        "search" => Command::Search(rest.trim_start().to_string()),
        "category" => Command::Category(parse_category(rest.trim())?),
        "sort" => Command::Sort(parse_column(one_arg(&args, "sort <column>")?)?),
        "move" => match args.as_slice() {
            [dragged, target] => Command::Move(parse_column(dragged)?, parse_column(target)?),
            _ => return Err(usage("move <column> <column>")),
        },
        "add" => Command::Add(parse_product_id(one_arg(&args, "add <id>")?)?),
        "inc" => Command::Increment(parse_product_id(one_arg(&args, "inc <id>")?)?),
        "dec" => Command::Decrement(parse_product_id(one_arg(&args, "dec <id>")?)?),
        "qty" => match args.as_slice() {
            [id, quantity] => Command::Quantity(parse_product_id(id)?, parse_quantity(quantity)?),
            _ => return Err(usage("qty <id> <n>")),
        },
        "remove" => Command::Remove(parse_product_id(one_arg(&args, "remove <id>")?)?),
        "clear" => Command::Clear,
        "page" => Command::Page(parse_page_number(one_arg(&args, "page <n>")?)?),
        "next" => Command::Next,
        "prev" => Command::Prev,
        "cart" => Command::OpenCart,
        "close" => Command::CloseCart,
        "stats" => Command::Stats,
        "json" => Command::Json,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(ApiError::validation(format!(
                "Unknown command '{}' (try 'help')",
                other
            )))
        }
    };

    Ok(Some(command))
}

fn one_arg<'a>(args: &[&'a str], form: &str) -> Result<&'a str, ApiError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(usage(form)),
    }
}

fn usage(form: &str) -> ApiError {
    ApiError::validation(format!("usage: {}", form))
}

/// Category names are matched case-insensitively; `all` or nothing clears
/// the filter.
fn parse_category(name: &str) -> Result<Option<Category>, ApiError> {
    if name.is_empty() || name.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Category::ALL
        .iter()
        .copied()
        .find(|c| c.as_str().eq_ignore_ascii_case(name))
        .map(Some)
        .ok_or_else(|| CoreError::UnknownCategory(name.to_string()).into())
}

fn parse_column(name: &str) -> Result<ColumnId, ApiError> {
    Ok(name.to_ascii_lowercase().parse::<ColumnId>()?)
}

// =============================================================================
// Rendering
// =============================================================================

const LOW_STOCK_MARK: &str = "low";

fn column_width(id: ColumnId) -> usize {
    match id {
        ColumnId::Id => 6,
        ColumnId::Image => 6,
        ColumnId::Name => 14,
        ColumnId::Category => 14,
        ColumnId::Price => 8,
        ColumnId::Stock => 10,
        ColumnId::Status => 13,
        ColumnId::Actions => 7,
    }
}

fn cell(row: &ProductRow, id: ColumnId, config: &ConfigState) -> String {
    match id {
        ColumnId::Id => row.id.to_string(),
        ColumnId::Image => "[img]".to_string(),
        ColumnId::Name => row.name.clone(),
        ColumnId::Category => row.category.to_string(),
        ColumnId::Price => config.format_whole(row.price_cents),
        ColumnId::Stock if row.low_stock => format!("{} {}", row.stock, LOW_STOCK_MARK),
        ColumnId::Stock => row.stock.to_string(),
        ColumnId::Status => row.status.to_string(),
        ColumnId::Actions => "[add]".to_string(),
    }
}

fn push_cell(out: &mut String, text: &str, width: usize) {
    let clipped: String = text.chars().take(width).collect();
    let _ = write!(out, "{:<width$} ", clipped, width = width);
}

/// The four stat cards on one line.
pub fn render_stats(stats: &StatsResponse) -> String {
    format!(
        "Total Products: {} | Total Revenue: {} | Low Stock Items: {} | Categories: {}",
        stats.stats.total_products,
        stats.total_value().to_grouped_string(),
        stats.stats.low_stock_items,
        stats.stats.categories_count,
    )
}

/// Filter summary, table and pagination bar.
pub fn render_page(page: &PageResponse, search_input: &str, cart_count: i64, config: &ConfigState) -> String {
    let mut out = String::new();

    let category = page
        .query
        .category
        .map(|c| c.to_string())
        .unwrap_or_else(|| "All".to_string());
    let _ = write!(
        out,
        "Showing {} of {} products   search: \"{}\"   category: {}   cart: {}",
        page.rows.len(),
        page.total_items,
        search_input,
        category,
        cart_count,
    );
    if search_input != page.query.search {
        out.push_str("   (typing...)");
    }
    out.push('\n');

    // Header
    let mut rule_len = 0;
    for column in &page.columns {
        let width = column_width(column.id);
        let label = match (page.query.sort.key, column.sort_key()) {
            (Some(active), Some(key)) if active == key => {
                let arrow = match page.query.sort.direction {
                    SortDirection::Asc => "^",
                    SortDirection::Desc => "v",
                };
                format!("{} {}", column.label, arrow)
            }
            _ => column.label.clone(),
        };
        push_cell(&mut out, &label, width);
        rule_len += width + 1;
    }
    trim_line_end(&mut out);
    out.push('\n');
    out.push_str(&"─".repeat(rule_len.saturating_sub(1)));
    out.push('\n');

    // Rows
    if page.rows.is_empty() {
        out.push_str("No products found\n");
    }
    for row in &page.rows {
        for column in &page.columns {
            push_cell(&mut out, &cell(row, column.id, config), column_width(column.id));
        }
        trim_line_end(&mut out);
        out.push('\n');
    }

    out.push_str(&render_pagination(page));
    out
}

/// `< Prev  1 [2] 3 4 5  Next >   page 2 of 100`
pub fn render_pagination(page: &PageResponse) -> String {
    let window: Vec<String> = page
        .page_window
        .iter()
        .map(|&n| {
            if n == page.current_page {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect();

    format!(
        "{}  {}  {}   page {} of {}",
        if page.has_prev { "< Prev" } else { "      " },
        window.join(" "),
        if page.has_next { "Next >" } else { "      " },
        page.current_page,
        page.total_pages,
    )
}

/// The cart overlay.
pub fn render_cart(cart: &CartResponse, config: &ConfigState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "── Cart ({} items) ──", cart.item_count);

    if cart.lines.is_empty() {
        out.push_str("Your cart is empty\n");
    }
    for line in &cart.lines {
        let _ = writeln!(
            out,
            "  #{:<5} {:<14} {} x {} = {}",
            line.product_id,
            line.name,
            config.format_currency(line.unit_price_cents),
            line.quantity,
            config.format_currency(line.line_total().cents()),
        );
    }

    let _ = write!(out, "Total: {}", config.format_currency(cart.total.cents()));
    out
}

fn trim_line_end(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
}

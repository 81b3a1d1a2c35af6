//! # Configuration State
//!
//! Settings read once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`DASHBOARD_*`)
//! 2. Defaults (this file)
//!
//! Nothing is persisted. Configuration is read-only after startup.

use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use catalog_core::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_PRODUCT_COUNT, DEFAULT_SEARCH_DEBOUNCE_MS};

pub const ENV_PRODUCT_COUNT: &str = "DASHBOARD_PRODUCT_COUNT";
pub const ENV_PAGE_SIZE: &str = "DASHBOARD_PAGE_SIZE";
pub const ENV_SEARCH_DEBOUNCE_MS: &str = "DASHBOARD_SEARCH_DEBOUNCE_MS";
pub const ENV_SEED: &str = "DASHBOARD_SEED";

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigState {
    /// Number of mock products generated at startup
    pub product_count: usize,

    /// Rows per table page
    pub items_per_page: usize,

    /// Quiet period before a search term is applied
    pub search_debounce_ms: u64,

    /// Fixed generator seed; `None` draws from the thread RNG
    pub seed: Option<u64>,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

/// Prices are stored in cents.
const CENTS_PER_UNIT: i64 = 100;

impl Default for ConfigState {
    /// ## Default Values
    /// - 1000 products, unseeded
    /// - 10 rows per page
    /// - 300 ms search debounce
    /// - USD ($)
    fn default() -> Self {
        ConfigState {
            product_count: DEFAULT_PRODUCT_COUNT,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            seed: None,
            currency_symbol: "$".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `DASHBOARD_PRODUCT_COUNT`: number of generated products
    /// - `DASHBOARD_PAGE_SIZE`: rows per page
    /// - `DASHBOARD_SEARCH_DEBOUNCE_MS`: search quiet period
    /// - `DASHBOARD_SEED`: generator seed
    ///
    /// Values that don't parse are logged and ignored. Range checks happen
    /// when the catalog is built.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(count) = parse_var(&lookup, ENV_PRODUCT_COUNT) {
            config.product_count = count;
        }

        if let Some(size) = parse_var(&lookup, ENV_PAGE_SIZE) {
            config.items_per_page = size;
        }

        if let Some(ms) = parse_var(&lookup, ENV_SEARCH_DEBOUNCE_MS) {
            config.search_debounce_ms = ms;
        }

        if let Some(seed) = parse_var(&lookup, ENV_SEED) {
            config.seed = Some(seed);
        }

        config
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_dashboard::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            (cents / CENTS_PER_UNIT).abs(),
            (cents % CENTS_PER_UNIT).abs()
        )
    }

    /// Whole-unit price as shown in the table's price column (`$129`).
    pub fn format_whole(&self, cents: i64) -> String {
        format!("{}{}", self.currency_symbol, cents / CENTS_PER_UNIT)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, value = %raw, error = %e, "Ignoring unparseable configuration value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ConfigState::from_lookup(|_| None);
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.product_count, 1000);
        assert_eq!(config.items_per_page, 10);
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            (ENV_PRODUCT_COUNT, "250"),
            (ENV_PAGE_SIZE, " 25 "),
            (ENV_SEARCH_DEBOUNCE_MS, "50"),
            (ENV_SEED, "42"),
        ]));
        assert_eq!(config.product_count, 250);
        assert_eq!(config.items_per_page, 25);
        assert_eq!(config.search_debounce_ms, 50);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_unparseable_values_keep_defaults() {
        let config = ConfigState::from_lookup(lookup_from(&[
            (ENV_PRODUCT_COUNT, "lots"),
            (ENV_PAGE_SIZE, "-3"),
            (ENV_SEED, ""),
        ]));
        assert_eq!(config.product_count, DEFAULT_PRODUCT_COUNT);
        assert_eq!(config.items_per_page, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_format_whole() {
        let config = ConfigState::default();
        assert_eq!(config.format_whole(12_900), "$129");
        assert_eq!(config.format_whole(1_000), "$10");
    }
}

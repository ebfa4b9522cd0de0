//! # Application Configuration
//!
//! Settings a cart session needs at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TAILORKART_*`)
//! 2. Defaults (this file)
//!
//! ## Environment Variables
//! | Variable                     | Meaning                              | Default        |
//! |------------------------------|--------------------------------------|----------------|
//! | `TAILORKART_DB_PATH`         | SQLite file holding cart snapshots   | platform data  |
//! | `TAILORKART_CART_SLOT`       | Snapshot slot name                   | `cart`         |
//! | `TAILORKART_GST_RATE`        | GST in percent, e.g. `18` or `12.5`  | `18`           |
//! | `TAILORKART_QUANTITY_FLOOR`  | `clamp` or `remove`                  | `clamp`        |
//!
//! Configuration is read-only after startup.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Serialize;
use tailorkart_core::cart::DEFAULT_QUANTITY_FLOOR_POLICY;
use tailorkart_core::pricing::GST_RATE;
use tailorkart_core::validation::validate_tax_rate_bps;
use tailorkart_core::{PricingEngine, QuantityFloorPolicy, TaxRate};

use crate::error::{DbError, DbResult};
use crate::pool::DbConfig;

pub const ENV_DB_PATH: &str = "TAILORKART_DB_PATH";
pub const ENV_CART_SLOT: &str = "TAILORKART_CART_SLOT";
pub const ENV_GST_RATE: &str = "TAILORKART_GST_RATE";
pub const ENV_QUANTITY_FLOOR: &str = "TAILORKART_QUANTITY_FLOOR";

/// Slot used when none is configured.
pub const DEFAULT_CART_SLOT: &str = "cart";

const DB_FILE_NAME: &str = "tailorkart.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub cart_slot: String,
    pub gst_rate: TaxRate,
    pub quantity_floor: QuantityFloorPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: default_database_path(),
            cart_slot: DEFAULT_CART_SLOT.to_string(),
            gst_rate: GST_RATE,
            quantity_floor: DEFAULT_QUANTITY_FLOOR_POLICY,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// Unset or blank variables keep their defaults; a set variable that
    /// does not parse is an error.
    pub fn from_env() -> DbResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup` (environment or a test map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DbResult<Self> {
        let mut config = AppConfig::default();
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(path) = get(ENV_DB_PATH) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(slot) = get(ENV_CART_SLOT) {
            config.cart_slot = slot;
        }

        if let Some(rate) = get(ENV_GST_RATE) {
            config.gst_rate = parse_gst_rate(&rate)?;
        }

        if let Some(floor) = get(ENV_QUANTITY_FLOOR) {
            config.quantity_floor = floor
                .parse()
                .map_err(|e| DbError::config(ENV_QUANTITY_FLOOR, e))?;
        }

        Ok(config)
    }

    pub fn pricing_engine(&self) -> PricingEngine {
        PricingEngine::new(self.gst_rate)
    }

    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
    }
}

/// Parses a percentage such as `"18"` or `"12.5"` into basis points.
fn parse_gst_rate(raw: &str) -> DbResult<TaxRate> {
    let pct: f64 = raw
        .parse()
        .map_err(|_| DbError::config(ENV_GST_RATE, format!("'{raw}' is not a number")))?;

    if !pct.is_finite() || pct < 0.0 {
        return Err(DbError::config(ENV_GST_RATE, format!("'{raw}' is not a valid percentage")));
    }

    let rate = TaxRate::from_percentage(pct);
    validate_tax_rate_bps(rate.bps()).map_err(|e| DbError::config(ENV_GST_RATE, e))?;
    Ok(rate)
}

/// Platform data directory for the snapshot file.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/in.tailorkart.cart/tailorkart.db`
/// - **Windows**: `%APPDATA%\tailorkart\cart\data\tailorkart.db`
/// - **Linux**: `~/.local/share/cart/tailorkart.db`
///
/// Falls back to the working directory when no home directory is known.
pub fn default_database_path() -> PathBuf {
    ProjectDirs::from("in", "tailorkart", "cart")
        .map(|dirs| dirs.data_dir().join(DB_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DB_FILE_NAME))
}

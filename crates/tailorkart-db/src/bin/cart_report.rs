//! # Cart Report
//!
//! Prints the cart persisted in a snapshot slot, with totals and the
//! reason each line is (or is not) ready for checkout.
//!
//! ## Usage
//! ```bash
//! # Default database and slot (see AppConfig)
//! cargo run -p tailorkart-db --bin cart_report
//!
//! # Another slot, machine-readable output
//! cargo run -p tailorkart-db --bin cart_report -- --slot guest --json
//!
//! # Specify database path
//! cargo run -p tailorkart-db --bin cart_report -- --db ./data/tailorkart.db
//! ```
//!
//! Read-only: the report never writes the snapshot back.

use tailorkart_core::checkout::item_blocker;
use tailorkart_core::{CartStore, CartView};
use tailorkart_db::{AppConfig, Database, DbError};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let mut config = AppConfig::from_env()?;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    config.database_path = args[i + 1].clone().into();
                    i += 1;
                }
            }
            "--slot" | "-s" => {
                if i + 1 < args.len() {
                    config.cart_slot = args[i + 1].clone();
                    i += 1;
                }
            }
            "--json" => json = true,
            "--help" | "-h" => {
                println!("TailorKart Cart Report");
                println!();
                println!("Usage: cart_report [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>     Database file path (default: platform data dir)");
                println!("  -s, --slot <NAME>   Snapshot slot (default: cart)");
                println!("      --json          Print the cart view as JSON");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            other => warn!(arg = %other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    let db = Database::new(config.db_config()).await?;

    let items = match db.cart_snapshots().load_items(&config.cart_slot).await {
        Ok(items) => items,
        Err(e @ DbError::CorruptSnapshot { .. }) => {
            warn!(error = %e, "Reporting an empty cart");
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    let mut cart = CartStore::new().with_floor_policy(config.quantity_floor);
    cart.restore(items);
    let view = CartView::new(&cart, &config.pricing_engine());

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_report(&config, &view);
    }

    db.close().await;
    Ok(())
}

fn print_report(config: &AppConfig, view: &CartView) {
    println!("🧵 TailorKart Cart Report");
    println!("=========================");
    println!("Database: {}", config.database_path.display());
    println!("Slot:     {}", config.cart_slot);
    println!();

    if view.items.is_empty() {
        println!("(cart is empty)");
        return;
    }

    for item in &view.items {
        let status = match item_blocker(item) {
            None => "ready".to_string(),
            Some(reason) => format!("blocked: {}", reason.as_str()),
        };
        println!(
            "  {:<28} {:>3} × {:>12} = {:>12}   [{}]",
            item.name,
            item.quantity,
            item.price.to_string(),
            item.line_total().to_string(),
            status
        );
    }

    println!();
    println!("Items:        {}", view.total_items);
    println!("Subtotal:     {}", view.totals.subtotal);
    println!("GST ({}%):   {}", config.gst_rate.percentage(), view.totals.tax);
    println!("Delivery:     {}", view.totals.delivery_fee);
    println!("Grand total:  {}", view.totals.grand_total);
    println!();
    if view.checkout.ready {
        println!("✓ Ready for checkout");
    } else {
        println!("⚠ Not ready for checkout ({} item(s) need attention)", view.checkout.diagnostics.len());
    }
}

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` for verbose output
/// - Default: info for the binary, debug for tailorkart crates, warn for sqlx
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tailorkart=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

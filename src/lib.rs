#[cfg(feature = "egui_ui")]
use eframe::egui;

pub mod bank;
pub mod bulk_delete;
pub mod cell_format;
pub mod config;
pub mod data_access;

#[cfg(feature = "egui_ui")]
pub mod data_table;
#[cfg(feature = "egui_ui")]
pub mod dialog;

mod driver_sqlite;

pub mod edit_dialog;
pub mod entity;
pub mod error;
pub mod export;
pub mod form;
pub mod models;
pub mod notifier;
pub mod schema;
pub mod table;

#[cfg(feature = "egui_ui")]
pub mod window_egui;

/// Desktop entrypoint: configuration, database, then the window loop.
#[cfg(feature = "egui_ui")]
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let _ = env_logger::Builder::from_default_env()
        .filter_module("bank_manager", log::LevelFilter::Debug)
        .is_test(false)
        .try_init();

    let data_dir = config::ensure_data_dir()?;
    let prefs = config::AppPreferences::load(&data_dir);
    log::info!(
        "Application starting with data directory: {}",
        data_dir.display()
    );

    let url = prefs.resolve_database_url(&data_dir);
    let db = data_access::DataAccess::connect(&url, prefs.max_connections)?;
    if prefs.bootstrap_schema {
        schema::ensure_bank_schema(&db)?;
    }

    let mut options = eframe::NativeOptions::default();
    options.viewport.inner_size = Some(egui::vec2(1000.0, 650.0));
    options.viewport.min_inner_size = Some(egui::vec2(720.0, 480.0));
    eframe::run_native(
        "Bank Management System",
        options,
        Box::new(move |cc| {
            window_egui::apply_preferences(&cc.egui_ctx, &prefs);
            Ok(Box::new(window_egui::BankManager::new(db)))
        }),
    )?;
    Ok(())
}

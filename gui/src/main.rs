// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, WindowBuilder};

mod app;
mod components;
mod config;
mod services;
mod state;

use app::App;
use config::AppConfig;
use services::local_backend::LocalBackend;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting invoice editor (Dioxus Desktop)...");

    let app_config = AppConfig::load_default()?;
    tracing::info!("Loaded default configuration version {}.", app_config.version);

    let formatter = app_config.engine.formatter()?;
    let backend = LocalBackend::new(
        app_config.required_fields(),
        app_config.form.required_message.clone(),
    );

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(dioxus_desktop::tao::dpi::LogicalSize::new(
                app_config.app.width,
                app_config.app.height,
            )),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .with_context(formatter)
        .with_context(backend)
        .launch(App);

    tracing::info!("Invoice editor closed.");
    Ok(())
}

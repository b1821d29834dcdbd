#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::time::Duration;

use clap::Parser;
use eframe::egui;
use tr::tr;
#[cfg(not(windows))]
use tr::tr_init;
use tracing_subscriber::EnvFilter;

use egui_deck_remote::app::{DeckRemote, PanelOptions};

/// Control panel for presentation devices on the local network.
#[derive(Parser, Debug)]
#[command(name = "deck-remote", version)]
struct Args {
    /// Seconds between health-check cycles
    #[arg(long, default_value_t = 5)]
    poll_interval: u64,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = 3)]
    timeout: u64,
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let panel_options = PanelOptions {
        poll_interval: Duration::from_secs(args.poll_interval.max(1)),
        request_timeout: Duration::from_secs(args.timeout.max(1)),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(tr!("Deck Remote"))
            .with_inner_size([640.0, 480.0])
            .with_resizable(true),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    #[cfg(not(windows))]
    tr_init!("./locales");

    eframe::run_native(
        "deck_remote",
        options,
        Box::new(move |cc| Ok(Box::new(DeckRemote::new(cc, panel_options)))),
    )
}

//! Card Slider Frontend Entry Point

mod app;
mod components;
mod config;
mod state;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    console_logger::init_logger(level).expect("failed to init console logger");

    mount_to_body(App);
}

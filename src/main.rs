//! Storefront Frontend Entry Point

mod api;
mod app;
mod busy;
mod carousel;
mod catalog;
mod collection;
mod components;
mod config_editor;
mod context;
mod error;
mod logging;
mod models;
mod routes;
mod sections;
mod session;
mod settings;
mod status;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(settings::AppSettings::from_env().level_filter());
    mount_to_body(App);
}

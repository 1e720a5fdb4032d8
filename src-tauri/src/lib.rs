mod error;
mod logging;
mod models;
mod services;
mod commands;

use std::sync::Mutex;

use services::platform::{build_shell_window, NavigationCounter, TauriContent, TauriHost};
use services::ShellController;
use tauri::Manager;
use tracing::info;

use crate::models::ShellConfig;

pub fn run() {
    logging::init_logging();

    tauri::Builder::default()
        .setup(|app| {
            let config = ShellConfig::fixed()?;
            info!(
                event = "shell.app.starting",
                source = %config.source_url,
                capabilities = ?config.capabilities
            );

            let navigations = NavigationCounter::default();
            let window = build_shell_window(app.handle(), &config, navigations.clone())?;
            let host = TauriHost::new(window.clone());
            let surface = TauriContent::new(window, config.capabilities, navigations);
            let controller = ShellController::start(config, host, surface)?;
            app.manage(Mutex::new(controller));

            info!(event = "shell.app.started");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::press_back,
            commands::get_shell_state,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

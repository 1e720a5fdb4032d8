use tauri::AppHandle;

use crate::error::{AppError, AppResult};
use crate::models::ShellSnapshot;
use crate::services::navigation::BackOutcome;
use crate::services::platform::with_shell;

// Synchronous commands run on the main thread, next to the window events.

#[tauri::command]
pub fn press_back(app: AppHandle) -> AppResult<BackOutcome> {
    with_shell(&app, |shell| shell.on_back_pressed()).ok_or_else(shell_not_ready)
}

#[tauri::command]
pub fn get_shell_state(app: AppHandle) -> AppResult<ShellSnapshot> {
    with_shell(&app, |shell| shell.snapshot()).ok_or_else(shell_not_ready)
}

fn shell_not_ready() -> AppError {
    AppError::Shell("Shell is not running yet".to_string())
}

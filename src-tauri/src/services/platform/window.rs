use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tauri::webview::{PageLoadEvent, PageLoadPayload};
use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tracing::debug;
use url::Url;

use crate::error::{AppError, AppResult};
use crate::models::{ChromeFlags, ContentCapabilities, ShellConfig};
use crate::services::controller::ShellController;
use crate::services::history::HistoryMirror;
use crate::services::host::{ContentSurface, ShellHost};

pub type AppShell = ShellController<TauriHost, TauriContent>;

pub type ShellState = Mutex<AppShell>;

/// Forwards the back inputs (browser back key, Alt+Left, mouse back button)
/// to the `press_back` command.
const BACK_BRIDGE_SCRIPT: &str = r#"
(function () {
  function pressBack(event) {
    var internals = window.__TAURI_INTERNALS__;
    if (!internals) { return; }
    event.preventDefault();
    event.stopPropagation();
    internals.invoke('press_back');
  }
  window.addEventListener('keydown', function (event) {
    if (event.key === 'BrowserBack' || (event.altKey && event.key === 'ArrowLeft')) {
      pressBack(event);
    }
  }, true);
  window.addEventListener('mouseup', function (event) {
    if (event.button === 3) { pressBack(event); }
  }, true);
})();
"#;

/// Runs `f` against the managed shell. Returns `None` before the shell is
/// registered. A poisoned lock is recovered; the state is plain flags.
pub fn with_shell<T>(app: &AppHandle, f: impl FnOnce(&mut AppShell) -> T) -> Option<T> {
    let state = app.try_state::<ShellState>()?;
    let mut guard = match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    Some(f(&mut guard))
}

/// Navigations started by the content since the last finished page load.
///
/// Shared between the window's navigation hook and the content surface without
/// going through the shell lock.
#[derive(Debug, Clone, Default)]
pub struct NavigationCounter(Arc<AtomicUsize>);

impl NavigationCounter {
    pub fn note(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Resets the counter, returning whether any navigation started.
    pub fn take(&self) -> bool {
        self.0.swap(0, Ordering::Relaxed) > 0
    }
}

/// Window changes needed to reach `flags`. `None` leaves a property alone so
/// re-asserting an already applied state touches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeChanges {
    pub fullscreen: Option<bool>,
    pub decorations: Option<bool>,
}

pub fn chrome_changes(flags: ChromeFlags, is_fullscreen: bool, is_decorated: bool) -> ChromeChanges {
    let fullscreen = flags.hides_all_chrome();
    let decorations = !flags.edge_to_edge;
    ChromeChanges {
        fullscreen: (is_fullscreen != fullscreen).then_some(fullscreen),
        decorations: (is_decorated != decorations).then_some(decorations),
    }
}

/// Builds the single shell window. It starts on a blank page that is never
/// mirrored as history; the controller issues the real load.
pub fn build_shell_window(
    app: &AppHandle,
    config: &ShellConfig,
    navigations: NavigationCounter,
) -> AppResult<WebviewWindow> {
    let blank = Url::parse("about:blank")?;

    let window = WebviewWindowBuilder::new(app, &config.window_label, WebviewUrl::External(blank))
        .title(&config.window_title)
        .fullscreen(true)
        .decorations(false)
        .incognito(!config.capabilities.persistent_local_storage)
        .initialization_script(BACK_BRIDGE_SCRIPT)
        .on_navigation(move |url| {
            debug!(event = "shell.content.navigation_started", url = %url);
            navigations.note();
            true
        })
        .on_page_load(|window, payload| handle_page_load(&window, &payload))
        .build()?;

    let handle = app.clone();
    window.on_window_event(move |event| {
        if let tauri::WindowEvent::Focused(has_focus) = event {
            with_shell(&handle, |shell| shell.on_focus_changed(*has_focus));
        }
    });

    Ok(window)
}

fn handle_page_load(window: &WebviewWindow, payload: &PageLoadPayload<'_>) {
    if !matches!(payload.event(), PageLoadEvent::Finished) {
        return;
    }
    let url = payload.url().clone();
    with_shell(window.app_handle(), |shell| {
        shell.surface_mut().record_load(&url);
        shell.on_content_loaded(&url);
    });
}

pub struct TauriHost {
    window: WebviewWindow,
}

impl TauriHost {
    pub fn new(window: WebviewWindow) -> Self {
        Self { window }
    }
}

impl ShellHost for TauriHost {
    fn set_chrome_visibility(&mut self, flags: ChromeFlags) -> AppResult<()> {
        let changes = chrome_changes(
            flags,
            self.window.is_fullscreen()?,
            self.window.is_decorated()?,
        );
        if let Some(fullscreen) = changes.fullscreen {
            self.window.set_fullscreen(fullscreen)?;
        }
        if let Some(decorations) = changes.decorations {
            self.window.set_decorations(decorations)?;
        }
        debug!(event = "shell.chrome.applied", ?changes);
        Ok(())
    }

    fn default_back(&mut self) -> AppResult<()> {
        self.window.close()?;
        Ok(())
    }
}

/// Content surface backed by the shell window's webview.
pub struct TauriContent {
    window: WebviewWindow,
    built_with: ContentCapabilities,
    history: HistoryMirror,
    navigations: NavigationCounter,
}

impl TauriContent {
    pub fn new(
        window: WebviewWindow,
        built_with: ContentCapabilities,
        navigations: NavigationCounter,
    ) -> Self {
        Self {
            window,
            built_with,
            history: HistoryMirror::new(),
            navigations,
        }
    }

    pub fn record_load(&mut self, url: &Url) {
        let navigated = self.navigations.take();
        self.history.record_load(url, navigated);
    }
}

impl ContentSurface for TauriContent {
    fn configure(&mut self, capabilities: &ContentCapabilities) -> AppResult<()> {
        if !capabilities.script_execution {
            return Err(AppError::Capability(
                "the webview always executes scripts".to_string(),
            ));
        }
        if capabilities.persistent_local_storage != self.built_with.persistent_local_storage {
            return Err(AppError::Capability(
                "local storage persistence is fixed when the window is built".to_string(),
            ));
        }
        debug!(
            event = "shell.content.configured",
            script_execution = capabilities.script_execution,
            persistent_local_storage = capabilities.persistent_local_storage,
            content_fit_to_viewport = capabilities.content_fit_to_viewport,
            wide_viewport_layout = capabilities.wide_viewport_layout
        );
        Ok(())
    }

    fn load(&mut self, url: &Url) -> AppResult<()> {
        self.window
            .navigate(url.clone())
            .map_err(|e| AppError::Content(format!("Failed to request {}: {}", url, e)))
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn go_back(&mut self) -> AppResult<()> {
        self.history.begin_back();
        self.window.eval("history.back()")?;
        Ok(())
    }

    fn back_depth(&self) -> usize {
        self.history.back_depth()
    }
}

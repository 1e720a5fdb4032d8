use tracing::{info, warn};
use url::Url;

use crate::error::AppResult;
use crate::models::{ShellConfig, ShellSnapshot};
use crate::services::host::{ContentSurface, ShellHost};
use crate::services::immersive::ImmersiveMode;
use crate::services::navigation::{route_back, BackOutcome};

/// Owns the single window host, the single content surface and the immersive
/// state for the lifetime of the process.
pub struct ShellController<H, S> {
    config: ShellConfig,
    host: H,
    surface: S,
    immersive: ImmersiveMode,
    load_requested: bool,
}

impl<H, S> ShellController<H, S>
where
    H: ShellHost,
    S: ContentSurface,
{
    /// Configures the surface, asserts immersive chrome and requests the one
    /// and only content load, in that order.
    ///
    /// Only a capability the surface cannot honor aborts startup. A failed
    /// load request is logged and left to the surface to render.
    pub fn start(config: ShellConfig, host: H, mut surface: S) -> AppResult<Self> {
        surface.configure(&config.capabilities)?;

        let mut controller = Self {
            config,
            host,
            surface,
            immersive: ImmersiveMode::new(),
            load_requested: false,
        };
        controller.immersive.assert_on(&mut controller.host);
        controller.request_load();
        Ok(controller)
    }

    fn request_load(&mut self) {
        if self.load_requested {
            return;
        }
        self.load_requested = true;

        let source = &self.config.source_url;
        info!(event = "shell.content.load_requested", source = %source);
        if let Err(e) = self.surface.load(source) {
            warn!(event = "shell.content.load_request_failed", source = %source, error = %e);
        }
    }

    pub fn on_focus_changed(&mut self, has_focus: bool) {
        self.immersive.focus_changed(has_focus, &mut self.host);
    }

    pub fn on_back_pressed(&mut self) -> BackOutcome {
        route_back(&mut self.host, &mut self.surface)
    }

    /// One-way load notification. Logged only; the shell never retries or
    /// redirects based on it.
    pub fn on_content_loaded(&self, url: &Url) {
        info!(
            event = "shell.content.loaded",
            url = %url,
            back_depth = self.surface.back_depth()
        );
    }

    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            immersive: self.immersive.is_enabled(),
            back_depth: self.surface.back_depth(),
            source: self.config.source_url.to_string(),
            load_requested: self.load_requested,
        }
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

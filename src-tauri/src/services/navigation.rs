use serde::Serialize;
use tracing::{info, warn};

use crate::services::host::{ContentSurface, ShellHost};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BackOutcome {
    /// The content surface stepped back one entry; the event is consumed.
    ContentHistory,
    /// The platform default ran and the shell is going away.
    ShellExit,
}

/// Back-input precedence: content history first, then the platform default.
///
/// Never touches system chrome. Request failures are logged; the outcome still
/// reports which branch was taken.
pub fn route_back<H, S>(host: &mut H, surface: &mut S) -> BackOutcome
where
    H: ShellHost,
    S: ContentSurface,
{
    if surface.can_go_back() {
        let depth = surface.back_depth();
        if let Err(e) = surface.go_back() {
            warn!(event = "shell.back.content_go_back_failed", error = %e, depth);
        }
        info!(event = "shell.back.content_history", depth);
        return BackOutcome::ContentHistory;
    }

    info!(event = "shell.back.default_behavior");
    if let Err(e) = host.default_back() {
        warn!(event = "shell.back.default_behavior_failed", error = %e);
    }
    BackOutcome::ShellExit
}

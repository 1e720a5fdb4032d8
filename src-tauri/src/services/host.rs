use url::Url;

use crate::error::AppResult;
use crate::models::{ChromeFlags, ContentCapabilities};

/// Window-side services the shell calls into.
pub trait ShellHost {
    /// Requests a system chrome visibility state. Best effort: the platform
    /// may ignore the request.
    fn set_chrome_visibility(&mut self, flags: ChromeFlags) -> AppResult<()>;

    /// Platform default back behavior. Closes or suspends the shell.
    fn default_back(&mut self) -> AppResult<()>;
}

/// The embedded web content host.
///
/// `load` and `go_back` are requests; their outcome is only observable through
/// later page-load notifications.
pub trait ContentSurface {
    fn configure(&mut self, capabilities: &ContentCapabilities) -> AppResult<()>;

    fn load(&mut self, url: &Url) -> AppResult<()>;

    fn can_go_back(&self) -> bool;

    fn go_back(&mut self) -> AppResult<()>;

    /// Entries behind the current one. Diagnostics only.
    fn back_depth(&self) -> usize {
        usize::from(self.can_go_back())
    }
}

use tracing::{debug, warn};

use crate::models::ChromeFlags;
use crate::services::host::ShellHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    FocusedImmersive,
    Unfocused,
}

/// Immersive presentation state machine.
///
/// Starts in [`FocusState::FocusedImmersive`] whatever the real window focus
/// is. Every focus-regained event re-issues [`ChromeFlags::FULL_IMMERSIVE`];
/// losing focus only records the transition and leaves the platform chrome
/// alone.
#[derive(Debug)]
pub struct ImmersiveMode {
    state: FocusState,
    assertions: u64,
}

impl Default for ImmersiveMode {
    fn default() -> Self {
        Self::new()
    }
}

impl ImmersiveMode {
    pub fn new() -> Self {
        Self {
            state: FocusState::FocusedImmersive,
            assertions: 0,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == FocusState::FocusedImmersive
    }

    /// Number of times the full flag set has been requested.
    #[cfg(test)]
    pub fn assertions(&self) -> u64 {
        self.assertions
    }

    /// Requests the full immersive flag set. Failures are logged and dropped.
    pub fn assert_on<H: ShellHost>(&mut self, host: &mut H) {
        self.assertions += 1;
        match host.set_chrome_visibility(ChromeFlags::FULL_IMMERSIVE) {
            Ok(()) => debug!(
                event = "shell.immersive.asserted",
                assertions = self.assertions
            ),
            Err(e) => warn!(
                event = "shell.immersive.assert_ignored",
                error = %e,
                assertions = self.assertions
            ),
        }
    }

    pub fn focus_changed<H: ShellHost>(&mut self, has_focus: bool, host: &mut H) {
        let previous = self.state;
        if has_focus {
            self.state = FocusState::FocusedImmersive;
            self.assert_on(host);
        } else {
            self.state = FocusState::Unfocused;
        }
        debug!(
            event = "shell.immersive.focus_changed",
            has_focus,
            from = ?previous,
            to = ?self.state
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{CallLog, FakeHost};

    #[test]
    fn starts_focused_without_touching_chrome() {
        let log = CallLog::default();
        let _host = FakeHost::new(log.clone());
        let mode = ImmersiveMode::new();

        assert_eq!(mode.state(), FocusState::FocusedImmersive);
        assert!(mode.is_enabled());
        assert_eq!(log.chrome_calls(), 0);
    }

    #[test]
    fn asserting_twice_leaves_same_flags() {
        let log = CallLog::default();
        let mut host = FakeHost::new(log.clone());
        let mut mode = ImmersiveMode::new();

        mode.assert_on(&mut host);
        let once = log.last_chrome();
        mode.assert_on(&mut host);

        assert_eq!(log.last_chrome(), once);
        assert_eq!(log.last_chrome(), Some(ChromeFlags::FULL_IMMERSIVE));
        assert!(mode.is_enabled());
    }

    #[test]
    fn focus_loss_does_not_reassert() {
        let log = CallLog::default();
        let mut host = FakeHost::new(log.clone());
        let mut mode = ImmersiveMode::new();

        mode.focus_changed(false, &mut host);

        assert_eq!(mode.state(), FocusState::Unfocused);
        assert_eq!(log.chrome_calls(), 0);
    }

    #[test]
    fn every_regain_reasserts_full_set() {
        let log = CallLog::default();
        let mut host = FakeHost::new(log.clone());
        let mut mode = ImmersiveMode::new();

        let sequence = [false, true, true, false, false, true, false, true];
        let mut expected = 0;
        for has_focus in sequence {
            mode.focus_changed(has_focus, &mut host);
            if has_focus {
                expected += 1;
                assert_eq!(log.last_chrome(), Some(ChromeFlags::FULL_IMMERSIVE));
                assert_eq!(mode.state(), FocusState::FocusedImmersive);
            }
        }

        assert_eq!(log.chrome_calls(), expected);
        assert_eq!(mode.assertions(), expected as u64);
    }

    #[test]
    fn refused_chrome_request_is_ignored() {
        let log = CallLog::default();
        let mut host = FakeHost::new(log.clone());
        host.refuse_chrome = true;
        let mut mode = ImmersiveMode::new();

        mode.focus_changed(false, &mut host);
        mode.focus_changed(true, &mut host);

        assert_eq!(log.chrome_calls(), 1);
        assert_eq!(mode.state(), FocusState::FocusedImmersive);
    }
}

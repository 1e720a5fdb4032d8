//! Recording fakes for the host and content collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use url::Url;

use crate::error::{AppError, AppResult};
use crate::models::{ChromeFlags, ContentCapabilities};
use crate::services::host::{ContentSurface, ShellHost};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetChrome(ChromeFlags),
    DefaultBack,
    Configure(ContentCapabilities),
    Load(String),
    GoBack,
}

#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.0.borrow().iter().filter(|call| matches(call)).count()
    }

    pub fn chrome_calls(&self) -> usize {
        self.count(|call| matches!(call, Call::SetChrome(_)))
    }

    pub fn last_chrome(&self) -> Option<ChromeFlags> {
        self.0.borrow().iter().rev().find_map(|call| match call {
            Call::SetChrome(flags) => Some(*flags),
            _ => None,
        })
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

#[derive(Debug, Default)]
pub struct FakeHost {
    pub log: CallLog,
    pub refuse_chrome: bool,
    pub closed: bool,
}

impl FakeHost {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }
}

impl ShellHost for FakeHost {
    fn set_chrome_visibility(&mut self, flags: ChromeFlags) -> AppResult<()> {
        self.log.push(Call::SetChrome(flags));
        if self.refuse_chrome {
            return Err(AppError::Shell("platform refused flags".into()));
        }
        Ok(())
    }

    fn default_back(&mut self) -> AppResult<()> {
        self.log.push(Call::DefaultBack);
        self.closed = true;
        Ok(())
    }
}

/// Content surface whose history is a plain stack of URLs.
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub log: CallLog,
    pub history: Vec<String>,
    pub fail_load: bool,
}

impl FakeSurface {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn with_depth(log: CallLog, depth: usize) -> Self {
        let mut surface = Self::new(log);
        surface.history = (0..=depth)
            .map(|i| format!("http://89.23.107.201:5000/page/{}", i))
            .collect();
        surface
    }
}

impl ContentSurface for FakeSurface {
    fn configure(&mut self, capabilities: &ContentCapabilities) -> AppResult<()> {
        self.log.push(Call::Configure(*capabilities));
        Ok(())
    }

    fn load(&mut self, url: &Url) -> AppResult<()> {
        self.log.push(Call::Load(url.to_string()));
        if self.fail_load {
            return Err(AppError::Content("network unreachable".into()));
        }
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    fn go_back(&mut self) -> AppResult<()> {
        self.log.push(Call::GoBack);
        self.history.pop();
        Ok(())
    }

    fn back_depth(&self) -> usize {
        self.history.len().saturating_sub(1)
    }
}

use url::Url;

/// Mirror of the surface's session history, rebuilt from finished page loads.
///
/// The webview does not expose its back/forward list synchronously, so the
/// shell keeps its own copy. Only `http`/`https` documents are recorded.
///
/// When the mirror cannot tell where a back step landed it errs towards a
/// shallower history, so back input falls through to closing the shell rather
/// than being swallowed.
#[derive(Debug, Default)]
pub struct HistoryMirror {
    entries: Vec<Url>,
    pending_back: bool,
}

impl HistoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn back_depth(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// False while an earlier back request is still unresolved: a back step
    /// that never produced a load means the real history had nothing behind.
    pub fn can_go_back(&self) -> bool {
        !self.pending_back && self.back_depth() > 0
    }

    pub fn current(&self) -> Option<&Url> {
        self.entries.last()
    }

    /// Marks that a back step was requested; the next finished load resolves it.
    pub fn begin_back(&mut self) {
        self.pending_back = true;
    }

    /// Records a finished load. `navigated` tells whether the content started a
    /// navigation since the previous finished load; without one, a load of the
    /// current URL is a reload.
    pub fn record_load(&mut self, url: &Url, navigated: bool) {
        if !matches!(url.scheme(), "http" | "https") {
            return;
        }

        if std::mem::take(&mut self.pending_back) {
            self.resolve_back(url);
            return;
        }

        if !navigated && self.current() == Some(url) {
            return;
        }
        self.entries.push(url.clone());
    }

    fn resolve_back(&mut self, url: &Url) {
        let behind = self.back_depth();
        match self.entries[..behind].iter().rposition(|entry| entry == url) {
            Some(index) => self.entries.truncate(index + 1),
            None => {
                self.entries.clear();
                self.entries.push(url.clone());
            }
        }
    }
}

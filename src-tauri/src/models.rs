use serde::Serialize;
use url::Url;

use crate::error::AppResult;

/// Address of the embedded web application. Fixed at build time; the shell
/// never navigates anywhere else on its own.
pub const CONTENT_SOURCE_URL: &str = "http://89.23.107.201:5000/";

pub const SHELL_WINDOW_LABEL: &str = "main";

pub const SHELL_WINDOW_TITLE: &str = "GiDDNR";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentCapabilities {
    pub script_execution: bool,
    pub persistent_local_storage: bool,
    pub content_fit_to_viewport: bool,
    pub wide_viewport_layout: bool,
}

impl Default for ContentCapabilities {
    fn default() -> Self {
        Self {
            script_execution: true,
            persistent_local_storage: true,
            content_fit_to_viewport: true,
            wide_viewport_layout: true,
        }
    }
}

/// System chrome visibility request handed to the host window.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChromeFlags {
    pub hide_status_bar: bool,
    pub hide_navigation_bar: bool,
    pub edge_to_edge: bool,
    /// Chrome revealed by an edge swipe hides itself again.
    pub sticky: bool,
    pub stable_layout: bool,
}

impl ChromeFlags {
    pub const FULL_IMMERSIVE: ChromeFlags = ChromeFlags {
        hide_status_bar: true,
        hide_navigation_bar: true,
        edge_to_edge: true,
        sticky: true,
        stable_layout: true,
    };

    pub fn hides_all_chrome(&self) -> bool {
        self.hide_status_bar && self.hide_navigation_bar
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    pub source_url: Url,
    pub window_label: String,
    pub window_title: String,
    pub capabilities: ContentCapabilities,
}

impl ShellConfig {
    pub fn fixed() -> AppResult<Self> {
        Ok(Self {
            source_url: Url::parse(CONTENT_SOURCE_URL)?,
            window_label: SHELL_WINDOW_LABEL.to_string(),
            window_title: SHELL_WINDOW_TITLE.to_string(),
            capabilities: ContentCapabilities::default(),
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShellSnapshot {
    /// Focused and immersive; the two only ever change together.
    pub immersive: bool,
    pub back_depth: usize,
    pub source: String,
    pub load_requested: bool,
}

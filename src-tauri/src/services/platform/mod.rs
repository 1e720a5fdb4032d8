pub mod window;

pub use window::{build_shell_window, with_shell, NavigationCounter, TauriContent, TauriHost};

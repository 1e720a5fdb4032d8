pub mod controller;
pub mod history;
pub mod host;
pub mod immersive;
pub mod navigation;
pub mod platform;

#[cfg(test)]
pub mod testing;

pub use controller::ShellController;

//! # minwin
//!
//! A minimal native window lifecycle library for X11 (Linux) and Win32
//! (Windows). macOS is not supported.
//!
//! The whole surface is the four-operation window lifecycle: open a window,
//! clear its background, pump one event and report whether the window is
//! still open, and tear it down. There is no rendering pipeline, no input
//! handling beyond close detection, and no multi-window support.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use minwin::prelude::*;
//!
//! fn main() -> Result<(), WindowError> {
//!     let config = WindowConfig::new(800, 600, "my window");
//!     let mut window = Window::open(&config)?;
//!
//!     window.clear();
//!     while window.is_open() {
//!         window.clear();
//!     }
//!
//!     window.terminate();
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Facade**: [`Window`] owns exactly one live backend and forwards the
//!   four lifecycle operations to it.
//! - **Backends**: one [`backend::PlatformBackend`] implementation per
//!   target, selected at compile time. No runtime negotiation, no fallback.
//!
//! `Window::is_open` is the only place the OS event stream is drained, and
//! it blocks until the next event arrives. Call it in a loop to keep the
//! window responsive.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod backend;
pub mod config;
pub mod error;
pub mod logging;

mod window;

pub use config::WindowConfig;
pub use error::WindowError;
pub use window::Window;

/// Common imports for library users
pub mod prelude {
    pub use crate::{Window, WindowConfig, WindowError};
}

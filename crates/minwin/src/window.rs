//! High-level window facade
//!
//! [`Window`] is the owned context that replaces process-global handles: it
//! is returned by [`Window::open`] and threaded explicitly through every
//! other lifecycle call. Exactly one backend lives behind it, chosen at
//! compile time.

use raw_window_handle::{RawDisplayHandle, RawWindowHandle};

#[cfg(any(target_os = "linux", target_os = "windows"))]
use crate::backend::NativeBackend;
use crate::backend::{PlatformBackend, PumpStatus};
use crate::config::WindowConfig;
use crate::error::WindowError;

/// An open native window
///
/// Created by [`Window::open`]; destroyed by [`Window::terminate`] or by
/// `Drop`. Consuming `self` in `terminate` makes use-after-teardown
/// impossible, and a fresh context per `open` call makes double-init
/// impossible.
pub struct Window {
    backend: Box<dyn PlatformBackend>,
}

impl Window {
    /// Create and show one native window described by `config`
    pub fn open(config: &WindowConfig) -> Result<Self, WindowError> {
        config.validate()?;
        log::info!(
            "opening {}x{} window \"{}\"",
            config.width,
            config.height,
            config.title
        );
        let backend = NativeBackend::create(config)?;
        Ok(Self {
            backend: Box::new(backend),
        })
    }

    #[cfg(test)]
    fn from_backend(backend: Box<dyn PlatformBackend>) -> Self {
        Self { backend }
    }

    /// Paint the window background
    ///
    /// On X11 this fills the client rectangle and flushes pending commands
    /// to the server; on Win32 it requests a repaint and the registered
    /// window procedure does the fill.
    pub fn clear(&mut self) {
        self.backend.clear();
    }

    /// Block until the next relevant OS event and report whether the window
    /// should remain open
    ///
    /// Returns `false` once the user has requested a close. This is the only
    /// place the event stream is drained, so call it in a loop to keep the
    /// window responsive.
    pub fn is_open(&mut self) -> bool {
        matches!(self.backend.pump(), PumpStatus::Open)
    }

    /// Tracked client-area dimensions as (width, height) in pixels
    pub fn size(&self) -> (u32, u32) {
        self.backend.size()
    }

    /// Native window handle for interop with rendering APIs
    pub fn raw_window_handle(&self) -> RawWindowHandle {
        self.backend.raw_window_handle()
    }

    /// Native display/connection handle for interop with rendering APIs
    pub fn raw_display_handle(&self) -> RawDisplayHandle {
        self.backend.raw_display_handle()
    }

    /// Destroy the window and release the native connection
    ///
    /// Consumes the window; dropping it without calling `terminate` performs
    /// the same teardown.
    pub fn terminate(mut self) {
        self.backend.destroy();
    }
}

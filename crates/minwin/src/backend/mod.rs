//! # Backend Module
//!
//! Platform-specific implementations of the window lifecycle contract.
//! Exactly one backend is compiled per target; selection happens entirely at
//! compile time with no runtime negotiation or fallback.
//!
//! ## Organization
//!
//! - **X11**: Linux backend over raw Xlib FFI
//! - **Win32**: Windows backend over the raw Win32 API
//!
//! Each backend owns its native handles for the lifetime of the window and
//! implements the [`PlatformBackend`] trait defined here.

use raw_window_handle::{RawDisplayHandle, RawWindowHandle};

#[cfg(target_os = "linux")]
pub mod x11;

#[cfg(target_os = "windows")]
pub mod win32;

#[cfg(target_os = "macos")]
compile_error!("macOS is not supported");

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
compile_error!("no window backend is available for this target");

#[cfg(target_os = "linux")]
pub(crate) use self::x11::X11Backend as NativeBackend;

#[cfg(target_os = "windows")]
pub(crate) use self::win32::Win32Backend as NativeBackend;

/// Outcome of pumping one event from the OS event stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpStatus {
    /// The window should remain open
    Open,
    /// The user requested that the window close
    CloseRequested,
}

/// # Platform Backend Trait
///
/// The four-operation window lifecycle every backend must implement.
/// Construction is an inherent `create(&WindowConfig)` on each concrete
/// backend; everything after creation goes through this trait so the facade
/// can be exercised against a scripted backend in tests.
///
/// Backends own their native OS handles and release them in [`destroy`],
/// which must be idempotent so that an explicit teardown followed by `Drop`
/// is harmless.
///
/// [`destroy`]: PlatformBackend::destroy
pub trait PlatformBackend {
    /// Paint the window background
    fn clear(&mut self);

    /// Block until the next relevant OS event and classify it
    ///
    /// This is the only place the event stream is drained; callers must
    /// invoke it in a loop to keep the window responsive.
    fn pump(&mut self) -> PumpStatus;

    /// Tracked client-area dimensions as (width, height) in pixels
    ///
    /// Initialized from the creation config and updated only when the OS
    /// reports a resize.
    fn size(&self) -> (u32, u32);

    /// Native window handle for interop with rendering APIs
    fn raw_window_handle(&self) -> RawWindowHandle;

    /// Native display/connection handle for interop with rendering APIs
    fn raw_display_handle(&self) -> RawDisplayHandle;

    /// Release the native window and its connection; idempotent
    fn destroy(&mut self);
}

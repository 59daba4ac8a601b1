//! X11 backend over raw Xlib FFI
//!
//! Owns the display connection, the window, and a graphics context for the
//! lifetime of the window. Event handling is a single blocking
//! `XNextEvent` per pump: raw events are translated into a small domain
//! enum, then classified by a pure function so the classification logic is
//! testable without a running X server.

use std::ffi::CString;
use std::os::raw::{c_int, c_uint, c_ulong};
use std::ptr;

use raw_window_handle::{
    RawDisplayHandle, RawWindowHandle, XlibDisplayHandle, XlibWindowHandle,
};
use x11::xlib;

use crate::backend::{PlatformBackend, PumpStatus};
use crate::config::WindowConfig;
use crate::error::WindowError;

/// Linux window backend holding the native Xlib handles
pub struct X11Backend {
    display: *mut xlib::Display,
    window: xlib::Window,
    gc: xlib::GC,
    screen: c_int,
    wm_delete_window: xlib::Atom,
    width: u32,
    height: u32,
}

/// One X event reduced to the cases the pump cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum X11Event {
    Mapped,
    ClientMessage { protocol: xlib::Atom },
    Damaged,
    Configured { width: u32, height: u32 },
    Other,
}

/// What the pump should do in response to one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dispatch {
    ReportOpen,
    ReportClose,
    RepaintThenOpen,
    ResizeThenOpen { width: u32, height: u32 },
}

fn translate(event: &xlib::XEvent) -> X11Event {
    match event.get_type() {
        xlib::MapNotify => X11Event::Mapped,
        xlib::ClientMessage => {
            let message = unsafe { event.client_message };
            X11Event::ClientMessage {
                protocol: message.data.get_long(0) as xlib::Atom,
            }
        }
        xlib::Expose | xlib::GraphicsExpose => X11Event::Damaged,
        xlib::ConfigureNotify => {
            let configure = unsafe { event.configure };
            X11Event::Configured {
                width: configure.width as u32,
                height: configure.height as u32,
            }
        }
        _ => X11Event::Other,
    }
}

// Any event that is not a delete-window request keeps the window open;
// unrecognized events fall through without touching the tracked dimensions.
fn classify(event: X11Event, wm_delete_window: xlib::Atom) -> Dispatch {
    match event {
        X11Event::Mapped | X11Event::Other => Dispatch::ReportOpen,
        X11Event::ClientMessage { protocol } if protocol == wm_delete_window => {
            Dispatch::ReportClose
        }
        X11Event::ClientMessage { .. } => Dispatch::ReportOpen,
        X11Event::Damaged => Dispatch::RepaintThenOpen,
        X11Event::Configured { width, height } => Dispatch::ResizeThenOpen { width, height },
    }
}

/// Map an RGB triple to an X pixel value
///
/// Black and white use the server-provided pixels, which are valid on any
/// visual. Everything else is composed directly, which assumes the common
/// 24-bit TrueColor layout.
fn pixel_for(rgb: [u8; 3], black: c_ulong, white: c_ulong) -> c_ulong {
    match rgb {
        [0, 0, 0] => black,
        [255, 255, 255] => white,
        [r, g, b] => {
            (c_ulong::from(r) << 16) | (c_ulong::from(g) << 8) | c_ulong::from(b)
        }
    }
}

impl X11Backend {
    /// Open the display and create the mapped window described by `config`
    pub fn create(config: &WindowConfig) -> Result<Self, WindowError> {
        let display = unsafe { xlib::XOpenDisplay(ptr::null()) };
        if display.is_null() {
            return Err(WindowError::DisplayUnavailable);
        }

        let screen = unsafe { xlib::XDefaultScreen(display) };
        let black = unsafe { xlib::XBlackPixel(display, screen) };
        let white = unsafe { xlib::XWhitePixel(display, screen) };
        let root = unsafe { xlib::XDefaultRootWindow(display) };

        let window = unsafe {
            xlib::XCreateSimpleWindow(
                display,
                root,
                0,
                0,
                config.width as c_uint,
                config.height as c_uint,
                0,
                black,
                white,
            )
        };

        let title = CString::new(config.title.as_str()).map_err(|_| {
            WindowError::Config("window title contains an interior NUL byte".to_string())
        })?;
        let protocol_name = CString::new("WM_DELETE_WINDOW")
            .map_err(|_| WindowError::CreationFailed("invalid protocol name".to_string()))?;

        let wm_delete_window = unsafe {
            xlib::XStoreName(display, window, title.as_ptr());

            let atom = xlib::XInternAtom(display, protocol_name.as_ptr(), xlib::False);
            let mut protocols = [atom];
            xlib::XSetWMProtocols(display, window, protocols.as_mut_ptr(), 1);

            xlib::XSelectInput(
                display,
                window,
                xlib::StructureNotifyMask | xlib::ExposureMask,
            );
            xlib::XMapWindow(display, window);
            atom
        };

        let fill_pixel = pixel_for(config.background, black, white);
        let gc = unsafe {
            let gc = xlib::XCreateGC(display, window, 0, ptr::null_mut());
            xlib::XSetBackground(display, gc, black);
            xlib::XSetForeground(display, gc, fill_pixel);
            xlib::XFlush(display);
            gc
        };

        log::debug!(
            "created {}x{} X11 window on screen {}",
            config.width,
            config.height,
            screen
        );

        Ok(Self {
            display,
            window,
            gc,
            screen,
            wm_delete_window,
            width: config.width,
            height: config.height,
        })
    }
}

impl PlatformBackend for X11Backend {
    fn clear(&mut self) {
        unsafe {
            xlib::XFillRectangle(
                self.display,
                self.window,
                self.gc,
                0,
                0,
                self.width as c_uint,
                self.height as c_uint,
            );
            xlib::XFlush(self.display);
        }
    }

    fn pump(&mut self) -> PumpStatus {
        let mut event: xlib::XEvent = unsafe { std::mem::zeroed() };
        unsafe { xlib::XNextEvent(self.display, &mut event) };

        match classify(translate(&event), self.wm_delete_window) {
            Dispatch::ReportOpen => PumpStatus::Open,
            Dispatch::ReportClose => {
                log::debug!("delete-window request received");
                PumpStatus::CloseRequested
            }
            Dispatch::RepaintThenOpen => {
                unsafe { xlib::XClearWindow(self.display, self.window) };
                PumpStatus::Open
            }
            Dispatch::ResizeThenOpen { width, height } => {
                self.width = width;
                self.height = height;
                log::debug!("window resized to {}x{}", width, height);
                PumpStatus::Open
            }
        }
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn raw_window_handle(&self) -> RawWindowHandle {
        let mut handle = XlibWindowHandle::empty();
        handle.window = self.window;
        RawWindowHandle::Xlib(handle)
    }

    fn raw_display_handle(&self) -> RawDisplayHandle {
        let mut handle = XlibDisplayHandle::empty();
        handle.display = self.display.cast();
        handle.screen = self.screen;
        RawDisplayHandle::Xlib(handle)
    }

    fn destroy(&mut self) {
        if self.display.is_null() {
            return;
        }
        unsafe {
            xlib::XUnmapWindow(self.display, self.window);
            xlib::XDestroyWindow(self.display, self.window);
            xlib::XCloseDisplay(self.display);
        }
        self.display = ptr::null_mut();
        log::debug!("X11 window destroyed");
    }
}

impl Drop for X11Backend {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELETE_ATOM: xlib::Atom = 42;

    #[test]
    fn map_notify_keeps_window_open() {
        assert_eq!(classify(X11Event::Mapped, DELETE_ATOM), Dispatch::ReportOpen);
    }

    #[test]
    fn delete_window_message_closes() {
        let event = X11Event::ClientMessage { protocol: DELETE_ATOM };
        assert_eq!(classify(event, DELETE_ATOM), Dispatch::ReportClose);
    }

    #[test]
    fn unrelated_client_message_keeps_window_open() {
        let event = X11Event::ClientMessage { protocol: DELETE_ATOM + 1 };
        assert_eq!(classify(event, DELETE_ATOM), Dispatch::ReportOpen);
    }

    #[test]
    fn damage_requests_repaint() {
        assert_eq!(
            classify(X11Event::Damaged, DELETE_ATOM),
            Dispatch::RepaintThenOpen
        );
    }

    #[test]
    fn configure_updates_both_dimensions() {
        let event = X11Event::Configured { width: 1024, height: 768 };
        assert_eq!(
            classify(event, DELETE_ATOM),
            Dispatch::ResizeThenOpen { width: 1024, height: 768 }
        );
    }

    #[test]
    fn unknown_events_keep_window_open() {
        assert_eq!(classify(X11Event::Other, DELETE_ATOM), Dispatch::ReportOpen);
    }

    #[test]
    fn translate_reads_configure_dimensions() {
        let event = xlib::XEvent {
            configure: xlib::XConfigureEvent {
                type_: xlib::ConfigureNotify,
                serial: 0,
                send_event: 0,
                display: ptr::null_mut(),
                event: 0,
                window: 0,
                x: 0,
                y: 0,
                width: 640,
                height: 480,
                border_width: 0,
                above: 0,
                override_redirect: 0,
            },
        };
        assert_eq!(
            translate(&event),
            X11Event::Configured { width: 640, height: 480 }
        );
    }

    #[test]
    fn translate_maps_unknown_event_types_to_other() {
        let event = xlib::XEvent { type_: xlib::KeyPress };
        assert_eq!(translate(&event), X11Event::Other);
    }

    #[test]
    fn pixel_composition_uses_server_pixels_for_extremes() {
        assert_eq!(pixel_for([0, 0, 0], 7, 11), 7);
        assert_eq!(pixel_for([255, 255, 255], 7, 11), 11);
        assert_eq!(pixel_for([0x12, 0x34, 0x56], 7, 11), 0x0012_3456);
    }
}

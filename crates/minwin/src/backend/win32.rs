//! Win32 backend over the raw Windows API
//!
//! Registers a window class whose static procedure handles destroy, paint,
//! and resize messages. The visual clearing logic lives in the paint handler
//! registered at class registration, not in [`PlatformBackend::clear`]
//! itself; `clear` only requests a repaint through `UpdateWindow`.

use std::cell::Cell;
use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use std::ptr;

use raw_window_handle::{
    RawDisplayHandle, RawWindowHandle, Win32WindowHandle, WindowsDisplayHandle,
};
use winapi::shared::minwindef::{HINSTANCE, HIWORD, LOWORD, LPARAM, LRESULT, UINT, WPARAM};
use winapi::shared::windef::HWND;
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::libloaderapi::GetModuleHandleW;
use winapi::um::wingdi::{CreateSolidBrush, DeleteObject, RGB};
use winapi::um::winuser::{
    BeginPaint, CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, EndPaint,
    FillRect, GetMessageW, GetWindowLongPtrW, PostQuitMessage, RegisterClassW,
    SetWindowLongPtrW, ShowWindow, TranslateMessage, UnregisterClassW, UpdateWindow,
    CW_USEDEFAULT, GWLP_USERDATA, MSG, PAINTSTRUCT, SW_SHOW, WM_DESTROY, WM_PAINT, WM_SIZE,
    WNDCLASSW, WS_OVERLAPPEDWINDOW,
};

use crate::backend::{PlatformBackend, PumpStatus};
use crate::config::WindowConfig;
use crate::error::WindowError;

const CLASS_NAME: &str = "MinwinWindowClass";

/// State shared with the static window procedure through `GWLP_USERDATA`
///
/// Boxed by the backend so its address stays stable while the backend value
/// itself moves.
struct ProcState {
    width: Cell<u32>,
    height: Cell<u32>,
    background: u32,
}

/// Windows window backend holding the native Win32 handles
pub struct Win32Backend {
    hwnd: HWND,
    hinstance: HINSTANCE,
    class_name: Vec<u16>,
    state: Box<ProcState>,
    alive: bool,
}

fn wide(s: &str) -> Vec<u16> {
    OsStr::new(s).encode_wide().chain(std::iter::once(0)).collect()
}

/// Classify one `GetMessageW` return value
///
/// Zero means `WM_QUIT` reached the queue, negative means the call failed;
/// both end the pump.
fn message_status(ret: i32) -> PumpStatus {
    if ret > 0 {
        PumpStatus::Open
    } else {
        PumpStatus::CloseRequested
    }
}

unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: UINT,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_DESTROY => {
            PostQuitMessage(0);
            0
        }
        WM_PAINT => {
            let mut ps: PAINTSTRUCT = std::mem::zeroed();
            let hdc = BeginPaint(hwnd, &mut ps);
            let state = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *const ProcState;
            let color = if state.is_null() {
                RGB(0, 0, 0)
            } else {
                (*state).background
            };
            let brush = CreateSolidBrush(color);
            FillRect(hdc, &ps.rcPaint, brush);
            DeleteObject(brush.cast());
            EndPaint(hwnd, &ps);
            0
        }
        WM_SIZE => {
            let state = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *const ProcState;
            if !state.is_null() {
                (*state).width.set(u32::from(LOWORD(lparam as u32)));
                (*state).height.set(u32::from(HIWORD(lparam as u32)));
            }
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

impl Win32Backend {
    /// Register the window class and create the shown window described by
    /// `config`
    pub fn create(config: &WindowConfig) -> Result<Self, WindowError> {
        let hinstance = unsafe { GetModuleHandleW(ptr::null()) };
        let class_name = wide(CLASS_NAME);

        let wc = WNDCLASSW {
            style: 0,
            lpfnWndProc: Some(wnd_proc),
            cbClsExtra: 0,
            cbWndExtra: 0,
            hInstance: hinstance,
            hIcon: ptr::null_mut(),
            hCursor: ptr::null_mut(),
            hbrBackground: ptr::null_mut(),
            lpszMenuName: ptr::null(),
            lpszClassName: class_name.as_ptr(),
        };
        if unsafe { RegisterClassW(&wc) } == 0 {
            return Err(WindowError::CreationFailed(format!(
                "RegisterClassW failed (error {})",
                unsafe { GetLastError() }
            )));
        }

        let [r, g, b] = config.background;
        let state = Box::new(ProcState {
            width: Cell::new(config.width),
            height: Cell::new(config.height),
            background: RGB(r, g, b),
        });

        let title = wide(&config.title);
        let hwnd = unsafe {
            CreateWindowExW(
                0,
                class_name.as_ptr(),
                title.as_ptr(),
                WS_OVERLAPPEDWINDOW,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                config.width as i32,
                config.height as i32,
                ptr::null_mut(),
                ptr::null_mut(),
                hinstance,
                ptr::null_mut(),
            )
        };
        if hwnd.is_null() {
            let error = unsafe { GetLastError() };
            unsafe { UnregisterClassW(class_name.as_ptr(), hinstance) };
            return Err(WindowError::CreationFailed(format!(
                "CreateWindowExW failed (error {})",
                error
            )));
        }

        unsafe {
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, &*state as *const ProcState as isize);
            ShowWindow(hwnd, SW_SHOW);
        }

        log::debug!("created {}x{} Win32 window", config.width, config.height);

        Ok(Self {
            hwnd,
            hinstance,
            class_name,
            state,
            alive: true,
        })
    }
}

impl PlatformBackend for Win32Backend {
    fn clear(&mut self) {
        // The fill itself happens in wnd_proc's WM_PAINT arm.
        unsafe { UpdateWindow(self.hwnd) };
    }

    fn pump(&mut self) -> PumpStatus {
        let mut msg: MSG = unsafe { std::mem::zeroed() };
        let ret = unsafe { GetMessageW(&mut msg, ptr::null_mut(), 0, 0) };
        let status = message_status(ret);
        if status == PumpStatus::Open {
            unsafe {
                TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        } else {
            log::debug!("message queue shut down");
        }
        status
    }

    fn size(&self) -> (u32, u32) {
        (self.state.width.get(), self.state.height.get())
    }

    fn raw_window_handle(&self) -> RawWindowHandle {
        let mut handle = Win32WindowHandle::empty();
        handle.hwnd = self.hwnd.cast();
        handle.hinstance = self.hinstance.cast();
        RawWindowHandle::Win32(handle)
    }

    fn raw_display_handle(&self) -> RawDisplayHandle {
        RawDisplayHandle::Windows(WindowsDisplayHandle::empty())
    }

    fn destroy(&mut self) {
        if !self.alive {
            return;
        }
        unsafe {
            SetWindowLongPtrW(self.hwnd, GWLP_USERDATA, 0);
            DestroyWindow(self.hwnd);
            UnregisterClassW(self.class_name.as_ptr(), self.hinstance);
        }
        self.alive = false;
        log::debug!("Win32 window destroyed");
    }
}

impl Drop for Win32Backend {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_message_result_keeps_pumping() {
        assert_eq!(message_status(1), PumpStatus::Open);
    }

    #[test]
    fn quit_and_error_results_close() {
        assert_eq!(message_status(0), PumpStatus::CloseRequested);
        assert_eq!(message_status(-1), PumpStatus::CloseRequested);
    }

    #[test]
    fn titles_are_nul_terminated_utf16() {
        let encoded = wide("ab");
        assert_eq!(encoded, vec![b'a' as u16, b'b' as u16, 0]);
    }
}

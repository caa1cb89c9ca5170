use tracing::error;

/// Show a blocking error message box and log it.
pub(crate) fn show_error(message: &str) {
    error!(message, "Fatal startup error");

    #[cfg(target_os = "windows")]
    {
        use crate::wide::to_wide;

        use windows::{
            Win32::{
                Foundation::HWND,
                UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK, MessageBoxW},
            },
            core::{PCWSTR, w},
        };

        let text = to_wide(message);
        // SAFETY: `text` is NUL-terminated and outlives the call.
        unsafe {
            let _ = MessageBoxW(
                HWND::default(),
                PCWSTR::from_raw(text.as_ptr()),
                w!("Error"),
                MB_OK | MB_ICONERROR,
            );
        }
    }
}

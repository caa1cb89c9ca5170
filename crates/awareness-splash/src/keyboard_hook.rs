//! Process-wide low-level keyboard hook that swallows the Windows key.
//!
//! The hook callback runs on the OS input dispatch path for every process,
//! so it only classifies the event and returns. The hook handle lives in a
//! static so the panic hook can remove it without touching the session.
#![cfg_attr(not(target_os = "windows"), allow(dead_code))]

use awareness_splash_core::{CoreResult, KeyMessage, KeyboardHookBackend};

#[cfg(target_os = "windows")]
use std::sync::atomic::{AtomicIsize, Ordering};

#[cfg(target_os = "windows")]
use tracing::info;
use tracing::{debug, instrument};

pub(crate) const WM_KEYDOWN_CODE: u32 = 0x0100;
pub(crate) const WM_SYSKEYDOWN_CODE: u32 = 0x0104;

#[cfg(target_os = "windows")]
static KEYBOARD_HOOK: AtomicIsize = AtomicIsize::new(0);

/// Map a raw hook message identifier to the classifier's message kind.
pub(crate) fn key_message(message: u32) -> KeyMessage {
    match message {
        WM_KEYDOWN_CODE => KeyMessage::KeyDown,
        WM_SYSKEYDOWN_CODE => KeyMessage::SystemKeyDown,
        _ => KeyMessage::Other,
    }
}

/// `WH_KEYBOARD_LL` hook backend.
#[derive(Debug, Default)]
pub struct WindowsKeyHook;

impl WindowsKeyHook {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl KeyboardHookBackend for WindowsKeyHook {
    #[track_caller]
    #[instrument(skip(self))]
    fn register(&mut self) -> CoreResult<()> {
        platform::register()
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn unregister(&mut self) -> CoreResult<()> {
        platform::unregister()
    }
}

/// Remove the hook without going through the session.
///
/// Installed into the panic hook so a crash never leaves the Windows key
/// dead for the rest of the desktop.
pub(crate) fn emergency_unhook() {
    if let Err(e) = platform::unregister() {
        debug!(error = ?e, "Emergency unhook failed");
    }
}

#[cfg(target_os = "windows")]
mod platform {
    use super::{KEYBOARD_HOOK, Ordering, info, key_message};

    use awareness_splash_core::{CoreResult, HookVerdict, SplashError, classify_key_event};

    use std::panic::Location;

    use error_location::ErrorLocation;
    use windows::Win32::{
        Foundation::{LPARAM, LRESULT, WPARAM},
        UI::WindowsAndMessaging::{
            CallNextHookEx, HC_ACTION, HHOOK, KBDLLHOOKSTRUCT, SetWindowsHookExW,
            UnhookWindowsHookEx, WH_KEYBOARD_LL,
        },
    };

    #[track_caller]
    pub(super) fn register() -> CoreResult<()> {
        if KEYBOARD_HOOK.load(Ordering::SeqCst) != 0 {
            return Ok(());
        }

        // SAFETY: `hook_proc` matches HOOKPROC and stays valid for the process lifetime.
        let hook = unsafe { SetWindowsHookExW(WH_KEYBOARD_LL, Some(hook_proc), None, 0) }
            .map_err(|e| SplashError::InputHookFailed {
                reason: format!("SetWindowsHookExW failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        KEYBOARD_HOOK.store(hook.0, Ordering::SeqCst);
        info!("Keyboard hook registered");
        Ok(())
    }

    #[track_caller]
    pub(super) fn unregister() -> CoreResult<()> {
        let raw = KEYBOARD_HOOK.swap(0, Ordering::SeqCst);
        if raw == 0 {
            return Ok(());
        }

        // SAFETY: `raw` was returned by SetWindowsHookExW and is unhooked at most once.
        unsafe { UnhookWindowsHookEx(HHOOK(raw)) }.map_err(|e| SplashError::InputHookFailed {
            reason: format!("UnhookWindowsHookEx failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("Keyboard hook unregistered");
        Ok(())
    }

    unsafe extern "system" fn hook_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
        if code == HC_ACTION as i32 {
            // SAFETY: for HC_ACTION, lparam points at a KBDLLHOOKSTRUCT owned by the OS.
            let event = unsafe { &*(lparam.0 as *const KBDLLHOOKSTRUCT) };
            let message = key_message(wparam.0 as u32);
            if classify_key_event(message, event.vkCode) == HookVerdict::Swallow {
                return LRESULT(1);
            }
        }

        let hook = HHOOK(KEYBOARD_HOOK.load(Ordering::SeqCst));
        // SAFETY: forwarding the untouched arguments down the hook chain.
        unsafe { CallNextHookEx(hook, code, wparam, lparam) }
    }
}

#[cfg(not(target_os = "windows"))]
mod platform {
    use awareness_splash_core::{CoreResult, SplashError};

    use std::panic::Location;

    use error_location::ErrorLocation;

    #[track_caller]
    pub(super) fn register() -> CoreResult<()> {
        Err(SplashError::InputHookFailed {
            reason: "Low-level keyboard hooks are only supported on Windows".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub(super) fn unregister() -> CoreResult<()> {
        Ok(())
    }
}

use crate::keyboard_hook::{WM_KEYDOWN_CODE, WM_SYSKEYDOWN_CODE, key_message};

use awareness_splash_core::{HookVerdict, KeyMessage, VK_LEFT_META, classify_key_event};

const WM_KEYUP_CODE: u32 = 0x0101;
const WM_SYSKEYUP_CODE: u32 = 0x0105;

/// WHAT: Raw hook messages map to the classifier's message kinds
/// WHY: Only key-down messages may be swallowed
#[test]
fn given_raw_messages_when_mapping_then_kinds_match() {
    assert_eq!(key_message(WM_KEYDOWN_CODE), KeyMessage::KeyDown);
    assert_eq!(key_message(WM_SYSKEYDOWN_CODE), KeyMessage::SystemKeyDown);
    assert_eq!(key_message(WM_KEYUP_CODE), KeyMessage::Other);
    assert_eq!(key_message(WM_SYSKEYUP_CODE), KeyMessage::Other);
}

/// WHAT: A Windows key release passes through the hook
/// WHY: Swallowing releases would leave the key stuck down for other apps
#[test]
fn given_meta_key_up_when_classifying_raw_message_then_forwarded() {
    let verdict = classify_key_event(key_message(WM_KEYUP_CODE), VK_LEFT_META);

    assert_eq!(verdict, HookVerdict::Forward);
}

/// WHAT: A Windows key press delivered as a system key is swallowed
/// WHY: Alt+Win combinations arrive as WM_SYSKEYDOWN
#[test]
fn given_meta_system_key_down_when_classifying_raw_message_then_swallowed() {
    let verdict = classify_key_event(key_message(WM_SYSKEYDOWN_CODE), VK_LEFT_META);

    assert_eq!(verdict, HookVerdict::Swallow);
}

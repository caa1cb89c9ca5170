/// Virtual-key code of the left platform (Windows) key.
pub const VK_LEFT_META: u32 = 0x5B;
/// Virtual-key code of the right platform (Windows) key.
pub const VK_RIGHT_META: u32 = 0x5C;

/// Kind of keyboard message delivered to the low-level hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMessage {
    /// Ordinary key press.
    KeyDown,
    /// Key press while Alt is held (or F10).
    SystemKeyDown,
    /// Releases and anything else.
    Other,
}

/// Outcome of the hook callback for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookVerdict {
    /// Consume the event; nothing downstream sees it.
    Swallow,
    /// Pass the event to the next hook unchanged.
    Forward,
}

/// Decide whether the hook swallows a key event.
///
/// Runs on the OS hook dispatch path, so it only inspects its arguments.
pub fn classify_key_event(message: KeyMessage, virtual_key: u32) -> HookVerdict {
    match message {
        KeyMessage::KeyDown | KeyMessage::SystemKeyDown
            if virtual_key == VK_LEFT_META || virtual_key == VK_RIGHT_META =>
        {
            HookVerdict::Swallow
        }
        _ => HookVerdict::Forward,
    }
}

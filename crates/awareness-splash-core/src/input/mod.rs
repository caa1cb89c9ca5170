mod key_filter;
mod suppressor;

pub use {
    key_filter::{HookVerdict, KeyMessage, VK_LEFT_META, VK_RIGHT_META, classify_key_event},
    suppressor::{GlobalInputSuppressor, KeyboardHookBackend},
};

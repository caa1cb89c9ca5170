/// NUL-terminated UTF-16 copy of `value` for wide Win32 APIs.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
pub(crate) fn to_wide(value: &str) -> Vec<u16> {
    value.encode_utf16().chain(std::iter::once(0)).collect()
}

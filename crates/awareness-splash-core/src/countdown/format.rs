/// Render remaining time as zero-padded `MM:SS`.
///
/// The minute field is at least two digits wide and grows past 99 minutes
/// (`6000` seconds renders as `100:00`) instead of wrapping.
pub fn format_remaining(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

//! Default label formatting for the ruler.

use crate::traits::TimestampFormatter;

/// Formats elapsed whole seconds as `M:SS` (or `H:MM:SS` past an hour).
///
/// The shipped default; the core only ever goes through the
/// [`TimestampFormatter`] trait, so hosts can substitute their own format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockFormatter;

impl TimestampFormatter for ClockFormatter {
    fn format_timestamp(&self, total_seconds: i64) -> String {
        let total = total_seconds.max(0);
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;
        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{}:{:02}", minutes, seconds)
        }
    }
}

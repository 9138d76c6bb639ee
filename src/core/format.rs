// Author: Dustin Pilgrim
// License: MIT

/// Format milliseconds as "MM:SS.CC".
///
/// Every field truncates. Minutes are padded to two digits and keep growing
/// past 99.
pub fn format_elapsed(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let centis = (ms % 1_000) / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, centis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00.00");
        assert_eq!(format_elapsed(999), "00:00.99");
        assert_eq!(format_elapsed(1_000), "00:01.00");
        assert_eq!(format_elapsed(61_005), "01:01.00");
        assert_eq!(format_elapsed(12_340), "00:12.34");
    }

    #[test]
    fn test_format_truncates() {
        assert_eq!(format_elapsed(9), "00:00.00");
        assert_eq!(format_elapsed(59_999), "00:59.99");
        assert_eq!(format_elapsed(3_599_999), "59:59.99");
    }

    #[test]
    fn test_format_minutes_unbounded() {
        assert_eq!(format_elapsed(99 * 60_000), "99:00.00");
        assert_eq!(format_elapsed(100 * 60_000 + 1_230), "100:01.23");
        assert_eq!(format_elapsed(1_234 * 60_000), "1234:00.00");
    }
}

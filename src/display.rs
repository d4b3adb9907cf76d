/// Renders a whole number of seconds as `HH:MM:SS`. The hours field is not
/// bounded and grows past two digits when needed.
pub fn format_hms(secs: u64) -> String {
    let hrs = secs / 3600;
    let rem = secs % 3600;
    format!("{:02}:{:02}:{:02}", hrs, rem / 60, rem % 60)
}

/// Whole seconds to show while `elapsed` of `target` seconds have passed.
///
/// One second is taken off because the reader sees the line after that
/// second has already begun. Never goes below zero.
pub fn remaining_secs(target: f64, elapsed: f64) -> u64 {
    let secs = (target - elapsed - 1.0).floor();
    if secs > 0.0 {
        secs as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(3661), "01:01:01");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(3600 * 100), "100:00:00");
    }

    #[test]
    fn test_remaining_secs() {
        assert_eq!(remaining_secs(210.0, 0.0), 209);
        assert_eq!(remaining_secs(210.0, 0.25), 208);
        assert_eq!(remaining_secs(1.0, 0.0), 0);
        assert_eq!(remaining_secs(0.0, 0.0), 0);
        assert_eq!(remaining_secs(5.0, 7.5), 0);
    }
}

/// Renders a duration the way flight logbooks read it: seconds, minutes or hours.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        return format!("{:.2} secs", seconds);
    }
    let minutes = seconds / 60.0;
    if minutes < 60.0 {
        return format!("{:.2} mins", minutes);
    }
    format!("{:.2} hours", minutes / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(format_duration(0.0), "0.00 secs");
        assert_eq!(format_duration(59.999), "60.00 secs");
        assert_eq!(format_duration(60.0), "1.00 mins");
        assert_eq!(format_duration(3600.0), "1.00 hours");
        assert_eq!(format_duration(13249.81), "3.68 hours");
    }
}

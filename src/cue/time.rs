/// Prepends zeros to a number until the given amount of places is reached.
///
/// Numbers that already have `places` digits or more are returned unchanged,
/// so the result is never truncated.
///
/// # Example
///
/// ```
/// assert_eq!(zero_pad(5, 1), "5");
/// assert_eq!(zero_pad(5, 2), "05");
/// assert_eq!(zero_pad(5, 3), "005");
/// assert_eq!(zero_pad(100, 2), "100");
/// ```
pub fn zero_pad(num: i64, places: usize) -> String {
    let digits = num.to_string();
    let zero = places as i64 - digits.len() as i64 + 1;
    let pad = if zero > 0 { (zero - 1) as usize } else { 0 };
    format!("{}{}", "0".repeat(pad), digits)
}

/// Transforms a time given in milliseconds into its `mm:ss:ff` representation.
///
/// The last field holds hundredths of a second, not the 1/75 second frames
/// of the Red Book standard.
///
/// # Example
///
/// ```
/// assert_eq!(time_to_string(3125000), "52:05:00");
/// ```
pub fn time_to_string(time_ms: u64) -> String {
    let total_seconds = time_ms as f64 / 1000.0;
    let minutes = (total_seconds / 60.0).floor();
    let seconds = (total_seconds % 60.0).floor();
    let milliseconds = (total_seconds % 60.0 - seconds) * 1000.0;
    let frames = (milliseconds / 10.0).floor();

    format!(
        "{}:{}:{}",
        zero_pad(minutes as i64, 2),
        zero_pad(seconds as i64, 2),
        zero_pad(frames as i64, 2)
    )
}

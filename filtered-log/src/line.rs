//! Rendering structured values as `key=value` lines.

/// Separator placed between segments by `#[derive(LogLine)]` unless overridden.
///
/// The space after `;` is not part of the value: filters stop at `;`, and the
/// space is kept in front of the next key.
pub const DEFAULT_LINE_SEPARATOR: &str = "; ";

/// Types that render themselves as a `key=value` log line.
///
/// Usually derived:
///
/// ```ignore
/// use filtered_log::{LogLine, ToLogLine};
///
/// #[derive(LogLine)]
/// struct Login {
///     email: String,
///     #[log_line(rename = "ip")]
///     remote_addr: String,
/// }
///
/// let line = Login { email: "a@b.com".into(), remote_addr: "10.0.0.1".into() }.to_log_line();
/// assert_eq!(line, "email=a@b.com; ip=10.0.0.1");
/// ```
pub trait ToLogLine {
    /// Keys in the order they are rendered.
    const LOG_LINE_KEYS: &'static [&'static str];

    /// Renders `self` as segments joined by the type's separator.
    fn to_log_line(&self) -> String;
}

//! Number formatting for threat notes and tables.
//!
//! Formula notes, modifier lists and the validator's tables all format their
//! numbers here so the presentation stays consistent. European formatting
//! (swapping `.` and `,`) is supported for table output.

/// Modifiers closer to 1.0 than this are hidden from modifier lists.
///
/// Display-only. Ledger arithmetic never consults it.
pub const MODIFIER_DISPLAY_EPSILON: f64 = 1e-4;

/// Whether a multiplier differs from 1.0 enough to be worth showing.
///
/// # Examples
/// ```
/// use threatline_types::formatting::is_visible_modifier;
/// assert!(is_visible_modifier(1.3));
/// assert!(!is_visible_modifier(1.00001));
/// ```
pub fn is_visible_modifier(value: f64) -> bool {
    (value - 1.0).abs() > MODIFIER_DISPLAY_EPSILON
}

fn europeanize(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '.' => ',',
            ',' => '.',
            _ => c,
        })
        .collect()
}

#[inline]
fn maybe_eu(s: String, european: bool) -> String {
    if european { europeanize(&s) } else { s }
}

/// Format with at most `precision` decimals, dropping trailing zeros.
fn trimmed(n: f64, precision: usize) -> String {
    let s = format!("{:.prec$}", n, prec = precision);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    if s == "-0" { "0".to_string() } else { s }
}

/// Threat value for notes: up to two decimals, trailing zeros dropped.
///
/// # Examples
/// ```
/// use threatline_types::formatting::format_threat;
/// assert_eq!(format_threat(145.0), "145");
/// assert_eq!(format_threat(12.5), "12.5");
/// assert_eq!(format_threat(1.0 / 3.0), "0.33");
/// ```
pub fn format_threat(n: f64) -> String {
    trimmed(n, 2)
}

/// Multiplier for notes and modifier lists: up to three decimals.
///
/// # Examples
/// ```
/// use threatline_types::formatting::format_multiplier;
/// assert_eq!(format_multiplier(1.3), "1.3");
/// assert_eq!(format_multiplier(1.0666), "1.067");
/// assert_eq!(format_multiplier(0.0), "0");
/// ```
pub fn format_multiplier(m: f64) -> String {
    trimmed(m, 3)
}

/// Large threat totals with K/M suffix for compact table display.
///
/// # Examples
/// ```
/// use threatline_types::formatting::format_compact_f64;
/// assert_eq!(format_compact_f64(1_500.0, false), "1.50K");
/// assert_eq!(format_compact_f64(1_500.0, true), "1,50K");
/// ```
pub fn format_compact_f64(n: f64, european: bool) -> String {
    let n_abs = n.abs();
    let s = if n_abs >= 1_000_000.0 {
        format!("{:.2}M", n / 1_000_000.0)
    } else if n_abs >= 1_000.0 {
        format!("{:.2}K", n / 1_000.0)
    } else {
        format!("{:.0}", n)
    };
    maybe_eu(s, european)
}

/// Share of a total as a percentage with one decimal.
pub fn format_share(part: f64, total: f64, european: bool) -> String {
    if total <= 0.0 {
        return "0%".to_string();
    }
    maybe_eu(format!("{:.1}%", part / total * 100.0), european)
}

/// Fight-relative timestamp as `M:SS.mmm`.
///
/// # Examples
/// ```
/// use threatline_types::formatting::format_timestamp_ms;
/// assert_eq!(format_timestamp_ms(125_300), "2:05.300");
/// assert_eq!(format_timestamp_ms(0), "0:00.000");
/// ```
pub fn format_timestamp_ms(ms: i64) -> String {
    let ms = ms.max(0);
    let secs = ms / 1000;
    format!("{}:{:02}.{:03}", secs / 60, secs % 60, ms % 1000)
}

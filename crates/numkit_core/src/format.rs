//! Number formatting

/// Format `n` with a comma between each group of three integer digits.
///
/// The fractional part is printed unchanged. Non-finite values print as
/// `NaN`, `inf` and `-inf`.
///
/// ```rust
/// use numkit_core::format_number;
///
/// assert_eq!(format_number(100_000_000.0), "100,000,000");
/// assert_eq!(format_number(-1234.5), "-1,234.5");
/// ```
pub fn format_number(n: f64) -> String {
    let text = n.to_string();
    if !n.is_finite() {
        return text;
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out.push_str(frac_part);
    out
}

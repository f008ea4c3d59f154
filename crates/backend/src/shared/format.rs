/// Formats an integer with dots between groups of thousands
///
/// # Examples
/// ```text
/// format_number(1234567) == "1.234.567"
/// format_number(42) == "42"
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Formats a currency amount with two decimals, dot-grouped thousands and a decimal comma.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{},{:02}", sign, format_number(cents / 100), cents % 100)
}

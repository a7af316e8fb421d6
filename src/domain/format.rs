//! Currency formatting for reports.

/// en-US style: `-$1,234.50`. The sign goes before the symbol, and a negative
/// amount that rounds to zero keeps it (`-$0.00`).
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let cents = (amount.abs() * 100.0).round();
    let digits = if cents.is_finite() {
        format!("{cents:.0}")
    } else {
        format!("{:.0}00", amount.abs())
    };
    let digits = format!("{digits:0>3}");
    let (whole, frac) = digits.split_at(digits.len() - 2);
    let sign = if amount < 0.0 { "-" } else { "" };

    format!("{sign}{symbol}{}.{frac}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

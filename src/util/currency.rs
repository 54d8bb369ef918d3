//! Currency formatting.

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

fn symbol(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "CAD" => "CA$",
        "AUD" => "A$",
        _ => "",
    }
}

/// Format an amount with its currency symbol, thousands separators and two
/// decimals, e.g. `format_currency(-1234.5, "USD")` → `"-$1,234.50"`.
pub fn format_currency(amount: f64, code: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let sym = symbol(code);
    let body = group_thousands(amount.abs(), 2);
    if sym.is_empty() {
        format!("{sign}{code} {body}")
    } else {
        format!("{sign}{sym}{body}")
    }
}

/// Whole-dollar variant for stat cards, e.g. `"$5,000"`.
pub fn format_whole(amount: f64, code: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let sym = symbol(code);
    let body = group_thousands(amount.abs(), 0);
    if sym.is_empty() {
        format!("{sign}{code} {body}")
    } else {
        format!("{sign}{sym}{body}")
    }
}

fn group_thousands(amount: f64, decimals: usize) -> String {
    let formatted = format!("{amount:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

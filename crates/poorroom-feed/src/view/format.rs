//! Display formatting for feed items

use chrono::{NaiveDateTime, Timelike};

const CURRENCY_UNIT: &str = "원";

/// Amount with thousands separators and the won unit, e.g. `12,000원`
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped.push_str(CURRENCY_UNIT);
    grouped
}

/// 12-hour clock with a Korean meridiem, e.g. `오후 03:07`
pub fn korean_time_label(at: NaiveDateTime) -> String {
    let (is_pm, hour) = at.hour12();
    let meridiem = if is_pm { "오후" } else { "오전" };
    format!("{meridiem} {hour:02}:{:02}", at.minute())
}

//! Locale formatting driven by profile fields.
//!
//! Profiles describe their conventions by example rather than by code:
//! `date_format` is a `YYYY`/`MM`/`DD` template, `number_format` is a sample
//! such as `1,234.56` whose separators are read off positionally, and
//! `currency_format` wraps an `{amount}` token.

use crate::culture::plural::PluralCategory;
use crate::culture::profile::CulturalProfile;
use chrono::{Datelike, NaiveDate};

const AMOUNT_TOKEN: &str = "{amount}";

pub fn format_date(date: NaiveDate, profile: &CulturalProfile) -> String {
    profile
        .date_format
        .replace("YYYY", &format!("{:04}", date.year()))
        .replace("MM", &format!("{:02}", date.month()))
        .replace("DD", &format!("{:02}", date.day()))
}

/// Format a number with the profile's group and decimal separators.
///
/// Two decimals are shown only when the value, rounded to two places, has a
/// fractional part.
pub fn format_number(value: f64, profile: &CulturalProfile) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let (group, decimal) = separators(&profile.number_format);
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::new();
    if value < 0.0 && fixed != "0.00" {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, group));
    if frac_part != "00" {
        out.push(decimal);
        out.push_str(frac_part);
    }
    out
}

/// Format an amount with the profile's currency template, or as a plain number
/// when the profile has none.
pub fn format_currency(amount: f64, profile: &CulturalProfile) -> String {
    let number = format_number(amount, profile);
    match &profile.currency_format {
        Some(template) => template.replace(AMOUNT_TOKEN, &number),
        None => number,
    }
}

/// Pick the singular or plural form for `count` under the profile's plural rule.
pub fn apply_pluralization<'a>(
    count: u64,
    singular: &'a str,
    plural: &'a str,
    profile: &CulturalProfile,
) -> &'a str {
    match profile.pluralization_rule.category(count) {
        PluralCategory::One => singular,
        _ => plural,
    }
}

/// (group, decimal) separators read from a `1,234.56`-style sample.
fn separators(pattern: &str) -> (char, char) {
    let chars: Vec<char> = pattern.chars().collect();
    if chars.len() < 4 {
        return (',', '.');
    }
    (chars[1], chars[chars.len() - 3])
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

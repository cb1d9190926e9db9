//! Plural category selection.

use serde::{Deserialize, Serialize};

/// CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

/// Plural rule families used by the supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluralRule {
    /// No grammatical plural (ja, zh, ko)
    AlwaysOther,
    /// `one` only for exactly 1 (en, es, de)
    OneIfEqualOne,
    /// `one` for 0 and 1 (fr, hi)
    OneIfZeroOrOne,
    /// Russian and related: one / few / many
    EastSlavic,
    /// Arabic: zero / one / two / few / many / other
    Arabic,
}

impl PluralRule {
    pub fn category(&self, count: u64) -> PluralCategory {
        match self {
            PluralRule::AlwaysOther => PluralCategory::Other,
            PluralRule::OneIfEqualOne => {
                if count == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::OneIfZeroOrOne => {
                if count <= 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::EastSlavic => {
                let (mod10, mod100) = (count % 10, count % 100);
                if mod10 == 1 && mod100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            PluralRule::Arabic => match (count, count % 100) {
                (0, _) => PluralCategory::Zero,
                (1, _) => PluralCategory::One,
                (2, _) => PluralCategory::Two,
                (_, 3..=10) => PluralCategory::Few,
                (_, 11..=99) => PluralCategory::Many,
                _ => PluralCategory::Other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_other() {
        for n in [0, 1, 2, 100] {
            assert_eq!(PluralRule::AlwaysOther.category(n), PluralCategory::Other);
        }
    }

    #[test]
    fn test_one_if_equal_one() {
        assert_eq!(PluralRule::OneIfEqualOne.category(1), PluralCategory::One);
        assert_eq!(PluralRule::OneIfEqualOne.category(0), PluralCategory::Other);
        assert_eq!(PluralRule::OneIfEqualOne.category(2), PluralCategory::Other);
    }

    #[test]
    fn test_one_if_zero_or_one() {
        assert_eq!(PluralRule::OneIfZeroOrOne.category(0), PluralCategory::One);
        assert_eq!(PluralRule::OneIfZeroOrOne.category(1), PluralCategory::One);
        assert_eq!(PluralRule::OneIfZeroOrOne.category(2), PluralCategory::Other);
    }

    #[test]
    fn test_east_slavic() {
        let rule = PluralRule::EastSlavic;
        assert_eq!(rule.category(1), PluralCategory::One);
        assert_eq!(rule.category(21), PluralCategory::One);
        assert_eq!(rule.category(11), PluralCategory::Many);
        assert_eq!(rule.category(111), PluralCategory::Many);
        assert_eq!(rule.category(2), PluralCategory::Few);
        assert_eq!(rule.category(24), PluralCategory::Few);
        assert_eq!(rule.category(12), PluralCategory::Many);
        assert_eq!(rule.category(5), PluralCategory::Many);
        assert_eq!(rule.category(0), PluralCategory::Many);
    }

    #[test]
    fn test_arabic() {
        let rule = PluralRule::Arabic;
        assert_eq!(rule.category(0), PluralCategory::Zero);
        assert_eq!(rule.category(1), PluralCategory::One);
        assert_eq!(rule.category(2), PluralCategory::Two);
        assert_eq!(rule.category(3), PluralCategory::Few);
        assert_eq!(rule.category(110), PluralCategory::Few);
        assert_eq!(rule.category(11), PluralCategory::Many);
        assert_eq!(rule.category(99), PluralCategory::Many);
        assert_eq!(rule.category(100), PluralCategory::Other);
        assert_eq!(rule.category(102), PluralCategory::Other);
    }
}

//! Text normalization keyed by language.
//!
//! Input is always trimmed, then exactly one transform applies:
//!
//! | Language | Transform                               |
//! |----------|-----------------------------------------|
//! | ja       | full-width ASCII → half-width ASCII     |
//! | zh       | identity (simplified/traditional TBD)   |
//! | others   | lowercase                               |

use crate::i18n::Language;

/// Offset between a full-width form (U+FF01..=U+FF5E) and its ASCII counterpart.
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Normalize `text` for the given language. Pure and idempotent.
pub fn normalize(text: &str, language: Language) -> String {
    let trimmed = text.trim();
    match language {
        Language::Ja => fold_full_width(trimmed),
        Language::Zh => trimmed.to_string(),
        _ => trimmed.to_lowercase(),
    }
}

/// Fold full-width ASCII variants and the ideographic space to half-width.
fn fold_full_width(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{FF01}'..='\u{FF5E}' => {
                char::from_u32(c as u32 - FULL_WIDTH_OFFSET).unwrap_or(c)
            }
            '\u{3000}' => ' ',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lowercases_and_trims() {
        assert_eq!(normalize("  Create A New Project  ", Language::En), "create a new project");
        assert_eq!(normalize("ПРИВЕТ", Language::Ru), "привет");
    }

    #[test]
    fn test_japanese_folds_full_width() {
        assert_eq!(normalize("ＡＢＣ１２３", Language::Ja), "ABC123");
        assert_eq!(normalize("プロジェクト　Ａを作成", Language::Ja), "プロジェクト Aを作成");
    }

    #[test]
    fn test_japanese_does_not_lowercase() {
        assert_eq!(normalize("ＡbC", Language::Ja), "AbC");
    }

    #[test]
    fn test_chinese_is_identity_after_trim() {
        assert_eq!(normalize("  创建ＡＢＣ项目 ", Language::Zh), "创建ＡＢＣ项目");
    }

    #[test]
    fn test_trims_ideographic_space() {
        assert_eq!(normalize("\u{3000}こんにちは\u{3000}", Language::Ja), "こんにちは");
    }

    #[test]
    fn test_idempotent_for_every_language() {
        let samples = ["  Hello World ", "ＦＵＬＬ　ｗｉｄｔｈ", "Привет МИР", "", "  "];
        for lang in Language::ALL {
            for sample in samples {
                let once = normalize(sample, lang);
                assert_eq!(normalize(&once, lang), once, "{} / {:?}", lang, sample);
            }
        }
    }
}

//! Intent extraction.
//!
//! Two tiers, tagged by a fixed confidence that records which tier matched:
//!
//! 1. The language's ordered intent patterns (the canonical language's table
//!    when the language has none). Named captures become entities.
//!    Confidence [`PATTERN_CONFIDENCE`].
//! 2. A flat keyword-containment classifier. Confidence
//!    [`FALLBACK_CONFIDENCE`], also used for the `"general"` catch-all.

use crate::i18n::{IntentPattern, Language, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Confidence assigned to a pattern match.
pub const PATTERN_CONFIDENCE: f64 = 0.8;

/// Confidence assigned to keyword matches and the general catch-all.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Intent reported when nothing matches.
pub const GENERAL_INTENT: &str = "general";

// Checked in order; the first intent with a keyword contained in the text wins.
const INTENT_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "create",
        &[
            "create", "new", "crear", "créer", "erstellen", "作成", "创建", "생성", "создать",
            "إنشاء", "बनाएं",
        ],
    ),
    (
        "delete",
        &[
            "delete", "remove", "eliminar", "supprimer", "löschen", "削除", "删除", "삭제",
            "удалить", "حذف", "हटाएं",
        ],
    ),
    (
        "update",
        &[
            "update", "modify", "actualizar", "modifier", "aktualisieren", "更新", "수정",
            "обновить", "تحديث",
        ],
    ),
    (
        "search",
        &[
            "search", "find", "buscar", "chercher", "suchen", "検索", "搜索", "검색", "найти",
            "بحث", "खोजें",
        ],
    ),
    (
        "help",
        &[
            "help", "ayuda", "aide", "hilfe", "ヘルプ", "帮助", "도움", "помощь", "مساعدة", "मदद",
        ],
    ),
];

/// Outcome of intent extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentMatch {
    pub intent: String,
    pub entities: BTreeMap<String, String>,
    pub confidence: f64,
}

impl IntentMatch {
    fn fallback(intent: &str) -> Self {
        Self {
            intent: intent.to_string(),
            entities: BTreeMap::new(),
            confidence: FALLBACK_CONFIDENCE,
        }
    }
}

/// Extract the intent and entities from (normalized) text.
pub fn extract_intent(text: &str, language: Language) -> IntentMatch {
    let patterns = intent_table(language);

    if let Some(matched) = match_patterns(text, patterns) {
        debug!("Intent '{}' matched by {} pattern", matched.intent, language);
        return matched;
    }

    let lowered = text.to_lowercase();
    for (intent, keywords) in INTENT_KEYWORDS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            debug!("Intent '{}' matched by keyword fallback", intent);
            return IntentMatch::fallback(intent);
        }
    }

    IntentMatch::fallback(GENERAL_INTENT)
}

/// The pattern table used for a language, falling back to the canonical one.
fn intent_table(language: Language) -> &'static [IntentPattern] {
    let registry = LanguageRegistry::get();
    let own = registry.config_for(language).rules.intent_patterns.as_slice();
    if own.is_empty() {
        registry.canonical().rules.intent_patterns.as_slice()
    } else {
        own
    }
}

fn match_patterns(text: &str, patterns: &[IntentPattern]) -> Option<IntentMatch> {
    patterns.iter().find_map(|pattern| {
        let captures = pattern.regex.captures(text)?;
        let entities = pattern
            .regex
            .capture_names()
            .flatten()
            .filter_map(|name| {
                captures
                    .name(name)
                    .map(|value| (name.to_string(), value.as_str().to_string()))
            })
            .collect();
        Some(IntentMatch {
            intent: pattern.intent.to_string(),
            entities,
            confidence: PATTERN_CONFIDENCE,
        })
    })
}

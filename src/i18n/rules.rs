//! Per-language rule tables.
//!
//! Lexical markers and common phrases drive detection, formality markers drive
//! the cultural analyzer, intent patterns drive extraction. Tables are plain
//! static data compiled once into a [`LanguageRuleSet`] by the registry.
//!
//! Some languages carry partial tables (no formality markers, no
//! intent patterns). Consumers fall back rather than fail.

use crate::i18n::Language;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Formality markers split into three tiers.
#[derive(Debug, Clone)]
pub struct FormalityMarkers {
    pub informal: &'static [&'static str],
    pub formal: &'static [&'static str],
    pub very_formal: &'static [&'static str],
}

/// A named intent pattern. Named capture groups become entities.
#[derive(Debug, Clone)]
pub struct IntentPattern {
    pub intent: &'static str,
    pub regex: Regex,
}

/// Business topics recognized by the cultural analyzer, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessTopic {
    Meeting,
    Presentation,
    Negotiation,
    Contract,
}

impl BusinessTopic {
    /// Scan order. The first topic that matches wins.
    pub const ALL: [BusinessTopic; 4] = [
        BusinessTopic::Meeting,
        BusinessTopic::Presentation,
        BusinessTopic::Negotiation,
        BusinessTopic::Contract,
    ];
}

/// Compiled keyword matcher for one business topic.
///
/// Latin-script keywords match whole words (with an optional plural `s`), so
/// `deal` does not fire on `ideal`. Keywords in other scripts match anywhere,
/// since those scripts attach particles without a separating space.
#[derive(Debug, Clone)]
pub struct TopicPattern {
    pub topic: BusinessTopic,
    pub regex: Regex,
}

/// Compiled, immutable rule set for one language.
#[derive(Debug, Clone)]
pub struct LanguageRuleSet {
    pub lexical_markers: Vec<Regex>,
    pub common_phrases: &'static [&'static str],
    pub formality: Option<FormalityMarkers>,
    pub intent_patterns: Vec<IntentPattern>,
    pub business_topics: &'static [(BusinessTopic, &'static [&'static str])],
    pub topic_patterns: Vec<TopicPattern>,
}

impl LanguageRuleSet {
    /// Keywords for a business topic in this language (empty if none).
    pub fn topic_keywords(&self, topic: BusinessTopic) -> &'static [&'static str] {
        self.business_topics
            .iter()
            .find(|(t, _)| *t == topic)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    /// Whether `text` mentions any of this language's keywords for `topic`.
    pub fn mentions_topic(&self, topic: BusinessTopic, text: &str) -> bool {
        self.topic_patterns
            .iter()
            .any(|pattern| pattern.topic == topic && pattern.regex.is_match(text))
    }
}

/// Build the rule set for a language from the static tables.
///
/// # Panics
/// Panics if a table regex fails to compile.
pub(crate) fn build_rule_set(language: Language) -> LanguageRuleSet {
    let tables = raw_tables(language);
    LanguageRuleSet {
        lexical_markers: tables
            .markers
            .iter()
            .map(|pattern| compile(pattern))
            .collect(),
        common_phrases: tables.phrases,
        formality: tables.formality,
        intent_patterns: tables
            .intents
            .iter()
            .map(|&(intent, pattern)| IntentPattern {
                intent,
                regex: compile(pattern),
            })
            .collect(),
        business_topics: tables.topics,
        topic_patterns: tables
            .topics
            .iter()
            .map(|&(topic, keywords)| TopicPattern {
                topic,
                regex: compile(&topic_pattern(keywords)),
            })
            .collect(),
    }
}

fn topic_pattern(keywords: &[&str]) -> String {
    let alternatives: Vec<String> = keywords
        .iter()
        .map(|keyword| {
            let escaped = regex::escape(keyword);
            if is_latin(keyword) {
                format!(r"\b{escaped}s?\b")
            } else {
                escaped
            }
        })
        .collect();
    format!("(?i)(?:{})", alternatives.join("|"))
}

fn is_latin(keyword: &str) -> bool {
    keyword
        .chars()
        .all(|c| c.is_ascii() || ('\u{00C0}'..='\u{024F}').contains(&c))
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid rule regex {pattern:?}: {e}"))
}

struct RawTables {
    markers: &'static [&'static str],
    phrases: &'static [&'static str],
    formality: Option<FormalityMarkers>,
    intents: &'static [(&'static str, &'static str)],
    topics: &'static [(BusinessTopic, &'static [&'static str])],
}

fn raw_tables(language: Language) -> RawTables {
    match language {
        Language::En => RawTables {
            markers: &[r"(?i)\b(?:the|and|is|are|you|your|what|how|this|that|with|today)\b"],
            phrases: &["hello", "how are you", "thank you", "good morning", "please"],
            formality: Some(FormalityMarkers {
                informal: &["gonna", "wanna", "yeah", "lol", "dude"],
                formal: &["please", "would you", "could you", "thank you", "regards"],
                very_formal: &[
                    "dear sir",
                    "dear madam",
                    "respectfully",
                    "i would be grateful",
                    "sincerely",
                ],
            }),
            intents: &[
                (
                    "create",
                    r"(?i)^(?:please\s+)?(?:create|make|build|generate)\s+(?:a\s+|an\s+|the\s+)?(?:new\s+)?(?P<target>[\w-]+)(?:\s+(?:called|named)\s+(?P<name>[\w.-]+))?",
                ),
                (
                    "delete",
                    r"(?i)^(?:please\s+)?(?:delete|remove|drop)\s+(?:the\s+|a\s+|an\s+)?(?P<target>[\w-]+)(?:\s+(?P<name>[\w.-]+))?",
                ),
                (
                    "update",
                    r"(?i)^(?:please\s+)?(?:update|change|modify|rename)\s+(?:the\s+)?(?P<target>[\w-]+)(?:\s+to\s+(?P<value>.+))?",
                ),
                (
                    "list",
                    r"(?i)^(?:please\s+)?(?:list|show)\s+(?:all\s+|the\s+|my\s+)*(?P<target>[\w-]+)",
                ),
                (
                    "translate",
                    r"(?i)^translate\s+(?P<text>.+?)\s+(?:to|into)\s+(?P<language>\w+)$",
                ),
                (
                    "search",
                    r"(?i)^(?:please\s+)?(?:search|find|look)\s+(?:for\s+)?(?P<query>.+)",
                ),
                ("help", r"(?i)^(?:help|how do i|how can i)\b(?:\s+(?P<topic>.+))?"),
            ],
            topics: &[
                (BusinessTopic::Meeting, &["meeting", "agenda"]),
                (BusinessTopic::Presentation, &["presentation", "slides", "pitch"]),
                (BusinessTopic::Negotiation, &["negotiation", "negotiate", "deal"]),
                (BusinessTopic::Contract, &["contract", "agreement"]),
            ],
        },
        Language::Es => RawTables {
            markers: &[r"(?i)\b(?:el|los|las|que|y|es|está|estás|por|para|con|muy|pero)\b"],
            phrases: &["hola", "cómo estás", "gracias", "buenos días", "por favor"],
            formality: Some(FormalityMarkers {
                informal: &["oye", "qué tal", "vale", "tío"],
                formal: &["usted", "por favor", "gracias"],
                very_formal: &["estimado", "estimada", "atentamente", "le ruego"],
            }),
            intents: &[
                (
                    "create",
                    r"(?i)^(?:por favor\s+)?(?:crear|crea|cree|generar|genera)\s+(?:un\s+|una\s+|el\s+|la\s+)?(?:nuevo\s+|nueva\s+)?(?P<target>[\w-]+)(?:\s+(?:llamado|llamada)\s+(?P<name>[\w.-]+))?",
                ),
                (
                    "delete",
                    r"(?i)^(?:por favor\s+)?(?:eliminar|elimina|borrar|borra)\s+(?:el\s+|la\s+|los\s+|las\s+)?(?P<target>[\w-]+)",
                ),
                ("search", r"(?i)^(?:buscar|busca)\s+(?P<query>.+)"),
                ("help", r"(?i)^ayuda\b(?:\s+(?P<topic>.+))?"),
            ],
            topics: &[
                (BusinessTopic::Meeting, &["reunión", "junta"]),
                (BusinessTopic::Presentation, &["presentación"]),
                (BusinessTopic::Negotiation, &["negociación", "negociar"]),
                (BusinessTopic::Contract, &["contrato", "acuerdo"]),
            ],
        },
        Language::Fr => RawTables {
            markers: &[r"(?i)\b(?:le|les|est|et|vous|je|nous|des|pour|avec|très|mais)\b"],
            phrases: &[
                "bonjour",
                "merci",
                "comment allez-vous",
                "s'il vous plaît",
                "au revoir",
            ],
            formality: Some(FormalityMarkers {
                informal: &["salut", "ouais", "t'es", "coucou"],
                formal: &["vous", "s'il vous plaît", "merci"],
                very_formal: &[
                    "veuillez agréer",
                    "je vous prie",
                    "monsieur",
                    "madame",
                ],
            }),
            intents: &[
                (
                    "create",
                    r"(?i)^(?:créer|crée|créez|générer)\s+(?:un\s+|une\s+|le\s+|la\s+)?(?:nouveau\s+|nouvelle\s+)?(?P<target>[\w-]+)",
                ),
                (
                    "delete",
                    r"(?i)^(?:supprimer|supprime|supprimez|effacer)\s+(?:le\s+|la\s+|les\s+|l')?(?P<target>[\w-]+)",
                ),
                ("search", r"(?i)^(?:chercher|cherche|rechercher)\s+(?P<query>.+)"),
                ("help", r"(?i)^aide\b(?:\s+(?P<topic>.+))?"),
            ],
            topics: &[
                (BusinessTopic::Meeting, &["réunion"]),
                (BusinessTopic::Presentation, &["présentation"]),
                (BusinessTopic::Negotiation, &["négociation", "négocier"]),
                (BusinessTopic::Contract, &["contrat"]),
            ],
        },
        Language::De => RawTables {
            markers: &[r"(?i)\b(?:der|die|das|und|ist|ich|nicht|sie|mit|wie|geht|ein|eine)\b"],
            phrases: &["guten tag", "danke", "wie geht es", "bitte", "hallo"],
            formality: Some(FormalityMarkers {
                informal: &["hallo", "tschüss", "na du"],
                formal: &["sie", "bitte", "danke"],
                very_formal: &[
                    "sehr geehrte",
                    "hochachtungsvoll",
                    "mit freundlichen grüßen",
                ],
            }),
            intents: &[
                (
                    "create",
                    r"(?i)^(?:bitte\s+)?(?:erstelle|erstellen|erzeuge)\s+(?:ein\s+|eine\s+|einen\s+)?(?:neues\s+|neue\s+|neuen\s+)?(?P<target>[\w-]+)",
                ),
                (
                    "delete",
                    r"(?i)^(?:bitte\s+)?(?:lösche|löschen|entferne)\s+(?:den\s+|die\s+|das\s+)?(?P<target>[\w-]+)",
                ),
                ("search", r"(?i)^(?:suche|finde)\s+(?:nach\s+)?(?P<query>.+)"),
                ("help", r"(?i)^hilfe\b(?:\s+(?P<topic>.+))?"),
            ],
            topics: &[
                (BusinessTopic::Meeting, &["besprechung", "sitzung", "meeting"]),
                (BusinessTopic::Presentation, &["präsentation", "vortrag"]),
                (BusinessTopic::Negotiation, &["verhandlung", "verhandeln"]),
                (BusinessTopic::Contract, &["vertrag"]),
            ],
        },
        Language::Ja => RawTables {
            markers: &[r"[\p{Hiragana}\p{Katakana}]"],
            phrases: &["ありがとう", "ございます", "こんにちは", "お願いします", "です"],
            formality: Some(FormalityMarkers {
                informal: &["だよ", "だね", "じゃん", "よね"],
                formal: &["です", "ます", "ください"],
                very_formal: &[
                    "誠に",
                    "ございます",
                    "申し上げ",
                    "いただけますでしょうか",
                    "恐れ入ります",
                ],
            }),
            intents: &[
                (
                    "create",
                    r"(?P<target>[^\s、。を]+)を(?:新しく)?(?:作成|作って|作る|つくって)",
                ),
                ("delete", r"(?P<target>[^\s、。を]+)を(?:削除|消して)"),
                ("search", r"(?P<query>[^\s、。を]+)を(?:検索|探して)"),
                ("help", r"^(?:ヘルプ|助けて)"),
            ],
            topics: &[
                (BusinessTopic::Meeting, &["会議", "打ち合わせ", "ミーティング"]),
                (BusinessTopic::Presentation, &["プレゼン", "発表"]),
                (BusinessTopic::Negotiation, &["交渉"]),
                (BusinessTopic::Contract, &["契約"]),
            ],
        },
        Language::Zh => RawTables {
            markers: &[r"\p{Han}"],
            phrases: &["你好", "谢谢", "我们", "什么", "可以"],
            formality: Some(FormalityMarkers {
                informal: &["哈哈", "嘿", "哥们"],
                formal: &["请", "您"],
                very_formal: &["尊敬的", "敬请", "恭候"],
            }),
            intents: &[
                (
                    "create",
                    r"^(?:请)?(?:创建|新建)(?:一个)?(?:新的?)?(?P<target>\S+)",
                ),
                ("delete", r"^(?:请)?删除(?P<target>\S+)"),
                ("search", r"^(?:请)?(?:搜索|查找)(?P<query>\S+)"),
            ],
            topics: &[
                (BusinessTopic::Meeting, &["会议"]),
                (BusinessTopic::Presentation, &["演示", "汇报"]),
                (BusinessTopic::Negotiation, &["谈判"]),
                (BusinessTopic::Contract, &["合同"]),
            ],
        },
        Language::Ko => RawTables {
            markers: &[r"\p{Hangul}"],
            phrases: &["안녕하세요", "감사합니다", "입니다"],
            formality: Some(FormalityMarkers {
                informal: &["고마워", "했어", "안녕!"],
                formal: &["습니다", "세요"],
                very_formal: &["드립니다", "올립니다"],
            }),
            intents: &[],
            topics: &[
                (BusinessTopic::Meeting, &["회의"]),
                (BusinessTopic::Presentation, &["발표"]),
                (BusinessTopic::Negotiation, &["협상"]),
                (BusinessTopic::Contract, &["계약"]),
            ],
        },
        Language::Ru => RawTables {
            markers: &[r"(?i)\b(?:и|в|не|на|что|как|это|я|ты|вы|привет|дела)\b"],
            phrases: &["привет", "как дела", "спасибо", "здравствуйте"],
            formality: Some(FormalityMarkers {
                informal: &["привет", "пока", "ты"],
                formal: &["вы", "пожалуйста", "спасибо"],
                very_formal: &["уважаемый", "уважаемая", "с уважением"],
            }),
            intents: &[
                (
                    "create",
                    r"(?i)^(?:пожалуйста\s+)?(?:создай|создать|создайте)\s+(?:новый\s+|новую\s+|новое\s+)?(?P<target>[\w-]+)",
                ),
                (
                    "delete",
                    r"(?i)^(?:пожалуйста\s+)?(?:удали|удалить|удалите)\s+(?P<target>[\w-]+)",
                ),
                ("search", r"(?i)^(?:найди|найти|поиск)\s+(?P<query>.+)"),
                ("help", r"(?i)^помощь\b(?:\s+(?P<topic>.+))?"),
            ],
            topics: &[
                (BusinessTopic::Meeting, &["встреча", "совещание"]),
                (BusinessTopic::Presentation, &["презентация"]),
                (BusinessTopic::Negotiation, &["переговоры"]),
                (BusinessTopic::Contract, &["контракт", "договор"]),
            ],
        },
        Language::Ar => RawTables {
            markers: &[r"\p{Arabic}"],
            phrases: &["مرحبا", "شكرا", "السلام عليكم"],
            formality: None,
            intents: &[],
            topics: &[
                (BusinessTopic::Meeting, &["اجتماع"]),
                (BusinessTopic::Negotiation, &["مفاوضات"]),
                (BusinessTopic::Contract, &["عقد"]),
            ],
        },
        Language::Hi => RawTables {
            markers: &[r"\p{Devanagari}"],
            phrases: &["नमस्ते", "धन्यवाद", "कैसे हैं"],
            formality: None,
            intents: &[],
            topics: &[],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_compiles() {
        for lang in Language::ALL {
            let rules = build_rule_set(lang);
            assert!(
                !rules.lexical_markers.is_empty(),
                "{} should have lexical markers",
                lang
            );
            assert!(
                !rules.common_phrases.is_empty(),
                "{} should have common phrases",
                lang
            );
        }
    }

    #[test]
    fn test_partial_tables() {
        assert!(build_rule_set(Language::Ar).formality.is_none());
        assert!(build_rule_set(Language::Hi).formality.is_none());
        assert!(build_rule_set(Language::Ko).intent_patterns.is_empty());
        assert!(build_rule_set(Language::Hi).business_topics.is_empty());
    }

    #[test]
    fn test_common_phrases_are_lowercase() {
        // Phrase matching lowercases the input, so phrases must already be lowercase
        for lang in Language::ALL {
            for phrase in build_rule_set(lang).common_phrases {
                assert_eq!(*phrase, phrase.to_lowercase(), "{} phrase {}", lang, phrase);
            }
        }
    }

    #[test]
    fn test_english_create_pattern_captures_target() {
        let rules = build_rule_set(Language::En);
        let create = &rules.intent_patterns[0];
        assert_eq!(create.intent, "create");
        let caps = create.regex.captures("create a new project").unwrap();
        assert_eq!(&caps["target"], "project");
        assert!(caps.name("name").is_none());
    }

    #[test]
    fn test_topic_pattern_matches_whole_latin_words() {
        let rules = build_rule_set(Language::En);
        assert!(rules.mentions_topic(BusinessTopic::Negotiation, "we closed the deal"));
        assert!(rules.mentions_topic(BusinessTopic::Meeting, "two meetings today"));
        assert!(!rules.mentions_topic(BusinessTopic::Negotiation, "an ideal plan"));
        assert!(!rules.mentions_topic(BusinessTopic::Negotiation, "call the dealer"));
        assert!(!rules.mentions_topic(BusinessTopic::Presentation, "he pitched a tent"));
    }

    #[test]
    fn test_topic_pattern_matches_inside_cjk_text() {
        let rules = build_rule_set(Language::Ja);
        assert!(rules.mentions_topic(BusinessTopic::Meeting, "明日の会議です"));
    }

    #[test]
    fn test_topic_keywords_lookup() {
        let rules = build_rule_set(Language::Ar);
        assert_eq!(rules.topic_keywords(BusinessTopic::Meeting), &["اجتماع"]);
        assert!(rules.topic_keywords(BusinessTopic::Presentation).is_empty());
    }

    #[test]
    fn test_business_topic_scan_order() {
        assert_eq!(BusinessTopic::ALL[0], BusinessTopic::Meeting);
        assert_eq!(BusinessTopic::ALL[3], BusinessTopic::Contract);
    }
}

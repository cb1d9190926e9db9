/// Greetings keyed by time of day.
#[derive(Debug, Clone)]
pub struct TimeOfDayGreetings {
    /// Used for hours [5, 12)
    pub morning: &'static str,
    /// Used for hours [12, 17)
    pub afternoon: &'static str,
    /// Used for hours [17, 21)
    pub evening: &'static str,
    /// Used for all remaining hours
    pub night: &'static str,
}

/// Localized phrases used when shaping a response for a language
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Greetings ====================
    /// Greetings by time of day. `None` leaves the profile greeting untouched.
    pub time_of_day_greetings: Option<TimeOfDayGreetings>,

    /// Greeting prepended to informal responses
    pub informal_greeting: &'static str,

    // ==================== Closings ====================
    /// Closing appended to very formal responses. Empty means no closing.
    pub formal_closing: &'static str,
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    time_of_day_greetings: Some(TimeOfDayGreetings {
        morning: "Good morning",
        afternoon: "Good afternoon",
        evening: "Good evening",
        night: "Good night",
    }),
    informal_greeting: "Hi!",
    formal_closing: "Kind regards.",
};

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    time_of_day_greetings: Some(TimeOfDayGreetings {
        morning: "Buenos días",
        afternoon: "Buenas tardes",
        evening: "Buenas tardes",
        night: "Buenas noches",
    }),
    informal_greeting: "¡Hola!",
    formal_closing: "Atentamente.",
};

// ==================== French Strings ====================

pub const FRENCH_STRINGS: LanguageStrings = LanguageStrings {
    time_of_day_greetings: Some(TimeOfDayGreetings {
        morning: "Bonjour",
        afternoon: "Bonjour",
        evening: "Bonsoir",
        night: "Bonne nuit",
    }),
    informal_greeting: "Salut !",
    formal_closing: "Veuillez agréer mes salutations distinguées.",
};

// ==================== German Strings ====================

pub const GERMAN_STRINGS: LanguageStrings = LanguageStrings {
    time_of_day_greetings: Some(TimeOfDayGreetings {
        morning: "Guten Morgen",
        afternoon: "Guten Tag",
        evening: "Guten Abend",
        night: "Gute Nacht",
    }),
    informal_greeting: "Hallo!",
    formal_closing: "Mit freundlichen Grüßen.",
};

// ==================== Japanese Strings ====================

pub const JAPANESE_STRINGS: LanguageStrings = LanguageStrings {
    time_of_day_greetings: Some(TimeOfDayGreetings {
        morning: "おはようございます",
        afternoon: "こんにちは",
        evening: "こんばんは",
        night: "こんばんは",
    }),
    informal_greeting: "やあ！",
    formal_closing: "よろしくお願い申し上げます。",
};

// ==================== Chinese Strings ====================

pub const CHINESE_STRINGS: LanguageStrings = LanguageStrings {
    time_of_day_greetings: Some(TimeOfDayGreetings {
        morning: "早上好",
        afternoon: "下午好",
        evening: "晚上好",
        night: "晚安",
    }),
    informal_greeting: "嗨！",
    formal_closing: "此致敬礼。",
};

// ==================== Korean Strings ====================

pub const KOREAN_STRINGS: LanguageStrings = LanguageStrings {
    time_of_day_greetings: Some(TimeOfDayGreetings {
        morning: "좋은 아침입니다",
        afternoon: "안녕하세요",
        evening: "안녕하세요",
        night: "안녕히 주무세요",
    }),
    informal_greeting: "안녕!",
    formal_closing: "감사합니다.",
};

// ==================== Russian Strings ====================

pub const RUSSIAN_STRINGS: LanguageStrings = LanguageStrings {
    time_of_day_greetings: Some(TimeOfDayGreetings {
        morning: "Доброе утро",
        afternoon: "Добрый день",
        evening: "Добрый вечер",
        night: "Доброй ночи",
    }),
    informal_greeting: "Привет!",
    formal_closing: "С уважением.",
};

// ==================== Arabic Strings ====================

pub const ARABIC_STRINGS: LanguageStrings = LanguageStrings {
    time_of_day_greetings: Some(TimeOfDayGreetings {
        morning: "صباح الخير",
        afternoon: "مساء الخير",
        evening: "مساء الخير",
        night: "تصبح على خير",
    }),
    informal_greeting: "أهلاً!",
    formal_closing: "مع خالص التحية.",
};

// ==================== Hindi Strings ====================

// No time-of-day table yet; profile greetings stay at their static default.
pub const HINDI_STRINGS: LanguageStrings = LanguageStrings {
    time_of_day_greetings: None,
    informal_greeting: "नमस्ते!",
    formal_closing: "",
};

impl TimeOfDayGreetings {
    /// Pick the greeting for an hour of the day (0-23).
    pub fn for_hour(&self, hour: u32) -> &'static str {
        match hour {
            5..=11 => self.morning,
            12..=16 => self.afternoon,
            17..=20 => self.evening,
            _ => self.night,
        }
    }
}

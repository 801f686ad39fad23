//! Profanity filtering
//!
//! Multilingual abuse dictionary and the per-word matchers built from it.

use super::patterns::ContentRule;
use super::types::{Severity, Violation, ViolationType};
use tracing::error;

const ABUSE_MESSAGE: &str = "Abusive or offensive language is not allowed";
const ABUSE_SUGGESTION: &str = "Remove offensive words and keep the conversation respectful";

/// English profanity and slurs
pub const ENGLISH_WORDS: &[&str] = &[
    "fuck", "fucker", "fucking", "motherfucker", "shit", "bullshit", "bitch", "bastard",
    "asshole", "dickhead", "dick", "cunt", "slut", "whore", "prick", "wanker", "twat",
    "retard", "scumbag", "douchebag", "jackass", "piss off", "son of a bitch",
];

/// Romanised Hindi and Urdu abuse
pub const HINDI_WORDS: &[&str] = &[
    "chutiya", "chutiye", "madarchod", "maderchod", "behenchod", "bhenchod", "bhenchodd",
    "bhosdike", "bhosdiwale", "gandu", "gaandu", "harami", "haramkhor", "kamina", "kamine",
    "kutiya", "randi", "lund", "lauda", "lavda", "jhatu", "chodu",
    "tatti", "saala kutta", "suar", "ullu ka pattha",
];

/// Devanagari-script abuse
pub const DEVANAGARI_WORDS: &[&str] = &[
    "चूतिया", "चुतिया", "मादरचोद", "बहनचोद", "भेनचोद", "भोसडीके", "गांडू", "हरामी",
    "हरामखोर", "कमीना", "कुतिया", "रंडी", "लौड़ा", "झाटू",
];

/// Romanised abuse from other Indian languages
pub const REGIONAL_WORDS: &[&str] = &[
    // Tamil
    "punda", "pundai", "thevidiya", "thevdiya", "otha", "oombu",
    // Telugu
    "dengey", "dengu", "lanja", "lanjakodaka", "puka",
    // Kannada
    "soole", "sule maga", "bolimaga", "boli maga", "tunne",
    // Malayalam
    "pooru", "myre", "myru", "thayoli", "kunna",
    // Bengali
    "bokachoda", "khanki", "shuorer baccha",
    // Marathi
    "zhavadya", "bhadvya", "aai zhavli",
    // Punjabi
    "kanjar", "lulli",
];

/// Native-script abuse from other Indian languages
pub const REGIONAL_SCRIPT_WORDS: &[&str] = &[
    // Tamil
    "புண்டை", "தேவடியா", "ஓத்தா",
    // Telugu
    "లంజ", "దెంగు",
    // Kannada
    "ಸೂಳೆ", "ಬೋಳಿಮಗ",
    // Malayalam
    "പൂറി", "മൈര്",
    // Bengali
    "খানকি", "মাগি", "বোকাচোদা",
    // Gurmukhi
    "ਕੰਜਰ",
];

/// Character-substituted spellings used to dodge filters
pub const OBFUSCATED_WORDS: &[&str] = &[
    "f*ck", "f**k", "fck", "fuk", "fuq", "phuck", "fcuk", "sh1t", "sh!t", "s#it", "b1tch",
    "b!tch", "biatch", "a$$hole", "a55hole", "azzhole", "d1ck", "c*nt", "wh0re", "sl*t",
    "ch*tiya", "chu+iya", "chut1ya", "bh3nchod", "bhen*chod", "bsdk", "mkc",
];

/// Full default dictionary in scan order
pub fn default_dictionary() -> impl Iterator<Item = &'static str> {
    ENGLISH_WORDS
        .iter()
        .chain(HINDI_WORDS)
        .chain(DEVANAGARI_WORDS)
        .chain(REGIONAL_WORDS)
        .chain(REGIONAL_SCRIPT_WORDS)
        .chain(OBFUSCATED_WORDS)
        .copied()
}

/// Profanity filter
#[derive(Debug, Clone)]
pub struct ProfanityFilter {
    /// One matcher per dictionary word, in dictionary order
    matchers: Vec<ContentRule>,
    /// Words that failed to compile
    skipped: Vec<String>,
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfanityFilter {
    /// Create a profanity filter over the built-in dictionary
    pub fn new() -> Self {
        Self::with_words(default_dictionary())
    }

    /// Create a profanity filter over a custom dictionary
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self {
            matchers: Vec::new(),
            skipped: Vec::new(),
        };
        filter.add_words(words);
        filter
    }

    /// Append words to the dictionary, ignoring blanks and duplicates
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() || self.matchers.iter().any(|m| m.name == word) {
                continue;
            }
            match ContentRule::keyword(
                &word,
                ViolationType::Abuse,
                Severity::Critical,
                ABUSE_MESSAGE,
                Some(ABUSE_SUGGESTION.to_string()),
            ) {
                Ok(rule) => self.matchers.push(rule),
                Err(e) => {
                    error!("Skipping dictionary word: {}", e);
                    self.skipped.push(word);
                }
            }
        }
    }

    /// Number of active dictionary words
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Words that could not be compiled
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Check if text contains profanity
    pub fn contains_profanity(&self, text: &str) -> bool {
        self.matchers.iter().any(|m| m.regex.is_match(text))
    }

    /// Append one `abuse` violation per dictionary hit
    pub fn scan(&self, text: &str, out: &mut Vec<Violation>) {
        for matcher in &self.matchers {
            matcher.scan(text, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(filter: &ProfanityFilter, text: &str) -> Vec<Violation> {
        let mut out = Vec::new();
        filter.scan(text, &mut out);
        out
    }

    #[test]
    fn test_profanity_filter() {
        let filter = ProfanityFilter::new();
        assert!(filter.contains_profanity("This contains SHIT in caps"));
        assert!(!filter.contains_profanity("Shiitake mushrooms for the kitchen"));
        assert!(filter.skipped().is_empty());
    }

    #[test]
    fn test_every_occurrence_is_reported() {
        let filter = ProfanityFilter::with_words(["idiot"]);
        let found = hits(&filter, "idiot, total IDIOT");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|v| v.violation_type == ViolationType::Abuse));
        assert!(found.iter().all(|v| v.severity == Severity::Critical));
        assert_eq!(found[1].matched, "IDIOT");
        assert_eq!(found[1].position, 13);
    }

    #[test]
    fn test_word_boundaries() {
        let filter = ProfanityFilter::with_words(["ass"]);
        assert!(!filter.contains_profanity("we need a class assistant"));
        assert!(filter.contains_profanity("what an ass"));
    }

    #[test]
    fn test_obfuscated_entries_are_escaped() {
        let filter = ProfanityFilter::new();
        assert!(filter.contains_profanity("what the f*ck"));
        assert!(filter.contains_profanity("you a$$hole"));
        assert!(!filter.contains_profanity("fxck"));
    }

    #[test]
    fn test_indian_language_entries() {
        let filter = ProfanityFilter::new();
        assert!(filter.contains_profanity("tu chutiya hai"));
        assert!(filter.contains_profanity("वो हरामी है"));
        assert!(filter.contains_profanity("dei punda"));
        assert!(!filter.contains_profanity("हर मौसम में काम"));
    }

    #[test]
    fn test_duplicates_and_blanks_ignored() {
        let filter = ProfanityFilter::with_words(["jerk", "JERK", "  ", "jerk "]);
        assert_eq!(filter.len(), 1);
    }
}

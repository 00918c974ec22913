//! The emoji corpus: a static, ordered, read-only table of records.

/// A single searchable emoji entry.
///
/// Records are unique by title and live for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiRecord {
    pub symbol: &'static str,
    pub title: &'static str,
}

/// The built-in corpus, in display order.
pub fn builtin_corpus() -> &'static [EmojiRecord] {
    EMOJIS
}

/// Common emojis with human-readable titles
static EMOJIS: &[EmojiRecord] = &[
    // Smileys
    EmojiRecord { symbol: "\u{1f600}", title: "grinning face" },
    EmojiRecord { symbol: "\u{1f603}", title: "grinning face with big eyes" },
    EmojiRecord { symbol: "\u{1f604}", title: "grinning face with smiling eyes" },
    EmojiRecord { symbol: "\u{1f601}", title: "beaming face with smiling eyes" },
    EmojiRecord { symbol: "\u{1f605}", title: "grinning face with sweat" },
    EmojiRecord { symbol: "\u{1f602}", title: "face with tears of joy" },
    EmojiRecord { symbol: "\u{1f923}", title: "rolling on the floor laughing" },
    EmojiRecord { symbol: "\u{1f60a}", title: "smiling face with smiling eyes" },
    EmojiRecord { symbol: "\u{1f607}", title: "smiling face with halo" },
    EmojiRecord { symbol: "\u{1f642}", title: "slightly smiling face" },
    EmojiRecord { symbol: "\u{1f609}", title: "winking face" },
    EmojiRecord { symbol: "\u{1f60c}", title: "relieved face" },
    EmojiRecord { symbol: "\u{1f60d}", title: "smiling face with heart eyes" },
    EmojiRecord { symbol: "\u{1f970}", title: "smiling face with hearts" },
    EmojiRecord { symbol: "\u{1f618}", title: "face blowing a kiss" },
    EmojiRecord { symbol: "\u{1f60b}", title: "face savoring food" },
    EmojiRecord { symbol: "\u{1f60e}", title: "smiling face with sunglasses" },
    EmojiRecord { symbol: "\u{1f913}", title: "nerd face" },
    EmojiRecord { symbol: "\u{1f9d0}", title: "face with monocle" },
    EmojiRecord { symbol: "\u{1f914}", title: "thinking face" },
    EmojiRecord { symbol: "\u{1f928}", title: "face with raised eyebrow" },
    EmojiRecord { symbol: "\u{1f610}", title: "neutral face" },
    EmojiRecord { symbol: "\u{1f611}", title: "expressionless face" },
    EmojiRecord { symbol: "\u{1f636}", title: "face without mouth" },
    EmojiRecord { symbol: "\u{1f60f}", title: "smirking face" },
    EmojiRecord { symbol: "\u{1f612}", title: "unamused face" },
    EmojiRecord { symbol: "\u{1f644}", title: "face with rolling eyes" },
    EmojiRecord { symbol: "\u{1f62c}", title: "grimacing face" },
    EmojiRecord { symbol: "\u{1f925}", title: "lying face" },
    EmojiRecord { symbol: "\u{1f614}", title: "pensive face" },
    EmojiRecord { symbol: "\u{1f62a}", title: "sleepy face" },
    EmojiRecord { symbol: "\u{1f924}", title: "drooling face" },
    EmojiRecord { symbol: "\u{1f634}", title: "sleeping face" },
    EmojiRecord { symbol: "\u{1f637}", title: "face with medical mask" },
    EmojiRecord { symbol: "\u{1f912}", title: "face with thermometer" },
    EmojiRecord { symbol: "\u{1f915}", title: "face with head bandage" },
    EmojiRecord { symbol: "\u{1f922}", title: "nauseated face" },
    EmojiRecord { symbol: "\u{1f92e}", title: "face vomiting" },
    EmojiRecord { symbol: "\u{1f927}", title: "sneezing face" },
    EmojiRecord { symbol: "\u{1f975}", title: "hot face" },
    EmojiRecord { symbol: "\u{1f976}", title: "cold face" },
    EmojiRecord { symbol: "\u{1f974}", title: "woozy face" },
    EmojiRecord { symbol: "\u{1f635}", title: "knocked out face" },
    EmojiRecord { symbol: "\u{1f92f}", title: "exploding head" },
    EmojiRecord { symbol: "\u{1f920}", title: "cowboy hat face" },
    EmojiRecord { symbol: "\u{1f973}", title: "partying face" },
    EmojiRecord { symbol: "\u{1f978}", title: "disguised face" },
    EmojiRecord { symbol: "\u{1f615}", title: "confused face" },
    EmojiRecord { symbol: "\u{1f61f}", title: "worried face" },
    EmojiRecord { symbol: "\u{1f641}", title: "slightly frowning face" },
    EmojiRecord { symbol: "\u{1f62e}", title: "face with open mouth" },
    EmojiRecord { symbol: "\u{1f632}", title: "astonished face" },
    EmojiRecord { symbol: "\u{1f633}", title: "flushed face" },
    EmojiRecord { symbol: "\u{1f97a}", title: "pleading face" },
    EmojiRecord { symbol: "\u{1f628}", title: "fearful face" },
    EmojiRecord { symbol: "\u{1f630}", title: "anxious face with sweat" },
    EmojiRecord { symbol: "\u{1f622}", title: "crying face" },
    EmojiRecord { symbol: "\u{1f62d}", title: "loudly crying face" },
    EmojiRecord { symbol: "\u{1f631}", title: "face screaming in fear" },
    EmojiRecord { symbol: "\u{1f624}", title: "face with steam from nose" },
    EmojiRecord { symbol: "\u{1f621}", title: "pouting face" },
    EmojiRecord { symbol: "\u{1f620}", title: "angry face" },
    EmojiRecord { symbol: "\u{1f92c}", title: "face with symbols on mouth" },
    EmojiRecord { symbol: "\u{1f608}", title: "smiling face with horns" },
    EmojiRecord { symbol: "\u{1f47f}", title: "angry face with horns" },
    EmojiRecord { symbol: "\u{1f480}", title: "skull" },
    EmojiRecord { symbol: "\u{1f4a9}", title: "pile of poo" },
    EmojiRecord { symbol: "\u{1f921}", title: "clown face" },
    EmojiRecord { symbol: "\u{1f47b}", title: "ghost" },
    EmojiRecord { symbol: "\u{1f47d}", title: "alien" },
    EmojiRecord { symbol: "\u{1f916}", title: "robot" },
    // Gestures
    EmojiRecord { symbol: "\u{1f44b}", title: "waving hand" },
    EmojiRecord { symbol: "\u{1f44c}", title: "ok hand" },
    EmojiRecord { symbol: "\u{1f90c}", title: "pinched fingers" },
    EmojiRecord { symbol: "\u{270c}\u{fe0f}", title: "victory hand" },
    EmojiRecord { symbol: "\u{1f91e}", title: "crossed fingers" },
    EmojiRecord { symbol: "\u{1f918}", title: "sign of the horns" },
    EmojiRecord { symbol: "\u{1f44d}", title: "thumbs up" },
    EmojiRecord { symbol: "\u{1f44e}", title: "thumbs down" },
    EmojiRecord { symbol: "\u{1f44f}", title: "clapping hands" },
    EmojiRecord { symbol: "\u{1f64c}", title: "raising hands" },
    EmojiRecord { symbol: "\u{1f91d}", title: "handshake" },
    EmojiRecord { symbol: "\u{1f64f}", title: "folded hands" },
    EmojiRecord { symbol: "\u{1f4aa}", title: "flexed biceps" },
    // Hearts
    EmojiRecord { symbol: "\u{2764}\u{fe0f}", title: "red heart" },
    EmojiRecord { symbol: "\u{1f9e1}", title: "orange heart" },
    EmojiRecord { symbol: "\u{1f49b}", title: "yellow heart" },
    EmojiRecord { symbol: "\u{1f49a}", title: "green heart" },
    EmojiRecord { symbol: "\u{1f499}", title: "blue heart" },
    EmojiRecord { symbol: "\u{1f49c}", title: "purple heart" },
    EmojiRecord { symbol: "\u{1f5a4}", title: "black heart" },
    EmojiRecord { symbol: "\u{1f494}", title: "broken heart" },
    // Objects & symbols
    EmojiRecord { symbol: "\u{1f525}", title: "fire" },
    EmojiRecord { symbol: "\u{2728}", title: "sparkles" },
    EmojiRecord { symbol: "\u{2b50}", title: "star" },
    EmojiRecord { symbol: "\u{1f4a5}", title: "collision" },
    EmojiRecord { symbol: "\u{1f4ac}", title: "speech balloon" },
    EmojiRecord { symbol: "\u{1f4ad}", title: "thought balloon" },
    EmojiRecord { symbol: "\u{1f4a4}", title: "zzz" },
    EmojiRecord { symbol: "\u{1f440}", title: "eyes" },
    // Tech & work
    EmojiRecord { symbol: "\u{1f4bb}", title: "laptop" },
    EmojiRecord { symbol: "\u{1f4f1}", title: "mobile phone" },
    EmojiRecord { symbol: "\u{1f4e7}", title: "e-mail" },
    EmojiRecord { symbol: "\u{1f4dd}", title: "memo" },
    EmojiRecord { symbol: "\u{1f517}", title: "link" },
    EmojiRecord { symbol: "\u{1f512}", title: "locked" },
    EmojiRecord { symbol: "\u{1f511}", title: "key" },
    EmojiRecord { symbol: "\u{1f527}", title: "wrench" },
    EmojiRecord { symbol: "\u{2699}\u{fe0f}", title: "gear" },
    EmojiRecord { symbol: "\u{1f4e6}", title: "package" },
    EmojiRecord { symbol: "\u{1f4c1}", title: "file folder" },
    EmojiRecord { symbol: "\u{1f4c4}", title: "page facing up" },
    EmojiRecord { symbol: "\u{2705}", title: "check mark button" },
    EmojiRecord { symbol: "\u{274c}", title: "cross mark" },
    EmojiRecord { symbol: "\u{2753}", title: "question mark" },
    EmojiRecord { symbol: "\u{2757}", title: "exclamation mark" },
    EmojiRecord { symbol: "\u{26a0}\u{fe0f}", title: "warning" },
    EmojiRecord { symbol: "\u{1f680}", title: "rocket" },
    EmojiRecord { symbol: "\u{1f389}", title: "party popper" },
    EmojiRecord { symbol: "\u{1f381}", title: "wrapped gift" },
    EmojiRecord { symbol: "\u{1f3c6}", title: "trophy" },
    // Weather & nature
    EmojiRecord { symbol: "\u{2600}\u{fe0f}", title: "sun" },
    EmojiRecord { symbol: "\u{2601}\u{fe0f}", title: "cloud" },
    EmojiRecord { symbol: "\u{2744}\u{fe0f}", title: "snowflake" },
    EmojiRecord { symbol: "\u{1f308}", title: "rainbow" },
    EmojiRecord { symbol: "\u{1f30a}", title: "water wave" },
    // Food & drink
    EmojiRecord { symbol: "\u{2615}", title: "hot beverage" },
    EmojiRecord { symbol: "\u{1f37a}", title: "beer mug" },
    EmojiRecord { symbol: "\u{1f355}", title: "pizza" },
    EmojiRecord { symbol: "\u{1f354}", title: "hamburger" },
    EmojiRecord { symbol: "\u{1f32e}", title: "taco" },
    EmojiRecord { symbol: "\u{1f363}", title: "sushi" },
    EmojiRecord { symbol: "\u{1f370}", title: "shortcake" },
    // Animals
    EmojiRecord { symbol: "\u{1f436}", title: "dog face" },
    EmojiRecord { symbol: "\u{1f431}", title: "cat face" },
    EmojiRecord { symbol: "\u{1f430}", title: "rabbit face" },
    EmojiRecord { symbol: "\u{1f98a}", title: "fox" },
    EmojiRecord { symbol: "\u{1f43b}", title: "bear" },
    EmojiRecord { symbol: "\u{1f43c}", title: "panda" },
    EmojiRecord { symbol: "\u{1f981}", title: "lion" },
    EmojiRecord { symbol: "\u{1f427}", title: "penguin" },
    EmojiRecord { symbol: "\u{1f40d}", title: "snake" },
    EmojiRecord { symbol: "\u{1f996}", title: "t-rex" },
    EmojiRecord { symbol: "\u{1f419}", title: "octopus" },
    EmojiRecord { symbol: "\u{1f42c}", title: "dolphin" },
    EmojiRecord { symbol: "\u{1f988}", title: "shark" },
    // Arrows & marks
    EmojiRecord { symbol: "\u{2b06}\u{fe0f}", title: "up arrow" },
    EmojiRecord { symbol: "\u{2b07}\u{fe0f}", title: "down arrow" },
    EmojiRecord { symbol: "\u{2b05}\u{fe0f}", title: "left arrow" },
    EmojiRecord { symbol: "\u{27a1}\u{fe0f}", title: "right arrow" },
    EmojiRecord { symbol: "\u{1f504}", title: "counterclockwise arrows" },
    EmojiRecord { symbol: "\u{267e}\u{fe0f}", title: "infinity" },
    EmojiRecord { symbol: "\u{1f4af}", title: "hundred points" },
    EmojiRecord { symbol: "\u{1f6ab}", title: "prohibited" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_corpus_not_empty() {
        assert!(builtin_corpus().len() >= 100);
    }

    #[test]
    fn test_titles_unique() {
        let mut seen = HashSet::new();
        for record in builtin_corpus() {
            assert!(seen.insert(record.title), "duplicate title: {}", record.title);
        }
    }

    #[test]
    fn test_records_well_formed() {
        for record in builtin_corpus() {
            assert!(!record.symbol.is_empty());
            assert!(!record.title.is_empty());
            // Titles are stored lowercase so matching stays case-insensitive
            assert_eq!(record.title, record.title.to_lowercase());
        }
    }
}

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]+").expect("sentence pattern is valid");
    static ref BLANK_LINES: Regex = Regex::new(r"\n\s*\n").expect("paragraph pattern is valid");
}

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub lines: usize,
    pub reading_time_minutes: usize,
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn reading_time_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}

fn count_non_blank<'a>(parts: impl Iterator<Item = &'a str>) -> usize {
    parts.filter(|p| !p.trim().is_empty()).count()
}

pub fn text_stats(text: &str) -> TextStats {
    let blank = text.trim().is_empty();
    let words = word_count(text);

    TextStats {
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words,
        sentences: if blank {
            0
        } else {
            count_non_blank(SENTENCE_END.split(text))
        },
        paragraphs: if blank {
            0
        } else {
            count_non_blank(BLANK_LINES.split(text))
        },
        lines: if text.is_empty() {
            0
        } else {
            text.split('\n').count()
        },
        reading_time_minutes: reading_time_minutes(words),
    }
}

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ToolError;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w\S*").expect("word pattern is valid");
    // start of text, an upper-case letter, or the first char of a word
    static ref WORD_START: Regex = Regex::new(r"^\w|[A-Z]|\b\w").expect("word start pattern is valid");
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("whitespace pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextCase {
    Upper,
    Lower,
    Title,
    Camel,
    Pascal,
    Snake,
    Kebab,
    Sentence,
}

impl TextCase {
    pub const ALL: [TextCase; 8] = [
        TextCase::Upper,
        TextCase::Lower,
        TextCase::Title,
        TextCase::Camel,
        TextCase::Pascal,
        TextCase::Snake,
        TextCase::Kebab,
        TextCase::Sentence,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TextCase::Upper => "UPPERCASE",
            TextCase::Lower => "lowercase",
            TextCase::Title => "Title Case",
            TextCase::Camel => "camelCase",
            TextCase::Pascal => "PascalCase",
            TextCase::Snake => "snake_case",
            TextCase::Kebab => "kebab-case",
            TextCase::Sentence => "Sentence case",
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            TextCase::Upper => text.to_uppercase(),
            TextCase::Lower => text.to_lowercase(),
            TextCase::Title => title_case(text),
            TextCase::Camel => camel_case(text),
            TextCase::Pascal => pascal_case(text),
            TextCase::Snake => WHITESPACE.replace_all(&text.to_lowercase(), "_").into_owned(),
            TextCase::Kebab => WHITESPACE.replace_all(&text.to_lowercase(), "-").into_owned(),
            TextCase::Sentence => sentence_case(text),
        }
    }
}

impl FromStr for TextCase {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "upper" | "uppercase" => Ok(TextCase::Upper),
            "lower" | "lowercase" => Ok(TextCase::Lower),
            "title" | "titlecase" => Ok(TextCase::Title),
            "camel" | "camelcase" => Ok(TextCase::Camel),
            "pascal" | "pascalcase" => Ok(TextCase::Pascal),
            "snake" | "snakecase" => Ok(TextCase::Snake),
            "kebab" | "kebabcase" => Ok(TextCase::Kebab),
            "sentence" | "sentencecase" => Ok(TextCase::Sentence),
            _ => Err(ToolError::malformed(format!("unknown case '{}'", s))),
        }
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn title_case(text: &str) -> String {
    WORD.replace_all(text, |caps: &Captures| {
        let word = &caps[0];
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => {
                let rest: String = chars.as_str().to_lowercase();
                first.to_uppercase().chain(rest.chars()).collect::<String>()
            }
            None => String::new(),
        }
    })
    .into_owned()
}

fn camel_case(text: &str) -> String {
    let marked = WORD_START.replace_all(text, |caps: &Captures| {
        let m = caps.get(0).map(|m| (m.start(), m.as_str())).unwrap_or((0, ""));
        if m.0 == 0 {
            m.1.to_lowercase()
        } else {
            m.1.to_uppercase()
        }
    });
    WHITESPACE.replace_all(&marked, "").into_owned()
}

fn pascal_case(text: &str) -> String {
    let marked = WORD_START.replace_all(text, |caps: &Captures| caps[0].to_uppercase());
    WHITESPACE.replace_all(&marked, "").into_owned()
}

fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => upper_first(&first.to_string()) + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Every case of the same input, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseConversions {
    pub uppercase: String,
    pub lowercase: String,
    pub title_case: String,
    pub camel_case: String,
    pub pascal_case: String,
    pub snake_case: String,
    pub kebab_case: String,
    pub sentence_case: String,
}

pub fn convert_all(text: &str) -> CaseConversions {
    CaseConversions {
        uppercase: TextCase::Upper.apply(text),
        lowercase: TextCase::Lower.apply(text),
        title_case: TextCase::Title.apply(text),
        camel_case: TextCase::Camel.apply(text),
        pascal_case: TextCase::Pascal.apply(text),
        snake_case: TextCase::Snake.apply(text),
        kebab_case: TextCase::Kebab.apply(text),
        sentence_case: TextCase::Sentence.apply(text),
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Alphabet order is fixed regardless of how classes are listed.
    pub const ORDER: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn alphabet(&self) -> &'static str {
        match self {
            CharClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharClass::Numbers => "0123456789",
            CharClass::Symbols => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }
}

/// Concatenate the alphabets of the enabled classes. Duplicated classes
/// contribute once.
pub fn build_alphabet(classes: &[CharClass]) -> Vec<char> {
    CharClass::ORDER
        .iter()
        .filter(|c| classes.contains(c))
        .flat_map(|c| c.alphabet().chars())
        .collect()
}

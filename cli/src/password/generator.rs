use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::config::PasswordConfig;
use crate::error::{Result, ToolError};
use crate::password::charset::{build_alphabet, CharClass};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PasswordSpec {
    pub length: usize,
    pub classes: Vec<CharClass>,
}

impl PasswordSpec {
    pub fn new(length: usize, classes: Vec<CharClass>) -> Self {
        Self { length, classes }
    }

    pub fn from_config(config: &PasswordConfig) -> Self {
        Self::new(config.default_length, config.classes.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak"),
            Strength::Medium => write!(f, "Medium"),
            Strength::Strong => write!(f, "Strong"),
        }
    }
}

/// Strength depends on length only; class mix is not considered.
pub fn strength(length: usize) -> Strength {
    if length < 8 {
        Strength::Weak
    } else if length < 12 {
        Strength::Medium
    } else {
        Strength::Strong
    }
}

/// Draw `spec.length` characters uniformly, with replacement, from the
/// enabled alphabets using `rng`.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    spec: &PasswordSpec,
    bounds: RangeInclusive<usize>,
) -> Result<String> {
    let alphabet = build_alphabet(&spec.classes);
    if alphabet.is_empty() {
        return Err(ToolError::Unsatisfiable(
            "no character classes enabled".to_string(),
        ));
    }
    if !bounds.contains(&spec.length) {
        return Err(ToolError::out_of_range(format!(
            "length {} not in {}..={}",
            spec.length,
            bounds.start(),
            bounds.end()
        )));
    }

    Ok((0..spec.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect())
}

/// Generate with the thread-local CSPRNG and the configured length bounds.
pub fn generate(spec: &PasswordSpec, config: &PasswordConfig) -> Result<String> {
    generate_with(
        &mut rand::thread_rng(),
        spec,
        config.min_length..=config.max_length,
    )
}

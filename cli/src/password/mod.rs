pub mod charset;
pub mod generator;

pub use charset::{build_alphabet, CharClass};
pub use generator::{generate, generate_with, strength, PasswordSpec, Strength};

/// Raw player input as delivered by a presenter.
use serde::{Deserialize, Serialize};

use super::directive::ChoiceId;

/// A keyboard key the router can recognise.
///
/// Letters are normalised to lowercase so `J` and `j` are the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Space,
    Char(char),
}

impl Key {
    /// Build a key from a typed character.
    pub fn from_char(c: char) -> Key {
        match c {
            ' ' => Key::Space,
            '\n' | '\r' => Key::Enter,
            other => Key::Char(other.to_ascii_lowercase()),
        }
    }

    /// Parse a key name as reported by browsers and terminals
    /// (`"Enter"`, `" "`, `"Spacebar"`, `"a"`, `"J"`).
    pub fn parse(name: &str) -> Option<Key> {
        match name {
            "Enter" | "Return" => Some(Key::Enter),
            " " | "Space" | "Spacebar" => Some(Key::Space),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::from_char(c)),
                    _ => None,
                }
            }
        }
    }
}

/// One input event. `Text` comes from the side-channel text box and is
/// trimmed by the router; `Choice` selects a rendered option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Key(Key),
    Text(String),
    Choice(ChoiceId),
}

impl Input {
    pub fn key(c: char) -> Input {
        Input::Key(Key::from_char(c))
    }

    pub fn text(value: impl Into<String>) -> Input {
        Input::Text(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(Key::from_char('J'), Key::Char('j'));
        assert_eq!(Key::parse("A"), Some(Key::Char('a')));
    }

    #[test]
    fn browser_key_names() {
        assert_eq!(Key::parse("Enter"), Some(Key::Enter));
        assert_eq!(Key::parse(" "), Some(Key::Space));
        assert_eq!(Key::parse("Spacebar"), Some(Key::Space));
        assert_eq!(Key::parse("Shift"), None);
        assert_eq!(Key::parse(""), None);
    }
}

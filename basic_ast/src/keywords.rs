use std::fmt::Display;

use phf::phf_map;

/// Reserved words. Matched case-insensitively, so the table keys are lowercase.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kw {
    And,
    Or,
    Xor,
    Not,
    If,
}

impl Kw {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kw::And => "and",
            Kw::Or => "or",
            Kw::Xor => "xor",
            Kw::Not => "not",
            Kw::If => "if",
        }
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, Kw::And | Kw::Or | Kw::Xor | Kw::Not)
    }
}

impl Display for Kw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const KEYWORD: phf::Map<&'static str, Kw> = phf_map! {
    "and" => Kw::And,
    "or" => Kw::Or,
    "xor" => Kw::Xor,
    "not" => Kw::Not,
    "if" => Kw::If,
};

pub fn check_keyword(word: &str) -> Option<Kw> {
    KEYWORD.get(word.to_ascii_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{check_keyword, Kw, KEYWORD};

    #[test]
    fn keyword_any_case() {
        assert_eq!(check_keyword("and"), Some(Kw::And));
        assert_eq!(check_keyword("AND"), Some(Kw::And));
        assert_eq!(check_keyword("And"), Some(Kw::And));
        assert_eq!(check_keyword("xOR"), Some(Kw::Xor));
        assert_eq!(check_keyword("IF"), Some(Kw::If));
    }

    #[test]
    fn near_miss_is_not_keyword() {
        assert_eq!(check_keyword("andx"), None);
        assert_eq!(check_keyword("an"), None);
        assert_eq!(check_keyword(""), None);
    }

    #[test]
    fn table_keys_match_display() {
        for (key, kw) in KEYWORD.entries() {
            assert_eq!(*key, kw.to_string());
        }
    }
}

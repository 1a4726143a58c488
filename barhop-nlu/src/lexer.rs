//! Splits request text into numbers, words and the few symbols the
//! extractors care about.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A run of ASCII digits.
    Number { value: u32, digits: usize },
    /// A lower-cased run of letters, with surrounding apostrophes removed.
    Word(String),
    Colon,
    At,
    /// Any other punctuation; breaks adjacency between neighbours.
    Other,
}

impl Token {
    /// The value of a one- or two-digit number.
    pub(crate) const fn short_number(&self) -> Option<u32> {
        match self {
            Self::Number { value, digits: 1 | 2 } => Some(*value),
            _ => None,
        }
    }

    /// The value of a number of exactly two digits.
    pub(crate) const fn two_digits(&self) -> Option<u32> {
        match self {
            Self::Number { value, digits: 2 } => Some(*value),
            _ => None,
        }
    }

    pub(crate) fn is_word(&self, expected: &str) -> bool {
        matches!(self, Self::Word(word) if word == expected)
    }

    pub(crate) fn word(&self) -> Option<&str> {
        match self {
            Self::Word(word) => Some(word),
            _ => None,
        }
    }
}

pub(crate) fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(&next) = chars.peek() {
        if next.is_ascii_digit() {
            let mut value: u32 = 0;
            let mut digits = 0;
            while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                value = value.saturating_mul(10).saturating_add(digit);
                digits += 1;
                chars.next();
            }
            tokens.push(Token::Number { value, digits });
        } else if next.is_alphabetic() || next == '\'' {
            let mut word = String::new();
            while let Some(&c) = chars.peek().filter(|c| c.is_alphabetic() || **c == '\'') {
                word.extend(c.to_lowercase());
                chars.next();
            }
            let trimmed = word.trim_matches('\'');
            if !trimmed.is_empty() {
                tokens.push(Token::Word(trimmed.to_owned()));
            }
        } else {
            chars.next();
            match next {
                ':' => tokens.push(Token::Colon),
                '@' => tokens.push(Token::At),
                c if c.is_whitespace() => {}
                _ => tokens.push(Token::Other),
            }
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn word(text: &str) -> Token {
        Token::Word(text.to_owned())
    }

    #[rstest]
    fn splits_digits_from_letters() {
        assert_eq!(
            tokenize("9:30PM"),
            vec![
                Token::Number { value: 9, digits: 1 },
                Token::Colon,
                Token::Number { value: 30, digits: 2 },
                word("pm"),
            ]
        );
    }

    #[rstest]
    fn trims_quotes_but_keeps_possessives() {
        assert_eq!(
            tokenize("'Chimy's' @ 10!"),
            vec![
                word("chimy's"),
                Token::At,
                Token::Number { value: 10, digits: 2 },
                Token::Other,
            ]
        );
    }

    #[rstest]
    fn long_numbers_saturate() {
        assert_eq!(
            tokenize("99999999999"),
            vec![Token::Number { value: u32::MAX, digits: 11 }]
        );
    }
}

//! Tokenizer for raw command lines.
//!
//! Splits a line on runs of whitespace and classifies each piece by shape:
//! `--name=value`, `--name`, `-x`, or a plain word. There is no quoting or
//! escaping; a quote character is an ordinary character. Shapes that look
//! almost like options (`-`, `--`, `-ab`, `--=value`) degrade to plain
//! words rather than erroring, so the tokenizer never rejects a line.

/// A token parsed from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A plain word: command-name candidate or positional value.
    Word(String),
    /// A short option (`-x`).
    Short(char),
    /// A long option without an attached value (`--name`).
    Long(String),
    /// A long option with an attached value (`--name=value`).
    LongWithValue {
        /// Text between `--` and the first `=`.
        name: String,
        /// Text after the first `=`. May be empty (`--name=`).
        value: String,
    },
}

impl Token {
    /// Returns the token as a plain word if it is one.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(s) => Some(s),
            _ => None,
        }
    }

    /// True for any option-shaped token.
    ///
    /// The option matcher uses this to decide whether the token following a
    /// value-taking option may be consumed as its value.
    pub fn is_option_shaped(&self) -> bool {
        !matches!(self, Token::Word(_))
    }

    /// Reconstructs the raw text of this token.
    ///
    /// Classification is lossless, so a token that matched nothing can fall
    /// through to the parameter binder under its original spelling.
    pub fn raw(&self) -> String {
        match self {
            Token::Word(s) => s.clone(),
            Token::Short(c) => format!("-{c}"),
            Token::Long(name) => format!("--{name}"),
            Token::LongWithValue { name, value } => format!("--{name}={value}"),
        }
    }
}

/// Tokenizes a raw input line.
///
/// An empty line, or a line of pure whitespace, yields an empty vector;
/// the caller reports that as a no-op rather than an error.
pub fn tokenize(input: &str) -> Vec<Token> {
    input.split_whitespace().map(classify).collect()
}

/// Classifies one whitespace-delimited piece by its shape.
fn classify(piece: &str) -> Token {
    if let Some(rest) = piece.strip_prefix("--") {
        if rest.is_empty() {
            // Bare "--" carries no name
            return Token::Word(piece.to_string());
        }
        return match rest.split_once('=') {
            Some(("", _)) => Token::Word(piece.to_string()),
            Some((name, value)) => Token::LongWithValue {
                name: name.to_string(),
                value: value.to_string(),
            },
            None => Token::Long(rest.to_string()),
        };
    }

    if let Some(rest) = piece.strip_prefix('-') {
        let mut chars = rest.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Token::Short(c);
        }
        // "-" alone or "-ab": not a short option shape
        return Token::Word(piece.to_string());
    }

    Token::Word(piece.to_string())
}

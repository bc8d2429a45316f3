//! Parser configuration.

/// Default for [`ParseOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// How numeric literal lexemes are converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberLiterals {
    /// Like C `strtod` restricted to decimal literals: the longest valid
    /// leading decimal prefix is used, and `0` when there is none. Hex floats,
    /// `inf` and `nan` are not recognised. Never fails.
    #[default]
    Lenient,
    /// The whole lexeme must be a float literal, otherwise `NumberParseError`.
    Strict,
}

/// Options fixed for the lifetime of a [`Parser`](super::parser::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub number_literals: NumberLiterals,
    /// Deepest allowed nesting of `parse_expr` calls. Every prefix operator,
    /// bracket, parenthesis and ternary branch opens one level.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            number_literals: NumberLiterals::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        ParseOptions {
            number_literals: NumberLiterals::Strict,
            ..ParseOptions::default()
        }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        ParseOptions { max_depth, ..self }
    }
}

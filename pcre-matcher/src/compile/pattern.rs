use std::fmt;
use std::str::FromStr;

use crate::compile::{Bsr, Flags, Newline};
use crate::Error;

/// The pattern with its compile time options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// The expression to parse.
    pub expression: String,
    /// Flags which modify the behaviour of the expression.
    pub flags: Flags,
    /// The newline convention, or the engine's build default.
    pub newline: Option<Newline>,
    /// What `\R` matches, or the engine's build default.
    pub bsr: Option<Bsr>,
}

impl Pattern {
    /// Construct a pattern with expression.
    pub fn new<S: Into<String>>(expr: S) -> Pattern {
        Self::with_flags(expr, Flags::empty())
    }

    /// Construct a pattern with expression and flags.
    pub fn with_flags<S: Into<String>>(expr: S, flags: Flags) -> Pattern {
        Pattern {
            expression: expr.into(),
            flags,
            newline: None,
            bsr: None,
        }
    }

    /// Set case-insensitive matching.
    pub fn caseless(mut self) -> Self {
        self.flags |= Flags::CASELESS;
        self
    }

    /// Matching a `.` will not exclude newlines.
    pub fn dot_all(mut self) -> Self {
        self.flags |= Flags::DOTALL;
        self
    }

    /// Set multi-line anchoring.
    pub fn multi_line(mut self) -> Self {
        self.flags |= Flags::MULTILINE;
        self
    }

    /// Ignore whitespace and comments in the expression.
    pub fn extended(mut self) -> Self {
        self.flags |= Flags::EXTENDED;
        self
    }

    /// Enable UTF-8 mode for this expression.
    pub fn utf(mut self) -> Self {
        self.flags |= Flags::UTF;
        self
    }

    /// Enable Unicode property support for this expression.
    pub fn ucp(mut self) -> Self {
        self.flags |= Flags::UCP;
        self
    }

    /// Set the newline convention.
    pub fn newline(mut self, newline: Newline) -> Self {
        self.newline = Some(newline);
        self
    }

    /// Set what `\R` matches.
    pub fn bsr(mut self, bsr: Bsr) -> Self {
        self.bsr = Some(bsr);
        self
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flags.is_empty() {
            write!(f, "{}", self.expression)
        } else {
            write!(f, "/{}/{}", self.expression, self.flags)
        }
    }
}

impl FromStr for Pattern {
    type Err = Error;

    /// Parses either a bare expression or the `/expression/flags` notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern = match (s.starts_with('/'), s.rfind('/')) {
            (true, Some(end)) if end > 0 => Pattern::with_flags(&s[1..end], s[end + 1..].parse()?),
            _ => Pattern::new(s),
        };

        debug!("pattern `{}` parsed to `{:?}`", s, pattern);

        Ok(pattern)
    }
}

/// Define `Pattern` with flags
#[macro_export]
macro_rules! pattern {
    ($expr:expr) => {{
        $crate::Pattern::new($expr)
    }};
    ($expr:expr; $($flag:ident)|+) => {{
        $crate::Pattern::with_flags($expr, $($crate::Flags::$flag)|+)
    }};
    ($expr:expr, flags => $flags:expr) => {{
        $crate::Pattern::with_flags($expr, $flags)
    }};
}

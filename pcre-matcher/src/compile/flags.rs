use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::{ffi, Error};

bitflags! {
    /// Pattern flags
    #[derive(Default)]
    pub struct Flags: u32 {
        /// Set case-insensitive matching.
        const CASELESS = ffi::PCRE2_CASELESS;
        /// Set multi-line anchoring.
        const MULTILINE = ffi::PCRE2_MULTILINE;
        /// Matching a `.` will not exclude newlines.
        const DOTALL = ffi::PCRE2_DOTALL;
        /// Ignore unescaped whitespace and `#` comments in the pattern.
        const EXTENDED = ffi::PCRE2_EXTENDED;
        /// Allow several groups to share a name.
        const DUPNAMES = ffi::PCRE2_DUPNAMES;
        /// An unanchored match must start before or at the first newline.
        const FIRSTLINE = ffi::PCRE2_FIRSTLINE;
        /// ECMAScript compatible handling of `\U`, `\u` and `\x`.
        const ALT_BSUX = ffi::PCRE2_ALT_BSUX;
        /// Plain parentheses do not capture; named groups still do.
        const NO_AUTO_CAPTURE = ffi::PCRE2_NO_AUTO_CAPTURE;
        /// Invert the greediness of quantifiers.
        const UNGREEDY = ffi::PCRE2_UNGREEDY;
        /// Treat the pattern and subjects as UTF-8.
        const UTF = ffi::PCRE2_UTF;
        /// Use Unicode properties for `\d`, `\w` and friends.
        const UCP = ffi::PCRE2_UCP;
        /// `$` matches only at the very end of the subject.
        const DOLLAR_ENDONLY = ffi::PCRE2_DOLLAR_ENDONLY;
        /// Disable the start-of-match optimizations.
        const NO_START_OPTIMIZE = ffi::PCRE2_NO_START_OPTIMIZE;
        /// Force the pattern to be anchored.
        const ANCHORED = ffi::PCRE2_ANCHORED;
    }
}

const LETTERS: &[(char, Flags)] = &[
    ('i', Flags::CASELESS),
    ('m', Flags::MULTILINE),
    ('s', Flags::DOTALL),
    ('x', Flags::EXTENDED),
    ('J', Flags::DUPNAMES),
    ('f', Flags::FIRSTLINE),
    ('B', Flags::ALT_BSUX),
    ('n', Flags::NO_AUTO_CAPTURE),
    ('U', Flags::UNGREEDY),
    ('u', Flags::UTF),
    ('W', Flags::UCP),
    ('D', Flags::DOLLAR_ENDONLY),
    ('S', Flags::NO_START_OPTIMIZE),
    ('A', Flags::ANCHORED),
];

impl FromStr for Flags {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::empty();

        for c in s.chars() {
            match LETTERS.iter().find(|&&(letter, _)| letter == c) {
                Some(&(_, flag)) => flags |= flag,
                None => return Err(Error::InvalidFlag(c)),
            }
        }

        Ok(flags)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &(letter, flag) in LETTERS {
            if self.contains(flag) {
                write!(f, "{}", letter)?
            }
        }
        Ok(())
    }
}

/// The character sequence that terminates a line.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Newline {
    /// Any Unicode line ending sequence.
    Any = ffi::PCRE2_NEWLINE_ANY,
    /// Carriage return only.
    Cr = ffi::PCRE2_NEWLINE_CR,
    /// Linefeed only.
    Lf = ffi::PCRE2_NEWLINE_LF,
    /// Carriage return followed by linefeed.
    Crlf = ffi::PCRE2_NEWLINE_CRLF,
    /// Any of CR, LF or CRLF.
    AnyCrlf = ffi::PCRE2_NEWLINE_ANYCRLF,
    /// The NUL character.
    Nul = ffi::PCRE2_NEWLINE_NUL,
}

/// What `\R` matches.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bsr {
    /// Any Unicode line ending sequence.
    Unicode = ffi::PCRE2_BSR_UNICODE,
    /// Only CR, LF or CRLF.
    AnyCrlf = ffi::PCRE2_BSR_ANYCRLF,
}

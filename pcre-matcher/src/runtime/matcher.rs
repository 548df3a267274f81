use std::fmt;
use std::ptr;

use foreign_types::ForeignType;

use crate::error::{AsResult, Exec};
use crate::runtime::{match_data::MatchData, Captures, Match, MatchFlags, Subject};
use crate::{ffi, CompiledPattern, NotFound, Result};

/// Gives the engine a dereferenceable base address for empty subjects.
static PLACEHOLDER: [u8; 1] = [0];

/// The result of the last match attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No attempt since the matcher was created or rebound.
    NoAttempt,
    /// The pattern matched.
    Matched,
    /// The pattern did not match.
    NotMatched,
    /// The subject ended while the pattern could still have matched.
    ///
    /// Only reported when `MatchFlags::PARTIAL_SOFT` or `MatchFlags::PARTIAL_HARD` is given.
    PartiallyMatched,
}

impl Outcome {
    /// Returns true for a complete or partial match.
    pub fn matches(self) -> bool {
        matches!(self, Outcome::Matched | Outcome::PartiallyMatched)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::NoAttempt
    }
}

/// Reusable match state: a capture buffer bound to a pattern, and the last subject.
///
/// Reusing a matcher avoids reallocating its buffer, so keep one per worker.
/// Every attempt takes `&mut self`, so one matcher can never be used from two
/// threads at once; the `CompiledPattern` itself can be shared freely.
///
/// `'s` is the lifetime of the subjects; group views borrow from them.
pub struct Matcher<'s> {
    pattern: CompiledPattern,
    data: MatchData,
    subject: Subject<'s>,
    outcome: Outcome,
    pairs: usize,
}

impl fmt::Debug for Matcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("pattern", &self.pattern)
            .field("outcome", &self.outcome)
            .field("captures", &self.captures())
            .finish()
    }
}

impl CompiledPattern {
    /// Returns a new matcher with the given subject, after one match attempt.
    pub fn matcher<'s, S>(&self, subject: S, flags: MatchFlags) -> Result<Matcher<'s>>
    where
        S: Into<Subject<'s>>,
    {
        let mut m = Matcher::new(self)?;

        m.exec(subject, flags)?;

        Ok(m)
    }
}

impl<'s> Matcher<'s> {
    /// Returns a matcher bound to the pattern, with no attempt made yet.
    pub fn new(pattern: &CompiledPattern) -> Result<Matcher<'s>> {
        Ok(Matcher {
            pattern: pattern.clone(),
            data: MatchData::alloc(pattern)?,
            subject: Subject::default(),
            outcome: Outcome::NoAttempt,
            pairs: 0,
        })
    }

    /// Switches the matcher to the pattern and subject, then attempts a match.
    ///
    /// The capture buffer is kept when `pattern` is the one already bound.
    pub fn reset<S>(&mut self, pattern: &CompiledPattern, subject: S, flags: MatchFlags) -> Result<bool>
    where
        S: Into<Subject<'s>>,
    {
        self.bind(pattern)?;
        self.exec(subject, flags)
    }

    fn bind(&mut self, pattern: &CompiledPattern) -> Result<()> {
        self.outcome = Outcome::NoAttempt;
        self.pairs = 0;

        if self.pattern.is_same(pattern) {
            return Ok(());
        }

        self.data = MatchData::alloc(pattern)?;
        self.pattern = pattern.clone();

        debug!("matcher rebound to `{}` with {} groups", pattern, pattern.groups());

        Ok(())
    }

    /// Tries to match the subject against the bound pattern.
    ///
    /// Returns true on a complete or partial match. An engine return code other than
    /// match, no match or partial match is an `Error::Engine`, and leaves the matcher
    /// with no readable result.
    pub fn exec<S>(&mut self, subject: S, flags: MatchFlags) -> Result<bool>
    where
        S: Into<Subject<'s>>,
    {
        let subject = subject.into();
        let bytes = subject.as_bytes();
        let base = if bytes.is_empty() {
            PLACEHOLDER.as_ptr()
        } else {
            bytes.as_ptr()
        };

        self.subject = subject;
        self.outcome = Outcome::NoAttempt;
        self.pairs = 0;

        let rc = unsafe {
            ffi::pcre2_match_8(
                self.pattern.as_ptr(),
                base,
                bytes.len(),
                0,
                flags.bits(),
                self.data.as_ptr(),
                ptr::null_mut(),
            )
        };

        match rc.ok() {
            Ok(Exec::Matched(pairs)) => {
                self.outcome = Outcome::Matched;
                self.pairs = pairs;
            }
            Ok(Exec::NotMatched) => self.outcome = Outcome::NotMatched,
            Ok(Exec::Partial) => {
                self.outcome = Outcome::PartiallyMatched;
                self.pairs = 1;
            }
            Err(err) => {
                warn!("matching `{}` against {} bytes failed: {}", self.pattern, bytes.len(), err);

                return Err(err);
            }
        }

        trace!(
            "matching `{}` against {} bytes: {:?}",
            self.pattern,
            bytes.len(),
            self.outcome
        );

        Ok(self.outcome.matches())
    }

    /// Returns the result of the last attempt.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the bound pattern.
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// Returns the subject of the last attempt.
    pub fn subject(&self) -> Subject<'s> {
        self.subject
    }

    /// Returns a view of the last attempt's groups.
    ///
    /// The view borrows the matcher, so it cannot outlive the next attempt.
    pub fn captures(&self) -> Captures<'_, 's> {
        Captures {
            pattern: &self.pattern,
            ovector: self.data.ovector(),
            pairs: self.pairs,
            subject: self.subject,
            outcome: self.outcome,
        }
    }

    /// Returns true if the last attempt matched, completely or partially.
    pub fn matches(&self) -> bool {
        self.outcome.matches()
    }

    /// Returns true if the last attempt was a partial match.
    pub fn is_partial(&self) -> bool {
        self.outcome == Outcome::PartiallyMatched
    }

    /// Returns the number of capture groups of the bound pattern.
    pub fn groups(&self) -> usize {
        self.pattern.groups()
    }

    /// Returns true if the numbered group is present in the last match.
    /// Group numbers start at 1; a present group can match the empty string.
    pub fn present(&self, group: usize) -> bool {
        self.captures().present(group)
    }

    /// Returns the numbered group of the last match, `None` if it is absent.
    ///
    /// Group 0 is the part of the subject which matches the whole pattern.
    pub fn group(&self, group: usize) -> Option<Match<'s>> {
        self.captures().get(group)
    }

    /// Returns the numbered group as bytes.
    pub fn group_bytes(&self, group: usize) -> Option<&'s [u8]> {
        self.captures().get_bytes(group)
    }

    /// Returns the numbered group as a string.
    pub fn group_str(&self, group: usize) -> Result<Option<&'s str>> {
        self.captures().get_str(group)
    }

    /// Returns true if the named group is present in the last match.
    pub fn named_present(&self, name: &str) -> std::result::Result<bool, NotFound> {
        self.captures().name_present(name)
    }

    /// Returns the named group of the last match, `None` if it is absent.
    pub fn named(&self, name: &str) -> std::result::Result<Option<Match<'s>>, NotFound> {
        self.captures().name(name)
    }

    /// Returns the named group as a string.
    pub fn named_str(&self, name: &str) -> Result<Option<&'s str>> {
        self.captures().name_str(name)
    }
}

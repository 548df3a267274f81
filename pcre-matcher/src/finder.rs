//! Find and replace built on repeated single-match attempts.
use std::ops::Range;

use crate::runtime::{Match, MatchFlags, Matcher, Outcome, Subject};
use crate::{CompiledPattern, Result};

impl<'s> Matcher<'s> {
    /// Returns the byte range of the first match in the subject.
    pub fn find_index<S>(&mut self, subject: S, flags: MatchFlags) -> Result<Option<Range<usize>>>
    where
        S: Into<Subject<'s>>,
    {
        self.exec(subject, flags)?;

        Ok(self.group(0).map(|m| m.range()))
    }

    /// Returns every group of the first match in index order, group 0 first.
    pub fn extract_all<S>(&mut self, subject: S, flags: MatchFlags) -> Result<Option<Vec<Option<Match<'s>>>>>
    where
        S: Into<Subject<'s>>,
    {
        if self.exec(subject, flags)? {
            Ok(Some(self.captures().iter().collect()))
        } else {
            Ok(None)
        }
    }

    /// Returns the range of each successive non-overlapping match.
    pub fn find_iter<S>(&mut self, subject: S, flags: MatchFlags) -> Result<Vec<Range<usize>>>
    where
        S: Into<Subject<'s>>,
    {
        let mut matched = vec![];

        self.scan(subject.into(), flags, |range, _| matched.push(range))?;

        Ok(matched)
    }

    /// Replaces every non-overlapping match with the literal replacement.
    ///
    /// An empty match keeps the following character and scanning resumes after it.
    ///
    /// Fails with `Error::Utf8` when a pattern compiled without UTF mode matches
    /// part of a multi-byte character, leaving the output invalid UTF-8.
    pub fn replace_all(&mut self, subject: &'s str, replacement: &str, flags: MatchFlags) -> Result<String> {
        let out = self.replace(Subject::Str(subject), replacement.as_bytes(), flags)?;

        String::from_utf8(out).map_err(|err| err.utf8_error().into())
    }

    /// Replaces every non-overlapping match with the literal replacement.
    ///
    /// An empty match keeps the following byte and scanning resumes after it.
    pub fn replace_all_bytes(&mut self, subject: &'s [u8], replacement: &[u8], flags: MatchFlags) -> Result<Vec<u8>> {
        self.replace(Subject::Bytes(subject), replacement, flags)
    }

    fn replace(&mut self, subject: Subject<'s>, replacement: &[u8], flags: MatchFlags) -> Result<Vec<u8>> {
        let bytes = subject.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut last = 0;

        let rest = self.scan(subject, flags, |range, next| {
            out.extend_from_slice(&bytes[last..range.start]);
            out.extend_from_slice(replacement);
            out.extend_from_slice(&bytes[range.end..next]);
            last = next;
        })?;

        debug_assert_eq!(rest, last);

        out.extend_from_slice(&bytes[last..]);

        Ok(out)
    }

    /// Matches the unscanned tail of the subject until no match remains.
    ///
    /// The empty tail left after the last unit is tried once too; an empty match
    /// there ends the scan. `on_match` receives the match range and the offset
    /// where scanning resumes, both relative to the whole subject. Returns the
    /// offset of the unscanned remainder.
    fn scan<F>(&mut self, subject: Subject<'s>, flags: MatchFlags, mut on_match: F) -> Result<usize>
    where
        F: FnMut(Range<usize>, usize),
    {
        let mut pos = 0;

        loop {
            self.exec(subject.tail(pos), flags)?;

            let range = match self.group(0) {
                Some(m) if self.outcome() == Outcome::Matched => pos + m.start()..pos + m.end(),
                _ => break,
            };
            let at_end = range.start == subject.len();
            let next = if range.start == range.end {
                range.end + subject.unit_at(range.end)
            } else {
                range.end
            };

            on_match(range, next);

            pos = next;

            if at_end {
                break;
            }
        }

        Ok(pos)
    }
}

impl CompiledPattern {
    /// Returns true if and only if the pattern matches the subject.
    pub fn is_match<'s, S>(&self, subject: S, flags: MatchFlags) -> Result<bool>
    where
        S: Into<Subject<'s>>,
    {
        Matcher::new(self)?.exec(subject, flags)
    }

    /// Returns the byte range of the first match in the subject.
    pub fn find_index<'s, S>(&self, subject: S, flags: MatchFlags) -> Result<Option<Range<usize>>>
    where
        S: Into<Subject<'s>>,
    {
        Matcher::new(self)?.find_index(subject, flags)
    }

    /// Returns every group of the first match in index order, group 0 first.
    pub fn extract_all<'s, S>(&self, subject: S, flags: MatchFlags) -> Result<Option<Vec<Option<Match<'s>>>>>
    where
        S: Into<Subject<'s>>,
    {
        Matcher::new(self)?.extract_all(subject, flags)
    }

    /// Returns the range of each successive non-overlapping match.
    pub fn find_iter<'s, S>(&self, subject: S, flags: MatchFlags) -> Result<Vec<Range<usize>>>
    where
        S: Into<Subject<'s>>,
    {
        Matcher::new(self)?.find_iter(subject, flags)
    }

    /// Replaces every non-overlapping match with the literal replacement.
    ///
    /// Fails with `Error::Utf8` when the result is not valid UTF-8.
    pub fn replace_all(&self, subject: &str, replacement: &str, flags: MatchFlags) -> Result<String> {
        Matcher::new(self)?.replace_all(subject, replacement, flags)
    }

    /// Replaces every non-overlapping match with the literal replacement.
    pub fn replace_all_bytes(&self, subject: &[u8], replacement: &[u8], flags: MatchFlags) -> Result<Vec<u8>> {
        Matcher::new(self)?.replace_all_bytes(subject, replacement, flags)
    }
}

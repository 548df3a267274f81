use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Index, Range};
use std::str;

use crate::runtime::{match_data::UNSET, Outcome};
use crate::{CompiledPattern, NotFound, Result};

/// The subject of a match, borrowed in the form the caller supplied it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subject<'s> {
    /// A byte slice.
    Bytes(&'s [u8]),
    /// A string slice.
    Str(&'s str),
}

impl<'s> Subject<'s> {
    /// Returns the subject bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'s [u8] {
        match *self {
            Subject::Bytes(bytes) => bytes,
            Subject::Str(text) => text.as_bytes(),
        }
    }

    /// Returns the subject length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns true if the subject is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The subject from `pos` onwards; a string split inside a character degrades to bytes.
    pub(crate) fn tail(&self, pos: usize) -> Subject<'s> {
        match *self {
            Subject::Str(text) => text
                .get(pos..)
                .map(Subject::Str)
                .unwrap_or_else(|| Subject::Bytes(&text.as_bytes()[pos..])),
            Subject::Bytes(bytes) => Subject::Bytes(&bytes[pos..]),
        }
    }

    /// Length of the subject unit starting at `pos`: a character for strings, a byte otherwise.
    pub(crate) fn unit_at(&self, pos: usize) -> usize {
        match *self {
            _ if pos >= self.len() => 0,
            Subject::Str(text) => text
                .get(pos..)
                .and_then(|rest| rest.chars().next())
                .map_or(1, char::len_utf8),
            Subject::Bytes(_) => 1,
        }
    }
}

impl Default for Subject<'_> {
    fn default() -> Self {
        Subject::Bytes(&[])
    }
}

impl<'s> From<&'s [u8]> for Subject<'s> {
    fn from(bytes: &'s [u8]) -> Self {
        Subject::Bytes(bytes)
    }
}

impl<'s, const N: usize> From<&'s [u8; N]> for Subject<'s> {
    fn from(bytes: &'s [u8; N]) -> Self {
        Subject::Bytes(bytes)
    }
}

impl<'s> From<&'s Vec<u8>> for Subject<'s> {
    fn from(bytes: &'s Vec<u8>) -> Self {
        Subject::Bytes(bytes)
    }
}

impl<'s> From<&'s str> for Subject<'s> {
    fn from(text: &'s str) -> Self {
        Subject::Str(text)
    }
}

impl<'s> From<&'s String> for Subject<'s> {
    fn from(text: &'s String) -> Self {
        Subject::Str(text)
    }
}

/// Match represents a single capture group of a successful match.
///
/// The lifetime parameter `'s` refers to the lifetime of the subject.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Match<'s> {
    subject: Subject<'s>,
    start: usize,
    end: usize,
}

impl<'s> Match<'s> {
    /// Returns the starting byte offset of the match in the subject.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the ending byte offset of the match in the subject.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the range over the starting and ending byte offsets of the match in the subject.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the length of the match in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the group participated in the match but matched nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the matched bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'s [u8] {
        &self.subject.as_bytes()[self.range()]
    }

    /// Returns the matched text without copying it.
    ///
    /// Fails if the range does not hold valid UTF-8, which can only happen
    /// for byte subjects or for patterns compiled without UTF mode.
    pub fn as_str(&self) -> Result<&'s str> {
        if let Subject::Str(text) = self.subject {
            if let Some(s) = text.get(self.range()) {
                return Ok(s);
            }
        }

        Ok(str::from_utf8(self.as_bytes())?)
    }
}

impl fmt::Debug for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("bytes", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

impl<'s> From<Match<'s>> for Range<usize> {
    fn from(m: Match<'s>) -> Range<usize> {
        m.range()
    }
}

impl<'s> From<Match<'s>> for &'s [u8] {
    fn from(m: Match<'s>) -> &'s [u8] {
        m.as_bytes()
    }
}

/// A read-only view of a matcher's last attempt.
///
/// Every group is in exactly one of three states: absent (`None`), present and empty,
/// or present and non-empty. After a partial match only group 0 is present.
///
/// `'m` is the lifetime of the borrowed matcher and `'s` the lifetime of the subject.
#[derive(Clone, Copy)]
pub struct Captures<'m, 's> {
    pub(crate) pattern: &'m CompiledPattern,
    pub(crate) ovector: &'m [usize],
    pub(crate) pairs: usize,
    pub(crate) subject: Subject<'s>,
    pub(crate) outcome: Outcome,
}

impl<'m, 's> Captures<'m, 's> {
    /// Returns true if the last attempt matched, completely or partially.
    pub fn matches(&self) -> bool {
        self.outcome.matches()
    }

    /// Returns true if the last attempt was a partial match.
    pub fn is_partial(&self) -> bool {
        self.outcome == Outcome::PartiallyMatched
    }

    /// Returns the number of capture groups of the bound pattern, not counting group 0.
    pub fn groups(&self) -> usize {
        self.pattern.groups()
    }

    /// Returns the number of groups including group 0.
    pub fn len(&self) -> usize {
        self.groups() + 1
    }

    /// Returns true if the numbered group took part in the last match.
    ///
    /// A present group may still have matched the empty string.
    pub fn present(&self, i: usize) -> bool {
        self.offsets(i).is_some()
    }

    fn offsets(&self, i: usize) -> Option<(usize, usize)> {
        if !self.matches() || i >= self.pairs {
            return None;
        }

        match (self.ovector.get(2 * i), self.ovector.get(2 * i + 1)) {
            (Some(&start), Some(&end)) if start != UNSET && end != UNSET => Some((start, end)),
            _ => None,
        }
    }

    /// Returns the numbered group, `None` if it is absent.
    ///
    /// Group 0 is the part of the subject which matched the whole pattern.
    pub fn get(&self, i: usize) -> Option<Match<'s>> {
        self.offsets(i).map(|(start, end)| Match {
            subject: self.subject,
            start,
            end,
        })
    }

    /// Returns the bytes of the numbered group.
    pub fn get_bytes(&self, i: usize) -> Option<&'s [u8]> {
        self.get(i).map(|m| m.as_bytes())
    }

    /// Returns the text of the numbered group.
    pub fn get_str(&self, i: usize) -> Result<Option<&'s str>> {
        self.get(i).map(|m| m.as_str()).transpose()
    }

    fn index_of(&self, name: &str) -> std::result::Result<usize, NotFound> {
        self.pattern.names().get(name).ok_or_else(|| NotFound(name.to_owned()))
    }

    /// Returns true if the named group took part in the last match.
    pub fn name_present(&self, name: &str) -> std::result::Result<bool, NotFound> {
        self.index_of(name).map(|i| self.present(i))
    }

    /// Returns the named group, `None` if it is absent.
    pub fn name(&self, name: &str) -> std::result::Result<Option<Match<'s>>, NotFound> {
        self.index_of(name).map(|i| self.get(i))
    }

    /// Returns the text of the named group.
    pub fn name_str(&self, name: &str) -> Result<Option<&'s str>> {
        self.get_str(self.index_of(name)?)
    }

    /// An iterator over every group in index order, group 0 first.
    pub fn iter(&self) -> SubCaptures<'m, 's> {
        SubCaptures {
            caps: *self,
            range: 0..self.len(),
        }
    }
}

impl fmt::Debug for Captures<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'m, 's> IntoIterator for &Captures<'m, 's> {
    type Item = Option<Match<'s>>;
    type IntoIter = SubCaptures<'m, 's>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Get a group by index.
///
/// # Panics
///
/// If the group is absent.
impl Index<usize> for Captures<'_, '_> {
    type Output = [u8];

    fn index(&self, i: usize) -> &[u8] {
        self.get_bytes(i)
            .unwrap_or_else(|| panic!("no group at index '{}'", i))
    }
}

/// Get a group by name.
///
/// # Panics
///
/// If the name is unknown or the group is absent.
impl<'i> Index<&'i str> for Captures<'_, '_> {
    type Output = [u8];

    fn index(&self, name: &'i str) -> &[u8] {
        match self.name(name) {
            Ok(Some(m)) => m.as_bytes(),
            _ => panic!("no group named '{}'", name),
        }
    }
}

/// An iterator over the groups of a single match, absent groups yield `None`.
pub struct SubCaptures<'m, 's> {
    caps: Captures<'m, 's>,
    range: Range<usize>,
}

impl<'m, 's> Iterator for SubCaptures<'m, 's> {
    type Item = Option<Match<'s>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|i| self.caps.get(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for SubCaptures<'_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(|i| self.caps.get(i))
    }
}

impl ExactSizeIterator for SubCaptures<'_, '_> {}

impl FusedIterator for SubCaptures<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_units() {
        let subject = Subject::from("añb");

        assert_eq!(subject.len(), 4);
        assert_eq!(subject.unit_at(0), 1);
        assert_eq!(subject.unit_at(1), 2);
        assert_eq!(subject.unit_at(2), 1);
        assert_eq!(subject.unit_at(4), 0);
        assert_eq!(subject.tail(1), Subject::Str("ñb"));
        assert_eq!(subject.tail(2), Subject::Bytes(&b"\xb1b"[..]));

        let subject = Subject::from(&b"a\xc3\xb1"[..]);

        assert_eq!(subject.unit_at(1), 1);
        assert_eq!(subject.tail(3), Subject::Bytes(&[]));
    }

    #[test]
    fn test_match_views() {
        let m = Match {
            subject: Subject::from("hello world"),
            start: 6,
            end: 11,
        };

        assert_eq!(m.range(), 6..11);
        assert_eq!(m.len(), 5);
        assert!(!m.is_empty());
        assert_eq!(m.as_bytes(), b"world");
        assert_eq!(m.as_str().unwrap(), "world");

        let m = Match {
            subject: Subject::from(&b"\xff\xfe"[..]),
            start: 0,
            end: 2,
        };

        assert!(m.as_str().is_err());

        let m = Match {
            subject: Subject::from("abc"),
            start: 1,
            end: 1,
        };

        assert!(m.is_empty());
        assert_eq!(m.as_str().unwrap(), "");
    }
}

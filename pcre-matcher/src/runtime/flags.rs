use bitflags::bitflags;

use crate::ffi;

bitflags! {
    /// Match time flags
    #[derive(Default)]
    pub struct MatchFlags: u32 {
        /// The match must start at the first byte of the subject.
        const ANCHORED = ffi::PCRE2_ANCHORED;
        /// The match must end at the last byte of the subject.
        const ENDANCHORED = ffi::PCRE2_ENDANCHORED;
        /// The subject start is not the beginning of a line.
        const NOTBOL = ffi::PCRE2_NOTBOL;
        /// The subject end is not the end of a line.
        const NOTEOL = ffi::PCRE2_NOTEOL;
        /// An empty string is not a valid match.
        const NOTEMPTY = ffi::PCRE2_NOTEMPTY;
        /// An empty string at the start of the subject is not a valid match.
        const NOTEMPTY_ATSTART = ffi::PCRE2_NOTEMPTY_ATSTART;
        /// Skip the UTF validity check of the subject.
        const NO_UTF_CHECK = ffi::PCRE2_NO_UTF_CHECK;
        /// Report a partial match in preference to a complete one.
        const PARTIAL_HARD = ffi::PCRE2_PARTIAL_HARD;
        /// Report a partial match only when no complete match exists.
        const PARTIAL_SOFT = ffi::PCRE2_PARTIAL_SOFT;
    }
}

use std::ptr;
use std::slice;

use foreign_types::{foreign_type, ForeignType, ForeignTypeRef};

use crate::{common::CompiledPattern, ffi, Error, Result};

/// Start or end offset of a group that did not participate in the match.
pub(crate) const UNSET: usize = !0;

foreign_type! {
    /// The capture-offset buffer the engine writes into.
    pub(crate) unsafe type MatchData: Send {
        type CType = ffi::pcre2_match_data_8;

        fn drop = free_match_data;
    }
}

unsafe fn free_match_data(data: *mut ffi::pcre2_match_data_8) {
    ffi::pcre2_match_data_free_8(data)
}

impl MatchData {
    /// Allocate a buffer with one start/end pair per group of the pattern, plus group 0.
    pub(crate) fn alloc(pattern: &CompiledPattern) -> Result<MatchData> {
        let pairs = pattern.groups() + 1;
        let p = unsafe { ffi::pcre2_match_data_create_8(pairs as u32, ptr::null_mut()) };

        if p.is_null() {
            Err(Error::NoMem)
        } else {
            trace!("allocated {} offset pairs for `{}`", pairs, pattern);

            Ok(unsafe { MatchData::from_ptr(p) })
        }
    }
}

impl MatchDataRef {
    /// The flat offset vector, `[start0, end0, start1, end1, ...]`.
    pub(crate) fn ovector(&self) -> &[usize] {
        unsafe {
            let n = ffi::pcre2_get_ovector_count_8(self.as_ptr()) as usize;
            let p = ffi::pcre2_get_ovector_pointer_8(self.as_ptr());

            slice::from_raw_parts(p, n * 2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_data() {
        let re = CompiledPattern::new("(a)(b)?").unwrap();
        let data = MatchData::alloc(&re).unwrap();

        assert_eq!(data.ovector().len(), 6);
    }
}

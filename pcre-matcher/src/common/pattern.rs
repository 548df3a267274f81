use std::fmt;
use std::mem::MaybeUninit;
use std::slice;
use std::str::FromStr;
use std::sync::Arc;

use foreign_types::{foreign_type, ForeignTypeRef};

use crate::common::NamedGroupTable;
use crate::compile::{Builder, Pattern};
use crate::error::error_message;
use crate::{ffi, Error, Result};

foreign_type! {
    /// A compiled pattern owned by the engine's allocator.
    pub(crate) unsafe type Code: Send + Sync {
        type CType = ffi::pcre2_code_8;

        fn drop = free_code;
    }
}

unsafe fn free_code(code: *mut ffi::pcre2_code_8) {
    ffi::pcre2_code_free_8(code)
}

impl CodeRef {
    /// Query a piece of pattern metadata.
    fn info<T>(&self, what: u32) -> Result<T> {
        let mut value = MaybeUninit::<T>::uninit();

        let rc = unsafe { ffi::pcre2_pattern_info_8(self.as_ptr(), what, value.as_mut_ptr() as *mut _) };

        if rc == 0 {
            Ok(unsafe { value.assume_init() })
        } else {
            Err(Error::Engine {
                code: rc,
                message: error_message(rc),
            })
        }
    }

    fn names(&self) -> Result<NamedGroupTable> {
        let count = self.info::<u32>(ffi::PCRE2_INFO_NAMECOUNT)? as usize;

        if count == 0 {
            return Ok(NamedGroupTable::default());
        }

        let entry_size = self.info::<u32>(ffi::PCRE2_INFO_NAMEENTRYSIZE)? as usize;
        let table = self.info::<*const u8>(ffi::PCRE2_INFO_NAMETABLE)?;
        let table = unsafe { slice::from_raw_parts(table, count * entry_size) };

        Ok(NamedGroupTable::from_raw(table, entry_size))
    }
}

struct Inner {
    expression: String,
    code: Code,
    size: usize,
    groups: usize,
    names: NamedGroupTable,
}

/// An immutable compiled pattern.
///
/// Cloning is cheap and shares the compiled code; the engine handle is released
/// exactly once, when the last clone drops. A `CompiledPattern` may be shared by any
/// number of matchers on any number of threads.
#[derive(Clone)]
pub struct CompiledPattern(Arc<Inner>);

impl CompiledPattern {
    /// Compiles a regular expression with no flags.
    pub fn new(expr: &str) -> Result<CompiledPattern> {
        Pattern::new(expr).build()
    }

    pub(crate) fn from_code(expression: String, code: Code) -> Result<CompiledPattern> {
        let size = code.info::<usize>(ffi::PCRE2_INFO_SIZE)?;
        let groups = code.info::<u32>(ffi::PCRE2_INFO_CAPTURECOUNT)? as usize;
        let names = code.names()?;

        debug!(
            "pattern `{}` compiled to {} bytes with {} groups, {} named",
            expression,
            size,
            groups,
            names.len()
        );

        Ok(CompiledPattern(Arc::new(Inner {
            expression,
            code,
            size,
            groups,
            names,
        })))
    }

    /// Returns the source expression.
    pub fn as_str(&self) -> &str {
        &self.0.expression
    }

    /// Provides the size of the compiled pattern in bytes.
    pub fn size(&self) -> usize {
        self.0.size
    }

    /// Returns the number of capture groups, not counting group 0.
    pub fn groups(&self) -> usize {
        self.0.groups
    }

    /// Returns the named group table.
    pub fn names(&self) -> &NamedGroupTable {
        &self.0.names
    }

    /// Returns the name of every group in index order, `None` for unnamed groups and group 0.
    pub fn capture_names(&self) -> Vec<Option<&str>> {
        let mut names = vec![None; self.groups() + 1];

        for (name, index) in self.0.names.iter() {
            if let Some(slot) = names.get_mut(index) {
                if slot.is_none() {
                    *slot = Some(name);
                }
            }
        }

        names
    }

    pub(crate) fn as_ptr(&self) -> *const ffi::pcre2_code_8 {
        self.0.code.as_ptr()
    }

    /// Both values share the same compiled code.
    pub(crate) fn is_same(&self, other: &CompiledPattern) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl FromStr for CompiledPattern {
    type Err = Error;

    /// Parses the `/expression/flags` notation and compiles it.
    fn from_str(s: &str) -> Result<Self> {
        s.parse::<Pattern>()?.build()
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledPattern")
            .field("expression", &self.as_str())
            .field("size", &self.size())
            .field("groups", &self.groups())
            .finish()
    }
}

use std::ffi::CString;
use std::ptr;

use foreign_types::{foreign_type, ForeignType, ForeignTypeRef};

use crate::common::{Code, CompiledPattern};
use crate::compile::{CompileError, Flags, Pattern};
use crate::{ffi, Error, Result};

foreign_type! {
    /// Extra compile time options that the flag bits cannot carry.
    unsafe type CompileContext: Send {
        type CType = ffi::pcre2_compile_context_8;

        fn drop = free_compile_context;
    }
}

unsafe fn free_compile_context(ctx: *mut ffi::pcre2_compile_context_8) {
    ffi::pcre2_compile_context_free_8(ctx)
}

impl CompileContext {
    fn for_pattern(pattern: &Pattern) -> Result<Option<CompileContext>> {
        if pattern.newline.is_none() && pattern.bsr.is_none() {
            return Ok(None);
        }

        let p = unsafe { ffi::pcre2_compile_context_create_8(ptr::null_mut()) };

        if p.is_null() {
            return Err(Error::NoMem);
        }

        let ctx = unsafe { CompileContext::from_ptr(p) };

        if let Some(newline) = pattern.newline {
            check(unsafe { ffi::pcre2_set_newline_8(ctx.as_ptr(), newline as u32) })?;
        }
        if let Some(bsr) = pattern.bsr {
            check(unsafe { ffi::pcre2_set_bsr_8(ctx.as_ptr(), bsr as u32) })?;
        }

        Ok(Some(ctx))
    }
}

fn check(rc: libc::c_int) -> Result<()> {
    if rc == 0 {
        Ok(())
    } else {
        Err(Error::Engine {
            code: rc,
            message: crate::error::error_message(rc),
        })
    }
}

/// The regular expression pattern builder.
pub trait Builder {
    /// Build an expression into a `CompiledPattern` which can be passed to the matchers.
    fn build(&self) -> Result<CompiledPattern>;
}

impl Builder for Pattern {
    ///
    /// The basic regular expression compiler.
    ///
    /// A NUL byte in the expression is rejected here with its offset, before the engine sees it.
    ///
    fn build(&self) -> Result<CompiledPattern> {
        let expr = CString::new(self.expression.as_bytes())
            .map_err(|err| CompileError::nul_byte(&self.expression, err.nul_position()))?;
        let ctx = CompileContext::for_pattern(self)?;
        let mut code = 0;
        let mut offset = 0;

        let p = unsafe {
            ffi::pcre2_compile_8(
                expr.as_ptr() as *const u8,
                expr.as_bytes().len(),
                self.flags.bits(),
                &mut code,
                &mut offset,
                ctx.as_deref().map_or_else(ptr::null_mut, ForeignTypeRef::as_ptr),
            )
        };

        if p.is_null() {
            let err = CompileError::from_code(&self.expression, code, offset);

            debug!("pattern `{}` failed to compile: {}", self, err.message);

            return Err(err.into());
        }

        CompiledPattern::from_code(self.expression.clone(), unsafe { Code::from_ptr(p) })
    }
}

impl Builder for str {
    fn build(&self) -> Result<CompiledPattern> {
        Pattern::new(self).build()
    }
}

/// Compile the expression with the given flags.
pub fn compile(expr: &str, flags: Flags) -> Result<CompiledPattern> {
    Pattern::with_flags(expr, flags).build()
}

/// Compile the expression with the given flags, panicking if it is invalid.
///
/// Meant for call sites where a bad pattern is a programming error.
pub fn must_compile(expr: &str, flags: Flags) -> CompiledPattern {
    match compile(expr, flags) {
        Ok(re) => re,
        Err(err) => panic!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::{Bsr, Newline};

    #[test]
    fn test_groups() {
        let _ = pretty_env_logger::try_init();

        for &(expr, groups) in &[("", 0), ("^", 0), ("^$", 0), ("()", 1), ("(())", 2), ("((?:))", 1)] {
            assert_eq!(compile(expr, Flags::empty()).unwrap().groups(), groups, "{}", expr);
        }
    }

    #[test]
    fn test_compile_fail() {
        let _ = pretty_env_logger::try_init();

        let check = |expr: &str, message: &str, offset: usize| match compile(expr, Flags::empty()) {
            Err(Error::Compile(err)) => {
                assert_eq!(err.pattern, expr);
                assert_eq!(err.message, message, "{}", expr);
                assert_eq!(err.offset, offset, "{}", expr);
            }
            Err(err) => panic!("{}: unexpected error {:?}", expr, err),
            Ok(_) => panic!("{}: compiled", expr),
        };

        check("(", "missing closing parenthesis", 1);
        check("\\", "\\ at end of pattern", 1);
        check("abc\\", "\\ at end of pattern", 4);
        check("abc\0", "NUL byte in pattern", 3);
        check("a\0bc", "NUL byte in pattern", 1);
    }

    #[test]
    #[should_panic(expected = "( (1): missing closing parenthesis")]
    fn test_must_compile() {
        must_compile("(", Flags::empty());
    }

    #[test]
    fn test_no_start_optimize() {
        let re = compile("(*COMMIT)abc", Flags::NO_START_OPTIMIZE).unwrap();

        assert!(!re.is_match("xyzabc", Default::default()).unwrap());

        let re = compile("(*COMMIT)abc", Flags::empty()).unwrap();

        assert!(re.is_match("xyzabc", Default::default()).unwrap());
    }

    #[test]
    fn test_build_with_context() {
        let re = Pattern::new("^b$")
            .multi_line()
            .newline(Newline::Cr)
            .bsr(Bsr::Unicode)
            .build()
            .unwrap();

        assert!(re.is_match("a\rb", Default::default()).unwrap());
        assert!(!re.is_match("a\nb", Default::default()).unwrap());

        let re = "^b$".build().unwrap();

        assert!(!re.is_match("a\nb", Default::default()).unwrap());
    }
}

mod names;
mod pattern;

pub use self::names::NamedGroupTable;
pub(crate) use self::pattern::Code;
pub use self::pattern::CompiledPattern;

use std::ptr;

use crate::ffi;

/// The version of the linked PCRE2 library.
pub fn version() -> semver::Version {
    let s = version_str();
    let mut parts = s
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .split('.')
        .map(|part| part.parse::<u64>().unwrap_or_default());

    semver::Version::new(
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    )
}

/// Utility function for identifying this release version.
///
/// Returns the version number of the linked PCRE2 library followed by its release date.
pub fn version_str() -> String {
    unsafe {
        let len = ffi::pcre2_config_8(ffi::PCRE2_CONFIG_VERSION, ptr::null_mut());

        if len <= 0 {
            return String::new();
        }

        let mut buf = vec![0u8; len as usize];

        ffi::pcre2_config_8(ffi::PCRE2_CONFIG_VERSION, buf.as_mut_ptr() as *mut _);

        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());

        String::from_utf8_lossy(&buf[..end]).into_owned()
    }
}

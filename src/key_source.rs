// Shared with build.rs via #[path], so this file stays std-only.

use std::env::VarError;

/// How `build.rs` should treat the value it read for the API key variable.
#[derive(Debug, PartialEq, Eq)]
pub enum KeySource {
    Provided(String),
    Defaults,
}

/// Only an unset variable falls back to the defaults. A value that is set
/// but not UTF-8 is an error, never an empty key.
pub fn resolve(var: Result<String, VarError>) -> Result<KeySource, String> {
    match var {
        Ok(value) => Ok(KeySource::Provided(value)),
        Err(VarError::NotPresent) => Ok(KeySource::Defaults),
        Err(VarError::NotUnicode(raw)) => Err(format!(
            "API_KEY is set but is not valid UTF-8 ({} bytes); the key must be UTF-8",
            raw.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_uses_defaults() {
        assert_eq!(resolve(Err(VarError::NotPresent)), Ok(KeySource::Defaults));
    }

    #[test]
    fn empty_value_is_still_provided() {
        assert_eq!(
            resolve(Ok(String::new())),
            Ok(KeySource::Provided(String::new()))
        );
    }

    #[test]
    fn value_is_kept_exactly() {
        assert_eq!(
            resolve(Ok("  k€y/😀 x ".to_string())),
            Ok(KeySource::Provided("  k€y/😀 x ".to_string()))
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_value_is_an_error() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b'a', b'b', 0xff]);
        let err = resolve(Err(VarError::NotUnicode(raw))).unwrap_err();
        assert!(err.contains("not valid UTF-8"));
    }
}

//! Error types for the feiertage workspace.
//!
//! Every failure in the engine is a deterministic function of its input:
//! there is no I/O and nothing transient, so there is exactly one error
//! enum and no retry machinery.

use thiserror::Error;

/// The top-level error type used throughout feiertage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Date-related error (out-of-range year, invalid day-of-month, …).
    #[error("date error: {0}")]
    Date(String),

    /// A region/variant key did not match any member of the country's
    /// canonical region enumeration.
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// A date string could not be parsed (`DD.MM.YYYY` expected).
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout feiertage.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Runtime(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fk_core::ensure;
/// fn positive(x: i32) -> fk_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Runtime(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use fk_core::fail;
/// fn always_err() -> fk_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = Error::UnknownRegion("Nonexistent".into());
        assert_eq!(e.to_string(), "unknown region: Nonexistent");
        let e = Error::Parse("31.02.2025".into());
        assert_eq!(e.to_string(), "parse error: 31.02.2025");
    }

    #[test]
    fn ensure_macro() {
        fn check(x: i32) -> Result<()> {
            ensure!(x >= 0, "negative: {x}");
            Ok(())
        }
        assert!(check(0).is_ok());
        assert_eq!(check(-1), Err(Error::Runtime("negative: -1".into())));
    }
}

pub mod auth;
pub mod dashboard;
mod error;
pub mod faker;
pub mod mock;

pub use error::{Error, Result};
pub use faker::{Book, ListEnvelope, User};

#[doc(hidden)]
pub use eyre::eyre as internal_eyre_dont_use;

/// Build an [`Error`] with `format!` syntax.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::internal_eyre_dont_use!($($arg)*))
    };
}

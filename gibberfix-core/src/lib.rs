//! GibberFix core: recover text typed while the wrong keyboard layout was active.
//!
//! A [`SubstitutionTable`] maps characters of the source layout (Hebrew) to the
//! characters the same physical keys produce on the target layout (QWERTY).
//! [`LayoutRemapper`] applies a table to arbitrary input.

pub mod error;
pub mod table;
pub mod remapper;
pub mod ffi;

pub use error::{TableError, Result};
pub use table::{SubstitutionTable, TableBuilder};
pub use remapper::{LayoutRemapper, Conversion};

//! Growable generic array.
//!
//! Elements live in one contiguous block of slots owned by the array.
//! Logical size and physical capacity are tracked separately, and the
//! block is doubled when an append finds it full.
pub mod array;
pub mod error;
pub mod ext;
pub mod iter;
pub mod store;

pub use crate::array::DynamicArray;
pub use crate::error::{Error, Result};
pub use crate::ext::SortOrder;
pub use crate::iter::IntoIter;

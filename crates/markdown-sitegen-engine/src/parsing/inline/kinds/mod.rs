//! # Inline Kinds
//!
//! Each inline construct owns its syntax: delimiter strings and url patterns
//! live here, the parser only refers to them.
//!
//! - **`Delimited`**: the symmetric delimiters (`**`, `_`, `` ` ``) and the
//!   span kind each one produces
//! - **`Image`** / **`Link`**: the `![alt](url)` and `[text](url)` patterns

pub mod delimited;
pub mod url_target;

pub use delimited::Delimited;
pub use url_target::{Image, Link};

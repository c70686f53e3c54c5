//! # HTML Node Model
//!
//! - **`node`**: `HtmlNode` (`Leaf` | `Parent`) and its renderer
//! - **`attributes`**: insertion-ordered attribute map
//! - **`convert`**: one `TextSpan` to one leaf node
//!
//! Rendering is a pure function of the tree. Nothing is entity-escaped:
//! text and attribute values are written exactly as given.

pub mod attributes;
pub mod convert;
pub mod node;

pub use attributes::Attributes;
pub use convert::{span_to_node, spans_to_nodes};
pub use node::HtmlNode;

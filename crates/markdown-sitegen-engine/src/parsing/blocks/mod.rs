//! # Block Parsing
//!
//! A document is cut into blocks, then each block is classified on its own.
//!
//! ## Phases
//!
//! 1. **Segmentation** (`segment`): blank lines separate blocks
//! 2. **Classification** (`classify`): each block gets one [`BlockType`]
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: block-specific types with owned markers (Heading,
//!   CodeFence, BlockQuote, UnorderedList, OrderedList)
//! - **`segment`**: `split_blocks`
//! - **`classify`**: `classify`
//!
//! ## Key Invariants
//!
//! - Blocks never nest: a quote holds text, not other blocks
//! - Classification never fails; anything unrecognised is a paragraph
//! - Fenced code bodies are raw: no inline parsing inside

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify;
pub use segment::split_blocks;
pub use types::BlockType;

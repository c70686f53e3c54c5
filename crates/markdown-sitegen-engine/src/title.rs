use crate::{
    error::TitleError,
    parsing::blocks::{BlockType, classify, kinds::Heading, split_blocks},
};

/// Returns the text of the first block that classifies as a level-1
/// heading (`# Title`).
///
/// Blocks are found and classified exactly as the tree builder does, so a
/// `# ` line inside fenced code or continuing a paragraph is not a title,
/// and `## Sub` and `#NoSpace` are skipped. A heading spanning several
/// lines has its lines joined with a single space.
///
/// # Errors
/// [`TitleError::NoTitleFound`] when no block is a level-1 heading.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    let title = split_blocks(markdown)
        .iter()
        .filter(|block| classify(block) == BlockType::Heading(1))
        .find_map(|block| Heading::parse(block))
        .map(|(_, text)| text.lines().map(str::trim).collect::<Vec<_>>().join(" "));

    match title {
        Some(title) => {
            log::debug!("extracted title {title:?}");
            Ok(title)
        }
        None => {
            log::debug!("no level-1 heading in document");
            Err(TitleError::NoTitleFound)
        }
    }
}

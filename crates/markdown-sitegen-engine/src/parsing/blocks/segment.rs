/// Splits a document into blocks.
///
/// Blocks are separated by one or more blank (whitespace only) lines. Each
/// block is trimmed on the outside and keeps its interior newlines, so a
/// multi-line paragraph or list stays one block. `\r\n` line endings are
/// accepted; blocks always use `\n`.
pub fn split_blocks(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        if line.trim().is_empty() {
            flush(&mut blocks, &mut current);
        } else {
            current.push(line);
        }
    }
    flush(&mut blocks, &mut current);

    blocks
}

fn flush(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
    if current.is_empty() {
        return;
    }
    let block = current.join("\n");
    blocks.push(block.trim().to_string());
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_blank_lines() {
        let md = "This is **bolded** paragraph\n\n\
                  This is another paragraph with _italic_ text and `code` here\n\
                  This is the same paragraph on a new line\n\n\
                  - This is a list\n\
                  - with items";
        assert_eq!(
            split_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\n\
                 This is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn runs_of_blank_lines_collapse() {
        assert_eq!(split_blocks("a\n\n\n\n   \n\t\nb"), vec!["a", "b"]);
    }

    #[test]
    fn outer_whitespace_is_trimmed() {
        assert_eq!(
            split_blocks("\n\n   # Title   \n\n  body\n  more  \n"),
            vec!["# Title", "body\n  more"]
        );
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(split_blocks("a\r\nb\r\n\r\nc"), vec!["a\nb", "c"]);
    }

    #[test]
    fn empty_and_blank_documents_have_no_blocks() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n\n  \n").is_empty());
    }

    #[test]
    fn single_block_is_idempotent() {
        let block = "- one\n- two\n- three";
        let once = split_blocks(block);
        assert_eq!(once, vec![block]);
        assert_eq!(split_blocks(&once[0]), once);
    }

    #[test]
    fn interior_indentation_is_kept() {
        assert_eq!(split_blocks("- a\n  - b"), vec!["- a\n  - b"]);
    }
}

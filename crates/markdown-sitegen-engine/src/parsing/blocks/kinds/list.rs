/// `- item` lists.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_item(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    pub fn strip_marker(line: &str) -> &str {
        line.strip_prefix(Self::MARKER).unwrap_or(line)
    }
}

/// `1. item` lists. Item numbers start at 1 and count up by one.
pub struct OrderedList;

impl OrderedList {
    /// Marker expected on the item with 1-based `number`.
    pub fn marker(number: usize) -> String {
        format!("{number}. ")
    }

    pub fn is_item(line: &str, number: usize) -> bool {
        line.starts_with(&Self::marker(number))
    }

    /// Strips a leading `N. ` where N is any run of digits.
    pub fn strip_marker(line: &str) -> &str {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return line;
        }
        line[digits..].strip_prefix(". ").unwrap_or(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_marker() {
        assert!(UnorderedList::is_item("- a"));
        assert!(!UnorderedList::is_item("-a"));
        assert!(!UnorderedList::is_item("* a"));
        assert_eq!(UnorderedList::strip_marker("- a b"), "a b");
    }

    #[test]
    fn ordered_marker_must_match_position() {
        assert!(OrderedList::is_item("1. a", 1));
        assert!(OrderedList::is_item("12. a", 12));
        assert!(!OrderedList::is_item("2. a", 1));
        assert!(!OrderedList::is_item("1.a", 1));
    }

    #[test]
    fn ordered_strip() {
        assert_eq!(OrderedList::strip_marker("1. first"), "first");
        assert_eq!(OrderedList::strip_marker("10. tenth"), "tenth");
        assert_eq!(OrderedList::strip_marker("no marker"), "no marker");
        assert_eq!(OrderedList::strip_marker("3.missing space"), "3.missing space");
    }
}

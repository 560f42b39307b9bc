//! Page-edge line removal and blank-page handling.
//!
//! Running headers and footers repeat on every scanned page; the engine
//! offers the candidate line per page and removes the ones the caller
//! selected. All operations here are line-based, never regex-based, and
//! work on one page's own line list.

/// Which end of a page the candidate line sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEdge {
    Header,
    Footer,
}

/// The candidate line for removal. A page with no lines at all has no
/// candidate and is never offered for removal.
pub fn edge_line(text: &str, edge: PageEdge) -> Option<&str> {
    let mut lines = text.lines();
    match edge {
        PageEdge::Header => lines.next(),
        PageEdge::Footer => lines.last(),
    }
}

/// Remove the edge line. With `clean_adjacent`, a blank line left exposed
/// next to the removed one goes too: the line after a removed header, the
/// line before a removed footer. The page is re-joined with single line
/// feeds, dropping any trailing newline.
pub fn strip_edge_line(text: &str, edge: PageEdge, clean_adjacent: bool) -> String {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return String::new();
    }
    let kept: &[&str] = match edge {
        PageEdge::Header => {
            if clean_adjacent && lines.len() > 1 && lines[1].is_empty() {
                &lines[2..]
            } else {
                &lines[1..]
            }
        }
        PageEdge::Footer => {
            if clean_adjacent && lines.len() > 1 && lines[lines.len() - 2].is_empty() {
                &lines[..lines.len() - 2]
            } else {
                &lines[..lines.len() - 1]
            }
        }
    };
    kept.join("\n")
}

/// A page is empty when splitting it into lines yields no lines at all.
/// A single bare newline still splits into one (empty) line, so such a
/// page is *not* empty.
pub fn is_empty_page(text: &str) -> bool {
    text.lines().next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_lines_of_a_page() {
        let text = "HEADER\nbody\nFOOTER";
        assert_eq!(edge_line(text, PageEdge::Header), Some("HEADER"));
        assert_eq!(edge_line(text, PageEdge::Footer), Some("FOOTER"));
    }

    #[test]
    fn pages_without_lines_have_no_candidates() {
        assert_eq!(edge_line("", PageEdge::Header), None);
        assert_eq!(edge_line("", PageEdge::Footer), None);
        // One bare newline is still one (empty) line.
        assert_eq!(edge_line("\n", PageEdge::Header), Some(""));
    }

    #[test]
    fn header_removal() {
        assert_eq!(
            strip_edge_line("HEADER\nbody\nmore", PageEdge::Header, false),
            "body\nmore"
        );
    }

    #[test]
    fn header_removal_cleans_exposed_blank_line() {
        assert_eq!(
            strip_edge_line("HEADER\n\nbody", PageEdge::Header, true),
            "body"
        );
        // Without the flag the blank line stays.
        assert_eq!(
            strip_edge_line("HEADER\n\nbody", PageEdge::Header, false),
            "\nbody"
        );
    }

    #[test]
    fn footer_removal_cleans_preceding_blank_line() {
        assert_eq!(
            strip_edge_line("body\n\nFOOTER", PageEdge::Footer, true),
            "body"
        );
        assert_eq!(
            strip_edge_line("body\n\nFOOTER", PageEdge::Footer, false),
            "body\n"
        );
    }

    #[test]
    fn single_line_page_strips_to_nothing() {
        assert_eq!(strip_edge_line("only", PageEdge::Header, true), "");
        assert_eq!(strip_edge_line("only", PageEdge::Footer, true), "");
    }

    #[test]
    fn emptiness_is_structural() {
        assert!(is_empty_page(""));
        // One bare newline splits into one empty line: not an empty page.
        assert!(!is_empty_page("\n"));
        assert!(!is_empty_page(" "));
        assert!(!is_empty_page("text"));
    }
}

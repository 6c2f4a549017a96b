//! Presentation layer for diff segments.
//!
//! The comparison returns structured segments; how they are shown is a
//! renderer concern, so the ANSI coloring can be swapped out for plain
//! prefixed text (tests, piped output).

use crate::abi::diff::{DiffSegment, DiffTag};

/// ANSI sequence coloring added lines
const GREEN: &str = "\x1b[32m";
/// ANSI sequence coloring removed lines
const RED: &str = "\x1b[31m";
/// ANSI reset sequence
const RESET: &str = "\x1b[0m";

/// Turns tagged diff segments into displayable text
pub trait DiffRenderer {
    /// Render the segments, newline-terminated
    fn render(&self, segments: &[DiffSegment]) -> String;
}

/// Colorized rendering: added green, removed red, unchanged neutral
pub struct AnsiRenderer;

impl DiffRenderer for AnsiRenderer {
    fn render(&self, segments: &[DiffSegment]) -> String {
        let mut out = String::new();
        for segment in segments {
            let color = match segment.tag {
                DiffTag::Added => GREEN,
                DiffTag::Removed => RED,
                DiffTag::Unchanged => RESET,
            };
            out.push_str(color);
            out.push_str(&segment.text);
            out.push_str(RESET);
            out.push('\n');
        }
        out
    }
}

/// Color-free rendering with `  `, `+ ` and `- ` line prefixes
pub struct PlainRenderer;

impl DiffRenderer for PlainRenderer {
    fn render(&self, segments: &[DiffSegment]) -> String {
        let mut out = String::new();
        for segment in segments {
            let prefix = match segment.tag {
                DiffTag::Added => "+ ",
                DiffTag::Removed => "- ",
                DiffTag::Unchanged => "  ",
            };
            for line in segment.text.lines() {
                out.push_str(prefix);
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DiffSegment> {
        vec![
            DiffSegment {
                tag: DiffTag::Unchanged,
                text: String::from("["),
            },
            DiffSegment {
                tag: DiffTag::Removed,
                text: String::from("  \"mint\""),
            },
            DiffSegment {
                tag: DiffTag::Added,
                text: String::from("  \"burn\""),
            },
        ]
    }

    #[test]
    fn plain_renderer_prefixes_each_line() {
        let rendered = PlainRenderer.render(&sample());
        assert_eq!(rendered, "  [\n-   \"mint\"\n+   \"burn\"\n");
    }

    #[test]
    fn ansi_renderer_wraps_segments_in_colors() {
        let rendered = AnsiRenderer.render(&sample());
        assert!(rendered.contains("\x1b[31m  \"mint\"\x1b[0m"));
        assert!(rendered.contains("\x1b[32m  \"burn\"\x1b[0m"));
        assert!(rendered.starts_with("\x1b[0m["));
    }

    #[test]
    fn plain_renderer_splits_multiline_segments() {
        let segments = vec![DiffSegment {
            tag: DiffTag::Added,
            text: String::from("a\nb"),
        }];
        assert_eq!(PlainRenderer.render(&segments), "+ a\n+ b\n");
    }
}

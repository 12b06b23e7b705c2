//! Word wrapping and pagination of text blocks and their images.

use std::path::PathBuf;

use crate::html::{Block, BlockStyle};

const PT_TO_MM: f32 = 0.352_778;
/// Average glyph width of the built-in sans/serif faces, as a fraction of the font size
const AVG_GLYPH_WIDTH: f32 = 0.5;
const LINE_SPACING: f32 = 1.35;
const LIST_INDENT_MM: f32 = 5.0;
/// Images are drawn as squares of this side
pub const ICON_MM: f32 = 14.0;
const ICON_GAP_MM: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockMetrics {
    pub size_pt: f32,
    pub bold: bool,
    pub space_before_mm: f32,
    pub indent_mm: f32,
}

pub fn metrics(style: BlockStyle) -> BlockMetrics {
    let (size_pt, bold, space_before_mm, indent_mm) = match style {
        BlockStyle::Heading(1) => (18.0, true, 6.0, 0.0),
        BlockStyle::Heading(2) => (15.0, true, 5.0, 0.0),
        BlockStyle::Heading(3) => (13.0, true, 4.0, 0.0),
        BlockStyle::Heading(_) => (11.5, true, 3.0, 0.0),
        BlockStyle::Term => (10.5, true, 2.5, 0.0),
        BlockStyle::ListItem => (10.5, false, 1.0, LIST_INDENT_MM),
        BlockStyle::Paragraph => (10.5, false, 2.5, 0.0),
    };
    BlockMetrics {
        size_pt,
        bold,
        space_before_mm,
        indent_mm,
    }
}

/// A line of text placed on a page, coordinates in millimetres from the bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub page: usize,
    pub x_mm: f32,
    pub y_mm: f32,
    pub size_pt: f32,
    pub bold: bool,
    pub text: String,
}

/// An image placed on a page; `(x_mm, y_mm)` is its bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedImage {
    pub page: usize,
    pub x_mm: f32,
    pub y_mm: f32,
    pub size_mm: f32,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub lines: Vec<PlacedLine>,
    pub images: Vec<PlacedImage>,
    /// At least one, even for an empty document
    pub page_count: usize,
}

/// Geometry of the printable area.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
}

impl Frame {
    fn printable_width(&self) -> f32 {
        self.width_mm - 2.0 * self.margin_mm
    }
}

/// Split `text` into lines of at most `max_chars` characters, breaking on
/// whitespace and hard-splitting words that are longer than a line.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > max_chars && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

fn max_chars(width_mm: f32, size_pt: f32) -> usize {
    (width_mm / (size_pt * PT_TO_MM * AVG_GLYPH_WIDTH)).floor() as usize
}

/// Lay `blocks` out top to bottom, starting a new page whenever the next
/// line would cross the bottom margin.
///
/// A block's images come first, as rows of icons wrapped to the printable
/// width, followed by its text.
pub fn layout(blocks: &[Block], frame: Frame) -> Layout {
    let top = frame.height_mm - frame.margin_mm;
    let mut page = 0;
    let mut y = top;
    let mut out = Layout::default();

    // Moves to the next page when `height` no longer fits above the bottom margin
    let advance = |y: &mut f32, page: &mut usize, height: f32| {
        if *y - height < frame.margin_mm {
            *page += 1;
            *y = top;
        }
        *y -= height;
    };

    for block in blocks {
        let m = metrics(block.style);
        let line_height = m.size_pt * PT_TO_MM * LINE_SPACING;
        let width = frame.printable_width() - m.indent_mm;
        let x = frame.margin_mm + m.indent_mm;

        if y < top {
            y -= m.space_before_mm;
        }

        let per_row = (((width + ICON_GAP_MM) / (ICON_MM + ICON_GAP_MM)).floor() as usize).max(1);
        for row in block.images.chunks(per_row) {
            advance(&mut y, &mut page, ICON_MM);
            for (i, path) in row.iter().enumerate() {
                out.images.push(PlacedImage {
                    page,
                    x_mm: x + i as f32 * (ICON_MM + ICON_GAP_MM),
                    y_mm: y,
                    size_mm: ICON_MM,
                    path: path.clone(),
                });
            }
        }

        if block.text.is_empty() {
            continue;
        }
        let prefix = if block.style == BlockStyle::ListItem { "- " } else { "" };
        let text = format!("{}{}", prefix, block.text);

        for line in wrap(&text, max_chars(width, m.size_pt)) {
            advance(&mut y, &mut page, line_height);
            out.lines.push(PlacedLine {
                page,
                x_mm: x,
                y_mm: y,
                size_pt: m.size_pt,
                bold: m.bold,
                text: line,
            });
        }
    }

    out.page_count = page + 1;
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const A4: Frame = Frame {
        width_mm: 210.0,
        height_mm: 297.0,
        margin_mm: 20.0,
    };

    fn paragraph(text: &str) -> Block {
        Block {
            style: BlockStyle::Paragraph,
            text: text.to_string(),
            images: vec![],
        }
    }

    #[test]
    fn test_wrap_breaks_on_whitespace() {
        assert_eq!(
            wrap("Tenir à l'écart de la chaleur", 12),
            vec!["Tenir à", "l'écart de", "la chaleur"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_empty_document_has_one_page() {
        let placed = layout(&[], A4);
        assert!(placed.lines.is_empty());
        assert!(placed.images.is_empty());
        assert_eq!(placed.page_count, 1);
    }

    #[test]
    fn test_lines_stay_inside_margins() {
        let blocks: Vec<_> = (0..200).map(|i| paragraph(&format!("Ligne {}", i))).collect();
        let Layout { lines, page_count, .. } = layout(&blocks, A4);

        assert_eq!(lines.len(), 200);
        assert!(page_count > 1);
        assert_eq!(lines.last().unwrap().page, page_count - 1);
        for line in &lines {
            assert!(line.y_mm >= A4.margin_mm);
            assert!(line.y_mm <= A4.height_mm - A4.margin_mm);
        }
    }

    #[test]
    fn test_list_items_are_indented_with_marker() {
        let block = Block {
            style: BlockStyle::ListItem,
            text: "GHS02".to_string(),
            images: vec![],
        };
        let lines = layout(&[block], A4).lines;
        assert_eq!(lines[0].text, "- GHS02");
        assert_eq!(lines[0].x_mm, A4.margin_mm + LIST_INDENT_MM);
    }

    #[test]
    fn test_images_sit_above_their_text() {
        let block = Block {
            style: BlockStyle::ListItem,
            text: "Inflammable".to_string(),
            images: vec![PathBuf::from("ghs02.png"), PathBuf::from("ghs07.png")],
        };
        let placed = layout(&[block], A4);

        assert_eq!(placed.images.len(), 2);
        let (first, second) = (&placed.images[0], &placed.images[1]);
        assert_eq!(first.y_mm, second.y_mm);
        assert_eq!(second.x_mm - first.x_mm, ICON_MM + ICON_GAP_MM);
        assert_eq!(first.y_mm, A4.height_mm - A4.margin_mm - ICON_MM);
        assert!(placed.lines[0].y_mm < first.y_mm);
    }

    #[test]
    fn test_icon_rows_wrap_and_paginate() {
        let images: Vec<_> = (0..200).map(|i| PathBuf::from(format!("{}.png", i))).collect();
        let block = Block {
            style: BlockStyle::Paragraph,
            text: String::new(),
            images,
        };
        let placed = layout(&[block], A4);

        assert!(placed.lines.is_empty());
        assert_eq!(placed.images.len(), 200);
        assert!(placed.page_count > 1);
        for image in &placed.images {
            assert!(image.y_mm >= A4.margin_mm);
            assert!(image.x_mm + image.size_mm <= A4.width_mm - A4.margin_mm);
        }
    }

    #[test]
    fn test_headings_are_bold() {
        assert!(metrics(BlockStyle::Heading(1)).bold);
        assert!(!metrics(BlockStyle::Paragraph).bold);
        assert!(metrics(BlockStyle::Heading(1)).size_pt > metrics(BlockStyle::Heading(3)).size_pt);
    }
}

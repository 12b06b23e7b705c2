//! Flattens an HTML document into a title and a sequence of text blocks.

use scraper::{ElementRef, Html, Node, Selector};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    Heading(u8),
    Paragraph,
    ListItem,
    Term,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub style: BlockStyle,
    pub text: String,
    /// Image files found on disk, drawn before the text
    pub images: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub title: Option<String>,
    pub blocks: Vec<Block>,
}

const SKIPPED: &[&str] = &["head", "script", "style", "template", "noscript"];

const CONTAINERS: &[&str] = &[
    "html", "body", "main", "section", "article", "header", "footer", "nav", "aside", "ul", "ol",
    "dl", "table", "thead", "tbody", "tfoot", "figure",
];

fn leaf_style(name: &str) -> Option<BlockStyle> {
    match name {
        "h1" => Some(BlockStyle::Heading(1)),
        "h2" => Some(BlockStyle::Heading(2)),
        "h3" => Some(BlockStyle::Heading(3)),
        "h4" | "h5" | "h6" => Some(BlockStyle::Heading(4)),
        "p" | "dd" | "tr" | "div" | "blockquote" | "figcaption" | "caption" => {
            Some(BlockStyle::Paragraph)
        }
        "li" => Some(BlockStyle::ListItem),
        "dt" => Some(BlockStyle::Term),
        _ => None,
    }
}

fn is_block(name: &str) -> bool {
    CONTAINERS.contains(&name) || leaf_style(name).is_some()
}

/// Parse `html`; `<img>` sources are resolved against `base_path`.
pub fn parse(html: &str, base_path: &Path) -> Document {
    let document = Html::parse_document(html);

    let title = Selector::parse("title")
        .ok()
        .and_then(|selector| document.select(&selector).next())
        .map(|el| normalize(&el.text().collect::<String>()))
        .filter(|t| !t.is_empty());

    let mut blocks = Vec::new();
    collect_blocks(document.root_element(), base_path, &mut blocks);

    Document { title, blocks }
}

fn collect_blocks(element: ElementRef<'_>, base_path: &Path, blocks: &mut Vec<Block>) {
    let name = element.value().name();
    if SKIPPED.contains(&name) {
        return;
    }

    if let Some(style) = leaf_style(name) {
        if !has_block_child(element) {
            let mut images = Vec::new();
            let text = inline_text(element, base_path, &mut images);
            push_block(blocks, style, &text, images);
            return;
        }
    }

    // Container: nested blocks recurse, loose inline content becomes paragraphs
    let mut loose = String::new();
    let mut loose_images = Vec::new();
    for child in element.children() {
        match child.value() {
            Node::Text(text) => loose.push_str(text),
            Node::Element(el) if SKIPPED.contains(&el.name()) => {}
            Node::Element(el) if is_block(el.name()) => {
                push_block(
                    blocks,
                    BlockStyle::Paragraph,
                    &loose,
                    std::mem::take(&mut loose_images),
                );
                loose.clear();
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_blocks(child_el, base_path, blocks);
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    loose.push_str(&inline_text(child_el, base_path, &mut loose_images));
                }
            }
            _ => {}
        }
    }
    push_block(blocks, BlockStyle::Paragraph, &loose, loose_images);
}

fn has_block_child(element: ElementRef<'_>) -> bool {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .any(|child| is_block(child.value().name()) && child.value().name() != "tr")
}

fn push_block(blocks: &mut Vec<Block>, style: BlockStyle, raw: &str, images: Vec<PathBuf>) {
    let text = normalize(raw);
    if !text.is_empty() || !images.is_empty() {
        blocks.push(Block { style, text, images });
    }
}

/// Text content with table cells separated by `|`.
///
/// Images found on disk are pushed to `images`; the others are written as `[alt]`.
fn inline_text(element: ElementRef<'_>, base_path: &Path, images: &mut Vec<PathBuf>) -> String {
    let mut out = String::new();
    let mut first_cell = true;

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };
                match el.name() {
                    "img" => {
                        if let Some(path) = el.attr("src").and_then(|src| resolve_asset(base_path, src)) {
                            images.push(path);
                            continue;
                        }
                        let alt = el.attr("alt").map(str::trim).unwrap_or_default();
                        if !alt.is_empty() {
                            out.push_str(&format!(" [{}] ", alt));
                        }
                    }
                    "br" => out.push(' '),
                    "td" | "th" => {
                        if !first_cell {
                            out.push_str(" | ");
                        }
                        first_cell = false;
                        out.push_str(&inline_text(child_el, base_path, images));
                    }
                    name if SKIPPED.contains(&name) => {}
                    _ => out.push_str(&inline_text(child_el, base_path, images)),
                }
            }
            _ => {}
        }
    }

    out
}

/// Local file behind an `<img>` source, if it exists. Remote and inline sources are not fetched.
fn resolve_asset(base_path: &Path, src: &str) -> Option<PathBuf> {
    if src.starts_with("data:") || src.contains("://") {
        return None;
    }
    let path = base_path.join(src.trim_start_matches('/'));
    if path.is_file() {
        Some(path)
    } else {
        warn!(asset = %path.display(), "PDF asset not found");
        None
    }
}

fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

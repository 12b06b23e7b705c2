use printpdf::{Image, ImageTransform, Mm, PdfDocument, PdfLayerReference, image_crate};
use tracing::{debug, instrument, warn};

use crate::error::{PdfError, PdfResult};
use crate::font;
use crate::html;
use crate::layout::{self, Frame, PlacedImage};
use crate::options::PdfOptions;

/// Converts an HTML document into PDF bytes.
pub trait PdfRenderer: Send + Sync {
    fn render(&self, html: &str) -> PdfResult<Vec<u8>>;
}

/// HTML to PDF engine built on scraper (parsing) and printpdf (output).
///
/// Supports the subset of HTML used by printable sheets: title, headings,
/// paragraphs, lists, definition lists, tables and local images. Images that
/// are missing or undecodable are replaced by their alt text or skipped.
/// CPU-bound; call it from `spawn_blocking` in async code.
#[derive(Debug, Clone)]
pub struct PrintPdfRenderer {
    options: PdfOptions,
}

impl PrintPdfRenderer {
    pub fn new(options: PdfOptions) -> PdfResult<Self> {
        let (width, height) = options.page_size_mm();
        if options.margin_mm < 0.0 || options.margin_mm * 2.0 >= width.min(height) {
            return Err(PdfError::InvalidOption {
                key: "margin_mm",
                details: format!("{} mm leaves no printable area", options.margin_mm),
            });
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &PdfOptions {
        &self.options
    }
}

impl PdfRenderer for PrintPdfRenderer {
    #[instrument(skip(self, html), fields(html_len = html.len()))]
    fn render(&self, html: &str) -> PdfResult<Vec<u8>> {
        let document = html::parse(html, &self.options.base_path);
        let title = document.title.as_deref().unwrap_or("Document");

        let (width, height) = self.options.page_size_mm();
        let frame = Frame {
            width_mm: width,
            height_mm: height,
            margin_mm: self.options.margin_mm,
        };
        let placed = layout::layout(&document.blocks, frame);
        let page_count = placed.page_count;

        let (doc, first_page, first_layer) =
            PdfDocument::new(title, Mm(width), Mm(height), "Layer 1");

        let faces = font::resolve(&self.options.default_font);
        let regular = doc
            .add_builtin_font(faces.regular)
            .map_err(|e| PdfError::Font(e.to_string()))?;
        let bold = doc
            .add_builtin_font(faces.bold)
            .map_err(|e| PdfError::Font(e.to_string()))?;

        let mut layers = vec![doc.get_page(first_page).get_layer(first_layer)];
        for n in 1..page_count {
            let (page, layer) = doc.add_page(Mm(width), Mm(height), format!("Layer {}", n + 1));
            layers.push(doc.get_page(page).get_layer(layer));
        }

        for line in placed.lines {
            let face = if line.bold { &bold } else { &regular };
            layers[line.page].use_text(line.text, line.size_pt, Mm(line.x_mm), Mm(line.y_mm), face);
        }

        for image in &placed.images {
            draw_image(&layers[image.page], image);
        }

        drop(layers);
        let bytes = doc
            .save_to_bytes()
            .map_err(|e| PdfError::Engine(e.to_string()))?;

        debug!(
            pages = page_count,
            images = placed.images.len(),
            bytes = bytes.len(),
            "Rendered PDF"
        );
        Ok(bytes)
    }
}

const IMAGE_DPI: f32 = 300.0;

/// Decode the image file and scale it into its square, keeping the aspect ratio.
fn draw_image(layer: &PdfLayerReference, placed: &PlacedImage) {
    let decoded = match image_crate::open(&placed.path) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!(asset = %placed.path.display(), error = %e, "Could not decode PDF image");
            return;
        }
    };

    let image = Image::from_dynamic_image(&decoded);
    let longest_px = image.image.width.0.max(image.image.height.0).max(1);
    let natural_mm = longest_px as f32 * 25.4 / IMAGE_DPI;
    let scale = placed.size_mm / natural_mm;

    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(placed.x_mm)),
            translate_y: Some(Mm(placed.y_mm)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        },
    );
}

use printpdf::BuiltinFont;
use tracing::warn;

/// Regular and bold built-in faces for a CSS font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPair {
    pub regular: BuiltinFont,
    pub bold: BuiltinFont,
}

/// Map a font family name (as found in CSS) to the PDF standard 14 fonts.
///
/// Unknown families fall back to Helvetica.
pub fn resolve(family: &str) -> FontPair {
    let family = family.trim().trim_matches(|c| c == '"' || c == '\'');
    match family.to_ascii_lowercase().as_str() {
        "arial" | "helvetica" | "sans-serif" | "dejavu sans" => FontPair {
            regular: BuiltinFont::Helvetica,
            bold: BuiltinFont::HelveticaBold,
        },
        "times" | "times new roman" | "serif" => FontPair {
            regular: BuiltinFont::TimesRoman,
            bold: BuiltinFont::TimesBold,
        },
        "courier" | "courier new" | "monospace" => FontPair {
            regular: BuiltinFont::Courier,
            bold: BuiltinFont::CourierBold,
        },
        other => {
            warn!(font = other, "Unknown PDF font family, using Helvetica");
            FontPair {
                regular: BuiltinFont::Helvetica,
                bold: BuiltinFont::HelveticaBold,
            }
        }
    }
}

use std::path::PathBuf;
use strum::{Display, EnumString};

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_or_default};

/// Paper sizes understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Paper {
    A4,
    A5,
    Letter,
}

impl Paper {
    /// Portrait width and height in millimetres.
    pub fn size_mm(&self) -> (f32, f32) {
        match self {
            Paper::A4 => (210.0, 297.0),
            Paper::A5 => (148.0, 210.0),
            Paper::Letter => (215.9, 279.4),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Rendering options, one set per engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    /// CSS font family name, mapped to a PDF built-in font
    pub default_font: String,
    /// Directory relative asset references (`<img src>`) resolve against
    pub base_path: PathBuf,
    pub paper: Paper,
    pub orientation: Orientation,
    pub margin_mm: f32,
}

impl PdfOptions {
    pub fn new(default_font: impl Into<String>, base_path: impl Into<PathBuf>) -> Self {
        Self {
            default_font: default_font.into(),
            base_path: base_path.into(),
            ..Self::default()
        }
    }

    pub fn with_paper(mut self, paper: Paper, orientation: Orientation) -> Self {
        self.paper = paper;
        self.orientation = orientation;
        self
    }

    /// Page width and height in millimetres after orientation.
    pub fn page_size_mm(&self) -> (f32, f32) {
        let (w, h) = self.paper.size_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            default_font: "Arial".to_string(),
            base_path: PathBuf::from("public/css/"),
            paper: Paper::A4,
            orientation: Orientation::Portrait,
            margin_mm: 20.0,
        }
    }
}

/// Environment variables:
/// - `PDF_DEFAULT_FONT` (default: Arial)
/// - `PDF_BASE_PATH` (default: public/css/)
/// - `PDF_PAPER` (default: A4)
/// - `PDF_ORIENTATION` (default: portrait)
#[cfg(feature = "config")]
impl FromEnv for PdfOptions {
    fn from_env() -> Result<Self, ConfigError> {
        let paper = env_or_default("PDF_PAPER", "A4")
            .parse()
            .map_err(|e: strum::ParseError| ConfigError::ParseError {
                key: "PDF_PAPER".to_string(),
                details: e.to_string(),
            })?;
        let orientation = env_or_default("PDF_ORIENTATION", "portrait")
            .parse()
            .map_err(|e: strum::ParseError| ConfigError::ParseError {
                key: "PDF_ORIENTATION".to_string(),
                details: e.to_string(),
            })?;

        Ok(Self {
            default_font: env_or_default("PDF_DEFAULT_FONT", "Arial"),
            base_path: PathBuf::from(env_or_default("PDF_BASE_PATH", "public/css/")),
            paper,
            orientation,
            ..Self::default()
        })
    }
}

//! Print layout for card batches: page geometry, cell text fitting, and PDF output.

mod config;
mod layout;
mod logo;
mod metrics;
mod pdf;
mod qr;
mod text;

pub use config::{DEFAULT_MENU_URL, RenderConfig, RenderError, output_file_name};
pub use layout::{A4_HEIGHT_MM, A4_WIDTH_MM, Area, PageLayout, grid_cell, mm_to_pt, pt_to_mm};
pub use logo::{LogoError, MAX_LOGO_PX, load_logo_bw, to_black_and_white};
pub use metrics::{FontFace, TextMeasure};
pub use pdf::{render_cards_pdf, render_cards_pdf_with};
pub use qr::{CodeImageEncoder, QrPngEncoder};
pub use text::{ELLIPSIS, FitOptions, FittedText, fit_text};

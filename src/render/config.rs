use std::path::PathBuf;

use thiserror::Error;

/// Menu link printed in the third footer block when nothing else is given.
pub const DEFAULT_MENU_URL: &str = "https://vip-club.uk/vvjkz0";

/// Event details printed on every card page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Free-form date label shown under the header.
    pub event_date: String,
    /// Optional logo; unreadable files fall back to a text title.
    pub logo_path: Option<PathBuf>,
    pub event_url_1: Option<String>,
    pub event_url_2: Option<String>,
    /// Always rendered as the third footer code.
    pub menu_url: String,
    /// Print `Card NNN • <id>` below the footer.
    pub show_card_id: bool,
}

impl RenderConfig {
    pub fn new<S: Into<String>>(event_date: S) -> Self {
        Self {
            event_date: event_date.into(),
            logo_path: None,
            event_url_1: None,
            event_url_2: None,
            menu_url: DEFAULT_MENU_URL.to_string(),
            show_card_id: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no cards to render")]
    NoCards,
    #[error("failed to produce code image for {url}: {message}")]
    CodeImage { url: String, message: String },
    #[error("code image for {url} could not be decoded: {source}")]
    CodeImageDecode {
        url: String,
        source: image::ImageError,
    },
    #[error("PDF backend error: {0}")]
    Pdf(String),
}

/// Download name for a rendered batch, e.g. `music-bingo-May-1st-2026.pdf`.
pub fn output_file_name(event_date: &str) -> String {
    let kept: String = event_date
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let slug = kept.trim().replace(' ', "-");
    let slug = if slug.is_empty() { "event".to_string() } else { slug };
    format!("music-bingo-{slug}.pdf")
}

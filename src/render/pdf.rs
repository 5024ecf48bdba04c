use std::io::BufWriter;

use image::GrayImage;
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject,
    IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Px, Rgb,
};
use tracing::{debug, info, warn};

use crate::core::{Card, GRID_CELLS};
use crate::render::config::{RenderConfig, RenderError};
use crate::render::layout::{Area, PageLayout, grid_cell, mm_to_pt, pt_to_mm};
use crate::render::logo::load_logo_bw;
use crate::render::metrics::{FontFace, TextMeasure};
use crate::render::qr::{CodeImageEncoder, QrPngEncoder};
use crate::render::text::{FitOptions, fit_text};

const FALLBACK_TITLE: &str = "MUSIC BINGO";
const UNAVAILABLE: &str = "QR unavailable";
const FOOTER_LABELS: [&str; 3] = ["Event QR 1", "Event QR 2", "Menu"];

const TITLE_PT: f32 = 18.0;
const DATE_PT: f32 = 12.0;
const GRID_LABEL_PT: f32 = 11.0;
const FOOTER_LABEL_PT: f32 = 9.0;
const PLACEHOLDER_PT: f32 = 7.0;
const CAPTION_PT: f32 = 8.0;
const CELL_PADDING_PT: f32 = 2.0;
const GRID_LABEL_RISE_PT: f32 = 6.0;
const FOOTER_LABEL_BAND_PT: f32 = 10.0;
const LOGO_HEIGHT_RATIO: f32 = 0.65;
const DATE_HEIGHT_RATIO: f32 = 0.22;

/// Render every card onto its own A4 page using QR codes for the footer.
pub fn render_cards_pdf(cards: &[Card], config: &RenderConfig) -> Result<Vec<u8>, RenderError> {
    render_cards_pdf_with(cards, config, &QrPngEncoder::default())
}

/// Render every card onto its own page, pages in input order.
///
/// A missing or broken logo is replaced by a text title. A failing
/// `encoder` aborts the whole render.
pub fn render_cards_pdf_with(
    cards: &[Card],
    config: &RenderConfig,
    encoder: &dyn CodeImageEncoder,
) -> Result<Vec<u8>, RenderError> {
    if cards.is_empty() {
        return Err(RenderError::NoCards);
    }

    let layout = PageLayout::a4();
    let assets = PageAssets::prepare(config, encoder)?;

    let (doc, first_page, first_layer) = PdfDocument::new(
        format!("Music Bingo - {}", config.event_date),
        Mm(layout.page.w),
        Mm(layout.page.h),
        page_layer_name(1),
    );
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?,
    };

    let painter = CardPainter {
        layout: &layout,
        assets: &assets,
        fonts: &fonts,
        config,
        fit: FitOptions::default(),
    };

    for (idx, card) in cards.iter().enumerate() {
        let layer = if idx == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(
                Mm(layout.page.w),
                Mm(layout.page.h),
                page_layer_name(idx + 1),
            );
            doc.get_page(page).get_layer(layer)
        };
        painter.paint(&layer, card, idx + 1);
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let bytes = writer
        .into_inner()
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    info!(pages = cards.len(), bytes = bytes.len(), "rendered card document");
    Ok(bytes)
}

fn page_layer_name(number: usize) -> String {
    format!("Card {number:03}")
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Helvetica => &self.regular,
            FontFace::HelveticaBold => &self.bold,
        }
    }
}

/// Greyscale raster kept as raw samples so it can be placed on many pages.
struct Raster {
    width: u32,
    height: u32,
    luma: Vec<u8>,
}

impl Raster {
    fn from_gray(img: GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            luma: img.into_raw(),
        }
    }

    /// Place with the bottom-left corner at (`x`, `y`), scaled to `width_mm`.
    fn place(&self, layer: &PdfLayerReference, x: f32, y: f32, width_mm: f32) {
        let image = Image::from(ImageXObject {
            width: Px(self.width as usize),
            height: Px(self.height as usize),
            color_space: ColorSpace::Greyscale,
            bits_per_component: ColorBits::Bit8,
            interpolate: false,
            image_data: self.luma.clone(),
            image_filter: None,
            clipping_bbox: None,
            smask: None,
        });
        let dpi = self.width as f32 / (width_mm / 25.4);
        image.add_to_layer(
            layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(x)),
                translate_y: Some(Mm(y)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
    }
}

/// Images shared by every page of one document.
struct PageAssets {
    logo: Option<Raster>,
    codes: [Option<Raster>; 3],
}

impl PageAssets {
    fn prepare(config: &RenderConfig, encoder: &dyn CodeImageEncoder) -> Result<Self, RenderError> {
        let logo = config.logo_path.as_deref().and_then(|path| match load_logo_bw(path) {
            Ok(img) => Some(Raster::from_gray(img)),
            Err(err) => {
                warn!(error = %err, "logo unavailable, printing text title instead");
                None
            }
        });

        let urls = [
            config.event_url_1.as_deref(),
            config.event_url_2.as_deref(),
            Some(config.menu_url.as_str()),
        ];
        let mut codes: [Option<Raster>; 3] = [None, None, None];
        for (slot, url) in codes.iter_mut().zip(urls) {
            let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
                continue;
            };
            *slot = Some(code_raster(encoder, url)?);
        }

        Ok(Self { logo, codes })
    }
}

fn code_raster(encoder: &dyn CodeImageEncoder, url: &str) -> Result<Raster, RenderError> {
    let bytes = encoder.encode(url).map_err(|message| RenderError::CodeImage {
        url: url.to_string(),
        message,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| RenderError::CodeImageDecode {
        url: url.to_string(),
        source,
    })?;
    Ok(Raster::from_gray(decoded.to_luma8()))
}

struct CardPainter<'a> {
    layout: &'a PageLayout,
    assets: &'a PageAssets,
    fonts: &'a Fonts,
    config: &'a RenderConfig,
    fit: FitOptions,
}

impl CardPainter<'_> {
    fn paint(&self, layer: &PdfLayerReference, card: &Card, number: usize) {
        let black = Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None));
        layer.set_fill_color(black.clone());
        layer.set_outline_color(black);

        self.header(layer);
        self.grid(layer, card.artists(), self.layout.top_grid, "Artists", card.card_id());
        self.grid(layer, card.titles(), self.layout.bottom_grid, "Song Titles", card.card_id());
        self.footer(layer);

        if self.config.show_card_id {
            let caption = format!("Card {number:03} \u{2022} {}", card.card_id());
            self.text_right(
                layer,
                FontFace::Helvetica,
                &caption,
                CAPTION_PT,
                self.layout.page.w - self.layout.margin_x,
                self.layout.margin_y - pt_to_mm(2.0),
            );
        }
    }

    fn header(&self, layer: &PdfLayerReference) {
        let header = self.layout.header;
        let page_w = self.layout.page.w;

        match &self.assets.logo {
            Some(logo) => {
                let max_h = header.h * LOGO_HEIGHT_RATIO;
                let scale = (header.w / logo.width as f32).min(max_h / logo.height as f32);
                let draw_w = logo.width as f32 * scale;
                let draw_h = logo.height as f32 * scale;
                logo.place(layer, (page_w - draw_w) / 2.0, header.top() - draw_h, draw_w);
            }
            None => self.text_centered(
                layer,
                FontFace::HelveticaBold,
                FALLBACK_TITLE,
                TITLE_PT,
                page_w / 2.0,
                header.y + header.h * LOGO_HEIGHT_RATIO,
            ),
        }

        self.text_centered(
            layer,
            FontFace::HelveticaBold,
            &self.config.event_date,
            DATE_PT,
            page_w / 2.0,
            header.y + header.h * DATE_HEIGHT_RATIO,
        );
    }

    fn grid(&self, layer: &PdfLayerReference, items: &[String], grid: Area, title: &str, card_id: &str) {
        layer.set_outline_thickness(1.0);
        self.text_left(
            layer,
            FontFace::HelveticaBold,
            title,
            GRID_LABEL_PT,
            grid.x,
            grid.top() + pt_to_mm(GRID_LABEL_RISE_PT),
        );

        stroke_rect(layer, grid);
        let cell = grid.w / 5.0;
        for i in 1..5 {
            let offset = i as f32 * cell;
            draw_line(layer, grid.x + offset, grid.y, grid.x + offset, grid.top());
            draw_line(layer, grid.x, grid.y + offset, grid.right(), grid.y + offset);
        }

        let padding = pt_to_mm(CELL_PADDING_PT);
        for (idx, text) in items.iter().take(GRID_CELLS).enumerate() {
            let area = grid_cell(&grid, idx).inset(padding);
            let fitted = fit_text(
                &FontFace::Helvetica,
                text,
                mm_to_pt(area.w),
                mm_to_pt(area.h),
                &self.fit,
            );
            if fitted.truncated {
                debug!(card_id, cell = idx, text = %text, size = fitted.font_size, "cell text truncated");
            }
            let baselines = fitted.baselines(mm_to_pt(area.y), mm_to_pt(area.h));
            for (line, baseline) in fitted.lines.iter().zip(baselines) {
                self.text_centered(
                    layer,
                    FontFace::Helvetica,
                    line,
                    fitted.font_size,
                    area.center_x(),
                    pt_to_mm(baseline),
                );
            }
        }
    }

    fn footer(&self, layer: &PdfLayerReference) {
        let footer = self.layout.footer;
        let size = self.layout.code_image_size;
        let label_band = pt_to_mm(FOOTER_LABEL_BAND_PT);
        layer.set_outline_thickness(1.0);

        for ((block, label), code) in self
            .layout
            .footer_blocks()
            .iter()
            .zip(FOOTER_LABELS)
            .zip(&self.assets.codes)
        {
            let x = block.x + (block.w - size) / 2.0;
            let y = footer.y + (footer.h - size - label_band) / 2.0 + label_band;

            self.text_centered(
                layer,
                FontFace::Helvetica,
                label,
                FOOTER_LABEL_PT,
                block.center_x(),
                footer.y + label_band,
            );

            match code {
                Some(raster) => raster.place(layer, x, y, size),
                None => {
                    stroke_rect(layer, Area::new(x, y, size, size));
                    self.text_centered(
                        layer,
                        FontFace::Helvetica,
                        UNAVAILABLE,
                        PLACEHOLDER_PT,
                        block.center_x(),
                        y + size / 2.0,
                    );
                }
            }
        }
    }

    fn text_left(&self, layer: &PdfLayerReference, face: FontFace, text: &str, size: f32, x: f32, y: f32) {
        layer.use_text(text, size, Mm(x), Mm(y), self.fonts.get(face));
    }

    fn text_centered(
        &self,
        layer: &PdfLayerReference,
        face: FontFace,
        text: &str,
        size: f32,
        center_x: f32,
        y: f32,
    ) {
        let width = pt_to_mm(face.text_width(text, size));
        self.text_left(layer, face, text, size, center_x - width / 2.0, y);
    }

    fn text_right(&self, layer: &PdfLayerReference, face: FontFace, text: &str, size: f32, right: f32, y: f32) {
        let width = pt_to_mm(face.text_width(text, size));
        self.text_left(layer, face, text, size, right - width, y);
    }
}

fn stroke_rect(layer: &PdfLayerReference, area: Area) {
    let points = vec![
        (Point::new(Mm(area.x), Mm(area.y)), false),
        (Point::new(Mm(area.right()), Mm(area.y)), false),
        (Point::new(Mm(area.right()), Mm(area.top())), false),
        (Point::new(Mm(area.x), Mm(area.top())), false),
    ];
    layer.add_line(Line {
        points,
        is_closed: true,
    });
}

fn draw_line(layer: &PdfLayerReference, x1: f32, y1: f32, x2: f32, y2: f32) {
    let points = vec![
        (Point::new(Mm(x1), Mm(y1)), false),
        (Point::new(Mm(x2), Mm(y2)), false),
    ];
    layer.add_line(Line {
        points,
        is_closed: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GenerateOptions, generate_cards};

    struct FailingEncoder;

    impl CodeImageEncoder for FailingEncoder {
        fn encode(&self, _url: &str) -> Result<Vec<u8>, String> {
            Err("encoder offline".to_string())
        }
    }

    fn cards(count: usize) -> Vec<Card> {
        let artists: Vec<String> = (0..30).map(|i| format!("Artist {i}")).collect();
        let titles: Vec<String> = (0..30).map(|i| format!("Song {i}")).collect();
        generate_cards(&artists, &titles, &GenerateOptions::with_count(count).seed(1)).unwrap()
    }

    #[test]
    fn empty_batch_is_rejected() {
        let err = render_cards_pdf(&[], &RenderConfig::new("May 1st 2026")).unwrap_err();
        assert!(matches!(err, RenderError::NoCards));
    }

    #[test]
    fn encoder_failure_is_fatal() {
        let err = render_cards_pdf_with(&cards(1), &RenderConfig::new("May 1st 2026"), &FailingEncoder)
            .unwrap_err();
        match err {
            RenderError::CodeImage { url, message } => {
                assert_eq!(url, crate::render::config::DEFAULT_MENU_URL);
                assert_eq!(message, "encoder offline");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn produces_pdf_bytes() {
        let pdf = render_cards_pdf(&cards(2), &RenderConfig::new("May 1st 2026")).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
    }
}

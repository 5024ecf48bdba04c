use std::collections::HashSet;

use image::{ImageFormat, Rgba, RgbaImage};
use music_bingo::render::DEFAULT_MENU_URL;
use music_bingo::{
    Card, GenerateError, GenerateOptions, RenderConfig, generate_cards, parse_song_list,
    render_cards_pdf,
};
use pretty_assertions::assert_eq;

fn vocab(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix} {i}")).collect()
}

fn song_list(n: usize) -> String {
    let mut text = String::from("1960s (40)\n");
    for i in 0..n {
        text.push_str(&format!("Artist Number {i} \u{2013} Song Title {i}\n"));
    }
    text
}

fn page_count(pdf: &[u8]) -> usize {
    lopdf::Document::load_mem(pdf).unwrap().get_pages().len()
}

/// Text drawn on each page, first page first.
fn page_texts(pdf: &[u8]) -> Vec<String> {
    let doc = lopdf::Document::load_mem(pdf).unwrap();
    doc.get_pages()
        .keys()
        .map(|&n| doc.extract_text(&[n]).unwrap())
        .collect()
}

fn config() -> RenderConfig {
    RenderConfig {
        event_date: "May 1st 2026".to_string(),
        logo_path: None,
        event_url_1: None,
        event_url_2: None,
        menu_url: DEFAULT_MENU_URL.to_string(),
        show_card_id: true,
    }
}

#[test]
fn batch_is_unique_and_well_formed() {
    let cards = generate_cards(
        &vocab("Artist", 60),
        &vocab("Song", 60),
        &GenerateOptions::with_count(100).seed(123),
    )
    .unwrap();
    assert_eq!(cards.len(), 100);

    let mut prints = HashSet::new();
    for card in &cards {
        assert_eq!(card.artists().iter().collect::<HashSet<_>>().len(), 25);
        assert_eq!(card.titles().iter().collect::<HashSet<_>>().len(), 25);
        assert_eq!(card.card_id().len(), 10);
        assert!(card.fingerprint().starts_with(card.card_id()));
        prints.insert(card.fingerprint());
    }
    assert_eq!(prints.len(), 100);
}

#[test]
fn same_seed_reproduces_batch() {
    let artists = vocab("Artist", 40);
    let titles = vocab("Song", 35);
    let options = GenerateOptions::with_count(20).seed(2026);

    let first: Vec<Card> = generate_cards(&artists, &titles, &options).unwrap();
    let second: Vec<Card> = generate_cards(&artists, &titles, &options).unwrap();
    assert_eq!(first, second);

    let other = generate_cards(&artists, &titles, &GenerateOptions::with_count(20).seed(2027)).unwrap();
    assert_ne!(first, other);
}

#[test]
fn undersized_vocabularies_are_invalid_input() {
    for (artists, titles) in [
        (vocab("a", 0), vocab("t", 30)),
        (vocab("a", 30), vocab("t", 0)),
        (vocab("a", 24), vocab("t", 30)),
        (vocab("a", 30), vocab("t", 24)),
    ] {
        let err = generate_cards(&artists, &titles, &GenerateOptions::with_count(1).seed(1)).unwrap_err();
        assert!(matches!(err, GenerateError::VocabularyTooSmall { .. }), "{err}");
    }
}

#[test]
fn song_list_to_pdf() {
    let parsed = parse_song_list(&song_list(30));
    assert_eq!(parsed.ignored_lines, vec!["1960s (40)"]);
    assert_eq!(parsed.unique_artists.len(), 30);

    let cards = generate_cards(
        &parsed.unique_artists,
        &parsed.unique_titles,
        &GenerateOptions::with_count(3).seed(1),
    )
    .unwrap();

    let mut config = config();
    config.event_url_1 = Some("https://example.com/tickets".to_string());
    let pdf = render_cards_pdf(&cards, &config).unwrap();

    assert!(pdf.starts_with(b"%PDF-"));
    assert_eq!(page_count(&pdf), 3);
}

#[test]
fn pages_follow_card_order() {
    let cards = generate_cards(&vocab("Artist", 40), &vocab("Song", 40), &GenerateOptions::with_count(4).seed(77)).unwrap();
    let mut config = config();
    config.event_url_1 = Some("https://example.com/tickets".to_string());

    let texts = page_texts(&render_cards_pdf(&cards, &config).unwrap());
    assert_eq!(texts.len(), cards.len());

    for (idx, (text, card)) in texts.iter().zip(&cards).enumerate() {
        assert!(text.contains(&format!("Card {:03}", idx + 1)), "page {}: {text}", idx + 1);
        assert!(text.contains(card.card_id()), "page {} lacks {}", idx + 1, card.card_id());
        for other in cards.iter().filter(|c| c.card_id() != card.card_id()) {
            assert!(!text.contains(other.card_id()));
        }
        assert!(text.contains("Artists"));
        assert!(text.contains("Song Titles"));
        assert!(text.contains("May 1st 2026"));
        assert_eq!(text.matches("QR unavailable").count(), 1, "only the second event code is missing");
    }
}

#[test]
fn placeholder_only_for_missing_urls() {
    let cards = generate_cards(&vocab("A", 30), &vocab("T", 30), &GenerateOptions::with_count(1).seed(5)).unwrap();

    let texts = page_texts(&render_cards_pdf(&cards, &config()).unwrap());
    assert_eq!(texts[0].matches("QR unavailable").count(), 2);

    let mut config = config();
    config.event_url_1 = Some("https://example.com/one".to_string());
    config.event_url_2 = Some("https://example.com/two".to_string());
    config.show_card_id = false;
    let texts = page_texts(&render_cards_pdf(&cards, &config).unwrap());
    assert!(!texts[0].contains("QR unavailable"));
    assert!(!texts[0].contains("Card 001"));
    assert!(texts[0].contains("MUSIC BINGO"));
}

#[test]
fn broken_logo_falls_back_to_text() {
    let dir = tempfile::tempdir().unwrap();
    let corrupt = dir.path().join("logo.png");
    std::fs::write(&corrupt, b"not a png").unwrap();

    let cards = generate_cards(&vocab("A", 25), &vocab("T", 25), &GenerateOptions::with_count(1).seed(9)).unwrap();

    let mut config = config();
    config.logo_path = Some(corrupt);
    let pdf = render_cards_pdf(&cards, &config).unwrap();
    assert_eq!(page_count(&pdf), 1);

    config.logo_path = Some(dir.path().join("missing.png"));
    let pdf = render_cards_pdf(&cards, &config).unwrap();
    assert_eq!(page_count(&pdf), 1);
}

#[test]
fn real_logo_is_embedded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");
    let mut img = RgbaImage::from_pixel(120, 40, Rgba([255, 255, 255, 0]));
    for x in 10..110 {
        for y in 10..30 {
            img.put_pixel(x, y, Rgba([30, 60, 90, 255]));
        }
    }
    img.save_with_format(&path, ImageFormat::Png).unwrap();

    let cards = generate_cards(&vocab("A", 30), &vocab("T", 30), &GenerateOptions::with_count(2).seed(4)).unwrap();
    let mut config = config();
    config.logo_path = Some(path);
    config.show_card_id = false;

    let pdf = render_cards_pdf(&cards, &config).unwrap();
    assert_eq!(page_count(&pdf), 2);
}

#[test]
fn very_long_entries_still_render() {
    let long = "Supercalifragilisticexpialidocious Antidisestablishmentarianism ".repeat(6);
    let artists: Vec<String> = (0..25).map(|i| format!("{long}{i}")).collect();
    let titles: Vec<String> = (0..25).map(|i| format!("{i}{long}")).collect();

    let cards = generate_cards(&artists, &titles, &GenerateOptions::with_count(1).seed(3)).unwrap();
    let pdf = render_cards_pdf(&cards, &config()).unwrap();
    assert_eq!(page_count(&pdf), 1);
}

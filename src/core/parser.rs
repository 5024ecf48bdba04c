use serde::Serialize;
use std::collections::HashSet;

const SEPARATORS: [char; 3] = ['-', '\u{2013}', '\u{2014}'];

/// Characters that end a line. `\r\n` leaves an empty piece that is skipped.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0B}', '\u{0C}', '\u{1C}', '\u{1D}', '\u{1E}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Outcome of parsing a pasted song list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Deduplicated `(artist, title)` pairs in first-seen order.
    pub songs: Vec<(String, String)>,
    pub unique_artists: Vec<String>,
    pub unique_titles: Vec<String>,
    /// Raw (trimmed) lines that were headers or could not be split.
    pub ignored_lines: Vec<String>,
}

/// Parse free-form song list text into songs and artist/title vocabularies.
///
/// Never fails: decade headers such as `1950s (25)` and lines that do not
/// split into a non-empty artist and title end up in `ignored_lines`.
/// Songs are deduplicated case-insensitively and keep their first casing.
pub fn parse_song_list(text: &str) -> ParseResult {
    let mut result = ParseResult::default();
    let mut seen_songs: HashSet<(String, String)> = HashSet::new();
    let mut artist_keys: HashSet<String> = HashSet::new();
    let mut title_keys: HashSet<String> = HashSet::new();

    for line in text.split(LINE_BREAKS).map(str::trim).filter(|l| !l.is_empty()) {
        if is_decade_header(line) {
            result.ignored_lines.push(line.to_string());
            continue;
        }

        let Some((artist, title)) = split_song_line(line) else {
            result.ignored_lines.push(line.to_string());
            continue;
        };

        let key = (fold_case(&artist), fold_case(&title));
        if !seen_songs.insert(key.clone()) {
            continue;
        }

        let (artist_key, title_key) = key;
        if artist_keys.insert(artist_key) {
            result.unique_artists.push(artist.clone());
        }
        if title_keys.insert(title_key) {
            result.unique_titles.push(title.clone());
        }
        result.songs.push((artist, title));
    }

    result
}

/// Matches `1950s`, `1950s (25)`, `1950s( 25 )` and similar.
fn is_decade_header(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.len() < 5 || !bytes[..4].iter().all(u8::is_ascii_digit) || bytes[4] != b's' {
        return false;
    }
    let rest = line[5..].trim();
    if rest.is_empty() {
        return true;
    }
    let Some(inner) = rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) else {
        return false;
    };
    let inner = inner.trim();
    !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit())
}

/// Split on the first dash-like separator that has whitespace on both sides.
fn split_song_line(line: &str) -> Option<(String, String)> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    for (pos, &(idx, ch)) in chars.iter().enumerate() {
        if !SEPARATORS.contains(&ch) || pos == 0 || pos + 1 >= chars.len() {
            continue;
        }
        if !chars[pos - 1].1.is_whitespace() || !chars[pos + 1].1.is_whitespace() {
            continue;
        }
        let artist = normalize_whitespace(&line[..idx]);
        let title = normalize_whitespace(&line[idx + ch.len_utf8()..]);
        if artist.is_empty() || title.is_empty() {
            return None;
        }
        return Some((artist, title));
    }
    None
}

/// Caseless comparison key: lowercase plus the full case foldings that
/// expand to several characters or merge distinct lowercase forms.
fn fold_case(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\u{DF}' | '\u{1E9E}' => folded.push_str("ss"),
            '\u{17F}' => folded.push('s'),
            '\u{3C2}' => folded.push('\u{3C3}'),
            '\u{149}' => folded.push_str("\u{2BC}n"),
            '\u{FB00}' => folded.push_str("ff"),
            '\u{FB01}' => folded.push_str("fi"),
            '\u{FB02}' => folded.push_str("fl"),
            '\u{FB03}' => folded.push_str("ffi"),
            '\u{FB04}' => folded.push_str("ffl"),
            '\u{FB05}' | '\u{FB06}' => folded.push_str("st"),
            other => folded.extend(other.to_lowercase()),
        }
    }
    folded
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn headers_and_junk_are_ignored() {
        let text = "\n    1950s (25)\n\n    Elvis Presley \u{2013} Jailhouse Rock\n    Chuck Berry - Johnny B. Goode\n    NotAValidLine\n";
        let result = parse_song_list(text);

        assert_eq!(
            result.songs,
            vec![
                ("Elvis Presley".to_string(), "Jailhouse Rock".to_string()),
                ("Chuck Berry".to_string(), "Johnny B. Goode".to_string()),
            ]
        );
        assert_eq!(result.ignored_lines, vec!["1950s (25)", "NotAValidLine"]);
        assert!(result.unique_artists.contains(&"Elvis Presley".to_string()));
        assert!(result.unique_titles.contains(&"Jailhouse Rock".to_string()));
    }

    #[test]
    fn duplicates_fold_case_and_keep_first_casing() {
        let result = parse_song_list("ABBA \u{2013} Waterloo\nabba - waterloo\nABBA \u{2014} Mamma Mia");
        assert_eq!(
            result.songs,
            vec![
                ("ABBA".to_string(), "Waterloo".to_string()),
                ("ABBA".to_string(), "Mamma Mia".to_string()),
            ]
        );
        assert_eq!(result.unique_artists, vec!["ABBA"]);
        assert_eq!(result.unique_titles, vec!["Waterloo", "Mamma Mia"]);
    }

    #[test]
    fn case_folding_merges_expanded_forms() {
        let result = parse_song_list("Die Toten Hosen - Stra\u{DF}e\nDIE TOTEN HOSEN - STRASSE\nKraftwerk - \u{FB01}nale");
        assert_eq!(
            result.songs,
            vec![
                ("Die Toten Hosen".to_string(), "Stra\u{DF}e".to_string()),
                ("Kraftwerk".to_string(), "\u{FB01}nale".to_string()),
            ]
        );
        assert_eq!(fold_case("\u{FB01}NALE"), fold_case("Finale"));
        assert_eq!(fold_case("\u{39F}\u{3A3}"), fold_case("\u{3BF}\u{3C2}"));
    }

    #[test]
    fn every_line_ending_splits_lines() {
        let expected = vec![
            ("ABBA".to_string(), "Waterloo".to_string()),
            ("Queen".to_string(), "Bohemian Rhapsody".to_string()),
            ("Elvis Presley".to_string(), "Jailhouse Rock".to_string()),
        ];
        for sep in ["\r", "\n", "\r\n", "\u{2028}", "\u{2029}", "\u{85}", "\u{0C}"] {
            let text = ["ABBA - Waterloo", "Queen - Bohemian Rhapsody", "Elvis Presley - Jailhouse Rock"].join(sep);
            let result = parse_song_list(&text);
            assert_eq!(result.songs, expected, "separator {sep:?}");
            assert!(result.ignored_lines.is_empty());
        }
    }

    #[test]
    fn classic_mac_list_with_header() {
        let result = parse_song_list("1970s (2)\rABBA - Waterloo\r\rQueen - Bohemian Rhapsody\r");
        assert_eq!(result.songs.len(), 2);
        assert_eq!(result.ignored_lines, vec!["1970s (2)"]);
    }

    #[test]
    fn splits_only_on_first_spaced_separator() {
        let result = parse_song_list("Jay-Z - Empire State Of Mind - Live\r\nA-ha  -   Take   On Me");
        assert_eq!(
            result.songs,
            vec![
                ("Jay-Z".to_string(), "Empire State Of Mind - Live".to_string()),
                ("A-ha".to_string(), "Take On Me".to_string()),
            ]
        );
    }

    #[test]
    fn missing_side_is_ignored() {
        let result = parse_song_list("- Title Only\nArtist -\nNoSpaces-Here");
        assert!(result.songs.is_empty());
        assert_eq!(result.ignored_lines.len(), 3);
    }

    #[test]
    fn decade_header_shapes() {
        assert!(is_decade_header("1950s (25)"));
        assert!(is_decade_header("1980s( 7 )"));
        assert!(is_decade_header("1950s"));
        assert!(!is_decade_header("1950s Rock"));
        assert!(!is_decade_header("1950s (abc)"));
        assert!(!is_decade_header("195s (25)"));
    }
}

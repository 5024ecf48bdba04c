use serde::Serialize;
use sha2::{Digest, Sha256};

/// Number of cells in one 5x5 grid.
pub const GRID_CELLS: usize = 25;
/// Length of the printed card id, taken from the start of the fingerprint.
pub const CARD_ID_LEN: usize = 10;

/// One printable bingo card: a 5x5 artist grid and a 5x5 title grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    artists: Vec<String>,
    titles: Vec<String>,
    card_id: String,
}

impl Card {
    pub(crate) fn new(artists: Vec<String>, titles: Vec<String>, fingerprint: &str) -> Self {
        Self {
            artists,
            titles,
            card_id: fingerprint.chars().take(CARD_ID_LEN).collect(),
        }
    }

    /// Artist cells in reading order (left to right, top to bottom).
    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    /// Recompute the full content fingerprint.
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.artists, &self.titles)
    }
}

/// SHA-256 over the exact cell order: artists joined by newlines, a `---`
/// separator line, then titles joined by newlines. Hex encoded.
pub fn fingerprint<S: AsRef<str>>(artists: &[S], titles: &[S]) -> String {
    let mut hasher = Sha256::new();
    write_joined(&mut hasher, artists);
    hasher.update(b"\n---\n");
    write_joined(&mut hasher, titles);
    let digest = hasher.finalize();
    format!("{digest:x}")
}

fn write_joined<S: AsRef<str>>(hasher: &mut Sha256, items: &[S]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            hasher.update(b"\n");
        }
        hasher.update(item.as_ref().as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(prefix: &str) -> Vec<String> {
        (0..GRID_CELLS).map(|i| format!("{prefix} {i}")).collect()
    }

    #[test]
    fn fingerprint_is_order_sensitive() {
        let artists = words("Artist");
        let titles = words("Song");
        let mut swapped = artists.clone();
        swapped.swap(0, 1);

        assert_ne!(fingerprint(&artists, &titles), fingerprint(&swapped, &titles));
        assert_eq!(fingerprint(&artists, &titles).len(), 64);
    }

    #[test]
    fn separator_keeps_grids_apart() {
        let a = vec!["x".to_string(), "y".to_string()];
        let b = vec!["z".to_string()];
        let c = vec!["x".to_string()];
        let d = vec!["y".to_string(), "z".to_string()];
        assert_ne!(fingerprint(&a, &b), fingerprint(&c, &d));
    }

    #[test]
    fn card_id_is_fingerprint_prefix() {
        let artists = words("Artist");
        let titles = words("Song");
        let print = fingerprint(&artists, &titles);
        let card = Card::new(artists, titles, &print);

        assert_eq!(card.card_id(), &print[..CARD_ID_LEN]);
        assert_eq!(card.fingerprint(), print);
    }
}

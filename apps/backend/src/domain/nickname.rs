//! Lenient matching of a typed guess against a celeb's display name.

use unicode_normalization::UnicodeNormalization;

/// Shortest name token accepted as a guess on its own.
const MIN_TOKEN_CHARS: usize = 2;

fn normalize(text: &str) -> String {
    text.nfkc().collect::<String>().trim().to_lowercase()
}

/// True when `guess` names `name`.
///
/// Both sides are NFKC-normalized, trimmed and lowercased. A guess matches
/// the whole name or any single whitespace-separated token of at least two
/// characters.
///
/// ```
/// use archive_backend::domain::nickname::match_nickname;
///
/// assert!(match_nickname("napoleon", "Napoleon Bonaparte"));
/// assert!(!match_nickname("Nap", "Napoleon Bonaparte"));
/// ```
pub fn match_nickname(guess: &str, name: &str) -> bool {
    let guess = normalize(guess);
    if guess.is_empty() {
        return false;
    }
    let name = normalize(name);
    if guess == name {
        return true;
    }
    name.split_whitespace()
        .any(|token| token.chars().count() >= MIN_TOKEN_CHARS && token == guess)
}

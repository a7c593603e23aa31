//! Search terms and the filename sanitizer.
//!
//! A [`SearchTerm`] is the ordered list of words that survive sanitizing a
//! filename. It is never empty: a filename with nothing left to search for
//! sanitizes to `None`.

use std::fmt;

use phf::phf_set;

/// Reserved separator used when a term is rendered as a single string.
pub const SEPARATOR: char = '+';

/// Release markers that never belong to a title.
static NOISE_TOKENS: phf::Set<&'static str> = phf_set! {
    "bdrip",
    "brrip",
    "720p",
    "1080p",
    "hdrip",
    "bluray",
    "xvid",
    "divx",
    "dvdscr",
    "dvdrip",
    "readnfo",
    "hdtv",
    "web-dl",
    "extended",
    "webrip",
    "ws",
    "vodrip",
    "ntsc",
    "dvd",
    "hd-ts",
    "r5",
    "unrated",
    "remastered",
    "x264",
};

/// Extensions stripped from the end of a filename before splitting.
static FILE_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    "mkv", "mp4", "avi", "m4v", "ts", "webm", "mov", "wmv", "flv", "mpg", "mpeg",
    "srt", "sub", "idx", "ass", "nfo",
};

/// An ordered, non-empty sequence of search words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SearchTerm {
    tokens: Vec<String>,
}

impl SearchTerm {
    /// Build a term from tokens in filename order.
    ///
    /// Returns `None` when no tokens are given.
    pub fn from_tokens<I, S>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    /// Split a `+`-joined term back into tokens.
    pub fn from_joined(joined: &str) -> Option<Self> {
        Self::from_tokens(joined.split(SEPARATOR).filter(|t| !t.is_empty()))
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens, always at least one.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Space-joined form sent to a provider's search endpoint.
    pub fn query(&self) -> String {
        self.tokens.join(" ")
    }

    pub(crate) fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(token)?;
            first = false;
        }
        Ok(())
    }
}

/// Whether `token` is a release marker dropped by [`sanitize`].
pub fn is_noise_token(token: &str) -> bool {
    NOISE_TOKENS.contains(token.to_lowercase().as_str())
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '-' | '_' | '.' | '(' | ')' | ' ' | SEPARATOR)
}

/// Drop the directory part and a trailing media/sidecar extension.
fn strip_extension(filename: &str) -> &str {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    match name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty() && FILE_EXTENSIONS.contains(ext.to_lowercase().as_str()) =>
        {
            stem
        }
        _ => name,
    }
}

/// Turn a raw filename into a search term.
///
/// The extension is stripped, the rest is split on `- _ . ( )`, spaces and
/// the reserved separator, and release markers are removed. Returns `None`
/// when nothing is left.
///
/// # Examples
///
/// ```
/// use reelmatch_parser::sanitize;
///
/// let term = sanitize("Movie.Title.2020.1080p.BluRay.x264.mkv").unwrap();
/// assert_eq!(term.tokens(), ["Movie", "Title", "2020"]);
///
/// assert!(sanitize("1080p.BluRay.x264.mkv").is_none());
/// ```
pub fn sanitize(filename: &str) -> Option<SearchTerm> {
    let stem = strip_extension(filename.trim());

    SearchTerm::from_tokens(
        stem.split(is_delimiter)
            .filter(|token| !token.is_empty() && !is_noise_token(token)),
    )
}

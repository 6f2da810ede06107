//! Hash-based routing for the site's three pages.

/// Application routes, derived from the URL hash.
///
/// URL format:
/// - `#/` → home (latest episodes grid)
/// - `#/episodes` → full episode list
/// - `#/episodes/<id>` → episode detail
#[derive(Clone, Debug, PartialEq)]
pub enum AppRoute {
    /// Landing page with the latest episodes.
    Home,
    /// Full episode list.
    Episodes,
    /// Episode detail page for one feed id.
    Episode {
        /// Feed id, as it appears in the URL.
        id: String,
    },
}

impl AppRoute {
    /// Parse a URL hash into a route. Unknown paths fall back to home.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let path = path.trim_end_matches('/');

        if path.is_empty() {
            return Self::Home;
        }
        if path == "episodes" {
            return Self::Episodes;
        }
        if let Some(id) = path.strip_prefix("episodes/") {
            if !id.is_empty() {
                return Self::Episode {
                    id: decode_segment(id),
                };
            }
        }
        Self::Home
    }

    /// Convert a route back to a URL hash, suitable for anchor hrefs.
    ///
    /// Episode ids are percent-encoded so ids containing `/` or `#` route
    /// back to the same episode.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Episodes => "#/episodes".to_string(),
            Self::Episode { id } => format!("#/episodes/{}", encode_segment(id)),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }
}

/// Percent-encode an episode id for use as a hash path segment.
///
/// Unreserved URL characters pass through; everything else (including `/`
/// and `#`) is escaped byte-wise.
fn encode_segment(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for byte in id.bytes() {
        match byte {
            b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Decode a percent-encoded hash path segment.
///
/// Malformed escapes and invalid UTF-8 fall back to the literal input,
/// matching the parser's no-panic contract.
fn decode_segment(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && let (Some(hi), Some(lo)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2]))
        {
            out.push((hi << 4) | lo);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).unwrap_or_else(|_| segment.to_string())
}

fn hex_val(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_home_variants() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
    }

    #[test]
    fn parses_episode_list() {
        assert_eq!(AppRoute::from_hash("#/episodes"), AppRoute::Episodes);
        assert_eq!(AppRoute::from_hash("#/episodes/"), AppRoute::Episodes);
    }

    #[test]
    fn parses_episode_detail() {
        assert_eq!(
            AppRoute::from_hash("#/episodes/ep-001"),
            AppRoute::Episode {
                id: "ep-001".to_string()
            }
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(AppRoute::from_hash("#/nope/nothing"), AppRoute::Home);
    }

    #[test]
    fn episode_ids_are_percent_encoded_in_hashes() {
        let route = AppRoute::Episode {
            id: "ep/1#2".to_string(),
        };
        assert_eq!(route.to_hash(), "#/episodes/ep%2F1%232");
        assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
    }

    #[test]
    fn malformed_percent_escapes_pass_through() {
        assert_eq!(
            AppRoute::from_hash("#/episodes/50%25off"),
            AppRoute::Episode {
                id: "50%off".to_string()
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/episodes/100%"),
            AppRoute::Episode {
                id: "100%".to_string()
            }
        );
    }

    #[test]
    fn round_trips_to_hash() {
        for route in [
            AppRoute::Home,
            AppRoute::Episodes,
            AppRoute::Episode {
                id: "ep-001".to_string(),
            },
        ] {
            assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
        }
    }
}

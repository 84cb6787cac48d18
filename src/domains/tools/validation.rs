//! Input validation rules shared by the Spotify tools.
//!
//! Every rule is a pure check returning the first violated rule as a
//! [`ToolError::Validation`]. Messages are part of the public contract:
//! callers and tests match on them verbatim. Tools run their rules in a
//! fixed order before touching the remote client.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{ToolError, ToolResult};

/// Largest accepted playlist cover image, after base64 decoding.
pub const MAX_COVER_IMAGE_BYTES: usize = 256 * 1024;

/// Items accepted by a single playlist mutation.
pub const MAX_PLAYLIST_ITEMS_PER_REQUEST: usize = 100;

/// Bounds of the `limit` paging parameter.
pub const MIN_PAGE_LIMIT: i64 = 1;
pub const MAX_PAGE_LIMIT: i64 = 50;

static PLAYABLE_URI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^spotify:(track|episode):[A-Za-z0-9]+$").expect("valid regex"));
static ANY_URI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^spotify:([a-z]+):[A-Za-z0-9]+$").expect("valid regex"));
static BASE64_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+/]+={0,2}$").expect("valid regex"));

/// ISO 3166-1 alpha-2 codes, sorted for binary search.
const ISO_3166_ALPHA2: [&str; 249] = [
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

// ============================================================================
// Identifiers
// ============================================================================

/// A single identifier must contain something other than whitespace.
///
/// `entity` is capitalized, e.g. `"Album"` or `"Playlist"`.
pub fn ensure_id(entity: &str, id: &str) -> ToolResult<()> {
    if id.trim().is_empty() {
        return Err(ToolError::validation(format!("{entity} ID must not be empty")));
    }
    Ok(())
}

/// A batch of identifiers must hold between 1 and `max` non-empty entries.
///
/// `entity` is lowercase, e.g. `"album"`.
pub fn ensure_id_batch(entity: &str, ids: &[String], max: usize) -> ToolResult<()> {
    if ids.is_empty() {
        return Err(ToolError::validation(format!(
            "At least one {entity} ID is required"
        )));
    }
    if ids.len() > max {
        return Err(ToolError::validation(format!(
            "Maximum {max} {entity} IDs allowed"
        )));
    }
    if ids.iter().any(|id| id.trim().is_empty()) {
        return Err(ToolError::validation(format!(
            "All {entity} IDs must be non-empty strings"
        )));
    }
    Ok(())
}

/// A playlist mutation must touch between 1 and `max` items.
///
/// `action` completes "Cannot <action> more than N items at once".
pub fn ensure_item_count(count: usize, max: usize, action: &str) -> ToolResult<()> {
    if count == 0 {
        return Err(ToolError::validation("At least one URI is required"));
    }
    if count > max {
        return Err(ToolError::validation(format!(
            "Cannot {action} more than {max} items at once"
        )));
    }
    Ok(())
}

// ============================================================================
// Markets
// ============================================================================

/// `value` must be an uppercase ISO 3166-1 alpha-2 code.
///
/// `field` names the parameter in the message, e.g. `"Market"`.
pub fn ensure_country_code(field: &str, value: &str) -> ToolResult<()> {
    if value.len() != 2 || ISO_3166_ALPHA2.binary_search(&value).is_err() {
        return Err(ToolError::validation(format!(
            "{field} must be a valid ISO 3166-1 alpha-2 country code"
        )));
    }
    Ok(())
}

/// Optional `market` parameter.
pub fn ensure_market(market: Option<&str>) -> ToolResult<()> {
    market.map_or(Ok(()), |m| ensure_country_code("Market", m))
}

// ============================================================================
// URIs
// ============================================================================

/// Only track and episode URIs can be queued or added to playlists.
///
/// A well-formed URI of another type gets its own message so callers can tell
/// "wrong kind of thing" apart from "not a Spotify URI".
pub fn ensure_playable_uri(uri: &str) -> ToolResult<()> {
    if PLAYABLE_URI_RE.is_match(uri) {
        return Ok(());
    }

    match ANY_URI_RE.captures(uri) {
        Some(caps) => Err(ToolError::validation(format!(
            "Only track and episode URIs are supported, got {} URI: {uri}",
            &caps[1]
        ))),
        None => Err(ToolError::validation(format!(
            "Invalid Spotify URI format: {uri}. Expected spotify:track:<id> or spotify:episode:<id>"
        ))),
    }
}

/// Count bounds first, then every URI in order.
pub fn ensure_playable_uris(uris: &[String], max: usize, action: &str) -> ToolResult<()> {
    ensure_item_count(uris.len(), max, action)?;
    uris.iter().try_for_each(|uri| ensure_playable_uri(uri))
}

// ============================================================================
// Numbers
// ============================================================================

/// Volume must lie in `[0, 100]`.
pub fn ensure_volume(volume: i64) -> ToolResult<u8> {
    u8::try_from(volume)
        .ok()
        .filter(|v| *v <= 100)
        .ok_or_else(|| ToolError::validation("Volume must be between 0 and 100"))
}

/// Page size must lie in `[1, 50]`.
pub fn ensure_limit(limit: i64) -> ToolResult<u32> {
    if !(MIN_PAGE_LIMIT..=MAX_PAGE_LIMIT).contains(&limit) {
        return Err(ToolError::validation(format!(
            "Limit must be between {MIN_PAGE_LIMIT} and {MAX_PAGE_LIMIT}"
        )));
    }
    Ok(limit as u32)
}

/// Offsets and positions must not be negative.
pub fn ensure_non_negative(field: &str, value: i64) -> ToolResult<u64> {
    u64::try_from(value)
        .map_err(|_| ToolError::validation(format!("{field} must be a non-negative integer")))
}

/// Like [`ensure_non_negative`], for values the API takes as 32-bit.
pub fn ensure_index(field: &str, value: i64) -> ToolResult<u32> {
    let value = ensure_non_negative(field, value)?;
    u32::try_from(value).map_err(|_| ToolError::validation(format!("{field} is out of range")))
}

/// Lengths must be strictly positive.
pub fn ensure_positive(field: &str, value: i64) -> ToolResult<u32> {
    if value <= 0 {
        return Err(ToolError::validation(format!(
            "{field} must be a positive integer"
        )));
    }
    u32::try_from(value).map_err(|_| ToolError::validation(format!("{field} is out of range")))
}

// ============================================================================
// Payloads
// ============================================================================

/// Decode a base64 cover image and enforce the size cap.
///
/// Alphabet errors and decode errors share one message; oversize images get
/// another.
pub fn decode_cover_image(data: &str) -> ToolResult<Vec<u8>> {
    if !BASE64_RE.is_match(data) {
        return Err(ToolError::validation("Invalid base64 image data"));
    }

    let bytes = STANDARD
        .decode(data)
        .map_err(|_| ToolError::validation("Invalid base64 image data"))?;

    if bytes.len() > MAX_COVER_IMAGE_BYTES {
        return Err(ToolError::validation("Image size must not exceed 256KB"));
    }
    Ok(bytes)
}

// ============================================================================
// Playlist visibility
// ============================================================================

/// Collaborative playlists are always private.
///
/// An explicit `public: true` alongside `collaborative: true` is rejected; an
/// omitted `public` is coerced to `false`. Otherwise `public` passes through.
pub fn resolve_public_flag(
    public: Option<bool>,
    collaborative: Option<bool>,
) -> ToolResult<Option<bool>> {
    if collaborative != Some(true) {
        return Ok(public);
    }
    if public == Some(true) {
        return Err(ToolError::validation(
            "Collaborative playlists must be private",
        ));
    }
    Ok(Some(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("id{i}")).collect()
    }

    fn message<T: std::fmt::Debug>(result: ToolResult<T>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_iso_table_is_sorted_and_unique() {
        assert!(ISO_3166_ALPHA2.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_ensure_id() {
        assert!(ensure_id("Album", "4aawyAB9vmqN3uQ7FjRGTy").is_ok());
        assert_eq!(message(ensure_id("Album", "")), "Album ID must not be empty");
        assert_eq!(
            message(ensure_id("Playlist", "   ")),
            "Playlist ID must not be empty"
        );
    }

    #[test]
    fn test_id_batch_bounds() {
        assert_eq!(
            message(ensure_id_batch("album", &[], 20)),
            "At least one album ID is required"
        );
        assert!(ensure_id_batch("album", &ids(1), 20).is_ok());
        assert!(ensure_id_batch("album", &ids(20), 20).is_ok());
        assert_eq!(
            message(ensure_id_batch("album", &ids(21), 20)),
            "Maximum 20 album IDs allowed"
        );
    }

    #[test]
    fn test_id_batch_rejects_blank_elements() {
        let batch = vec!["a".to_string(), " ".to_string()];
        assert_eq!(
            message(ensure_id_batch("track", &batch, 50)),
            "All track IDs must be non-empty strings"
        );
    }

    #[test]
    fn test_id_batch_size_checked_before_elements() {
        let mut batch = ids(51);
        batch[0] = String::new();
        assert_eq!(
            message(ensure_id_batch("track", &batch, 50)),
            "Maximum 50 track IDs allowed"
        );
    }

    #[test]
    fn test_item_count() {
        assert_eq!(
            message(ensure_item_count(0, 100, "add")),
            "At least one URI is required"
        );
        assert!(ensure_item_count(100, 100, "add").is_ok());
        assert_eq!(
            message(ensure_item_count(101, 100, "remove")),
            "Cannot remove more than 100 items at once"
        );
    }

    #[test]
    fn test_country_codes() {
        assert!(ensure_country_code("Market", "US").is_ok());
        assert!(ensure_country_code("Market", "SE").is_ok());
        let expected = "Market must be a valid ISO 3166-1 alpha-2 country code";
        assert_eq!(message(ensure_country_code("Market", "USA")), expected);
        assert_eq!(message(ensure_country_code("Market", "us")), expected);
        assert_eq!(message(ensure_country_code("Market", "XX")), expected);
        assert_eq!(
            message(ensure_country_code("Country", "")),
            "Country must be a valid ISO 3166-1 alpha-2 country code"
        );
    }

    #[test]
    fn test_optional_market() {
        assert!(ensure_market(None).is_ok());
        assert!(ensure_market(Some("GB")).is_ok());
        assert!(ensure_market(Some("UK")).is_err());
    }

    #[test]
    fn test_playable_uris() {
        assert!(ensure_playable_uri("spotify:track:4iV5W9uYEdYUVa79Axb7Rh").is_ok());
        assert!(ensure_playable_uri("spotify:episode:512ojhOuo1ktJprKbVcKyQ").is_ok());
    }

    #[test]
    fn test_album_uri_gets_type_message() {
        assert_eq!(
            message(ensure_playable_uri("spotify:album:4aawyAB9vmqN3uQ7FjRGTy")),
            "Only track and episode URIs are supported, got album URI: spotify:album:4aawyAB9vmqN3uQ7FjRGTy"
        );
    }

    #[test]
    fn test_malformed_uri_gets_format_message() {
        for uri in ["", "track:abc", "spotify:track:", "https://open.spotify.com/track/abc"] {
            let msg = message(ensure_playable_uri(uri));
            assert!(msg.starts_with("Invalid Spotify URI format"), "{uri}: {msg}");
        }
    }

    #[test]
    fn test_uri_batch_reports_first_bad_uri() {
        let uris = vec![
            "spotify:track:abc".to_string(),
            "spotify:album:def".to_string(),
            "bogus".to_string(),
        ];
        assert!(message(ensure_playable_uris(&uris, 100, "add")).contains("album URI"));
    }

    #[test]
    fn test_volume_range() {
        assert_eq!(ensure_volume(0).unwrap(), 0);
        assert_eq!(ensure_volume(100).unwrap(), 100);
        assert_eq!(message(ensure_volume(101)), "Volume must be between 0 and 100");
        assert_eq!(message(ensure_volume(-1)), "Volume must be between 0 and 100");
    }

    #[test]
    fn test_limit_range() {
        assert_eq!(ensure_limit(1).unwrap(), 1);
        assert_eq!(ensure_limit(50).unwrap(), 50);
        assert_eq!(message(ensure_limit(0)), "Limit must be between 1 and 50");
        assert_eq!(message(ensure_limit(51)), "Limit must be between 1 and 50");
    }

    #[test]
    fn test_non_negative_and_positive() {
        assert_eq!(ensure_non_negative("Position", 0).unwrap(), 0);
        assert_eq!(
            message(ensure_non_negative("Position", -5)),
            "Position must be a non-negative integer"
        );
        assert_eq!(ensure_index("Offset", 10).unwrap(), 10);
        assert_eq!(
            message(ensure_index("Offset", i64::from(u32::MAX) + 1)),
            "Offset is out of range"
        );
        assert_eq!(ensure_positive("Range length", 1).unwrap(), 1);
        assert_eq!(
            message(ensure_positive("Range length", 0)),
            "Range length must be a positive integer"
        );
    }

    #[test]
    fn test_cover_image_decoding() {
        let encoded = STANDARD.encode(b"\xff\xd8\xff\xe0 jpeg bytes");
        assert_eq!(decode_cover_image(&encoded).unwrap().len(), 15);
    }

    #[test]
    fn test_cover_image_invalid_base64() {
        assert_eq!(message(decode_cover_image("not base64!")), "Invalid base64 image data");
        assert_eq!(message(decode_cover_image("")), "Invalid base64 image data");
        // Right alphabet, wrong length.
        assert_eq!(message(decode_cover_image("abcde")), "Invalid base64 image data");
    }

    #[test]
    fn test_cover_image_size_cap() {
        let at_cap = STANDARD.encode(vec![0u8; MAX_COVER_IMAGE_BYTES]);
        assert!(decode_cover_image(&at_cap).is_ok());

        let over_cap = STANDARD.encode(vec![0u8; MAX_COVER_IMAGE_BYTES + 1]);
        assert_eq!(
            message(decode_cover_image(&over_cap)),
            "Image size must not exceed 256KB"
        );
    }

    #[test]
    fn test_public_flag_resolution() {
        assert_eq!(resolve_public_flag(None, None).unwrap(), None);
        assert_eq!(resolve_public_flag(Some(true), Some(false)).unwrap(), Some(true));
        assert_eq!(resolve_public_flag(None, Some(true)).unwrap(), Some(false));
        assert_eq!(resolve_public_flag(Some(false), Some(true)).unwrap(), Some(false));
        assert_eq!(
            message(resolve_public_flag(Some(true), Some(true))),
            "Collaborative playlists must be private"
        );
    }
}

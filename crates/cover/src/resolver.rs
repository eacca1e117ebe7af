use catalog_tree::LibraryItem;
use serde::{Deserialize, Serialize};

/// Mime hint meaning "not resolved yet"; consumers resolve it after the
/// image bytes arrive.
pub const MIME_AUTO: &str = "image/auto";

const DATA_PREFIX: &str = "data:";
const IMAGE_PREFIX: &str = "image/";

/// Classified cover reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverDescriptor {
    /// Image behind an `http://`, `https://` or `ftp://` URL. The mime type
    /// is the caller's hint, passed through unresolved.
    Remote { url: String, mime_type: String },

    /// Image embedded in a `data:` URI; the payload is the still-encoded
    /// base64 text after the comma.
    InlineBase64 { mime_type: String, payload: String },

    /// No cover available (absent reference, unknown scheme, or a malformed
    /// data URI — none of these are errors).
    None,
}

/// Classifies a free-form cover reference. Pure: no network access and no
/// decoding of the base64 payload.
///
/// A missing hint defaults to [`MIME_AUTO`]. For `data:` URIs with an AUTO
/// hint, the mime type is taken from the URI itself when it names an
/// `image/` type; a URI without a comma or without a `base64` token before
/// the comma classifies as [`CoverDescriptor::None`].
pub fn resolve_cover(url: Option<&str>, hint: Option<&str>) -> CoverDescriptor {
    let Some(url) = url else {
        return CoverDescriptor::None;
    };
    let mut mime_type = hint.unwrap_or(MIME_AUTO).to_string();

    if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("ftp://") {
        return CoverDescriptor::Remote {
            url: url.to_string(),
            mime_type,
        };
    }

    if let Some(body) = url.strip_prefix(DATA_PREFIX) {
        let Some(comma) = body.find(',') else {
            log::debug!("data URI without a comma, treating as no cover");
            return CoverDescriptor::None;
        };
        if mime_type == MIME_AUTO {
            let end = match body.find(';') {
                Some(semi) if semi < comma => semi,
                _ => comma,
            };
            let candidate = &body[..end];
            if candidate.starts_with(IMAGE_PREFIX) {
                mime_type = candidate.to_string();
            }
        }
        return match body.find("base64") {
            Some(pos) if pos < comma => CoverDescriptor::InlineBase64 {
                mime_type,
                payload: body[comma + 1..].to_string(),
            },
            _ => {
                log::debug!("data URI without a base64 token, treating as no cover");
                CoverDescriptor::None
            }
        };
    }

    CoverDescriptor::None
}

/// Classifies an item's cover reference, if it carries one.
pub fn resolve_item_cover(item: &LibraryItem) -> CoverDescriptor {
    resolve_cover(item.cover_ref.as_deref(), None)
}

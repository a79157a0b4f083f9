//! Encoded-snapshot codec.
//!
//! The persisted form of the surface is a PNG image wrapped in a base64 data
//! URI (`data:image/png;base64,…`), the same representation used for the
//! undo history entries. Encoding is synchronous and happens before the
//! stroke that triggered it starts drawing, so history entries always
//! reflect strictly pre-stroke pixels.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use cairo::ImageSurface;

use crate::draw::Surface;

/// URI prefix identifying an encoded surface snapshot.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Errors from encoding or decoding a surface snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The stored value is not a PNG data URI.
    #[error("snapshot is not a PNG data URI")]
    InvalidFormat,
    /// The base64 payload could not be decoded.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Cairo failed to encode or decode the PNG stream.
    #[error("png codec error: {0}")]
    Png(#[from] cairo::IoError),
}

/// Encodes the full surface as a PNG data URI.
pub fn encode_surface(surface: &Surface) -> Result<String, SnapshotError> {
    let mut png = Vec::new();
    surface.image().write_to_png(&mut png)?;
    Ok(format!("{DATA_URI_PREFIX}{}", STANDARD.encode(&png)))
}

/// Decodes a PNG data URI back into an image surface.
///
/// Rejects values without the expected prefix; absent storage is handled by
/// the caller as a normal empty case, so any value reaching this function is
/// expected to decode.
pub fn decode_snapshot(uri: &str) -> Result<ImageSurface, SnapshotError> {
    let payload = uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or(SnapshotError::InvalidFormat)?;
    let png = STANDARD.decode(payload)?;
    let image = ImageSurface::create_from_png(&mut &png[..])?;
    Ok(image)
}

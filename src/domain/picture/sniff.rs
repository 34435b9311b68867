//! Content-type sniffing from leading bytes
//!
//! Follows the WHATWG MIME sniffing signature table for the subset of formats
//! relevant to uploaded pictures. Only the first `SNIFF_LEN` bytes are read.

/// Number of leading bytes considered when sniffing
pub const SNIFF_LEN: usize = 512;

pub const IMAGE_JPEG: &str = "image/jpeg";
pub const IMAGE_PNG: &str = "image/png";
pub const IMAGE_GIF: &str = "image/gif";
pub const IMAGE_WEBP: &str = "image/webp";
pub const IMAGE_BMP: &str = "image/bmp";
pub const IMAGE_ICON: &str = "image/x-icon";
pub const TEXT_HTML: &str = "text/html; charset=utf-8";
pub const TEXT_XML: &str = "text/xml; charset=utf-8";
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const APPLICATION_PDF: &str = "application/pdf";
pub const APPLICATION_ZIP: &str = "application/zip";
pub const APPLICATION_GZIP: &str = "application/x-gzip";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Exact byte prefixes
const EXACT_SIGNATURES: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", IMAGE_PNG),
    (b"\xff\xd8\xff", IMAGE_JPEG),
    (b"GIF87a", IMAGE_GIF),
    (b"GIF89a", IMAGE_GIF),
    (b"BM", IMAGE_BMP),
    (b"\x00\x00\x01\x00", IMAGE_ICON),
    (b"\x00\x00\x02\x00", IMAGE_ICON),
    (b"%PDF-", APPLICATION_PDF),
    (b"PK\x03\x04", APPLICATION_ZIP),
    (b"\x1f\x8b\x08", APPLICATION_GZIP),
    (b"\xef\xbb\xbf", TEXT_PLAIN),
];

/// Case-insensitive markup prefixes, matched after leading whitespace
const MARKUP_SIGNATURES: &[(&[u8], &str)] = &[
    (b"<!DOCTYPE HTML", TEXT_HTML),
    (b"<HTML", TEXT_HTML),
    (b"<HEAD", TEXT_HTML),
    (b"<BODY", TEXT_HTML),
    (b"<SCRIPT", TEXT_HTML),
    (b"<!--", TEXT_HTML),
    (b"<?xml", TEXT_XML),
];

/// Infer a MIME type from the leading bytes of `data`.
///
/// Never fails: unrecognised binary data is `application/octet-stream`.
pub fn sniff_content_type(data: &[u8]) -> &'static str {
    let data = &data[..data.len().min(SNIFF_LEN)];

    if let Some(mime) = match_exact(data) {
        return mime;
    }

    if is_webp(data) {
        return IMAGE_WEBP;
    }

    if let Some(mime) = match_markup(data) {
        return mime;
    }

    if data.iter().any(|&b| is_binary_byte(b)) {
        OCTET_STREAM
    } else {
        TEXT_PLAIN
    }
}

fn match_exact(data: &[u8]) -> Option<&'static str> {
    EXACT_SIGNATURES
        .iter()
        .find(|(signature, _)| data.starts_with(signature))
        .map(|(_, mime)| *mime)
}

/// `RIFF????WEBPVP`
fn is_webp(data: &[u8]) -> bool {
    data.len() >= 14 && data.starts_with(b"RIFF") && &data[8..14] == b"WEBPVP"
}

fn match_markup(data: &[u8]) -> Option<&'static str> {
    let start = data
        .iter()
        .position(|b| !matches!(b, b'\t' | b'\n' | b'\x0c' | b'\r' | b' '))?;
    let data = &data[start..];

    MARKUP_SIGNATURES.iter().find_map(|(signature, mime)| {
        let n = signature.len();

        if data.len() < n || !data[..n].eq_ignore_ascii_case(signature) {
            return None;
        }

        // Tags must be terminated; `<?xml` and comments need no terminator
        let terminated = signature.starts_with(b"<?") || signature.starts_with(b"<!--");

        if terminated || matches!(data.get(n), Some(b' ') | Some(b'>')) {
            Some(*mime)
        } else {
            None
        }
    })
}

fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0b | 0x0e..=0x1a | 0x1c..=0x1f)
}

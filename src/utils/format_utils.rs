//! Byte formatting utilities
//!
//! Utilities for rendering tags and raw buffers in log and analysis output.

/// Renders a four byte block tag, replacing non-printable bytes
pub fn format_tag(tag: &[u8; 4]) -> String {
    tag.iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        })
        .collect()
}

/// Renders the first `max` bytes of a buffer as spaced hex pairs
pub fn format_bytes_hex(bytes: &[u8], max: usize) -> String {
    let shown = bytes.len().min(max);
    let mut out = String::with_capacity(shown * 3 + 4);

    for (i, byte) in bytes[..shown].iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{:02x}", byte));
    }

    if bytes.len() > max {
        out.push_str(" ...");
    }

    out
}

//! Low-level byte reading utilities

/// Locate a NUL-terminated string at the start of `bytes`.
///
/// Returns the string bytes (without the terminator) and the number of bytes
/// consumed including the terminator, or `None` if no NUL byte is present.
pub fn split_nul_terminated(bytes: &[u8]) -> Option<(&[u8], usize)> {
    let end = bytes.iter().position(|&byte| byte == 0)?;
    Some((&bytes[..end], end + 1))
}

/// Decode a path or name component.
///
/// mlocate stores names as raw bytes; anything that is not valid UTF-8 is
/// replaced rather than rejected.
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Copy a fixed-width field out of a slice that is known to be long enough.
pub fn fixed<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out
}

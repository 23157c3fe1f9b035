//! Reading whole text inputs.

use std::io::Read;

use crate::Result;

/// Translate `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Read a stream to the end as UTF-8 with normalized line endings.
pub fn read_all<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(normalize_newlines(&buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_newlines("plain\n"), "plain\n");
        assert_eq!(normalize_newlines("\r\r\n"), "\n\n");
    }

    #[test]
    fn test_read_all() {
        let text = read_all("x\r\ny".as_bytes()).unwrap();
        assert_eq!(text, "x\ny");
    }

    #[test]
    fn test_read_all_invalid_utf8() {
        let bytes: &[u8] = &[0x66, 0xff, 0x66];
        assert!(read_all(bytes).is_err());
    }
}

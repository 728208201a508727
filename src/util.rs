//! Small utility helpers used across modules.

use std::path::Path;

/// Lower-cased extension of an uploaded file name, with the leading dot
/// (".csv"), or an empty string when there is none.
pub fn file_extension(name: &str) -> String {
  Path::new(name)
    .extension()
    .and_then(|e| e.to_str())
    .map(|e| format!(".{}", e.to_lowercase()))
    .unwrap_or_default()
}

/// True when the text has nothing but whitespace in it.
pub fn is_blank(s: &str) -> bool {
  s.trim().is_empty()
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request/response payloads.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut cut = max;
  while !s.is_char_boundary(cut) {
    cut -= 1;
  }
  format!("{}… ({} bytes total)", &s[..cut], s.len())
}

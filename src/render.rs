//! Escaped line formatting and prefix bookkeeping.
//!
//! Keys and values straight out of a database are arbitrary bytes, so every
//! output line goes through [`escape_into`] before it reaches the terminal.
//! Prefixes are computed on the raw, unescaped bytes; escaping happens once
//! per emitted line.

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Escapes `src` onto the end of `dst` so the result is printable ASCII.
///
/// Control characters with a short form become `\n`, `\r`, `\t`; backslash
/// and double quote are backslash-escaped; every other byte outside
/// `0x20..=0x7e` becomes `\xHH`. No delimiting quotes are added.
pub fn escape_into(dst: &mut Vec<u8>, src: &[u8]) {
  for &b in src {
    match b {
      b'\n' => dst.extend_from_slice(b"\\n"),
      b'\r' => dst.extend_from_slice(b"\\r"),
      b'\t' => dst.extend_from_slice(b"\\t"),
      b'\\' => dst.extend_from_slice(b"\\\\"),
      b'"' => dst.extend_from_slice(b"\\\""),
      0x20..=0x7e => dst.push(b),
      _ => {
        dst.extend_from_slice(&[b'\\', b'x', HEX[(b >> 4) as usize], HEX[(b & 0xf) as usize]]);
      }
    }
  }
}

/// Renders `raw` as one escaped, newline-terminated output line.
pub fn line(raw: &[u8]) -> Vec<u8> {
  let mut out = Vec::with_capacity(raw.len() + 1);
  escape_into(&mut out, raw);
  // Escaping leaves no raw newline behind, so this is always exactly one.
  out.push(b'\n');
  out
}

/// Escapes `raw` into an owned string for error messages and logs.
pub fn text(raw: &[u8]) -> String {
  let mut out = Vec::with_capacity(raw.len());
  escape_into(&mut out, raw);
  // The escaped form is pure ASCII.
  String::from_utf8_lossy(&out).into_owned()
}

/// Output shape shared by one whole traversal: the separator, whether every
/// line carries its full bucket path, and the indent width otherwise.
pub struct Style {
  sep: Vec<u8>,
  all_paths: bool,
  indent: usize,
}

impl Style {
  pub fn new(sep: &[u8], all_paths: bool, indent: usize) -> Style {
    Style {
      sep: sep.to_vec(),
      all_paths,
      indent,
    }
  }

  pub fn sep(&self) -> &[u8] {
    &self.sep
  }

  /// Formats a `key -> value` entry line at the given prefix.
  pub fn pair_line(&self, prefix: &[u8], key: &[u8], value: &[u8]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(prefix.len() + key.len() + value.len() + 4);
    raw.extend_from_slice(prefix);
    raw.extend_from_slice(key);
    raw.extend_from_slice(b" -> ");
    raw.extend_from_slice(value);
    line(&raw)
  }

  /// Formats a bucket header line: the prefix, the bucket name, and a
  /// trailing separator.
  pub fn bucket_header(&self, prefix: &[u8], name: &[u8]) -> Vec<u8> {
    line(&self.bucket_path(prefix, name))
  }

  /// The prefix every line inside the named bucket starts with: the raw
  /// header path in full-path mode, the parent prefix plus `indent` spaces
  /// otherwise.
  pub fn child_prefix(&self, prefix: &[u8], name: &[u8]) -> Vec<u8> {
    if self.all_paths {
      self.bucket_path(prefix, name)
    } else {
      let mut next = Vec::with_capacity(prefix.len() + self.indent);
      next.extend_from_slice(prefix);
      next.resize(prefix.len() + self.indent, b' ');
      next
    }
  }

  /// The prefix for the starting bucket itself: empty in indent mode, the
  /// canonical starting path with a trailing separator in full-path mode.
  pub fn start_prefix(&self, canonical: &[u8]) -> Vec<u8> {
    if !self.all_paths {
      return Vec::new();
    }
    let mut prefix = canonical.to_vec();
    if !prefix.ends_with(&self.sep) {
      prefix.extend_from_slice(&self.sep);
    }
    prefix
  }

  fn bucket_path(&self, prefix: &[u8], name: &[u8]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(prefix.len() + name.len() + self.sep.len());
    raw.extend_from_slice(prefix);
    raw.extend_from_slice(name);
    raw.extend_from_slice(&self.sep);
    raw
  }
}

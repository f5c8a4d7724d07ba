//! Depth-first bucket traversal.

use std::io::Write;

use crate::errors::{Error, Result};
use crate::render::{self, Style};
use crate::store::{BucketTree, Visit};

/// Walks `bucket` depth-first in the store's native order, writing one line
/// per entry and one header line per nested bucket.
///
/// A bucket's header always lands before the lines of its contents. The
/// first error aborts the rest of that subtree; whatever was already
/// written stays written.
pub fn walk<B: BucketTree, W: Write>(
  bucket: &B, prefix: &[u8], style: &Style, out: &mut W,
) -> Result<()> {
  bucket.for_each(&mut |key, value| match value {
    Some(value) => {
      out.write_all(&style.pair_line(prefix, key, value))?;
      Ok(())
    }
    None => {
      // The pair said bucket; look it up for real before descending.
      let sub = bucket.bucket(key).ok_or_else(|| Error::BucketVanished {
        name: render::text(key),
      })?;
      out.write_all(&style.bucket_header(prefix, key))?;
      let next = style.child_prefix(prefix, key);
      walk(&sub, &next, style, out)
    }
  })
}

/// Visitor that walks whatever bucket a descent hands it.
pub struct Walker<'a, W> {
  pub prefix: &'a [u8],
  pub style: &'a Style,
  pub out: &'a mut W,
}

impl<W: Write> Visit for Walker<'_, W> {
  type Out = ();

  fn visit<B: BucketTree>(self, bucket: &B) -> Result<()> {
    walk(bucket, self.prefix, self.style, self.out)
  }
}

//! Starting-path parsing and resolution.

use crate::errors::{Error, Result};
use crate::render;
use crate::store::{BucketTree, Visit};

/// Splits `path` into bucket names on `sep`, dropping the empty segments a
/// leading, trailing, or doubled separator leaves behind.
pub fn split<'a>(path: &'a [u8], sep: &[u8]) -> Vec<&'a [u8]> {
  let mut segs = Vec::new();
  if sep.is_empty() {
    // Nothing to split on; the whole path is one name.
    if !path.is_empty() {
      segs.push(path);
    }
    return segs;
  }
  let mut rest = path;
  while let Some(at) = find(rest, sep) {
    let (seg, tail) = rest.split_at(at);
    if !seg.is_empty() {
      segs.push(seg);
    }
    rest = &tail[sep.len()..];
  }
  if !rest.is_empty() {
    segs.push(rest);
  }
  segs
}

/// Rebuilds the canonical display form of a split path: separator-prefixed,
/// one separator between names, no doubled separators.
pub fn canonical(segs: &[&[u8]], sep: &[u8]) -> Vec<u8> {
  let mut path = sep.to_vec();
  for (i, seg) in segs.iter().enumerate() {
    if i > 0 {
      path.extend_from_slice(sep);
    }
    path.extend_from_slice(seg);
  }
  path
}

/// Dives through nested buckets one segment at a time until the segment
/// list runs out, then hands the bucket it lands on to `visit`.
///
/// Each child handle borrows its parent, so the landing bucket never
/// travels back up the stack; the visitor is carried down to it. `walked`
/// is the path already descended, used to report the full path up to the
/// missing bucket rather than a bare name.
pub fn resolve<B: BucketTree, V: Visit>(
  node: &B, segs: &[&[u8]], walked: Vec<u8>, sep: &[u8], visit: V,
) -> Result<V::Out> {
  let Some((first, rest)) = segs.split_first() else {
    return visit.visit(node);
  };
  let mut target = walked;
  target.extend_from_slice(sep);
  target.extend_from_slice(first);
  let Some(sub) = node.bucket(first) else {
    return Err(Error::BucketNotFound {
      path: render::text(&target),
    });
  };
  resolve(&sub, rest, target, sep, visit)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
  haystack.windows(needle.len()).position(|w| w == needle)
}

//! The Bolt side of the house: opening a database and dumping from one
//! starting path, with the store surfaced to the core through [`BucketTree`].

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use bbolt_rs::{Bolt, BoltOptions, BucketApi, BucketImpl, CursorApi, DbApi, TxApi};

use crate::errors::{Error, Result};
use crate::render::Style;
use crate::store::BucketTree;
use crate::walk::Walker;
use crate::{path, walk};

/// Opens `path` read-only, giving up after `timeout`.
///
/// The open itself can block indefinitely on another process's file lock,
/// so it runs on a helper thread and is raced against the deadline. On
/// timeout the helper is abandoned; callers treat the error as fatal and
/// exit right after.
pub fn open(path: &Path, timeout: Duration) -> Result<Bolt> {
  let shown = path.display().to_string();
  let owned = path.to_path_buf();
  let (send, recv) = mpsc::channel();
  thread::spawn(move || {
    let _ = send.send(BoltOptions::default().open(owned));
  });
  match recv.recv_timeout(timeout) {
    Ok(Ok(db)) => Ok(db),
    Ok(Err(source)) => Err(Error::Open {
      path: shown,
      source,
    }),
    Err(RecvTimeoutError::Timeout) => Err(Error::OpenTimeout {
      path: shown,
      timeout,
    }),
    Err(RecvTimeoutError::Disconnected) => {
      Err(Error::Io(io::Error::other("database open thread died")))
    }
  }
}

/// A bolt bucket handle wearing the [`BucketTree`] capability.
pub struct BoltBucket<B>(pub B);

impl<'tx, 'p> BucketTree for BoltBucket<BucketImpl<'tx, 'p>> {
  type Child<'a>
    = BoltBucket<BucketImpl<'tx, 'a>>
  where
    Self: 'a;

  fn bucket<'a>(&'a self, name: &[u8]) -> Option<Self::Child<'a>> {
    self.0.bucket(name).map(BoltBucket)
  }

  fn for_each(&self, f: &mut dyn FnMut(&[u8], Option<&[u8]>) -> Result<()>) -> Result<()> {
    // A cursor item is only good until the cursor moves again, so each
    // pair is handed out before the next step.
    let mut cursor = self.0.cursor();
    let mut item = cursor.first();
    while let Some((key, value)) = item {
      f(key, value)?;
      item = cursor.next();
    }
    Ok(())
  }
}

/// Dumps everything under one starting path in a single read-only pass.
///
/// The path is split on the style's separator, canonicalized, and resolved
/// bucket by bucket; the subtree it names is then walked depth-first. An
/// error resolving or walking this starting path does not touch the
/// database state and leaves other starting paths unaffected.
pub fn dump<W: Write>(db: &Bolt, start: &[u8], style: &Style, out: &mut W) -> Result<()> {
  let sep = style.sep().to_vec();
  let segs = path::split(start, &sep);
  let canonical = path::canonical(&segs, &sep);
  let prefix = style.start_prefix(&canonical);

  let outcome = RefCell::new(Ok(()));
  db.view(|tx| {
    let pass = (|| match segs.split_first() {
      None => {
        // The database root holds buckets only, never plain entries.
        for (name, top) in &tx {
          out.write_all(&style.bucket_header(&prefix, name))?;
          let next = style.child_prefix(&prefix, name);
          walk::walk(&BoltBucket(top), &next, style, out)?;
        }
        Ok(())
      }
      Some((first, rest)) => {
        let mut walked = sep.clone();
        walked.extend_from_slice(first);
        let top = tx
          .bucket(*first)
          .map(BoltBucket)
          .ok_or_else(|| Error::BucketNotFound {
            path: crate::render::text(&walked),
          })?;
        path::resolve(
          &top,
          rest,
          walked,
          &sep,
          Walker {
            prefix: &prefix,
            style,
            out: &mut *out,
          },
        )
      }
    })();
    *outcome.borrow_mut() = pass;
    Ok(())
  })?;
  outcome.into_inner()
}

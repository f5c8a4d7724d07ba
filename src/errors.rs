use std::time::Duration;
use std::{io, result};

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  /// The database file could not be opened at all. Fatal to the whole run.
  #[error("unable to open {path}: {source}")]
  Open {
    path: String,
    #[source]
    source: bbolt_rs::Error,
  },

  /// The open call did not come back before the deadline, most likely
  /// because another process holds the file lock.
  #[error("unable to open {path}: timed out after {timeout:?}")]
  OpenTimeout { path: String, timeout: Duration },

  /// A bucket named in a starting path does not exist. Carries the full
  /// path walked up to and including the missing bucket, already escaped
  /// for display.
  #[error("bucket \"{path}\" not found")]
  BucketNotFound { path: String },

  /// Enumeration said a key holds a bucket, but looking it up again came
  /// back empty. Aborts the rest of that subtree.
  #[error("bucket \"{name}\" disappeared during iteration")]
  BucketVanished { name: String },

  #[error(transparent)]
  Db(#[from] bbolt_rs::Error),

  #[error(transparent)]
  Io(#[from] io::Error),
}

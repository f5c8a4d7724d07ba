use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use bbolt_rs::{Bolt, BucketRwApi, DbRwAPI, TxRwRefApi};
use tempfile::{Builder, NamedTempFile};

use crate::errors::Result;
use crate::store::BucketTree;

/// In-memory stand-in for a bucket hierarchy. A `BTreeMap` gives the same
/// stable, sorted iteration order a real database does.
#[derive(Debug)]
pub(crate) struct MemBucket {
  children: BTreeMap<Vec<u8>, MemNode>,
}

#[derive(Debug)]
enum MemNode {
  Bucket(MemBucket),
  Value(Vec<u8>),
}

impl MemBucket {
  pub(crate) fn new() -> MemBucket {
    MemBucket {
      children: BTreeMap::new(),
    }
  }

  pub(crate) fn put(&mut self, key: &[u8], value: &[u8]) {
    self
      .children
      .insert(key.to_vec(), MemNode::Value(value.to_vec()));
  }

  /// Returns the nested bucket called `name`, creating it if need be.
  pub(crate) fn child(&mut self, name: &[u8]) -> &mut MemBucket {
    let node = self
      .children
      .entry(name.to_vec())
      .or_insert_with(|| MemNode::Bucket(MemBucket::new()));
    match node {
      MemNode::Bucket(b) => b,
      MemNode::Value(_) => panic!("an entry is in the way of bucket {name:?}"),
    }
  }
}

impl BucketTree for MemBucket {
  type Child<'a>
    = &'a MemBucket
  where
    Self: 'a;

  fn bucket<'a>(&'a self, name: &[u8]) -> Option<&'a MemBucket> {
    match self.children.get(name) {
      Some(MemNode::Bucket(b)) => Some(b),
      _ => None,
    }
  }

  fn for_each(&self, f: &mut dyn FnMut(&[u8], Option<&[u8]>) -> Result<()>) -> Result<()> {
    for (key, node) in &self.children {
      let value = match node {
        MemNode::Bucket(_) => None,
        MemNode::Value(v) => Some(v.as_slice()),
      };
      f(key.as_slice(), value)?;
    }
    Ok(())
  }
}

// Children are plain references, so the reference form needs the capability
// too for the recursion to bottom out.
impl BucketTree for &MemBucket {
  type Child<'a>
    = &'a MemBucket
  where
    Self: 'a;

  fn bucket<'a>(&'a self, name: &[u8]) -> Option<&'a MemBucket> {
    (**self).bucket(name)
  }

  fn for_each(&self, f: &mut dyn FnMut(&[u8], Option<&[u8]>) -> Result<()>) -> Result<()> {
    (**self).for_each(f)
  }
}

/// The store from the scenario every mode is checked against:
/// `users` holding `1 -> alice` and `admins` holding `root -> x`.
pub(crate) fn users_store() -> MemBucket {
  let mut root = MemBucket::new();
  let users = root.child(b"users");
  users.put(b"1", b"alice");
  users.child(b"admins").put(b"root", b"x");
  root
}

/// A real database in a temp file, dropped with the file.
pub(crate) struct TestDb {
  _tmp_file: NamedTempFile,
  pub(crate) db: Bolt,
}

impl Deref for TestDb {
  type Target = Bolt;

  fn deref(&self) -> &Self::Target {
    &self.db
  }
}

impl DerefMut for TestDb {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.db
  }
}

impl TestDb {
  pub(crate) fn new() -> crate::Result<TestDb> {
    let tmp_file = Builder::new()
      .prefix("dumpbolt-")
      .suffix(".db")
      .tempfile()?;
    let db = crate::db::open(tmp_file.path(), Duration::from_secs(1))?;
    Ok(TestDb {
      _tmp_file: tmp_file,
      db,
    })
  }
}

/// Seeds the `users` scenario into a real database.
pub(crate) fn seed_users(db: &mut Bolt) -> crate::Result<()> {
  db.update(|mut tx| {
    let mut users = tx.create_bucket(b"users")?;
    users.put(b"1", b"alice")?;
    let mut admins = users.create_bucket(b"admins")?;
    admins.put(b"root", b"x")?;
    Ok(())
  })?;
  Ok(())
}

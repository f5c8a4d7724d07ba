use crate::errors::Result;

/// Read capability over one level of a bucket hierarchy.
///
/// Implemented by the Bolt adapter for real databases and by an in-memory
/// fake for tests. A node only has to answer two questions: "what is the
/// nested bucket called `name`?" and "what do your children look like, in
/// order?". Child handles borrow the parent they were opened from, the way
/// database bucket handles borrow their transaction. The iteration order is
/// whatever the store gives us; it is assumed stable and sorted and is
/// never re-sorted here.
pub trait BucketTree {
  /// Handle to a nested bucket, borrowing this one.
  type Child<'a>: BucketTree
  where
    Self: 'a;

  /// Retrieves a nested bucket by name.
  /// Returns None if no such bucket exists or the name maps to a plain entry.
  fn bucket<'a>(&'a self, name: &[u8]) -> Option<Self::Child<'a>>;

  /// Calls `f` for each direct child in the store's native order. A `None`
  /// value marks a nested bucket; `Some` marks a plain entry. The first
  /// error stops the iteration and is handed back.
  fn for_each(&self, f: &mut dyn FnMut(&[u8], Option<&[u8]>) -> Result<()>) -> Result<()>;
}

/// One-shot consumer for the bucket a descent lands on.
///
/// Descending produces a chain of parent-borrowing handles, so the landing
/// bucket cannot be handed back up the stack; the consumer is brought down
/// to it instead.
pub trait Visit {
  type Out;

  fn visit<B: BucketTree>(self, bucket: &B) -> Result<Self::Out>;
}

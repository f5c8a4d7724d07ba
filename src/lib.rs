mod db;
mod errors;
mod path;
pub mod render;
mod store;
#[cfg(test)]
mod test_support;
mod walk;

pub use db::{dump, open, BoltBucket};
pub use errors::{Error, Result};
pub use path::{canonical, resolve, split};
pub use render::Style;
pub use store::{BucketTree, Visit};
pub use walk::{walk, Walker};

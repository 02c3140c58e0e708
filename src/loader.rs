//! The asynchronous source consumed by [`LoadingStorage`].
//!
//! [`LoadingStorage`]: crate::storage::LoadingStorage

use crate::error::ApiError;

/// Outcome of one asynchronous operation.
pub type LoadResult<T> = Result<T, ApiError>;

/// Completion callback handed to a collaborator.
///
/// Invoked exactly once per triggered operation, possibly from a background
/// thread.
pub type Completion<T> = Box<dyn FnOnce(LoadResult<T>) + Send>;

/// An asynchronous producer of values.
///
/// Implementations call `completion` exactly once with the produced value or
/// the failure. Multiple outstanding calls may be in flight concurrently,
/// each tracked by its own completion.
pub trait Loader {
  type Item;

  fn load(&self, completion: Completion<Self::Item>);
}

/// Adapts a closure into a [`Loader`].
///
/// Useful when the source is a single remote endpoint rather than a type of
/// its own:
///
/// ```rust
/// use catsdogs_core::loader::{Completion, Loader, LoaderFn};
///
/// let loader = LoaderFn::new(|complete: Completion<Vec<u32>>| complete(Ok(vec![1, 2])));
/// loader.load(Box::new(|result| assert_eq!(result.unwrap(), vec![1, 2])));
/// ```
pub struct LoaderFn<T> {
  load: Box<dyn Fn(Completion<T>) + Send + Sync>,
}

impl<T> LoaderFn<T> {
  pub fn new(load: impl Fn(Completion<T>) + Send + Sync + 'static) -> Self {
    Self { load: Box::new(load) }
  }
}

impl<T> Loader for LoaderFn<T> {
  type Item = T;

  fn load(&self, completion: Completion<T>) { (self.load)(completion) }
}

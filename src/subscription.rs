//! Cancellation handles returned by every subscribe call.

/// Allows detaching an observer from whatever it was subscribed to.
pub trait SubscriptionLike {
  /// Stops further delivery to the observer this handle was returned for.
  ///
  /// Idempotent: calling it again, or after the source itself is gone, is a
  /// no-op.
  fn unsubscribe(&mut self);

  fn is_closed(&self) -> bool;
}

/// A one-shot teardown that deregisters an observer.
///
/// The teardown captures only the minimal state needed to deregister (a weak
/// handle to the registry plus the observer ids), never the source itself, so
/// dropping the source first is fine.
pub struct Subscription {
  teardown: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
  pub fn new(teardown: impl FnOnce() + Send + 'static) -> Self {
    Self { teardown: Some(Box::new(teardown)) }
  }

  /// A handle that is already closed and detaches nothing.
  pub fn closed() -> Self { Self { teardown: None } }

  /// Activates RAII behavior: `unsubscribe` runs as soon as the returned
  /// guard goes out of scope.
  pub fn unsubscribe_when_dropped(self) -> SubscriptionGuard<Self> { SubscriptionGuard(self) }
}

impl SubscriptionLike for Subscription {
  fn unsubscribe(&mut self) {
    if let Some(teardown) = self.teardown.take() {
      teardown();
    }
  }

  fn is_closed(&self) -> bool { self.teardown.is_none() }
}

/// An RAII wrapper that unsubscribes when dropped.
///
/// If you do not assign the guard to a variable it is dropped immediately,
/// which is probably not what you want.
#[must_use]
pub struct SubscriptionGuard<T: SubscriptionLike>(pub(crate) T);

impl<T: SubscriptionLike> SubscriptionGuard<T> {
  pub fn new(subscription: T) -> Self { Self(subscription) }
}

impl<T: SubscriptionLike> Drop for SubscriptionGuard<T> {
  fn drop(&mut self) { self.0.unsubscribe() }
}

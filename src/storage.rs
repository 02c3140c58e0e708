//! Observable cache over an asynchronous loader.

use std::sync::{Arc, Mutex, Weak};

use log::debug;

use crate::{
  error::ApiError,
  loader::Loader,
  subscription::Subscription,
};

mod observers;

use observers::Observers;

type SharedObserver<T> = Arc<Mutex<Box<dyn FnMut(T) + Send>>>;

struct State<T> {
  snapshot: Option<T>,
  loading: bool,
  next_observers: Observers<SharedObserver<T>>,
  error_observers: Observers<SharedObserver<ApiError>>,
}

impl<T> Default for State<T> {
  fn default() -> Self {
    Self {
      snapshot: None,
      loading: false,
      next_observers: Observers::default(),
      error_observers: Observers::default(),
    }
  }
}

/// Observable cache over an asynchronous [`Loader`].
///
/// Subscribing registers callbacks and, while nothing has been loaded yet,
/// triggers the first load. Once a load succeeds its result is cached: late
/// subscribers receive the cached snapshot synchronously, without a new
/// load. [`refresh`](LoadingStorage::refresh) re-invokes the loader on
/// demand.
///
/// At most one load is outstanding per storage at any time; triggers that
/// arrive while a load is in flight are dropped. Failures reach only the
/// error observers registered at the moment the failure arrives - they are
/// never cached, and they never clear a previously cached snapshot.
///
/// Completions may arrive on any thread. Observer callbacks run on whatever
/// thread delivers the completion, in registration order; a notification
/// pass iterates a copy of the registry, so a callback may freely cancel
/// subscriptions (its own included) or subscribe anew.
///
/// There is no cancellation of an in-flight load (cancelling a subscription
/// only stops delivery to that observer) and no timeout handling.
pub struct LoadingStorage<L: Loader> {
  loader: L,
  state: Arc<Mutex<State<L::Item>>>,
}

impl<L> LoadingStorage<L>
where
  L: Loader,
  L::Item: Clone + Send + 'static,
{
  pub fn new(loader: L) -> Self { Self { loader, state: Arc::default() } }

  /// Registers `on_next` for future snapshots.
  ///
  /// If a snapshot is already cached it is replayed to `on_next`
  /// synchronously before this returns, and no load is triggered. Otherwise,
  /// if no load is in flight, one is triggered.
  pub fn subscribe<F>(&self, on_next: F) -> Subscription
  where
    F: FnMut(L::Item) + Send + 'static,
  {
    self.attach(Some(Box::new(on_next)), None)
  }

  /// Registers `on_error` for load failures.
  ///
  /// Failures are delivered live only: a failure that happened before this
  /// call is not replayed. Subscribing still triggers a load when nothing is
  /// cached and nothing is in flight.
  pub fn subscribe_err<F>(&self, on_error: F) -> Subscription
  where
    F: FnMut(ApiError) + Send + 'static,
  {
    self.attach(None, Some(Box::new(on_error)))
  }

  /// Registers both callbacks under a single cancellation handle.
  pub fn subscribe_all<N, E>(&self, on_next: N, on_error: E) -> Subscription
  where
    N: FnMut(L::Item) + Send + 'static,
    E: FnMut(ApiError) + Send + 'static,
  {
    self.attach(Some(Box::new(on_next)), Some(Box::new(on_error)))
  }

  /// Triggers a new load, unless one is already in flight.
  ///
  /// Unlike subscribe, refresh never consults the cached snapshot - an idle
  /// storage always re-invokes the loader.
  pub fn refresh(&self) {
    let should_load = {
      let mut state = self.state.lock().unwrap();
      if state.loading {
        false
      } else {
        state.loading = true;
        true
      }
    };

    if should_load {
      self.start_load();
    } else {
      debug!("refresh ignored, load already in flight");
    }
  }

  fn attach(
    &self,
    on_next: Option<Box<dyn FnMut(L::Item) + Send>>,
    on_error: Option<Box<dyn FnMut(ApiError) + Send>>,
  ) -> Subscription {
    let mut replay = None;
    let mut should_load = false;

    let (next_id, error_id) = {
      let mut state = self.state.lock().unwrap();
      let next_id = on_next.map(|observer| {
        let observer: SharedObserver<L::Item> = Arc::new(Mutex::new(observer));
        let id = state.next_observers.add(observer.clone());
        if let Some(snapshot) = state.snapshot.clone() {
          replay = Some((snapshot, observer));
        }
        id
      });
      let error_id = on_error.map(|observer| state.error_observers.add(Arc::new(Mutex::new(observer))));

      if state.snapshot.is_none() && !state.loading {
        state.loading = true;
        should_load = true;
      }

      (next_id, error_id)
    };

    if let Some((snapshot, observer)) = replay {
      let mut observer = observer.lock().unwrap();
      (*observer)(snapshot);
    }
    if should_load {
      self.start_load();
    }

    let state = Arc::downgrade(&self.state);
    Subscription::new(move || detach(&state, next_id, error_id))
  }

  fn start_load(&self) {
    debug!("load started");
    let state = Arc::downgrade(&self.state);
    self.loader.load(Box::new(move |result| {
      let Some(state) = state.upgrade() else { return };
      match result {
        Ok(value) => notify_next(&state, value),
        Err(err) => notify_error(&state, err),
      }
    }));
  }
}

fn detach<T>(state: &Weak<Mutex<State<T>>>, next_id: Option<usize>, error_id: Option<usize>) {
  let Some(state) = state.upgrade() else { return };
  let mut state = state.lock().unwrap();
  if let Some(id) = next_id {
    state.next_observers.remove(id);
  }
  if let Some(id) = error_id {
    state.error_observers.remove(id);
  }
}

fn notify_next<T: Clone>(state: &Arc<Mutex<State<T>>>, value: T) {
  let targets = {
    let mut guard = state.lock().unwrap();
    guard.loading = false;
    guard.snapshot = Some(value.clone());
    guard.next_observers.snapshot()
  };

  for (id, observer) in targets {
    // Deliver only to observers still registered when their turn comes, so
    // a cancellation earlier in the pass sticks.
    let live = state.lock().unwrap().next_observers.contains(id);
    if live {
      let mut observer = observer.lock().unwrap();
      (*observer)(value.clone());
    }
  }
}

fn notify_error<T>(state: &Arc<Mutex<State<T>>>, err: ApiError) {
  debug!("load failed: {err}");
  let targets = {
    let mut guard = state.lock().unwrap();
    guard.loading = false;
    guard.error_observers.snapshot()
  };

  for (id, observer) in targets {
    let live = state.lock().unwrap().error_observers.contains(id);
    if live {
      let mut observer = observer.lock().unwrap();
      (*observer)(err.clone());
    }
  }
}

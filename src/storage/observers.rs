use smallvec::SmallVec;

/// Ordered observer registry with id-based removal.
///
/// Insertion order is delivery order. `SmallVec` keeps the common 0-2
/// observer case off the heap.
pub(crate) struct Observers<F> {
  next_id: usize,
  items: SmallVec<[(usize, F); 2]>,
}

impl<F> Default for Observers<F> {
  fn default() -> Self { Self { next_id: 0, items: SmallVec::new() } }
}

impl<F> Observers<F> {
  /// Registers an observer and returns its unique id.
  pub(crate) fn add(&mut self, observer: F) -> usize {
    let id = self.next_id;
    self.next_id += 1;
    self.items.push((id, observer));
    id
  }

  pub(crate) fn remove(&mut self, id: usize) -> Option<F> {
    self
      .items
      .iter()
      .position(|(i, _)| *i == id)
      .map(|pos| self.items.remove(pos).1)
  }

  pub(crate) fn contains(&self, id: usize) -> bool { self.items.iter().any(|(i, _)| *i == id) }

  #[cfg(test)]
  pub(crate) fn len(&self) -> usize { self.items.len() }
}

impl<F: Clone> Observers<F> {
  /// Copy of the current registration list, in registration order.
  ///
  /// A notification pass iterates this copy instead of the registry itself,
  /// so observers removed mid-pass cannot corrupt the iteration.
  pub(crate) fn snapshot(&self) -> SmallVec<[(usize, F); 2]> { self.items.clone() }
}

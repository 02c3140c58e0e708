use std::sync::{Arc, Mutex};

use log::{info, warn};

use crate::{
  flow::Flow,
  session::{SessionCheckResult, SessionChecking},
};

/// Progress of the application start sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartState {
  NotStarted,
  /// Session check dispatched. A check that never completes parks the flow
  /// here for good; there are no retries and no timeout.
  Checking,
  RunningMain,
  RunningAuth,
}

/// Routes app start to the main or the auth flow based on the session check.
///
/// An existing session goes straight to main; a missing or invalid one goes
/// to authentication. Both terminal states are final for this component.
pub struct AppStartFlow<C, M, A> {
  session: Arc<C>,
  main: Arc<M>,
  auth: Arc<A>,
  state: Arc<Mutex<StartState>>,
}

impl<C, M, A> AppStartFlow<C, M, A> {
  pub fn new(session: Arc<C>, main: Arc<M>, auth: Arc<A>) -> Self {
    Self { session, main, auth, state: Arc::new(Mutex::new(StartState::NotStarted)) }
  }

  pub fn state(&self) -> StartState { *self.state.lock().unwrap() }
}

impl<C, M, A> Flow for AppStartFlow<C, M, A>
where
  C: SessionChecking,
  M: Flow + 'static,
  A: Flow + 'static,
{
  fn start(&self) {
    {
      let mut state = self.state.lock().unwrap();
      if *state != StartState::NotStarted {
        warn!("app start requested again in {state:?}, ignoring");
        return;
      }
      *state = StartState::Checking;
    }

    let main = self.main.clone();
    let auth = self.auth.clone();
    let state = self.state.clone();
    self.session.check(Box::new(move |result| match result {
      SessionCheckResult::Exists => {
        info!("session exists, entering main flow");
        *state.lock().unwrap() = StartState::RunningMain;
        main.start();
      }
      SessionCheckResult::Invalid | SessionCheckResult::NotFound => {
        info!("no usable session ({result:?}), entering auth flow");
        *state.lock().unwrap() = StartState::RunningAuth;
        auth.start();
      }
    }));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::session::CheckCompletion;

  #[derive(Clone, Default)]
  struct SessionCheckingSpy {
    completions: Arc<Mutex<Vec<Option<CheckCompletion>>>>,
  }

  impl SessionChecking for SessionCheckingSpy {
    fn check(&self, completion: CheckCompletion) {
      self.completions.lock().unwrap().push(Some(completion));
    }
  }

  impl SessionCheckingSpy {
    fn request_count(&self) -> usize { self.completions.lock().unwrap().len() }

    fn complete_at(&self, index: usize, result: SessionCheckResult) {
      let completion = self.completions.lock().unwrap()[index].take().expect("completed twice");
      completion(result);
    }
  }

  #[derive(Default)]
  struct FlowSpy {
    started: Mutex<usize>,
  }

  impl Flow for FlowSpy {
    fn start(&self) { *self.started.lock().unwrap() += 1 }
  }

  impl FlowSpy {
    fn started_count(&self) -> usize { *self.started.lock().unwrap() }
  }

  fn make_sut() -> (AppStartFlow<SessionCheckingSpy, FlowSpy, FlowSpy>, SessionCheckingSpy, Arc<FlowSpy>, Arc<FlowSpy>) {
    let session = SessionCheckingSpy::default();
    let main = Arc::new(FlowSpy::default());
    let auth = Arc::new(FlowSpy::default());
    let sut = AppStartFlow::new(Arc::new(session.clone()), main.clone(), auth.clone());
    (sut, session, main, auth)
  }

  #[test]
  fn start_requests_the_session_check_without_starting_flows() {
    let (sut, session, main, auth) = make_sut();

    assert_eq!(session.request_count(), 0);
    assert_eq!(sut.state(), StartState::NotStarted);

    sut.start();

    assert_eq!(session.request_count(), 1);
    assert_eq!(main.started_count(), 0);
    assert_eq!(auth.started_count(), 0);
    assert_eq!(sut.state(), StartState::Checking);
  }

  #[test]
  fn existing_session_starts_main_exactly_once() {
    let (sut, session, main, auth) = make_sut();

    sut.start();
    session.complete_at(0, SessionCheckResult::Exists);

    assert_eq!(main.started_count(), 1);
    assert_eq!(auth.started_count(), 0);
    assert_eq!(sut.state(), StartState::RunningMain);
  }

  #[test]
  fn invalid_session_starts_auth() {
    let (sut, session, main, auth) = make_sut();

    sut.start();
    session.complete_at(0, SessionCheckResult::Invalid);

    assert_eq!(main.started_count(), 0);
    assert_eq!(auth.started_count(), 1);
    assert_eq!(sut.state(), StartState::RunningAuth);
  }

  #[test]
  fn missing_session_starts_auth() {
    let (sut, session, main, auth) = make_sut();

    sut.start();
    session.complete_at(0, SessionCheckResult::NotFound);

    assert_eq!(main.started_count(), 0);
    assert_eq!(auth.started_count(), 1);
    assert_eq!(sut.state(), StartState::RunningAuth);
  }

  #[test]
  fn second_start_is_ignored() {
    let (sut, session, main, _auth) = make_sut();

    sut.start();
    sut.start();
    assert_eq!(session.request_count(), 1);

    session.complete_at(0, SessionCheckResult::Exists);
    sut.start();

    assert_eq!(session.request_count(), 1);
    assert_eq!(main.started_count(), 1);
  }

  #[test]
  fn unanswered_check_parks_the_flow_in_checking() {
    let (sut, _session, main, auth) = make_sut();

    sut.start();

    assert_eq!(sut.state(), StartState::Checking);
    assert_eq!(main.started_count(), 0);
    assert_eq!(auth.started_count(), 0);
  }
}

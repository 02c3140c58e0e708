use std::sync::{Arc, Mutex, Weak};

use log::{debug, warn};

use crate::{
  api::{AuthorizeApi, LogoutApi, ProfileLoader, TokenLoader, TokenSaver},
  loader::Completion,
  session::{CheckCompletion, Credentials, LoginRequest, ProfileInfo, ProfileState, SessionCheckResult, SessionChecking},
};

type ProfileStateListener = Arc<dyn Fn(ProfileState) + Send + Sync>;

#[derive(Default)]
struct SessionState {
  profile_info: Option<ProfileInfo>,
  listener: Option<ProfileStateListener>,
}

/// Bridges the authorize/logout/profile/token collaborators into the
/// [`LoginRequest`] and [`SessionChecking`] capabilities, and publishes every
/// profile change to the registered listener.
///
/// Chained operations stop at the first failure and forward it unchanged.
/// The profile attribute moves `Unauthorized -> Authorized` on any successful
/// profile fetch and back on logout; each transition synchronously invokes
/// the listener with the freshly derived [`ProfileState`].
pub struct SessionController {
  authorize_api: Arc<dyn AuthorizeApi>,
  logout_api: Arc<dyn LogoutApi>,
  token_saver: Arc<dyn TokenSaver>,
  profile_loader: Arc<dyn ProfileLoader>,
  token_loader: Arc<dyn TokenLoader>,
  state: Arc<Mutex<SessionState>>,
}

impl SessionController {
  pub fn new(
    authorize_api: Arc<dyn AuthorizeApi>,
    logout_api: Arc<dyn LogoutApi>,
    token_saver: Arc<dyn TokenSaver>,
    profile_loader: Arc<dyn ProfileLoader>,
    token_loader: Arc<dyn TokenLoader>,
  ) -> Self {
    Self {
      authorize_api,
      logout_api,
      token_saver,
      profile_loader,
      token_loader,
      state: Arc::default(),
    }
  }

  /// Replaces the profile-state listener.
  ///
  /// The listener is not invoked for the current state, only for changes
  /// from here on.
  pub fn set_profile_state_listener(&self, listener: impl Fn(ProfileState) + Send + Sync + 'static) {
    self.state.lock().unwrap().listener = Some(Arc::new(listener));
  }

  /// The state derived from the currently held profile info.
  pub fn profile_state(&self) -> ProfileState {
    derive_state(&self.state.lock().unwrap().profile_info)
  }

  /// Ends the session.
  ///
  /// The remote logout call's own failure is discarded: the held profile
  /// info is cleared (publishing `Unauthorized`) and `completion` runs
  /// regardless.
  pub fn logout(&self, completion: Box<dyn FnOnce() + Send>) {
    let state = Arc::downgrade(&self.state);
    self.logout_api.logout(Box::new(move |result| {
      if let Err(err) = result {
        warn!("logout request failed, clearing session anyway: {err}");
      }
      update_profile(&state, None);
      completion();
    }));
  }
}

impl LoginRequest for SessionController {
  fn start_login(&self, credentials: Credentials, completion: Completion<()>) {
    debug!("login started for {}", credentials.username);
    let token_saver = self.token_saver.clone();
    let profile_loader = self.profile_loader.clone();
    let state = Arc::downgrade(&self.state);

    self.authorize_api.authorize(
      credentials,
      Box::new(move |result| match result {
        Err(err) => completion(Err(err)),
        Ok(token) => token_saver.save(
          token,
          Box::new(move |result| match result {
            Err(err) => completion(Err(err)),
            Ok(()) => profile_loader.load(Box::new(move |result| match result {
              Err(err) => completion(Err(err)),
              Ok(info) => {
                update_profile(&state, Some(info));
                completion(Ok(()))
              }
            })),
          }),
        ),
      }),
    );
  }
}

impl SessionChecking for SessionController {
  fn check(&self, completion: CheckCompletion) {
    let profile_loader = self.profile_loader.clone();
    let state = Arc::downgrade(&self.state);

    self.token_loader.load(Box::new(move |result| match result {
      Err(_) => completion(SessionCheckResult::NotFound),
      Ok(_) => profile_loader.load(Box::new(move |result| match result {
        Ok(info) => {
          update_profile(&state, Some(info));
          completion(SessionCheckResult::Exists)
        }
        // A stored token that cannot fetch a profile is reported as expired;
        // previously held profile info stays as it was.
        Err(_) => completion(SessionCheckResult::Invalid),
      })),
    }));
  }
}

fn derive_state(info: &Option<ProfileInfo>) -> ProfileState {
  info
    .as_ref()
    .map(|info| ProfileState::Authorized(info.username.clone()))
    .unwrap_or(ProfileState::Unauthorized)
}

fn update_profile(state: &Weak<Mutex<SessionState>>, info: Option<ProfileInfo>) {
  // A controller dropped mid-chain skips the update but the caller's
  // completion still runs.
  let Some(state) = state.upgrade() else { return };
  let (listener, new_state) = {
    let mut guard = state.lock().unwrap();
    guard.profile_info = info;
    (guard.listener.clone(), derive_state(&guard.profile_info))
  };
  if let Some(listener) = listener {
    listener(new_state);
  }
}

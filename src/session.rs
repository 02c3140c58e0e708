//! Session domain: credentials, tokens, profile state, and the controller
//! that sequences them.

use serde::{Deserialize, Serialize};

use crate::loader::Completion;

mod controller;

pub use controller::SessionController;

/// Opaque sign-in credentials. The core never validates them locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

/// Opaque bearer token returned by authorize and persisted between runs.
///
/// Created on successful authorize, deleted on logout, queried at app start.
/// Its persistence format belongs to the token store collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInfo {
  pub username: String,
}

/// Authorization state derived from the presence of profile info, published
/// to the profile-state listener on every change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileState {
  Unauthorized,
  Authorized(String),
}

/// Outcome of the session check at app start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCheckResult {
  /// A token is stored and the profile loaded with it.
  Exists,
  /// A token is stored but the profile fetch failed (expired or revoked).
  Invalid,
  /// No token is stored.
  NotFound,
}

/// Capability to sign a user in with credentials.
pub trait LoginRequest: Send + Sync {
  /// Runs authorize, token persistence, and the profile fetch, reporting the
  /// first failure or overall success.
  fn start_login(&self, credentials: Credentials, completion: Completion<()>);
}

pub type CheckCompletion = Box<dyn FnOnce(SessionCheckResult) + Send>;

/// Capability to ask whether a previously authenticated session is alive.
pub trait SessionChecking: Send + Sync {
  fn check(&self, completion: CheckCompletion);
}

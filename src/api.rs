//! Remote collaborator interfaces.
//!
//! The core consumes the narrow traits below; [`RemoteApi`] groups the full
//! backend surface for composition, and the adapter structs project it onto
//! those narrow seams. Wire formats and transport are the implementers'
//! business.

use std::sync::Arc;

use crate::{
  loader::{Completion, Loader},
  model::{Cat, Dog},
  session::{AccessToken, Credentials, ProfileInfo},
};

/// Exchanges credentials for an access token.
pub trait AuthorizeApi: Send + Sync {
  fn authorize(&self, credentials: Credentials, completion: Completion<AccessToken>);
}

/// Invalidates the current session on the backend.
pub trait LogoutApi: Send + Sync {
  fn logout(&self, completion: Completion<()>);
}

/// Persists the access token between runs.
pub trait TokenSaver: Send + Sync {
  fn save(&self, token: AccessToken, completion: Completion<()>);
}

/// Retrieves the persisted access token; fails when none is stored.
pub trait TokenLoader: Send + Sync {
  fn load(&self, completion: Completion<AccessToken>);
}

/// Fetches the profile of the currently authenticated user.
pub trait ProfileLoader: Send + Sync {
  fn load(&self, completion: Completion<ProfileInfo>);
}

/// The full remote surface of the CatsDogs backend.
pub trait RemoteApi: Send + Sync {
  fn authorize(&self, credentials: Credentials, completion: Completion<AccessToken>);
  fn logout(&self, completion: Completion<()>);
  fn profile(&self, completion: Completion<ProfileInfo>);
  fn cats(&self, completion: Completion<Vec<Cat>>);
  fn dogs(&self, completion: Completion<Vec<Dog>>);
}

pub struct ApiAuthorize(pub Arc<dyn RemoteApi>);

impl AuthorizeApi for ApiAuthorize {
  fn authorize(&self, credentials: Credentials, completion: Completion<AccessToken>) {
    self.0.authorize(credentials, completion)
  }
}

pub struct ApiLogout(pub Arc<dyn RemoteApi>);

impl LogoutApi for ApiLogout {
  fn logout(&self, completion: Completion<()>) { self.0.logout(completion) }
}

pub struct ApiProfile(pub Arc<dyn RemoteApi>);

impl ProfileLoader for ApiProfile {
  fn load(&self, completion: Completion<ProfileInfo>) { self.0.profile(completion) }
}

/// Loads the cat catalog through the remote api.
pub struct CatsLoader(pub Arc<dyn RemoteApi>);

impl Loader for CatsLoader {
  type Item = Vec<Cat>;

  fn load(&self, completion: Completion<Vec<Cat>>) { self.0.cats(completion) }
}

/// Loads the dog catalog through the remote api.
pub struct DogsLoader(pub Arc<dyn RemoteApi>);

impl Loader for DogsLoader {
  type Item = Vec<Dog>;

  fn load(&self, completion: Completion<Vec<Dog>>) { self.0.dogs(completion) }
}

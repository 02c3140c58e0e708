//! Assembly of the client core: explicit collaborators in, ready flows out.
//!
//! Nothing here is ambient - the token store, the remote api, and the
//! navigation seam are all constructed by the embedder and passed in.

use std::sync::Arc;

use crate::{
  api::{ApiAuthorize, ApiLogout, ApiProfile, CatsLoader, DogsLoader, RemoteApi, TokenLoader, TokenSaver},
  error::ApiError,
  flow::{AppStartFlow, Flow, MainFlow, Navigator, PushAuthFlow},
  session::SessionController,
  storage::LoadingStorage,
};

/// The assembled client core.
///
/// Screens subscribe to the storages and register the profile-state listener
/// on the controller; `app.start.start()` kicks everything off.
pub struct App {
  pub cats: Arc<LoadingStorage<CatsLoader>>,
  pub dogs: Arc<LoadingStorage<DogsLoader>>,
  pub session: Arc<SessionController>,
  pub start: AppStartFlow<SessionController, MainFlow, PushAuthFlow<SessionController>>,
}

/// Wires the collaborators into storages, the session controller, and the
/// start flow.
///
/// Login completion continues into the main flow; `on_auth_error` receives
/// failed sign-in attempts (rendering them is the embedder's business).
pub fn compose(
  api: Arc<dyn RemoteApi>,
  token_saver: Arc<dyn TokenSaver>,
  token_loader: Arc<dyn TokenLoader>,
  navigator: Arc<dyn Navigator>,
  on_auth_error: impl Fn(ApiError) + Send + Sync + 'static,
) -> App {
  let session = Arc::new(SessionController::new(
    Arc::new(ApiAuthorize(api.clone())),
    Arc::new(ApiLogout(api.clone())),
    token_saver,
    Arc::new(ApiProfile(api.clone())),
    token_loader,
  ));

  let cats = Arc::new(LoadingStorage::new(CatsLoader(api.clone())));
  let dogs = Arc::new(LoadingStorage::new(DogsLoader(api)));

  let main = Arc::new(MainFlow::new(navigator.clone()));
  let auth = Arc::new(PushAuthFlow::new(
    session.clone(),
    navigator,
    {
      let main = main.clone();
      move || main.start()
    },
    on_auth_error,
  ));
  let start = AppStartFlow::new(session.clone(), main, auth);

  App { cats, dogs, session, start }
}

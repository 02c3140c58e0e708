use std::sync::Arc;

use log::{debug, info};

use crate::{
  error::ApiError,
  flow::{Flow, LoginHandlers, Navigator},
  session::LoginRequest,
};

/// Presents login and hands a successful (or skipped) sign-in over to the
/// success continuation.
///
/// Skipping continues as a guest without touching the login request.
/// Submitted credentials are delegated to [`LoginRequest`]; a failure goes
/// to the error continuation and leaves the screen as it is, so retrying
/// stays a user decision.
pub struct PushAuthFlow<R> {
  login_request: Arc<R>,
  navigator: Arc<dyn Navigator>,
  on_complete: Arc<dyn Fn() + Send + Sync>,
  on_error: Arc<dyn Fn(ApiError) + Send + Sync>,
}

impl<R> PushAuthFlow<R> {
  pub fn new(
    login_request: Arc<R>,
    navigator: Arc<dyn Navigator>,
    on_complete: impl Fn() + Send + Sync + 'static,
    on_error: impl Fn(ApiError) + Send + Sync + 'static,
  ) -> Self {
    Self {
      login_request,
      navigator,
      on_complete: Arc::new(on_complete),
      on_error: Arc::new(on_error),
    }
  }
}

impl<R> Flow for PushAuthFlow<R>
where
  R: LoginRequest + 'static,
{
  fn start(&self) {
    let skip = {
      let on_complete = self.on_complete.clone();
      move || {
        info!("login skipped, continuing as guest");
        on_complete()
      }
    };

    let login = {
      let login_request = self.login_request.clone();
      let on_complete = self.on_complete.clone();
      let on_error = self.on_error.clone();
      move |credentials| {
        debug!("credentials submitted");
        let on_complete = on_complete.clone();
        let on_error = on_error.clone();
        login_request.start_login(
          credentials,
          Box::new(move |result| match result {
            Ok(()) => on_complete(),
            Err(err) => on_error(err),
          }),
        );
      }
    };

    self.navigator.show_login(LoginHandlers { skip: Box::new(skip), login: Box::new(login) });
  }
}

//! Flow sequencing: each flow is a unit with a single `start` entry point
//! that hands control to the next screen or flow.

use crate::session::Credentials;

mod app_start;
mod auth;
mod main_flow;

pub use app_start::{AppStartFlow, StartState};
pub use auth::PushAuthFlow;
pub use main_flow::MainFlow;

/// A sequencing unit with a single entry point.
pub trait Flow: Send + Sync {
  fn start(&self);
}

/// Callbacks wired into whatever login screen the embedder presents.
///
/// `login` may fire more than once: a failed attempt leaves the screen up
/// and the user free to retry.
pub struct LoginHandlers {
  pub skip: Box<dyn Fn() + Send + Sync>,
  pub login: Box<dyn Fn(Credentials) + Send + Sync>,
}

/// Navigation seam. The windowing layer behind it is not this crate's
/// concern; flows only ask it to move between the two coarse destinations.
pub trait Navigator: Send + Sync {
  /// Presents the login screen, keeping it up until navigation moves on.
  fn show_login(&self, handlers: LoginHandlers);

  /// Replaces the stack with the main cats/dogs/profile screens.
  fn show_main(&self);
}

use std::sync::Arc;

use log::info;

use crate::flow::{Flow, Navigator};

/// Entry into the signed-in part of the app.
///
/// Screen construction, storage subscriptions, and navigation details live
/// behind [`Navigator`]; starting the flow only hands control over.
pub struct MainFlow {
  navigator: Arc<dyn Navigator>,
}

impl MainFlow {
  pub fn new(navigator: Arc<dyn Navigator>) -> Self { Self { navigator } }
}

impl Flow for MainFlow {
  fn start(&self) {
    info!("entering main screens");
    self.navigator.show_main();
  }
}

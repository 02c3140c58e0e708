//! Entities served by the remote catalog.
//!
//! Entities are plain values: identity, display name, and an image
//! reference. All behavior lives in the storages and flows that carry them.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
  pub id: Uuid,
  pub name: String,
  pub image_url: Url,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
  pub id: Uuid,
  pub name: String,
  pub image_url: Url,
}

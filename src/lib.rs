//! # catsdogs-core
//!
//! The UI-independent core of the CatsDogs client: an observable loading
//! storage that caches what a remote loader produces, and the session
//! machinery that decides whether the app opens on login or on the main
//! screens.
//!
//! ## Quick Start
//!
//! ```rust
//! use catsdogs_core::prelude::*;
//!
//! // A loader that answers immediately; real ones call the network and
//! // complete later, on any thread.
//! let storage = LoadingStorage::new(LoaderFn::new(|complete: Completion<Vec<u32>>| {
//!   complete(Ok(vec![1, 2, 3]));
//! }));
//!
//! // The first subscription triggers the load; late subscribers replay the
//! // cached snapshot without loading again.
//! let mut subscription = storage.subscribe(|entities| println!("got {entities:?}"));
//! storage.refresh();
//! subscription.unsubscribe();
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`LoadingStorage`] | Observable cache triggered by subscription, replaying the last snapshot to late subscribers |
//! | [`Subscription`] | Handle that detaches an observer, idempotently |
//! | [`SessionController`] | Sequences authorize, token persistence, and profile fetch |
//! | [`AppStartFlow`] | Routes app start to main or auth based on the session check |
//! | [`PushAuthFlow`] | Drives the login screen through the [`Navigator`] seam |
//!
//! [`compose`] wires a [`RemoteApi`] and a token store into a ready [`App`].

pub mod api;
pub mod composition;
pub mod error;
pub mod flow;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod session;
pub mod storage;
pub mod subscription;

pub use prelude::*;

//! Convenient imports for the whole public surface.

pub use crate::{
  api::{
    ApiAuthorize, ApiLogout, ApiProfile, AuthorizeApi, CatsLoader, DogsLoader, LogoutApi,
    ProfileLoader, RemoteApi, TokenLoader, TokenSaver,
  },
  composition::{compose, App},
  error::ApiError,
  flow::{AppStartFlow, Flow, LoginHandlers, MainFlow, Navigator, PushAuthFlow, StartState},
  loader::{Completion, LoadResult, Loader, LoaderFn},
  model::{Cat, Dog},
  session::{
    AccessToken, CheckCompletion, Credentials, LoginRequest, ProfileInfo, ProfileState,
    SessionCheckResult, SessionChecking, SessionController,
  },
  storage::LoadingStorage,
  subscription::{Subscription, SubscriptionGuard, SubscriptionLike},
};

//! Infrastructure layer - transport, remote API client, reconciler wiring

pub mod http_client;
pub mod logging;
pub mod membership;
pub mod remote;

pub use http_client::{HttpClient, HttpClientTrait};
pub use membership::{CreateMembershipRequest, MembershipReconciler};
pub use remote::SentryApiClient;

//! Domain layer - entities, identifiers and the collaborator port

pub mod error;
pub mod membership;
pub mod remote;

pub use error::SyncError;
pub use membership::{
    validate_slug, ImportId, MembershipId, MembershipRecord, SlugValidationError,
};
pub use remote::{ProjectsApi, RemoteProject, RemoteTeam};

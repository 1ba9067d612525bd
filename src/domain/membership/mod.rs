//! Membership domain: the managed team/project edge and its identifiers

pub mod identifier;
pub mod record;
pub mod validation;

pub use identifier::{ImportId, MembershipId};
pub use record::MembershipRecord;
pub use validation::{validate_slug, SlugValidationError};

//! Membership reconciliation service

pub mod service;

pub use service::{CreateMembershipRequest, MembershipReconciler};

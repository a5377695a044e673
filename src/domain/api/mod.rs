//! API contract: the shapes exchanged with clients, independent of how they travel.

pub mod requests;
pub mod responses;

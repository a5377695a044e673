//! Users, per-user limits, like edges and session state.

pub mod account;
pub mod likes;
pub mod session;

pub use account::{User, UserLimits};
pub use likes::{LikeKey, LikeLedger, UserLike};
pub use session::{AuthState, UserSession};

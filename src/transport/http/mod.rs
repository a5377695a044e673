pub use crate::domain::api::responses;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod bottles;
    pub mod comments;
    pub mod common;
    pub mod health;
    pub mod likes;
    pub mod users;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;

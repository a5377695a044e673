pub mod api;
pub mod contract;
pub mod model;
pub mod user;

pub mod models;
pub mod piece_code;
pub mod services;
pub mod snapshot;

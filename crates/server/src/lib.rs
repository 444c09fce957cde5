pub mod routes;
pub mod startup;
pub mod state;
pub mod errors;
pub mod openapi;

pub use startup::{build_app, run, serve};
pub use state::ServerState;

pub mod errors;
pub mod extract;
pub mod metrics;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::serve;
pub use state::AppState;

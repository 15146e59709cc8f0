// Composition root.
//
// Responsibilities
// - Read configuration from the environment.
// - Instantiate the in memory infrastructure and seed it.
// - Wire the use case handlers into the HTTP router.

pub mod config;
pub mod http;
pub mod state;

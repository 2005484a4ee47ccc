// Composition root for the time_words service.
//
// Responsibilities
// - Read config from environment.
// - Assemble the HTTP router.
// - Hand the wired state to the server in main.

pub mod config;
pub mod http;
pub mod state;

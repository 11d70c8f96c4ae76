pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod feedback;
pub mod scorer;
pub mod server;
pub mod session;
// cmd and reports belong to the binary (main.rs).

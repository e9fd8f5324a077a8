//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single accept loop, one connection at a time
//! - One request and one response per connection
//! - Requests routed through Engine

mod server;
mod connection;
mod client;

pub use server::{Server, ShutdownHandle};
pub use connection::Connection;
pub use client::Client;

pub mod role;
pub mod server;
pub mod session;

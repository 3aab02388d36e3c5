pub mod bootstrap;
pub mod console;
pub mod server;

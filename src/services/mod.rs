pub mod crawler;
pub mod server;

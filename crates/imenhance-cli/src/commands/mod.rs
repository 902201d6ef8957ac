pub mod compare;
pub mod config;
pub mod enhance;
pub mod info;
mod session;

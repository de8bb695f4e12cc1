pub mod application;
pub mod clients;
pub mod domain;
pub mod error;
pub mod interfaces;
pub mod server;
pub mod utils;

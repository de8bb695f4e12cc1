pub mod ask;
pub mod chat;
pub mod clear;
pub mod model;

pub mod api;
pub mod config;
pub mod scanner;
pub mod services;

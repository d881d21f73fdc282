pub mod config;
pub mod gif_client;

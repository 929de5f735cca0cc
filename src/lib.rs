pub mod app;
pub mod audio;
pub mod config;
pub mod data;
pub mod error;
pub mod games;
pub mod gateway;
pub mod model;
pub mod progress;
pub mod ui;
pub mod view_models;

pub use app::LetrasApp;

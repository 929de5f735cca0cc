pub mod album;
pub mod builder;
pub mod level_menu;
pub mod map;
pub mod quiz;
pub mod tracing;
pub mod victory;

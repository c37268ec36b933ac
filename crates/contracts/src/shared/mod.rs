pub mod config;
pub mod format;
pub mod list;
pub mod loading;
pub mod navigation;
pub mod text;
pub mod theme;

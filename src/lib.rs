pub mod api;
pub mod config;
pub mod derive;
pub mod document;
pub mod logger;
pub mod media;
pub mod model;
pub mod text_utils;
pub mod view;
mod test_data;

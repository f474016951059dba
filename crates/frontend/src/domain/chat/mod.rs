pub mod model;
pub mod transcript;
pub mod ui;

pub mod empty_state;
pub mod file_upload;
pub mod resource_card;
pub mod skeleton;
pub mod stats_card;

pub mod chat;
pub mod overview;
pub mod question_banks;
pub mod resources;
pub mod study_materials;

pub mod scripts;
pub mod summary;

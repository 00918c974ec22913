pub mod clipboard;
pub mod emoji;

mod common;
pub mod pick;
pub mod select;
pub mod show;

pub mod add;
pub mod list;
pub mod mode;
pub mod note;
pub mod remove;
pub mod rename;
pub mod show;
pub mod update;

//! Document bundles for photo notes and the library that keeps a sorted list of them.
//!
//! A document is a `.ptk` directory holding two archived entries: `photo.data` with the
//! full image and `photo.metadata` with the thumbnail and text. A [`library::Library`]
//! scans a root directory for such bundles and keeps an in-memory list of
//! [`library::Entry`] values in sync with it.

pub mod common;
pub mod document;
pub mod library;
pub mod utils;

#[cfg(test)]
mod tests;

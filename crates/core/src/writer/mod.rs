//! Artwork persistence into the library.
//!
//! This module provides the `Writer` trait and the filesystem
//! implementation that saves downloaded artwork bytes under an artist's
//! directory.

mod error;
mod fs_writer;
mod traits;

pub use error::WriteError;
pub use fs_writer::FsWriter;
pub use traits::Writer;

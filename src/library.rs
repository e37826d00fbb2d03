//! Track model and the two ways tracks enter the playlist: picked files
//! and scanned folders.

mod model;
mod scan;

pub use model::*;
pub use scan::{from_paths, scan};

//! Pieces shared by every crate in the workspace: log setup and small
//! response types that are not owned by a single layer.

pub mod types;
pub mod utils;

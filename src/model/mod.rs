//! Data structures representing a mesh object snapshot
//!
//! These types are the boundary between a host 3D tool and the analysis
//! engine. The host's adapter copies vertices, edges, faces, the object
//! transform and UV coverage into a [`MeshObject`]; nothing in this crate
//! ever mutates them.

mod core;
mod uv;

pub use core::{Edge, Face, Mesh, MeshObject, Transform, Vertex};
pub use uv::{UvChannel, UvChannelSet};

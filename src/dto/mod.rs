//! JSON response shapes.
//!
//! Most routes answer with arrays of single-key objects, so the types here
//! carry hand-written `Serialize` impls instead of derived field maps.
mod response;

pub use response::*;

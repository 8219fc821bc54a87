//! Request, response and upstream record shapes.

pub mod artwork;
pub mod path;
pub mod room;
pub mod sensor;

pub use artwork::*;
pub use path::*;
pub use room::*;
pub use sensor::*;

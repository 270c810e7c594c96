//! Part generators. Each part is a [`Pipeline`](crate::pipeline::Pipeline)
//! of named stages over the shared [`BoardEnvelope`](crate::config::BoardEnvelope).

pub mod assembly;
pub mod base;
pub mod board;
pub mod cover;
pub mod vent;

pub use assembly::{Assembly, Part, PartKind};
pub use vent::{VentColumn, VentPattern, VentSpec};

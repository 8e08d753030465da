//! Mazometric — an isometric maze game engine.
//!
//! This crate ties the pieces together: [`Session`] owns one maze, one
//! search (or manual navigation), the discovered path and the animated
//! character, and exposes a snapshot for a presentation layer to render
//! every frame. The graphical front-end (isometric tiles, buttons, video
//! backdrop) is an external collaborator; the bundled binary is a headless
//! ASCII stand-in.

pub mod session;

pub use session::{MOVE_INTERVAL, Mode, Phase, STEP_INTERVAL, Session, Snapshot};

//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die reine Geometrie (Bevel, Frame-Transport, Ring-Mesh) sowie
//! Typen, die zwischen `app`, `ui` und einem externen Renderer geteilt werden.

pub mod axis_snap;
pub mod bevel_geometry;
pub mod frame_transport;
pub mod input_snapshot;
pub mod options;
mod render_scene;
pub mod tube_mesh;

pub use input_snapshot::{InputSnapshot, InputTracker, Key, MouseButton};
pub use options::{EditorOptions, KeyBindings};
pub use render_scene::{RenderScene, TubeRenderData};
pub use tube_mesh::TubeMesh;

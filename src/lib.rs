//! Pipe-Router Library.
//! Rohr-Geometrie (Bevel, Frame-Transport, Ring-Mesh) und Editier-Zustandsmaschine,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DragState, EditState, SelectionState,
    ViewState,
};
pub use core::{
    Camera3D, Control, ControlRef, ExpandedPath, Path, ProjectionMode, Ray, Scene, SimDevice,
    SimDeviceKind, Tube,
};
pub use shared::{
    EditorOptions, InputSnapshot, InputTracker, Key, KeyBindings, MouseButton, RenderScene,
    TubeMesh, TubeRenderData,
};

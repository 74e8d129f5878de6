//! Core-Domänentypen: Kontrollpunkte, Pfade, Rohre, Szene, Kamera, Geraete.

pub mod camera;
pub mod control;
pub mod device;
pub mod path;
pub mod scene;
pub mod tube;

pub use camera::{Camera3D, ProjectionMode, Ray};
pub use control::Control;
pub use device::{SimDevice, SimDeviceKind};
pub use path::{ExpandedPath, Path};
pub use scene::{ControlRef, Scene};
pub use tube::Tube;

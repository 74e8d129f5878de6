//! UI-Layer: übersetzt Eingabe-Schnappschüsse in `AppIntent`s.
//!
//! Fenster und Rendering liegen beim Host, hier entstehen nur Intents.

pub mod input;
mod keyboard;

pub use input::InputState;

//! Application State und abgeleiteter Editier-Zustand.
//!
//! Dieses Modul verwaltet den Zustand der Anwendung (Szene, View, Selektion, Drag).

mod app_state;
mod drag;
mod selection;
mod view;

pub use app_state::{AppState, EditState};
pub use drag::DragState;
pub use selection::SelectionState;
pub use view::ViewState;

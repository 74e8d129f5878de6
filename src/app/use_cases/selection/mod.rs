//! Use-Case-Funktionen für Kontrollpunkt-Selektion und Drag.
//!
//! - `pick` — Screen-Space-Pick des ersten Kontrollpunkts in Reichweite
//! - `drag` — Drag-Lifecycle, Drag-Ebene und Achsen-Lock

mod drag;
mod pick;

pub use drag::{
    begin_axis_lock, begin_drag, drag_selected_control, end_axis_lock, end_drag,
    recapture_axis_lock,
};
pub use pick::{clear_selection, pick_control};

//! Use-Cases für strukturelle und parametrische Editier-Operationen.

mod adjust;
mod add_tube;
mod delete;
mod extrude;

pub use adjust::{adjust_bevel_number, adjust_bevel_radius, adjust_radius};
pub use add_tube::add_tube;
pub use delete::delete_selected_control;
pub use extrude::extrude_selected_control;

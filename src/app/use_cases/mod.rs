//! Use-Cases: fachliche Operationen auf dem AppState.

pub mod editing;
pub mod selection;
pub mod simulation;
pub mod viewport;

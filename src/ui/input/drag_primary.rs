//! Drag-Phase: Achsen-Lock, Zeigerbewegung und Drag-Ende.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;
use crate::shared::MouseButton;
use glam::Vec2;

impl InputState {
    /// Achsen-Lock folgt dem Pegel der Lock-Taste.
    ///
    /// Eingerastet wird nur mit Selektion oder im Frame eines neuen Picks,
    /// damit der Ursprung beim Drücken des Modifiers festgehalten wird.
    pub(crate) fn handle_axis_lock(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let held = ctx.snapshot.is_key_down(ctx.bindings.axis_lock);
        let pick_pending = ctx.snapshot.button_just_pressed(MouseButton::Primary);

        if held && !ctx.axis_lock_engaged && (ctx.has_selection || pick_pending) {
            events.push(AppIntent::AxisLockEngaged);
        } else if !held && ctx.axis_lock_engaged {
            events.push(AppIntent::AxisLockReleased);
        }
    }

    /// Zeigerbewegung bei gehaltener Primärtaste (nicht im Drück-Frame).
    pub(crate) fn handle_drag_update(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let snapshot = ctx.snapshot;
        if self.primary_drag_mode != PrimaryDragMode::ControlMove
            || !snapshot.is_button_down(MouseButton::Primary)
            || snapshot.button_just_pressed(MouseButton::Primary)
            || snapshot.pointer_delta == Vec2::ZERO
        {
            return;
        }

        events.push(AppIntent::ControlDragRequested {
            screen_pos: snapshot.pointer_pos,
        });
    }

    /// Loslassen der Primärtaste beendet den Drag.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if self.primary_drag_mode == PrimaryDragMode::ControlMove
            && !ctx.snapshot.is_button_down(MouseButton::Primary)
        {
            events.push(AppIntent::ControlDragEnded);
            self.primary_drag_mode = PrimaryDragMode::None;
        }
    }
}

//! Pointer and keyboard interaction.
//!
//! Several small state machines share the pointer: sidebar resizing, the
//! axis-drag translation gesture, numeric text editing, and the one-shot
//! shape/texture/color selections. Each event is resolved against the
//! rectangles of a freshly computed [`FrameLayout`], the same ones the
//! board draws.

use iced::Point;
use log::{debug, info, warn};

use crate::layout::{self, FrameLayout, Rect, Viewport};
use crate::state::{ActiveField, AppState, PanelKind, Resizing, ShapeKind};

/// Horizontal or vertical drag pixels per unit of translation.
pub const DRAG_SENSITIVITY: f32 = 0.01;
/// The Z gesture combines both pointer deltas at half sensitivity.
pub const DEPTH_DRAG_SENSITIVITY: f32 = 0.005;
/// Scroll pixels per wheel line.
pub const SCROLL_STEP: f32 = 20.0;

/// A pointer or keyboard event, in window pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardEvent {
    PressedLeft(Point),
    ReleasedLeft(Point),
    Moved(Point),
    Scrolled { lines: f32, cursor: Point },
    Key(KeyInput),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Enter,
    Escape,
    Backspace,
}

/// Feed one event through every machine.
pub fn handle(state: &mut AppState, viewport: &Viewport, event: BoardEvent) {
    let frame = FrameLayout::compute(viewport, &state.panels);
    match event {
        BoardEvent::PressedLeft(p) => on_press(state, viewport, &frame, p),
        BoardEvent::ReleasedLeft(p) => on_release(state, p),
        BoardEvent::Moved(p) => on_move(state, viewport, p),
        BoardEvent::Scrolled { lines, cursor } => on_scroll(state, viewport, &frame, lines, cursor),
        BoardEvent::Key(key) => on_key(state, key),
    }
}

fn on_press(state: &mut AppState, vp: &Viewport, frame: &FrameLayout, p: Point) {
    state.cursor = (p.x, p.y);

    // Value boxes first: clicking one opens an edit, clicking anywhere else
    // while an edit is open discards it before the click is resolved.
    for panel in PanelKind::ALL {
        for axis in 0..3 {
            if frame.transforms[panel.index()].boxes[axis].hit(vp, p.x, p.y) {
                debug!("editing {panel} {}", ["X", "Y", "Z"][axis]);
                state.active_field = Some(ActiveField {
                    panel,
                    axis,
                    text: String::new(),
                });
                return;
            }
        }
    }
    if state.active_field.take().is_some() {
        debug!("edit discarded by click elsewhere");
    }

    // Axis toggles resolve first, then the (possibly updated) selection
    // decides whether holding this press drags the model. Any press arms
    // the drag while axes are selected, wherever it lands.
    for (axis, button) in frame.axis_buttons.iter().enumerate() {
        if button.hit(vp, p.x, p.y) {
            state.toggle_axis(axis);
            debug!(
                "{} axis {}",
                ["X", "Y", "Z"][axis],
                if state.axis_selected[axis] { "selected" } else { "deselected" }
            );
        }
    }
    if state.any_axis_selected() {
        state.dragging_axes = true;
        debug!("axis drag started");
    }

    for panel in PanelKind::ALL {
        if frame.transforms[panel.index()].reset.hit(vp, p.x, p.y) {
            info!("{panel} reset to defaults");
            state.reset_panel(panel);
            return;
        }
    }

    // The side panels are drawn over the top bar when scrolled across it,
    // so their buttons take priority over top-bar controls.
    for (i, button) in frame.shapes.buttons.iter().enumerate() {
        if button.hit(vp, p.x, p.y) {
            let kind = ShapeKind::ALL[i];
            info!("current shape: {kind}");
            state.select_shape(kind);
            return;
        }
    }

    for (i, button) in frame.textures.buttons.iter().enumerate() {
        if button.hit(vp, p.x, p.y) {
            info!("texture {i} assigned");
            state.assign_texture(i);
            return;
        }
    }

    if frame.top_bar.hit(vp, p.x, p.y) && on_top_bar_press(state, vp, frame, p) {
        return;
    }

    if frame.left_handle.hit(vp, p.x, p.y) {
        state.resizing = Some(Resizing::Left);
    } else if frame.right_handle.hit(vp, p.x, p.y) {
        state.resizing = Some(Resizing::Right);
    }
}

/// Returns true when a top-bar control consumed the press.
fn on_top_bar_press(state: &mut AppState, vp: &Viewport, frame: &FrameLayout, p: Point) -> bool {
    for (i, swatch) in frame.top.swatches.iter().enumerate() {
        if swatch.hit(vp, p.x, p.y) {
            info!("swatch {i} picked");
            state.assign_color(i);
            return true;
        }
    }

    let actions: [(&Rect, &str); 8] = [
        (&frame.top.save, "Save"),
        (&frame.top.save_as, "Save as"),
        (&frame.top.undo, "Undo"),
        (&frame.top.redo, "Redo"),
        (&frame.top.new_project, "New Project"),
        (&frame.top.screenshot, "Screenshot"),
        (&frame.top.shade_toggle, "Shade toggle"),
        (&frame.top.shades_box, "Shades"),
    ];
    for (rect, name) in actions {
        if rect.hit(vp, p.x, p.y) {
            info!("{name} pressed");
            return true;
        }
    }

    false
}

fn on_move(state: &mut AppState, vp: &Viewport, p: Point) {
    let dx = p.x - state.cursor.0;
    let dy = p.y - state.cursor.1;
    state.cursor = (p.x, p.y);

    if state.dragging_axes {
        if state.axis_selected[0] {
            state.translate[0] += dx * DRAG_SENSITIVITY;
        }
        if state.axis_selected[1] {
            // Screen Y grows downward; model Y grows upward.
            state.translate[1] -= dy * DRAG_SENSITIVITY;
        }
        if state.axis_selected[2] {
            state.translate[2] += (dx + dy) * DEPTH_DRAG_SENSITIVITY;
        }
        crate::limits::apply_translation_limits(&mut state.translate);
        return;
    }

    match state.resizing {
        Some(Resizing::Left) => {
            let upper = vp.width - state.panels.right_bar_width - layout::MIN_CANVAS_WIDTH;
            state.panels.left_bar_width = (state.panels.left_bar_width + dx)
                .min(upper)
                .max(layout::MIN_LEFT_BAR_WIDTH);
        }
        Some(Resizing::Right) => {
            let upper = vp.width - state.panels.left_bar_width - layout::MIN_CANVAS_WIDTH;
            state.panels.right_bar_width = (state.panels.right_bar_width - dx)
                .min(upper)
                .max(layout::MIN_RIGHT_BAR_WIDTH);
        }
        None => {}
    }
}

fn on_release(state: &mut AppState, p: Point) {
    state.cursor = (p.x, p.y);
    if state.dragging_axes {
        debug!("axis drag finished");
    }
    state.dragging_axes = false;
    state.resizing = None;
}

fn on_scroll(state: &mut AppState, vp: &Viewport, frame: &FrameLayout, lines: f32, cursor: Point) {
    let delta = lines * SCROLL_STEP;

    if frame.left_bar.hit(vp, cursor.x, cursor.y) {
        let (_, ndc_y) = vp.cursor_to_ndc(cursor.x, cursor.y);
        let midline = (frame.left_bar.y1 + frame.left_bar.y2) * 0.5;
        if ndc_y >= midline {
            state.scroll_shapes(delta);
        } else {
            state.scroll_textures(delta);
        }
    } else if frame.right_bar.hit(vp, cursor.x, cursor.y) {
        state.scroll_right(delta);
    }
}

fn on_key(state: &mut AppState, key: KeyInput) {
    if state.active_field.is_none() {
        return;
    }

    match key {
        KeyInput::Char(c) => {
            if let Some(field) = state.active_field.as_mut() {
                let accept = c.is_ascii_digit()
                    || (c == '.' && !field.text.contains('.'))
                    || (c == '-' && field.text.is_empty());
                if accept {
                    field.text.push(c);
                }
            }
        }
        KeyInput::Backspace => {
            if let Some(field) = state.active_field.as_mut() {
                field.text.pop();
            }
        }
        KeyInput::Escape => {
            debug!("edit cancelled");
            state.active_field = None;
        }
        KeyInput::Enter => {
            if let Some(field) = state.active_field.take() {
                match field.text.parse::<f32>() {
                    Ok(value) => {
                        info!(
                            "{} {} set to {value}",
                            field.panel,
                            ["X", "Y", "Z"][field.axis]
                        );
                        state.set_value(field.panel, field.axis, value);
                    }
                    Err(err) => {
                        warn!("discarding unparsable value {:?}: {err}", field.text);
                    }
                }
            }
        }
    }
}

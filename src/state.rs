//! Application state.
//!
//! One explicit struct owns everything the layout engine and the
//! interaction layer read or mutate; there are no hidden globals. All of it
//! lives for the duration of the event loop.

use iced::Color;

use crate::layout;
use crate::limits;

pub const SHAPE_COUNT: usize = 6;

/// Swatch palette of the Colors panel, left to right.
pub const SWATCH_COLORS: [Color; SHAPE_COUNT] = [
    Color::BLACK,
    Color::WHITE,
    Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    },
    Color {
        r: 0.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    },
    Color {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    },
    Color {
        r: 1.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Cube,
    Sphere,
    Cone,
    Cylinder,
    Torus,
    Pyramid,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Cone,
        ShapeKind::Cylinder,
        ShapeKind::Torus,
        ShapeKind::Pyramid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Cube => "Cube",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cone => "Cone",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Torus => "Torus",
            ShapeKind::Pyramid => "Pyramid",
        }
    }

    /// Slot index; doubles as the button position in the Shapes panel grid.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The three value panels on the right bar, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Rotation,
    Scaling,
    Translate,
}

impl PanelKind {
    pub const ALL: [PanelKind; 3] = [PanelKind::Rotation, PanelKind::Scaling, PanelKind::Translate];

    pub fn label(self) -> &'static str {
        match self {
            PanelKind::Rotation => "Rotation",
            PanelKind::Scaling => "Scaling",
            PanelKind::Translate => "Translate",
        }
    }

    pub fn index(self) -> usize {
        match self {
            PanelKind::Rotation => 0,
            PanelKind::Scaling => 1,
            PanelKind::Translate => 2,
        }
    }

    fn default_values(self) -> [f32; 3] {
        match self {
            PanelKind::Scaling => [1.0, 1.0, 1.0],
            PanelKind::Rotation | PanelKind::Translate => [0.0, 0.0, 0.0],
        }
    }
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Adjustable chrome: sidebar widths and scroll offsets, all in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub left_bar_width: f32,
    pub right_bar_width: f32,
    pub shapes_scroll: f32,
    pub textures_scroll: f32,
    pub right_scroll: f32,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            left_bar_width: layout::INITIAL_LEFT_BAR_WIDTH,
            right_bar_width: layout::INITIAL_RIGHT_BAR_WIDTH,
            shapes_scroll: 0.0,
            textures_scroll: 0.0,
            right_scroll: 0.0,
        }
    }
}

/// How a shape slot is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Color(Color),
    Texture(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSlot {
    pub fill: Fill,
}

impl Default for ShapeSlot {
    fn default() -> Self {
        Self {
            fill: Fill::Color(Color {
                r: 0.8,
                g: 0.8,
                b: 0.8,
                a: 1.0,
            }),
        }
    }
}

/// The value box currently being edited as text, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveField {
    pub panel: PanelKind,
    pub axis: usize,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resizing {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub panels: PanelLayout,

    pub rotate: [f32; 3],
    pub scale: [f32; 3],
    pub translate: [f32; 3],

    /// Toggle set: any combination of X/Y/Z may be selected at once.
    pub axis_selected: [bool; 3],
    pub dragging_axes: bool,

    pub resizing: Option<Resizing>,

    /// Last observed cursor position in window pixels; also the drag anchor
    /// while a resize or axis drag is in flight.
    pub cursor: (f32, f32),

    pub active_field: Option<ActiveField>,

    pub current_shape: Option<ShapeKind>,
    pub current_color: Color,
    pub slots: [ShapeSlot; SHAPE_COUNT],
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            panels: PanelLayout::default(),
            rotate: [0.0; 3],
            scale: [1.0, 1.0, 1.0],
            translate: [0.0; 3],
            axis_selected: [false; 3],
            dragging_axes: false,
            resizing: None,
            cursor: (0.0, 0.0),
            active_field: None,
            current_shape: None,
            current_color: SWATCH_COLORS[1],
            slots: [ShapeSlot::default(); SHAPE_COUNT],
        }
    }

    pub fn values(&self, panel: PanelKind) -> &[f32; 3] {
        match panel {
            PanelKind::Rotation => &self.rotate,
            PanelKind::Scaling => &self.scale,
            PanelKind::Translate => &self.translate,
        }
    }

    pub fn values_mut(&mut self, panel: PanelKind) -> &mut [f32; 3] {
        match panel {
            PanelKind::Rotation => &mut self.rotate,
            PanelKind::Scaling => &mut self.scale,
            PanelKind::Translate => &mut self.translate,
        }
    }

    /// Set one transform component. Translation is re-clamped on every
    /// write so the stored vector always satisfies the border policy.
    pub fn set_value(&mut self, panel: PanelKind, axis: usize, value: f32) {
        if axis >= 3 {
            return;
        }
        self.values_mut(panel)[axis] = value;
        if panel == PanelKind::Translate {
            limits::apply_translation_limits(&mut self.translate);
        }
    }

    pub fn reset_panel(&mut self, panel: PanelKind) {
        *self.values_mut(panel) = panel.default_values();
        if panel == PanelKind::Translate {
            limits::apply_translation_limits(&mut self.translate);
        }
    }

    pub fn toggle_axis(&mut self, axis: usize) {
        if let Some(flag) = self.axis_selected.get_mut(axis) {
            *flag = !*flag;
        }
    }

    pub fn any_axis_selected(&self) -> bool {
        self.axis_selected.iter().any(|&s| s)
    }

    pub fn select_shape(&mut self, kind: ShapeKind) {
        self.current_shape = Some(kind);
    }

    /// Assign a texture to the current shape's slot. Out-of-range indices
    /// and "no current shape" are no-ops.
    pub fn assign_texture(&mut self, texture: usize) {
        if texture >= SHAPE_COUNT {
            return;
        }
        if let Some(kind) = self.current_shape {
            self.slots[kind.index()].fill = Fill::Texture(texture);
        }
    }

    /// Pick a swatch color; a current shape switches to color mode.
    pub fn assign_color(&mut self, swatch: usize) {
        let Some(color) = SWATCH_COLORS.get(swatch) else {
            return;
        };
        self.current_color = *color;
        if let Some(kind) = self.current_shape {
            self.slots[kind.index()].fill = Fill::Color(*color);
        }
    }

    pub fn scroll_shapes(&mut self, delta_px: f32) {
        self.panels.shapes_scroll =
            (self.panels.shapes_scroll + delta_px).clamp(-layout::MAX_SCROLL, 0.0);
    }

    pub fn scroll_textures(&mut self, delta_px: f32) {
        self.panels.textures_scroll =
            (self.panels.textures_scroll + delta_px).clamp(-layout::MAX_SCROLL, 0.0);
    }

    pub fn scroll_right(&mut self, delta_px: f32) {
        self.panels.right_scroll =
            (self.panels.right_scroll + delta_px).clamp(-layout::MAX_SCROLL, 0.0);
    }

    /// The text shown in a value box: the in-progress buffer while editing,
    /// the stored value otherwise.
    pub fn value_text(&self, panel: PanelKind, axis: usize) -> String {
        let label = ["X", "Y", "Z"][axis.min(2)];
        if let Some(field) = &self.active_field {
            if field.panel == panel && field.axis == axis {
                return format!("{label}: {}", field.text);
            }
        }
        format!("{label}: {:.3}", self.values(panel)[axis.min(2)])
    }

    pub fn is_editing(&self, panel: PanelKind, axis: usize) -> bool {
        self.active_field
            .as_ref()
            .is_some_and(|f| f.panel == panel && f.axis == axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_toggle_is_self_inverse() {
        let mut state = AppState::new();
        for axis in 0..3 {
            let before = state.axis_selected[axis];
            state.toggle_axis(axis);
            assert_eq!(state.axis_selected[axis], !before);
            state.toggle_axis(axis);
            assert_eq!(state.axis_selected[axis], before);
        }
        // Out-of-range toggles do nothing.
        state.toggle_axis(7);
        assert!(!state.any_axis_selected());
    }

    #[test]
    fn translate_writes_are_always_clamped() {
        let mut state = AppState::new();
        state.set_value(PanelKind::Translate, 0, 99.0);
        let borders = limits::current_borders(state.translate[2]);
        assert_eq!(state.translate[0], borders.x_max);
        assert!(state.translate[2] <= limits::Z_MAX);
    }

    #[test]
    fn rotation_and_scale_are_unclamped() {
        let mut state = AppState::new();
        state.set_value(PanelKind::Rotation, 2, 720.0);
        assert_eq!(state.rotate[2], 720.0);
        state.set_value(PanelKind::Scaling, 1, 9.5);
        assert_eq!(state.scale[1], 9.5);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = AppState::new();
        state.rotate = [10.0, 20.0, 30.0];
        state.scale = [2.0, 2.0, 2.0];
        state.translate = [0.1, 0.1, -1.0];

        state.reset_panel(PanelKind::Rotation);
        assert_eq!(state.rotate, [0.0; 3]);
        state.reset_panel(PanelKind::Scaling);
        assert_eq!(state.scale, [1.0; 3]);
        state.reset_panel(PanelKind::Translate);
        // Reset goes through the same clamp as any other write.
        assert_eq!(state.translate[2], limits::Z_MAX);
        assert_eq!(state.translate[0], 0.0);
    }

    #[test]
    fn texture_assignment_requires_a_current_shape() {
        let mut state = AppState::new();
        state.assign_texture(2);
        assert!(state.slots.iter().all(|s| matches!(s.fill, Fill::Color(_))));

        state.select_shape(ShapeKind::Torus);
        state.assign_texture(2);
        assert_eq!(
            state.slots[ShapeKind::Torus.index()].fill,
            Fill::Texture(2)
        );
    }

    #[test]
    fn out_of_range_slot_indices_are_no_ops() {
        let mut state = AppState::new();
        state.select_shape(ShapeKind::Cube);
        state.assign_texture(SHAPE_COUNT);
        assert!(matches!(
            state.slots[ShapeKind::Cube.index()].fill,
            Fill::Color(_)
        ));
        state.assign_color(99);
        assert_eq!(state.current_color, SWATCH_COLORS[1]);
    }

    #[test]
    fn color_pick_overrides_texture_mode() {
        let mut state = AppState::new();
        state.select_shape(ShapeKind::Sphere);
        state.assign_texture(1);
        state.assign_color(2);
        assert_eq!(
            state.slots[ShapeKind::Sphere.index()].fill,
            Fill::Color(SWATCH_COLORS[2])
        );
    }

    #[test]
    fn scrolls_stay_in_range() {
        let mut state = AppState::new();
        for _ in 0..100 {
            state.scroll_right(-60.0);
            state.scroll_shapes(-60.0);
        }
        assert_eq!(state.panels.right_scroll, -layout::MAX_SCROLL);
        assert_eq!(state.panels.shapes_scroll, -layout::MAX_SCROLL);

        for _ in 0..200 {
            state.scroll_right(60.0);
        }
        assert_eq!(state.panels.right_scroll, 0.0);
    }

    #[test]
    fn value_text_prefers_the_edit_buffer() {
        let mut state = AppState::new();
        state.translate[1] = 0.25;
        assert_eq!(state.value_text(PanelKind::Translate, 1), "Y: 0.250");

        state.active_field = Some(ActiveField {
            panel: PanelKind::Translate,
            axis: 1,
            text: "12.".into(),
        });
        assert_eq!(state.value_text(PanelKind::Translate, 1), "Y: 12.");
        // Other boxes still show their stored values.
        assert_eq!(state.value_text(PanelKind::Translate, 0), "X: 0.000");
    }
}

//! Frame layout in normalized device coordinates.
//!
//! Everything the window shows is an axis-aligned NDC rectangle computed
//! here, once per frame, from the window size and the adjustable panel
//! state. The board draws these rectangles and the interaction layer
//! hit-tests against the same ones, so the two can never disagree.
//!
//! NDC is the usual [-1, 1] square with Y up; window pixels have the origin
//! at the top-left with Y down. The conversion lives on [`Viewport`].

use crate::state::PanelLayout;

pub const INITIAL_LEFT_BAR_WIDTH: f32 = 220.0;
pub const INITIAL_RIGHT_BAR_WIDTH: f32 = 280.0;
pub const MIN_LEFT_BAR_WIDTH: f32 = 150.0;
pub const MIN_RIGHT_BAR_WIDTH: f32 = 200.0;
pub const MIN_CANVAS_WIDTH: f32 = 400.0;
pub const TOP_BAR_HEIGHT: f32 = 110.0;
pub const HANDLE_WIDTH: f32 = 6.0;
pub const MAX_SCROLL: f32 = 400.0;

/// Side panel block sizes, in pixels.
const STACK_PANEL_HEIGHT: f32 = 310.0;
const STACK_PANEL_GAP: f32 = 20.0;
const STACK_BUTTON_HEIGHT: f32 = 75.0;
const STACK_ROW_GAP: f32 = 10.0;
const TRANSFORM_PANEL_HEIGHT: f32 = 180.0;
const TRANSFORM_PANEL_GAP: f32 = 15.0;
const VALUE_BOX_HEIGHT: f32 = 25.0;
const SCROLLBAR_WIDTH: f32 = 8.0;

/// Axis buttons keep fixed NDC sizes so they hug the sidebar edge at any
/// window size.
const AXIS_BUTTON_SIZE: f32 = 0.035;
const AXIS_BUTTON_GAP: f32 = 0.002;

/// Window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A horizontal pixel span as an NDC delta.
    pub fn px_to_ndc_x(&self, px: f32) -> f32 {
        2.0 * px / self.width
    }

    /// A vertical pixel span as an NDC delta.
    pub fn px_to_ndc_y(&self, px: f32) -> f32 {
        2.0 * px / self.height
    }

    /// A cursor position (top-left origin, Y down) as an NDC point.
    pub fn cursor_to_ndc(&self, px: f32, py: f32) -> (f32, f32) {
        (2.0 * px / self.width - 1.0, 1.0 - 2.0 * py / self.height)
    }

    /// The viewport the layout math runs against: never narrower than the
    /// sidebars plus the minimum canvas. The real window is not resized;
    /// undersized windows simply clip.
    pub fn effective(&self, panels: &PanelLayout) -> Viewport {
        let min_width = MIN_CANVAS_WIDTH + panels.left_bar_width + panels.right_bar_width;
        Viewport {
            width: self.width.max(min_width),
            height: self.height,
        }
    }
}

/// An axis-aligned NDC rectangle. `(x1, y1)` is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Rect {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> (f32, f32) {
        ((self.x1 + self.x2) * 0.5, (self.y1 + self.y2) * 0.5)
    }

    /// Closed-interval containment. A rectangle with `x1 > x2` or `y1 > y2`
    /// contains nothing.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Whether a cursor position in window pixels falls inside.
    pub fn hit(&self, viewport: &Viewport, px: f32, py: f32) -> bool {
        let (x, y) = viewport.cursor_to_ndc(px, py);
        self.contains(x, y)
    }

    /// Grow (or shrink, with a negative amount) on all four sides.
    pub fn expanded(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x1 - dx, self.y1 - dy, self.x2 + dx, self.y2 + dy)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScrollBar {
    pub track: Rect,
    pub thumb: Rect,
}

/// A 2×3 button grid inside a scrollable panel.
#[derive(Debug, Clone, Copy)]
pub struct StackPanel {
    pub panel: Rect,
    pub buttons: [Rect; 6],
    pub scrollbar: Option<ScrollBar>,
}

#[derive(Debug, Clone, Copy)]
pub struct TransformPanel {
    pub panel: Rect,
    pub boxes: [Rect; 3],
    pub reset: Rect,
}

#[derive(Debug, Clone, Copy)]
pub struct TopBar {
    pub logo: Rect,
    pub save: Rect,
    pub save_as: Rect,
    pub undo: Rect,
    pub redo: Rect,
    pub project_name: Rect,
    pub new_project: Rect,
    pub screenshot: Rect,
    pub colors_panel: Rect,
    pub swatches: [Rect; 6],
    pub shade_toggle: Rect,
    pub shades_box: Rect,
}

/// Every docked rectangle for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameLayout {
    pub left_bar: Rect,
    pub right_bar: Rect,
    pub top_bar: Rect,
    pub left_handle: Rect,
    pub right_handle: Rect,
    pub canvas: Rect,
    pub axis_buttons: [Rect; 3],
    pub top: TopBar,
    pub shapes: StackPanel,
    pub textures: StackPanel,
    pub transforms: [TransformPanel; 3],
    pub right_scrollbar: ScrollBar,
}

impl FrameLayout {
    /// Lay the whole frame out. Pure: same inputs, same rectangles.
    pub fn compute(viewport: &Viewport, panels: &PanelLayout) -> Self {
        let vp = viewport.effective(panels);

        let left_edge = -1.0 + vp.px_to_ndc_x(panels.left_bar_width);
        let right_edge = 1.0 - vp.px_to_ndc_x(panels.right_bar_width);
        let top_edge = 1.0 - vp.px_to_ndc_y(TOP_BAR_HEIGHT);
        let handle_w = vp.px_to_ndc_x(HANDLE_WIDTH);

        let left_bar = Rect::new(-1.0, -1.0, left_edge, top_edge);
        let right_bar = Rect::new(right_edge, -1.0, 1.0, top_edge);
        let top_bar = Rect::new(-1.0, top_edge, 1.0, 1.0);
        let left_handle = Rect::new(left_edge - handle_w, -1.0, left_edge, top_edge);
        let right_handle = Rect::new(right_edge, -1.0, right_edge + handle_w, top_edge);

        let canvas = Rect::new(
            left_edge + vp.px_to_ndc_x(6.0),
            -1.0,
            right_edge - vp.px_to_ndc_x(6.0),
            top_edge - vp.px_to_ndc_y(6.0),
        );

        let axis_y1 = canvas.y1 + 0.03;
        let axis_buttons = std::array::from_fn(|i| {
            let x1 = left_edge + i as f32 * (AXIS_BUTTON_SIZE + AXIS_BUTTON_GAP);
            Rect::new(x1, axis_y1, x1 + AXIS_BUTTON_SIZE, axis_y1 + AXIS_BUTTON_SIZE)
        });

        let top = top_bar_layout(&vp);

        let stack_panel_w = vp.px_to_ndc_x(panels.left_bar_width * 0.85);
        let stack_panel_h = vp.px_to_ndc_y(STACK_PANEL_HEIGHT);
        let stack_x1 = -1.0 + vp.px_to_ndc_x(5.0);

        let textures_y1 = -1.0 + vp.px_to_ndc_y(5.0) + vp.px_to_ndc_y(panels.textures_scroll);
        let textures = stack_panel(
            &vp,
            Rect::new(stack_x1, textures_y1, stack_x1 + stack_panel_w, textures_y1 + stack_panel_h),
            panels.textures_scroll,
        );

        let shapes_y1 = -1.0
            + vp.px_to_ndc_y(5.0 + STACK_PANEL_HEIGHT + STACK_PANEL_GAP)
            + vp.px_to_ndc_y(panels.shapes_scroll);
        let shapes = stack_panel(
            &vp,
            Rect::new(stack_x1, shapes_y1, stack_x1 + stack_panel_w, shapes_y1 + stack_panel_h),
            panels.shapes_scroll,
        );

        let transform_w = vp.px_to_ndc_x(panels.right_bar_width * 0.85);
        let transform_h = vp.px_to_ndc_y(TRANSFORM_PANEL_HEIGHT);
        let transform_gap = vp.px_to_ndc_y(TRANSFORM_PANEL_GAP);
        let transform_x1 = right_edge + vp.px_to_ndc_x(5.0);
        let stack_base = -1.0 + vp.px_to_ndc_y(50.0) + vp.px_to_ndc_y(panels.right_scroll);
        let transforms = std::array::from_fn(|i| {
            let y1 = stack_base + i as f32 * (transform_h + transform_gap);
            transform_panel(
                &vp,
                Rect::new(transform_x1, y1, transform_x1 + transform_w, y1 + transform_h),
            )
        });

        let right_scrollbar = right_scrollbar(&vp, top_edge, panels.right_scroll);

        FrameLayout {
            left_bar,
            right_bar,
            top_bar,
            left_handle,
            right_handle,
            canvas,
            axis_buttons,
            top,
            shapes,
            textures,
            transforms,
            right_scrollbar,
        }
    }
}

fn top_bar_layout(vp: &Viewport) -> TopBar {
    let margin_x = vp.px_to_ndc_x(10.0);
    let top_y2 = 1.0 - vp.px_to_ndc_y(8.0);

    let logo_x1 = -1.0 + margin_x;
    let logo = Rect::new(
        logo_x1,
        top_y2 - vp.px_to_ndc_y(48.0),
        logo_x1 + vp.px_to_ndc_x(120.0),
        top_y2,
    );

    let group_x1 = logo.x2 + margin_x;
    let group_x2 = group_x1 + vp.px_to_ndc_x(140.0);
    let button_h = vp.px_to_ndc_y(28.0);
    let gap_v = vp.px_to_ndc_y(6.0);

    let save = Rect::new(group_x1, logo.y2 - button_h, group_x2, logo.y2);
    let save_as = Rect::new(group_x1, save.y1 - gap_v - button_h, group_x2, save.y1 - gap_v);

    let under_y2 = save_as.y1 - gap_v;
    let half_w = (group_x2 - group_x1 - margin_x) * 0.5;
    let undo = Rect::new(
        group_x1,
        under_y2 - button_h,
        group_x1 + half_w - margin_x * 0.5,
        under_y2,
    );
    let redo = Rect::new(undo.x2 + margin_x * 0.5, under_y2 - button_h, group_x2, under_y2);

    let pname_half = vp.px_to_ndc_x(150.0);
    let project_name = Rect::new(
        -pname_half,
        logo.y2 - vp.px_to_ndc_y(26.0),
        pname_half,
        logo.y2,
    );

    let np_half = vp.px_to_ndc_x(75.0);
    let np_y2 = project_name.y1 - vp.px_to_ndc_y(8.0);
    let new_project = Rect::new(-np_half, np_y2 - button_h, np_half, np_y2);

    let shot_x2 = 1.0 - vp.px_to_ndc_x(50.0);
    let screenshot = Rect::new(
        shot_x2 - vp.px_to_ndc_x(48.0),
        logo.y2 - vp.px_to_ndc_y(48.0),
        shot_x2,
        logo.y2,
    );

    let colors_w = vp.px_to_ndc_x(220.0);
    let mut colors_x1 = project_name.x2 + margin_x;
    let mut colors_x2 = colors_x1 + colors_w;
    let limit = screenshot.x1 - margin_x;
    if colors_x2 > limit {
        colors_x2 = limit;
        colors_x1 = colors_x2 - colors_w;
    }
    let colors_panel = Rect::new(colors_x1, top_y2 - vp.px_to_ndc_y(80.0), colors_x2, top_y2);

    let swatch_w = vp.px_to_ndc_x(20.0);
    let swatch_h = vp.px_to_ndc_y(20.0);
    let swatch_gap = vp.px_to_ndc_x(5.0);
    let swatch_x = colors_panel.x1 + margin_x;
    let swatch_y2 = colors_panel.y2 - vp.px_to_ndc_y(30.0);
    let swatches = std::array::from_fn(|i| {
        let x1 = swatch_x + i as f32 * (swatch_w + swatch_gap);
        Rect::new(x1, swatch_y2 - swatch_h, x1 + swatch_w, swatch_y2)
    });

    let shade_y2 = swatches[0].y1 - vp.px_to_ndc_y(5.0);
    let shade_toggle = Rect::new(
        swatch_x,
        shade_y2 - vp.px_to_ndc_y(22.0),
        swatch_x + vp.px_to_ndc_x(22.0),
        shade_y2,
    );
    let shades_x1 = shade_toggle.x2 + vp.px_to_ndc_x(5.0);
    let shades_box = Rect::new(
        shades_x1,
        shade_y2 - vp.px_to_ndc_y(22.0),
        shades_x1 + vp.px_to_ndc_x(80.0),
        shade_y2,
    );

    TopBar {
        logo,
        save,
        save_as,
        undo,
        redo,
        project_name,
        new_project,
        screenshot,
        colors_panel,
        swatches,
        shade_toggle,
        shades_box,
    }
}

fn stack_panel(vp: &Viewport, panel: Rect, scroll: f32) -> StackPanel {
    let button_w = (panel.width() - vp.px_to_ndc_x(40.0)) * 0.5;
    let button_h = vp.px_to_ndc_y(STACK_BUTTON_HEIGHT);
    let button_gap = vp.px_to_ndc_x(8.0);
    let row_gap = vp.px_to_ndc_y(STACK_ROW_GAP);

    let content_h = button_h * 3.0 + row_gap * 2.0;
    let max_inner = (content_h - panel.height()).max(0.0);
    let inner_offset = vp.px_to_ndc_y(-scroll).clamp(0.0, max_inner);

    let row1_y = panel.y2 - vp.px_to_ndc_y(50.0) + inner_offset;
    let buttons = std::array::from_fn(|i| {
        let row = (i / 2) as f32;
        let col = (i % 2) as f32;
        let x1 = panel.x1 + vp.px_to_ndc_x(10.0) + col * (button_w + button_gap);
        let y_top = row1_y - row * (button_h + row_gap);
        Rect::new(x1, y_top - button_h, x1 + button_w, y_top)
    });

    let scrollbar = (max_inner > 0.0).then(|| {
        let bar_w = vp.px_to_ndc_x(SCROLLBAR_WIDTH);
        let x2 = panel.x2 - vp.px_to_ndc_x(5.0);
        let track = Rect::new(
            x2 - bar_w,
            panel.y1 + vp.px_to_ndc_y(10.0),
            x2,
            panel.y2 - vp.px_to_ndc_y(10.0),
        );
        let thumb_h = track.height() * (panel.height() / content_h);
        let progress = (inner_offset / max_inner).clamp(0.0, 1.0);
        let thumb_y2 = track.y2 - progress * (track.height() - thumb_h);
        ScrollBar {
            track,
            thumb: Rect::new(track.x1, thumb_y2 - thumb_h, track.x2, thumb_y2),
        }
    });

    StackPanel {
        panel,
        buttons,
        scrollbar,
    }
}

fn transform_panel(vp: &Viewport, panel: Rect) -> TransformPanel {
    let box_h = vp.px_to_ndc_y(VALUE_BOX_HEIGHT);
    let box_x1 = panel.x1 + vp.px_to_ndc_x(15.0);
    let box_x2 = box_x1 + panel.width() - vp.px_to_ndc_x(30.0);
    let first_top = panel.y2 - vp.px_to_ndc_y(70.0);
    let step = box_h + vp.px_to_ndc_y(2.0);

    let boxes = std::array::from_fn(|i| {
        let top = first_top - i as f32 * step;
        Rect::new(box_x1, top - box_h, box_x2, top)
    });

    let reset_y2 = boxes[2].y1 - vp.px_to_ndc_y(10.0);
    let reset = Rect::new(
        box_x1,
        reset_y2 - vp.px_to_ndc_y(25.0),
        box_x1 + vp.px_to_ndc_x(60.0),
        reset_y2,
    );

    TransformPanel {
        panel,
        boxes,
        reset,
    }
}

fn right_scrollbar(vp: &Viewport, top_edge: f32, scroll: f32) -> ScrollBar {
    let bar_w = vp.px_to_ndc_x(SCROLLBAR_WIDTH);
    let track = Rect::new(1.0 - bar_w, -1.0, 1.0, top_edge);

    let stack_h = vp.px_to_ndc_y(TRANSFORM_PANEL_HEIGHT * 3.0 + TRANSFORM_PANEL_GAP * 2.0);
    let max_scroll = (stack_h - track.height()).max(0.0);
    let progress = if max_scroll > 0.0 {
        (vp.px_to_ndc_y(-scroll) / max_scroll).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let thumb_h = track.height() * 0.3;
    let thumb_y2 = track.y2 - progress * (track.height() - thumb_h);
    ScrollBar {
        track,
        thumb: Rect::new(track.x1, thumb_y2 - thumb_h, track.x2, thumb_y2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_viewport() -> Viewport {
        Viewport::new(1000.0, 600.0)
    }

    /// The inverse of `cursor_to_ndc`, for aiming synthetic clicks.
    pub fn ndc_to_cursor(vp: &Viewport, x: f32, y: f32) -> (f32, f32) {
        ((x + 1.0) * 0.5 * vp.width, (1.0 - y) * 0.5 * vp.height)
    }

    #[test]
    fn pixel_deltas_scale_linearly() {
        let vp = default_viewport();
        assert_eq!(vp.px_to_ndc_x(0.0), 0.0);
        assert_eq!(vp.px_to_ndc_x(500.0), 1.0);
        assert_eq!(vp.px_to_ndc_y(300.0), 1.0);
        assert_eq!(vp.px_to_ndc_x(250.0), 2.0 * 250.0 / 1000.0);
    }

    #[test]
    fn cursor_corners_map_to_ndc_corners() {
        let vp = default_viewport();
        assert_eq!(vp.cursor_to_ndc(0.0, 0.0), (-1.0, 1.0));
        assert_eq!(vp.cursor_to_ndc(1000.0, 600.0), (1.0, -1.0));
        assert_eq!(vp.cursor_to_ndc(500.0, 300.0), (0.0, 0.0));
    }

    #[test]
    fn contains_is_boundary_inclusive() {
        let r = Rect::new(-0.5, -0.25, 0.5, 0.25);
        assert!(r.contains(-0.5, 0.0));
        assert!(r.contains(0.5, 0.0));
        assert!(r.contains(0.0, -0.25));
        assert!(r.contains(0.0, 0.25));
        assert!(r.contains(-0.5, -0.25));
        assert!(!r.contains(0.5001, 0.0));
    }

    #[test]
    fn malformed_rect_contains_nothing() {
        let r = Rect::new(0.5, 0.0, -0.5, 0.2);
        assert!(!r.contains(0.0, 0.1));
        assert!(!r.contains(0.5, 0.1));
    }

    #[test]
    fn effective_width_clamps_undersized_windows() {
        let panels = PanelLayout::default();
        let narrow = Viewport::new(500.0, 600.0);
        let eff = narrow.effective(&panels);
        assert_eq!(
            eff.width,
            MIN_CANVAS_WIDTH + panels.left_bar_width + panels.right_bar_width
        );

        let wide = Viewport::new(1400.0, 600.0);
        assert_eq!(wide.effective(&panels).width, 1400.0);
    }

    #[test]
    fn chrome_edges_follow_bar_widths() {
        let vp = default_viewport();
        let panels = PanelLayout::default();
        let layout = FrameLayout::compute(&vp, &panels);

        assert!((layout.left_bar.x2 - (-1.0 + 2.0 * 220.0 / 1000.0)).abs() < 1e-6);
        assert!((layout.right_bar.x1 - (1.0 - 2.0 * 280.0 / 1000.0)).abs() < 1e-6);
        assert!((layout.top_bar.y1 - (1.0 - 2.0 * 110.0 / 600.0)).abs() < 1e-6);

        // The canvas sits strictly between the bars, under the top bar.
        assert!(layout.canvas.x1 > layout.left_bar.x2 - 1e-6);
        assert!(layout.canvas.x2 < layout.right_bar.x1 + 1e-6);
        assert!(layout.canvas.y2 < layout.top_bar.y1);
    }

    #[test]
    fn handles_straddle_the_bar_edges() {
        let vp = default_viewport();
        let layout = FrameLayout::compute(&vp, &PanelLayout::default());

        assert_eq!(layout.left_handle.x2, layout.left_bar.x2);
        assert_eq!(layout.right_handle.x1, layout.right_bar.x1);
        assert!(layout.left_handle.width() > 0.0);
    }

    #[test]
    fn transform_panels_stack_upward_with_gaps() {
        let vp = default_viewport();
        let layout = FrameLayout::compute(&vp, &PanelLayout::default());

        let [rotation, scaling, translate] = layout.transforms;
        assert!(scaling.panel.y1 > rotation.panel.y2);
        assert!(translate.panel.y1 > scaling.panel.y2);

        let gap = scaling.panel.y1 - rotation.panel.y2;
        assert!((gap - vp.px_to_ndc_y(15.0)).abs() < 1e-6);
    }

    #[test]
    fn value_boxes_nest_inside_their_panel() {
        let vp = default_viewport();
        let layout = FrameLayout::compute(&vp, &PanelLayout::default());

        for tp in &layout.transforms {
            for b in &tp.boxes {
                assert!(b.x1 >= tp.panel.x1 && b.x2 <= tp.panel.x2);
                assert!(b.y1 >= tp.panel.y1 && b.y2 <= tp.panel.y2);
            }
            assert!(tp.boxes[0].y1 > tp.boxes[1].y2);
        }
    }

    #[test]
    fn stack_buttons_form_two_columns_three_rows() {
        let vp = default_viewport();
        let layout = FrameLayout::compute(&vp, &PanelLayout::default());

        let b = &layout.shapes.buttons;
        // Columns align.
        assert!((b[0].x1 - b[2].x1).abs() < 1e-6);
        assert!((b[1].x1 - b[3].x1).abs() < 1e-6);
        // Rows descend.
        assert!(b[0].y1 > b[2].y2);
        assert!(b[2].y1 > b[4].y2);
        // No scrollbar: three rows fit a 310 px panel.
        assert!(layout.shapes.scrollbar.is_none());
    }

    #[test]
    fn right_scroll_moves_the_transform_stack() {
        let vp = default_viewport();
        let mut panels = PanelLayout::default();
        let at_rest = FrameLayout::compute(&vp, &panels);

        panels.right_scroll = -100.0;
        let scrolled = FrameLayout::compute(&vp, &panels);

        let delta = at_rest.transforms[0].panel.y1 - scrolled.transforms[0].panel.y1;
        assert!((delta - vp.px_to_ndc_y(100.0)).abs() < 1e-6);
    }

    #[test]
    fn right_scrollbar_thumb_stays_on_track() {
        let vp = default_viewport();
        for scroll in [0.0, -100.0, -250.0, -400.0] {
            let panels = PanelLayout {
                right_scroll: scroll,
                ..PanelLayout::default()
            };
            let layout = FrameLayout::compute(&vp, &panels);
            let bar = layout.right_scrollbar;
            assert!(bar.thumb.y2 <= bar.track.y2 + 1e-6);
            assert!(bar.thumb.y1 >= bar.track.y1 - 1e-6);
        }
    }

    #[test]
    fn axis_buttons_sit_on_the_sidebar_edge() {
        let vp = default_viewport();
        let layout = FrameLayout::compute(&vp, &PanelLayout::default());

        assert_eq!(layout.axis_buttons[0].x1, layout.left_bar.x2);
        assert!(layout.axis_buttons[1].x1 > layout.axis_buttons[0].x2);
        assert!(layout.axis_buttons[2].x1 > layout.axis_buttons[1].x2);
        for b in &layout.axis_buttons {
            assert!(layout.canvas.contains(b.x2, b.y2));
        }
    }

    #[test]
    fn hit_and_draw_share_the_same_rectangle() {
        let vp = default_viewport();
        let layout = FrameLayout::compute(&vp, &PanelLayout::default());

        // A synthetic click at the drawn center of the cube button lands in
        // the same rect the interaction layer tests against.
        let (cx, cy) = layout.shapes.buttons[0].center();
        let (px, py) = ndc_to_cursor(&vp, cx, cy);
        assert!(layout.shapes.buttons[0].hit(&vp, px, py));
    }

    #[test]
    fn colors_panel_never_overlaps_the_screenshot_button() {
        let vp = Viewport::new(820.0, 600.0);
        let panels = PanelLayout::default();
        let layout = FrameLayout::compute(&vp, &panels);
        assert!(layout.top.colors_panel.x2 <= layout.top.screenshot.x1);
    }
}

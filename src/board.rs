//! The full-window board.
//!
//! One canvas covers the whole window: `draw` paints every rectangle the
//! layout engine produced for the current frame, and `update` forwards
//! pointer and keyboard events to the interaction layer, tagged with the
//! viewport they happened in. Keeping both sides on the same
//! [`FrameLayout`] is what keeps hover and hit state in sync with the
//! pixels.

use iced::mouse;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Program, Stroke};
use iced::{keyboard, Color, Element, Length, Point, Rectangle, Size, Theme};
use iced_widget::Action;

use crate::cad::TriMesh;
use crate::interaction::{BoardEvent, KeyInput};
use crate::layout::{FrameLayout, Rect as NdcRect, ScrollBar, StackPanel, Viewport};
use crate::scene;
use crate::state::{AppState, Fill, PanelKind, ShapeKind, SWATCH_COLORS};
use crate::texture::{TextureStore, PREVIEW_CELLS};

const BACKGROUND: Color = Color {
    r: 0.12,
    g: 0.12,
    b: 0.15,
    a: 1.0,
};

pub fn board<'a, Message>(
    cache: &'a Cache,
    state: &'a AppState,
    textures: &'a TextureStore,
    mesh: Option<&'a TriMesh>,
    on_event: fn(Viewport, BoardEvent) -> Message,
) -> Element<'a, Message>
where
    Message: 'a,
{
    Canvas::new(Board {
        cache,
        state,
        textures,
        mesh,
        on_event,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

struct Board<'a, Message> {
    cache: &'a Cache,
    state: &'a AppState,
    textures: &'a TextureStore,
    mesh: Option<&'a TriMesh>,
    on_event: fn(Viewport, BoardEvent) -> Message,
}

impl<Message> Program<Message> for Board<'_, Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        use iced::mouse::{Button, Event as MouseEvent};

        let viewport = Viewport::new(bounds.width.max(1.0), bounds.height.max(1.0));

        let board_event = match event {
            canvas::Event::Mouse(MouseEvent::ButtonPressed(Button::Left)) => {
                BoardEvent::PressedLeft(cursor.position_in(bounds)?)
            }
            canvas::Event::Mouse(MouseEvent::ButtonReleased(Button::Left)) => {
                // Releases outside the window must still end a drag.
                BoardEvent::ReleasedLeft(
                    cursor
                        .position_in(bounds)
                        .unwrap_or(Point::new(self.state.cursor.0, self.state.cursor.1)),
                )
            }
            canvas::Event::Mouse(MouseEvent::CursorMoved { .. }) => {
                BoardEvent::Moved(cursor.position_in(bounds)?)
            }
            canvas::Event::Mouse(MouseEvent::WheelScrolled { delta }) => {
                let lines = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y / 20.0,
                };
                BoardEvent::Scrolled {
                    lines,
                    cursor: cursor.position_in(bounds)?,
                }
            }
            canvas::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                BoardEvent::Key(map_key(key)?)
            }
            _ => return None,
        };

        Some(Action::publish((self.on_event)(viewport, board_event)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame: &mut Frame| {
            let viewport = Viewport::new(bounds.width.max(1.0), bounds.height.max(1.0));
            let frame_layout = FrameLayout::compute(&viewport, &self.state.panels);
            let mut painter = Painter {
                frame,
                size: bounds.size(),
                viewport,
                state: self.state,
                textures: self.textures,
            };

            painter.chrome(&frame_layout);
            painter.top_bar(&frame_layout);
            painter.side_panels(&frame_layout);
            painter.transform_panels(&frame_layout);
            painter.scrollbar(&frame_layout.right_scrollbar);
            painter.canvas_view(&frame_layout, self.mesh);
            painter.axis_buttons(&frame_layout);
        });

        vec![geometry]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.state.resizing.is_some() {
            return mouse::Interaction::ResizingHorizontally;
        }
        if self.state.dragging_axes {
            return mouse::Interaction::Grabbing;
        }

        let Some(position) = cursor.position_in(bounds) else {
            return mouse::Interaction::default();
        };
        let viewport = Viewport::new(bounds.width.max(1.0), bounds.height.max(1.0));
        let layout = FrameLayout::compute(&viewport, &self.state.panels);

        if layout.left_handle.hit(&viewport, position.x, position.y)
            || layout.right_handle.hit(&viewport, position.x, position.y)
        {
            mouse::Interaction::ResizingHorizontally
        } else if hovers_a_control(&layout, &viewport, position) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

fn map_key(key: &keyboard::Key) -> Option<KeyInput> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Enter) => Some(KeyInput::Enter),
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(KeyInput::Escape),
        keyboard::Key::Named(keyboard::key::Named::Backspace) => Some(KeyInput::Backspace),
        keyboard::Key::Character(text) => text.chars().next().map(KeyInput::Char),
        _ => None,
    }
}

fn hovers_a_control(layout: &FrameLayout, vp: &Viewport, p: Point) -> bool {
    let buttons = layout
        .shapes
        .buttons
        .iter()
        .chain(layout.textures.buttons.iter())
        .chain(layout.axis_buttons.iter())
        .chain(layout.top.swatches.iter())
        .chain([
            &layout.top.save,
            &layout.top.save_as,
            &layout.top.undo,
            &layout.top.redo,
            &layout.top.new_project,
            &layout.top.screenshot,
            &layout.top.shade_toggle,
        ]);

    buttons
        .chain(
            layout
                .transforms
                .iter()
                .flat_map(|t| t.boxes.iter().chain(std::iter::once(&t.reset))),
        )
        .any(|r| r.hit(vp, p.x, p.y))
}

/// All the draw calls, with NDC-to-screen conversion in one place.
struct Painter<'a, 'b> {
    frame: &'a mut Frame,
    size: Size,
    viewport: Viewport,
    state: &'b AppState,
    textures: &'b TextureStore,
}

impl Painter<'_, '_> {
    fn screen_point(&self, x: f32, y: f32) -> Point {
        Point::new(
            (x + 1.0) * 0.5 * self.size.width,
            (1.0 - y) * 0.5 * self.size.height,
        )
    }

    fn screen_rect(&self, rect: &NdcRect) -> (Point, Size) {
        let top_left = self.screen_point(rect.x1, rect.y2);
        (
            top_left,
            Size::new(
                rect.width() * 0.5 * self.size.width,
                rect.height() * 0.5 * self.size.height,
            ),
        )
    }

    fn fill(&mut self, rect: &NdcRect, color: Color) {
        let (pos, size) = self.screen_rect(rect);
        self.frame.fill_rectangle(pos, size, color);
    }

    fn outline(&mut self, rect: &NdcRect, color: Color, width: f32) {
        let (pos, size) = self.screen_rect(rect);
        let stroke = Stroke {
            width,
            style: canvas::Style::Solid(color),
            ..Stroke::default()
        };
        self.frame.stroke(&Path::rectangle(pos, size), stroke);
    }

    fn text(&mut self, content: &str, x: f32, y: f32, size: f32, color: Color) {
        self.frame.fill_text(canvas::Text {
            content: content.to_string(),
            position: self.screen_point(x, y),
            color,
            size: size.into(),
            ..canvas::Text::default()
        });
    }

    fn hovered(&self, rect: &NdcRect) -> bool {
        rect.hit(&self.viewport, self.state.cursor.0, self.state.cursor.1)
    }

    /// Gray filled button that brightens under the cursor.
    fn chrome_button(&mut self, rect: &NdcRect, label: &str, text_size: f32) {
        let lift = if self.hovered(rect) { 0.08 } else { 0.0 };
        self.fill(rect, gray(0.32 + lift));
        self.outline(rect, Color::BLACK, 1.0);
        self.text(
            label,
            rect.x1 + 0.01,
            rect.y2 - (rect.y2 - rect.y1) * 0.18,
            text_size,
            Color::WHITE,
        );
    }

    fn chrome(&mut self, layout: &FrameLayout) {
        self.frame
            .fill_rectangle(Point::ORIGIN, self.size, BACKGROUND);
        self.fill(&layout.left_bar, gray(0.5));
        self.fill(&layout.right_bar, gray(0.5));
        self.fill(&layout.top_bar, gray(0.45));
        self.fill(&layout.left_handle, gray(0.7));
        self.fill(&layout.right_handle, gray(0.7));
    }

    fn top_bar(&mut self, layout: &FrameLayout) {
        let top = &layout.top;

        self.fill(&top.logo, gray(0.38));
        self.outline(&top.logo, Color::BLACK, 2.0);
        let (cx, cy) = top.logo.center();
        self.text(
            "Blender Lite",
            cx - 0.06,
            cy + 0.02,
            16.0,
            SWATCH_COLORS[2],
        );

        self.chrome_button(&top.save, "Save", 14.0);
        self.chrome_button(&top.save_as, "Save as", 14.0);
        self.chrome_button(&top.undo, "Undo", 13.0);
        self.chrome_button(&top.redo, "Redo", 13.0);

        self.fill(&top.project_name, gray(0.9));
        self.outline(&top.project_name, Color::BLACK, 1.0);
        self.text(
            "Project Name",
            top.project_name.x1 + 0.03,
            top.project_name.y2 - 0.01,
            14.0,
            gray(0.2),
        );

        self.chrome_button(&top.new_project, "New Project", 13.0);

        // Screenshot button grows a little under the cursor.
        let expand = if self.hovered(&top.screenshot) {
            self.viewport.px_to_ndc_x(6.0)
        } else {
            0.0
        };
        let shot = top.screenshot.expanded(expand, expand);
        self.fill(&shot, gray(0.3));
        self.outline(&shot, Color::BLACK, 1.0);
        let (sx, sy) = shot.center();
        let center = self.screen_point(sx, sy);
        let radius = (shot.width() * 0.5 * self.size.width)
            .min(shot.height() * 0.5 * self.size.height)
            * 0.25;
        self.frame.fill(&Path::circle(center, radius.max(4.0)), gray(0.12));
        self.text("Take a", sx - 0.05, shot.y1 - 0.01, 11.0, Color::WHITE);
        self.text("Screenshot", sx - 0.06, shot.y1 - 0.05, 11.0, Color::WHITE);

        self.fill(&top.colors_panel, gray(0.4));
        self.outline(&top.colors_panel, Color::BLACK, 2.0);
        self.text(
            "Colors",
            top.colors_panel.x1 + 0.02,
            top.colors_panel.y2 - 0.01,
            12.0,
            Color::WHITE,
        );

        for (i, swatch) in top.swatches.iter().enumerate() {
            let expand = if self.hovered(swatch) {
                self.viewport.px_to_ndc_x(2.0)
            } else {
                0.0
            };
            let rect = swatch.expanded(expand, expand);
            self.fill(&rect, SWATCH_COLORS[i]);
            self.outline(&rect, Color::BLACK, 1.0);
        }

        let lift = if self.hovered(&top.shade_toggle) { 0.35 } else { 0.0 };
        self.fill(&top.shade_toggle, gray(0.25 + lift));
        self.outline(&top.shade_toggle, Color::BLACK, 1.0);
        self.text(
            "V",
            top.shade_toggle.x1 + 0.005,
            top.shade_toggle.y2 - 0.01,
            12.0,
            Color::WHITE,
        );

        self.fill(&top.shades_box, gray(0.3));
        self.outline(&top.shades_box, Color::BLACK, 1.0);
        self.text(
            "Shades",
            top.shades_box.x1 + 0.01,
            top.shades_box.y2 - 0.01,
            12.0,
            Color::WHITE,
        );
    }

    fn side_panels(&mut self, layout: &FrameLayout) {
        self.stack_panel(&layout.shapes, "Shapes");
        for (i, button) in layout.shapes.buttons.iter().enumerate() {
            let kind = ShapeKind::ALL[i];
            let selected = self.state.current_shape == Some(kind);
            let fill = if selected {
                gray(0.5)
            } else if self.hovered(button) {
                gray(0.4)
            } else {
                gray(0.3)
            };
            self.fill(button, fill);
            self.outline(button, Color::BLACK, 1.5);
            let (cx, _) = button.center();
            self.text(
                kind.label(),
                cx - 0.02,
                button.y1 + 0.05,
                12.0,
                Color::WHITE,
            );
        }

        self.stack_panel(&layout.textures, "Textures");
        let current_fill = self
            .state
            .current_shape
            .map(|kind| self.state.slots[kind.index()].fill);
        for (i, button) in layout.textures.buttons.iter().enumerate() {
            let lift = if self.hovered(button) { 0.1 } else { 0.0 };
            self.fill(button, gray(0.3 + lift));
            self.outline(button, Color::BLACK, 1.5);
            self.texture_preview(button, i);

            if current_fill == Some(Fill::Texture(i)) {
                let margin = self.viewport.px_to_ndc_x(2.0);
                self.outline(
                    &button.expanded(margin, margin),
                    Color {
                        r: 1.0,
                        g: 1.0,
                        b: 0.0,
                        a: 1.0,
                    },
                    2.0,
                );
            }
        }
    }

    fn stack_panel(&mut self, panel: &StackPanel, title: &str) {
        self.fill(&panel.panel, gray(0.4));
        self.outline(&panel.panel, Color::BLACK, 2.0);
        self.text(
            title,
            panel.panel.x1 + self.viewport.px_to_ndc_x(10.0),
            panel.panel.y2 - self.viewport.px_to_ndc_y(8.0),
            16.0,
            Color::WHITE,
        );
        if let Some(bar) = panel.scrollbar {
            self.scrollbar(&bar);
        }
    }

    /// Downsampled texture pixels, painted as a small grid of cells.
    fn texture_preview(&mut self, button: &NdcRect, slot: usize) {
        let Some(texture) = self.textures.get(slot) else {
            // Out-of-range slot: loud placeholder, like a missing texture.
            self.fill(
                button,
                Color {
                    r: 0.8,
                    g: 0.2,
                    b: 0.2,
                    a: 1.0,
                },
            );
            return;
        };

        let margin_x = self.viewport.px_to_ndc_x(15.0);
        let margin_y = self.viewport.px_to_ndc_y(15.0);
        let inner = button.expanded(-margin_x, -margin_y);
        if inner.width() <= 0.0 || inner.height() <= 0.0 {
            return;
        }

        let cell_w = inner.width() / PREVIEW_CELLS as f32;
        let cell_h = inner.height() / PREVIEW_CELLS as f32;
        for (row, cells) in texture.preview.iter().enumerate() {
            for (col, color) in cells.iter().enumerate() {
                let x1 = inner.x1 + col as f32 * cell_w;
                let y2 = inner.y2 - row as f32 * cell_h;
                self.fill(&NdcRect::new(x1, y2 - cell_h, x1 + cell_w, y2), *color);
            }
        }
    }

    fn transform_panels(&mut self, layout: &FrameLayout) {
        for kind in PanelKind::ALL {
            let panel = &layout.transforms[kind.index()];
            self.fill(&panel.panel, gray(0.4));
            self.outline(&panel.panel, Color::BLACK, 2.0);

            let x = panel.panel.x1 + self.viewport.px_to_ndc_x(10.0);
            self.text(
                kind.label(),
                x,
                panel.panel.y2 - self.viewport.px_to_ndc_y(8.0),
                16.0,
                Color::WHITE,
            );
            self.text(
                "Vector",
                x + self.viewport.px_to_ndc_x(5.0),
                panel.panel.y2 - self.viewport.px_to_ndc_y(30.0),
                11.0,
                Color::WHITE,
            );

            for axis in 0..3 {
                let value_box = &panel.boxes[axis];
                let fill = if self.state.is_editing(kind, axis) {
                    Color {
                        r: 0.7,
                        g: 0.7,
                        b: 0.9,
                        a: 1.0,
                    }
                } else if self.hovered(value_box) {
                    gray(0.6)
                } else {
                    gray(0.9)
                };
                self.fill(value_box, fill);
                self.outline(value_box, Color::BLACK, 1.0);
                let text = self.state.value_text(kind, axis);
                self.text(
                    &text,
                    value_box.x1 + self.viewport.px_to_ndc_x(5.0),
                    value_box.y2 - self.viewport.px_to_ndc_y(4.0),
                    12.0,
                    gray(0.2),
                );
            }

            self.chrome_button(&panel.reset, "Reset", 12.0);
        }
    }

    fn scrollbar(&mut self, bar: &ScrollBar) {
        self.fill(&bar.track, gray(0.3));
        self.fill(&bar.thumb, gray(0.6));
    }

    fn canvas_view(&mut self, layout: &FrameLayout, mesh: Option<&TriMesh>) {
        self.fill(&layout.canvas, BACKGROUND);
        self.outline(&layout.canvas, gray(0.2), 1.0);

        if let (Some(mesh), Some(kind)) = (mesh, self.state.current_shape) {
            let base = match self.state.slots[kind.index()].fill {
                Fill::Color(color) => color,
                Fill::Texture(slot) => self
                    .textures
                    .get(slot)
                    .map(|t| t.average)
                    .unwrap_or(Color::WHITE),
            };
            let triangles = scene::render_mesh(
                mesh,
                &self.state.rotate,
                &self.state.scale,
                &self.state.translate,
                base,
                &layout.canvas,
            );
            for tri in &triangles {
                let points: Vec<Point> = tri
                    .points
                    .iter()
                    .map(|(x, y)| self.screen_point(*x, *y))
                    .collect();
                let path = Path::new(|b| {
                    b.move_to(points[0]);
                    b.line_to(points[1]);
                    b.line_to(points[2]);
                    b.close();
                });
                self.frame.fill(&path, tri.color);
            }
        }

        for axis in scene::axis_gizmo(&layout.canvas, &self.state.axis_selected) {
            let stroke = Stroke {
                width: 2.0,
                style: canvas::Style::Solid(axis.color),
                ..Stroke::default()
            };
            let from = self.screen_point(axis.from.0, axis.from.1);
            let to = self.screen_point(axis.to.0, axis.to.1);
            self.frame.stroke(&Path::line(from, to), stroke);

            let arrow: Vec<Point> = axis
                .arrow
                .iter()
                .map(|(x, y)| self.screen_point(*x, *y))
                .collect();
            let head = Path::new(|b| {
                b.move_to(arrow[0]);
                b.line_to(arrow[1]);
                b.line_to(arrow[2]);
                b.close();
            });
            self.frame.fill(&head, axis.color);

            self.text(axis.label, axis.label_pos.0, axis.label_pos.1, 12.0, axis.color);
        }
    }

    fn axis_buttons(&mut self, layout: &FrameLayout) {
        for (i, button) in layout.axis_buttons.iter().enumerate() {
            let selected = self.state.axis_selected[i];
            let base = scene::AXIS_COLORS[i];
            let fill = if selected {
                scene::axis_color(i, &self.state.axis_selected)
            } else if self.hovered(button) {
                // Very light tint while hovered.
                Color {
                    r: base.r * 0.2 + 0.8,
                    g: base.g * 0.2 + 0.8,
                    b: base.b * 0.2 + 0.8,
                    a: 1.0,
                }
            } else {
                base
            };
            self.fill(button, fill);
            self.outline(button, Color::BLACK, 1.5);
            let (cx, cy) = button.center();
            self.text(["X", "Y", "Z"][i], cx - 0.008, cy + 0.012, 11.0, Color::WHITE);
        }
    }
}

fn gray(value: f32) -> Color {
    Color {
        r: value,
        g: value,
        b: value,
        a: 1.0,
    }
}

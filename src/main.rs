mod board;
mod cad;
mod interaction;
mod layout;
mod limits;
mod scene;
mod state;
mod texture;

use std::path::Path;

use iced::widget::canvas::Cache;
use iced::{Element, Size, Task};
use log::info;

use cad::TriMesh;
use interaction::BoardEvent;
use layout::Viewport;
use state::{AppState, SHAPE_COUNT};
use texture::TextureStore;

#[derive(Debug, Clone)]
enum Message {
    Board(Viewport, BoardEvent),
}

struct App {
    state: AppState,
    textures: TextureStore,
    /// Triangulated lazily, the first time a shape is selected.
    meshes: [Option<TriMesh>; SHAPE_COUNT],
    cache: Cache,
}

impl App {
    fn new() -> Self {
        Self {
            state: AppState::new(),
            textures: TextureStore::load(Path::new("textures")),
            meshes: Default::default(),
            cache: Cache::new(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(viewport, event) => {
                interaction::handle(&mut self.state, &viewport, event);
                self.ensure_mesh();
                // Hover feedback depends on the cursor, so any event may
                // change the picture.
                self.cache.clear();
            }
        }

        Task::none()
    }

    fn ensure_mesh(&mut self) {
        if let Some(kind) = self.state.current_shape {
            let slot = &mut self.meshes[kind.index()];
            if slot.is_none() {
                info!("triangulating {kind}");
                *slot = Some(cad::mesh(kind));
            }
        }
    }

    fn current_mesh(&self) -> Option<&TriMesh> {
        self.state
            .current_shape
            .and_then(|kind| self.meshes[kind.index()].as_ref())
    }

    fn view(&self) -> Element<'_, Message> {
        board::board(
            &self.cache,
            &self.state,
            &self.textures,
            self.current_mesh(),
            Message::Board,
        )
    }
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .title("Blender Lite")
        .window_size(Size::new(1000.0, 600.0))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;
    use layout::FrameLayout;
    use state::ShapeKind;

    #[test]
    fn selecting_the_cube_triangulates_and_renders_it() {
        let mut app = App::new();
        let viewport = Viewport::new(1000.0, 600.0);
        let frame = FrameLayout::compute(&viewport, &app.state.panels);

        let (cx, cy) = frame.shapes.buttons[ShapeKind::Cube.index()].center();
        let click = Point::new((cx + 1.0) * 0.5 * 1000.0, (1.0 - cy) * 0.5 * 600.0);

        let _ = app.update(Message::Board(viewport, BoardEvent::PressedLeft(click)));
        let _ = app.update(Message::Board(viewport, BoardEvent::ReleasedLeft(click)));

        assert_eq!(app.state.current_shape, Some(ShapeKind::Cube));
        let mesh = app.current_mesh().expect("cube mesh cached");
        assert!(!mesh.is_empty());

        // The frame that follows the click really contains cube geometry.
        let triangles = scene::render_mesh(
            mesh,
            &app.state.rotate,
            &app.state.scale,
            &app.state.translate,
            iced::Color::WHITE,
            &frame.canvas,
        );
        assert!(!triangles.is_empty());
    }
}

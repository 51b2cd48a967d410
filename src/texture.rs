//! Texture slots.
//!
//! Six textures are read from `textures/textureN.png` at startup. A file
//! that is missing or fails to decode is replaced by a two-tone
//! checkerboard keyed by its slot index, so every slot always holds usable
//! pixels and the UI never has to special-case a hole.

use std::path::{Path, PathBuf};

use iced::Color;
use log::{info, warn};
use thiserror::Error;

use crate::state::SHAPE_COUNT;

pub const TEXTURE_COUNT: usize = SHAPE_COUNT;

/// Swatch previews are downsampled to this many cells per side.
pub const PREVIEW_CELLS: usize = 8;

const FALLBACK_SIZE: u32 = 64;
const FALLBACK_CHECKS: u32 = 8;

/// Checker tones per slot, dark and light.
const FALLBACK_TONES: [([f32; 3], [f32; 3]); TEXTURE_COUNT] = [
    ([0.55, 0.25, 0.25], [0.85, 0.55, 0.55]),
    ([0.25, 0.55, 0.25], [0.55, 0.85, 0.55]),
    ([0.25, 0.25, 0.55], [0.55, 0.55, 0.85]),
    ([0.55, 0.55, 0.25], [0.85, 0.85, 0.55]),
    ([0.55, 0.25, 0.55], [0.85, 0.55, 0.85]),
    ([0.25, 0.55, 0.55], [0.55, 0.85, 0.85]),
];

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to load texture {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Clone)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    /// Mean color, used to tint mesh faces in texture mode.
    pub average: Color,
    /// Coarse grid the board paints onto swatch buttons.
    pub preview: [[Color; PREVIEW_CELLS]; PREVIEW_CELLS],
    pub fallback: bool,
}

impl Texture {
    fn from_rgba(width: u32, height: u32, rgba: Vec<u8>, fallback: bool) -> Self {
        let average = average_color(width, height, &rgba);
        let preview = preview_grid(width, height, &rgba);
        Self {
            width,
            height,
            rgba,
            average,
            preview,
            fallback,
        }
    }

    /// The stand-in for a slot whose file could not be used.
    fn checkerboard(slot: usize) -> Self {
        let (dark, light) = FALLBACK_TONES[slot % TEXTURE_COUNT];
        let cell = FALLBACK_SIZE / FALLBACK_CHECKS;

        let mut rgba = Vec::with_capacity((FALLBACK_SIZE * FALLBACK_SIZE * 4) as usize);
        for row in 0..FALLBACK_SIZE {
            for col in 0..FALLBACK_SIZE {
                let tone = if ((row / cell) + (col / cell)) % 2 == 0 {
                    dark
                } else {
                    light
                };
                rgba.push((tone[0] * 255.0) as u8);
                rgba.push((tone[1] * 255.0) as u8);
                rgba.push((tone[2] * 255.0) as u8);
                rgba.push(255);
            }
        }

        Self::from_rgba(FALLBACK_SIZE, FALLBACK_SIZE, rgba, true)
    }
}

#[derive(Debug, Clone)]
pub struct TextureStore {
    textures: Vec<Texture>,
}

impl TextureStore {
    /// Load every slot from `dir`, substituting checkerboards as needed.
    /// Never fails: a missing directory simply yields six fallbacks.
    pub fn load(dir: &Path) -> Self {
        let textures = (0..TEXTURE_COUNT)
            .map(|slot| {
                let path = dir.join(format!("texture{}.png", slot + 1));
                match load_file(&path) {
                    Ok(texture) => {
                        info!("loaded {}", path.display());
                        texture
                    }
                    Err(err) => {
                        warn!("{err}; using fallback for slot {slot}");
                        Texture::checkerboard(slot)
                    }
                }
            })
            .collect();

        Self { textures }
    }

    pub fn get(&self, slot: usize) -> Option<&Texture> {
        self.textures.get(slot)
    }
}

fn load_file(path: &Path) -> Result<Texture, TextureError> {
    let image = image::open(path)
        .map_err(|source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (width, height) = image.dimensions();
    Ok(Texture::from_rgba(width, height, image.into_raw(), false))
}

fn average_color(width: u32, height: u32, rgba: &[u8]) -> Color {
    let pixels = (width * height) as usize;
    if pixels == 0 {
        return Color::WHITE;
    }

    let mut sums = [0u64; 3];
    for pixel in rgba.chunks_exact(4) {
        sums[0] += pixel[0] as u64;
        sums[1] += pixel[1] as u64;
        sums[2] += pixel[2] as u64;
    }

    let scale = 1.0 / (pixels as f32 * 255.0);
    Color {
        r: sums[0] as f32 * scale,
        g: sums[1] as f32 * scale,
        b: sums[2] as f32 * scale,
        a: 1.0,
    }
}

/// Sample the center pixel of each preview cell.
fn preview_grid(width: u32, height: u32, rgba: &[u8]) -> [[Color; PREVIEW_CELLS]; PREVIEW_CELLS] {
    let mut grid = [[Color::WHITE; PREVIEW_CELLS]; PREVIEW_CELLS];
    if width == 0 || height == 0 {
        return grid;
    }

    for (row, row_cells) in grid.iter_mut().enumerate() {
        for (col, cell) in row_cells.iter_mut().enumerate() {
            let px = ((col as u32 * 2 + 1) * width / (PREVIEW_CELLS as u32 * 2)).min(width - 1);
            let py = ((row as u32 * 2 + 1) * height / (PREVIEW_CELLS as u32 * 2)).min(height - 1);
            let offset = ((py * width + px) * 4) as usize;
            if offset + 3 < rgba.len() {
                *cell = Color {
                    r: rgba[offset] as f32 / 255.0,
                    g: rgba[offset + 1] as f32 / 255.0,
                    b: rgba[offset + 2] as f32 / 255.0,
                    a: 1.0,
                };
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_yield_usable_fallbacks() {
        // Every slot must come back with pixels, never an error.
        let store = TextureStore::load(Path::new("definitely/not/a/directory"));
        for slot in 0..TEXTURE_COUNT {
            let texture = store.get(slot).expect("slot present");
            assert!(texture.fallback);
            assert_eq!(
                texture.rgba.len(),
                (texture.width * texture.height * 4) as usize
            );
            assert!(texture.width > 0 && texture.height > 0);
        }
        assert!(store.get(TEXTURE_COUNT).is_none());
    }

    #[test]
    fn checkerboard_alternates_tones() {
        let texture = Texture::checkerboard(0);
        let cell = (FALLBACK_SIZE / FALLBACK_CHECKS) as usize;
        let width = FALLBACK_SIZE as usize;

        let first = &texture.rgba[0..3];
        let neighbor_offset = cell * 4;
        let neighbor = &texture.rgba[neighbor_offset..neighbor_offset + 3];
        assert_ne!(first, neighbor);

        // One cell down flips back relative to the horizontal neighbor.
        let below_offset = cell * width * 4;
        let below = &texture.rgba[below_offset..below_offset + 3];
        assert_eq!(neighbor, below);
    }

    #[test]
    fn fallbacks_differ_per_slot() {
        let a = Texture::checkerboard(0);
        let b = Texture::checkerboard(1);
        assert_ne!(a.rgba[0..3], b.rgba[0..3]);
    }

    #[test]
    fn average_sits_between_the_tones() {
        let texture = Texture::checkerboard(2);
        let (dark, light) = FALLBACK_TONES[2];
        assert!(texture.average.b >= dark[2] - 0.01);
        assert!(texture.average.b <= light[2] + 0.01);
    }

    #[test]
    fn preview_grid_carries_both_tones() {
        let texture = Texture::checkerboard(3);
        let first = texture.preview[0][0];
        assert!(texture.preview.iter().flatten().any(|c| {
            (c.r - first.r).abs() > 0.05
                || (c.g - first.g).abs() > 0.05
                || (c.b - first.b).abs() > 0.05
        }));
    }

    #[test]
    fn average_of_empty_image_is_defined() {
        let color = average_color(0, 0, &[]);
        assert_eq!(color, Color::WHITE);
    }
}

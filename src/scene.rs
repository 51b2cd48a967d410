//! Software 3D viewport.
//!
//! The current shape's mesh is run through its model transform and a fixed
//! camera looking down the Z axis, flat-shaded per face against a single
//! light, depth-sorted, and handed to the board as screen-ready NDC
//! triangles. The axis gizmo at the canvas center is produced here too.

use glam::{Mat4, Vec3};
use iced::Color;

use crate::cad::TriMesh;
use crate::layout::Rect;

/// Eye distance for the perspective divide. Model space is NDC-scaled, so a
/// couple of units back is enough parallax.
const CAMERA_DISTANCE: f32 = 2.0;
/// Anything closer to the eye plane than this is culled.
const NEAR_LIMIT: f32 = 0.05;
const AMBIENT: f32 = 0.25;
const LIGHT_DIR: Vec3 = Vec3::new(0.35, 0.45, 0.82);

const AXIS_LENGTH: f32 = 0.1;
const ARROW_SIZE: f32 = 0.015;

pub const AXIS_COLORS: [Color; 3] = [
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
];

/// A screen-ready triangle in NDC, already depth-sorted by the producer.
#[derive(Debug, Clone, Copy)]
pub struct ShadedTriangle {
    pub points: [(f32, f32); 3],
    pub color: Color,
    pub depth: f32,
}

/// Model matrix in the order the transform panels describe: scale, then the
/// per-axis rotations, then translate.
pub fn model_matrix(rotate_deg: &[f32; 3], scale: &[f32; 3], translate: &[f32; 3]) -> Mat4 {
    Mat4::from_translation(Vec3::from_array(*translate))
        * Mat4::from_rotation_z(rotate_deg[2].to_radians())
        * Mat4::from_rotation_y(rotate_deg[1].to_radians())
        * Mat4::from_rotation_x(rotate_deg[0].to_radians())
        * Mat4::from_scale(Vec3::from_array(*scale))
}

/// Project one world-space point into the canvas. Returns the NDC position
/// and the view depth, or `None` when it crosses the near limit.
fn project(canvas: &Rect, p: Vec3) -> Option<((f32, f32), f32)> {
    let denom = CAMERA_DISTANCE - p.z;
    if denom < NEAR_LIMIT {
        return None;
    }
    let f = CAMERA_DISTANCE / denom;
    let (cx, cy) = canvas.center();
    Some(((cx + p.x * f, cy + p.y * f), p.z))
}

/// Transform, shade, sort. Farthest triangles come first so the board can
/// paint them in order.
pub fn render_mesh(
    mesh: &TriMesh,
    rotate_deg: &[f32; 3],
    scale: &[f32; 3],
    translate: &[f32; 3],
    base_color: Color,
    canvas: &Rect,
) -> Vec<ShadedTriangle> {
    let matrix = model_matrix(rotate_deg, scale, translate);
    let world: Vec<Vec3> = mesh
        .positions
        .iter()
        .map(|p| matrix.transform_point3(*p))
        .collect();

    let mut out = Vec::with_capacity(mesh.triangles.len());
    for tri in &mesh.triangles {
        let a = world[tri[0]];
        let b = world[tri[1]];
        let c = world[tri[2]];

        let Some((pa, za)) = project(canvas, a) else { continue };
        let Some((pb, zb)) = project(canvas, b) else { continue };
        let Some((pc, zc)) = project(canvas, c) else { continue };

        let normal = (b - a).cross(c - a);
        if normal.length_squared() <= f32::EPSILON {
            continue;
        }
        let intensity = shade(normal.normalize());

        out.push(ShadedTriangle {
            points: [pa, pb, pc],
            color: scaled(base_color, intensity),
            depth: (za + zb + zc) / 3.0,
        });
    }

    out.sort_by(|lhs, rhs| lhs.depth.total_cmp(&rhs.depth));
    out
}

/// Two-sided flat shading with an ambient floor; triangulated shells do not
/// guarantee a winding, so facing away must light the same.
fn shade(normal: Vec3) -> f32 {
    AMBIENT + (1.0 - AMBIENT) * normal.dot(LIGHT_DIR.normalize()).abs()
}

fn scaled(color: Color, intensity: f32) -> Color {
    Color {
        r: (color.r * intensity).min(1.0),
        g: (color.g * intensity).min(1.0),
        b: (color.b * intensity).min(1.0),
        a: color.a,
    }
}

/// One axis of the canvas gizmo.
#[derive(Debug, Clone, Copy)]
pub struct GizmoAxis {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub arrow: [(f32, f32); 3],
    pub label_pos: (f32, f32),
    pub label: &'static str,
    pub color: Color,
}

/// The 3D axis cross at the canvas center. Selected axes draw lighter, as a
/// hint that dragging will move them.
pub fn axis_gizmo(canvas: &Rect, selected: &[bool; 3]) -> [GizmoAxis; 3] {
    let (cx, cy) = canvas.center();
    let len = AXIS_LENGTH;
    let arrow = ARROW_SIZE;

    let x_tip = (cx + len, cy);
    let y_tip = (cx, cy + len);
    let z_tip = (cx - len * 0.7, cy - len * 0.7);

    [
        GizmoAxis {
            from: (cx, cy),
            to: x_tip,
            arrow: [
                x_tip,
                (x_tip.0 - arrow, x_tip.1 - arrow),
                (x_tip.0 - arrow, x_tip.1 + arrow),
            ],
            label_pos: (x_tip.0 + 0.01, x_tip.1 - 0.005),
            label: "X",
            color: axis_color(0, selected),
        },
        GizmoAxis {
            from: (cx, cy),
            to: y_tip,
            arrow: [
                y_tip,
                (y_tip.0 - arrow, y_tip.1 - arrow),
                (y_tip.0 + arrow, y_tip.1 - arrow),
            ],
            label_pos: (y_tip.0 - 0.005, y_tip.1 + 0.01),
            label: "Y",
            color: axis_color(1, selected),
        },
        GizmoAxis {
            from: (cx, cy),
            to: z_tip,
            arrow: [
                z_tip,
                (z_tip.0 + arrow, z_tip.1 + arrow),
                (z_tip.0 + arrow * 0.5, z_tip.1 - arrow * 0.5),
            ],
            label_pos: (z_tip.0 - 0.015, z_tip.1 - 0.015),
            label: "Z",
            color: axis_color(2, selected),
        },
    ]
}

pub fn axis_color(axis: usize, selected: &[bool; 3]) -> Color {
    let base = AXIS_COLORS[axis.min(2)];
    if selected.get(axis).copied().unwrap_or(false) {
        // Halfway to white.
        Color {
            r: base.r * 0.5 + 0.5,
            g: base.g * 0.5 + 0.5,
            b: base.b * 0.5 + 0.5,
            a: 1.0,
        }
    } else {
        base
    }
}

//! Primitive solids.
//!
//! Five of the six primitives are modeled as B-rep solids and triangulated;
//! the pyramid is simple enough to assemble as a triangle mesh directly.
//! Sizes are in model units, the same space the translation borders live
//! in, so a shape at the origin fills a comfortable fraction of the canvas.

use std::f64::consts::PI;

use glam::Vec3;
use truck_meshalgo::prelude::*;
use truck_modeling::*;
use truck_polymesh::PolygonMesh;

use crate::state::ShapeKind;

const CUBE_EDGE: f64 = 0.30;
const SPHERE_RADIUS: f64 = 0.17;
const CONE_HEIGHT: f64 = 0.32;
const CONE_RADIUS: f64 = 0.15;
const CYLINDER_HEIGHT: f64 = 0.32;
const CYLINDER_RADIUS: f64 = 0.12;
const TORUS_MAJOR: f64 = 0.15;
const TORUS_MINOR: f64 = 0.05;
const PYRAMID_BASE: f32 = 0.30;
const PYRAMID_HEIGHT: f32 = 0.28;

/// A triangulated mesh in renderer-friendly form.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    pub positions: Vec<Vec3>,
    pub triangles: Vec<[usize; 3]>,
}

impl TriMesh {
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    fn from_polygon(mesh: &PolygonMesh) -> Self {
        let positions = mesh
            .positions()
            .iter()
            .map(|p| Vec3::new(p.x as f32, p.y as f32, p.z as f32))
            .collect();

        let mut triangles = Vec::new();
        for tri in mesh.tri_faces() {
            triangles.push([tri[0].pos, tri[1].pos, tri[2].pos]);
        }
        for quad in mesh.quad_faces() {
            triangles.push([quad[0].pos, quad[1].pos, quad[2].pos]);
            triangles.push([quad[0].pos, quad[2].pos, quad[3].pos]);
        }
        for face in mesh.other_faces() {
            for i in 1..face.len().saturating_sub(1) {
                triangles.push([face[0].pos, face[i].pos, face[i + 1].pos]);
            }
        }

        Self {
            positions,
            triangles,
        }
    }
}

/// Build the mesh for a primitive.
pub fn mesh(kind: ShapeKind) -> TriMesh {
    match kind {
        ShapeKind::Pyramid => pyramid_mesh(),
        _ => TriMesh::from_polygon(&to_mesh(&solid(kind))),
    }
}

fn to_mesh(solid: &Solid) -> PolygonMesh {
    solid.triangulation(0.01).to_polygon()
}

fn solid(kind: ShapeKind) -> Solid {
    match kind {
        ShapeKind::Cube => cube(CUBE_EDGE),
        ShapeKind::Sphere => sphere(SPHERE_RADIUS),
        ShapeKind::Cone => cone(CONE_HEIGHT, CONE_RADIUS),
        ShapeKind::Cylinder => cylinder(CYLINDER_HEIGHT, CYLINDER_RADIUS),
        ShapeKind::Torus => torus(TORUS_MAJOR, TORUS_MINOR),
        ShapeKind::Pyramid => unreachable!("pyramid is meshed directly"),
    }
}

/// An origin-centered cube: sweep a vertex into an edge, a face, a solid.
fn cube(edge: f64) -> Solid {
    let half = edge / 2.0;
    let corner: Vertex = builder::vertex(Point3::new(-half, -half, -half));
    let bottom_edge: Edge = builder::tsweep(&corner, Vector3::new(0.0, 0.0, edge));
    let bottom_face: Face = builder::tsweep(&bottom_edge, Vector3::new(edge, 0.0, 0.0));
    builder::tsweep(&bottom_face, Vector3::new(0.0, edge, 0.0))
}

/// A half-circle meridian swept a full turn around the Y axis.
fn sphere(radius: f64) -> Solid {
    let north = builder::vertex(Point3::new(0.0, radius, 0.0));
    let meridian: Wire = builder::rsweep(&north, Point3::origin(), Vector3::unit_x(), Rad(PI));
    let shell = builder::cone(&meridian, Vector3::unit_y(), Rad(7.0));
    Solid::new(vec![shell])
}

fn cone(height: f64, radius: f64) -> Solid {
    let apex = builder::vertex(Point3::new(0.0, height / 2.0, 0.0));
    let rim = builder::vertex(Point3::new(0.0, -height / 2.0, radius));
    let center = builder::vertex(Point3::new(0.0, -height / 2.0, 0.0));
    let profile: Wire = vec![builder::line(&apex, &rim), builder::line(&rim, &center)].into();
    let shell = builder::cone(&profile, Vector3::unit_y(), Rad(7.0));
    Solid::new(vec![shell])
}

fn cylinder(height: f64, radius: f64) -> Solid {
    let bottom = -height / 2.0;
    let seed = builder::vertex(Point3::new(0.0, bottom, radius));
    let circle = builder::rsweep(&seed, Point3::origin(), Vector3::unit_y(), Rad(7.0));
    let disk = builder::try_attach_plane(&vec![circle]).unwrap();
    builder::tsweep(&disk, Vector3::new(0.0, height, 0.0))
}

fn torus(major: f64, minor: f64) -> Solid {
    let seed = builder::vertex(Point3::new(major, 0.0, minor));
    let ring = builder::rsweep(
        &seed,
        Point3::new(major, 0.0, 0.0),
        Vector3::unit_y(),
        Rad(7.0),
    );
    let shell = builder::rsweep(&ring, Point3::origin(), Vector3::unit_z(), Rad(7.0));
    Solid::new(vec![shell])
}

/// Square base plus apex, six triangles.
fn pyramid_mesh() -> TriMesh {
    let half = PYRAMID_BASE / 2.0;
    let half_height = PYRAMID_HEIGHT / 2.0;

    let positions = vec![
        Vec3::new(-half, -half_height, -half),
        Vec3::new(half, -half_height, -half),
        Vec3::new(half, -half_height, half),
        Vec3::new(-half, -half_height, half),
        Vec3::new(0.0, half_height, 0.0),
    ];

    let triangles = vec![
        // Base.
        [0, 1, 2],
        [0, 2, 3],
        // Sides.
        [0, 4, 1],
        [1, 4, 2],
        [2, 4, 3],
        [3, 4, 0],
    ];

    TriMesh {
        positions,
        triangles,
    }
}

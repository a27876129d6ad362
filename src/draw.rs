//! Wireframe and texture-coordinate overlay rendering.
//!
//! Two stateless pipelines over a mesh's triangle list. [`draw_wireframe`]
//! projects each triangle into screen space and draws the three edges of
//! every front-facing one into a caller-owned canvas. [`draw_texcoords`]
//! draws each triangle's UV-space edges scaled to a canvas's pixel extent,
//! with no culling (UV space has no facing direction).
//!
//! Both validate the mesh up front and fail fast without touching the
//! canvas; neither keeps state between calls.

use log::debug;
use thiserror::Error;

use crate::canvas::Canvas;
use crate::colors;
use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::mesh::Mesh;
use crate::projection::{project, Viewport};
use crate::winding::is_ccw;

/// Edge length of the square canvas allocated when [`draw_texcoords`] is
/// given none.
pub const TEXCOORD_CANVAS_SIZE: u32 = 512;

/// Precondition violations detected before any drawing happens.
#[derive(Error, Debug)]
pub enum DrawError {
    #[error(
        "triangle {triangle} references vertex index {index}, but the mesh has {vertex_count} vertices"
    )]
    IndexOutOfBounds {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error(
        "triangle {triangle} references vertex {index}, which has no texture coordinate (mesh has {texcoord_count})"
    )]
    MissingTexcoord {
        triangle: usize,
        index: u32,
        texcoord_count: usize,
    },
}

/// Configuration for [`draw_wireframe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireframeStyle {
    /// Edge color, packed ARGB8888.
    pub color: u32,
}

impl Default for WireframeStyle {
    /// Opaque green edges.
    fn default() -> Self {
        Self {
            color: colors::WIREFRAME,
        }
    }
}

/// Draw the mesh as a wireframe into `canvas`.
///
/// Every triangle is projected through `modelview`, `projection`, and
/// `viewport`; triangles whose screen-space winding is counter-clockwise
/// are front-facing and get their three edges drawn, back-facing ones are
/// skipped entirely. Triangles are drawn in mesh order, so overlapping
/// edges resolve last-write-wins.
///
/// The canvas is always borrowed mutably and mutated in place. All face
/// indices are checked before the first draw call; on error the canvas is
/// untouched.
pub fn draw_wireframe(
    canvas: &mut Canvas,
    mesh: &Mesh,
    modelview: &Mat4,
    projection: &Mat4,
    viewport: Viewport,
    style: WireframeStyle,
) -> Result<(), DrawError> {
    let vertices = mesh.vertices();
    for (triangle, face) in mesh.faces().iter().enumerate() {
        for index in face.indices() {
            if index as usize >= vertices.len() {
                return Err(DrawError::IndexOutOfBounds {
                    triangle,
                    index,
                    vertex_count: vertices.len(),
                });
            }
        }
    }

    let mut drawn = 0usize;
    for face in mesh.faces() {
        let p1 = project(vertices[face.a as usize], modelview, projection, viewport);
        let p2 = project(vertices[face.b as usize], modelview, projection, viewport);
        let p3 = project(vertices[face.c as usize], modelview, projection, viewport);

        if !is_ccw(
            Vec2::new(p1.x, p1.y),
            Vec2::new(p2.x, p2.y),
            Vec2::new(p3.x, p3.y),
        ) {
            continue;
        }

        canvas.draw_line(p1.x as i32, p1.y as i32, p2.x as i32, p2.y as i32, style.color);
        canvas.draw_line(p2.x as i32, p2.y as i32, p3.x as i32, p3.y as i32, style.color);
        canvas.draw_line(p3.x as i32, p3.y as i32, p1.x as i32, p1.y as i32, style.color);
        drawn += 1;
    }

    debug!(
        "wireframe: drew {drawn} of {} triangles, culled {}",
        mesh.faces().len(),
        mesh.faces().len() - drawn
    );
    Ok(())
}

/// Draw the mesh's texture-coordinate layout.
///
/// Each triangle's three UV edges are scaled by the canvas extent
/// (u * width, v * height) and drawn in the fixed accent color. No culling:
/// every triangle is drawn regardless of its 3D orientation.
///
/// When `canvas` is `None`, a [`TEXCOORD_CANVAS_SIZE`]² opaque-black canvas
/// is allocated. The canvas (supplied or fresh) is always returned by
/// value; the caller owns it either way.
pub fn draw_texcoords(mesh: &Mesh, canvas: Option<Canvas>) -> Result<Canvas, DrawError> {
    let texcoords = mesh.texcoords();
    for (triangle, face) in mesh.faces().iter().enumerate() {
        for index in face.indices() {
            if index as usize >= texcoords.len() {
                return Err(DrawError::MissingTexcoord {
                    triangle,
                    index,
                    texcoord_count: texcoords.len(),
                });
            }
        }
    }

    let mut canvas =
        canvas.unwrap_or_else(|| Canvas::new(TEXCOORD_CANVAS_SIZE, TEXCOORD_CANVAS_SIZE));
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;

    for face in mesh.faces() {
        let [a, b, c] = face.indices();
        let (ax, ay) = uv_to_pixels(texcoords[a as usize], width, height);
        let (bx, by) = uv_to_pixels(texcoords[b as usize], width, height);
        let (cx, cy) = uv_to_pixels(texcoords[c as usize], width, height);

        canvas.draw_line(ax, ay, bx, by, colors::TEXCOORD);
        canvas.draw_line(bx, by, cx, cy, colors::TEXCOORD);
        canvas.draw_line(cx, cy, ax, ay, colors::TEXCOORD);
    }

    debug!(
        "texcoords: drew {} triangles into {}x{} canvas",
        mesh.faces().len(),
        canvas.width(),
        canvas.height()
    );
    Ok(canvas)
}

#[inline]
fn uv_to_pixels(uv: Vec2, width: f32, height: f32) -> (i32, i32) {
    ((uv.x * width) as i32, (uv.y * height) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec3::Vec3;
    use crate::mesh::Face;

    const VIEW: Viewport = Viewport::with_size(200.0, 200.0);

    // Projects to (50, 50), (50, 150), (150, 50) under identity transforms
    // and VIEW: counter-clockwise on screen, so front-facing.
    fn front_facing_triangle() -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(-0.5, 0.5, 0.0),
                Vec3::new(-0.5, -0.5, 0.0),
                Vec3::new(0.5, 0.5, 0.0),
            ],
            vec![Face::new(0, 1, 2)],
        )
    }

    fn draw_identity(canvas: &mut Canvas, mesh: &Mesh) -> Result<(), DrawError> {
        draw_wireframe(
            canvas,
            mesh,
            &Mat4::identity(),
            &Mat4::identity(),
            VIEW,
            WireframeStyle::default(),
        )
    }

    fn is_untouched(canvas: &Canvas) -> bool {
        canvas.pixels().iter().all(|&p| p == colors::BACKGROUND)
    }

    #[test]
    fn front_facing_triangle_draws_three_edges() {
        let mut canvas = Canvas::new(200, 200);
        draw_identity(&mut canvas, &front_facing_triangle()).unwrap();

        // Vertices.
        assert_eq!(canvas.get_pixel(50, 50), Some(colors::WIREFRAME));
        assert_eq!(canvas.get_pixel(50, 150), Some(colors::WIREFRAME));
        assert_eq!(canvas.get_pixel(150, 50), Some(colors::WIREFRAME));
        // Midpoints of the vertical, diagonal, and horizontal edges.
        assert_eq!(canvas.get_pixel(50, 100), Some(colors::WIREFRAME));
        assert_eq!(canvas.get_pixel(100, 100), Some(colors::WIREFRAME));
        assert_eq!(canvas.get_pixel(100, 50), Some(colors::WIREFRAME));
        // Interior stays untouched: edges only, no fill.
        assert_eq!(canvas.get_pixel(75, 75), Some(colors::BACKGROUND));
    }

    #[test]
    fn back_facing_triangle_is_culled() {
        let front = front_facing_triangle();
        let reversed = Mesh::new(front.vertices().to_vec(), vec![Face::new(0, 2, 1)]);

        let mut canvas = Canvas::new(200, 200);
        draw_identity(&mut canvas, &reversed).unwrap();
        assert!(is_untouched(&canvas));
    }

    #[test]
    fn degenerate_triangle_is_culled() {
        let mesh = Mesh::new(
            vec![
                Vec3::new(-0.5, -0.5, 0.0),
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.5, 0.5, 0.0),
            ],
            vec![Face::new(0, 1, 2)],
        );

        let mut canvas = Canvas::new(200, 200);
        draw_identity(&mut canvas, &mesh).unwrap();
        assert!(is_untouched(&canvas));
    }

    #[test]
    fn empty_mesh_leaves_canvas_unchanged() {
        let mut canvas = Canvas::new(200, 200);
        draw_identity(&mut canvas, &Mesh::new(Vec::new(), Vec::new())).unwrap();
        assert!(is_untouched(&canvas));
    }

    #[test]
    fn wireframe_is_idempotent_across_fresh_canvases() {
        let mesh = Mesh::unit_cube();
        let modelview = Mat4::translation(0.0, 0.0, -5.0);
        let projection = Mat4::perspective(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        let viewport = Viewport::with_size(100.0, 100.0);

        let mut first = Canvas::new(100, 100);
        let mut second = Canvas::new(100, 100);
        for canvas in [&mut first, &mut second] {
            draw_wireframe(
                canvas,
                &mesh,
                &modelview,
                &projection,
                viewport,
                WireframeStyle::default(),
            )
            .unwrap();
        }

        assert!(!is_untouched(&first));
        assert_eq!(first.pixels(), second.pixels());
    }

    #[test]
    fn custom_color_is_used() {
        let color = colors::rgba(0xFF, 0x00, 0x00, 0xFF);
        let mut canvas = Canvas::new(200, 200);
        draw_wireframe(
            &mut canvas,
            &front_facing_triangle(),
            &Mat4::identity(),
            &Mat4::identity(),
            VIEW,
            WireframeStyle { color },
        )
        .unwrap();
        assert_eq!(canvas.get_pixel(100, 50), Some(color));
    }

    #[test]
    fn out_of_range_index_fails_before_drawing() {
        let mesh = Mesh::new(vec![Vec3::ZERO], vec![Face::new(0, 1, 5)]);
        let mut canvas = Canvas::new(200, 200);

        let err = draw_identity(&mut canvas, &mesh).unwrap_err();
        assert!(matches!(
            err,
            DrawError::IndexOutOfBounds {
                triangle: 0,
                index: 1,
                vertex_count: 1,
            }
        ));
        assert!(is_untouched(&canvas));
    }

    fn uv_triangle_mesh(faces: Vec<Face>) -> Mesh {
        Mesh::with_texcoords(
            vec![Vec3::ZERO; 3],
            faces,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 1.0),
            ],
        )
    }

    #[test]
    fn texcoords_allocates_default_canvas() {
        let mesh = Mesh::new(Vec::new(), Vec::new());
        let canvas = draw_texcoords(&mesh, None).unwrap();
        assert_eq!(canvas.width(), 512);
        assert_eq!(canvas.height(), 512);
        assert!(is_untouched(&canvas));
    }

    #[test]
    fn corner_uvs_draw_a_corner_touching_right_triangle() {
        let canvas = draw_texcoords(&uv_triangle_mesh(vec![Face::new(0, 1, 2)]), None).unwrap();

        // Top edge runs along y = 0, left edge along x = 0; the far corners
        // land within one pixel of the canvas border.
        assert_eq!(canvas.get_pixel(0, 0), Some(colors::TEXCOORD));
        assert_eq!(canvas.get_pixel(256, 0), Some(colors::TEXCOORD));
        assert_eq!(canvas.get_pixel(511, 0), Some(colors::TEXCOORD));
        assert_eq!(canvas.get_pixel(0, 256), Some(colors::TEXCOORD));
        assert_eq!(canvas.get_pixel(0, 511), Some(colors::TEXCOORD));
        // Hypotenuse from (1,0) to (0,1) passes through the center.
        assert_eq!(canvas.get_pixel(256, 256), Some(colors::TEXCOORD));
    }

    #[test]
    fn texcoords_ignore_winding() {
        let reversed = draw_texcoords(&uv_triangle_mesh(vec![Face::new(0, 2, 1)]), None).unwrap();
        assert!(!is_untouched(&reversed));
    }

    #[test]
    fn supplied_canvas_is_drawn_into_and_returned() {
        let canvas = Canvas::new(64, 64);
        let out = draw_texcoords(&uv_triangle_mesh(vec![Face::new(0, 1, 2)]), Some(canvas)).unwrap();
        assert_eq!(out.width(), 64);
        assert_eq!(out.get_pixel(0, 0), Some(colors::TEXCOORD));
        assert_eq!(out.get_pixel(32, 32), Some(colors::TEXCOORD));
    }

    #[test]
    fn missing_texcoord_fails_before_drawing() {
        let mesh = Mesh::with_texcoords(
            vec![Vec3::ZERO; 3],
            vec![Face::new(0, 1, 2)],
            vec![Vec2::ZERO, Vec2::ONE],
        );

        let err = draw_texcoords(&mesh, Some(Canvas::new(16, 16))).unwrap_err();
        assert!(matches!(
            err,
            DrawError::MissingTexcoord {
                triangle: 0,
                index: 2,
                texcoord_count: 2,
            }
        ));
    }

    #[test]
    fn errors_are_descriptive() {
        let err = DrawError::IndexOutOfBounds {
            triangle: 3,
            index: 9,
            vertex_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "triangle 3 references vertex index 9, but the mesh has 4 vertices"
        );
    }
}

//! Projection of 3D points into screen space.
//!
//! The [`project`] function is the single vertex-transform step shared by
//! the wireframe pipeline: model-view and projection matrices are supplied
//! by the caller, never derived here.

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// Mapping from normalized device coordinates to pixel coordinates,
/// described by a pixel-space origin and extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A viewport at origin (0, 0) covering `width` x `height` pixels.
    pub const fn with_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

/// Project a 3D point through the model-view/projection/viewport chain into
/// screen space.
///
/// The point is treated as homogeneous with w = 1, transformed into clip
/// space, divided by clip-space w, and mapped into viewport pixels. Screen y
/// grows downward while NDC y grows upward, so y is flipped. The returned z
/// carries the NDC depth; the wireframe path does not consume it.
///
/// Pure function with no validation: a degenerate transform chain (w = 0)
/// propagates non-finite coordinates to the caller.
pub fn project(point: Vec3, modelview: &Mat4, projection: &Mat4, viewport: Viewport) -> Vec3 {
    let clip = *projection * (*modelview * Vec4::from(point));

    let ndc = Vec3::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w);

    Vec3::new(
        viewport.x + (ndc.x + 1.0) * 0.5 * viewport.width,
        viewport.y + (1.0 - ndc.y) * 0.5 * viewport.height,
        ndc.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn identity_project(point: Vec3, viewport: Viewport) -> Vec3 {
        project(point, &Mat4::identity(), &Mat4::identity(), viewport)
    }

    #[test]
    fn ndc_origin_maps_to_viewport_center() {
        let p = identity_project(Vec3::ZERO, Viewport::with_size(200.0, 100.0));
        assert_relative_eq!(p.x, 100.0);
        assert_relative_eq!(p.y, 50.0);
    }

    #[test]
    fn y_is_flipped() {
        // NDC (1, 1) is the top-right corner; on screen that is y = 0.
        let p = identity_project(Vec3::new(1.0, 1.0, 0.0), Viewport::with_size(200.0, 100.0));
        assert_relative_eq!(p.x, 200.0);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn viewport_origin_offsets_screen_coordinates() {
        let viewport = Viewport::new(10.0, 20.0, 100.0, 100.0);
        let p = identity_project(Vec3::ZERO, viewport);
        assert_relative_eq!(p.x, 60.0);
        assert_relative_eq!(p.y, 70.0);
    }

    #[test]
    fn modelview_translation_moves_screen_point() {
        let modelview = Mat4::translation(1.0, 0.0, 0.0);
        let p = project(
            Vec3::ZERO,
            &modelview,
            &Mat4::identity(),
            Viewport::with_size(100.0, 100.0),
        );
        // NDC x = 1 lands on the right edge.
        assert_relative_eq!(p.x, 100.0);
        assert_relative_eq!(p.y, 50.0);
    }

    #[test]
    fn perspective_foreshortens_distant_points() {
        let projection = Mat4::perspective(FRAC_PI_2, 1.0, 0.1, 100.0);
        let viewport = Viewport::with_size(100.0, 100.0);

        let near = project(
            Vec3::new(1.0, 0.0, -1.0),
            &Mat4::identity(),
            &projection,
            viewport,
        );
        let far = project(
            Vec3::new(1.0, 0.0, -2.0),
            &Mat4::identity(),
            &projection,
            viewport,
        );

        // Same world x, but the farther point projects closer to center.
        assert!(far.x < near.x);
        assert!(far.x > 50.0);
    }

    #[test]
    fn depth_is_carried_in_z() {
        let p = identity_project(Vec3::new(0.0, 0.0, 0.25), Viewport::with_size(10.0, 10.0));
        assert_relative_eq!(p.z, 0.25);
    }
}

//! CPU-side mesh wireframe and UV-layout visualization.
//!
//! This crate projects mesh vertices through a caller-supplied
//! model-view/projection/viewport chain, culls back-facing triangles by
//! their screen-space winding, and draws the surviving edges into an owned
//! pixel canvas. A second pipeline draws a mesh's texture-coordinate layout
//! onto a flat canvas, with no culling.
//!
//! # Quick Start
//!
//! ```ignore
//! use meshwire::prelude::*;
//!
//! let mesh = Mesh::unit_cube();
//! let modelview = Mat4::translation(0.0, 0.0, -5.0);
//! let projection = Mat4::perspective(45f32.to_radians(), 1.0, 0.1, 100.0);
//!
//! let mut canvas = Canvas::new(512, 512);
//! draw_wireframe(
//!     &mut canvas,
//!     &mesh,
//!     &modelview,
//!     &projection,
//!     Viewport::with_size(512.0, 512.0),
//!     WireframeStyle::default(),
//! )?;
//! canvas.save_png("cube.png")?;
//! ```

// Public API - exposed to library consumers
pub mod canvas;
pub mod colors;
pub mod draw;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod winding;

// Re-export commonly needed types at crate root for convenience
pub use canvas::Canvas;
pub use draw::{draw_texcoords, draw_wireframe, DrawError, WireframeStyle};
pub use mesh::{Face, LoadError, Mesh};
pub use projection::{project, Viewport};
pub use winding::is_ccw;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use meshwire::prelude::*;
/// ```
pub mod prelude {
    // Rendering
    pub use crate::canvas::Canvas;
    pub use crate::draw::{draw_texcoords, draw_wireframe, DrawError, WireframeStyle};

    // Mesh
    pub use crate::mesh::{Face, LoadError, Mesh};

    // Projection
    pub use crate::projection::{project, Viewport};
    pub use crate::winding::is_ccw;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;
}

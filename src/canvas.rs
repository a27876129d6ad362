//! Owned 2D pixel canvas with basic drawing operations.
//!
//! Provides the [`Canvas`] struct which owns a packed ARGB8888 color buffer
//! and implements bounds-checked pixel access and line drawing. Writes
//! outside the canvas are silently dropped, so callers may issue lines with
//! off-canvas endpoints.

use std::path::Path;

use crate::colors;

#[derive(Debug)]
pub struct Canvas {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a canvas filled with the opaque-black background color.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, colors::BACKGROUND)
    }

    /// Create a canvas filled with an arbitrary color.
    pub fn filled(width: u32, height: u32, color: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            pixels: vec![color; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.pixels[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.pixels[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// The pixel buffer in row-major order, one ARGB8888 value per pixel.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// Works with integer arithmetic only: an error term tracks the distance
    /// from the ideal line, and each step along the major axis decides
    /// whether to also step along the minor axis. Endpoints may lie outside
    /// the canvas; out-of-bounds pixels are dropped by `set_pixel`.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        // Step direction per axis, so the loop handles all octants.
        let x_step = if x0 < x1 { 1 } else { -1 };
        let y_step = if y0 < y1 { 1 } else { -1 };

        let mut err = dx - dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            // Doubling the error keeps the comparison in integers.
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_step;
            }
            if e2 < dx {
                err += dx;
                y += y_step;
            }
        }
    }

    /// Copy the canvas into an RGBA8 image buffer.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut img = image::RgbaImage::new(self.width, self.height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let packed = self.pixels[(y * self.width + x) as usize];
            *pixel = image::Rgba(colors::channels(packed));
        }
        img
    }

    /// Write the canvas to disk as a PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.to_rgba_image().save(path)
    }
}

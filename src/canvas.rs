//! Drawing surfaces.
//!
//! [`Surface`] is the contract particles draw against. [`Canvas`] is the CPU
//! pixel buffer the visualizer renders into each frame and then uploads to
//! the GPU as a texture.
//!
//! Coordinates are pixels with the origin at the top-left corner and y
//! pointing down. Anything outside the canvas is clipped.

use glam::{IVec2, Vec2};

use crate::color::Rgb;

/// Something particles can be drawn onto.
pub trait Surface {
    /// Fill the whole surface with one color.
    fn clear(&mut self, color: Rgb);

    /// Fill every pixel within `radius` of `center`.
    fn fill_circle(&mut self, center: IVec2, radius: f32, color: Rgb);

    /// Fill the axis-aligned rectangle spanning `origin..origin + size`.
    fn fill_rect(&mut self, origin: IVec2, size: IVec2, color: Rgb);

    /// Fill a polygon using the even-odd rule. Fewer than 3 points draw nothing.
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb);
}

/// An RGBA8 pixel buffer.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

/// Number of pixels in a `width`×`height` canvas, computed without `u32` overflow.
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

impl Canvas {
    /// Create a canvas filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK.to_rgba(); pixel_count(width, height)],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at a pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| {
            let [r, g, b, _] = self.pixels[i];
            Rgb::new(r, g, b)
        })
    }

    /// Number of pixels currently holding `color`.
    pub fn count(&self, color: Rgb) -> usize {
        let rgba = color.to_rgba();
        self.pixels.iter().filter(|p| **p == rgba).count()
    }

    /// Raw RGBA bytes, row-major, `width * height * 4` long.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Fill pixels `x0..=x1` of row `y`, clipped to the canvas.
    fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Rgb) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width as i32 - 1);
        if x0 > x1 {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + x0 as usize..=row + x1 as usize].fill(color.to_rgba());
    }
}

impl Surface for Canvas {
    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_rgba());
    }

    fn fill_circle(&mut self, center: IVec2, radius: f32, color: Rgb) {
        if radius < 0.0 {
            return;
        }
        let r = radius.floor() as i32;
        let r_sq = radius * radius;
        for dy in -r..=r {
            let half = (r_sq - (dy * dy) as f32).sqrt().floor() as i32;
            self.fill_span(center.y + dy, center.x - half, center.x + half, color);
        }
    }

    fn fill_rect(&mut self, origin: IVec2, size: IVec2, color: Rgb) {
        if size.x <= 0 || size.y <= 0 {
            return;
        }
        for y in origin.y..origin.y + size.y {
            self.fill_span(y, origin.x, origin.x + size.x - 1, color);
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb) {
        if points.len() < 3 {
            return;
        }

        let (min_y, max_y) = points
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        let first_row = (min_y.floor() as i32).max(0);
        let last_row = (max_y.ceil() as i32).min(self.height as i32 - 1);

        let mut crossings = Vec::with_capacity(points.len());
        for y in first_row..=last_row {
            // Sample each row through pixel centers
            let sample_y = y as f32 + 0.5;
            crossings.clear();

            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                // Half-open test keeps shared vertices from being counted twice
                if (a.y <= sample_y) != (b.y <= sample_y) {
                    let t = (sample_y - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(f32::total_cmp);

            for pair in crossings.chunks_exact(2) {
                let x0 = (pair[0] - 0.5).ceil() as i32;
                let x1 = (pair[1] - 0.5).floor() as i32;
                self.fill_span(y, x0, x1, color);
            }
        }
    }
}

//! The raster buffer the user paints into.
//!
//! `Surface` is a tightly packed RGBA8 buffer at the template's natural
//! pixel size. Its dimensions are fixed for the lifetime of a template
//! session; only pixel contents change.

use crate::error::CanvasError;
use crate::model::Rgba;
use crate::state::geometry::Point;

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// Decoded template pixels (straight-alpha RGBA8).
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl TemplateImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, CanvasError> {
        check_dims(width, height, pixels.len())?;
        Ok(Self { width, height, pixels })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

fn check_dims(width: u32, height: u32, actual: usize) -> Result<(), CanvasError> {
    if width == 0 || height == 0 {
        return Err(CanvasError::EmptyTemplate { width, height });
    }
    let expected = width as usize * height as usize * 4;
    if actual != expected {
        return Err(CanvasError::PixelBufferSize { width, height, expected, actual });
    }
    Ok(())
}

/// Pixel-aligned rectangle touched by a raster operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl DirtyRect {
    #[must_use]
    pub fn union(self, other: DirtyRect) -> DirtyRect {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = (self.x + self.width).max(other.x + other.width);
        let y1 = (self.y + self.height).max(other.y + other.height);
        DirtyRect { x: x0, y: y0, width: x1 - x0, height: y1 - y0 }
    }
}

/// A full copy of the surface pixels, used as one undo entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot(Vec<u8>);

impl Snapshot {
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Allocate a transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let len = width as usize * height as usize * 4;
        check_dims(width, height, len)?;
        Ok(Self { width, height, pixels: vec![0; len] })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn full_rect(&self) -> DirtyRect {
        DirtyRect { x: 0, y: 0, width: self.width, height: self.height }
    }

    pub fn fill(&mut self, color: Rgba) {
        let px = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Draw `image` over the surface at the origin with source-over blending.
    pub fn composite(&mut self, image: &TemplateImage) -> Result<(), CanvasError> {
        if image.width != self.width || image.height != self.height {
            return Err(CanvasError::PixelBufferSize {
                width: self.width,
                height: self.height,
                expected: self.pixels.len(),
                actual: image.pixels.len(),
            });
        }
        for (dst, src) in self.pixels.chunks_exact_mut(4).zip(image.pixels.chunks_exact(4)) {
            blend(dst, [src[0], src[1], src[2], src[3]]);
        }
        Ok(())
    }

    /// White background with the template on top: the clean session state.
    pub fn paint_template(&mut self, image: &TemplateImage) -> Result<(), CanvasError> {
        self.fill(Rgba::WHITE);
        self.composite(image)
    }

    /// Fill a disc of `radius` canvas pixels centred on `center`.
    ///
    /// A pixel is covered when its centre lies inside the disc. Returns the
    /// touched region, or `None` if the disc misses the surface entirely.
    pub fn stamp_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Option<DirtyRect> {
        if !(radius > 0.0) || !center.x.is_finite() || !center.y.is_finite() {
            return None;
        }
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let x0 = (center.x - radius).floor().max(0.0);
        let y0 = (center.y - radius).floor().max(0.0);
        let x1 = (center.x + radius).ceil().min(w);
        let y1 = (center.y + radius).ceil().min(h);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        let (x0, y0, x1, y1) = (x0 as u32, y0 as u32, x1 as u32, y1 as u32);
        let r2 = radius * radius;
        let src = color.to_array();
        // (min_x, min_y, max_x, max_y), inclusive
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in y0..y1 {
            let dy = f64::from(y) + 0.5 - center.y;
            for x in x0..x1 {
                let dx = f64::from(x) + 0.5 - center.x;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let i = self.index(x, y);
                blend(&mut self.pixels[i..i + 4], src);
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((ax, ay, bx, by)) => (ax.min(x), ay.min(y), bx.max(x), by.max(y)),
                });
            }
        }
        bounds.map(|(ax, ay, bx, by)| DirtyRect { x: ax, y: ay, width: bx - ax + 1, height: by - ay + 1 })
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        let p = &self.pixels[i..i + 4];
        Some(Rgba { r: p[0], g: p[1], b: p[2], a: p[3] })
    }

    /// Copy the pixels inside `rect` into a tightly packed buffer.
    #[must_use]
    pub fn region(&self, rect: DirtyRect) -> Vec<u8> {
        let x1 = (rect.x + rect.width).min(self.width);
        let y1 = (rect.y + rect.height).min(self.height);
        if rect.x >= x1 || rect.y >= y1 {
            return Vec::new();
        }
        let row_len = (x1 - rect.x) as usize * 4;
        let mut out = Vec::with_capacity(row_len * (y1 - rect.y) as usize);
        for y in rect.y..y1 {
            let start = self.index(rect.x, y);
            out.extend_from_slice(&self.pixels[start..start + row_len]);
        }
        out
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.pixels.clone())
    }

    /// Overwrite the surface with a snapshot taken from a surface of the same size.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.0.len() == self.pixels.len() {
            self.pixels.copy_from_slice(&snapshot.0);
        } else {
            log::warn!(
                "snapshot size {} does not match surface {}x{}",
                snapshot.0.len(),
                self.width,
                self.height
            );
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

/// Straight-alpha source-over.
fn blend(dst: &mut [u8], src: [u8; 4]) {
    let sa = u32::from(src[3]);
    if sa == 255 {
        dst.copy_from_slice(&src);
        return;
    }
    if sa == 0 {
        return;
    }
    let da = u32::from(dst[3]);
    let inv = 255 - sa;
    // Output alpha scaled by 255.
    let out_a = sa * 255 + da * inv;
    for c in 0..3 {
        let s = u32::from(src[c]) * sa * 255;
        let d = u32::from(dst[c]) * da * inv;
        dst[c] = ((s + d + out_a / 2) / out_a) as u8;
    }
    dst[3] = ((out_a + 127) / 255) as u8;
}

//! Raster surface management (Cairo image surface).
//!
//! The [`Surface`] owns the ARGB32 pixel buffer the user draws on, together
//! with its origin in layout space (needed to map device pointer coordinates
//! to surface-local ones). Resizing recreates the underlying buffer, which
//! discards pixel content - callers are expected to restore from the
//! persisted snapshot immediately afterwards.

use cairo::{Context, Format, ImageSurface};

/// The drawing surface: an ARGB32 raster buffer plus its layout-space origin.
pub struct Surface {
    image: ImageSurface,
    origin_x: f64,
    origin_y: f64,
}

impl Surface {
    /// Creates a surface with the given pixel dimensions at origin (0, 0).
    ///
    /// Zero-sized dimensions are legal and produce a degenerate (but valid)
    /// surface.
    pub fn new(width: i32, height: i32) -> Result<Self, cairo::Error> {
        let image = ImageSurface::create(Format::ARgb32, width.max(0), height.max(0))?;
        Ok(Self {
            image,
            origin_x: 0.0,
            origin_y: 0.0,
        })
    }

    /// Surface width in device pixels.
    pub fn width(&self) -> i32 {
        self.image.width()
    }

    /// Surface height in device pixels.
    pub fn height(&self) -> i32 {
        self.image.height()
    }

    /// Borrow of the underlying Cairo image surface (for encoding/export).
    pub fn image(&self) -> &ImageSurface {
        &self.image
    }

    /// Updates the surface's top-left corner in layout space.
    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.origin_x = x;
        self.origin_y = y;
    }

    /// Maps device coordinates to surface-local coordinates.
    ///
    /// Pure translation against the current origin; no side effects.
    pub fn to_local(&self, device_x: f64, device_y: f64) -> (f64, f64) {
        (device_x - self.origin_x, device_y - self.origin_y)
    }

    /// Recreates the pixel buffer at the new dimensions.
    ///
    /// Existing pixel content is lost, matching the platform behavior of
    /// resizing a raster buffer. The owner must restore from the persisted
    /// snapshot afterwards.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), cairo::Error> {
        self.image = ImageSurface::create(Format::ARgb32, width.max(0), height.max(0))?;
        Ok(())
    }

    /// Creates a drawing context targeting this surface.
    pub fn context(&self) -> Result<Context, cairo::Error> {
        Context::new(&self.image)
    }

    /// Clears every pixel back to transparent.
    pub fn clear(&mut self) -> Result<(), cairo::Error> {
        let ctx = self.context()?;
        ctx.set_operator(cairo::Operator::Clear);
        let _ = ctx.paint();
        Ok(())
    }

    /// Clears the surface and paints `image` at the origin, unscaled.
    ///
    /// Pixels outside the painted image remain transparent; an image larger
    /// than the surface is cropped to the surface bounds.
    pub fn paint_image(&mut self, image: &ImageSurface) -> Result<(), cairo::Error> {
        self.clear()?;
        let ctx = self.context()?;
        ctx.set_source_surface(image, 0.0, 0.0)?;
        let _ = ctx.paint();
        Ok(())
    }

    /// Reads back one pixel as premultiplied 0-255 ARGB components.
    ///
    /// Returns `None` when the coordinates fall outside the surface or the
    /// pixel data is inaccessible.
    pub fn pixel_at(&mut self, x: i32, y: i32) -> Option<(u8, u8, u8, u8)> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        self.image.flush();
        let stride = self.image.stride() as usize;
        let data = self.image.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let word = u32::from_ne_bytes(data[offset..offset + 4].try_into().ok()?);
        let a = (word >> 24) as u8;
        let (r, g, b) = (
            ((word >> 16) & 0xff) as u8,
            ((word >> 8) & 0xff) as u8,
            (word & 0xff) as u8,
        );
        Some((a, r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_transparent() {
        let mut surface = Surface::new(8, 8).unwrap();
        assert_eq!(surface.pixel_at(4, 4), Some((0, 0, 0, 0)));
    }

    #[test]
    fn zero_sized_surface_is_valid() {
        let mut surface = Surface::new(0, 0).unwrap();
        assert_eq!(surface.width(), 0);
        assert_eq!(surface.height(), 0);
        assert_eq!(surface.pixel_at(0, 0), None);
    }

    #[test]
    fn resize_discards_content() {
        let mut surface = Surface::new(16, 16).unwrap();
        let ctx = surface.context().unwrap();
        ctx.set_source_rgba(1.0, 0.0, 0.0, 1.0);
        let _ = ctx.paint();
        drop(ctx);

        surface.resize(32, 32).unwrap();
        assert_eq!(surface.width(), 32);
        assert_eq!(surface.pixel_at(4, 4), Some((0, 0, 0, 0)));
    }

    #[test]
    fn to_local_subtracts_origin() {
        let mut surface = Surface::new(4, 4).unwrap();
        surface.set_origin(10.0, 20.0);
        assert_eq!(surface.to_local(15.0, 25.0), (5.0, 5.0));
    }
}

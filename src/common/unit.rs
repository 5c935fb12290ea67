//! Unit conversion utilities.
//!
//! DrawingML positions and sizes are expressed in EMUs (English Metric
//! Units); font sizes in hundredths of a point. Layout code works in
//! inches and points and converts at the edge.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

/// Font size in points to the `sz` attribute of `a:rPr` (hundredths of a point).
#[inline]
pub fn pt_to_font_size(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

/// A rectangle on the slide, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from inch coordinates.
    pub fn from_inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            inches_to_emu(x),
            inches_to_emu(y),
            inches_to_emu(width),
            inches_to_emu(height),
        )
    }

    /// Largest rectangle with the given pixel aspect ratio that fits inside
    /// `self`, centered on both axes.
    ///
    /// Degenerate pixel sizes (zero width or height) return `self` unchanged.
    pub fn fit_centered(&self, px_width: u32, px_height: u32) -> Rect {
        if px_width == 0 || px_height == 0 || self.width <= 0 || self.height <= 0 {
            return *self;
        }

        let image_ratio = px_width as f64 / px_height as f64;
        let region_ratio = self.width as f64 / self.height as f64;

        let (width, height) = if image_ratio > region_ratio {
            // Wider than the region: width-bound
            (self.width, (self.width as f64 / image_ratio).round() as i64)
        } else {
            (
                (self.height as f64 * image_ratio).round() as i64,
                self.height,
            )
        };

        Rect::new(
            self.x + (self.width - width) / 2,
            self.y + (self.height - height) / 2,
            width,
            height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_conversions() {
        assert_eq!(inches_to_emu(1.0), EMUS_PER_INCH);
        assert_eq!(inches_to_emu(13.333), 12_191_695);
        assert_eq!(pt_to_emu_f64(2.0), 25_400);
        assert!((emu_to_inches(457_200) - 0.5).abs() < f64::EPSILON);
        assert_eq!(pt_to_font_size(28.0), 2800);
    }

    #[test]
    fn test_fit_wide_image() {
        let region = Rect::new(0, 0, 1000, 1000);
        let fitted = region.fit_centered(200, 100);
        assert_eq!(fitted, Rect::new(0, 250, 1000, 500));
    }

    #[test]
    fn test_fit_tall_image() {
        let region = Rect::new(100, 100, 1600, 900);
        let fitted = region.fit_centered(300, 900);
        assert_eq!(fitted.height, 900);
        assert_eq!(fitted.width, 300);
        assert_eq!(fitted.x, 100 + (1600 - 300) / 2);
        assert_eq!(fitted.y, 100);
    }

    #[test]
    fn test_fit_preserves_ratio() {
        let region = Rect::from_inches(1.0, 2.5, 11.3, 4.5);
        let fitted = region.fit_centered(1920, 1080);
        let ratio = fitted.width as f64 / fitted.height as f64;
        assert!((ratio - 1920.0 / 1080.0).abs() < 0.001);
        assert!(fitted.width <= region.width && fitted.height <= region.height);
    }

    #[test]
    fn test_fit_degenerate_size() {
        let region = Rect::new(5, 5, 10, 10);
        assert_eq!(region.fit_centered(0, 10), region);
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid
//!
//! An owned, rectangular copy of the image being carved.  Every
//! operation that changes its shape hands back a new grid; nothing
//! edits one in place.

use crate::error::{CarveError, Result};
use crate::pixelpairs::Color;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, RgbaImage};
use itertools::iproduct;
use num_traits::NumCast;
use std::ops::Index;

#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    pixels: TwoDimensionalMap<Color>,
}

// Scale a channel from its native range down to 0..=255.  Sixteen-bit
// channels come out as `c / 257`, which is what every decoder means by
// "the 8-bit value of this sample"; the product is taken before the
// division so exact multiples stay exact.
fn normalize<S: Primitive>(c: S) -> u8 {
    let max: f64 = NumCast::from(S::DEFAULT_MAX_VALUE).unwrap_or(255.0);
    let v: f64 = NumCast::from(c).unwrap_or(0.0);
    (v * 255.0 / max).floor().clamp(0.0, 255.0) as u8
}

impl PixelGrid {
    /// Copy an image into a grid.  This is generic on the image type;
    /// any pixel format is first widened to RGBA and then normalized to
    /// eight bits per channel.
    pub fn from_image<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyImage { width, height });
        }
        let data = iproduct!(0..height, 0..width)
            .map(|(y, x)| {
                let rgba = image.get_pixel(x, y).to_rgba();
                let [r, g, b, a] = rgba.0;
                Color::rgba(normalize(r), normalize(g), normalize(b), normalize(a))
            })
            .collect();
        Ok(Self::from_vec(width, height, data))
    }

    /// Build a grid from rows of colors.  Every row must be as long as
    /// the first, and there must be at least one pixel.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyImage {
                width: width as u32,
                height: height as u32,
            });
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(CarveError::Dimensions {
                row,
                expected: width,
                actual: r.len(),
            });
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Self::from_vec(width as u32, height as u32, data))
    }

    // Callers have already made sure the buffer is the right size.
    pub(crate) fn from_vec(width: u32, height: u32, data: Vec<Color>) -> Self {
        PixelGrid {
            pixels: TwoDimensionalMap::from_raw_parts(width, height, data),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Bounds-checked read of the pixel at column `x`, row `y`.
    pub fn color_at(&self, x: u32, y: u32) -> Result<Color> {
        self.pixels.get(x, y).ok_or(CarveError::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        })
    }

    pub fn row(&self, y: u32) -> &[Color] {
        self.pixels.row(y)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.rows()
    }

    /// A copy with rows and columns swapped.  Horizontal carving is
    /// vertical carving on this.
    pub fn transpose(&self) -> Self {
        PixelGrid {
            pixels: self.pixels.transpose(),
        }
    }

    /// Export the grid as an 8-bit RGBA image, ready for an encoder.
    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| self.pixels[(x, y)].into())
    }
}

impl Index<(u32, u32)> for PixelGrid {
    type Output = Color;

    fn index(&self, (x, y): (u32, u32)) -> &Color {
        &self.pixels[(x, y)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);
    const YELLOW: Color = Color::rgb(255, 255, 0);
    const CYAN: Color = Color::rgb(0, 255, 255);
    const MAGENTA: Color = Color::rgb(255, 0, 255);

    #[test]
    fn transpose_three_by_two() {
        let grid = PixelGrid::from_rows(vec![vec![RED, GREEN, BLUE], vec![YELLOW, CYAN, MAGENTA]]).unwrap();
        let expected =
            PixelGrid::from_rows(vec![vec![RED, YELLOW], vec![GREEN, CYAN], vec![BLUE, MAGENTA]]).unwrap();
        let flipped = grid.transpose();
        assert_eq!(flipped, expected);
        assert_eq!(flipped.transpose(), grid);
    }

    #[test]
    fn transpose_single_pixel() {
        let grid = PixelGrid::from_rows(vec![vec![Color::rgb(123, 123, 123)]]).unwrap();
        assert_eq!(grid.transpose(), grid);
    }

    #[test]
    fn sixteen_bit_channels_are_scaled_down() {
        let buf: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_raw(2, 1, vec![65535, 257 * 128, 0, 256, 514, 1000]).unwrap();
        let grid = PixelGrid::from_image(&buf).unwrap();
        assert_eq!(grid[(0, 0)], Color::rgba(255, 128, 0, 255));
        assert_eq!(grid[(1, 0)], Color::rgba(0, 2, 3, 255));
    }

    #[test]
    fn grayscale_is_widened() {
        let buf: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_raw(1, 2, vec![7, 200]).unwrap();
        let grid = PixelGrid::from_image(&buf).unwrap();
        assert_eq!(grid[(0, 0)], Color::rgb(7, 7, 7));
        assert_eq!(grid[(0, 1)], Color::rgb(200, 200, 200));
    }

    #[test]
    fn image_round_trip() {
        let buf = RgbaImage::from_fn(4, 3, |x, y| image::Rgba([x as u8, y as u8, 9, 200]));
        let grid = PixelGrid::from_image(&buf).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.to_image(), buf);
    }

    #[test]
    fn empty_images_are_refused() {
        let buf = RgbaImage::new(0, 5);
        assert_eq!(
            PixelGrid::from_image(&buf),
            Err(CarveError::EmptyImage { width: 0, height: 5 })
        );
        assert!(PixelGrid::from_rows(vec![]).is_err());
    }

    #[test]
    fn ragged_rows_are_refused() {
        let err = PixelGrid::from_rows(vec![vec![RED, GREEN], vec![BLUE]]).unwrap_err();
        assert_eq!(err, CarveError::Dimensions { row: 1, expected: 2, actual: 1 });
    }

    #[test]
    fn out_of_bounds_read() {
        let grid = PixelGrid::from_rows(vec![vec![RED, GREEN]]).unwrap();
        assert_eq!(grid.color_at(1, 0), Ok(GREEN));
        assert!(matches!(grid.color_at(2, 0), Err(CarveError::OutOfBounds { .. })));
    }
}

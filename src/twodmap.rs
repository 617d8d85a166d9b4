use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// Defines the basic two-dimensional field: an addressable, row-major
/// grid holding one of the values the carver works with: a `Color`
/// for the pixel grid, an `f64` for the energy field, or the
/// cumulative cost table the seam finder builds.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    // Scratch tables sized from an existing, non-empty map.
    pub(crate) fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Returns `None` if either
    /// dimension is zero, or if the buffer does not hold exactly
    /// `width * height` values.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if width == 0 || height == 0 || data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap { width, height, data })
    }

    pub(crate) fn from_raw_parts(width: u32, height: u32, data: Vec<P>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(data.len(), width as usize * height as usize);
        TwoDimensionalMap { width, height, data }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`, as `image` orders them.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bounds-checked read.
    pub fn get(&self, x: u32, y: u32) -> Option<P> {
        if x < self.width && y < self.height {
            Some(self.data[self.get_index(x, y)])
        } else {
            None
        }
    }

    /// One row as a contiguous slice.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Every row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> {
        self.data.chunks(self.width as usize)
    }

    pub fn values(&self) -> &[P] {
        &self.data
    }

    /// Swap the axes: the result is `height` wide and `width` tall, and
    /// `result[(y, x)] == self[(x, y)]`.
    pub fn transpose(&self) -> Self {
        let data = iproduct!(0..self.width, 0..self.height)
            .map(|(x, y)| self[(x, y)])
            .collect();
        TwoDimensionalMap {
            width: self.height,
            height: self.width,
            data,
        }
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given a pixel grid, calculate the gradient-magnitude energy of every
//! pixel.  There is only the one energy function, and the field is
//! always recomputed whole: nothing here is incremental.

use crate::pixelgrid::PixelGrid;
use crate::pixelpairs::delta_square;
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;

/// The energy of every pixel on the outer edge of the grid.  It is far
/// above any gradient an 8-bit image can produce (the largest is
/// `sqrt(6 * 255²)`, about 625).
pub const BORDER_ENERGY: f64 = 1000.0;

/// One non-negative energy per pixel, same shape as the grid it came from.
pub type EnergyField = TwoDimensionalMap<f64>;

// Image -> Energy Map
//
//        |Δx|² = Δ²(x+1,y ; x-1,y)
//        |Δy|² = Δ²(x,y+1 ; x,y-1)
//       e(x,y) = √(|Δx|²+|Δy|²)
//
// Border pixels don't have both neighbours on both axes, so they get
// the sentinel instead.

/// Compute the energy of every pixel in a grid.
pub fn calculate_energy(grid: &PixelGrid) -> EnergyField {
    let (width, height) = grid.dimensions();
    let (mw, mh) = (width - 1, height - 1);

    let mut emap = EnergyField::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = if x == 0 || y == 0 || x == mw || y == mh {
            BORDER_ENERGY
        } else {
            let dx = delta_square(&grid[(x + 1, y)], &grid[(x - 1, y)]);
            let dy = delta_square(&grid[(x, y + 1)], &grid[(x, y - 1)]);
            (f64::from(dx) + f64::from(dy)).sqrt()
        };
    }
    emap
}

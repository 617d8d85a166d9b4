// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam through an energy field
//!
//! A straightforward dynamic program: the cumulative cost of reaching a
//! pixel is its own energy plus the cheapest of the (up to) three
//! pixels directly above it.  The seam is then read back from the
//! bottom row up.  Horizontal seams are vertical seams of the
//! transposed field.

use crate::energy::EnergyField;
use crate::error::{CarveError, Result};
use crate::twodmap::TwoDimensionalMap;
use std::ops::RangeInclusive;

/// One column index per row (vertical), or one row index per column
/// (horizontal).  Adjacent entries never differ by more than one.
pub type Seam = Vec<u32>;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to let the carver and a bare
/// energy field answer the same questions.
pub trait SeamFinder {
    /// Request a left-to-right seam: one row index per column.
    fn find_horizontal_seam(&self) -> Seam;

    /// Request a top-to-bottom seam: one column index per row.
    fn find_vertical_seam(&self) -> Seam;
}

impl SeamFinder for EnergyField {
    fn find_horizontal_seam(&self) -> Seam {
        energy_to_horizontal_seam(self)
    }

    fn find_vertical_seam(&self) -> Seam {
        energy_to_vertical_seam(self)
    }
}

// The pixels directly above (or below) column x that a seam through x
// may come from.
#[inline]
fn neighbours(x: u32, max_x: u32) -> RangeInclusive<u32> {
    x.saturating_sub(1)..=(x + 1).min(max_x)
}

fn cumulative_cost(energy: &EnergyField) -> TwoDimensionalMap<f64> {
    let (width, height) = energy.dimensions();
    let max_x = width - 1;
    let mut cost: TwoDimensionalMap<f64> = TwoDimensionalMap::new(width, height);

    // Populate the first row with their native energies.
    for x in 0..width {
        cost[(x, 0)] = energy[(x, 0)];
    }

    // For every subsequent row, the cell is its own energy plus the
    // lowest adjacent cost in the row above.
    for y in 1..height {
        for x in 0..width {
            let parent = neighbours(x, max_x)
                .map(|px| cost[(px, y - 1)])
                .fold(f64::INFINITY, f64::min);
            cost[(x, y)] = energy[(x, y)] + parent;
        }
    }
    cost
}

// Of the three cells above the seam's current column, take the
// cheapest.  Ties keep the seam straight; failing that, they go left.
fn cheapest_parent(cost: &TwoDimensionalMap<f64>, col: u32, y: u32) -> u32 {
    let max_x = cost.width() - 1;
    let mut best = col;
    if col > 0 && cost[(col - 1, y)] < cost[(best, y)] {
        best = col - 1;
    }
    if col < max_x && cost[(col + 1, y)] < cost[(best, y)] {
        best = col + 1;
    }
    best
}

/// Given an energy field, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the cheapest top-to-bottom seam.  When several columns of
/// the bottom row tie, the leftmost wins.
pub fn energy_to_vertical_seam(energy: &EnergyField) -> Seam {
    let (width, height) = energy.dimensions();
    let cost = cumulative_cost(energy);
    let last = height - 1;

    let mut seam_col = (0..width).fold(0, |best, x| {
        if cost[(x, last)] < cost[(best, last)] {
            x
        } else {
            best
        }
    });

    // Working backwards from the bottom row, fill in the column for
    // each row above.
    let mut seam = vec![0; height as usize];
    seam[last as usize] = seam_col;
    for y in (0..last).rev() {
        seam_col = cheapest_parent(&cost, seam_col, y);
        seam[y as usize] = seam_col;
    }
    seam
}

/// Given an energy field, return the list of y-coordinates that, when
/// mapped with the range (0..width), give the XY coordinates for each
/// pixel in the cheapest left-to-right seam.
pub fn energy_to_horizontal_seam(energy: &EnergyField) -> Seam {
    energy_to_vertical_seam(&energy.transpose())
}

/// Check a vertical seam against a grid `limit` columns wide and
/// `length` rows tall.
pub fn validate_seam(seam: &[u32], length: u32, limit: u32) -> Result<()> {
    if seam.len() != length as usize {
        return Err(CarveError::SeamLength {
            expected: length as usize,
            actual: seam.len(),
        });
    }
    if let Some((index, &value)) = seam.iter().enumerate().find(|(_, v)| **v >= limit) {
        return Err(CarveError::SeamOutOfRange { index, value, limit });
    }
    if let Some(index) = (1..seam.len()).find(|&i| seam[i].abs_diff(seam[i - 1]) > 1) {
        return Err(CarveError::SeamDisconnected { index });
    }
    Ok(())
}

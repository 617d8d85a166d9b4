// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cut a vertical seam out of a grid, or stitch one in.
//!
//! Both operations check the seam against the grid before they copy a
//! single pixel, and both return a fresh grid.  Horizontal seams are
//! handled by the carver, which transposes around these.

use crate::error::{CarveError, Result};
use crate::pixelgrid::PixelGrid;
use crate::pixelpairs::blend;
use crate::seamcarver::Axis;
use crate::seamfinder::validate_seam;

/// Copy every pixel except the one the seam passes through in each
/// row.  The result is one column narrower.
pub fn remove_vertical_seam(grid: &PixelGrid, seam: &[u32]) -> Result<PixelGrid> {
    let (width, height) = grid.dimensions();
    if width <= 1 {
        return Err(CarveError::Degenerate {
            axis: Axis::Width,
            size: width,
            requested: 1,
        });
    }
    validate_seam(seam, height, width)?;

    let mut data = Vec::with_capacity((width as usize - 1) * height as usize);
    for (row, &cut) in grid.rows().zip(seam) {
        let cut = cut as usize;
        data.extend_from_slice(&row[..cut]);
        data.extend_from_slice(&row[cut + 1..]);
    }
    Ok(PixelGrid::from_vec(width - 1, height, data))
}

/// Copy every pixel, and immediately to the right of the seam's pixel
/// in each row add the blend of that pixel and its right-hand
/// neighbour.  At the right edge the seam pixel is its own neighbour.
/// The result is one column wider.
pub fn insert_vertical_seam(grid: &PixelGrid, seam: &[u32]) -> Result<PixelGrid> {
    let (width, height) = grid.dimensions();
    validate_seam(seam, height, width)?;

    let mut data = Vec::with_capacity((width as usize + 1) * height as usize);
    for (row, &at) in grid.rows().zip(seam) {
        let at = at as usize;
        let right = (at + 1).min(row.len() - 1);
        data.extend_from_slice(&row[..=at]);
        data.push(blend(&row[at], &row[right]));
        data.extend_from_slice(&row[at + 1..]);
    }
    Ok(PixelGrid::from_vec(width + 1, height, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixelpairs::Color;

    fn gray(v: u8) -> Color {
        Color::rgb(v, v, v)
    }

    fn grid(rows: &[&[u8]]) -> PixelGrid {
        PixelGrid::from_rows(rows.iter().map(|r| r.iter().map(|&v| gray(v)).collect()).collect()).unwrap()
    }

    #[test]
    fn remove_keeps_order() {
        let before = grid(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        let after = remove_vertical_seam(&before, &[0, 1, 2]).unwrap();
        assert_eq!(after, grid(&[&[2, 3], &[4, 6], &[7, 8]]));
    }

    #[test]
    fn remove_down_to_one_column() {
        let before = grid(&[&[1, 2], &[3, 4]]);
        let after = remove_vertical_seam(&before, &[1, 0]).unwrap();
        assert_eq!(after, grid(&[&[1], &[4]]));
        assert_eq!(
            remove_vertical_seam(&after, &[0, 0]),
            Err(CarveError::Degenerate { axis: Axis::Width, size: 1, requested: 1 })
        );
    }

    #[test]
    fn remove_rejects_bad_seams() {
        let before = grid(&[&[1, 2, 3], &[4, 5, 6]]);
        assert!(matches!(
            remove_vertical_seam(&before, &[0]),
            Err(CarveError::SeamLength { expected: 2, actual: 1 })
        ));
        assert!(matches!(
            remove_vertical_seam(&before, &[2, 3]),
            Err(CarveError::SeamOutOfRange { index: 1, .. })
        ));
        assert!(matches!(
            remove_vertical_seam(&before, &[0, 2]),
            Err(CarveError::SeamDisconnected { index: 1 })
        ));
    }

    #[test]
    fn insert_blends_with_the_right_neighbour() {
        let before = grid(&[&[10, 20, 30], &[40, 51, 60]]);
        let after = insert_vertical_seam(&before, &[0, 1]).unwrap();
        assert_eq!(after, grid(&[&[10, 15, 20, 30], &[40, 51, 55, 60]]));
    }

    #[test]
    fn insert_at_the_right_edge_duplicates() {
        let before = grid(&[&[10, 20], &[30, 41]]);
        let after = insert_vertical_seam(&before, &[1, 1]).unwrap();
        assert_eq!(after, grid(&[&[10, 20, 20], &[30, 41, 41]]));
    }

    #[test]
    fn insert_averages_alpha_too() {
        let before = PixelGrid::from_rows(vec![vec![Color::rgba(0, 0, 0, 0), Color::rgba(255, 3, 100, 255)]]).unwrap();
        let after = insert_vertical_seam(&before, &[0]).unwrap();
        assert_eq!(after[(1, 0)], Color::rgba(127, 1, 50, 127));
    }

    #[test]
    fn insert_into_single_column() {
        let before = grid(&[&[7], &[9]]);
        let after = insert_vertical_seam(&before, &[0, 0]).unwrap();
        assert_eq!(after, grid(&[&[7, 7], &[9, 9]]));
    }

    #[test]
    fn insert_then_remove_is_identity() {
        let before = grid(&[&[1, 2, 3, 4], &[5, 6, 7, 8], &[9, 10, 11, 12]]);
        let seam = [1, 2, 2];
        let grown = insert_vertical_seam(&before, &seam).unwrap();
        let shifted: Vec<u32> = seam.iter().map(|s| s + 1).collect();
        assert_eq!(remove_vertical_seam(&grown, &shifted).unwrap(), before);
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarver - the stateful front end
//!
//! `SeamCarver` owns the current pixel grid and the energy field
//! derived from it, and replaces the two together after every edit.
//! Only vertical seams are ever found, cut or inserted; horizontal
//! operations transpose the grid, do the vertical thing, and
//! transpose back.

use crate::energy::{calculate_energy, EnergyField};
use crate::error::{CarveError, Result};
use crate::pixelgrid::PixelGrid;
use crate::pixelpairs::Color;
use crate::seameditor::{insert_vertical_seam, remove_vertical_seam};
use crate::seamfinder::{energy_to_vertical_seam, Seam, SeamFinder};
use image::{GenericImageView, Pixel, Primitive, RgbaImage};
use std::fmt;
use tracing::{debug, trace};

/// The dimension a carve changes.  Carving a seam of one orientation
/// shrinks the other dimension: vertical seams come out of the width.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Axis {
    Width,
    Height,
}

impl Axis {
    fn turn(self) -> Self {
        match self {
            Axis::Width => Axis::Height,
            Axis::Height => Axis::Width,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

fn check_room(axis: Axis, size: u32, requested: u32) -> Result<()> {
    if requested >= size {
        return Err(CarveError::Degenerate { axis, size, requested });
    }
    Ok(())
}

// Find and cut the cheapest seam across `axis`, against a freshly
// computed energy field.
fn carve_once(grid: &PixelGrid, axis: Axis) -> Result<PixelGrid> {
    match axis {
        Axis::Width => {
            let seam = energy_to_vertical_seam(&calculate_energy(grid));
            remove_vertical_seam(grid, &seam)
        }
        Axis::Height => Ok(carve_once(&grid.transpose(), Axis::Width)?.transpose()),
    }
}

// Enlarging by N is done in two passes.  Inserting the cheapest seam
// N times would find the same seam every time and smear it; instead,
// cut N seams out of a scratch copy, remember where each one was, and
// then stitch a blended seam back in at each remembered position, in
// the same order, starting from the untouched grid.
fn enlarge_width(grid: &PixelGrid, count: u32) -> Result<PixelGrid> {
    let mut scratch = grid.clone();
    let mut seams = Vec::with_capacity(count as usize);
    for i in 0..count {
        let seam = energy_to_vertical_seam(&calculate_energy(&scratch));
        scratch = remove_vertical_seam(&scratch, &seam)?;
        trace!(seam = i, "planned insertion");
        seams.push(seam);
    }

    seams
        .iter()
        .try_fold(grid.clone(), |grown, seam| insert_vertical_seam(&grown, seam))
}

/// The carver: the current image and its energy, always in step.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    grid: PixelGrid,
    energy: EnergyField,
}

impl SeamCarver {
    /// Copy an image into a new carver and compute its energy.  Fails
    /// if the image has no pixels.
    pub fn new<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        Ok(Self::from_grid(PixelGrid::from_image(image)?))
    }

    pub fn from_grid(grid: PixelGrid) -> Self {
        let energy = calculate_energy(&grid);
        SeamCarver { grid, energy }
    }

    // The only way the grid changes.  The energy is rebuilt before the
    // pair is swapped in, so the two can never be seen out of step.
    fn replace(&mut self, grid: PixelGrid) {
        let energy = calculate_energy(&grid);
        self.grid = grid;
        self.energy = energy;
        debug!(width = self.width(), height = self.height(), "grid replaced");
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.grid.dimensions()
    }

    /// Energy of the pixel at column `x`, row `y`.
    pub fn energy_at(&self, x: u32, y: u32) -> Result<f64> {
        self.energy.get(x, y).ok_or(CarveError::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        })
    }

    /// Color of the pixel at column `x`, row `y`.
    pub fn color_at(&self, x: u32, y: u32) -> Result<Color> {
        self.grid.color_at(x, y)
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn energy(&self) -> &EnergyField {
        &self.energy
    }

    /// Export the current grid for an encoder.
    pub fn current_image(&self) -> RgbaImage {
        self.grid.to_image()
    }

    /// Cut a top-to-bottom seam (one column per row) out of the image.
    /// The image is unchanged if the seam doesn't fit it.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        let grid = remove_vertical_seam(&self.grid, seam)?;
        self.replace(grid);
        Ok(())
    }

    /// Cut a left-to-right seam (one row per column) out of the image.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        check_room(Axis::Height, self.height(), 1)?;
        let grid = remove_vertical_seam(&self.grid.transpose(), seam)?.transpose();
        self.replace(grid);
        Ok(())
    }

    /// Widen the image by `count` columns.  The image must be wider
    /// than `count`, since that many seams are first planned by
    /// removal.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn insert_vertical_seams(&mut self, count: u32) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        check_room(Axis::Width, self.width(), count)?;
        let grid = enlarge_width(&self.grid, count)?;
        self.replace(grid);
        Ok(())
    }

    /// Heighten the image by `count` rows.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn insert_horizontal_seams(&mut self, count: u32) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        check_room(Axis::Height, self.height(), count)?;
        let grid = enlarge_width(&self.grid.transpose(), count)?.transpose();
        self.replace(grid);
        Ok(())
    }

    /// Given a desired new width and height, repeatedly carve seams out
    /// of (or into) the image.  While both dimensions need to shrink
    /// the carver alternates between them; enlarging is done width
    /// first.  Nothing changes unless the whole resize succeeds.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resize(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let (width, height) = self.dimensions();
        if new_width == 0 {
            return Err(CarveError::Degenerate { axis: Axis::Width, size: width, requested: width });
        }
        if new_height == 0 {
            return Err(CarveError::Degenerate { axis: Axis::Height, size: height, requested: height });
        }
        if new_width > width {
            check_room(Axis::Width, width, new_width - width)?;
        }
        if new_height > height {
            check_room(Axis::Height, height, new_height - height)?;
        }

        let mut scratch = self.grid.clone();
        let mut direction = Axis::Width;
        while scratch.width() > new_width && scratch.height() > new_height {
            scratch = carve_once(&scratch, direction)?;
            direction = direction.turn();
        }
        while scratch.width() > new_width {
            scratch = carve_once(&scratch, Axis::Width)?;
        }
        while scratch.height() > new_height {
            scratch = carve_once(&scratch, Axis::Height)?;
        }
        if new_width > scratch.width() {
            scratch = enlarge_width(&scratch, new_width - scratch.width())?;
        }
        if new_height > scratch.height() {
            scratch = enlarge_width(&scratch.transpose(), new_height - scratch.height())?.transpose();
        }

        self.replace(scratch);
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&self) -> Seam {
        self.energy.find_horizontal_seam()
    }

    fn find_vertical_seam(&self) -> Seam {
        self.energy.find_vertical_seam()
    }
}

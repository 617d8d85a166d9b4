//! Render an energy field for people to look at: as a table of numbers,
//! optionally with a seam picked out, or as a grayscale image.

use crate::energy::EnergyField;
use image::{GrayImage, ImageBuffer, Luma};

/// A seam to mark in an energy table.
#[derive(Debug, Copy, Clone)]
pub enum SeamMark<'a> {
    /// One column index per row.
    Vertical(&'a [u32]),
    /// One row index per column.
    Horizontal(&'a [u32]),
}

impl SeamMark<'_> {
    fn contains(&self, x: u32, y: u32) -> bool {
        match self {
            SeamMark::Vertical(seam) => seam.get(y as usize) == Some(&x),
            SeamMark::Horizontal(seam) => seam.get(x as usize) == Some(&y),
        }
    }
}

/// One line per row, each energy right-aligned in ten characters with
/// two decimals.  Cells on the marked seam are followed by a `*`.
pub fn energy_table(energy: &EnergyField, mark: Option<SeamMark<'_>>) -> String {
    let mut out = String::new();
    for (y, row) in energy.rows().enumerate() {
        for (x, e) in row.iter().enumerate() {
            let star = match mark {
                Some(m) if m.contains(x as u32, y as u32) => "*",
                _ => "",
            };
            out.push_str(&format!("{:10.2}{}", e, star));
        }
        out.push('\n');
    }
    out
}

/// Scale the field so its largest value is white.
pub fn energy_to_image(energy: &EnergyField) -> GrayImage {
    let factor = energy.values().iter().copied().fold(0.0, f64::max);
    ImageBuffer::from_fn(energy.width(), energy.height(), |x, y| {
        let e = energy[(x, y)];
        let c = if factor > 0.0 { e * 255.0 / factor } else { 0.0 };
        Luma([c.round().clamp(0.0, 255.0) as u8])
    })
}

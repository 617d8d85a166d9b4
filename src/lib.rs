//! Content-aware image resizing.
//!
//! Build a [`SeamCarver`] from any `image` view, then find, remove or
//! insert seams along either axis.

pub mod dump;
pub mod energy;
pub mod error;
pub mod pixelgrid;
pub mod pixelpairs;
pub mod seamcarver;
pub mod seameditor;
pub mod seamfinder;
pub mod twodmap;

pub use energy::{calculate_energy, EnergyField, BORDER_ENERGY};
pub use error::{CarveError, Result};
pub use pixelgrid::PixelGrid;
pub use pixelpairs::Color;
pub use seamcarver::{Axis, SeamCarver};
pub use seameditor::{insert_vertical_seam, remove_vertical_seam};
pub use seamfinder::{energy_to_horizontal_seam, energy_to_vertical_seam, Seam, SeamFinder};

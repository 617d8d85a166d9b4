// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the carving engine.
//!
//! All of these are caller mistakes or requests the geometry cannot
//! honour.  There is no I/O in the engine, so nothing here is
//! transient and nothing is worth retrying.

use crate::seamcarver::Axis;

pub type Result<T> = std::result::Result<T, CarveError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CarveError {
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("row {row} has {actual} pixels, expected {expected}")]
    Dimensions { row: usize, expected: usize, actual: usize },

    #[error("pixel ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    #[error("seam has {actual} entries, expected {expected}")]
    SeamLength { expected: usize, actual: usize },

    #[error("seam entry {index} is {value}, must be below {limit}")]
    SeamOutOfRange { index: usize, value: u32, limit: u32 },

    #[error("seam jumps more than one pixel at entry {index}")]
    SeamDisconnected { index: usize },

    #[error("cannot take {requested} from a {axis} of {size}")]
    Degenerate { axis: Axis, size: u32, requested: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = CarveError::SeamOutOfRange { index: 2, value: 7, limit: 5 };
        assert_eq!(err.to_string(), "seam entry 2 is 7, must be below 5");

        let err = CarveError::SeamDisconnected { index: 3 };
        assert_eq!(err.to_string(), "seam jumps more than one pixel at entry 3");

        let err = CarveError::Degenerate { axis: Axis::Height, size: 3, requested: 3 };
        assert_eq!(err.to_string(), "cannot take 3 from a height of 3");
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Colors, and what we do with a pair of them
//!
//! The carver only ever looks at pixels two at a time: the energy
//! function wants the squared distance between a pixel's neighbours,
//! and seam insertion wants the blend of the two pixels the new one
//! lands between.

use image::Rgba;
use std::iter::zip;

/// An 8-bit-per-channel RGBA sample.  Wider source formats are
/// scaled down to this range when the grid is built.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color([r, g, b, a])
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color([r, g, b, 255])
    }

    pub fn red(&self) -> u8 {
        self.0[0]
    }

    pub fn green(&self) -> u8 {
        self.0[1]
    }

    pub fn blue(&self) -> u8 {
        self.0[2]
    }

    pub fn alpha(&self) -> u8 {
        self.0[3]
    }

    fn rgb_channels(&self) -> &[u8] {
        &self.0[..3]
    }
}

impl From<Rgba<u8>> for Color {
    fn from(p: Rgba<u8>) -> Self {
        Color(p.0)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba(c.0)
    }
}

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up:
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²
//
// Alpha never contributes.
#[inline]
pub fn delta_square(p1: &Color, p2: &Color) -> u32 {
    zip(p1.rgb_channels(), p2.rgb_channels())
        .map(|(&c1, &c2)| {
            let d = i32::from(c1) - i32::from(c2);
            (d * d) as u32
        })
        .sum()
}

/// The channel-wise mean of two pixels, alpha included.  The mean
/// truncates: (1 + 2) / 2 is 1.
#[inline]
pub fn blend(p1: &Color, p2: &Color) -> Color {
    let mut out = [0u8; 4];
    for (o, (&c1, &c2)) in out.iter_mut().zip(zip(&p1.0, &p2.0)) {
        *o = ((u16::from(c1) + u16::from(c2)) / 2) as u8;
    }
    Color(out)
}

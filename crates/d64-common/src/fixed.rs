// fixed.rs — 16.16 fixed-point values and binary angles

/*
Copyright (C) 1993-1997 Id Software, Inc.
Copyright (C) 2007-2012 Samuel Villarreal

This program is free software; you can redistribute it and/or
modify it under the terms of the GNU General Public License
as published by the Free Software Foundation; either version 2
of the License, or (at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.

See the GNU General Public License for more details.
*/

use std::sync::OnceLock;

/// 16.16 fixed-point value.
pub type Fixed = i32;
/// Binary angle: the full circle maps onto the u32 ring.
pub type Angle = u32;

pub const FRACBITS: i32 = 16;
pub const FRACUNIT: Fixed = 1 << FRACBITS;

pub const MAXINT: i32 = i32::MAX;
pub const MININT: i32 = i32::MIN;

pub const ANG45: Angle = 0x2000_0000;
pub const ANG90: Angle = 0x4000_0000;
pub const ANG180: Angle = 0x8000_0000;
pub const ANG270: Angle = 0xC000_0000;
pub const ANG1: Angle = ANG45 / 45;

pub const FINEANGLES: usize = 8192;
pub const FINEMASK: usize = FINEANGLES - 1;
pub const ANGLETOFINESHIFT: u32 = 19;

// ============================================================
// Arithmetic
// ============================================================

#[inline]
pub fn fixed_mul(a: Fixed, b: Fixed) -> Fixed {
    ((a as i64 * b as i64) >> FRACBITS) as Fixed
}

/// Saturates instead of overflowing when the quotient does not fit.
pub fn fixed_div(a: Fixed, b: Fixed) -> Fixed {
    if (a.unsigned_abs() >> 14) >= b.unsigned_abs() {
        return if (a ^ b) < 0 { MININT } else { MAXINT };
    }
    (((a as i64) << FRACBITS) / b as i64) as Fixed
}

#[inline]
pub const fn int_to_fixed(i: i32) -> Fixed {
    i << FRACBITS
}

/// Octagonal distance estimate used by every range check.
pub fn aprox_distance(dx: Fixed, dy: Fixed) -> Fixed {
    let dx = dx.wrapping_abs();
    let dy = dy.wrapping_abs();
    if dx < dy {
        dx.wrapping_add(dy).wrapping_sub(dx >> 1)
    } else {
        dx.wrapping_add(dy).wrapping_sub(dy >> 1)
    }
}

// ============================================================
// Trigonometry tables
// ============================================================

fn sine_table() -> &'static [Fixed] {
    static TABLE: OnceLock<Vec<Fixed>> = OnceLock::new();
    TABLE.get_or_init(|| {
        // five quarter turns so the cosine view can start at FINEANGLES/4
        (0..FINEANGLES * 5 / 4)
            .map(|i| {
                let a = (i as f64 + 0.5) * std::f64::consts::TAU / FINEANGLES as f64;
                (a.sin() * FRACUNIT as f64) as Fixed
            })
            .collect()
    })
}

#[inline]
pub fn finesine(fine: usize) -> Fixed {
    sine_table()[fine & FINEMASK]
}

#[inline]
pub fn finecosine(fine: usize) -> Fixed {
    sine_table()[(fine & FINEMASK) + FINEANGLES / 4]
}

#[inline]
pub fn angle_to_fine(angle: Angle) -> usize {
    (angle >> ANGLETOFINESHIFT) as usize
}

/// Cosine of a binary angle.
#[inline]
pub fn cos_angle(angle: Angle) -> Fixed {
    finecosine(angle_to_fine(angle))
}

/// Sine of a binary angle.
#[inline]
pub fn sin_angle(angle: Angle) -> Fixed {
    finesine(angle_to_fine(angle))
}

pub const SLOPERANGE: u32 = 2048;

/// arctan(i / SLOPERANGE) as a binary angle, for i in 0..=SLOPERANGE.
fn tantoangle_table() -> &'static [Angle] {
    static TABLE: OnceLock<Vec<Angle>> = OnceLock::new();
    TABLE.get_or_init(|| {
        (0..=SLOPERANGE)
            .map(|i| {
                let turn = arctan_unit(i as f64 / SLOPERANGE as f64) / std::f64::consts::TAU;
                (turn * 4_294_967_296.0).round() as Angle
            })
            .collect()
    })
}

/// arctan on [0, 1] by Euler's series. Only basic arithmetic is used, so
/// every platform builds the same table.
fn arctan_unit(t: f64) -> f64 {
    let q = t * t / (1.0 + t * t);
    let mut term = t / (1.0 + t * t);
    let mut sum = term;
    for n in 1..64 {
        term *= q * (2 * n) as f64 / (2 * n + 1) as f64;
        sum += term;
    }
    sum
}

#[inline]
fn tantoangle(slope: u32) -> Angle {
    tantoangle_table()[slope as usize]
}

fn slope_div(num: u32, den: u32) -> u32 {
    if den < 512 {
        return SLOPERANGE;
    }
    let ans = (num << 3) / (den >> 8);
    ans.min(SLOPERANGE)
}

/// Angle of the vector from (x1,y1) to (x2,y2), by octant and slope table.
pub fn point_to_angle2(x1: Fixed, y1: Fixed, x2: Fixed, y2: Fixed) -> Angle {
    let x = x2.wrapping_sub(x1);
    let y = y2.wrapping_sub(y1);
    if x == 0 && y == 0 {
        return 0;
    }

    let (ax, ay) = (x.unsigned_abs(), y.unsigned_abs());
    match (x >= 0, y >= 0) {
        (true, true) if ax > ay => tantoangle(slope_div(ay, ax)),
        (true, true) => (ANG90 - 1).wrapping_sub(tantoangle(slope_div(ax, ay))),
        (true, false) if ax > ay => tantoangle(slope_div(ay, ax)).wrapping_neg(),
        (true, false) => ANG270.wrapping_add(tantoangle(slope_div(ax, ay))),
        (false, true) if ax > ay => (ANG180 - 1).wrapping_sub(tantoangle(slope_div(ay, ax))),
        (false, true) => ANG90.wrapping_add(tantoangle(slope_div(ax, ay))),
        (false, false) if ax > ay => ANG180.wrapping_add(tantoangle(slope_div(ay, ax))),
        (false, false) => (ANG270 - 1).wrapping_sub(tantoangle(slope_div(ax, ay))),
    }
}

// ============================================================
// Tests
// ============================================================

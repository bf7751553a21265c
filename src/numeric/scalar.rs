// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::fmt::Debug;
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::Float;

/// Floating-point scalar every geometric routine in the crate is generic over.
///
/// The kernel is tolerance based: predicates compare against [`Scalar::tolerance`]
/// (or a caller supplied epsilon) instead of evaluating exactly.
pub trait Scalar:
    Float
    + Default
    + Debug
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + Send
    + Sync
    + 'static
{
    /// Default threshold below which areas, weights and squared lengths count as zero.
    fn tolerance() -> Self;

    /// Lossy conversion from an `f64` literal.
    fn of(v: f64) -> Self;

    fn two() -> Self {
        Self::one() + Self::one()
    }

    fn three() -> Self {
        Self::two() + Self::one()
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn tolerance() -> Self {
        1e-8
    }

    #[inline(always)]
    fn of(v: f64) -> Self {
        v
    }
}

impl Scalar for f32 {
    /// Above the rounding noise of the quartic circumcenter weights for unit-scale input.
    #[inline(always)]
    fn tolerance() -> Self {
        f32::EPSILON * 64.0
    }

    #[inline(always)]
    fn of(v: f64) -> Self {
        v as f32
    }
}

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

//! Tolerances and iteration caps shared by the construction passes.

use crate::numeric::scalar::Scalar;

/// Numeric thresholds. All default to values derived from [`Scalar::tolerance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances<T> {
    /// Threshold for near-zero areas, weights and squared lengths.
    pub epsilon: T,
    /// A hull edge is visible from a point only when the cross product exceeds this.
    pub visibility: T,
    /// Maximum length of the guard offsets used while walking the boundary during
    /// convex decomposition.
    pub guard_length: T,
}

impl<T: Scalar> Default for Tolerances<T> {
    fn default() -> Self {
        Self {
            epsilon: T::tolerance(),
            visibility: T::of(1e-6),
            guard_length: T::one(),
        }
    }
}

impl<T: Scalar> Tolerances<T> {
    /// Same defaults with a different epsilon.
    #[must_use]
    pub fn with_epsilon(epsilon: T) -> Self {
        Self {
            epsilon,
            ..Default::default()
        }
    }

    /// Guard offsets scaled for inputs measured in other units.
    #[must_use]
    pub fn with_guard_length(mut self, guard_length: T) -> Self {
        self.guard_length = guard_length;
        self
    }
}

/// Options for incremental planar triangulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationOpts<T> {
    pub tolerances: Tolerances<T>,
    /// Maximum number of points taken from the cloud after seeding; `None` is unbounded.
    pub max_insertions: Option<usize>,
}

impl<T: Scalar> Default for TriangulationOpts<T> {
    fn default() -> Self {
        Self {
            tolerances: Tolerances::default(),
            max_insertions: None,
        }
    }
}

impl<T: Scalar> TriangulationOpts<T> {
    #[must_use]
    pub fn with_max_insertions(count: usize) -> Self {
        Self {
            max_insertions: Some(count),
            ..Default::default()
        }
    }
}

/// Options for the edge-flip passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegalizeOpts<T> {
    /// A neighbour vertex must be closer than `radius^2 - epsilon` to trigger a flip.
    pub epsilon: T,
    /// Maximum number of sweeps; `None` means one per triangle.
    pub max_iterations: Option<usize>,
}

impl<T: Scalar> Default for LegalizeOpts<T> {
    fn default() -> Self {
        Self {
            epsilon: T::tolerance(),
            max_iterations: None,
        }
    }
}

impl<T: Scalar> LegalizeOpts<T> {
    #[must_use]
    pub fn with_max_iterations(count: usize) -> Self {
        Self {
            max_iterations: Some(count),
            ..Default::default()
        }
    }
}

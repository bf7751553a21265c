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

//! Error types for topology edits and boundary decomposition.
//!
//! Degenerate geometry (collinear triples, duplicate points) never shows up here: it is
//! recovered where it is detected and reported through `tracing` instead.

use thiserror::Error;

/// Result type for operations that rewire adjacency.
pub type TopologyResult<T> = Result<T, TopologyError>;

/// Result type for convex decomposition.
pub type DecompositionResult<T> = Result<T, DecompositionError>;

/// Result type for slab fill generation.
pub type FillResult<T> = Result<T, FillError>;

/// The adjacency graph no longer describes a consistent triangulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// A neighbour slot points at a triangle that does not share an edge with its owner.
    #[error("triangle {triangle} links to {neighbour}, which does not share exactly one edge with it")]
    MissingOpposite {
        /// Triangle owning the slot.
        triangle: usize,
        /// Triangle referenced by the slot.
        neighbour: usize,
    },

    /// `triangle` links to `neighbour` but not the other way round.
    #[error("triangle {triangle} links to {neighbour}, but the link is not mirrored")]
    AsymmetricLink {
        /// Triangle owning the slot.
        triangle: usize,
        /// Triangle that fails to link back.
        neighbour: usize,
    },

    /// A link sits in a slot other than the one opposite the unshared vertex.
    #[error("triangle {triangle} stores neighbour {neighbour} in slot {slot}, expected slot {expected}")]
    MisplacedLink {
        /// Triangle owning the slot.
        triangle: usize,
        /// Triangle referenced by the slot.
        neighbour: usize,
        /// Slot the link was found in.
        slot: usize,
        /// Slot opposite the vertex `triangle` does not share with `neighbour`.
        expected: usize,
    },

    /// A vertex or neighbour index is out of range.
    #[error("triangle {triangle} references {index}, but only {len} entries exist")]
    InvalidIndex {
        /// Triangle holding the reference.
        triangle: usize,
        /// The offending index.
        index: usize,
        /// Length of the referenced array.
        len: usize,
    },
}

/// Convex decomposition could not cover the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompositionError {
    /// Not enough points to form a triangle.
    #[error("boundary needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    /// Decomposition only works on closed loops.
    #[error("boundary loop is not closed")]
    OpenBoundary,

    /// Per-point attribute arrays do not match the point count.
    #[error("boundary has {points} points but {attribute} has {len} entries")]
    AttributeCount {
        /// Name of the attribute array.
        attribute: &'static str,
        /// Number of boundary points.
        points: usize,
        /// Number of attribute entries.
        len: usize,
    },

    /// No probe between `anchor` and `to` produced a valid ear around `core`.
    /// Self-intersecting or degenerate boundaries are the usual cause.
    #[error("no valid ear around core {core} from anchor {anchor} up to {to}")]
    Infeasible {
        /// Fan center of the failing call.
        core: usize,
        /// Last accepted boundary index.
        anchor: usize,
        /// End of the chain the call was asked to cover.
        to: usize,
    },
}

/// Fill generation failed in one of its stages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    #[error("decomposition failed: {0}")]
    Decomposition(#[from] DecompositionError),

    #[error("legalization failed: {0}")]
    Topology(#[from] TopologyError),
}

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

use crate::{
    geometry::{
        point::Point3,
        vector::{Cross3, Vector3, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// Does segment `s -> t` cross the slate over edge `a -> b`?
///
/// The slate is the strip of the plane that contains `a -> b` and `normal`, bounded to the
/// extent of the edge. The crossing ratio along `s -> t` must lie in `[0, 1]` and the crossing
/// point must project into `[0, |b - a|]` along the edge.
pub fn segment_intersects_slate<T: Scalar>(
    normal: &Vector3<T>,
    a: &Point3<T>,
    b: &Point3<T>,
    s: &Point3<T>,
    t: &Point3<T>,
    eps: T,
) -> bool {
    let ab = *b - *a;
    let plane = ab.cross(normal).safe_normal();

    let as_project = (*a - *s).dot(&plane);
    let ts_project = (*t - *s).dot(&plane);
    if ts_project * ts_project <= eps {
        return false;
    }

    let ratio = as_project / ts_project;
    if ratio < T::zero() || ratio > T::one() {
        return false;
    }

    let distance = ab.norm();
    if distance <= T::zero() {
        return false;
    }
    let direction = ab / distance;
    let point = *s + (*t - *s) * ratio;

    let project = (point - *a).dot(&direction);
    T::zero() <= project && project <= distance
}

/// Segment-vs-triangle test made of the three edge slate tests.
pub fn triangle_intersects_segment<T: Scalar>(
    a: &Point3<T>,
    b: &Point3<T>,
    c: &Point3<T>,
    from: &Point3<T>,
    to: &Point3<T>,
    eps: T,
) -> bool {
    let normal = (*b - *a).cross(&(*c - *a));

    segment_intersects_slate(&normal, a, b, from, to, eps)
        || segment_intersects_slate(&normal, a, c, from, to, eps)
        || segment_intersects_slate(&normal, b, c, from, to, eps)
}

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
        point::{Point, Point2, PointOps},
        vector::Cross2,
    },
    numeric::scalar::Scalar,
};

/// Circle (or sphere slice in 3D) through a triangle's corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle<T: Scalar, const N: usize> {
    pub center: Point<T, N>,
    /// Squared radius; zero when the triangle is degenerate.
    pub radius_sq: T,
}

impl<T: Scalar, const N: usize> Circle<T, N> {
    /// Strictly inside, shrunk by `eps`.
    #[inline(always)]
    pub fn contains(&self, p: &Point<T, N>, eps: T) -> bool {
        self.center.distance_squared_to(p) < self.radius_sq - eps
    }
}

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
#[inline(always)]
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    (*b - *a).cross(&(*c - *a))
}

#[inline(always)]
pub fn centroid<T: Scalar, const N: usize>(
    a: &Point<T, N>,
    b: &Point<T, N>,
    c: &Point<T, N>,
) -> Point<T, N> {
    let sum = a.as_vector() + b.as_vector() + c.as_vector();
    Point::origin().add_vector(&(sum / T::three()))
}

/// Circumcenter from barycentric weights `aa * (bb + cc - aa)` etc., where `aa`, `bb`, `cc`
/// are the squared lengths of the edges opposite `a`, `b`, `c`.
///
/// Returns `(centroid, false)` when the weight sum falls below `eps` (near-collinear input).
pub fn circumcenter<T: Scalar, const N: usize>(
    a: &Point<T, N>,
    b: &Point<T, N>,
    c: &Point<T, N>,
    eps: T,
) -> (Point<T, N>, bool) {
    let aa = b.distance_squared_to(c);
    let bb = c.distance_squared_to(a);
    let cc = a.distance_squared_to(b);

    let wa = aa * (bb + cc - aa);
    let wb = bb * (cc + aa - bb);
    let wc = cc * (aa + bb - cc);
    let w = wa + wb + wc;

    if w.abs() < eps {
        return (centroid(a, b, c), false);
    }

    let weighted = a.as_vector() * wa + b.as_vector() * wb + c.as_vector() * wc;
    (Point::origin().add_vector(&(weighted / w)), true)
}

pub fn circumcircle<T: Scalar, const N: usize>(
    a: &Point<T, N>,
    b: &Point<T, N>,
    c: &Point<T, N>,
    eps: T,
) -> Circle<T, N> {
    match circumcenter(a, b, c, eps) {
        (center, true) => Circle {
            center,
            radius_sq: center.distance_squared_to(a),
        },
        (center, false) => Circle {
            center,
            radius_sq: T::zero(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{point::Point3, spatial_element::SpatialElement, vector::Vector2};

    #[test]
    fn ccw_test() {
        let a = Point2::<f64>::from_vals([0.0, 0.0]);
        let b = Point2::from_vals([1.0, 0.0]);
        let c = Point2::from_vals([0.0, 1.0]);

        assert!(orient2d(&a, &b, &c) > 0.0);
        assert!(orient2d(&a, &c, &b) < 0.0);
    }

    #[test]
    fn right_triangle_center_is_hypotenuse_midpoint() {
        let a = Point2::<f64>::from_vals([0.0, 0.0]);
        let b = Point2::from_vals([2.0, 0.0]);
        let c = Point2::from_vals([0.0, 2.0]);

        let (center, valid) = circumcenter(&a, &b, &c, 1e-8);
        assert!(valid);
        assert!((center[0] - 1.0).abs() < 1e-12);
        assert!((center[1] - 1.0).abs() < 1e-12);

        let circle = circumcircle(&a, &b, &c, 1e-8);
        assert!((circle.radius_sq - 2.0).abs() < 1e-12);
    }

    #[test]
    fn collinear_triple_falls_back_to_centroid() {
        let a = Point2::<f64>::from_vals([3.0, -1.0]);
        let b = Point2::from_vals([4.0, -1.0]);
        let c = Point2::from_vals([5.0, -1.0]);

        let (center, valid) = circumcenter(&a, &b, &c, 1e-8);
        assert!(!valid);
        assert_eq!(center, Point2::from_vals([4.0, -1.0]));
        assert_eq!(circumcircle(&a, &b, &c, 1e-8).radius_sq, 0.0);
    }

    #[test]
    fn single_precision_flags_near_collinear_triples() {
        let eps = f32::tolerance();
        for k in 0..64 {
            let angle = k as f32 * 0.61;
            let dir = Vector2::from_vals([angle.cos(), angle.sin()]);
            let a = Point2::<f32>::from_vals([
                (k as f32 * 0.37).sin() * 0.9,
                (k as f32 * 1.7).cos() * 0.9,
            ]);
            let b = a + dir * 0.45;
            let c = a + dir * 1.1;

            let (_, valid) = circumcenter(&a, &b, &c, eps);
            assert!(!valid, "triple {k} passed as a proper triangle");
            assert_eq!(circumcircle(&a, &b, &c, eps).radius_sq, 0.0);
        }

        let a = Point2::<f32>::from_vals([0.0, 0.0]);
        let b = Point2::from_vals([1.0, 0.0]);
        let c = Point2::from_vals([0.0, 1.0]);
        let (center, valid) = circumcenter(&a, &b, &c, eps);
        assert!(valid);
        assert!((center[0] - 0.5).abs() < 1e-6);
        assert!((center[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn works_in_three_dimensions() {
        let a = Point3::<f64>::from_vals([0.0, 0.0, 5.0]);
        let b = Point3::from_vals([2.0, 0.0, 5.0]);
        let c = Point3::from_vals([0.0, 2.0, 5.0]);

        let circle = circumcircle(&a, &b, &c, 1e-8);
        assert!(circle.center.distance_squared_to(&Point3::from_vals([1.0, 1.0, 5.0])) < 1e-20);
        assert!(circle.contains(&Point3::from_vals([1.0, 1.0, 5.0]), 1e-8));
        assert!(!circle.contains(&Point3::from_vals([3.0, 3.0, 5.0]), 1e-8));
    }
}

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

use std::{
    array::from_fn,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub},
};

use crate::{
    geometry::{point::Point, spatial_element::SpatialElement},
    numeric::scalar::Scalar,
};

/// Displacement between two points, stored as the point it would move the origin to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize>(pub Point<T, N>);

pub trait VectorOps<T: Scalar, const N: usize>: Sized {
    fn dot(&self, other: &Self) -> T;
    fn norm_squared(&self) -> T;
    fn scale(&self, s: T) -> Self;

    fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Unit vector, or zero when the squared length is below `T::tolerance()`.
    fn safe_normal(&self) -> Self;

    /// Same direction, length limited to `max`.
    fn clamped_to_max_norm(&self, max: T) -> Self {
        let len_sq = self.norm_squared();
        if len_sq > max * max && len_sq > T::zero() {
            self.scale(max / len_sq.sqrt())
        } else {
            self.scale(T::one())
        }
    }
}

pub trait Cross2<T: Scalar> {
    /// z component of the 3D cross product.
    fn cross(&self, other: &Self) -> T;
}

pub trait Cross3<T: Scalar> {
    fn cross(&self, other: &Self) -> Self;
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn zero() -> Self {
        Vector(Point::origin())
    }

    pub fn is_zero(&self) -> bool {
        self.0.coords.iter().all(|c| c.is_zero())
    }
}

impl<T: Scalar, const N: usize> SpatialElement<T, N> for Vector<T, N> {
    fn new(coords: [T; N]) -> Self {
        Vector(Point { coords })
    }

    fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Vector(Point::from_vals(vals))
    }
}

impl<T: Scalar, const N: usize> VectorOps<T, N> for Vector<T, N> {
    fn dot(&self, other: &Self) -> T {
        (0..N).map(|i| self[i] * other[i]).sum()
    }

    fn norm_squared(&self) -> T {
        self.dot(self)
    }

    fn scale(&self, s: T) -> Self {
        Vector(Point {
            coords: from_fn(|i| self[i] * s),
        })
    }

    fn safe_normal(&self) -> Self {
        let len_sq = self.norm_squared();
        if len_sq < T::tolerance() {
            return Self::zero();
        }
        self.scale(T::one() / len_sq.sqrt())
    }
}

impl<T: Scalar> Cross2<T> for Vector<T, 2> {
    #[inline(always)]
    fn cross(&self, other: &Self) -> T {
        self[0] * other[1] - self[1] * other[0]
    }
}

impl<T: Scalar> Cross3<T> for Vector<T, 3> {
    #[inline(always)]
    fn cross(&self, other: &Self) -> Self {
        Vector(Point {
            coords: [
                self[1] * other[2] - self[2] * other[1],
                self[2] * other[0] - self[0] * other[2],
                self[0] * other[1] - self[1] * other[0],
            ],
        })
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0.coords[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Vector<T, N>;
    fn add(self, rhs: Self) -> Self::Output {
        Vector(Point {
            coords: from_fn(|i| self[i] + rhs[i]),
        })
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self[i] += rhs[i];
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector(Point {
            coords: from_fn(|i| self[i] - rhs[i]),
        })
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;
    fn neg(self) -> Self::Output {
        self.scale(-T::one())
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T, N>;
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Vector<T, N>;
    fn div(self, rhs: T) -> Self::Output {
        Vector(Point {
            coords: from_fn(|i| self[i] / rhs),
        })
    }
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

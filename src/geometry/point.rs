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
    ops::{Add, Index, Sub},
};

use crate::{
    geometry::{spatial_element::SpatialElement, vector::Vector},
    numeric::scalar::Scalar,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub trait PointOps<T: Scalar, const N: usize>: Sized {
    fn as_vector(&self) -> Vector<T, N>;
    fn add_vector(&self, v: &Vector<T, N>) -> Self;
    fn distance_squared_to(&self, other: &Self) -> T;

    fn distance_to(&self, other: &Self) -> T {
        self.distance_squared_to(other).sqrt()
    }
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn origin() -> Self {
        Point {
            coords: [T::zero(); N],
        }
    }

    /// Arithmetic mean of `points`, or the origin for an empty slice.
    pub fn mean<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<T, N>>,
    {
        let mut sum = Vector::<T, N>::zero();
        let mut count = T::zero();
        for p in points {
            sum += p.as_vector();
            count += T::one();
        }
        if count.is_zero() {
            return Self::origin();
        }
        Self::origin().add_vector(&(sum / count))
    }
}

impl<T: Scalar, const N: usize> SpatialElement<T, N> for Point<T, N> {
    fn new(coords: [T; N]) -> Self {
        Point { coords }
    }

    fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Point {
            coords: vals.map(|v| v.into()),
        }
    }
}

impl<T: Scalar, const N: usize> PointOps<T, N> for Point<T, N> {
    fn as_vector(&self) -> Vector<T, N> {
        Vector(*self)
    }

    fn add_vector(&self, v: &Vector<T, N>) -> Self {
        Point {
            coords: from_fn(|i| self.coords[i] + v[i]),
        }
    }

    fn distance_squared_to(&self, other: &Self) -> T {
        (0..N)
            .map(|i| {
                let d = self.coords[i] - other.coords[i];
                d * d
            })
            .sum()
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

/// Difference of two positions is a displacement.
impl<T: Scalar, const N: usize> Sub for Point<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: Point<T, N>) -> Self::Output {
        Vector(Point {
            coords: from_fn(|i| self.coords[i] - rhs.coords[i]),
        })
    }
}

impl<T: Scalar, const N: usize> Add<Vector<T, N>> for Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        self.add_vector(&rhs)
    }
}

impl<T: Scalar, const N: usize> Sub<Vector<T, N>> for Point<T, N> {
    type Output = Point<T, N>;
    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        Point {
            coords: from_fn(|i| self.coords[i] - rhs[i]),
        }
    }
}

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;

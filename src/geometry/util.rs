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

use crate::{geometry::vector::Vector2, numeric::scalar::Scalar};

/// Length of the ray through the `[-1, 1]^2` box along the unit direction `v`.
///
/// Axis-aligned input short-circuits to the magnitude of the remaining component.
pub fn project_to_box<T: Scalar>(v: &Vector2<T>) -> T {
    let xx = v[0] * v[0];
    let yy = v[1] * v[1];
    if xx < T::tolerance() {
        return yy.sqrt();
    }
    if yy < T::tolerance() {
        return xx.sqrt();
    }

    ((xx / yy) + T::one())
        .sqrt()
        .min(((yy / xx) + T::one()).sqrt())
}

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

use crate::mesh::basic_types::GenTriangle;

impl GenTriangle {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self {
            verts: [a, b, c],
            adjs: [None; 3],
            enabled: true,
        }
    }

    #[inline(always)]
    pub fn has_vertex(&self, v: usize) -> bool {
        self.verts.contains(&v)
    }

    /// Endpoints of the edge opposite `slot`.
    #[inline(always)]
    pub fn edge(&self, slot: usize) -> (usize, usize) {
        (self.verts[(slot + 1) % 3], self.verts[(slot + 2) % 3])
    }

    #[inline(always)]
    pub fn shared_vertex_count(&self, other: &GenTriangle) -> usize {
        self.verts.iter().filter(|&&v| other.has_vertex(v)).count()
    }

    /// Both triangles share exactly one edge.
    #[inline(always)]
    pub fn is_connected(&self, other: &GenTriangle) -> bool {
        self.shared_vertex_count(other) == 2
    }

    /// Slot of the vertex of `self` that `other` does not have.
    ///
    /// `None` unless the two triangles share exactly two vertices.
    pub fn opposite_of(&self, other: &GenTriangle) -> Option<usize> {
        if !self.is_connected(other) {
            return None;
        }
        (0..3).find(|&i| !other.has_vertex(self.verts[i]))
    }

    /// Rewrites the first slot pointing at `from`. Returns whether one was found.
    pub fn replace_adj(&mut self, from: usize, to: usize) -> bool {
        let Some(slot) = self.adjs.iter_mut().find(|a| **a == Some(from)) else {
            return false;
        };
        *slot = Some(to);
        true
    }

    #[inline(always)]
    pub fn clear_adjs(&mut self) {
        self.adjs = [None; 3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_slot_names_the_unshared_vertex() {
        let a = GenTriangle::new(0, 1, 2);
        let b = GenTriangle::new(2, 1, 3);

        assert!(a.is_connected(&b));
        assert_eq!(a.opposite_of(&b), Some(0));
        assert_eq!(b.opposite_of(&a), Some(2));
        assert_eq!(a.edge(0), (1, 2));
    }

    #[test]
    fn vertex_contact_is_not_a_connection() {
        let a = GenTriangle::new(0, 1, 2);
        let b = GenTriangle::new(2, 3, 4);
        assert!(!a.is_connected(&b));
        assert_eq!(a.opposite_of(&b), None);
        assert_eq!(a.opposite_of(&a), None);
    }

    #[test]
    fn replace_adj_rewrites_first_match_only() {
        let mut t = GenTriangle::new(0, 1, 2);
        t.adjs = [Some(4), None, Some(4)];
        assert!(t.replace_adj(4, 9));
        assert_eq!(t.adjs, [Some(9), None, Some(4)]);
        assert!(!t.replace_adj(7, 1));
    }
}

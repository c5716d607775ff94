// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simplices as strictly increasing vertex lists, and the combination
//! generator used to enumerate candidate simplices.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::HomologyError;

/// An abstract simplex, identified by the indices of its vertices into the
/// point collection.
///
/// The vertex list is kept strictly increasing, so two simplices are equal
/// exactly when their vertex lists are equal and the derived `Ord` is the
/// lexicographic order on vertex lists. A simplex with `n + 1` vertices has
/// dimension `n`.
///
/// # Examples
///
/// ```rust
/// use ripshom::Simplex;
///
/// let triangle = Simplex::try_from(vec![0, 2, 5]).unwrap();
/// assert_eq!(triangle.dimension(), 2);
/// assert_eq!(triangle.face(1), Simplex::try_from(vec![0, 5]).unwrap());
/// assert!(Simplex::try_from(vec![2, 1]).is_err());
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Simplex {
    vertices: Vec<u32>,
}

impl Simplex {
    /// The 0-simplex on a single vertex.
    #[must_use]
    pub fn vertex(vertex: u32) -> Self {
        Self {
            vertices: vec![vertex],
        }
    }

    /// The 1-simplex `[first, second]`. Panics unless `first < second`.
    #[must_use]
    pub fn edge(first: u32, second: u32) -> Self {
        assert!(first < second, "edge vertices must be strictly increasing");
        Self {
            vertices: vec![first, second],
        }
    }

    /// Dimension of the simplex, one less than its vertex count.
    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }

    /// The vertices in increasing order.
    pub fn vertices(&self) -> &[u32] {
        &self.vertices
    }

    /// Smallest vertex.
    pub fn first(&self) -> u32 {
        self.vertices[0]
    }

    /// Largest vertex.
    pub fn last(&self) -> u32 {
        self.vertices[self.vertices.len() - 1]
    }

    /// Whether `vertex` is one of the vertices of `self`.
    pub fn contains_vertex(&self, vertex: u32) -> bool {
        self.vertices.binary_search(&vertex).is_ok()
    }

    /// The facet obtained by deleting the vertex at `position`. Panics if
    /// `self` is a vertex, as the empty simplex is not represented.
    #[must_use]
    pub fn face(&self, position: usize) -> Self {
        assert!(
            self.vertices.len() > 1,
            "a vertex has no faces in a simplicial complex"
        );
        let mut vertices = self.vertices.clone();
        vertices.remove(position);
        Self { vertices }
    }

    /// Iterate over `(position, facet)` pairs, where the facet omits the
    /// vertex at `position`. Yields nothing for a vertex.
    pub fn faces(&self) -> impl Iterator<Item = (usize, Simplex)> + '_ {
        let count = if self.vertices.len() > 1 {
            self.vertices.len()
        } else {
            0
        };
        (0..count).map(move |position| (position, self.face(position)))
    }

    /// The facet dropping the first vertex.
    #[must_use]
    pub fn without_first(&self) -> Self {
        self.face(0)
    }

    /// The facet dropping the last vertex.
    #[must_use]
    pub fn without_last(&self) -> Self {
        self.face(self.vertices.len() - 1)
    }

    /// The edge joining the first and last vertex.
    #[must_use]
    pub fn extremal_edge(&self) -> Self {
        Self::edge(self.first(), self.last())
    }
}

impl TryFrom<Vec<u32>> for Simplex {
    type Error = HomologyError;

    fn try_from(vertices: Vec<u32>) -> Result<Self, Self::Error> {
        if vertices.is_empty() || vertices.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(HomologyError::InvalidSimplex(vertices));
        }
        Ok(Self { vertices })
    }
}

impl From<Simplex> for Vec<u32> {
    fn from(simplex: Simplex) -> Self {
        simplex.vertices
    }
}

impl Display for Simplex {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}", self.vertices)
    }
}

/// Iterator over all strictly increasing `k`-element subsets of
/// `{0, ..., n - 1}`, in lexicographic order.
///
/// The iterator keeps only the current subset and advances it in place, so
/// memory stays at `O(k)` however many subsets are produced. A request for
/// `k = 0` yields the empty subset once; `k > n` yields nothing.
///
/// # Examples
///
/// ```rust
/// use ripshom::Combinations;
///
/// let subsets: Vec<_> = Combinations::new(4, 2).collect();
/// assert_eq!(
///     subsets,
///     vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Combinations {
    n: u32,
    next: Option<Vec<u32>>,
}

impl Combinations {
    /// Create a generator of the `k`-subsets of `{0, ..., n - 1}`.
    #[must_use]
    pub fn new(n: u32, k: usize) -> Self {
        let next = if k as u64 <= u64::from(n) {
            Some((0..k as u32).collect())
        } else {
            None
        };
        Self { n, next }
    }

    /// Advance `subset` to its lexicographic successor, or return `false` if
    /// it is the last subset.
    fn advance(n: u32, subset: &mut [u32]) -> bool {
        let k = subset.len() as u32;
        // Rightmost position that has not reached its maximum value n - k + i.
        let Some(position) = (0..subset.len())
            .rev()
            .find(|&i| subset[i] < n - k + i as u32)
        else {
            return false;
        };
        subset[position] += 1;
        for i in position + 1..subset.len() {
            subset[i] = subset[i - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if Self::advance(self.n, &mut successor) {
            self.next = Some(successor);
        }
        Some(current)
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Proximity complexes over point collections.
//!
//! The key types are:
//! - `SimplicialComplex`: the simplices of each dimension, stored in
//!   lexicographic order so that boundary matrix layouts are reproducible.
//! - `ComplexBuilder`: constructs a `SimplicialComplex` from a
//!   [`DistanceIndex`] and a threshold, one dimension at a time.
//!
//! ## Admission rule
//!
//! Edges join points closer than twice the threshold. For `n >= 2`, an
//! increasing vertex list `[v0, ..., vn]` is admitted as an `n`-simplex when
//! - `[v1, ..., vn]` is a recorded `(n-1)`-simplex,
//! - `[v0, ..., v(n-1)]` is a recorded `(n-1)`-simplex, and
//! - `[v0, vn]` is a recorded edge.
//!
//! Only two of the `n + 1` facets are inspected. Because each level is built
//! by the same rule from the level below, the three conditions force every
//! pair of vertices to be adjacent, so complexes produced by the builder
//! coincide with the clique (flag) complex and are facet-closed; see
//! [`SimplicialComplex::is_facet_closed`].
//!
//! # Examples
//!
//! ```rust
//! use ripshom::{ComplexBuilder, DistanceIndex, PointCloud};
//!
//! let points = PointCloud::from([(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)]);
//! let distances = DistanceIndex::new(&points);
//!
//! let complex = ComplexBuilder::new(&distances, 6.0).unwrap().build(2).unwrap();
//! assert_eq!(complex.count(0), 3);
//! assert_eq!(complex.count(1), 3);
//! assert_eq!(complex.count(2), 1);
//! ```

use std::collections::HashSet;
use std::iter::Flatten;
use std::slice::Iter;

use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    Chain, Combinations, ComplexLike, DistanceIndex, HomologyError, ModuleLike, Result, Simplex,
};

/// A finite simplicial complex on the vertices `0..vertex_count`.
///
/// Simplices are grouped by dimension: `simplices(0)` lists one singleton per
/// vertex, and `simplices(n)` for `1 <= n <= dimension()` lists the recorded
/// `n`-simplices in increasing lexicographic order. Every facet of a recorded
/// simplex is itself recorded; constructors enforce this rather than assume
/// it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SimplicialComplex {
    vertex_count: usize,
    skeleta: Vec<Vec<Simplex>>,
}

impl SimplicialComplex {
    /// The complex made of `vertex_count` isolated vertices.
    #[must_use]
    pub fn vertices(vertex_count: usize) -> Self {
        let vertices = (0..vertex_count as u32).map(Simplex::vertex).collect();
        Self {
            vertex_count,
            skeleta: vec![vertices],
        }
    }

    /// Build a complex from explicit simplex lists, where `skeleta[i]` holds
    /// the `(i + 1)`-simplices. Lists are sorted and deduplicated.
    ///
    /// Returns [`HomologyError::InconsistentComplexState`] if a simplex has
    /// the wrong dimension, references a vertex outside `0..vertex_count`, or
    /// has a facet that is not recorded.
    pub fn from_skeleta(vertex_count: usize, skeleta: Vec<Vec<Simplex>>) -> Result<Self> {
        let mut complex = Self::vertices(vertex_count);
        for (offset, mut simplices) in skeleta.into_iter().enumerate() {
            let dimension = offset + 1;
            simplices.sort();
            simplices.dedup();
            for simplex in &simplices {
                if simplex.dimension() != dimension {
                    return Err(HomologyError::InconsistentComplexState(format!(
                        "simplex {simplex} listed with the {dimension}-simplices"
                    )));
                }
                if simplex.last() as usize >= vertex_count {
                    return Err(HomologyError::InconsistentComplexState(format!(
                        "simplex {simplex} references a vertex outside 0..{vertex_count}"
                    )));
                }
                if let Some((_, facet)) = simplex.faces().find(|(_, facet)| !complex.contains(facet))
                {
                    return Err(HomologyError::InconsistentComplexState(format!(
                        "facet {facet} of {simplex} is not in the complex"
                    )));
                }
            }
            complex.skeleta.push(simplices);
        }
        Ok(complex)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The highest dimension constructed.
    pub fn dimension(&self) -> usize {
        self.skeleta.len() - 1
    }

    /// The recorded simplices of dimension `n`, or `None` if that dimension
    /// has not been constructed.
    pub fn skeleton(&self, n: usize) -> Option<&[Simplex]> {
        self.skeleta.get(n).map(Vec::as_slice)
    }

    /// The recorded simplices of dimension `n`; empty if that dimension has
    /// not been constructed.
    pub fn simplices(&self, n: usize) -> &[Simplex] {
        self.skeleton(n).unwrap_or_default()
    }

    /// Number of recorded `n`-simplices.
    pub fn count(&self, n: usize) -> usize {
        self.simplices(n).len()
    }

    /// Iterate over `(dimension, simplices)` for every constructed dimension.
    pub fn skeleta(&self) -> impl Iterator<Item = (usize, &[Simplex])> {
        self.skeleta
            .iter()
            .enumerate()
            .map(|(n, simplices)| (n, simplices.as_slice()))
    }

    /// Whether `simplex` is recorded.
    pub fn contains(&self, simplex: &Simplex) -> bool {
        self.simplices(simplex.dimension())
            .binary_search(simplex)
            .is_ok()
    }

    /// Check the full closure property: every facet of every recorded simplex
    /// is recorded.
    pub fn is_facet_closed(&self) -> bool {
        self.skeleta.iter().skip(1).flatten().all(|simplex| {
            simplex
                .faces()
                .all(|(_, facet)| self.contains(&facet))
        })
    }

    /// Alternating sum of the simplex counts.
    pub fn euler_characteristic(&self) -> i64 {
        self.skeleta
            .iter()
            .enumerate()
            .map(|(n, simplices)| {
                let count = simplices.len() as i64;
                if n % 2 == 0 { count } else { -count }
            })
            .sum()
    }

    fn push_skeleton(&mut self, simplices: Vec<Simplex>) {
        self.skeleta.push(simplices);
    }
}

impl ComplexLike for SimplicialComplex {
    type Cell = Simplex;
    type CellIter<'a> = Flatten<Iter<'a, Vec<Simplex>>>;
    type Module = Chain<i64>;

    /// The boundary uses the same signs as the boundary matrices: an edge
    /// `[p, q]` maps to `p - q`, and for higher simplices the facet omitting
    /// position `f` has coefficient `(-1)^f`.
    fn cell_boundary(&self, cell: &Simplex) -> Chain<i64> {
        let mut chain = Chain::new();
        if cell.dimension() == 1 {
            chain.insert_or_add(Simplex::vertex(cell.first()), 1);
            chain.insert_or_add(Simplex::vertex(cell.last()), -1);
        } else {
            for (position, facet) in cell.faces() {
                chain.insert_or_add(facet, alternating_sign(position));
            }
        }
        chain
    }

    fn cell_iter(&self) -> Self::CellIter<'_> {
        self.skeleta.iter().flatten()
    }

    fn dimension(&self) -> usize {
        SimplicialComplex::dimension(self)
    }

    fn cell_dimension(&self, cell: &Simplex) -> usize {
        cell.dimension()
    }
}

/// `(-1)^position`.
pub(crate) fn alternating_sign(position: usize) -> i64 {
    if position % 2 == 0 { 1 } else { -1 }
}

/// Builds proximity complexes from a [`DistanceIndex`] at a fixed threshold.
///
/// Each call recomputes from the distance index alone; no state is carried
/// between builds.
#[derive(Clone, Copy, Debug)]
pub struct ComplexBuilder<'a> {
    distances: &'a DistanceIndex,
    epsilon: f64,
}

impl<'a> ComplexBuilder<'a> {
    /// Create a builder for threshold `epsilon`, which must be positive and
    /// finite.
    pub fn new(distances: &'a DistanceIndex, epsilon: f64) -> Result<Self> {
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(HomologyError::InvalidThreshold(epsilon));
        }
        Ok(Self { distances, epsilon })
    }

    /// The threshold this builder was created with.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Build the complex with simplices up to `max_dimension`.
    pub fn build(&self, max_dimension: usize) -> Result<SimplicialComplex> {
        let mut complex = SimplicialComplex::vertices(self.distances.len());
        for n in 1..=max_dimension {
            let simplices = self.build_simplices(n, &complex)?;
            complex.push_skeleton(simplices);
        }
        debug!(
            points = complex.vertex_count(),
            epsilon = self.epsilon,
            counts = ?complex.skeleta().map(|(_, s)| s.len()).collect::<Vec<_>>(),
            "built proximity complex"
        );
        Ok(complex)
    }

    /// Compute the `n`-simplices on top of `complex`, which must already hold
    /// the `(n-1)`-simplices. Dimension 0 is rejected: vertices are given by
    /// the point collection, not built.
    pub fn build_simplices(&self, n: usize, complex: &SimplicialComplex) -> Result<Vec<Simplex>> {
        match n {
            0 => Err(HomologyError::InvalidDimension {
                dimension: 0,
                reason: "vertices come from the point collection and are not built".to_string(),
            }),
            1 => Ok(self.build_1_simplices()),
            _ => self.build_n_simplices(n, complex),
        }
    }

    /// Every pair `[i, k]`, `i < k`, of adjacent points, in lexicographic
    /// order.
    pub fn build_1_simplices(&self) -> Vec<Simplex> {
        let count = self.distances.len();
        let mut edges = Vec::new();
        for i in 0..count {
            for k in i + 1..count {
                if self.distances.adjacent(i, k, self.epsilon) {
                    edges.push(Simplex::edge(i as u32, k as u32));
                }
            }
        }
        trace!(edges = edges.len(), "built 1-simplices");
        edges
    }

    /// The `n`-simplices for `n >= 2`, admitted by the three-condition rule
    /// described in the module documentation.
    pub fn build_n_simplices(&self, n: usize, complex: &SimplicialComplex) -> Result<Vec<Simplex>> {
        if n < 2 {
            return Err(HomologyError::InvalidDimension {
                dimension: n,
                reason: "candidate enumeration applies from dimension 2".to_string(),
            });
        }
        let Some(lower) = complex.skeleton(n - 1) else {
            return Err(HomologyError::InvalidDimension {
                dimension: n,
                reason: format!(
                    "the {}-simplices have not been built; complex has dimension {}",
                    n - 1,
                    complex.dimension()
                ),
            });
        };

        let lower: HashSet<&[u32]> = lower.iter().map(Simplex::vertices).collect();
        let edges: HashSet<&[u32]> = complex.simplices(1).iter().map(Simplex::vertices).collect();

        let mut simplices = Vec::new();
        for candidate in Combinations::new(complex.vertex_count() as u32, n + 1) {
            let last = candidate.len() - 1;
            let admitted = lower.contains(&candidate[1..])
                && lower.contains(&candidate[..last])
                && edges.contains([candidate[0], candidate[last]].as_slice());
            if admitted {
                simplices.push(Simplex::try_from(candidate)?);
            }
        }
        trace!(dimension = n, simplices = simplices.len(), "built n-simplices");
        Ok(simplices)
    }
}

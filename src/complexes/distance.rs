// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ndarray::Array2;
use tracing::trace;

use crate::PointCloud;

/// Pairwise Euclidean distances of a point collection.
///
/// Only raw distances are stored; the adjacency predicate is evaluated per
/// query against whatever threshold the caller passes, so a stored index never
/// goes stale when the threshold changes. Two points are adjacent at threshold
/// `ε` when their distance is strictly less than `2ε`, i.e. when the open
/// balls of radius `ε` around them intersect.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceIndex {
    distances: Array2<f64>,
    crossings: Vec<f64>,
}

impl DistanceIndex {
    /// Compute the full symmetric distance matrix of `points`.
    #[must_use]
    pub fn new(points: &PointCloud) -> Self {
        let count = points.len();
        let mut distances = Array2::<f64>::zeros((count, count));
        let mut crossings = Vec::with_capacity(count * count.saturating_sub(1) / 2);

        for i in 0..count {
            for j in i + 1..count {
                let distance = points[i].distance(&points[j]);
                distances[[i, j]] = distance;
                distances[[j, i]] = distance;
                crossings.push(distance);
            }
        }

        crossings.sort_by(f64::total_cmp);
        crossings.dedup();
        trace!(
            points = count,
            distinct_distances = crossings.len(),
            "built distance index"
        );

        Self {
            distances,
            crossings,
        }
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.distances.nrows()
    }

    /// Returns true if no points are indexed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distance between points `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[[i, j]]
    }

    /// The full distance matrix.
    pub fn matrix(&self) -> &Array2<f64> {
        &self.distances
    }

    /// Whether distinct points `i` and `j` are joined by an edge at threshold
    /// `epsilon`. A point is never adjacent to itself.
    pub fn adjacent(&self, i: usize, j: usize, epsilon: f64) -> bool {
        i != j && self.distances[[i, j]] < 2.0 * epsilon
    }

    /// The distinct pairwise distances, sorted increasingly.
    pub fn crossings(&self) -> &[f64] {
        &self.crossings
    }

    /// Whether some pairwise distance `d` has `d / 2` strictly between the
    /// two thresholds. Moving onto or off an exact `d / 2` is not a crossing,
    /// even though it can add or drop an edge; see
    /// [`DistanceIndex::edges_differ`].
    pub fn threshold_crossed(&self, from: f64, to: f64) -> bool {
        let (low, high) = if from <= to { (from, to) } else { (to, from) };
        let first_above = self.crossings.partition_point(|d| d / 2.0 <= low);
        self.crossings
            .get(first_above)
            .is_some_and(|d| d / 2.0 < high)
    }

    /// Whether the edge sets at thresholds `from` and `to` differ.
    pub fn edges_differ(&self, from: f64, to: f64) -> bool {
        let below = |epsilon: f64| self.crossings.partition_point(|d| *d < 2.0 * epsilon);
        below(from) != below(to)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn right_triangle() -> DistanceIndex {
        DistanceIndex::new(&PointCloud::from([(0.0, 0.0), (3.0, 0.0), (0.0, 4.0)]))
    }

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let index = right_triangle();
        assert_eq!(index.len(), 3);
        for i in 0..3 {
            assert_relative_eq!(index.distance(i, i), 0.0);
            for j in 0..3 {
                assert_relative_eq!(index.distance(i, j), index.distance(j, i));
            }
        }
        assert_relative_eq!(index.distance(1, 2), 5.0);
    }

    #[test]
    fn adjacency_is_strict() {
        let index = right_triangle();
        assert!(!index.adjacent(0, 1, 1.5));
        assert!(index.adjacent(0, 1, 1.5001));
        assert!(!index.adjacent(1, 1, 100.0));
    }

    #[test]
    fn crossings_are_sorted_and_deduplicated() {
        let index = DistanceIndex::new(&PointCloud::from([
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (3.0, 0.0),
        ]));
        assert_eq!(index.crossings(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn threshold_crossing_detection() {
        let index = right_triangle();
        // Half distances are 1.5, 2.0 and 2.5.
        assert!(index.threshold_crossed(1.0, 1.6));
        assert!(index.threshold_crossed(2.6, 2.4));
        assert!(!index.threshold_crossed(1.6, 1.9));
        assert!(!index.threshold_crossed(1.5, 1.9));
        assert!(!index.threshold_crossed(1.0, 1.5));
        assert!(!index.threshold_crossed(3.0, 3.0));
    }

    #[test]
    fn leaving_an_exact_half_distance_changes_edges() {
        let index = right_triangle();
        // At 1.5 the pair at distance 3 is not yet adjacent.
        assert!(!index.threshold_crossed(1.5, 1.9));
        assert!(index.edges_differ(1.5, 1.9));
        assert!(index.edges_differ(1.9, 1.5));
        assert!(!index.edges_differ(1.0, 1.5));
        assert!(!index.edges_differ(1.6, 1.9));

        let pair = DistanceIndex::new(&PointCloud::from([(0.0, 0.0), (10.0, 0.0)]));
        assert!(!pair.adjacent(0, 1, 5.0));
        assert!(pair.adjacent(0, 1, 6.0));
        assert!(!pair.threshold_crossed(5.0, 6.0));
        assert!(pair.edges_differ(5.0, 6.0));
    }

    #[test]
    fn empty_cloud() {
        let index = DistanceIndex::new(&PointCloud::new());
        assert!(index.is_empty());
        assert!(index.crossings().is_empty());
        assert!(!index.threshold_crossed(1.0, 100.0));
    }
}

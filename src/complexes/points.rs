// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::{HomologyError, Result};

/// A point in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// The ordered, mutable collection of points a complex is built over.
///
/// A point is identified by its index in the collection. Removing a point
/// shifts the indices of every later point down by one, so every simplex and
/// matrix derived from the collection must be rebuilt after an edit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointCloud {
    points: Vec<Point>,
}

impl PointCloud {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the collection has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in index order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The point at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Append `point` and return its index.
    pub fn push(&mut self, point: Point) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Remove and return the point at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Point> {
        if index >= self.points.len() {
            return Err(HomologyError::PointOutOfRange {
                index,
                count: self.points.len(),
            });
        }
        Ok(self.points.remove(index))
    }

    /// Index of the first point within `radius` (inclusive) of `probe`.
    pub fn find_near(&self, probe: &Point, radius: f64) -> Option<usize> {
        self.points
            .iter()
            .position(|point| point.distance(probe) <= radius)
    }
}

impl Index<usize> for PointCloud {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl FromIterator<Point> for PointCloud {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(f64, f64); N]> for PointCloud {
    fn from(coordinates: [(f64, f64); N]) -> Self {
        coordinates.into_iter().map(Point::from).collect()
    }
}

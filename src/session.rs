// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An interactive session: an editable point collection and threshold, and
//! the complex and homology recomputed from them.
//!
//! Every recomputation starts from scratch. Point edits invalidate indices,
//! so nothing derived from an earlier point collection is reused.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    compute_homology, ComplexBuilder, DistanceIndex, HomologyError, HomologyGroup, Point,
    PointCloud, Result, SimplicialComplex,
};

/// Tunable parameters of a [`Session`].
///
/// Missing JSON fields take their default values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Highest homology dimension reported; simplices are built one
    /// dimension higher.
    pub max_homology_dimension: usize,
    /// Radius around a probe within which a point is removed.
    pub removal_radius: f64,
    /// Quiescent delay, in milliseconds, before a burst of edits is
    /// recomputed.
    pub recompute_delay_ms: u64,
    /// Threshold a new session starts with.
    pub initial_epsilon: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_homology_dimension: 1,
            removal_radius: 5.0,
            recompute_delay_ms: 20,
            initial_epsilon: 20.0,
        }
    }
}

impl SessionConfig {
    /// Set the highest reported homology dimension.
    #[must_use]
    pub fn with_max_homology_dimension(mut self, dimension: usize) -> Self {
        self.max_homology_dimension = dimension;
        self
    }

    /// Set the removal radius.
    #[must_use]
    pub fn with_removal_radius(mut self, radius: f64) -> Self {
        self.removal_radius = radius;
        self
    }

    /// Set the recompute delay.
    #[must_use]
    pub fn with_recompute_delay(mut self, delay: Duration) -> Self {
        self.recompute_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the initial threshold.
    #[must_use]
    pub fn with_initial_epsilon(mut self, epsilon: f64) -> Self {
        self.initial_epsilon = epsilon;
        self
    }

    /// The recompute delay as a [`Duration`].
    pub fn recompute_delay(&self) -> Duration {
        Duration::from_millis(self.recompute_delay_ms)
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the threshold and removal radius are positive and finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_epsilon.is_finite() && self.initial_epsilon > 0.0) {
            return Err(HomologyError::InvalidConfiguration(format!(
                "initial_epsilon must be positive and finite, got {}",
                self.initial_epsilon
            )));
        }
        if !(self.removal_radius.is_finite() && self.removal_radius > 0.0) {
            return Err(HomologyError::InvalidConfiguration(format!(
                "removal_radius must be positive and finite, got {}",
                self.removal_radius
            )));
        }
        Ok(())
    }
}

/// The outcome of one recomputation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    epsilon: f64,
    points: PointCloud,
    complex: SimplicialComplex,
    homology: Vec<HomologyGroup>,
    reports: Vec<String>,
}

impl Snapshot {
    /// Threshold the complex was built at.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// The points the complex was built over.
    pub fn points(&self) -> &PointCloud {
        &self.points
    }

    /// The proximity complex.
    pub fn complex(&self) -> &SimplicialComplex {
        &self.complex
    }

    /// Homology groups by increasing dimension. Dimensions the point count
    /// cannot carry are omitted.
    pub fn homology(&self) -> &[HomologyGroup] {
        &self.homology
    }

    /// The group in dimension `n`, if it was computed.
    pub fn group(&self, n: usize) -> Option<&HomologyGroup> {
        self.homology.iter().find(|group| group.dimension() == n)
    }

    /// One `H_n = ...` line per computed group.
    pub fn reports(&self) -> &[String] {
        &self.reports
    }

    /// Pretty-printed JSON rendering.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Owns the point collection and threshold and recomputes on request.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    points: PointCloud,
    distances: DistanceIndex,
    epsilon: f64,
    stale: bool,
    snapshot: Option<Snapshot>,
}

impl Session {
    /// Start an empty session.
    pub fn new(config: SessionConfig) -> Result<Self> {
        Self::with_points(config, PointCloud::new())
    }

    /// Start a session over existing points.
    pub fn with_points(config: SessionConfig, points: PointCloud) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            epsilon: config.initial_epsilon,
            distances: DistanceIndex::new(&points),
            config,
            points,
            stale: true,
            snapshot: None,
        })
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current points.
    pub fn points(&self) -> &PointCloud {
        &self.points
    }

    /// The current threshold.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Whether an edit happened since the last [`Session::recompute`].
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// The most recent recomputation, if any.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Append a point and return its index.
    pub fn add_point(&mut self, point: Point) -> usize {
        let index = self.points.push(point);
        self.points_changed();
        index
    }

    /// Remove the point at `index`; later points shift down by one.
    pub fn remove_point(&mut self, index: usize) -> Result<Point> {
        let point = self.points.remove(index)?;
        self.points_changed();
        Ok(point)
    }

    /// Remove the first point within the configured removal radius of
    /// `probe`, if there is one.
    pub fn remove_point_near(&mut self, probe: Point) -> Option<Point> {
        let Some(index) = self.points.find_near(&probe, self.config.removal_radius) else {
            debug!(x = probe.x, y = probe.y, "no point near probe");
            return None;
        };
        let point = self.points.remove(index).ok()?;
        self.points_changed();
        Some(point)
    }

    /// Change the threshold. Returns whether some half pairwise distance lies
    /// strictly between the old and new thresholds.
    ///
    /// The session is marked stale whenever the edge set changes, which also
    /// covers moving off an exact half distance.
    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<bool> {
        if !(epsilon.is_finite() && epsilon > 0.0) {
            warn!(epsilon, "rejected threshold");
            return Err(HomologyError::InvalidThreshold(epsilon));
        }
        let crossed = self.distances.threshold_crossed(self.epsilon, epsilon);
        self.stale |= crossed || self.distances.edges_differ(self.epsilon, epsilon);
        self.epsilon = epsilon;
        Ok(crossed)
    }

    /// Rebuild the complex and homology from the current points and
    /// threshold.
    pub fn recompute(&mut self) -> Result<&Snapshot> {
        let max_dimension = self.config.max_homology_dimension;
        let complex = self.build_complex(max_dimension + 1)?;

        let homology = (0..=max_dimension)
            .filter(|&n| self.supports_dimension(n))
            .map(|n| compute_homology(&complex, n))
            .collect::<Result<Vec<_>>>()?;
        let reports: Vec<String> = homology.iter().map(ToString::to_string).collect();
        info!(
            "Recomputed {} points at epsilon {}: {}",
            self.points.len(),
            self.epsilon,
            reports.join("; ")
        );

        self.stale = false;
        Ok(self.snapshot.insert(Snapshot {
            epsilon: self.epsilon,
            points: self.points.clone(),
            complex,
            homology,
            reports,
        }))
    }

    /// Integer homology in dimension `n` at the current state.
    ///
    /// Returns [`HomologyError::InvalidDimension`] if `n` exceeds the
    /// configured maximum or the point count cannot carry it.
    pub fn homology(&self, n: usize) -> Result<HomologyGroup> {
        if n > self.config.max_homology_dimension {
            return Err(HomologyError::InvalidDimension {
                dimension: n,
                reason: format!(
                    "session reports homology up to dimension {}",
                    self.config.max_homology_dimension
                ),
            });
        }
        if !self.supports_dimension(n) {
            return Err(HomologyError::InvalidDimension {
                dimension: n,
                reason: format!("{} points cannot span an {n}-simplex", self.points.len()),
            });
        }
        let complex = self.build_complex(n + 1)?;
        compute_homology(&complex, n)
    }

    fn supports_dimension(&self, n: usize) -> bool {
        n == 0 || n < self.points.len()
    }

    fn build_complex(&self, dimension: usize) -> Result<SimplicialComplex> {
        ComplexBuilder::new(&self.distances, self.epsilon)?.build(dimension)
    }

    fn points_changed(&mut self) {
        self.distances = DistanceIndex::new(&self.points);
        self.stale = true;
    }
}

/// Collapses bursts of recompute requests into one recompute after a quiet
/// period.
///
/// Time is passed in by the caller, so the policy is independent of any
/// event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecomputeCoalescer {
    delay: Duration,
    latest_request: Option<Instant>,
}

impl RecomputeCoalescer {
    /// Create a coalescer that waits `delay` after the latest request.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            latest_request: None,
        }
    }

    /// Record a request at `now`, postponing any pending recompute.
    pub fn request(&mut self, now: Instant) {
        self.latest_request = Some(now);
    }

    /// Whether a request is waiting.
    pub fn is_pending(&self) -> bool {
        self.latest_request.is_some()
    }

    /// Returns true exactly once per burst, when `delay` has elapsed since
    /// the latest request.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.latest_request {
            Some(requested) if now.saturating_duration_since(requested) >= self.delay => {
                self.latest_request = None;
                true
            }
            _ => false,
        }
    }
}

impl From<&SessionConfig> for RecomputeCoalescer {
    fn from(config: &SessionConfig) -> Self {
        Self::new(config.recompute_delay())
    }
}

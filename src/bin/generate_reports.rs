// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Executable for generating homology reports of a few canonical point sets.
//!
//! Each point set is run through a [`Session`] and the resulting snapshot
//! (points, complex, homology groups and report strings) is written as JSON
//! to the ripshom/testing/reports directory.

use std::error::Error;
use std::fs;

use ripshom::{PointCloud, Session, SessionConfig};
use tracing::info;

fn write_report(points: PointCloud, epsilon: f64, name: &str) -> Result<(), Box<dyn Error>> {
    let config = SessionConfig::default()
        .with_initial_epsilon(epsilon)
        .with_max_homology_dimension(2);
    let mut session = Session::with_points(config, points)?;
    let snapshot = session.recompute()?;

    let filename = format!("testing/reports/{name}_report.json");
    fs::write(&filename, snapshot.to_json()?)?;
    info!("Wrote {filename}: {}", snapshot.reports().join("; "));
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // Ensures the directory exists and is empty
    if fs::exists("testing/reports")? {
        fs::remove_dir_all("testing/reports")?;
    }
    fs::create_dir_all("testing/reports")?;

    info!("Generating reports...");

    write_report(point_sets::triangle(), 6.0, "triangle")?;
    write_report(point_sets::square(), 6.0, "square_loop")?;
    write_report(point_sets::square(), 7.5, "square_filled")?;
    write_report(point_sets::hexagon(), 6.0, "hexagon")?;
    write_report(PointCloud::new(), 1.0, "empty")?;

    Ok(())
}

/// Module containing the canonical point sets.
mod point_sets {
    use ripshom::{Point, PointCloud};

    /// Three points spanning a filled triangle at threshold 6.
    pub fn triangle() -> PointCloud {
        PointCloud::from([(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)])
    }

    /// Square with side 10; a loop at threshold 6, filled at 7.5.
    pub fn square() -> PointCloud {
        PointCloud::from([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
    }

    /// Regular hexagon with side 10; only neighbours are joined at
    /// threshold 6.
    pub fn hexagon() -> PointCloud {
        (0..6)
            .map(|k| {
                let angle = std::f64::consts::FRAC_PI_3 * f64::from(k);
                Point::new(10.0 * angle.cos(), 10.0 * angle.sin())
            })
            .collect()
    }
}

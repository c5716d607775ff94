use std::f64::consts::PI;

use ripshom::{Point, PointCloud};

/// Three points forming a filled triangle at any threshold above 5.
pub fn triangle() -> PointCloud {
    PointCloud::from([(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)])
}

/// Corners of a square with side 10. At thresholds in `(5, 5√2)` the edges
/// form a single loop; above `5√2` the diagonals fill it in.
pub fn square() -> PointCloud {
    PointCloud::from([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
}

/// `count` points evenly spaced on a circle of radius `radius` about the
/// origin, in angular order.
pub fn ring(count: usize, radius: f64) -> PointCloud {
    (0..count)
        .map(|k| {
            let angle = 2.0 * PI * k as f64 / count as f64;
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// A threshold at which [`ring`] joins only neighbouring points, leaving a
/// single loop. Requires at least four points.
pub fn ring_loop_epsilon(count: usize, radius: f64) -> f64 {
    let neighbour = 2.0 * radius * (PI / count as f64).sin();
    let second = 2.0 * radius * (2.0 * PI / count as f64).sin();
    (neighbour + second) / 4.0
}

/// Two filled triangles 100 units apart.
pub fn two_clusters() -> PointCloud {
    PointCloud::from([
        (0.0, 0.0),
        (10.0, 0.0),
        (5.0, 8.0),
        (100.0, 0.0),
        (110.0, 0.0),
        (105.0, 8.0),
    ])
}

//! Point generators covering the sphere.
//!
//! Generated points sit at cell centres, so they never fall on the equator,
//! the prime meridian or the antimeridian, where rotated frames tend to put
//! their singular points.

use proj_common::Point;

/// Creates a regular lon/lat grid of points in radians.
///
/// Longitudes are the centres of `step_deg` wide cells spanning
/// `[-180, 180)`. Latitudes are the centres of `step_deg` tall cells
/// counted outward from the equator in both directions, kept while
/// `|lat| <= max_lat_deg`.
///
/// # Arguments
///
/// * `step_deg` - Cell size in degrees
/// * `max_lat_deg` - Largest absolute latitude to include
///
/// # Example
///
/// ```
/// use test_utils::sphere_grid;
///
/// let grid = sphere_grid(30.0, 60.0);
/// assert_eq!(grid.len(), 12 * 4); // 12 longitudes, latitudes ±15 and ±45
/// ```
pub fn sphere_grid(step_deg: f64, max_lat_deg: f64) -> Vec<Point> {
    assert!(step_deg > 0.0, "step must be positive");

    let columns = (360.0 / step_deg).floor() as usize;
    let longitudes: Vec<f64> = (0..columns)
        .map(|i| -180.0 + step_deg * (i as f64 + 0.5))
        .collect();

    let mut latitudes = Vec::new();
    let mut lat = step_deg / 2.0;
    while lat <= max_lat_deg {
        latitudes.push(-lat);
        latitudes.push(lat);
        lat += step_deg;
    }
    latitudes.sort_by(f64::total_cmp);

    let mut points = Vec::with_capacity(longitudes.len() * latitudes.len());
    for &lat in &latitudes {
        for &lon in &longitudes {
            points.push(Point::from_degrees(lon, lat));
        }
    }
    points
}

/// Points along one meridian, from `-max_lat_deg` to `max_lat_deg`
/// inclusive, in radians.
pub fn meridian(lon_deg: f64, max_lat_deg: f64, count: usize) -> Vec<Point> {
    assert!(count >= 2, "need at least two points");
    let step = 2.0 * max_lat_deg / (count - 1) as f64;
    (0..count)
        .map(|k| Point::from_degrees(lon_deg, -max_lat_deg + step * k as f64))
        .collect()
}

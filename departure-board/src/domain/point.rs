//! Geographic positions.

/// A WGS84 latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    /// The null island point, sent as the region when no reference is known.
    pub const ORIGIN: Point = Point { lat: 0.0, lon: 0.0 };

    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse the provider's `[lat, lon]` pair.
    pub fn from_pair(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }

    /// Formats as `"lat,lon"`, the provider's `coordinates` parameter.
    pub fn to_query(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(p: Point) -> Self {
        // geo uses (x, y) = (lon, lat)
        geo::Point::new(p.lon, p.lat)
    }
}

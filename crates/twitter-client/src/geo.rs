//! Geocoded search query
//!
//! The search term and radius are fixed for this deployment. Coordinates are
//! interpolated with `f64`'s `Display`, and the term is a literal so the query
//! string is built without escaping.

/// Search endpoint path, relative to the API base URL
pub const SEARCH_PATH: &str = "/1.1/search/tweets.json";

/// Fixed search term
pub const SEARCH_TERM: &str = "Android";

/// Fixed search radius in miles
pub const RADIUS_MILES: u32 = 30;

/// A search for posts containing `term` within `radius_miles` of a point.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoQuery {
    pub term: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_miles: u32,
}

impl GeoQuery {
    /// Query centered on the given point with the fixed term and radius.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            term: SEARCH_TERM.to_owned(),
            latitude,
            longitude,
            radius_miles: RADIUS_MILES,
        }
    }

    /// Value of the `geocode` parameter: `<lat>,<lon>,<radius>mi`
    pub fn geocode(&self) -> String {
        format!(
            "{},{},{}mi",
            self.latitude, self.longitude, self.radius_miles
        )
    }

    /// Full request URL against `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{base_url}{SEARCH_PATH}?q={}&geocode={}",
            self.term,
            self.geocode()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_fixed_term_and_radius() {
        let query = GeoQuery::new(38.9012594, -77.0511015);
        assert_eq!(query.term, "Android");
        assert_eq!(query.radius_miles, 30);
    }

    #[test]
    fn geocode_joins_point_and_radius() {
        let query = GeoQuery::new(38.9012594, -77.0511015);
        assert_eq!(query.geocode(), "38.9012594,-77.0511015,30mi");
    }

    #[test]
    fn url_embeds_term_and_geocode() {
        let query = GeoQuery::new(51.5, -0.25);
        assert_eq!(
            query.url("https://api.twitter.com"),
            "https://api.twitter.com/1.1/search/tweets.json?q=Android&geocode=51.5,-0.25,30mi"
        );
    }
}

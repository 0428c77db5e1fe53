use foundation::math::{Vec3, lat_lon_to_unit};

/// A named surface location.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl City {
    pub fn new(name: impl Into<String>, lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            name: name.into(),
            lat_deg,
            lon_deg,
        }
    }

    pub fn position(&self) -> Vec3 {
        lat_lon_to_unit(self.lat_deg, self.lon_deg)
    }
}

/// City pairs whose longitudes differ by more than this are not connected.
///
/// The comparison is on the raw difference, so a pair straddling the
/// antimeridian (e.g. 179 and -179) is rejected even though the wrapped
/// distance is small. Known limitation, kept for compatibility with the
/// route sets this selection rule has always produced.
pub const MAX_LON_SPAN_DEG: f64 = 160.0;

/// An unordered connection between two cities.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub a: City,
    pub b: City,
}

impl Route {
    pub fn endpoints(&self) -> (Vec3, Vec3) {
        (self.a.position(), self.b.position())
    }
}

/// All unordered city pairs within the longitude span cutoff.
pub fn flight_routes(cities: &[City]) -> Vec<Route> {
    let mut routes = Vec::new();
    for i in 0..cities.len() {
        for j in i + 1..cities.len() {
            if (cities[i].lon_deg - cities[j].lon_deg).abs() > MAX_LON_SPAN_DEG {
                continue;
            }
            routes.push(Route {
                a: cities[i].clone(),
                b: cities[j].clone(),
            });
        }
    }
    routes
}

/// The builtin demo city set.
pub fn builtin_cities() -> Vec<City> {
    vec![
        City::new("New York City", 40.71, -74.01),
        City::new("San Francisco", 37.77, -122.42),
        City::new("Chicago", 41.88, -87.63),
        City::new("Hong Kong", 22.32, 114.17),
        City::new("Singapore", 1.35, 103.82),
        City::new("Zurich", 47.38, 8.54),
        City::new("London", 51.51, -0.13),
        City::new("Dubai", 25.2, 55.27),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{City, builtin_cities, flight_routes};

    #[test]
    fn filter_uses_the_raw_longitude_difference() {
        // Raw difference 340 > 160, even though the wrapped distance is 20.
        let cities = vec![
            City::new("West", 10.0, -170.0),
            City::new("East", 10.0, 170.0),
        ];
        assert!(flight_routes(&cities).is_empty());
    }

    #[test]
    fn nearby_pair_is_connected() {
        let cities = vec![
            City::new("Zurich", 47.38, 8.54),
            City::new("London", 51.51, -0.13),
        ];
        let routes = flight_routes(&cities);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].a.name, "Zurich");
        assert_eq!(routes[0].b.name, "London");
    }

    #[test]
    fn builtin_set_yields_the_known_route_count() {
        let cities = builtin_cities();
        assert_eq!(cities.len(), 8);
        // 28 unordered pairs, 7 of which span more than 160 degrees of
        // longitude (the SF/NYC/Chicago x Hong Kong/Singapore pairs plus
        // SF-Dubai).
        assert_eq!(flight_routes(&cities).len(), 21);
    }

    #[test]
    fn pacific_pairs_are_filtered_from_the_builtin_set() {
        let routes = flight_routes(&builtin_cities());
        assert!(!routes.iter().any(|r| {
            (r.a.name == "San Francisco" && r.b.name == "Hong Kong")
                || (r.a.name == "Hong Kong" && r.b.name == "San Francisco")
        }));
    }

    #[test]
    fn city_positions_sit_on_the_unit_sphere() {
        for city in builtin_cities() {
            assert!((city.position().length() - 1.0).abs() < 1e-12);
        }
    }
}

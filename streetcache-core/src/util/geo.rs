use crate::entities::{Degrees, MapPoint};

/// Initial bearing (forward azimuth) of the great circle from `from` to `to`.
///
/// The result is a compass direction in the range `[0, 360)` degrees,
/// 0 if both points coincide.
pub fn initial_bearing(from: MapPoint, to: MapPoint) -> Degrees {
    let (lat1, lng1) = from.to_lat_lng_deg();
    let (lat2, lng2) = to.to_lat_lng_deg();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Direction a street-level camera must face to look at the target.
pub fn street_view_heading(camera: MapPoint, target: MapPoint) -> Degrees {
    initial_bearing(camera, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lng: f64) -> MapPoint {
        MapPoint::from_lat_lng_deg(lat, lng)
    }

    fn assert_close(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn heading_of_identical_points_is_zero() {
        for (lat, lng) in [(0.0, 0.0), (37.4224, -122.0841), (-33.8568, 151.2153), (89.9, 179.9)] {
            assert_eq!(0.0, street_view_heading(p(lat, lng), p(lat, lng)));
        }
    }

    #[test]
    fn cardinal_directions() {
        assert_close(0.0, initial_bearing(p(0.0, 0.0), p(1.0, 0.0)));
        assert_close(90.0, initial_bearing(p(0.0, 0.0), p(0.0, 1.0)));
        assert_close(180.0, initial_bearing(p(0.0, 0.0), p(-1.0, 0.0)));
        assert_close(270.0, initial_bearing(p(0.0, 1.0), p(0.0, 0.0)));
    }

    #[test]
    fn heading_towards_target() {
        // Camera slightly south-west of the target
        let camera = p(37.4223, -122.0842);
        let target = p(37.4224, -122.0841);
        let heading = street_view_heading(camera, target);
        assert!(heading > 0.0 && heading < 90.0, "{heading}");
        // ...and the way back
        let heading = street_view_heading(target, camera);
        assert!(heading > 180.0 && heading < 270.0, "{heading}");
    }

    #[test]
    fn heading_is_within_range() {
        let coords = [-90.0, -89.5, -45.0, -1e-12, 0.0, 1e-12, 12.34, 45.0, 89.5, 90.0];
        let lngs = [-180.0, -179.9, -90.0, -1e-12, 0.0, 1e-12, 33.3, 90.0, 179.9, 180.0, 540.0];
        for lat1 in coords {
            for lat2 in coords {
                for lng1 in lngs {
                    for lng2 in lngs {
                        let h = initial_bearing(p(lat1, lng1), p(lat2, lng2));
                        assert!((0.0..360.0).contains(&h), "{h}");
                    }
                }
            }
        }
    }
}

use super::Vec3;

/// Project geographic coordinates (degrees) onto the unit sphere.
///
/// Axis convention of the renderer: +y runs through the north pole and
/// longitude is swept so that lon -180 and +180 meet on the same meridian.
pub fn lat_lon_to_unit(lat_deg: f64, lon_deg: f64) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();
    Vec3::new(
        -phi.sin() * theta.cos(),
        phi.cos(),
        phi.sin() * theta.sin(),
    )
}

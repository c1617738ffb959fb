//! # Stope Shape Factors

/// Rectangular prism volume V = w × l × h.
#[inline]
pub fn prism_volume(width: f64, length: f64, height: f64) -> f64 {
    width * length * height
}

/// Geometric hydraulic radius of the stope wall, area over perimeter.
///
/// ```text
/// HR = (w × h) / (2 × (w + h))
/// ```
///
/// Returns 0 for a degenerate section.
#[inline]
pub fn geometric_hydraulic_radius(width: f64, height: f64) -> f64 {
    let perimeter = 2.0 * (width + height);
    if perimeter <= 0.0 {
        0.0
    } else {
        (width * height) / perimeter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prism_volume() {
        assert!((prism_volume(3.0, 30.0, 2.4) - 216.0).abs() < 1e-9);
    }

    #[test]
    fn test_hydraulic_radius_square() {
        // Square of side a: a² / 4a = a/4
        assert!((geometric_hydraulic_radius(8.0, 8.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_hydraulic_radius_degenerate() {
        assert_eq!(geometric_hydraulic_radius(0.0, 0.0), 0.0);
    }
}

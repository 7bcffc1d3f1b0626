use super::*;
use nalgebra::vector;

fn rect(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Rect {
    Rect::new(x_min, x_max, y_min, y_max).expect("valid rect")
}

#[test]
fn rect_new_rejects_inverted_and_nan() {
    assert!(Rect::new(1.0, 0.0, 0.0, 1.0).is_none());
    assert!(Rect::new(0.0, 1.0, 2.0, 1.0).is_none());
    assert!(Rect::new(f64::NAN, 1.0, 0.0, 1.0).is_none());
    // Degenerate (zero width/height) boxes are valid.
    assert!(Rect::new(3.0, 3.0, -1.0, -1.0).is_some());
}

#[test]
fn bounding_box_of_points() {
    let pts = vec![
        WeightedPoint::new(2.0, -1.0, 1.0),
        WeightedPoint::new(-3.0, 4.0, 1.0),
        WeightedPoint::new(0.5, 0.5, 1.0),
    ];
    let b = Rect::bounding(&pts).unwrap();
    assert_eq!(b, rect(-3.0, 2.0, -1.0, 4.0));
    assert!(Rect::bounding(&[]).is_none());
    for p in &pts {
        assert!(b.contains(p.pos));
    }
}

#[test]
fn longer_axis_and_ties() {
    assert_eq!(rect(0.0, 3.0, 0.0, 2.0).longer_axis(Axis::Y), Axis::X);
    assert_eq!(rect(0.0, 1.0, 0.0, 2.0).longer_axis(Axis::X), Axis::Y);
    assert_eq!(rect(0.0, 2.0, 0.0, 2.0).longer_axis(Axis::X), Axis::X);
    assert_eq!(rect(0.0, 2.0, 0.0, 2.0).longer_axis(Axis::Y), Axis::Y);
}

#[test]
fn longer_axis_with_overflowing_extents() {
    let wide = rect(-f64::MAX, f64::MAX, -1e308, 1e308);
    assert!(wide.width().is_infinite());
    assert_eq!(wide.longer_axis(Axis::Y), Axis::X);
    let tall = rect(-1e308, 1e308, -f64::MAX, f64::MAX);
    assert_eq!(tall.longer_axis(Axis::X), Axis::Y);
    let square = rect(-f64::MAX, f64::MAX, -f64::MAX, f64::MAX);
    assert_eq!(square.longer_axis(Axis::Y), Axis::Y);
}

#[test]
fn split_shares_edge_and_preserves_area() {
    let r = rect(0.0, 4.0, 1.0, 3.0);
    let (lo, hi) = r.split(Axis::X, 1.5);
    assert_eq!(lo, rect(0.0, 1.5, 1.0, 3.0));
    assert_eq!(hi, rect(1.5, 4.0, 1.0, 3.0));
    assert!((lo.area() + hi.area() - r.area()).abs() < 1e-12);
    assert!(!lo.interiors_overlap(&hi));

    let (below, above) = r.split(Axis::Y, 2.0);
    assert_eq!(below.y_max, 2.0);
    assert_eq!(above.y_min, 2.0);

    // Out-of-range split positions are clamped into the rectangle.
    let (l2, h2) = r.split(Axis::X, 10.0);
    assert_eq!(l2, r);
    assert_eq!(h2.width(), 0.0);
}

#[test]
fn interiors_overlap_ignores_touching() {
    let a = rect(0.0, 1.0, 0.0, 1.0);
    let b = rect(1.0, 2.0, 0.0, 1.0);
    let c = rect(0.5, 1.5, 0.5, 1.5);
    assert!(!a.interiors_overlap(&b));
    assert!(a.interiors_overlap(&c));
    assert!(b.interiors_overlap(&c));
}

#[test]
fn corners_form_closed_ccw_ring() {
    let r = rect(0.0, 2.0, 0.0, 1.0);
    let ring = r.corners();
    assert_eq!(ring[0], ring[4]);
    assert_eq!(ring[1], vector![2.0, 0.0]);
    // Shoelace area is positive for CCW orientation.
    let twice_area: f64 = ring
        .windows(2)
        .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
        .sum();
    assert!((twice_area * 0.5 - r.area()).abs() < 1e-12);
}

#[test]
fn weighted_point_finiteness() {
    assert!(WeightedPoint::new(1.0, 2.0, 3.0).is_finite());
    assert!(!WeightedPoint::new(f64::INFINITY, 2.0, 3.0).is_finite());
    assert!(!WeightedPoint::new(1.0, 2.0, f64::NAN).is_finite());
    let p: WeightedPoint = (1.0, -1.0, 0.5).into();
    assert_eq!((p.x(), p.y(), p.weight), (1.0, -1.0, 0.5));
}

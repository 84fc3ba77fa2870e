//! tests for mapping data space onto a drawing surface
use approx::assert_relative_eq;
use conic_refine::{
    view::{ViewBox, ViewError},
    Point, Surface,
};

fn view() -> ViewBox {
    ViewBox::new(-2.0..16.0, -2.0..16.0).unwrap()
}

#[test]
fn corners_and_center() {
    let surface = Surface::new(1800.0, 900.0);
    let v = view();

    let p = v.to_surface(Point::new(-2.0, -2.0), surface);
    assert_eq!(p, Point::new(0.0, 0.0));

    let p = v.to_surface(Point::new(16.0, 16.0), surface);
    assert_relative_eq!(p.x, 1800.0);
    assert_relative_eq!(p.y, 900.0);

    let p = v.to_surface(Point::new(7.0, 7.0), surface);
    assert_relative_eq!(p.x, 900.0);
    assert_relative_eq!(p.y, 450.0);
}

#[test]
fn outside_points_map_outside() {
    let surface = Surface::new(100.0, 100.0);
    let p = view().to_surface(Point::new(40.0, -20.0), surface);
    assert!(p.x > surface.w);
    assert!(p.y < 0.0);
    assert!(!surface.contains(p));
}

#[test]
fn border_is_not_drawable() {
    let surface = Surface::new(100.0, 50.0);
    assert!(surface.contains(Point::new(50.0, 25.0)));
    assert!(!surface.contains(Point::new(0.0, 25.0)));
    assert!(!surface.contains(Point::new(100.0, 25.0)));
    assert!(!surface.contains(Point::new(50.0, 0.0)));
    assert!(!surface.contains(Point::new(50.0, 50.0)));
}

#[test]
fn moving_origin_keeps_span() {
    let surface = Surface::new(180.0, 180.0);
    let mut v = view();
    v.origin = Point::new(0.0, 1.0);
    assert_eq!(v.span(), Point::new(18.0, 18.0));
    assert_eq!(v.x_range(), 0.0..18.0);
    assert_eq!(v.y_range(), 1.0..19.0);

    let p = v.to_surface(Point::new(9.0, 10.0), surface);
    assert_relative_eq!(p.x, 90.0);
    assert_relative_eq!(p.y, 90.0);

    v.reset_origin();
    assert_eq!(v.origin, v.home());
    assert_eq!(v.origin, Point::new(-2.0, -2.0));
}

#[test]
fn empty_span_is_rejected() {
    assert_eq!(
        ViewBox::new(1.0..1.0, 0.0..1.0),
        Err(ViewError::EmptySpan { x: 0.0, y: 1.0 })
    );
    assert!(ViewBox::new(0.0..1.0, 3.0..-3.0).is_err());
    assert!(ViewBox::new(0.0..f64::INFINITY, 0.0..1.0).is_err());
}

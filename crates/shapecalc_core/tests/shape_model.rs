use proptest::prelude::*;
use shapecalc_core::{
    Circle, FigureKind, Rectangle, Shape, ShapeValidationError, SolidShape, Sphere, Square,
};
use std::f64::consts::PI;

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-12 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rectangle area is width times height.
    #[test]
    fn property_rectangle_area(width in 1e-3f64..1e3, height in 1e-3f64..1e3) {
        let rectangle = Rectangle::new(width, height).unwrap();
        prop_assert_eq!(rectangle.area(), width * height);
    }

    /// PROPERTY: A square behaves exactly like the equal-sided rectangle.
    #[test]
    fn property_square_substitutes_for_rectangle(side in 1e-3f64..1e3) {
        let square = Square::new(side).unwrap();
        let rectangle = Rectangle::new(side, side).unwrap();
        prop_assert_eq!(square.area(), side * side);
        prop_assert_eq!(square.area(), rectangle.area());
        prop_assert_eq!(Rectangle::from(square), rectangle);
    }

    /// PROPERTY: Circle area is pi r^2.
    #[test]
    fn property_circle_area(radius in 1e-3f64..1e3) {
        let circle = Circle::new(radius).unwrap();
        assert_close(circle.area(), PI * radius * radius);
    }

    /// PROPERTY: Sphere volume is 4/3 pi r^3.
    #[test]
    fn property_sphere_volume(radius in 1e-3f64..1e3) {
        let sphere = Sphere::new(radius).unwrap();
        assert_close(sphere.volume(), 4.0 / 3.0 * PI * radius * radius * radius);
    }

    /// PROPERTY: Non-positive dimensions never construct a figure.
    #[test]
    fn property_non_positive_dimensions_rejected(value in -1e3f64..=0.0) {
        prop_assert!(Rectangle::new(value, 1.0).is_err());
        prop_assert!(Rectangle::new(1.0, value).is_err());
        prop_assert!(Square::new(value).is_err());
        prop_assert!(Circle::new(value).is_err());
        prop_assert!(Sphere::new(value).is_err());
    }
}

#[test]
fn non_finite_dimensions_are_rejected() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(Circle::new(value).is_err(), "circle accepted {value}");
        assert!(Sphere::new(value).is_err(), "sphere accepted {value}");
    }
}

#[test]
fn circle_error_reports_figure_dimension_and_value() {
    let err = Circle::new(-2.5).unwrap_err();
    assert_eq!(
        err,
        ShapeValidationError::InvalidDimension {
            figure: FigureKind::Circle,
            dimension: "radius",
            value: -2.5,
        }
    );
    assert_eq!(
        err.to_string(),
        "circle radius must be a positive finite number, got -2.5"
    );
}

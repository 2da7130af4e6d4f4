//! Integration tests for colors module

use warning_lights::colors::{self, Color};

fn colors_close(a: Color, b: Color) -> bool {
    const TOLERANCE: u8 = 1;
    a.red.abs_diff(b.red) <= TOLERANCE
        && a.green.abs_diff(b.green) <= TOLERANCE
        && a.blue.abs_diff(b.blue) <= TOLERANCE
}

#[test]
fn named_colors_have_expected_channels() {
    assert_eq!(colors::RED, Color::new(255, 0, 0));
    assert_eq!(colors::GREEN, Color::new(0, 255, 0));
    assert_eq!(colors::BLUE, Color::new(0, 0, 255));
    assert_eq!(colors::WHITE, Color::new(255, 255, 255));
    assert_eq!(colors::AMBER, Color::new(255, 215, 0));
    assert_eq!(colors::BLACK, Color::new(0, 0, 0));
}

#[test]
fn hsl_creates_primary_colors() {
    assert!(colors_close(colors::hsl(0.0, 1.0, 0.5), colors::RED));
    assert!(colors_close(colors::hsl(120.0, 1.0, 0.5), colors::GREEN));
    assert!(colors_close(colors::hsl(240.0, 1.0, 0.5), colors::BLUE));
}

#[test]
fn hsl_lightness_extremes() {
    // Full lightness is white regardless of hue
    assert!(colors_close(colors::hsl(0.0, 0.0, 1.0), colors::WHITE));
    assert!(colors_close(colors::hsl(200.0, 1.0, 1.0), colors::WHITE));

    // Zero lightness is black
    assert!(colors_close(colors::hsl(0.0, 1.0, 0.0), colors::BLACK));
}

#[test]
fn hsv_creates_primary_colors() {
    assert!(colors_close(colors::hsv(0.0, 1.0, 1.0), colors::RED));
    assert!(colors_close(colors::hsv(120.0, 1.0, 1.0), colors::GREEN));
    assert!(colors_close(colors::hsv(240.0, 1.0, 1.0), colors::BLUE));
}

#[test]
fn hsv_handles_saturation_and_value() {
    // Zero saturation is gray
    let gray = colors::hsv(0.0, 0.0, 0.5);
    assert!(colors_close(gray, Color::new(128, 128, 128)));

    // Zero value is black
    assert!(colors_close(colors::hsv(90.0, 1.0, 0.0), colors::BLACK));
}

#[test]
fn hue_wraps_around_360() {
    assert!(colors_close(colors::hsv(0.0, 1.0, 1.0), colors::hsv(360.0, 1.0, 1.0)));
    assert!(colors_close(colors::hsl(0.0, 1.0, 0.5), colors::hsl(360.0, 1.0, 0.5)));
}

#[test]
fn to_rgb8_keeps_channel_order() {
    let rgb = colors::to_rgb8(colors::AMBER);
    assert_eq!((rgb.r, rgb.g, rgb.b), (255, 215, 0));

    let rgb = colors::to_rgb8(Color::new(1, 2, 3));
    assert_eq!((rgb.r, rgb.g, rgb.b), (1, 2, 3));
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! 16-point compass labels for the status readout.

/// `(lower bound, exclusive, label)` pairs checked top-down.
const TABLE: [(i32, &str); 16] = [
    (348, "N"),
    (326, "NNW"),
    (303, "NW"),
    (281, "WNW"),
    (258, "W"),
    (236, "WSW"),
    (213, "SW"),
    (191, "SSW"),
    (168, "S"),
    (146, "SSE"),
    (123, "SE"),
    (101, "ESE"),
    (78, "E"),
    (56, "ENE"),
    (33, "NE"),
    (11, "NNE"),
];

/// Compass label for an azimuth in degrees. Overlap past 360° wraps around.
pub fn direction_label(azimuth: i32) -> &'static str {
    let azimuth = azimuth.rem_euclid(360);
    TABLE
        .iter()
        .find(|(bound, _)| azimuth > *bound)
        .map_or("N", |(_, label)| label)
}

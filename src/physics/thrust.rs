use nalgebra as na;

/// Acceleration produced by `thrust` newtons on a body of `mass` kilograms,
/// pointing `angle_degrees` counter-clockwise from the positive x-axis.
pub fn thrust_acceleration(thrust: f64, angle_degrees: f64, mass: f64) -> na::Vector2<f64> {
    let magnitude = thrust / mass;
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    na::Vector2::new(magnitude * cos, magnitude * sin)
}

use glam::{Quat, Vec3};

/// Translate/scale/rotate state of one spatial entity.
///
/// Scale is per-axis; zero and negative components are degenerate but
/// legal. The orientation is always unit length.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub translate: Vec3,
    pub scale: Vec3,
    pub rotate: Quat,
}

impl Transform {
    pub fn new() -> Self {
        Self {
            translate: Vec3::ZERO,
            scale: Vec3::ONE,
            rotate: Quat::IDENTITY,
        }
    }

    #[allow(dead_code)]
    pub fn from_translation(translate: Vec3) -> Self {
        Self {
            translate,
            ..Self::new()
        }
    }

    pub fn set_translate(&mut self, translate: Vec3) {
        self.translate = translate;
    }

    #[allow(dead_code)]
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Scalar broadcast over all three axes.
    pub fn set_scale_uniform(&mut self, scale: f32) {
        self.scale = Vec3::splat(scale);
    }

    /// Replaces the orientation with a rotation of `angle` radians about
    /// `axis`. Absolute, not cumulative: repeated calls with the same
    /// arguments leave the same orientation. The axis is normalized here;
    /// a zero-length axis leaves the identity orientation.
    pub fn rotate_from_angle_axis(&mut self, angle: f32, axis: Vec3) {
        self.rotate = match axis.try_normalize() {
            Some(axis) => Quat::from_axis_angle(axis, angle),
            None => Quat::IDENTITY,
        };
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn rotation_is_unit_length() {
        let mut transform = Transform::new();
        transform.rotate_from_angle_axis(1.3, Vec3::new(0.2, -4.0, 7.5));
        assert_relative_eq!(transform.rotate.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn rotation_normalizes_axis() {
        let mut a = Transform::new();
        let mut b = Transform::new();
        a.rotate_from_angle_axis(FRAC_PI_2, Vec3::Y);
        b.rotate_from_angle_axis(FRAC_PI_2, Vec3::Y * 20.0);
        assert_relative_eq!(a.rotate.x, b.rotate.x, epsilon = 1e-6);
        assert_relative_eq!(a.rotate.y, b.rotate.y, epsilon = 1e-6);
        assert_relative_eq!(a.rotate.z, b.rotate.z, epsilon = 1e-6);
        assert_relative_eq!(a.rotate.w, b.rotate.w, epsilon = 1e-6);
    }

    #[test]
    fn rotation_is_absolute_not_cumulative() {
        let mut once = Transform::new();
        let mut twice = Transform::new();
        once.rotate_from_angle_axis(0.75, Vec3::Z);
        twice.rotate_from_angle_axis(0.75, Vec3::Z);
        twice.rotate_from_angle_axis(0.75, Vec3::Z);
        assert_eq!(once.rotate, twice.rotate);
    }

    #[test]
    fn zero_axis_leaves_identity() {
        let mut transform = Transform::new();
        transform.rotate_from_angle_axis(2.0, Vec3::X);
        transform.rotate_from_angle_axis(2.0, Vec3::ZERO);
        assert_eq!(transform.rotate, Quat::IDENTITY);
    }

    #[test]
    fn degenerate_scale_is_accepted() {
        let mut transform = Transform::new();
        transform.set_scale(Vec3::new(-1.0, 0.0, 2.5));
        assert_eq!(transform.scale, Vec3::new(-1.0, 0.0, 2.5));

        transform.set_scale_uniform(0.0);
        assert_eq!(transform.scale, Vec3::ZERO);
    }
}

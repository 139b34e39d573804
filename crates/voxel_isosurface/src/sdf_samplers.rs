//! Simple SDF fields for testing and debugging.
//!
//! These fields evaluate deterministic mathematical SDFs at integer grid
//! coordinates and quantize them with [`sdf_conversion::to_storage`]. They
//! answer any coordinate, so they satisfy the apron requirement of every
//! region.

use glam::{IVec3, Vec3};

use crate::types::{sdf_conversion, DensitySample};
use crate::volume::VolumeField;

/// Tilted plane SDF field.
///
/// Creates a plane tilted around the Z axis.
/// Useful for testing chunk boundary alignment since the surface
/// crosses many chunk boundaries at a predictable angle.
///
/// SDF: `(y - height) * cos(angle) - x * sin(angle)`
/// Default: plane tilted 45° passing through y=0
#[derive(Clone, Debug)]
pub struct TiltedPlaneSampler {
  /// Height offset of the plane (default: 0.0)
  pub height: f32,
  /// Tilt angle in radians (default: π/4 = 45°)
  pub angle: f32,
}

impl Default for TiltedPlaneSampler {
  fn default() -> Self {
    Self {
      height: 0.0,
      angle: std::f32::consts::FRAC_PI_4,
    }
  }
}

impl TiltedPlaneSampler {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_height(mut self, height: f32) -> Self {
    self.height = height;
    self
  }

  pub fn with_angle_degrees(mut self, degrees: f32) -> Self {
    self.angle = degrees.to_radians();
    self
  }

  /// Unquantized signed distance at a world position.
  pub fn distance(&self, p: Vec3) -> f32 {
    (p.y - self.height) * self.angle.cos() - p.x * self.angle.sin()
  }
}

impl VolumeField for TiltedPlaneSampler {
  fn sample(&self, coord: IVec3) -> DensitySample {
    sdf_conversion::to_storage(self.distance(coord.as_vec3()))
  }
}

/// Sphere SDF field.
///
/// Simple test case with radial symmetry.
#[derive(Clone, Debug)]
pub struct SphereSampler {
  /// Center of the sphere in world coordinates
  pub center: Vec3,
  /// Radius of the sphere
  pub radius: f32,
}

impl Default for SphereSampler {
  fn default() -> Self {
    Self {
      center: Vec3::ZERO,
      radius: 8.0,
    }
  }
}

impl SphereSampler {
  pub fn new(radius: f32) -> Self {
    Self {
      center: Vec3::ZERO,
      radius,
    }
  }

  pub fn with_center(mut self, center: Vec3) -> Self {
    self.center = center;
    self
  }

  /// Unquantized signed distance at a world position.
  pub fn distance(&self, p: Vec3) -> f32 {
    p.distance(self.center) - self.radius
  }
}

impl VolumeField for SphereSampler {
  fn sample(&self, coord: IVec3) -> DensitySample {
    sdf_conversion::to_storage(self.distance(coord.as_vec3()))
  }
}

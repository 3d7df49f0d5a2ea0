//! View and projection state extracted from the scene's active camera.

use cgmath::{Matrix4, SquareMatrix};

/// Far plane used when the asset's camera does not declare `zfar`.
pub const DEFAULT_ZFAR: f32 = 100.0;

/// The retained camera parameters: a view matrix (inverse of the camera
/// node's world transform) and a perspective projection.
///
/// The default is identity for both, used when the asset declares no camera.
#[derive(Clone, Copy, Debug)]
pub struct CameraState {
    pub view: Matrix4<f32>,
    pub proj: Matrix4<f32>,
}

impl CameraState {
    /// Combined transform applied to world-space geometry.
    pub fn view_proj(&self) -> Matrix4<f32> {
        self.proj * self.view
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            view: Matrix4::identity(),
            proj: Matrix4::identity(),
        }
    }
}

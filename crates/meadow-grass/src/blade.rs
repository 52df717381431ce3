use std::f32::consts::TAU;

use meadow_geom::Vec3;

use crate::config::GrassConfig;
use crate::constants::{BASE_COLOR, MAX_BEND, TIP_COLOR, TIP_LEAN};
use crate::grid::GridCell;
use crate::random::RandomSource;
use crate::terrain::HeightSampler;

/// One sampled blade, in block-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blade {
    pub lx: f32,
    pub lz: f32,
    pub base_y: f32,
    pub height: f32,
    pub yaw: f32,
    pub bend: f32,
    pub half_width: f32,
}

impl Blade {
    /// Draws one blade for `cell`. Consumes exactly five unit draws in order:
    /// x, z, height, yaw, bend.
    ///
    /// The position is uniform over the square cell, not over a disc, so a
    /// masked field is slightly denser in block corners.
    pub fn sample<R, H>(
        rng: &mut R,
        cfg: &GrassConfig,
        cell: &GridCell,
        origin: Vec3,
        heights: &H,
    ) -> Self
    where
        R: RandomSource + ?Sized,
        H: HeightSampler + ?Sized,
    {
        let half_side = cfg.half_side();
        let lx = rng.uniform(-half_side, half_side);
        let lz = rng.uniform(-half_side, half_side);

        let world_x = origin.x + cell.cx + lx;
        let world_z = origin.z + cell.cz + lz;
        let base_y = heights.height_at(world_x, world_z);

        let height = cfg.blade_height + rng.unit() * cfg.blade_height_variation;
        let yaw = rng.uniform(0.0, TAU);
        let bend = rng.uniform(-MAX_BEND, MAX_BEND);

        Self {
            lx,
            lz,
            base_y,
            height,
            yaw,
            bend,
            half_width: cfg.blade_width * 0.5,
        }
    }

    /// Base-left, base-right and tip positions.
    pub fn corners(&self) -> [Vec3; 3] {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let hw = self.half_width;
        let bl = Vec3::new(self.lx + sin_yaw * hw, self.base_y, self.lz - cos_yaw * hw);
        let br = Vec3::new(self.lx - sin_yaw * hw, self.base_y, self.lz + cos_yaw * hw);
        let (sin_lean, cos_lean) = (self.yaw + self.bend).sin_cos();
        let tip = Vec3::new(
            self.lx + sin_lean * TIP_LEAN,
            self.base_y + self.height,
            self.lz - cos_lean * TIP_LEAN,
        );
        [bl, br, tip]
    }

    /// Flat face normal of the front triangle.
    pub fn face_normal(corners: &[Vec3; 3]) -> Vec3 {
        let [bl, br, tip] = *corners;
        (br - bl).cross(tip - bl).normalized()
    }
}

/// Two-stop ramp from the dark base (t = 0) to the green tip (t = 1).
pub fn color_ramp(t: f32) -> [f32; 4] {
    std::array::from_fn(|i| match i {
        3 => 1.0,
        _ => BASE_COLOR[i] * (1.0 - t) + TIP_COLOR[i] * t,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    fn cfg() -> GrassConfig {
        GrassConfig {
            block_side: 4.0,
            blade_height: 1.0,
            blade_height_variation: 0.5,
            blade_width: 0.2,
            ..GrassConfig::default()
        }
    }

    #[test]
    fn sample_consumes_draws_in_order() {
        let cell = GridCell { ix: 0, iz: 0, cx: 10.0, cz: -10.0 };
        let mut rng = ScriptedRandom::new(vec![0.75, 0.25, 0.5, 0.25, 1.0]);
        let blade = Blade::sample(&mut rng, &cfg(), &cell, Vec3::ZERO, &crate::FlatGround);
        assert_eq!(rng.draws(), 5);
        assert_eq!(blade.lx, 1.0);
        assert_eq!(blade.lz, -1.0);
        assert_eq!(blade.height, 1.25);
        assert_eq!(blade.yaw, TAU * 0.25);
        assert!((blade.bend - 0.3).abs() < 1e-6);
        assert_eq!(blade.half_width, 0.1);
    }

    #[test]
    fn zero_draws_hit_lower_bounds() {
        let cell = GridCell { ix: 0, iz: 0, cx: 0.0, cz: 0.0 };
        let mut rng = ScriptedRandom::new(vec![0.0]);
        let blade = Blade::sample(&mut rng, &cfg(), &cell, Vec3::ZERO, &crate::FlatGround);
        assert_eq!((blade.lx, blade.lz), (-2.0, -2.0));
        assert_eq!(blade.height, 1.0);
        assert_eq!(blade.yaw, 0.0);
        assert_eq!(blade.bend, -MAX_BEND);
    }

    #[test]
    fn height_lookup_uses_world_position() {
        let cell = GridCell { ix: 1, iz: 2, cx: 3.0, cz: 5.0 };
        let origin = Vec3::new(100.0, 7.0, 200.0);
        let mut rng = ScriptedRandom::new(vec![0.5]);
        let heights = |x: f32, z: f32| x * 0.01 + z * 0.001;
        let blade = Blade::sample(&mut rng, &cfg(), &cell, origin, &heights);
        // lx = lz = 0, so the sample sits on the cell center in world space
        assert_eq!(blade.base_y, 103.0 * 0.01 + 205.0 * 0.001);
    }

    #[test]
    fn corners_straddle_base_and_tip_leans() {
        let blade = Blade {
            lx: 0.0,
            lz: 0.0,
            base_y: 2.0,
            height: 1.0,
            yaw: 0.0,
            bend: 0.0,
            half_width: 0.5,
        };
        let [bl, br, tip] = blade.corners();
        assert_eq!(bl, Vec3::new(0.0, 2.0, -0.5));
        assert_eq!(br, Vec3::new(0.0, 2.0, 0.5));
        assert_eq!(tip, Vec3::new(0.0, 3.0, -0.15));
        // Base centered on the sample point
        assert_eq!((bl + br) * 0.5, Vec3::new(0.0, 2.0, 0.0));

        let n = Blade::face_normal(&[bl, br, tip]);
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!(n.dot(br - bl).abs() < 1e-6);
        assert!(n.dot(tip - bl).abs() < 1e-6);
    }

    #[test]
    fn ramp_endpoints_are_base_and_tip() {
        assert_eq!(color_ramp(0.0), BASE_COLOR);
        assert_eq!(color_ramp(1.0), TIP_COLOR);
        let mid = color_ramp(0.5);
        assert!((mid[1] - 0.325).abs() < 1e-6);
        assert_eq!(mid[3], 1.0);
    }
}

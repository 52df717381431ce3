/// Ground elevation lookup at a world XZ position. Treated as pure and infallible.
pub trait HeightSampler {
    fn height_at(&self, world_x: f32, world_z: f32) -> f32;
}

/// Flat ground at y = 0, used when no terrain system is present.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatGround;

impl HeightSampler for FlatGround {
    #[inline]
    fn height_at(&self, _world_x: f32, _world_z: f32) -> f32 {
        0.0
    }
}

impl<F> HeightSampler for F
where
    F: Fn(f32, f32) -> f32,
{
    #[inline]
    fn height_at(&self, world_x: f32, world_z: f32) -> f32 {
        self(world_x, world_z)
    }
}

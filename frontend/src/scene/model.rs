use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn offset(self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Rotates around the y axis, then the x axis (radians).
    pub fn rotated(self, yaw: f64, pitch: f64) -> Self {
        let (sy, cy) = yaw.sin_cos();
        let x = self.x * cy + self.z * sy;
        let z = -self.x * sy + self.z * cy;

        let (sp, cp) = pitch.sin_cos();
        let y = self.y * cp - z * sp;
        let z = self.y * sp + z * cp;

        Self::new(x, y, z)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub fn css(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.0, self.1, self.2, alpha.clamp(0.0, 1.0))
    }

    /// Moves each channel towards white (`amount > 0`) or black (`amount < 0`).
    pub fn shade(self, amount: f64) -> Self {
        let amount = amount.clamp(-1.0, 1.0);
        let channel = |c: u8| {
            let c = c as f64;
            let target = if amount >= 0.0 { 255.0 } else { 0.0 };
            (c + (target - c) * amount.abs()).round() as u8
        };
        Rgb(channel(self.0), channel(self.1), channel(self.2))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Refractive bubble drifting on two sine waves.
    Glass,
    /// Reflective morphing bubble.
    Metallic,
    /// Emissive bubble with a breathing scale.
    Glow,
    /// Small ambient bubble with its own phase.
    Tiny,
    /// Noisy sphere that only spins and floats.
    Distort,
    /// Faceted glass crystal bobbing around its anchor.
    Crystal,
    WireTorus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub kind: BodyKind,
    pub position: Vec3,
    pub scale: f64,
    pub speed: f64,
    pub color: Rgb,
    pub distort: f64,
    pub opacity: f64,
    pub phase: f64,
}

impl Body {
    pub fn new(kind: BodyKind, position: Vec3, scale: f64, speed: f64, color: Rgb) -> Self {
        Self {
            kind,
            position,
            scale,
            speed,
            color,
            distort: 0.0,
            opacity: 1.0,
            phase: 0.0,
        }
    }

    pub fn distorted(mut self, distort: f64) -> Self {
        self.distort = distort;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    Ambient,
    Directional,
    Point,
    Spot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub position: Vec3,
    pub intensity: f64,
    pub color: Rgb,
}

impl Light {
    pub fn new(kind: LightKind, position: Vec3, intensity: f64, color: Rgb) -> Self {
        Self { kind, position, intensity, color }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Rgb,
    pub near: f64,
    pub far: f64,
}

impl Fog {
    /// Visibility in [0, 1] at `depth`: 1 before `near`, 0 past `far`.
    pub fn visibility(&self, depth: f64) -> f64 {
        if self.far <= self.near {
            return 1.0;
        }
        (1.0 - (depth - self.near) / (self.far - self.near)).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub fov_deg: f64,
}

/// A cloud of points sharing one look.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    pub points: Vec<Vec3>,
    pub size: f64,
    pub color: Rgb,
    pub opacity: f64,
    /// Rotation rate of the whole cloud around (x, y) in radians per second.
    pub spin: (f64, f64),
}

impl ParticleField {
    /// `count` points uniformly spread over a cube of side `extent` around the origin.
    pub fn scattered(count: usize, extent: f64, seed: u64) -> Vec<Vec3> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f64>() - 0.5) * extent,
                    (rng.gen::<f64>() - 0.5) * extent,
                    (rng.gen::<f64>() - 0.5) * extent,
                )
            })
            .collect()
    }
}

/// How the whole scene reacts to the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GroupMotion {
    /// Lifted and turned by page scroll, optionally tilted toward the mouse.
    ScrollParallax {
        lift: f64,
        yaw: f64,
        follow_mouse: bool,
    },
    Still,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneSpec {
    pub camera: Camera,
    pub max_pixel_ratio: f64,
    pub lights: Vec<Light>,
    pub bodies: Vec<Body>,
    pub particles: Option<ParticleField>,
    pub fog: Option<Fog>,
    pub group: GroupMotion,
}

impl SceneSpec {
    /// Direction the key light shines from, used for highlights.
    pub fn key_light(&self) -> Option<&Light> {
        self.lights
            .iter()
            .filter(|l| l.kind != LightKind::Ambient)
            .max_by(|a, b| a.intensity.total_cmp(&b.intensity))
    }

    pub fn ambient(&self) -> f64 {
        self.lights
            .iter()
            .filter(|l| l.kind == LightKind::Ambient)
            .map(|l| l.intensity)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert_eq!(Rgb::hex(0xc4956a), Rgb(0xc4, 0x95, 0x6a));
        assert_eq!(Rgb::hex(0xc4956a).css(0.5), "rgba(196, 149, 106, 0.500)");
        assert_eq!(Rgb(10, 20, 30).css(3.0), "rgba(10, 20, 30, 1.000)");
    }

    #[test]
    fn shading_moves_towards_white_or_black() {
        let base = Rgb(100, 100, 100);
        assert_eq!(base.shade(1.0), Rgb(255, 255, 255));
        assert_eq!(base.shade(-1.0), Rgb(0, 0, 0));
        assert_eq!(base.shade(0.0), base);
    }

    #[test]
    fn rotation_keeps_length() {
        let p = Vec3::new(1.0, 2.0, -3.0);
        let r = p.rotated(0.7, -0.3);
        let len = |v: Vec3| (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
        assert!((len(p) - len(r)).abs() < 1e-9);

        let quarter = Vec3::new(1.0, 0.0, 0.0).rotated(std::f64::consts::FRAC_PI_2, 0.0);
        assert!(quarter.x.abs() < 1e-9);
        assert!((quarter.z + 1.0).abs() < 1e-9);
    }

    #[test]
    fn fog_visibility() {
        let fog = Fog { color: Rgb::hex(0x282624), near: 5.0, far: 20.0 };
        assert_eq!(fog.visibility(2.0), 1.0);
        assert_eq!(fog.visibility(25.0), 0.0);
        assert!((fog.visibility(12.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn scattered_points_are_reproducible_and_bounded() {
        let a = ParticleField::scattered(50, 20.0, 7);
        let b = ParticleField::scattered(50, 20.0, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|p| p.x.abs() <= 10.0 && p.y.abs() <= 10.0 && p.z.abs() <= 10.0));
    }
}

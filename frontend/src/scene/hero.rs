use super::model::{
    Body, BodyKind, Camera, Fog, GroupMotion, Light, LightKind, ParticleField, Rgb, SceneSpec, Vec3,
};

pub const HERO_PARTICLES: usize = 300;
const PARTICLE_SEED: u64 = 0x68_65_72_6f;

pub fn hero_scene() -> SceneSpec {
    let bodies = vec![
        Body::new(BodyKind::Distort, Vec3::new(-2.5, 1.5, -2.0), 1.2, 1.5, Rgb::hex(0x5a4a3a))
            .distorted(0.4)
            .with_opacity(0.7),
        Body::new(BodyKind::Distort, Vec3::new(3.5, -1.0, -4.0), 0.8, 2.0, Rgb::hex(0x8a7060))
            .distorted(0.6)
            .with_opacity(0.7),
        Body::new(BodyKind::Distort, Vec3::new(-1.0, -2.0, -3.0), 0.5, 1.0, Rgb::hex(0xc4956a))
            .distorted(0.3)
            .with_opacity(0.7),
        Body::new(BodyKind::Crystal, Vec3::new(2.0, 0.0, -1.0), 1.8, 0.15, Rgb::hex(0xc4956a))
            .distorted(0.4),
        Body::new(BodyKind::WireTorus, Vec3::new(-3.0, -1.0, -3.0), 2.0, 0.1, Rgb::hex(0x8a7060))
            .with_opacity(0.3),
    ];

    SceneSpec {
        camera: Camera {
            position: Vec3::new(0.0, 0.0, 6.0),
            fov_deg: 55.0,
        },
        max_pixel_ratio: 1.5,
        lights: vec![
            Light::new(LightKind::Ambient, Vec3::new(0.0, 0.0, 0.0), 0.3, Rgb::hex(0xffffff)),
            Light::new(LightKind::Directional, Vec3::new(5.0, 5.0, 5.0), 0.8, Rgb::hex(0xf5e6d3)),
            Light::new(LightKind::Point, Vec3::new(-5.0, -3.0, 2.0), 0.5, Rgb::hex(0xc4956a)),
        ],
        bodies,
        particles: Some(ParticleField {
            points: ParticleField::scattered(HERO_PARTICLES, 20.0, PARTICLE_SEED),
            size: 0.03,
            color: Rgb::hex(0xc4956a),
            opacity: 0.6,
            spin: (0.01, 0.02),
        }),
        fog: Some(Fog {
            color: Rgb::hex(0x282624),
            near: 5.0,
            far: 20.0,
        }),
        group: GroupMotion::Still,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_table() {
        let spec = hero_scene();
        assert_eq!(spec.camera.position.z, 6.0);
        assert_eq!(spec.camera.fov_deg, 55.0);
        assert_eq!(spec.bodies.iter().filter(|b| b.kind == BodyKind::Distort).count(), 3);
        assert_eq!(spec.bodies.iter().filter(|b| b.kind == BodyKind::WireTorus).count(), 1);
        assert_eq!(spec.group, GroupMotion::Still);

        let particles = spec.particles.unwrap();
        assert_eq!(particles.points.len(), HERO_PARTICLES);
        assert!(particles.points.iter().all(|p| p.x.abs() <= 10.0 && p.z.abs() <= 10.0));
    }

    #[test]
    fn fog_hides_the_far_field() {
        let fog = hero_scene().fog.unwrap();
        assert_eq!(fog.visibility(4.0), 1.0);
        assert_eq!(fog.visibility(21.0), 0.0);
    }
}

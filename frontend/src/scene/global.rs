//! Page-wide bubble scene that sits behind every section.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use super::model::{Body, BodyKind, Camera, GroupMotion, Light, LightKind, Rgb, SceneSpec, Vec3};

pub const TINY_BUBBLES: usize = 20;
pub const TINY_SPREAD: f64 = 14.0;
const TINY_SEED: u64 = 0x75_70_77;

pub fn global_scene(is_mobile: bool) -> SceneSpec {
    let pick = |mobile: f64, desktop: f64| if is_mobile { mobile } else { desktop };

    let mut bodies = vec![
        // hero: large glass bubble
        Body::new(
            BodyKind::Glass,
            Vec3::new(pick(1.8, 3.5), 1.0, 0.0),
            pick(1.8, 2.8),
            0.3,
            Rgb::hex(0xe8d8c8),
        ),
        Body::new(
            BodyKind::Metallic,
            Vec3::new(pick(-1.2, -2.8), 0.5, -1.0),
            pick(1.0, 1.6),
            2.5,
            Rgb::hex(0xa09080),
        )
        .distorted(0.45),
        Body::new(
            BodyKind::Glass,
            Vec3::new(pick(-0.8, -1.2), 2.2, -2.0),
            pick(0.5, 0.8),
            0.5,
            Rgb::hex(0xd0c8c0),
        ),
        Body::new(
            BodyKind::Glow,
            Vec3::new(pick(2.2, 4.5), -1.5, -2.0),
            pick(0.4, 0.7),
            0.4,
            Rgb::hex(0xc4956a),
        )
        .with_opacity(0.85),
        Body::new(
            BodyKind::Glow,
            Vec3::new(pick(-1.8, -4.0), -3.0, -1.5),
            pick(0.5, 0.9),
            0.35,
            Rgb::hex(0x8a7a6a),
        )
        .with_opacity(0.85),
    ];

    if !is_mobile {
        bodies.push(
            Body::new(BodyKind::Glow, Vec3::new(1.0, -5.0, -3.0), 0.5, 0.45, Rgb::hex(0xb0a090))
                .with_opacity(0.85),
        );
        bodies.push(Body::new(
            BodyKind::Glass,
            Vec3::new(-3.0, -2.0, -3.0),
            0.6,
            0.4,
            Rgb::hex(0xd8c8b8),
        ));
        bodies.push(
            Body::new(BodyKind::Metallic, Vec3::new(4.0, -4.0, -2.0), 0.7, 2.0, Rgb::hex(0x9a8a7a))
                .distorted(0.35),
        );
    }

    bodies.extend(tiny_bubbles(is_mobile));

    SceneSpec {
        camera: Camera {
            position: Vec3::new(0.0, 0.0, 10.0),
            fov_deg: 42.0,
        },
        max_pixel_ratio: pick(1.0, 2.0),
        lights: vec![
            Light::new(LightKind::Ambient, Vec3::new(0.0, 0.0, 0.0), 0.25, Rgb::hex(0xffffff)),
            Light::new(LightKind::Directional, Vec3::new(6.0, 8.0, 5.0), 1.1, Rgb::hex(0xfff0e0)),
            Light::new(LightKind::Directional, Vec3::new(-4.0, -3.0, 4.0), 0.35, Rgb::hex(0xe0e8ff)),
            Light::new(LightKind::Point, Vec3::new(0.0, 5.0, 3.0), 0.5, Rgb::hex(0xffe0c0)),
            Light::new(LightKind::Point, Vec3::new(-3.0, -2.0, 2.0), 0.25, Rgb::hex(0xc0d0e0)),
            Light::new(LightKind::Spot, Vec3::new(4.0, 6.0, 4.0), 0.7, Rgb::hex(0xf0e0d0)),
        ],
        bodies,
        particles: None,
        fog: None,
        group: GroupMotion::ScrollParallax {
            lift: 6.0,
            yaw: pick(0.15, 0.2),
            follow_mouse: !is_mobile,
        },
    }
}

fn tiny_bubbles(is_mobile: bool) -> Vec<Body> {
    let count = if is_mobile { TINY_BUBBLES / 2 } else { TINY_BUBBLES };
    let mut rng = SmallRng::seed_from_u64(TINY_SEED);

    (0..count)
        .map(|_| {
            let position = Vec3::new(
                (rng.gen::<f64>() - 0.5) * TINY_SPREAD,
                (rng.gen::<f64>() - 0.5) * TINY_SPREAD * 0.8,
                (rng.gen::<f64>() - 0.5) * TINY_SPREAD * 0.5 - 2.0,
            );
            let size = 0.04 + rng.gen::<f64>() * 0.08;
            let speed = 0.2 + rng.gen::<f64>() * 0.4;
            Body::new(BodyKind::Tiny, position, size, speed, Rgb::hex(0xe0d0c0))
                .with_phase(rng.gen::<f64>() * TAU)
        })
        .collect()
}

use super::model::{Body, BodyKind, GroupMotion, Vec3};

pub const MOUSE_EASING: f64 = 0.03;
const MOUSE_YAW: f64 = 0.12;
const MOUSE_PITCH: f64 = 0.06;

/// Where a body is and how it is turned at a given moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub scale: f64,
    /// Rotation around the view axis, used for highlights and wireframes.
    pub spin: f64,
    /// Rotation across the view axis, flattens rings as it grows.
    pub tilt: f64,
}

pub fn pose(body: &Body, t: f64) -> Pose {
    let p = body.position;
    let s = body.speed;

    match body.kind {
        BodyKind::Glass => Pose {
            position: p.offset(
                (t * s * 0.7 + p.z).sin() * 0.15,
                (t * s + p.x).sin() * 0.4,
                0.0,
            ),
            scale: body.scale,
            spin: t * s * 0.5,
            tilt: t * s * 0.3,
        },
        BodyKind::Metallic => Pose {
            position: p.offset((t * 0.3 + p.z).cos() * 0.2, (t * 0.4 + p.x).sin() * 0.35, 0.0),
            scale: body.scale,
            spin: (t * 0.25).sin() * 0.12,
            tilt: t * 0.08,
        },
        BodyKind::Glow => Pose {
            position: p.offset(
                (t * s * 0.6 + p.z).cos() * 0.3,
                (t * s + p.x * 2.0).sin() * 0.5,
                0.0,
            ),
            scale: body.scale * glow_pulse(s, t),
            spin: 0.0,
            tilt: 0.0,
        },
        BodyKind::Tiny => Pose {
            position: p.offset(
                (t * s * 0.7 + body.phase).cos() * 0.3,
                (t * s + body.phase).sin() * 0.6,
                0.0,
            ),
            scale: body.scale,
            spin: 0.0,
            tilt: 0.0,
        },
        BodyKind::Distort => Pose {
            position: p.offset(0.0, float_offset(s, t, p.x), 0.0),
            scale: body.scale,
            spin: t * s * 0.2,
            tilt: t * s * 0.3,
        },
        BodyKind::Crystal => Pose {
            position: Vec3::new(p.x, p.y + (t * 0.5).sin() * 0.3, p.z),
            scale: body.scale,
            spin: t * s,
            tilt: 0.0,
        },
        BodyKind::WireTorus => Pose {
            position: p,
            scale: body.scale,
            spin: t * 0.08,
            tilt: t * 0.1,
        },
    }
}

/// Breathing factor of emissive bubbles, always within [0.7, 1.0].
pub fn glow_pulse(speed: f64, t: f64) -> f64 {
    0.85 + (t * speed * 1.5).sin() * 0.15
}

fn float_offset(speed: f64, t: f64, seed: f64) -> f64 {
    (t * speed * 0.25 + seed).sin() * 0.12
}

/// Scene-wide transform derived from scroll progress and the smoothed mouse.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupPose {
    pub lift: f64,
    pub yaw: f64,
    pub pitch: f64,
}

impl GroupPose {
    pub fn apply(&self, point: Vec3) -> Vec3 {
        point.rotated(self.yaw, self.pitch).offset(0.0, self.lift, 0.0)
    }
}

/// `mouse` is the smoothed pointer offset from the viewport centre, each axis in [-0.5, 0.5].
pub fn group_pose(motion: GroupMotion, progress: f64, mouse: (f64, f64)) -> GroupPose {
    match motion {
        GroupMotion::Still => GroupPose::default(),
        GroupMotion::ScrollParallax { lift, yaw, follow_mouse } => {
            if follow_mouse {
                GroupPose {
                    lift: progress * lift,
                    yaw: progress * yaw + mouse.0 * MOUSE_YAW,
                    pitch: mouse.1 * MOUSE_PITCH,
                }
            } else {
                GroupPose {
                    lift: progress * lift,
                    yaw: progress * yaw,
                    pitch: 0.0,
                }
            }
        }
    }
}

/// Exponential follower for the pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseSmoother {
    pub x: f64,
    pub y: f64,
}

impl MouseSmoother {
    /// Moves a fixed fraction of the way towards `target`, where `target`
    /// is the pointer position normalised to [0, 1] per axis.
    pub fn step(&mut self, target: (f64, f64)) -> (f64, f64) {
        let tx = target.0 - 0.5;
        let ty = target.1 - 0.5;
        self.x += (tx - self.x) * MOUSE_EASING;
        self.y += (ty - self.y) * MOUSE_EASING;
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::model::Rgb;

    fn body(kind: BodyKind) -> Body {
        Body::new(kind, Vec3::new(1.0, 2.0, -1.0), 0.8, 0.4, Rgb(0, 0, 0))
    }

    #[test]
    fn glow_pulse_bounds() {
        for i in 0..200 {
            let f = glow_pulse(0.4, i as f64 * 0.1);
            assert!((0.7..=1.0).contains(&f));
        }
        assert!((glow_pulse(0.4, 0.0) - 0.85).abs() < 1e-12);
    }

    #[test]
    fn bodies_hover_near_their_anchor() {
        let kinds = [
            BodyKind::Glass,
            BodyKind::Metallic,
            BodyKind::Glow,
            BodyKind::Tiny,
            BodyKind::Distort,
            BodyKind::Crystal,
            BodyKind::WireTorus,
        ];
        for kind in kinds {
            let b = body(kind);
            for i in 0..100 {
                let pose = pose(&b, i as f64 * 0.37);
                assert!((pose.position.x - b.position.x).abs() <= 0.3 + 1e-9, "{:?}", kind);
                assert!((pose.position.y - b.position.y).abs() <= 0.6 + 1e-9, "{:?}", kind);
                assert_eq!(pose.position.z, b.position.z);
            }
        }
    }

    #[test]
    fn torus_stays_put() {
        let b = body(BodyKind::WireTorus);
        assert_eq!(pose(&b, 12.0).position, b.position);
        assert!((pose(&b, 10.0).tilt - 1.0).abs() < 1e-12);
    }

    #[test]
    fn scroll_lifts_and_turns_group() {
        let motion = GroupMotion::ScrollParallax { lift: 6.0, yaw: 0.2, follow_mouse: true };
        let g = group_pose(motion, 0.5, (0.0, 0.0));
        assert!((g.lift - 3.0).abs() < 1e-12);
        assert!((g.yaw - 0.1).abs() < 1e-12);
        assert_eq!(g.pitch, 0.0);

        let g = group_pose(motion, 0.0, (0.5, -0.5));
        assert!((g.yaw - 0.06).abs() < 1e-12);
        assert!((g.pitch + 0.03).abs() < 1e-12);
    }

    #[test]
    fn mobile_ignores_mouse() {
        let motion = GroupMotion::ScrollParallax { lift: 6.0, yaw: 0.15, follow_mouse: false };
        let g = group_pose(motion, 1.0, (0.5, 0.5));
        assert!((g.yaw - 0.15).abs() < 1e-12);
        assert_eq!(g.pitch, 0.0);
        assert_eq!(group_pose(GroupMotion::Still, 1.0, (0.5, 0.5)), GroupPose::default());
    }

    #[test]
    fn group_lift_moves_points_up() {
        let g = GroupPose { lift: 2.0, yaw: 0.0, pitch: 0.0 };
        assert_eq!(g.apply(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(1.0, 3.0, 1.0));
    }

    #[test]
    fn smoother_eases_towards_pointer() {
        let mut m = MouseSmoother::default();
        let (x, y) = m.step((1.0, 0.5));
        assert!((x - 0.015).abs() < 1e-12);
        assert_eq!(y, 0.0);

        for _ in 0..1000 {
            m.step((1.0, 0.0));
        }
        assert!((m.x - 0.5).abs() < 1e-6);
        assert!((m.y + 0.5).abs() < 1e-6);
    }
}

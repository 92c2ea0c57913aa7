use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::model::{BodyKind, Camera, Rgb, SceneSpec, Vec3};
use super::motion::{pose, GroupPose};

const NEAR_PLANE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Pixels per world unit at this depth.
    pub scale: f64,
    pub depth: f64,
}

/// Perspective projection onto a `width` x `height` canvas. Returns `None`
/// for points at or behind the near plane.
pub fn project(camera: &Camera, point: Vec3, width: f64, height: f64) -> Option<Projected> {
    let depth = camera.position.z - point.z;
    if depth <= NEAR_PLANE {
        return None;
    }
    let focal = (height / 2.0) / (camera.fov_deg.to_radians() / 2.0).tan();
    let scale = focal / depth;
    Some(Projected {
        x: width / 2.0 + (point.x - camera.position.x) * scale,
        y: height / 2.0 - (point.y - camera.position.y) * scale,
        scale,
        depth,
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub kind: BodyKind,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub depth: f64,
    pub color: Rgb,
    pub alpha: f64,
    pub spin: f64,
    pub tilt: f64,
    pub distort: f64,
    pub speed: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Sorted far to near.
    pub sprites: Vec<Sprite>,
    pub dots: Vec<Dot>,
    pub time: f64,
}

pub fn build_frame(spec: &SceneSpec, t: f64, group: GroupPose, width: f64, height: f64) -> Frame {
    let visibility = |depth: f64| spec.fog.map_or(1.0, |fog| fog.visibility(depth));

    let mut sprites: Vec<Sprite> = spec
        .bodies
        .iter()
        .filter_map(|body| {
            let pose = pose(body, t);
            let world = group.apply(pose.position);
            let p = project(&spec.camera, world, width, height)?;
            Some(Sprite {
                kind: body.kind,
                x: p.x,
                y: p.y,
                radius: pose.scale * p.scale,
                depth: p.depth,
                color: body.color,
                alpha: body.opacity * visibility(p.depth),
                spin: pose.spin,
                tilt: pose.tilt,
                distort: body.distort,
                speed: body.speed,
            })
        })
        .collect();
    sprites.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    let dots = spec
        .particles
        .as_ref()
        .map(|field| {
            let (pitch_rate, yaw_rate) = field.spin;
            field
                .points
                .iter()
                .filter_map(|point| {
                    let world = group.apply(point.rotated(t * yaw_rate, t * pitch_rate));
                    let p = project(&spec.camera, world, width, height)?;
                    Some(Dot {
                        x: p.x,
                        y: p.y,
                        radius: (field.size * p.scale).max(0.5),
                        alpha: field.opacity * visibility(p.depth),
                    })
                })
                .filter(|d| d.x >= 0.0 && d.x <= width && d.y >= 0.0 && d.y <= height)
                .collect()
        })
        .unwrap_or_default();

    Frame { sprites, dots, time: t }
}

/// Offset of specular highlights, as a fraction of the radius, towards the key light.
pub fn highlight_direction(spec: &SceneSpec) -> (f64, f64) {
    match spec.key_light() {
        Some(light) => {
            let (x, y) = (light.position.x, light.position.y);
            let len = (x * x + y * y).sqrt();
            if len == 0.0 {
                (0.0, 0.0)
            } else {
                (x / len, -y / len)
            }
        }
        None => (-0.5, -0.5),
    }
}

pub fn paint(
    ctx: &CanvasRenderingContext2d,
    spec: &SceneSpec,
    frame: &Frame,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);

    if let Some(field) = &spec.particles {
        ctx.set_fill_style(&JsValue::from_str(&field.color.css(1.0)));
        for dot in &frame.dots {
            ctx.set_global_alpha(dot.alpha);
            ctx.begin_path();
            ctx.arc(dot.x, dot.y, dot.radius, 0.0, TAU)?;
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
    }

    let light = highlight_direction(spec);
    let ambient = spec.ambient();
    for sprite in &frame.sprites {
        if sprite.radius < 0.5 {
            continue;
        }
        ctx.save();
        ctx.set_global_alpha(sprite.alpha.clamp(0.0, 1.0));
        match sprite.kind {
            BodyKind::Glass | BodyKind::Crystal => paint_glass(ctx, sprite, light)?,
            BodyKind::Metallic | BodyKind::Distort => paint_metal(ctx, sprite, light, ambient, frame.time)?,
            BodyKind::Glow | BodyKind::Tiny => paint_glow(ctx, sprite, light)?,
            BodyKind::WireTorus => paint_torus(ctx, sprite)?,
        }
        ctx.restore();
    }

    Ok(())
}

fn highlight(sprite: &Sprite, light: (f64, f64)) -> (f64, f64) {
    (
        sprite.x + light.0 * sprite.radius * 0.35,
        sprite.y + light.1 * sprite.radius * 0.35,
    )
}

fn paint_glass(ctx: &CanvasRenderingContext2d, s: &Sprite, light: (f64, f64)) -> Result<(), JsValue> {
    let (hx, hy) = highlight(s, light);
    let gradient = ctx.create_radial_gradient(hx, hy, s.radius * 0.05, s.x, s.y, s.radius)?;
    gradient.add_color_stop(0.0, &Rgb(255, 255, 255).css(0.45))?;
    gradient.add_color_stop(0.35, &s.color.css(0.18))?;
    gradient.add_color_stop(0.85, &s.color.css(0.08))?;
    gradient.add_color_stop(1.0, &s.color.shade(0.4).css(0.35))?;

    ctx.begin_path();
    if s.kind == BodyKind::Crystal {
        facet_path(ctx, s, 10)?;
    } else {
        ctx.arc(s.x, s.y, s.radius, 0.0, TAU)?;
    }
    ctx.set_fill_style(&gradient.into());
    ctx.fill();

    ctx.set_line_width((s.radius * 0.02).max(1.0));
    ctx.set_stroke_style(&JsValue::from_str(&s.color.shade(0.6).css(0.3)));
    ctx.stroke();
    Ok(())
}

fn paint_metal(
    ctx: &CanvasRenderingContext2d,
    s: &Sprite,
    light: (f64, f64),
    ambient: f64,
    t: f64,
) -> Result<(), JsValue> {
    let (hx, hy) = highlight(s, light);
    let gradient = ctx.create_radial_gradient(hx, hy, 0.0, s.x, s.y, s.radius * 1.1)?;
    gradient.add_color_stop(0.0, &s.color.shade(0.75).css(1.0))?;
    gradient.add_color_stop(0.4, &s.color.css(1.0))?;
    gradient.add_color_stop(1.0, &s.color.shade(-(1.0 - ambient).clamp(0.3, 0.8)).css(1.0))?;

    ctx.begin_path();
    blob_path(ctx, s, t)?;
    ctx.set_fill_style(&gradient.into());
    ctx.fill();
    Ok(())
}

fn paint_glow(ctx: &CanvasRenderingContext2d, s: &Sprite, light: (f64, f64)) -> Result<(), JsValue> {
    let halo = ctx.create_radial_gradient(s.x, s.y, s.radius * 0.8, s.x, s.y, s.radius * 1.8)?;
    halo.add_color_stop(0.0, &s.color.css(0.15))?;
    halo.add_color_stop(1.0, &s.color.css(0.0))?;
    ctx.begin_path();
    ctx.arc(s.x, s.y, s.radius * 1.8, 0.0, TAU)?;
    ctx.set_fill_style(&halo.into());
    ctx.fill();

    let (hx, hy) = highlight(s, light);
    let core = ctx.create_radial_gradient(hx, hy, 0.0, s.x, s.y, s.radius)?;
    core.add_color_stop(0.0, &s.color.shade(0.6).css(1.0))?;
    core.add_color_stop(1.0, &s.color.shade(-0.2).css(1.0))?;
    ctx.begin_path();
    ctx.arc(s.x, s.y, s.radius, 0.0, TAU)?;
    ctx.set_fill_style(&core.into());
    ctx.fill();
    Ok(())
}

fn paint_torus(ctx: &CanvasRenderingContext2d, s: &Sprite) -> Result<(), JsValue> {
    // Major radius 1, tube 0.3: draw the tube as a stack of rings.
    let squash = s.tilt.cos().abs().max(0.15);
    ctx.set_line_width(1.0);
    ctx.set_stroke_style(&JsValue::from_str(&s.color.css(1.0)));
    for i in 0..9 {
        let k = -0.3 + 0.075 * i as f64;
        let rx = s.radius * (1.0 + k);
        ctx.begin_path();
        ctx.ellipse(s.x, s.y, rx, rx * squash, s.spin, 0.0, TAU)?;
        ctx.stroke();
    }
    Ok(())
}

fn blob_path(ctx: &CanvasRenderingContext2d, s: &Sprite, t: f64) -> Result<(), JsValue> {
    const STEPS: usize = 48;
    for i in 0..=STEPS {
        let a = i as f64 / STEPS as f64 * TAU;
        let wobble = (a * 3.0 + t * s.speed + s.spin).sin() * 0.6 + (a * 5.0 - t * s.speed * 0.7).sin() * 0.4;
        let r = s.radius * (1.0 + s.distort * 0.12 * wobble);
        let (x, y) = (s.x + r * a.cos(), s.y + r * a.sin());
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.close_path();
    Ok(())
}

fn facet_path(ctx: &CanvasRenderingContext2d, s: &Sprite, sides: usize) -> Result<(), JsValue> {
    for i in 0..=sides {
        let a = i as f64 / sides as f64 * TAU + s.spin;
        let (x, y) = (s.x + s.radius * a.cos(), s.y + s.radius * a.sin());
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.close_path();
    Ok(())
}

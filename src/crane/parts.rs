//! Vertex-list generators for the crane's rigid parts.
//!
//! Coordinates are clip space; the part matrices from [`super::pose`] do
//! the rest. Body, turret and boom are generated once; the wheels and the
//! cable+hook depend on state and are regenerated per frame with a
//! constant vertex count.

use std::f32::consts::TAU;

use crate::render::flat_pass::FlatVertex;

const YELLOW: [f32; 3] = [1.0, 0.9, 0.0];
const DARK_YELLOW: [f32; 3] = [0.85, 0.75, 0.0];
const LIGHT_BLUE: [f32; 3] = [0.6, 0.8, 1.0];
const BLACK: [f32; 3] = [0.1, 0.1, 0.1];
const SILVER: [f32; 3] = [0.7, 0.7, 0.7];
const WINDOW_FRAME: [f32; 3] = [0.2, 0.2, 0.2];

fn push_vertex(out: &mut Vec<FlatVertex>, x: f32, y: f32, color: [f32; 3]) {
    out.push(FlatVertex {
        position: [x, y],
        color,
    });
}

#[allow(clippy::too_many_arguments)]
fn push_triangle(
    out: &mut Vec<FlatVertex>,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    x3: f32,
    y3: f32,
    color: [f32; 3],
) {
    push_vertex(out, x1, y1, color);
    push_vertex(out, x2, y2, color);
    push_vertex(out, x3, y3, color);
}

#[allow(clippy::too_many_arguments)]
fn push_quad(
    out: &mut Vec<FlatVertex>,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    x3: f32,
    y3: f32,
    x4: f32,
    y4: f32,
    color: [f32; 3],
) {
    push_triangle(out, x1, y1, x2, y2, x3, y3, color);
    push_triangle(out, x1, y1, x3, y3, x4, y4, color);
}

/// Chassis body: frame, cabin, windows, door, bumpers and outriggers.
pub fn body() -> Vec<FlatVertex> {
    let mut v = Vec::with_capacity(132);
    let metal_gray = [0.4, 0.4, 0.4];
    let white = [1.0, 1.0, 1.0];

    // main chassis and reinforcement
    push_quad(&mut v, -0.7, -0.32, 0.7, -0.32, 0.7, -0.18, -0.7, -0.18, YELLOW);
    push_quad(&mut v, -0.7, -0.32, -0.68, -0.32, -0.68, -0.18, -0.7, -0.18, DARK_YELLOW);
    push_quad(&mut v, 0.68, -0.32, 0.7, -0.32, 0.7, -0.18, 0.68, -0.18, DARK_YELLOW);

    // cabin
    push_quad(&mut v, -0.7, -0.18, -0.2, -0.18, -0.2, 0.25, -0.7, 0.25, YELLOW);
    push_quad(&mut v, -0.7, 0.25, -0.55, 0.25, -0.55, 0.35, -0.7, 0.35, YELLOW);
    push_quad(&mut v, -0.55, 0.25, -0.2, 0.25, -0.2, 0.3, -0.55, 0.35, YELLOW);
    push_quad(&mut v, -0.7, -0.18, -0.7, 0.35, -0.72, 0.33, -0.72, -0.18, DARK_YELLOW);

    // bumpers
    push_quad(&mut v, -0.72, -0.32, -0.7, -0.32, -0.7, -0.18, -0.72, -0.18, DARK_YELLOW);
    push_quad(&mut v, 0.7, -0.32, 0.72, -0.32, 0.72, -0.18, 0.7, -0.18, DARK_YELLOW);

    // windows
    push_quad(&mut v, -0.69, 0.03, -0.63, 0.03, -0.63, 0.23, -0.69, 0.23, LIGHT_BLUE);
    push_quad(&mut v, -0.695, 0.025, -0.685, 0.025, -0.685, 0.235, -0.695, 0.235, WINDOW_FRAME);
    push_quad(&mut v, -0.6, 0.03, -0.45, 0.03, -0.45, 0.23, -0.6, 0.23, LIGHT_BLUE);
    push_quad(&mut v, -0.42, 0.03, -0.23, 0.03, -0.23, 0.23, -0.42, 0.23, LIGHT_BLUE);

    // door
    push_quad(&mut v, -0.5, -0.18, -0.35, -0.18, -0.35, 0.15, -0.5, 0.15, DARK_YELLOW);
    push_quad(&mut v, -0.48, -0.15, -0.37, -0.15, -0.37, -0.13, -0.48, -0.13, WINDOW_FRAME);

    // outriggers
    push_quad(&mut v, -0.68, -0.18, -0.62, -0.18, -0.62, -0.35, -0.68, -0.35, YELLOW);
    push_quad(&mut v, 0.62, -0.18, 0.68, -0.18, 0.68, -0.35, 0.62, -0.35, YELLOW);
    push_quad(&mut v, -0.72, -0.35, -0.58, -0.35, -0.58, -0.33, -0.72, -0.33, metal_gray);
    push_quad(&mut v, 0.58, -0.35, 0.72, -0.35, 0.72, -0.33, 0.58, -0.33, metal_gray);

    // details
    push_quad(&mut v, -0.4, -0.3, -0.35, -0.3, -0.35, -0.28, -0.4, -0.28, metal_gray);
    push_quad(&mut v, -0.3, 0.05, -0.24, 0.05, -0.24, 0.12, -0.3, 0.12, white);
    push_quad(&mut v, -0.7, -0.05, -0.68, -0.05, -0.68, 0.02, -0.7, 0.02, WINDOW_FRAME);

    v
}

/// Turret platform with counterweight and exhaust.
pub fn turret() -> Vec<FlatVertex> {
    let mut v = Vec::with_capacity(48);
    let orange = [0.9, 0.5, 0.0];
    let metal_gray = [0.4, 0.4, 0.4];

    // platform
    push_quad(&mut v, -0.2, -0.18, 0.5, -0.18, 0.5, 0.18, -0.2, 0.18, YELLOW);
    push_quad(&mut v, -0.22, -0.18, -0.2, -0.18, -0.2, 0.18, -0.22, 0.18, DARK_YELLOW);
    push_quad(&mut v, 0.5, -0.18, 0.52, -0.18, 0.52, 0.18, 0.5, 0.18, DARK_YELLOW);

    // counterweight
    push_quad(&mut v, 0.5, -0.18, 0.8, -0.18, 0.8, 0.2, 0.5, 0.2, YELLOW);
    push_quad(&mut v, 0.55, 0.2, 0.75, 0.2, 0.75, 0.35, 0.55, 0.35, YELLOW);
    push_quad(&mut v, 0.56, 0.22, 0.74, 0.22, 0.74, 0.25, 0.56, 0.25, orange);
    push_quad(&mut v, 0.56, 0.28, 0.74, 0.28, 0.74, 0.31, 0.56, 0.31, orange);

    // exhaust
    push_quad(&mut v, 0.48, 0.1, 0.5, 0.1, 0.5, 0.25, 0.48, 0.25, metal_gray);

    v
}

/// Boom arm with pivot housing, hydraulic ram and pulley block.
pub fn boom() -> Vec<FlatVertex> {
    let mut v = Vec::with_capacity(48);
    let metal_gray = [0.5, 0.5, 0.5];
    let hydraulic_blue = [0.2, 0.3, 0.5];
    let red = [0.8, 0.1, 0.1];

    // pivot housing
    push_quad(&mut v, -0.08, -0.05, 0.08, -0.05, 0.08, 0.11, -0.08, 0.11, YELLOW);
    push_quad(&mut v, -0.09, -0.06, -0.07, -0.06, -0.07, 0.12, -0.09, 0.12, DARK_YELLOW);
    push_quad(&mut v, 0.07, -0.06, 0.09, -0.06, 0.09, 0.12, 0.07, 0.12, DARK_YELLOW);

    // main boom
    push_quad(&mut v, -0.04, 0.11, 0.04, 0.11, 0.54, 0.63, 0.48, 0.65, YELLOW);
    push_quad(&mut v, -0.045, 0.10, -0.03, 0.10, 0.47, 0.64, 0.45, 0.66, DARK_YELLOW);
    push_quad(&mut v, -0.02, 0.11, 0.02, 0.11, 0.52, 0.63, 0.5, 0.63, metal_gray);

    // hydraulic ram and pulley block
    push_quad(&mut v, -0.01, -0.02, 0.01, -0.02, 0.25, 0.33, 0.23, 0.33, hydraulic_blue);
    push_quad(&mut v, 0.48, 0.62, 0.54, 0.62, 0.54, 0.66, 0.48, 0.66, red);

    v
}

/// Cable running from the pulley down to the hook; `hook_y` is the top of
/// the hook block in boom-local space.
pub fn cable_and_hook(hook_y: f32) -> Vec<FlatVertex> {
    let mut v = Vec::with_capacity(18);
    push_quad(&mut v, 0.485, 0.59, 0.505, 0.59, 0.505, hook_y, 0.485, hook_y, BLACK);
    push_quad(&mut v, 0.47, hook_y, 0.53, hook_y, 0.53, hook_y - 0.07, 0.47, hook_y - 0.07, SILVER);
    push_quad(
        &mut v,
        0.47,
        hook_y - 0.07,
        0.53,
        hook_y - 0.07,
        0.55,
        hook_y - 0.09,
        0.49,
        hook_y - 0.09,
        SILVER,
    );
    v
}

const WHEEL_POSITIONS: [f32; 4] = [-0.55, -0.15, 0.15, 0.55];
const WHEEL_Y: f32 = -0.35;
const WHEEL_RADIUS: f32 = 0.09;
const RIM_RADIUS: f32 = 0.045;
const TIRE_SEGMENTS: usize = 24;
const RIM_SEGMENTS: usize = 20;

/// All four wheels, spun by `rotation` radians.
pub fn wheels(rotation: f32) -> Vec<FlatVertex> {
    let mut v = Vec::with_capacity(1848);
    let bright_silver = [0.75, 0.75, 0.75];
    let orange_hub = [0.9, 0.5, 0.1];
    let bright_white = [0.95, 0.95, 0.95];
    let red_bolt = [0.9, 0.1, 0.1];

    for &center_x in &WHEEL_POSITIONS {
        // tire
        for i in 0..TIRE_SEGMENTS {
            let angle1 = TAU * i as f32 / TIRE_SEGMENTS as f32 + rotation;
            let angle2 = TAU * (i + 1) as f32 / TIRE_SEGMENTS as f32 + rotation;
            let shade = if i % 2 == 0 { 0.15 } else { 0.25 };
            push_triangle(
                &mut v,
                center_x,
                WHEEL_Y,
                center_x + WHEEL_RADIUS * angle1.cos(),
                WHEEL_Y + WHEEL_RADIUS * angle1.sin(),
                center_x + WHEEL_RADIUS * angle2.cos(),
                WHEEL_Y + WHEEL_RADIUS * angle2.sin(),
                [shade, shade, shade],
            );
        }

        // tread pattern
        for i in 0..TIRE_SEGMENTS {
            let angle1 = TAU * i as f32 / TIRE_SEGMENTS as f32 + rotation;
            let angle2 = TAU * (i + 1) as f32 / TIRE_SEGMENTS as f32 + rotation;
            let inner = WHEEL_RADIUS * 0.85;
            let outer = WHEEL_RADIUS * 0.95;
            let tread_color = if i % 4 == 0 {
                [0.9, 0.8, 0.1]
            } else {
                [0.08, 0.08, 0.08]
            };
            push_quad(
                &mut v,
                center_x + inner * angle1.cos(),
                WHEEL_Y + inner * angle1.sin(),
                center_x + outer * angle1.cos(),
                WHEEL_Y + outer * angle1.sin(),
                center_x + outer * angle2.cos(),
                WHEEL_Y + outer * angle2.sin(),
                center_x + inner * angle2.cos(),
                WHEEL_Y + inner * angle2.sin(),
                tread_color,
            );
        }

        // rim
        for i in 0..RIM_SEGMENTS {
            let angle1 = TAU * i as f32 / RIM_SEGMENTS as f32 + rotation;
            let angle2 = TAU * (i + 1) as f32 / RIM_SEGMENTS as f32 + rotation;
            push_triangle(
                &mut v,
                center_x,
                WHEEL_Y,
                center_x + RIM_RADIUS * angle1.cos(),
                WHEEL_Y + RIM_RADIUS * angle1.sin(),
                center_x + RIM_RADIUS * angle2.cos(),
                WHEEL_Y + RIM_RADIUS * angle2.sin(),
                bright_silver,
            );
        }

        // hub
        for i in 0..12 {
            let angle1 = TAU * i as f32 / 12.0 + rotation;
            let angle2 = TAU * (i + 1) as f32 / 12.0 + rotation;
            push_triangle(
                &mut v,
                center_x,
                WHEEL_Y,
                center_x + 0.02 * angle1.cos(),
                WHEEL_Y + 0.02 * angle1.sin(),
                center_x + 0.02 * angle2.cos(),
                WHEEL_Y + 0.02 * angle2.sin(),
                orange_hub,
            );
        }

        // spokes
        for spoke in 0..5 {
            let spoke_angle = TAU / 5.0 * spoke as f32 + rotation;
            let spoke_width = 0.01;
            let perp = spoke_angle + TAU / 4.0;
            let x1 = center_x + 0.02 * spoke_angle.cos();
            let y1 = WHEEL_Y + 0.02 * spoke_angle.sin();
            let x2 = center_x + RIM_RADIUS * 0.85 * spoke_angle.cos();
            let y2 = WHEEL_Y + RIM_RADIUS * 0.85 * spoke_angle.sin();
            push_quad(
                &mut v,
                x1 + spoke_width * perp.cos(),
                y1 + spoke_width * perp.sin(),
                x2 + spoke_width * perp.cos(),
                y2 + spoke_width * perp.sin(),
                x2 - spoke_width * perp.cos(),
                y2 - spoke_width * perp.sin(),
                x1 - spoke_width * perp.cos(),
                y1 - spoke_width * perp.sin(),
                bright_white,
            );
        }

        // bolts
        for bolt in 0..5 {
            let bolt_angle = TAU / 5.0 * bolt as f32 + rotation;
            let bolt_x = center_x + RIM_RADIUS * 0.6 * bolt_angle.cos();
            let bolt_y = WHEEL_Y + RIM_RADIUS * 0.6 * bolt_angle.sin();
            for i in 0..8 {
                let angle1 = TAU * i as f32 / 8.0;
                let angle2 = TAU * (i + 1) as f32 / 8.0;
                push_triangle(
                    &mut v,
                    bolt_x,
                    bolt_y,
                    bolt_x + 0.01 * angle1.cos(),
                    bolt_y + 0.01 * angle1.sin(),
                    bolt_x + 0.01 * angle2.cos(),
                    bolt_y + 0.01 * angle2.sin(),
                    red_bolt,
                );
            }
        }
    }

    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_part_sizes() {
        assert_eq!(body().len(), 132);
        assert_eq!(turret().len(), 48);
        assert_eq!(boom().len(), 48);
    }

    #[test]
    fn test_dynamic_parts_keep_constant_counts() {
        // The per-frame buffers are sized once; regeneration must never
        // change the vertex count.
        assert_eq!(wheels(0.0).len(), wheels(2.3).len());
        assert_eq!(cable_and_hook(-0.1).len(), cable_and_hook(0.5).len());
        assert_eq!(wheels(0.0).len(), 1848);
        assert_eq!(cable_and_hook(0.35).len(), 18);
    }

    #[test]
    fn test_cable_follows_hook_height() {
        let high = cable_and_hook(0.5);
        let low = cable_and_hook(-0.1);
        // The cable's lower edge sits at hook height.
        assert!(high.iter().any(|v| (v.position[1] - 0.5).abs() < 1e-6));
        assert!(low.iter().any(|v| (v.position[1] - -0.1).abs() < 1e-6));
        // The hook tip hangs 0.09 below.
        assert!(low.iter().any(|v| (v.position[1] - -0.19).abs() < 1e-6));
    }

    #[test]
    fn test_wheels_rotate_about_their_centers() {
        // Spinning must not move any vertex out of the wheel's disk.
        for vert in wheels(1.0) {
            let [x, y] = vert.position;
            let closest = WHEEL_POSITIONS
                .iter()
                .map(|&cx| ((x - cx).powi(2) + (y - WHEEL_Y).powi(2)).sqrt())
                .fold(f32::MAX, f32::min);
            assert!(closest <= WHEEL_RADIUS + 1e-4);
        }
    }
}

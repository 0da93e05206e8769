//! Procedural airliner model, built as per-frame instance lists over the
//! three unit meshes (cube, cylinder, cone).
//!
//! Each builder mirrors one assembly of the aircraft; the transforms are
//! composed translate → rotate → scale, with the unit shapes spanning
//! ±0.5 (cube) or radius 1, height 1 (cylinder, cone).

use cgmath::{Deg, Matrix4, Rad, Vector3};

use super::state::{FlightState, ViewMode};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Cube,
    Cylinder,
    Cone,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModelInstance {
    pub shape: Shape,
    pub transform: Matrix4<f32>,
    pub color: [f32; 3],
}

const WHITE: [f32; 3] = [0.98, 0.98, 0.99];
const DARK_BLUE: [f32; 3] = [0.08, 0.35, 0.75];
const WINDOW_TINT: [f32; 3] = [0.15, 0.25, 0.4];

fn translate(x: f32, y: f32, z: f32) -> Matrix4<f32> {
    Matrix4::from_translation(Vector3::new(x, y, z))
}

fn scale(x: f32, y: f32, z: f32) -> Matrix4<f32> {
    Matrix4::from_nonuniform_scale(x, y, z)
}

fn cube(out: &mut Vec<ModelInstance>, transform: Matrix4<f32>, color: [f32; 3]) {
    out.push(ModelInstance {
        shape: Shape::Cube,
        transform,
        color,
    });
}

fn cylinder(out: &mut Vec<ModelInstance>, transform: Matrix4<f32>, color: [f32; 3]) {
    out.push(ModelInstance {
        shape: Shape::Cylinder,
        transform,
        color,
    });
}

fn cone(out: &mut Vec<ModelInstance>, transform: Matrix4<f32>, color: [f32; 3]) {
    out.push(ModelInstance {
        shape: Shape::Cone,
        transform,
        color,
    });
}

/// Everything visible for the current view mode.
pub fn build_instances(state: &FlightState) -> Vec<ModelInstance> {
    let mut out = Vec::with_capacity(2048);
    match state.view_mode {
        ViewMode::Exterior => {
            ground_and_runway(&mut out);
            fuselage(&mut out);
            passenger_windows(&mut out);
            cockpit_windows(&mut out);
            door(&mut out, state.door_angle);
            emergency_exits(&mut out);
            wings(&mut out);
            tail_wings(&mut out);
            vertical_stabilizer(&mut out);
            engines(&mut out);
            landing_gear(&mut out, state.wheel_rotation);
        }
        ViewMode::Cabin => {
            cabin_floor(&mut out);
            aisle(&mut out);
            cabin_seats(&mut out);
            overhead_compartments(&mut out);
            cabin_ceiling(&mut out, state.cabin_light);
            galley(&mut out);
            lavatory(&mut out);
        }
        ViewMode::Cockpit => {
            cockpit_interior(&mut out);
        }
    }
    out
}

fn ground_and_runway(out: &mut Vec<ModelInstance>) {
    cube(out, translate(0.0, -2.0, 0.0) * scale(120.0, 0.1, 120.0), [0.35, 0.38, 0.35]);
    cube(out, translate(0.0, -1.95, 0.0) * scale(80.0, 0.02, 8.0), [0.25, 0.25, 0.28]);
    for i in -12..12 {
        cube(
            out,
            translate(i as f32 * 2.8, -1.93, 0.0) * scale(1.8, 0.01, 0.3),
            [0.95, 0.95, 0.1],
        );
    }
}

fn fuselage(out: &mut Vec<ModelInstance>) {
    // main body, cylindrical sections
    for i in 0..24 {
        let x = 5.5 - i as f32 * 0.55;
        cylinder(
            out,
            translate(x, 0.0, 0.0) * Matrix4::from_angle_z(Deg(90.0)) * scale(1.1, 0.55, 1.1),
            WHITE,
        );
    }

    // stripe along the fuselage, with a lower accent line
    for i in 2..22 {
        let x = 5.5 - i as f32 * 0.55;
        cube(out, translate(x, 0.35, 0.0) * scale(0.56, 0.28, 1.13), DARK_BLUE);
        cube(out, translate(x, 0.05, 0.0) * scale(0.56, 0.08, 1.13), DARK_BLUE);
    }

    // tapered nose
    for i in 0..5 {
        let x = 6.0 + i as f32 * 0.4;
        let s = 1.0 - i as f32 * 0.18;
        cylinder(
            out,
            translate(x, 0.0, 0.0) * Matrix4::from_angle_z(Deg(90.0)) * scale(1.1 * s, 0.4, 1.1 * s),
            WHITE,
        );
    }
    cone(
        out,
        translate(8.2, 0.0, 0.0) * Matrix4::from_angle_z(Deg(-90.0)) * scale(0.25, 0.6, 0.25),
        WHITE,
    );

    // tail taper, lifting slightly
    for i in 0..6 {
        let x = -7.8 - i as f32 * 0.4;
        let s = 1.0 - i as f32 * 0.12;
        let y = i as f32 * 0.08;
        cylinder(
            out,
            translate(x, y, 0.0) * Matrix4::from_angle_z(Deg(90.0)) * scale(1.1 * s, 0.4, 1.1 * s),
            WHITE,
        );
    }
}

fn cockpit_windows(out: &mut Vec<ModelInstance>) {
    let frame = [0.6, 0.6, 0.65];

    // center windshield panels
    cube(out, translate(7.1, 0.5, 0.25) * scale(0.7, 0.5, 0.02), WINDOW_TINT);
    cube(out, translate(7.1, 0.5, -0.25) * scale(0.7, 0.5, 0.02), WINDOW_TINT);
    // upper windshield
    cube(out, translate(7.0, 0.72, 0.0) * scale(0.85, 0.15, 0.52), WINDOW_TINT);

    // frames
    cube(out, translate(7.1, 0.5, 0.0) * scale(0.68, 0.48, 0.03), frame);
    cube(out, translate(7.15, 0.5, 0.26) * scale(0.02, 0.45, 0.02), frame);
    cube(out, translate(7.15, 0.5, -0.26) * scale(0.02, 0.45, 0.02), frame);

    // side windows
    cube(out, translate(6.7, 0.42, 0.55) * scale(0.5, 0.38, 0.02), WINDOW_TINT);
    cube(out, translate(6.7, 0.42, -0.55) * scale(0.5, 0.38, 0.02), WINDOW_TINT);
}

fn passenger_windows(out: &mut Vec<ModelInstance>) {
    for i in 0..28 {
        let x = 5.0 - i as f32 * 0.42;
        for z in [0.56f32, -0.56] {
            cube(out, translate(x, 0.32, z) * scale(0.32, 0.26, 0.025), [0.2, 0.2, 0.22]);
            let z_glass = if z > 0.0 { z + 0.013 } else { z - 0.013 };
            cube(
                out,
                translate(x, 0.32, z_glass) * scale(0.24, 0.18, 0.008),
                [0.4, 0.55, 0.75],
            );
        }
    }
}

fn wings(out: &mut Vec<ModelInstance>) {
    let wing_color = [0.96, 0.96, 0.97];

    for side in 0..2 {
        let dir = if side == 0 { 1.0f32 } else { -1.0 };

        for i in 0..8 {
            let z = (1.1 + i as f32 * 0.55) * dir;
            let s = 1.0 - i as f32 * 0.1;
            let x_offset = i as f32 * 0.1;

            cube(
                out,
                translate(0.3 - x_offset, -0.32, z) * scale(4.0 * s, 0.12, 0.55),
                wing_color,
            );
            cube(
                out,
                translate(2.2 - x_offset, -0.3, z) * scale(0.25, 0.14, 0.56),
                wing_color,
            );
            if (1..5).contains(&i) {
                cube(
                    out,
                    translate(-1.6 - x_offset, -0.35, z) * scale(0.7, 0.08, 0.5),
                    [0.9, 0.9, 0.91],
                );
            }
        }

        // winglet with a blue tip
        cube(out, translate(-0.5, 0.3, 5.6 * dir) * scale(1.2, 0.9, 0.12), wing_color);
        cube(out, translate(-0.7, 0.75, 5.6 * dir) * scale(0.6, 0.3, 0.1), DARK_BLUE);
    }
}

fn tail_wings(out: &mut Vec<ModelInstance>) {
    for side in 0..2 {
        let dir = if side == 0 { 1.0f32 } else { -1.0 };
        for i in 0..4 {
            let z = (0.5 + i as f32 * 0.4) * dir;
            let s = 1.0 - i as f32 * 0.2;
            cube(
                out,
                translate(-9.0 + i as f32 * 0.1, 0.55, z) * scale(1.8 * s, 0.1, 0.4),
                [0.94, 0.94, 0.94],
            );
        }
    }
}

fn vertical_stabilizer(out: &mut Vec<ModelInstance>) {
    for i in 0..8 {
        let y = 0.7 + i as f32 * 0.38;
        let s = 1.0 - i as f32 * 0.12;
        let x_offset = i as f32 * 0.15;
        cube(
            out,
            translate(-9.2 - x_offset, y, 0.0) * scale(1.8 * s, 0.35, 0.3),
            DARK_BLUE,
        );
    }
    cube(out, translate(-10.5, 3.5, 0.0) * scale(0.7, 0.35, 0.28), WHITE);
}

fn engines(out: &mut Vec<ModelInstance>) {
    let engine_grey = [0.75, 0.75, 0.78];
    let dark_grey = [0.35, 0.35, 0.38];

    for z in [3.0f32, -3.0] {
        // pylon
        cube(out, translate(1.0, -0.55, z) * scale(0.8, 0.7, 0.35), engine_grey);

        // nacelle sections
        for i in 0..5 {
            let x = 1.8 - i as f32 * 0.45;
            cylinder(
                out,
                translate(x, -1.0, z) * Matrix4::from_angle_z(Deg(90.0)) * scale(0.6, 0.45, 0.6),
                engine_grey,
            );
        }

        cylinder(
            out,
            translate(2.4, -1.0, z) * Matrix4::from_angle_z(Deg(90.0)) * scale(0.5, 0.12, 0.5),
            dark_grey,
        );
        cylinder(
            out,
            translate(-0.5, -1.0, z) * Matrix4::from_angle_z(Deg(90.0)) * scale(0.45, 0.15, 0.45),
            dark_grey,
        );

        // fan blades
        for b in 0..8 {
            let blade = translate(2.45, -1.0, z) * Matrix4::from_angle_x(Deg(b as f32 * 45.0));
            cube(
                out,
                blade * translate(0.0, 0.15, 0.0) * scale(0.04, 0.3, 0.06),
                [0.55, 0.55, 0.6],
            );
        }
    }
}

/// One landing-gear wheel stack (tire, rim, hub) at `(x, y, z)`, spun by
/// `rotation` about its axle.
fn wheel(out: &mut Vec<ModelInstance>, x: f32, y: f32, z: f32, rotation: f32, sizes: [[f32; 3]; 3]) {
    let colors = [[0.1, 0.1, 0.1], [0.7, 0.7, 0.7], [0.85, 0.85, 0.85]];
    for ([sx, sy, sz], color) in sizes.into_iter().zip(colors) {
        cylinder(
            out,
            translate(x, y, z)
                * Matrix4::from_angle_x(Deg(90.0))
                * Matrix4::from_angle_y(Rad(rotation))
                * scale(sx, sy, sz),
            color,
        );
    }
}

fn landing_gear(out: &mut Vec<ModelInstance>, wheel_rotation: f32) {
    // nose gear
    cube(out, translate(5.5, -0.7, 0.0) * scale(0.15, 1.3, 0.15), [0.3, 0.3, 0.3]);
    for z in [0.22f32, -0.22] {
        wheel(
            out,
            5.5,
            -1.4,
            z,
            wheel_rotation,
            [[0.35, 0.25, 0.35], [0.25, 0.26, 0.25], [0.12, 0.27, 0.12]],
        );
    }

    // main gear bogies
    for z in [1.8f32, -1.8] {
        cube(out, translate(0.5, -0.85, z) * scale(0.25, 1.1, 0.25), [0.3, 0.3, 0.3]);
        cube(out, translate(0.5, -1.45, z) * scale(0.4, 0.18, 0.85), [0.35, 0.35, 0.35]);
        for w in 0..2 {
            let z_offset = z + if w == 0 { -0.3 } else { 0.3 };
            wheel(
                out,
                0.5,
                -1.5,
                z_offset,
                wheel_rotation,
                [[0.45, 0.28, 0.45], [0.32, 0.29, 0.32], [0.15, 0.3, 0.15]],
            );
        }
    }
}

fn door(out: &mut Vec<ModelInstance>, door_angle: f32) {
    let door_base = translate(3.5, -0.15, 0.57) * Matrix4::from_angle_y(Rad(-door_angle));

    // body, window, handle, frame
    cube(out, door_base * scale(1.0, 1.5, 0.12), [0.65, 0.25, 0.25]);
    cube(
        out,
        door_base * translate(0.0, 0.35, 0.065) * scale(0.7, 0.75, 0.015),
        [0.3, 0.4, 0.6],
    );
    cube(
        out,
        door_base * translate(-0.38, 0.0, 0.065) * scale(0.12, 0.22, 0.03),
        [0.5, 0.5, 0.55],
    );
    cube(out, door_base * scale(1.05, 1.55, 0.08), [0.3, 0.3, 0.3]);
}

fn emergency_exits(out: &mut Vec<ModelInstance>) {
    for x in [1.5f32, -2.0, -5.5] {
        for z in [0.565f32, -0.565] {
            cube(out, translate(x, -0.2, z) * scale(0.55, 0.95, 0.025), [0.85, 0.25, 0.25]);
        }
    }
}

fn cabin_seats(out: &mut Vec<ModelInstance>) {
    let seat_color = [0.18, 0.18, 0.2];
    let headrest_color = [0.15, 0.15, 0.17];
    let frame_color = [0.12, 0.12, 0.12];

    for row in 0..24 {
        let x = 4.5 - row as f32 * 0.45;
        for side in [1.0f32, -1.0] {
            for seat in 0..3 {
                let z = side * (0.55 + seat as f32 * 0.28);

                cube(out, translate(x, -0.42, z) * scale(0.28, 0.1, 0.25), seat_color);

                let back = translate(x - 0.12, -0.18, z) * Matrix4::from_angle_z(Deg(-8.0));
                cube(out, back * scale(0.08, 0.52, 0.25), seat_color);

                cube(
                    out,
                    translate(x - 0.14, 0.18, z) * scale(0.07, 0.18, 0.2),
                    headrest_color,
                );

                if seat < 2 {
                    cube(
                        out,
                        translate(x, -0.36, z + side * 0.14) * scale(0.25, 0.045, 0.06),
                        frame_color,
                    );
                }
            }
        }
    }
}

fn aisle(out: &mut Vec<ModelInstance>) {
    cube(out, translate(-2.0, -0.54, 0.0) * scale(15.0, 0.01, 0.45), [0.35, 0.3, 0.38]);
    for i in 0..30 {
        let x = 5.0 - i as f32 * 0.42;
        cube(out, translate(x, -0.535, 0.0) * scale(0.08, 0.005, 0.4), [0.4, 0.35, 0.42]);
    }
}

fn overhead_compartments(out: &mut Vec<ModelInstance>) {
    for i in 0..24 {
        let x = 4.5 - i as f32 * 0.45;
        for z in [0.62f32, -0.62] {
            cube(out, translate(x, 0.85, z) * scale(0.4, 0.3, 0.38), [0.9, 0.9, 0.92]);
            cube(out, translate(x, 0.72, z) * scale(0.4, 0.03, 0.39), [0.8, 0.8, 0.82]);
        }
    }
}

fn cabin_ceiling(out: &mut Vec<ModelInstance>, light_on: bool) {
    cube(out, translate(-2.0, 1.05, 0.0) * scale(15.0, 0.04, 1.3), [0.94, 0.94, 0.95]);

    let light_color = if light_on {
        [1.0, 0.98, 0.92]
    } else {
        [0.3, 0.3, 0.32]
    };

    for i in 0..28 {
        let x = 5.0 - i as f32 * 0.45;
        cube(out, translate(x, 1.03, 0.0) * scale(0.32, 0.015, 0.25), light_color);

        if light_on {
            for z in [0.58f32, -0.58] {
                cube(out, translate(x, 0.99, z) * scale(0.25, 0.015, 0.08), [0.5, 0.7, 1.0]);
            }
        }
    }
}

fn cabin_floor(out: &mut Vec<ModelInstance>) {
    cube(out, translate(-2.0, -0.55, 0.0) * scale(15.0, 0.02, 1.1), [0.45, 0.4, 0.38]);
}

fn galley(out: &mut Vec<ModelInstance>) {
    for z in [0.62f32, -0.62] {
        cube(out, translate(5.5, 0.0, z) * scale(1.4, 1.15, 0.42), [0.78, 0.78, 0.8]);
        cube(out, translate(5.5, 0.55, z) * scale(1.35, 0.05, 0.4), [0.88, 0.88, 0.9]);
    }
}

fn lavatory(out: &mut Vec<ModelInstance>) {
    for z in [0.55f32, -0.55] {
        cube(out, translate(-9.5, 0.0, z) * scale(1.4, 1.35, 0.48), [0.9, 0.9, 0.92]);
        cube(out, translate(-8.85, -0.1, z) * scale(0.05, 1.05, 0.42), [0.7, 0.7, 0.72]);
        // occupancy indicator
        cube(out, translate(-8.83, 0.38, z) * scale(0.02, 0.1, 0.12), [0.2, 0.85, 0.2]);
    }
}

fn cockpit_interior(out: &mut Vec<ModelInstance>) {
    let black_panel = [0.05, 0.05, 0.05];
    let dark_grey = [0.12, 0.12, 0.12];
    let screen_blue = [0.15, 0.3, 0.5];
    let screen_green = [0.1, 0.25, 0.15];
    let sky_blue = [0.4, 0.7, 1.0];
    let ground_brown = [0.6, 0.45, 0.3];
    let button_white = [0.85, 0.85, 0.85];
    let seat_black = [0.08, 0.08, 0.1];

    // pilot seats
    for z in [0.32f32, -0.32] {
        cube(out, translate(6.8, -0.28, z) * scale(0.35, 0.58, 0.35), seat_black);
        cube(out, translate(6.85, -0.42, z) * scale(0.3, 0.12, 0.3), [0.1, 0.1, 0.12]);
        cube(out, translate(6.72, 0.1, z) * scale(0.08, 0.18, 0.2), seat_black);
        cube(out, translate(6.85, -0.3, z + 0.18) * scale(0.28, 0.05, 0.04), seat_black);
        cube(out, translate(6.85, -0.3, z - 0.18) * scale(0.28, 0.05, 0.04), seat_black);
    }

    // glareshield and instrument panel
    cube(out, translate(7.35, -0.02, 0.0) * scale(0.55, 0.65, 0.95), dark_grey);
    cube(out, translate(7.35, 0.3, 0.0) * scale(0.5, 0.08, 0.9), black_panel);

    // primary flight displays, captain and first officer
    for z in [0.28f32, -0.28] {
        cube(out, translate(7.32, 0.08, z) * scale(0.03, 0.28, 0.28), black_panel);
        cube(out, translate(7.30, 0.08, z) * scale(0.01, 0.24, 0.24), screen_blue);

        // artificial horizon: sky above, ground below, line between
        cube(out, translate(7.295, 0.14, z) * scale(0.008, 0.12, 0.2), sky_blue);
        cube(out, translate(7.295, 0.02, z) * scale(0.008, 0.12, 0.2), ground_brown);
        cube(out, translate(7.29, 0.08, z) * scale(0.005, 0.01, 0.18), [1.0, 1.0, 1.0]);

        // pitch ladder
        for p in [-1.0f32, 1.0] {
            cube(
                out,
                translate(7.29, 0.08 + p * 0.04, z) * scale(0.005, 0.005, 0.1),
                [1.0, 1.0, 1.0],
            );
        }

        // airspeed and altitude tapes, heading strip
        cube(out, translate(7.295, 0.08, z - 0.1) * scale(0.008, 0.15, 0.04), [0.2, 0.9, 0.2]);
        cube(out, translate(7.295, 0.08, z + 0.1) * scale(0.008, 0.15, 0.04), [0.2, 0.9, 0.2]);
        cube(out, translate(7.295, -0.08, z) * scale(0.008, 0.03, 0.18), [1.0, 1.0, 1.0]);
    }

    // navigation display with compass rose
    cube(out, translate(7.32, 0.08, 0.0) * scale(0.03, 0.22, 0.22), black_panel);
    cube(out, translate(7.30, 0.08, 0.0) * scale(0.01, 0.18, 0.18), screen_green);
    for i in 0..12 {
        let angle = (i as f32 * 30.0f32).to_radians();
        let cx = 0.07 * angle.cos();
        let cy = 0.07 * angle.sin();
        cube(
            out,
            translate(7.295, 0.08 + cy, cx) * scale(0.005, 0.008, 0.008),
            [1.0, 1.0, 1.0],
        );
    }

    // engine display with two circular gauges
    cube(out, translate(7.32, -0.2, 0.0) * scale(0.03, 0.18, 0.35), black_panel);
    cube(out, translate(7.30, -0.2, 0.0) * scale(0.01, 0.14, 0.3), screen_green);
    for ez in [0.08f32, -0.08] {
        for seg in 0..12 {
            let angle = (seg as f32 * 30.0f32).to_radians();
            cube(
                out,
                translate(7.295, -0.2 + 0.04 * angle.cos(), ez + 0.04 * angle.sin())
                    * scale(0.005, 0.006, 0.006),
                [0.3, 1.0, 0.3],
            );
        }
    }

    // throttle pedestal with dual levers
    cube(out, translate(6.95, -0.35, 0.0) * scale(0.5, 0.25, 0.35), dark_grey);
    for z in [0.08f32, -0.08] {
        cube(out, translate(7.0, -0.18, z) * scale(0.08, 0.22, 0.05), black_panel);
        cube(out, translate(7.0, -0.05, z) * scale(0.06, 0.06, 0.04), [0.3, 0.3, 0.3]);
    }

    // overhead panel and switch rows
    cube(out, translate(7.15, 0.62, 0.0) * scale(0.8, 0.08, 0.9), dark_grey);
    for row in 0..5 {
        for col in 0..10 {
            let x = 7.35 - row as f32 * 0.12;
            let z = -0.4 + col as f32 * 0.09;
            cube(out, translate(x, 0.59, z) * scale(0.035, 0.02, 0.03), button_white);
            if (row + col) % 3 == 0 {
                cube(out, translate(x, 0.605, z) * scale(0.015, 0.005, 0.015), [0.2, 1.0, 0.2]);
            }
        }
    }

    // control yokes with trim wheels
    for z in [0.32f32, -0.32] {
        cube(out, translate(7.15, -0.25, z) * scale(0.08, 0.35, 0.08), [0.15, 0.15, 0.15]);
        cube(out, translate(7.08, -0.08, z) * scale(0.06, 0.16, 0.24), [0.18, 0.18, 0.18]);
        cube(out, translate(7.06, -0.02, z + 0.11) * scale(0.05, 0.1, 0.06), black_panel);
        cube(out, translate(7.06, -0.02, z - 0.11) * scale(0.05, 0.1, 0.06), black_panel);
        for spoke in 0..4 {
            let trim_wheel =
                translate(7.06, -0.02, z) * Matrix4::from_angle_z(Deg(spoke as f32 * 90.0));
            cube(
                out,
                trim_wheel * translate(0.0, 0.035, 0.0) * scale(0.03, 0.04, 0.03),
                [0.25, 0.25, 0.25],
            );
        }
    }

    // rudder pedals
    for z in [0.28f32, -0.28] {
        cube(out, translate(7.45, -0.52, z) * scale(0.15, 0.08, 0.11), [0.25, 0.25, 0.25]);
        cube(out, translate(7.48, -0.48, z) * scale(0.02, 0.12, 0.1), [0.3, 0.3, 0.3]);
    }

    // side panels with button strips
    for z in [0.52f32, -0.52] {
        cube(out, translate(6.95, 0.08, z) * scale(0.58, 0.5, 0.12), dark_grey);
        for i in 0..8 {
            cube(
                out,
                translate(7.05 - i as f32 * 0.08, 0.08, z) * scale(0.03, 0.03, 0.02),
                button_white,
            );
        }
    }

    // floor, divider wall, reinforced door with lock light
    cube(out, translate(6.95, -0.55, 0.0) * scale(1.2, 0.02, 0.95), [0.2, 0.2, 0.22]);
    cube(out, translate(6.28, 0.0, 0.0) * scale(0.08, 1.2, 1.0), [0.7, 0.7, 0.73]);
    cube(out, translate(6.30, -0.1, 0.0) * scale(0.04, 1.0, 0.5), [0.5, 0.5, 0.52]);
    cube(out, translate(6.28, 0.3, 0.0) * scale(0.02, 0.08, 0.12), [1.0, 0.2, 0.2]);

    // windshield frame from inside
    cube(out, translate(7.55, 0.4, 0.0) * scale(0.03, 0.5, 0.9), [0.15, 0.2, 0.25]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airplane::state::DOOR_MAX;

    fn state_in(mode: ViewMode) -> FlightState {
        let mut state = FlightState::new();
        match mode {
            ViewMode::Exterior => {}
            ViewMode::Cabin => {
                state.toggle_cabin_view();
            }
            ViewMode::Cockpit => {
                state.toggle_cockpit_view();
            }
        }
        state
    }

    #[test]
    fn test_view_modes_draw_distinct_content() {
        let exterior = build_instances(&state_in(ViewMode::Exterior));
        let cabin = build_instances(&state_in(ViewMode::Cabin));
        let cockpit = build_instances(&state_in(ViewMode::Cockpit));
        // Only the exterior uses the nose cone; the interiors are
        // all-cube assemblies plus cabin fixtures.
        assert!(exterior.iter().any(|i| i.shape == Shape::Cone));
        assert!(cabin.iter().all(|i| i.shape == Shape::Cube));
        assert!(cockpit.iter().all(|i| i.shape == Shape::Cube));
        assert_ne!(exterior.len(), cabin.len());
    }

    #[test]
    fn test_door_angle_moves_the_door() {
        let closed = build_instances(&state_in(ViewMode::Exterior));
        let mut open_state = state_in(ViewMode::Exterior);
        open_state.door_angle = DOOR_MAX;
        let open = build_instances(&open_state);
        assert_eq!(closed.len(), open.len());
        assert_ne!(closed, open);
    }

    #[test]
    fn test_wheel_rotation_spins_the_gear() {
        let parked = build_instances(&state_in(ViewMode::Exterior));
        let mut rolling_state = state_in(ViewMode::Exterior);
        rolling_state.wheel_rotation = 1.0;
        let rolling = build_instances(&rolling_state);
        let changed = parked
            .iter()
            .zip(&rolling)
            .filter(|(a, b)| a != b)
            .count();
        // Six wheel stacks of three cylinders each, nothing else.
        assert_eq!(changed, 18);
    }

    #[test]
    fn test_cabin_light_adds_fixtures() {
        let lit = build_instances(&state_in(ViewMode::Cabin));
        let mut dark_state = state_in(ViewMode::Cabin);
        dark_state.cabin_light = false;
        let dark = build_instances(&dark_state);
        // 28 rows of two side strips disappear with the lights off.
        assert_eq!(lit.len(), dark.len() + 56);
    }

    #[test]
    fn test_exterior_includes_runway() {
        let exterior = build_instances(&state_in(ViewMode::Exterior));
        // Ground slab is the widest thing in the scene.
        assert!(exterior
            .iter()
            .any(|i| i.color == [0.35, 0.38, 0.35]));
    }
}

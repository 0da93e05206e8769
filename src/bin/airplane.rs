//! 3D airliner scene with a free-fly camera.

use cgmath::Deg;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use scene_rigs::airplane::input::FlightInput;
use scene_rigs::airplane::model::{self, Shape};
use scene_rigs::airplane::state::FlightState;
use scene_rigs::clock::FrameClock;
use scene_rigs::mesh;
use scene_rigs::render::solid_pass::{
    GpuMesh, Instance, InstanceBatch, SolidPass, CLIP_SPACE_CORRECTION,
};
use scene_rigs::render::GpuContext;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "3D airliner scene")]
struct Args {
    /// Window width in pixels
    #[arg(long, short = 'W', default_value_t = 1200)]
    width: u32,

    /// Window height in pixels
    #[arg(long, short = 'H', default_value_t = 900)]
    height: u32,
}

fn print_controls() {
    println!("================= AIRPLANE CONTROLS =================");
    println!(" [W, A, S, D] : Move camera (forward, left, back, right)");
    println!(" [E, R]       : Move camera vertically (up, down)");
    println!(" [X, Y, Z]    : Rotate camera (pitch, yaw, roll)");
    println!("-----------------------------------------------------");
    println!(" [I]          : Toggle cabin interior view");
    println!(" [P]          : Toggle cockpit view");
    println!(" [O] / [C]    : Open / close the door");
    println!(" [L]          : Toggle cabin lights");
    println!(" [M]          : Spin the wheels");
    println!(" [ESC]        : Exit");
    println!("=====================================================");
}

struct Gfx {
    window: Arc<Window>,
    gpu: GpuContext,
    pass: SolidPass,
    cube_mesh: GpuMesh,
    cylinder_mesh: GpuMesh,
    cone_mesh: GpuMesh,
    cube_batch: InstanceBatch,
    cylinder_batch: InstanceBatch,
    cone_batch: InstanceBatch,
}

struct App {
    args: Args,
    state: FlightState,
    input: FlightInput,
    clock: FrameClock,
    gfx: Option<Gfx>,
}

impl App {
    fn update_and_render(&mut self) {
        let dt = self.clock.tick();
        self.input.apply(&mut self.state, dt);

        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };

        // Bin the frame's instances by shape.
        let mut cubes = Vec::new();
        let mut cylinders = Vec::new();
        let mut cones = Vec::new();
        for instance in model::build_instances(&self.state) {
            let raw = Instance::new(instance.transform, instance.color);
            match instance.shape {
                Shape::Cube => cubes.push(raw),
                Shape::Cylinder => cylinders.push(raw),
                Shape::Cone => cones.push(raw),
            }
        }
        let device = &gfx.gpu.device;
        let queue = &gfx.gpu.queue;
        gfx.cube_batch.upload(device, queue, &cubes);
        gfx.cylinder_batch.upload(device, queue, &cylinders);
        gfx.cone_batch.upload(device, queue, &cones);

        let proj = CLIP_SPACE_CORRECTION
            * cgmath::perspective(Deg(45.0), gfx.gpu.aspect_ratio(), 0.1, 150.0);
        gfx.pass
            .set_camera(queue, proj * self.state.camera.view_matrix());

        let frame = gfx
            .gpu
            .surface
            .get_current_texture()
            .expect("Failed to acquire next swap chain texture");
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = gfx
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: None,
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.55,
                            g: 0.82,
                            b: 0.95,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(gfx.pass.depth_attachment()),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            gfx.pass.record(
                &mut rpass,
                &[
                    (&gfx.cube_mesh, &gfx.cube_batch),
                    (&gfx.cylinder_mesh, &gfx.cylinder_batch),
                    (&gfx.cone_mesh, &gfx.cone_batch),
                ],
            );
        }
        gfx.gpu.queue.submit(Some(encoder.finish()));
        frame.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title("Airliner")
                        .with_inner_size(winit::dpi::LogicalSize::new(
                            self.args.width,
                            self.args.height,
                        )),
                )
                .unwrap(),
        );
        let gpu = GpuContext::new(window.clone());
        let pass = SolidPass::new(
            &gpu.device,
            gpu.config.format,
            gpu.config.width,
            gpu.config.height,
        );

        let cube_mesh = GpuMesh::new(&gpu.device, &mesh::unit_cube());
        let cylinder_mesh = GpuMesh::new(&gpu.device, &mesh::unit_cylinder(mesh::SEGMENTS));
        let cone_mesh = GpuMesh::new(&gpu.device, &mesh::unit_cone(mesh::SEGMENTS));
        let cube_batch = InstanceBatch::new(&gpu.device, 2048);
        let cylinder_batch = InstanceBatch::new(&gpu.device, 128);
        let cone_batch = InstanceBatch::new(&gpu.device, 8);

        self.gfx = Some(Gfx {
            window,
            gpu,
            pass,
            cube_mesh,
            cylinder_mesh,
            cone_mesh,
            cube_batch,
            cylinder_batch,
            cone_batch,
        });
        self.clock.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.gpu.resize(size.width, size.height);
                    gfx.pass
                        .resize(&gfx.gpu.device, size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.handle_key_event(&event);
                if self.input.take_escape() {
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                self.update_and_render();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gfx) = self.gfx.as_ref() {
            gfx.window.request_redraw();
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    print_controls();

    let event_loop = EventLoop::new().unwrap();
    let mut app = App {
        args,
        state: FlightState::new(),
        input: FlightInput::new(),
        clock: FrameClock::new(),
        gfx: None,
    };
    event_loop.run_app(&mut app).unwrap();
}

//! Basic camera and transform manipulation demo with two indexed cubes.

use cgmath::Rad;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use scene_rigs::clock::FrameClock;
use scene_rigs::cubes::{axis_models, CubesInput, OrbitCamera, TransformState};
use scene_rigs::mesh;
use scene_rigs::render::solid_pass::{
    GpuMesh, Instance, InstanceBatch, SolidPass, CLIP_SPACE_CORRECTION,
};
use scene_rigs::render::GpuContext;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Camera and transform manipulation demo")]
struct Args {
    /// Window width in pixels
    #[arg(long, short = 'W', default_value_t = 800)]
    width: u32,

    /// Window height in pixels
    #[arg(long, short = 'H', default_value_t = 600)]
    height: u32,
}

fn print_controls() {
    println!("=============== CAMERA DEMO CONTROLS ===============");
    println!(" [W/A/S/D]   : Move eye and look-at together");
    println!(" [F/H, G/T]  : Move eye along X / Z");
    println!(" [Q/E]       : Move eye up / down");
    println!(" [1-6]       : Move the look-at point per axis");
    println!(" [7/8/9]     : Snap the up vector to X / Y / Z");
    println!(" [I/K, J/L]  : Translate the cubes");
    println!(" [C/V, B, U] : Scale the cubes");
    println!(" [X/Y/Z]     : Spin the cubes per axis");
    println!(" [N/M, O/P]  : Nudge cube 1 / cube 2 along X");
    println!(" [scroll]    : Zoom (1°..45° field of view)");
    println!(" [F12]       : Log the view matrix");
    println!(" [ESC]       : Exit");
    println!("====================================================");
}

struct Gfx {
    window: Arc<Window>,
    gpu: GpuContext,
    pass: SolidPass,
    cube1_mesh: GpuMesh,
    cube2_mesh: GpuMesh,
    axis_mesh: GpuMesh,
    cube1_batch: InstanceBatch,
    cube2_batch: InstanceBatch,
    axis_batch: InstanceBatch,
}

struct App {
    args: Args,
    camera: OrbitCamera,
    transforms: TransformState,
    input: CubesInput,
    clock: FrameClock,
    gfx: Option<Gfx>,
}

impl App {
    fn update_and_render(&mut self) {
        let dt = self.clock.tick();
        self.input
            .apply(&mut self.camera, &mut self.transforms, dt);

        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };
        let device = &gfx.gpu.device;
        let queue = &gfx.gpu.queue;

        let white = [1.0, 1.0, 1.0];
        gfx.cube1_batch.upload(
            device,
            queue,
            &[Instance::new(
                self.transforms.model_for(self.transforms.cube1_x),
                white,
            )],
        );
        gfx.cube2_batch.upload(
            device,
            queue,
            &[Instance::new(
                self.transforms.model_for(self.transforms.cube2_x),
                white,
            )],
        );
        let axis_color = [0.8, 0.8, 0.8];
        let axes: Vec<Instance> = axis_models()
            .into_iter()
            .map(|m| Instance::new(m, axis_color))
            .collect();
        gfx.axis_batch.upload(device, queue, &axes);

        let proj = CLIP_SPACE_CORRECTION
            * cgmath::perspective(Rad(self.camera.fov), gfx.gpu.aspect_ratio(), 0.1, 100.0);
        gfx.pass.set_camera(queue, proj * self.camera.view_matrix());

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
                            r: 0.2,
                            g: 0.3,
                            b: 0.3,
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
                    (&gfx.cube1_mesh, &gfx.cube1_batch),
                    (&gfx.cube2_mesh, &gfx.cube2_batch),
                    (&gfx.axis_mesh, &gfx.axis_batch),
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
                        .with_title("Camera Demo")
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

        let cube1_mesh = GpuMesh::new(&gpu.device, &mesh::face_colored_cube());
        let cube2_mesh = GpuMesh::new(&gpu.device, &mesh::corner_colored_cube());
        let axis_mesh = GpuMesh::new(&gpu.device, &mesh::unit_cube());
        let cube1_batch = InstanceBatch::new(&gpu.device, 1);
        let cube2_batch = InstanceBatch::new(&gpu.device, 1);
        let axis_batch = InstanceBatch::new(&gpu.device, 2);

        self.gfx = Some(Gfx {
            window,
            gpu,
            pass,
            cube1_mesh,
            cube2_mesh,
            axis_mesh,
            cube1_batch,
            cube2_batch,
            axis_batch,
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
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
                };
                self.camera.zoom(lines);
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
        camera: OrbitCamera::new(),
        transforms: TransformState::new(),
        input: CubesInput::new(),
        clock: FrameClock::new(),
        gfx: None,
    };
    event_loop.run_app(&mut app).unwrap();
}

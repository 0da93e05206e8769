//! 2D animated mobile crane.

use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use scene_rigs::clock::FrameClock;
use scene_rigs::crane::input::CraneInput;
use scene_rigs::crane::state::CraneState;
use scene_rigs::crane::{parts, pose};
use scene_rigs::render::flat_pass::{FlatPart, FlatPass};
use scene_rigs::render::GpuContext;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "2D animated mobile crane")]
struct Args {
    /// Window width in pixels
    #[arg(long, short = 'W', default_value_t = 1000)]
    width: u32,

    /// Window height in pixels
    #[arg(long, short = 'H', default_value_t = 750)]
    height: u32,
}

fn print_controls() {
    println!("=================== CRANE CONTROLS ===================");
    println!(" [LEFT/RIGHT] : Drive left/right (wheels spin)");
    println!(" [UP/DOWN]    : Raise/lower the boom (20°..70°)");
    println!(" [Q/E]        : Swing the whole crane (±45°)");
    println!(" [R]          : Toggle boom auto-sweep");
    println!(" [A]          : Toggle auto-movement");
    println!(" [ESC]        : Exit");
    println!("======================================================");
    println!(" The hook rides its cable up and down continuously.");
}

struct Gfx {
    window: Arc<Window>,
    gpu: GpuContext,
    pass: FlatPass,
    body: FlatPart,
    wheels: FlatPart,
    turret: FlatPart,
    boom: FlatPart,
    cable: FlatPart,
}

struct App {
    args: Args,
    state: CraneState,
    input: CraneInput,
    clock: FrameClock,
    gfx: Option<Gfx>,
}

impl App {
    fn update_and_render(&mut self) {
        let dt = self.clock.tick();

        self.input.apply(&mut self.state);
        self.state.advance(dt);
        let pose = pose::compose(&self.state);

        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };
        let queue = &gfx.gpu.queue;

        // State-dependent geometry is regenerated in place.
        gfx.wheels
            .upload(queue, &parts::wheels(self.state.wheel_rotation));
        gfx.cable
            .upload(queue, &parts::cable_and_hook(self.state.hook_height));

        gfx.body.set_transform(queue, pose.chassis);
        gfx.wheels.set_transform(queue, pose.chassis);
        gfx.turret.set_transform(queue, pose.chassis);
        gfx.boom.set_transform(queue, pose.boom);
        gfx.cable.set_transform(queue, pose.boom);

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
                            r: 0.85,
                            g: 0.9,
                            b: 0.95,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            gfx.pass.record(
                &mut rpass,
                &[&gfx.body, &gfx.wheels, &gfx.turret, &gfx.boom, &gfx.cable],
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
                        .with_title("Animated Crane")
                        .with_inner_size(winit::dpi::LogicalSize::new(
                            self.args.width,
                            self.args.height,
                        )),
                )
                .unwrap(),
        );
        let gpu = GpuContext::new(window.clone());
        let pass = FlatPass::new(&gpu.device, gpu.config.format);

        let body = FlatPart::new(&gpu.device, &parts::body());
        let wheels = FlatPart::new(&gpu.device, &parts::wheels(self.state.wheel_rotation));
        let turret = FlatPart::new(&gpu.device, &parts::turret());
        let boom = FlatPart::new(&gpu.device, &parts::boom());
        let cable = FlatPart::new(&gpu.device, &parts::cable_and_hook(self.state.hook_height));

        self.gfx = Some(Gfx {
            window,
            gpu,
            pass,
            body,
            wheels,
            turret,
            boom,
            cable,
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
        state: CraneState::new(),
        input: CraneInput::new(),
        clock: FrameClock::new(),
        gfx: None,
    };
    event_loop.run_app(&mut app).unwrap();
}

use anyhow::{bail, Result};
use tracer::{
    framebuffer::Framebuffer,
    renderer::{RenderOptions, Renderer},
    scene::Scene,
    utils::{counter, timer::timed_scope_log},
};

use crate::{
    output::{FileOutput, FinalOutput},
    progress::Progress,
    Args,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    Multithreaded,
    Monothreaded,
    /// Shade a single pixel and log its color, nothing is written
    Pixel { x: u32, y: u32 },
}

impl std::str::FromStr for ExecutionMode {
    type Err = &'static str;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = Err("expected monothreaded, multithreaded or a single pixel `x`x`y` eg 1x2 for the pixel 1 2");
        match s.to_lowercase().as_str() {
            "multithreaded" => Ok(Self::Multithreaded),
            "monothreaded" => Ok(Self::Monothreaded),
            s => {
                let Some((x, y)) = s.split_once('x') else {
                    return err;
                };
                let (Ok(x), Ok(y)) = (x.parse(), y.parse()) else {
                    return err;
                };

                Ok(ExecutionMode::Pixel { x, y })
            }
        }
    }
}

pub struct Cli {
    pub final_outputs: Vec<Box<dyn FinalOutput>>,
    pub options: RenderOptions,
    pub scene: Scene,
    pub execution_mode: ExecutionMode,
}

impl Cli {
    pub fn from_args(args: Args) -> Result<Self> {
        log::info!("building renderer");
        let options = RenderOptions {
            width: args.dimensions.width,
            height: args.dimensions.height,
            vfov: args.fov.to_radians(),
            horizon: args.horizon,
            shadow_bias: args.shadow_bias,
            ..Default::default()
        };

        if let ExecutionMode::Pixel { x, y } = args.execution_mode {
            if x >= options.width || y >= options.height {
                bail!("pixel {x}x{y} is outside of the {} image", args.dimensions);
            }
        }

        log::info!("loading scene {:?}", args.scene);
        let mut scene = Scene::new();
        args.scene.insert_into(&mut scene);
        log::debug!(
            "{} objects, {} materials, {} lights",
            scene.objects.len(),
            scene.materials.len(),
            scene.lights.len()
        );
        for (id, descriptor) in scene.materials.iter().enumerate() {
            let label = descriptor.label.as_deref().unwrap_or("unnamed");
            log::debug!("material {id}: {label} {:?}", descriptor.material);
        }

        Ok(Self {
            final_outputs: vec![Box::new(FileOutput::new(
                Some(args.output),
                args.hdr_output,
            ))],
            options,
            scene,
            execution_mode: args.execution_mode,
        })
    }

    pub fn run(self) -> Result<()> {
        let renderer = Renderer::new(&self.scene, &self.options);
        log::info!(
            "rendering {}x{}",
            self.options.width,
            self.options.height
        );

        let framebuffer = match self.execution_mode {
            ExecutionMode::Multithreaded => {
                log::info!("execution mode: multithreaded");
                Self::render_multithreaded(&renderer)
            }
            ExecutionMode::Monothreaded => {
                log::info!("execution mode: monothreaded");
                Self::render_monothreaded(&renderer)
            }
            ExecutionMode::Pixel { x, y } => {
                let color = renderer.process_pixel(x, y);
                log::info!("pixel {x}x{y}: {:?} -> {:?}", color.0, color.tonemap());
                counter::report_counters();
                return Ok(());
            }
        };

        for final_output in self.final_outputs {
            final_output.commit(&framebuffer)?;
        }

        counter::report_counters();
        Ok(())
    }

    fn render_multithreaded(renderer: &Renderer) -> Framebuffer {
        let progress = Progress::new(renderer.camera.height as usize);
        let framebuffer = timed_scope_log("render", || {
            renderer.render_with(|_| {
                if progress.add(1) % 16 == 0 {
                    progress.print();
                }
            })
        })
        .res;
        progress.print();
        println!();
        framebuffer
    }

    fn render_monothreaded(renderer: &Renderer) -> Framebuffer {
        let progress = Progress::new(renderer.camera.height as usize);
        let framebuffer = timed_scope_log("render", || {
            renderer.render_monothreaded(|_| {
                progress.add(1);
                progress.print();
            })
        })
        .res;
        println!();
        framebuffer
    }
}

use std::error::Error;

use clap::{Parser, Subcommand};
use drm::buffer::DrmFourcc;

use touchfb::config::Config;
use touchfb::display::modeset::{Card, DumbSurfaceSet};
use touchfb::input::event::InputEvent;
use touchfb::input::mapper::to_relative;
use touchfb::input::source::TouchInputSource;
use touchfb::input::stream::{TouchEventStream, DEFAULT_CAPACITY};
use touchfb::input::tracker::TouchTracker;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    pub config: Option<String>,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print classified touch events until the device stream ends
    Monitor {
        /// Touch event device to read from
        #[arg(long)]
        device: Option<String>,
        /// Screen width used to report pointer positions
        #[arg(long)]
        width: Option<u32>,
        /// Screen height used to report pointer positions
        #[arg(long)]
        height: Option<u32>,
    },
    /// Print the axis ranges reported by a touch device
    Info {
        /// Touch event device to query
        #[arg(long)]
        device: Option<String>,
    },
    /// Allocate and release a pair of XRGB8888 surfaces on a DRM card
    Surfaces {
        /// DRM card to allocate on
        #[arg(long)]
        card: Option<String>,
        /// Surface width in pixels
        #[arg(long)]
        width: Option<u32>,
        /// Surface height in pixels
        #[arg(long)]
        height: Option<u32>,
    },
}

pub async fn main_cli(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match args.config.as_ref() {
        Some(path) => Config::from_yaml_file(path)?,
        None => Config::load()?,
    };

    match args.cmd {
        Commands::Monitor {
            device,
            width,
            height,
        } => {
            let path = device.as_deref().unwrap_or(config.touch_device());
            let (default_width, default_height) = config.screen_size();
            let size = (width.unwrap_or(default_width), height.unwrap_or(default_height));
            monitor(path, size).await?
        }
        Commands::Info { device } => {
            let path = device.as_deref().unwrap_or(config.touch_device());
            info(path)?
        }
        Commands::Surfaces {
            card,
            width,
            height,
        } => {
            let path = card.as_deref().unwrap_or(config.gpu_card());
            let (default_width, default_height) = config.screen_size();
            let size = (width.unwrap_or(default_width), height.unwrap_or(default_height));
            surfaces(path, size)?
        }
    }

    Ok(())
}

async fn monitor(path: &str, screen_size: (u32, u32)) -> Result<(), Box<dyn Error>> {
    let source = TouchInputSource::open(path)?;
    let mut tracker = TouchTracker::new(*source.context(), screen_size);
    log::info!("Monitoring touch events from {path}");

    let mut events = TouchEventStream::spawn(source, DEFAULT_CAPACITY);
    while let Some(event) = events.recv().await {
        match event {
            InputEvent::End => println!("End"),
            event => println!("{event:?}"),
        }
        if let Some(pointer) = tracker.apply(event) {
            println!("  {pointer:?}");
        }
    }

    Ok(())
}

fn info(path: &str) -> Result<(), Box<dyn Error>> {
    let source = TouchInputSource::open(path)?;
    let ctx = *source.context();
    source.close();

    println!("Device:   {path}");
    println!("X range:  {}..={} (current {})", ctx.min_x, ctx.max_x, ctx.current_x);
    println!("Y range:  {}..={} (current {})", ctx.min_y, ctx.max_y, ctx.current_y);
    if ctx.max_x != 0 && ctx.max_y != 0 {
        let pos = to_relative(&ctx);
        println!("Relative: ({:.4}, {:.4})", pos.x, pos.y);
    }

    Ok(())
}

fn surfaces(path: &str, size: (u32, u32)) -> Result<(), Box<dyn Error>> {
    let card = Card::open(path)?;
    let mut surfaces = DumbSurfaceSet::allocate(&card, size, DrmFourcc::Xrgb8888, 24, 32)?;

    println!("Card:     {path}");
    for (idx, surface) in surfaces.surfaces().buffers().iter().enumerate() {
        println!(
            "Surface {idx}: {}x{} stride={} size={} fb={:?}",
            surface.width,
            surface.height,
            surface.stride,
            surface.size,
            surface.framebuffer()
        );
    }

    // Clear the back buffer to make sure it can be mapped
    let result = surfaces.map_back(&card).map(|mut map| map.fill(0));
    surfaces.release(&card)?;
    result?;

    Ok(())
}

//! Scene controller driving a simulated strip.
//!
//! Reads one JSON command per line from stdin. End of input stops the
//! running scene and exits.

use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use myrtio_light_scene::{
    CommandQueue, MemoryStrip, SceneController, SceneControllerConfig, SceneRunner, ingress,
};

const COMMAND_QUEUE_SIZE: usize = 16;

#[derive(Debug, Parser)]
#[command(name = "light-scene")]
#[command(about = "Drive an LED strip from scene commands read on stdin")]
struct Args {
    /// Number of pixels on the strip
    #[arg(short = 'n', long, default_value_t = 300)]
    pixels: usize,

    /// Brightness applied at startup
    #[arg(short, long, default_value_t = 255)]
    brightness: u8,

    /// Clear the strip on exit
    #[arg(short, long)]
    clear: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if !args.clear {
        info!("use --clear to turn the strip off on exit");
    }

    let config = SceneControllerConfig {
        initial_brightness: args.brightness,
        ..SceneControllerConfig::default()
    };
    let controller = SceneController::new(MemoryStrip::new(args.pixels), config)
        .context("cannot start without a strip")?;

    let queue = Arc::new(CommandQueue::<COMMAND_QUEUE_SIZE>::new());
    let reader = {
        let queue = Arc::clone(&queue);
        thread::Builder::new()
            .name("ingress".to_string())
            .spawn(move || read_commands(&queue))
            .context("failed to start ingress reader")?
    };

    SceneRunner::new(controller, Arc::clone(&queue)).run(args.clear);

    match reader.join() {
        Ok(result) => result.context("reading commands failed")?,
        Err(_) => warn!("ingress reader panicked"),
    }
    Ok(())
}

/// Decode stdin lines into the queue until end of input
fn read_commands(queue: &CommandQueue<COMMAND_QUEUE_SIZE>) -> io::Result<()> {
    let result = forward_lines(queue);
    queue.close();
    result
}

fn forward_lines(queue: &CommandQueue<COMMAND_QUEUE_SIZE>) -> io::Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match ingress::decode(&line) {
            Ok(command) => {
                if queue.send_blocking(command).is_err() {
                    break;
                }
            }
            Err(err) => warn!("dropping message: {err}"),
        }
    }
    Ok(())
}

//! Resolve a parameter label from the command line.
//!
//! ```text
//! cargo run --example resolve -- --group align --label TOP_LEFT
//! ```

use clap::Parser;
use pbrick::prelude::*;

#[derive(Debug, Parser)]
struct Args {
    #[arg(
        short,
        long,
        help = "Group: align, direction, stop, color, button, port, sound, image"
    )]
    group: String,
    #[arg(short, long, help = "Member label, e.g. TOP_LEFT")]
    label: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let label = args.label.as_str();

    match args.group.as_str() {
        "align" => println!("{} = {}", label, label.parse::<Align>()? as u8),
        "direction" => println!("{} = {}", label, label.parse::<Direction>()? as u8),
        "stop" => println!("{} = {}", label, label.parse::<Stop>()? as u8),
        "color" => println!("{} = {}", label, label.parse::<Color>()? as u8),
        "button" => println!("{} = {}", label, label.parse::<Button>()? as u16),
        "port" => println!("{} = {}", label, label.parse::<Port>()? as u8),
        "sound" => println!("{} = {}", label, label.parse::<SoundFile>()?.path()),
        "image" => println!("{} = {}", label, label.parse::<ImageFile>()?.path()),
        other => return Err(format!("unknown group: {other}").into()),
    }

    Ok(())
}

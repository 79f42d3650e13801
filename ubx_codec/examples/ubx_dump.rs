//! Prints every UBX message found in a recorded receiver log.
//!
//! ```text
//! RUST_LOG=debug cargo run --example ubx_dump -- capture.ubx [--lenient]
//! ```

use std::{fs, path::PathBuf};

use clap::Parser;
use ubx_codec::{parse, scan_buffer, BufferHeadContents, Direction, ValidationMode};

#[derive(Parser)]
struct Args {
    /// Recorded receiver output
    file: PathBuf,

    /// Decode frames with a bad checksum instead of dropping them
    #[arg(long)]
    lenient: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let mode = if args.lenient {
        ValidationMode::Lenient
    } else {
        ValidationMode::Strict
    };
    let data = fs::read(&args.file)?;

    let mut rest = &data[..];
    let (mut frames, mut skipped) = (0usize, 0usize);
    loop {
        match scan_buffer(rest) {
            BufferHeadContents::Garbage(n) => {
                skipped += n;
                rest = &rest[n..];
            },
            BufferHeadContents::Frame(n) => {
                match parse(&rest[..n], mode, Direction::Get) {
                    Ok(msg) => {
                        frames += 1;
                        println!("{}", msg);
                    },
                    Err(e) => eprintln!("Dropped frame: {}", e),
                }
                rest = &rest[n..];
            },
            BufferHeadContents::IncompleteHeader | BufferHeadContents::Incomplete(_) => break,
        }
    }
    eprintln!(
        "{} messages, {} bytes skipped, {} trailing bytes",
        frames,
        skipped,
        rest.len()
    );
    Ok(())
}

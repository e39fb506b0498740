//! csvpress: Convert a JSON table spec into a framed CSV payload
//!
//! Usage:
//!   # Read the spec from stdin, write <filename><0x00><csv> to stdout
//!   echo '{"rows":[{"a":1,"b":2}]}' | csvpress
//!
//!   # Read the spec from a file
//!   csvpress spec.json

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use std::fs::File;
use std::io::{stdin, stdout, BufReader, Read, Write};

#[derive(Parser, Debug)]
#[command(name = "csvpress")]
#[command(about = "Convert a JSON table spec into CSV with filename framing", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let reader: Box<dyn Read> = if let Some(file_path) = &args.input {
        Box::new(BufReader::new(File::open(file_path)?))
    } else {
        Box::new(stdin())
    };

    let stdout = stdout();
    let mut out = stdout.lock();
    csvpress::press_json(reader, &mut out)?;
    out.flush()?;

    Ok(())
}

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use vkstream_logprint::{process_dump, CommandPrinter, Stream};

#[derive(Parser, Debug)]
#[command(
    name = "vkstream-logprint",
    about = "Print the graphics command streams captured in a crash dump."
)]
struct Args {
    /// Crash dump (or raw capture) to scan for command streams
    dump: PathBuf,

    /// Only list the streams, without printing their commands
    #[arg(long, action = clap::ArgAction::SetTrue)]
    summary: bool,

    /// Only print the stream with this index
    #[arg(long, value_name = "INDEX")]
    stream: Option<usize>,

    /// Keep printing a stream after one of its commands fails to decode
    #[arg(long, action = clap::ArgAction::SetTrue)]
    keep_going: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    run(Args::parse())
}

fn run(args: Args) -> anyhow::Result<()> {
    let dump = fs::read(&args.dump).with_context(|| format!("read {}", args.dump.display()))?;
    let streams = process_dump(&dump);

    if let Some(index) = args.stream {
        if index >= streams.len() {
            bail!(
                "stream {index} not found: {} holds {} streams",
                args.dump.display(),
                streams.len()
            );
        }
    }

    let mut out = BufWriter::new(io::stdout().lock());
    if streams.is_empty() {
        writeln!(out, "No command streams found in {}", args.dump.display())?;
    }

    let mut failed = 0usize;
    for (idx, stream) in streams.iter().enumerate() {
        if args.stream.is_some_and(|wanted| wanted != idx) {
            continue;
        }
        print_stream_header(&mut out, idx, stream)?;
        if args.summary {
            continue;
        }
        if !print_commands(&mut out, idx, stream, args.keep_going)? {
            failed += 1;
        }
    }
    out.flush().context("flush output")?;

    if failed > 0 && !args.keep_going {
        bail!("{failed} stream(s) stopped at a command that could not be decoded (use --keep-going to continue past it)");
    }
    Ok(())
}

fn print_stream_header(out: &mut impl Write, idx: usize, stream: &Stream) -> io::Result<()> {
    writeln!(
        out,
        "Stream #{idx}: pos={}, thread={}, capture={}, timestamp={}, commands={}",
        stream.pos_in_file,
        stream.thread_id,
        stream.capture_id,
        stream.timestamp,
        stream.commands.len()
    )?;
    if let Some(message) = &stream.error_message {
        writeln!(out, "  Error: {message}")?;
    }
    Ok(())
}

/// Prints every command of `stream`. Returns `false` if a command failed to decode.
fn print_commands(
    out: &mut impl Write,
    idx: usize,
    stream: &Stream,
    keep_going: bool,
) -> anyhow::Result<bool> {
    let mut ok = true;
    for (cmd_idx, command) in stream.commands.iter().enumerate() {
        let mut text = String::new();
        let result = CommandPrinter::new(
            command.opcode,
            command.original_size,
            &command.data,
            idx,
            cmd_idx,
            &mut text,
        )
        .print_cmd();
        out.write_all(text.as_bytes())?;

        if let Err(err) = result {
            tracing::warn!(stream = idx, command = cmd_idx, error = %err, "command failed to decode");
            ok = false;
            if !keep_going {
                break;
            }
        }
    }
    Ok(ok)
}

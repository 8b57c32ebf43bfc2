use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{self, Read};
use std::sync::{Arc, Mutex};

use native_sink::{Buffer, Chunk, SinkAdapter, StreamError, WriteCallback};
use tracing_subscriber::EnvFilter;

const CHUNK_SIZE: usize = 8 * 1024;

fn print_usage_and_exit() -> ! {
    eprintln!("Usage:");
    eprintln!("  native_sink_cat [<file> ...]");
    eprintln!();
    eprintln!("Copies each file (or stdin when none, or for \"-\") to stdout");
    eprintln!("through a native sink adapter. Set RUST_LOG=debug to trace writes.");
    std::process::exit(1);
}

fn open_input(arg: &str) -> io::Result<Box<dyn Read>> {
    if arg == "-" {
        Ok(Box::new(io::stdin()))
    } else {
        Ok(Box::new(File::open(arg)?))
    }
}

fn copy(
    adapter: &mut SinkAdapter,
    mut input: impl Read,
    failure: &Arc<Mutex<Option<StreamError>>>,
) -> Result<(), Box<dyn Error>> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = input.read(&mut buf)?;
        if n == 0 {
            return Ok(());
        }

        let slot = Arc::clone(failure);
        let callback: WriteCallback = Box::new(move |res| {
            if let Err(e) = res {
                *slot.lock().unwrap_or_else(|p| p.into_inner()) = Some(e);
            }
        });
        adapter.write(&Chunk::Buffer(Buffer::new(&buf[..n])), Some(callback))?;

        if let Some(e) = failure.lock().unwrap_or_else(|p| p.into_inner()).take() {
            return Err(e.into());
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut inputs: Vec<String> = env::args().skip(1).collect();
    if inputs.iter().any(|a| a == "-h" || a == "--help") {
        print_usage_and_exit();
    }
    if inputs.is_empty() {
        inputs.push("-".into());
    }

    let mut adapter = SinkAdapter::stdout();
    tracing::debug!(
        tty = adapter.is_tty(),
        columns = adapter.window_size().columns,
        "stdout adapter ready"
    );

    let failure = Arc::new(Mutex::new(None));
    for arg in &inputs {
        let input = open_input(arg).map_err(|e| format!("{arg}: {e}"))?;
        copy(&mut adapter, input, &failure)?;
    }

    adapter.close();
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("native_sink_cat error: {e}");
        std::process::exit(1);
    }
}

//! Interactive and one-shot front ends around the calculator.

use crate::config::Config;
use crate::error::CidrError;
use crate::models::{Cidr, CidrBounds, SubnetResult};
use crate::output::{format_error, render, OutputFormat};
use crate::processing::calculate;
use std::error::Error;
use std::future::Future;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const PROMPT: &str = "Enter an IPv4 address (w.x.y.z/n): ";
pub const GOODBYE: &str = "Goodbye";

/// Validate `input` and calculate its subnet.
pub fn convert(input: &str, bounds: &CidrBounds) -> Result<(Cidr, SubnetResult), CidrError> {
    let cidr = Cidr::new(input, bounds)?;
    Ok((cidr, calculate(cidr.addr, cidr.prefix)))
}

/// Convert each input once, reports go to `out` and errors to `err`.
///
/// # Returns
/// * `Ok(true)` - every input was valid
/// * `Ok(false)` - at least one input was rejected
pub fn run_once<W: Write, E: Write>(
    inputs: &[String],
    config: &Config,
    format: OutputFormat,
    out: &mut W,
    err: &mut E,
) -> Result<bool, Box<dyn Error>> {
    log::info!("#Start run_once() inputs={}", inputs.len());
    let mut all_valid = true;
    for input in inputs {
        match convert(input, &config.bounds) {
            Ok((cidr, result)) => writeln!(out, "{}", render(format, &cidr, &result)?)?,
            Err(e) => {
                log::warn!("rejected {input:?}: {e}");
                writeln!(err, "{}", format_error(&e))?;
                all_valid = false;
            }
        }
    }
    Ok(all_valid)
}

/// Prompt for addresses until `reader` is exhausted or `shutdown` fires.
///
/// Invalid input is reported and the prompt repeats.
pub async fn run_interactive<R, W, S>(
    mut reader: R,
    out: &mut W,
    config: &Config,
    format: OutputFormat,
    shutdown: S,
) -> Result<(), Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: Future<Output = ()>,
{
    log::info!("#Start run_interactive() bounds={:?}", config.bounds);
    let mut buf = Vec::new();
    tokio::pin!(shutdown);

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        buf.clear();
        let read = tokio::select! {
            _ = &mut shutdown => {
                log::info!("Interrupted, leaving interactive mode");
                0
            }
            read = reader.read_until(b'\n', &mut buf) => read?,
        };
        if read == 0 {
            writeln!(out)?;
            break;
        }

        // undecodable bytes become U+FFFD and fail validation as a format error
        let line = String::from_utf8_lossy(&buf);
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match convert(input, &config.bounds) {
            Ok((cidr, result)) => writeln!(out, "{}", render(format, &cidr, &result)?)?,
            Err(e) => {
                log::warn!("rejected {input:?}: {e}");
                writeln!(out, "{}", format_error(&e))?;
            }
        }
    }

    writeln!(out, "{GOODBYE}")?;
    Ok(())
}

/// Resolve on Ctrl-C.
///
/// If the handler cannot be installed this never resolves, so the session
/// still ends on EOF.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {}
        Err(err) => {
            log::error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await
        }
    }
}

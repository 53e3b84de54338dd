use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Reads the whole input into memory, one entry per line.
/// `\r\n` endings are stripped and a trailing newline adds no empty entry.
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the run.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let start_time = Instant::now();
    info!(action = "start", component = "input_read", file_path = ?path, "Reading subdomain list");

    let file =
        File::open(path).with_context(|| format!("Failed to read input file {:?}", path))?;

    let mut lines = Vec::new();
    for chunk in BufReader::new(file).split(b'\n') {
        let mut line = chunk.with_context(|| format!("Failed to read input file {:?}", path))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        lines.push(String::from_utf8_lossy(&line).into_owned());
    }

    info!(
        action = "complete",
        component = "input_read",
        line_count = lines.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Subdomain list loaded"
    );
    Ok(lines)
}

pub fn write_domains<'a, I>(domains: I, output_path: Option<&Path>) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    match output_path {
        Some(path) => {
            info!(action = "write", component = "output", file_path = ?path, "Writing results to file");
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {:?}", path))?;
            write_lines(domains, BufWriter::new(file))
                .with_context(|| format!("Failed to write output file {:?}", path))
        }
        None => {
            info!(action = "write", component = "output", "Writing results to stdout");
            let stdout = io::stdout();
            write_lines(domains, BufWriter::new(stdout.lock()))
                .context("Failed to write results to stdout")
        }
    }
}

fn write_lines<'a, I, W>(domains: I, mut out: W) -> io::Result<()>
where
    I: IntoIterator<Item = &'a String>,
    W: Write,
{
    for domain in domains {
        writeln!(out, "{}", domain)?;
    }
    out.flush()
}

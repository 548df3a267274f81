// simplegrep
//
// Search a given input file for a pattern supplied as a command-line argument,
// printing every matching line with the byte range of each match and its groups.
//
// Usage:
//
//     cargo run --example simplegrep -- <pattern> <input file>
//
// Example:
//
//     cargo run --example simplegrep -- 'fn (\w+)' src/lib.rs
//

use std::env;
use std::fs;
use std::path::Path;
use std::process::exit;

use anyhow::{Context, Result};

use pcre_matcher::prelude::*;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut args = env::args();
    let program = args.next().unwrap_or_default();

    if args.len() != 2 {
        eprintln!(
            "Usage: {} <pattern> <input file>\n",
            Path::new(&program)
                .file_name()
                .map_or_else(|| program.clone(), |name| name.to_string_lossy().into_owned())
        );
        exit(-1);
    }

    let pattern = pattern! { args.next().unwrap_or_default(); MULTILINE };
    let input_filename = args.next().unwrap_or_default();

    let re = pattern.build().context("compile pattern")?;
    let input_data = fs::read(&input_filename).context("read input file")?;

    println!(
        "Scanning {} bytes for `{}` with {} groups",
        input_data.len(),
        re,
        re.groups()
    );

    // One matcher serves every line, so the capture buffer is allocated once.
    let mut m = Matcher::new(&re).context("allocate matcher")?;

    for (lineno, line) in input_data.split(|&b| b == b'\n').enumerate() {
        for range in m.find_iter(line, MatchFlags::empty()).context("scan line")? {
            m.exec(&line[range.start..], MatchFlags::ANCHORED).context("match groups")?;

            let groups = m
                .captures()
                .iter()
                .skip(1)
                .map(|g| g.map_or_else(|| "-".to_owned(), |g| String::from_utf8_lossy(g.as_bytes()).into_owned()))
                .collect::<Vec<_>>();

            println!(
                "{}:{}..{}: {} {:?}",
                lineno + 1,
                range.start,
                range.end,
                String::from_utf8_lossy(&line[range.clone()]),
                groups
            );
        }
    }

    Ok(())
}

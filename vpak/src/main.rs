extern crate vpak;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use vpak::error::Error;

use vfspack::dir_vfs::DirVfs;
use vfspack::packager;
use vfspack::progress;
use vfspack::selection;

fn main() -> Result<(), Error> {
    let matches = vpak::cli::parse_flags();

    vfspack::utils::set_debug(matches.is_present("debug"));

    let input = matches
        .value_of("input")
        .ok_or_else(|| Error::CliInputError("Input path is required.".to_string()))?;
    let output = matches
        .value_of("output")
        .ok_or_else(|| Error::CliInputError("Output path is required.".to_string()))?;

    let input_path = Path::new(input);
    if !input_path.is_dir() {
        eprintln!("Error: Directory not found: {input}");
        std::process::exit(1);
    }

    let output_path = Path::new(output);
    if output_path.exists() {
        if matches.is_present("no-clobber") {
            println!("Output file exists and --no-clobber is set. Operation aborted.");
            std::process::exit(1);
        }
        if !matches.is_present("force") && !confirm_overwrite(output)? {
            println!("Operation cancelled.");
            std::process::exit(0);
        }
    }

    let rules = match matches.value_of("rules") {
        Some(rules_file) => {
            let rules_path = Path::new(rules_file);
            if !rules_path.exists() {
                return Err(Error::NotFound(format!("Rules file: {rules_file}")));
            }
            selection::load_rules_file(rules_path)?
        }
        None => selection::default_rules(),
    };

    let provider = DirVfs::new(input_path);

    if matches.is_present("wait") {
        progress::wait_until_ready(&provider, Duration::from_secs(1), None)?;
    }

    let sink = File::create(output_path)?;
    let summary = packager::package(&provider, &rules, sink)?;

    println!(
        "Processing completed. Output written to: {output} ({} entries, {} duplicates skipped, {} truncated)",
        summary.entries_written, summary.duplicates_skipped, summary.truncated_files
    );
    Ok(())
}

fn confirm_overwrite(output: &str) -> Result<bool, Error> {
    print!("File {output} already exists. Overwrite? (y/n) ");
    std::io::stdout().flush()?;

    let mut response = String::new();
    std::io::stdin().read_line(&mut response)?;
    let response = response.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

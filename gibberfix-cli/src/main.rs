mod clipboard;

use anyhow::{Context, Result};
use clap::Parser;
use clipboard::{copy_output, Clipboard, SystemClipboard};
use gibberfix_core::{LayoutRemapper, SubstitutionTable};
use log::LevelFilter;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Recover text typed while the Hebrew keyboard layout was active", long_about = None)]
struct Args {
    /// Text to convert (read from stdin when omitted)
    text: Vec<String>,

    /// Table definition to use instead of the built-in Hebrew to QWERTY table
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// Copy the converted text to the system clipboard
    #[arg(short, long)]
    copy: bool,

    /// Print the active table in definition format and exit
    #[arg(long)]
    dump_table: bool,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    if let Err(e) = run(args, io::stdin().lock(), &mut stdout.lock(), &mut SystemClipboard) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run<R: Read, W: Write, C: Clipboard>(
    args: Args,
    reader: R,
    out: &mut W,
    clipboard: &mut C,
) -> Result<()> {
    let remapper = match &args.table {
        Some(path) => {
            let table = SubstitutionTable::load(path)
                .with_context(|| format!("Failed to load table {}", path.display()))?;
            log::info!("Using table {} ({} mappings)", path.display(), table.len());
            LayoutRemapper::new(table)
        }
        None => LayoutRemapper::hebrew_qwerty(),
    };

    if args.dump_table {
        write!(out, "{}", remapper.table().to_definition())?;
        return Ok(());
    }

    let input = read_input(args.text, reader)?;
    let conversion = remapper.convert(&input);
    writeln!(out, "{}", conversion.text())?;
    out.flush()?;

    if args.copy {
        copy_output(clipboard, &conversion)?;
    }

    Ok(())
}

/// Joins the text arguments, or reads all of `reader` when there are none
fn read_input<R: Read>(text: Vec<String>, mut reader: R) -> Result<String> {
    if !text.is_empty() {
        return Ok(text.join(" "));
    }

    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("Failed to read text from stdin")?;

    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

mod chain;
mod dump;
mod error;
mod list;
mod stats;

use std::io::{self, Write};

use clap::Parser;
use fat12::VolumeImage;

use error::Error;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Args {
    #[clap(short, long)]
    quiet: bool,
    #[clap(short, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// FAT12 disk image to inspect
    #[clap(short, long)]
    input: Option<String>,
    /// Print boot sector summary
    #[clap(short)]
    stats: bool,
    /// Print boot sector summary along with FAT and root directory offsets
    #[clap(short = 'x')]
    extended: bool,
    /// List directory, only root directory "\" is supported
    #[clap(short = 'l', value_name = "PATH")]
    listing: Option<String>,
    /// Print attributes, size, first cluster and modification time in listing
    #[clap(short = 'L', requires = "listing")]
    long: bool,
    /// Print cluster chain of a root directory file, NAME.EXT or NAME
    #[clap(short = 'c', value_name = "FILE")]
    chain: Option<String>,
    /// Hex dump of boot sector
    #[clap(short = 'd')]
    dump: bool,
}

fn run(args: Args) -> Result<(), Error> {
    let input = args.input.ok_or(Error::NoInput)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Input file: {}", input)?;
    let image = VolumeImage::open(&input)?;

    if args.stats || args.extended {
        stats::details(&mut stdout, &image)?;
    }
    if args.extended {
        stats::extended(&mut stdout, &image)?;
    }
    if args.dump {
        dump::boot_sector(&mut stdout, &image)?;
    }
    if let Some(path) = args.listing {
        list::list(&mut stdout, &image, &path, args.long)?;
    }
    if let Some(file) = args.chain {
        chain::chain(&mut stdout, &image, &file)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let level = match (args.quiet, args.verbosity) {
        (true, _) => log::LevelFilter::Off,
        (_, 0) => log::LevelFilter::Info,
        (_, 1) => log::LevelFilter::Debug,
        (_, _) => log::LevelFilter::Trace,
    };
    log::set_max_level(level);
    env_logger::builder().filter(None, level).target(env_logger::Target::Stderr).init();

    if let Err(error) = run(args) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}

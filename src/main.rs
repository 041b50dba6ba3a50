use bookz::catalog::Catalog;
use bookz::cli::menu;
use bookz::error::Result;
use bookz::store::fs::FileBackend;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookz")]
#[command(about = "Interactive book-catalog manager", long_about = None)]
struct Cli {
    /// Path of the backing catalog file
    #[arg(short, long, default_value = "library.json")]
    file: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut catalog = Catalog::open(FileBackend::new(cli.file))?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::run(&mut catalog, &mut stdin.lock(), &mut stdout.lock())
}

use clap::Parser;
use std::path::PathBuf;

mod constants;
mod error;
mod metadata;
mod navigation;
mod prefs;
mod reading;
mod resolver;
mod search;
mod share;
mod source;
mod ui;

use resolver::{NavigationMode, RawParams};
use source::JsonVerseSource;
use ui::App;

#[derive(Parser)]
#[command(name = "mushaf")]
#[command(about = "A terminal Quran reader")]
struct Cli {
    /// JSON file holding the verse corpus and theme index
    data_file: PathBuf,

    /// Starting mode: surat, page, juz or tema
    #[arg(long, default_value = "surat")]
    mode: String,

    #[arg(long)]
    surat: Option<String>,
    #[arg(long)]
    ayat: Option<String>,
    #[arg(long)]
    panjang: Option<String>,
    #[arg(long)]
    page: Option<String>,
    #[arg(long)]
    juz: Option<String>,
    #[arg(long)]
    tema: Option<String>,
}

fn parse_mode(raw: &str) -> NavigationMode {
    match raw.trim().to_lowercase().as_str() {
        "page" => NavigationMode::Page,
        "juz" => NavigationMode::Juz,
        "tema" | "theme" => NavigationMode::Theme,
        _ => NavigationMode::Surah,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    let source = JsonVerseSource::open(&cli.data_file)
        .map_err(|e| format!("Failed to open data file: {}", e))?;
    let mut app = App::new(source);

    let mode = parse_mode(&cli.mode);
    let params = RawParams {
        surah: cli.surat,
        ayah: cli.ayat,
        span: cli.panjang,
        page: cli.page,
        juz: cli.juz,
        theme: cli.tema,
    };
    match resolver::resolve(mode, &params) {
        Ok(res) => app.apply_resolution(&res),
        Err(e) => app.show_validation_error(e),
    }

    app.run()
        .map_err(|e| -> Box<dyn std::error::Error> { Box::new(e) })?;

    Ok(())
}

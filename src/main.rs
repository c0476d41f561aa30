use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use cots::{cli, config, error, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the catalog for artists or albums
    Search(SearchOptions),

    /// Show an album and its tracks
    Album(AlbumOptions),

    /// Export the CUE sheet of an album
    Cue(CueOptions),

    /// Download the cover of an album
    Cover(CoverOptions),

    /// Open an artist or album in the Spotify web player
    Open(OpenOptions),

    /// Show or change settings
    Settings(SettingsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    pub query: String,

    /// What to search for: artist(s) or album(s)
    #[clap(long = "type", default_value = "albums")]
    pub search_type: String,

    /// Number of result pages to load
    #[clap(long, default_value_t = 1)]
    pub pages: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumOptions {
    /// Spotify album ID
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CueOptions {
    /// Spotify album ID
    pub id: String,

    /// Directory the sheet is written to
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Filename of the sheet (default: "<artist> - <title>.cue")
    #[clap(long)]
    pub filename: Option<String>,

    /// Offset added after every track in milliseconds
    #[clap(long)]
    pub offset_ms: Option<u64>,

    /// Only export these track numbers, e.g. 1,2,5
    #[clap(long, value_parser = utils::parse_track_numbers)]
    pub tracks: Option<utils::TrackNumbers>,

    /// Write only the release year to REM DATE
    #[clap(long)]
    pub year_only: bool,

    /// Print the sheet instead of saving it
    #[clap(long)]
    pub print: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CoverOptions {
    /// Spotify album ID
    pub id: String,

    /// Directory the cover is written to
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// max, min or a width in pixels
    #[clap(long, default_value = "max")]
    pub size: utils::CoverSize,
}

#[derive(Parser, Debug, Clone)]
pub struct OpenOptions {
    /// Reference like album/<id> or a spotify:album:<id> URI
    pub reference: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SettingsOptions {
    /// Change the language (ISO 3166 alpha-2 key, e.g. DE)
    #[clap(long)]
    pub language: Option<String>,

    /// List available languages
    #[clap(long)]
    pub list: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Search(opt) => cli::search(opt.query, opt.search_type, opt.pages).await,
        Command::Album(opt) => cli::album(opt.id).await,
        Command::Cue(opt) => {
            cli::cue(
                opt.id,
                cli::CueOptions {
                    output: opt.output,
                    filename: opt.filename,
                    offset_ms: opt.offset_ms,
                    tracks: opt.tracks.unwrap_or_default().0,
                    year_only: opt.year_only,
                    print: opt.print,
                },
            )
            .await
        }
        Command::Cover(opt) => cli::cover(opt.id, opt.output, opt.size).await,
        Command::Open(opt) => cli::open(opt.reference).await,
        Command::Settings(opt) => cli::settings(opt.language, opt.list).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

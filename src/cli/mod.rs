pub mod commands;

use clap::{Parser, Subcommand};

use crate::i18n::Language;

#[derive(Parser)]
#[command(name = "ruku")]
#[command(about = "Random ruku recall quiz backed by alquran.cloud", long_about = None)]
pub struct Cli {
    /// Interface language
    #[arg(short, long, value_enum, global = true)]
    pub lang: Option<Language>,

    /// Text edition to request (e.g. quran-uthmani, quran-simple)
    #[arg(long, global = true)]
    pub edition: Option<String>,

    /// API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the opening verse of a random ruku (default)
    Random,
    /// Search surahs by number or name
    Surah {
        /// Number, English name or Arabic name
        #[arg(default_value = "")]
        query: String,
        /// List every surah
        #[arg(long)]
        all: bool,
    },
    /// Show the global id and ruku of an ayah
    Locate {
        /// SURAH:AYAH, e.g. 2:255 or baqarah:255
        reference: String,
    },
    /// Start an interactive recall quiz
    Quiz {
        /// First ayah of the range, SURAH:AYAH
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Last ayah of the range, SURAH:AYAH
        #[arg(long, requires = "from")]
        to: Option<String>,
    },
}

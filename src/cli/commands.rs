use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "techfeed")]
#[command(about = "Fetch Japanese and English tech blog feeds as one article format")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Print the result as JSON instead of a text listing
    #[arg(long, global = true)]
    pub json: bool,

    /// Show at most N articles per feed
    #[arg(long, value_name = "N", global = true)]
    pub limit: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a single source
    Fetch {
        #[command(flatten)]
        output: OutputArgs,

        #[command(subcommand)]
        source: SourceCommand,
    },

    /// Fetch every source's default feeds
    All {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the built-in sources and their feed URLs
    Sources {
        /// Print the catalog as an OPML document
        #[arg(long)]
        opml: bool,

        /// Write the OPML document to a file instead of stdout
        #[arg(short, long, requires = "opml")]
        output: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SourceCommand {
    /// Zenn: site-wide, topic or user feed
    Zenn {
        #[arg(long, conflicts_with = "user")]
        topic: Option<String>,

        #[arg(long)]
        user: Option<String>,

        /// Fetch every page of a topic or user feed
        #[arg(long)]
        all_pages: bool,
    },

    /// Qiita: popular items, tag, user, organization or advent calendar feed
    Qiita {
        #[arg(long, conflicts_with_all = ["user", "org", "advent"])]
        tag: Option<String>,

        #[arg(long, conflicts_with_all = ["org", "advent"])]
        user: Option<String>,

        #[arg(long, conflicts_with = "advent")]
        org: Option<String>,

        /// Advent calendar year
        #[arg(long, requires = "calendar", value_name = "YEAR")]
        advent: Option<u16>,

        /// Advent calendar id
        #[arg(long, requires = "advent", value_name = "ID")]
        calendar: Option<String>,
    },

    /// ClassMethod DevelopersIO: site-wide, tag or author feed
    Classmethod {
        #[arg(long, conflicts_with = "author")]
        tag: Option<String>,

        #[arg(long)]
        author: Option<String>,
    },

    /// AWS blog
    Aws {
        /// ja or en
        #[arg(long, default_value = "ja")]
        lang: String,
    },

    /// Google Cloud blog
    Googlecloud {
        /// ja or en
        #[arg(long, default_value = "ja")]
        lang: String,
    },

    /// Hugging Face blog
    Huggingface,

    /// OpenAI blog
    Openai,

    /// Google DeepMind blog
    Deepmind,

    /// G-gen tech blog
    Ggen,

    /// Google AI (Research) blog
    Googleai,

    /// Anthropic news, scraped from the news index
    Anthropic {
        /// Maximum number of news pages to read
        #[arg(long, value_name = "N")]
        max: Option<usize>,
    },

    /// Any feed URL from a supported host
    Url { url: String },

    /// Every feed listed in an OPML file
    Opml { path: String },
}

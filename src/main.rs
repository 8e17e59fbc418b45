use std::fs;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use techfeed::cli::render::{apply_limit, to_json, to_json_list, to_text};
use techfeed::cli::{Cli, Commands, OutputArgs, SourceCommand};
use techfeed::config::Config;
use techfeed::domain::FeedResult;
use techfeed::feed::FeedClient;
use techfeed::services::{AggregateService, ExportService};
use techfeed::sources::anthropic::AnthropicNewsSource;
use techfeed::sources::{
    aws::AwsSource, classmethod::ClassMethodSource, deepmind, ggen, googleai,
    googlecloud::GoogleCloudSource, huggingface, openai, qiita::QiitaSource, zenn::ZennSource,
    FeedSource, SourceRegistry,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("failed to load configuration")?;
    init_tracing(&config);

    let client = FeedClient::from_config(&config);
    let registry = SourceRegistry::new(client.clone(), &config);

    match cli.command {
        Commands::Fetch { output, source } => cmd_fetch(source, output, client, registry, &config),
        Commands::All { output } => cmd_all(registry, output),
        Commands::Sources { opml, output } => cmd_sources(registry, opml, output),
    }
}

fn init_tracing(config: &Config) {
    let filter = match &config.log_filter {
        Some(directives) => EnvFilter::try_new(directives).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_fetch(
    source: SourceCommand,
    output: OutputArgs,
    client: FeedClient,
    registry: SourceRegistry,
    config: &Config,
) -> anyhow::Result<()> {
    let result = match source {
        SourceCommand::Zenn {
            topic,
            user,
            all_pages,
        } => {
            let zenn = ZennSource::new(client);
            match user {
                Some(user) => zenn.get_user_feed(&user, all_pages)?,
                None => zenn.get_feed(topic.as_deref(), all_pages)?,
            }
        }
        SourceCommand::Qiita {
            tag,
            user,
            org,
            advent,
            calendar,
        } => {
            let qiita = QiitaSource::new(client);
            match (user, org, advent.zip(calendar)) {
                (Some(user), _, _) => qiita.get_user_feed(&user)?,
                (_, Some(org), _) => qiita.get_organization_feed(&org)?,
                (_, _, Some((year, id))) => qiita.get_advent_calendar_feed(year, &id)?,
                _ => qiita.get_feed(tag.as_deref())?,
            }
        }
        SourceCommand::Classmethod { tag, author } => {
            let devio = ClassMethodSource::new(client);
            match author {
                Some(author) => devio.get_author_feed(&author)?,
                None => devio.get_feed(tag.as_deref())?,
            }
        }
        SourceCommand::Aws { lang } => AwsSource::new(client).get_feed(&lang)?,
        SourceCommand::Googlecloud { lang } => GoogleCloudSource::new(client).get_feed(&lang)?,
        SourceCommand::Huggingface => huggingface::source(client).get_feed()?,
        SourceCommand::Openai => openai::source(client).get_feed()?,
        SourceCommand::Deepmind => deepmind::source(client).get_feed()?,
        SourceCommand::Ggen => ggen::source(client).get_feed()?,
        SourceCommand::Googleai => googleai::source(client).get_feed()?,
        SourceCommand::Anthropic { max } => {
            AnthropicNewsSource::new(client, config.scrape_delay).get_feed(max)?
        }
        SourceCommand::Url { url } => registry.parse_feed(&url)?,
        SourceCommand::Opml { path } => {
            let content =
                fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))?;
            let urls = ExportService::read_opml(&content)?;
            return print_results(fetch_urls(&registry, &urls), output);
        }
    };

    print_result(result, output)
}

fn cmd_all(registry: SourceRegistry, output: OutputArgs) -> anyhow::Result<()> {
    let service = AggregateService::new(registry);

    let mut results = Vec::new();
    for outcome in service.fetch_all() {
        match outcome.result {
            Ok(result) => results.push(result),
            Err(e) => eprintln!("! {} {}: {}", outcome.kind, outcome.url, e),
        }
    }

    print_results(results, output)
}

fn cmd_sources(registry: SourceRegistry, opml: bool, output: Option<String>) -> anyhow::Result<()> {
    if !opml {
        println!("Available sources:\n");
        for source in registry.sources() {
            println!("  {}", source.kind());
            for url in source.default_feed_urls() {
                println!("    {}", url);
            }
        }
        return Ok(());
    }

    let document = ExportService::new(registry).export_opml()?;
    match output {
        Some(path) => {
            fs::write(&path, &document).with_context(|| format!("failed to write {}", path))?;
            println!("Exported sources to {}", path);
        }
        None => println!("{}", document),
    }

    Ok(())
}

/// Fetch URLs one by one, reporting failures and keeping the rest
fn fetch_urls(registry: &SourceRegistry, urls: &[String]) -> Vec<FeedResult> {
    urls.iter()
        .filter_map(|url| match registry.parse_feed(url) {
            Ok(result) => Some(result),
            Err(e) => {
                eprintln!("! {}: {}", url, e);
                None
            }
        })
        .collect()
}

fn print_result(result: FeedResult, output: OutputArgs) -> anyhow::Result<()> {
    let result = apply_limit(result, output.limit);

    if output.json {
        println!("{}", to_json(&result)?);
    } else {
        print!("{}", to_text(&result));
    }

    Ok(())
}

fn print_results(results: Vec<FeedResult>, output: OutputArgs) -> anyhow::Result<()> {
    let results: Vec<FeedResult> = results
        .into_iter()
        .map(|r| apply_limit(r, output.limit))
        .collect();

    if output.json {
        println!("{}", to_json_list(&results)?);
    } else if results.is_empty() {
        println!("No feeds fetched.");
    } else {
        let listings: Vec<String> = results.iter().map(to_text).collect();
        print!("{}", listings.join("\n"));
    }

    Ok(())
}

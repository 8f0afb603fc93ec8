use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use rs_markov_core::io::append_excerpt;
use rs_markov_core::{Corpus, Exploration, Explorer, Punctuation, Settings};

mod prompt;

#[derive(Parser)]
#[command(name = "rs-markov")]
#[command(about = "Generate short, original Markov excerpts from text files")]
#[command(version)]
struct Cli {
    /// Text files used as the corpus (concatenated in order)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Terminal punctuation ('.' or '?'); asked interactively if omitted
    #[arg(long)]
    punct: Option<String>,

    /// Order of the excerpt to save; asked interactively if omitted
    #[arg(long)]
    order: Option<usize>,

    /// Smallest chain order explored
    #[arg(long)]
    min_order: Option<usize>,

    /// Largest chain order explored
    #[arg(long)]
    max_order: Option<usize>,

    /// Maximum excerpt length in characters
    #[arg(long)]
    max_length: Option<usize>,

    /// Walks tried per order before giving up
    #[arg(long)]
    attempts: Option<usize>,

    /// Seed for reproducible excerpts
    #[arg(long)]
    seed: Option<u64>,

    /// Explore orders on several threads
    #[arg(long)]
    parallel: bool,

    /// TOML file with default settings (flags take precedence)
    #[arg(long)]
    config: Option<PathBuf>,

    /// File the chosen excerpt is appended to
    #[arg(long, default_value = "markov-story.out")]
    output: PathBuf,

    /// Do not save the chosen excerpt
    #[arg(long)]
    no_save: bool,

    /// Print every excerpt as JSON and exit
    #[arg(long)]
    json: bool,
}

/// JSON view of an exploration.
#[derive(Serialize)]
struct Report<'a> {
    punctuation: Punctuation,
    max_length: usize,
    excerpts: &'a BTreeMap<usize, String>,
    failures: BTreeMap<usize, String>,
}

impl Cli {
    /// Loads the optional config file, then applies command line overrides.
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                toml::from_str(&contents).with_context(|| format!("invalid config {}", path.display()))?
            }
            None => Settings::default(),
        };

        settings.set_orders(
            self.min_order.unwrap_or(settings.min_order),
            self.max_order.unwrap_or(settings.max_order),
        )?;
        if let Some(max_length) = self.max_length {
            settings.set_max_length(max_length)?;
        }
        if let Some(attempts) = self.attempts {
            settings.set_max_attempts(attempts)?;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings.parallel |= self.parallel;
        settings.validate()?;
        Ok(settings)
    }
}

fn print_exploration(exploration: &Exploration, settings: &Settings) {
    for order in settings.orders() {
        match (exploration.get(order), exploration.failures.get(&order)) {
            (Some(excerpt), _) => {
                println!("This is a story from a {}-gram:", order);
                println!("{}", excerpt);
            }
            (None, Some(e)) => println!("No story from a {}-gram: {}", order, e),
            (None, None) => continue,
        }
        println!("-------------------");
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut settings = cli.settings()?;

    let corpus = Corpus::load(&cli.files).context("failed to read corpus files")?;
    log::info!("loaded {} tokens from {} file(s)", corpus.len(), cli.files.len());

    settings.punctuation = match &cli.punct {
        Some(punct) => Punctuation::from_input(punct),
        None if cli.json => settings.punctuation,
        None => prompt::punctuation()?,
    };

    let exploration = Explorer::new(&corpus, settings.clone())?.explore();

    if cli.json {
        let report = Report {
            punctuation: settings.punctuation,
            max_length: settings.max_length,
            excerpts: &exploration.excerpts,
            failures: exploration.failures.iter().map(|(order, e)| (*order, e.to_string())).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_exploration(&exploration, &settings);
    if exploration.is_empty() {
        bail!("no order produced an original excerpt");
    }

    let order = match cli.order {
        Some(order) if exploration.get(order).is_some() => order,
        Some(order) => bail!("no excerpt available for order {}", order),
        None => prompt::order(&exploration, &settings)?,
    };
    println!("You selected {}-gram.", order);

    let excerpt = exploration.get(order).context("selected order has no excerpt")?;
    if cli.no_save {
        println!("{}", excerpt);
    } else {
        append_excerpt(&cli.output, excerpt)
            .with_context(|| format!("failed to write {}", cli.output.display()))?;
        println!("Your text is now saved into {}.", cli.output.display());
    }

    Ok(())
}

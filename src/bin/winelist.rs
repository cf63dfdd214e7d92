//! Command-line front end for the wine list.
//!
//! Every subcommand runs the same session flow a page would: load the catalog
//! once, apply the requested filters as filter events, optionally select a
//! wine, then print the resulting view models (NDJSON/JSON) or the HTML page.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use winelist::logging;
use winelist::{
    Category, Config, ConfigOverrides, Country, Event, FileSource, FilterChange, HtmlView,
    Selector, Session, WineId,
};

#[derive(Parser, Debug)]
#[command(name = "winelist")]
#[command(about = "Browse, filter, and render a wine list catalog")]
struct Cli {
    /// Catalog file (or set WINELIST_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// JSON object of extra country labels (or set WINELIST_LABELS)
    #[arg(long, global = true)]
    labels: Option<PathBuf>,

    /// Alternative JSON Schema for the catalog (or set WINELIST_SCHEMA)
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    /// More log output on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Less log output on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print visible cards as NDJSON, one card per line
    List(FilterArgs),
    /// Print the country and category filter controls as JSON
    Filters(FilterArgs),
    /// Print the detail view for one wine as JSON
    Show {
        /// Wine id
        id: String,
    },
    /// Write the HTML page
    Render {
        #[command(flatten)]
        filters: FilterArgs,

        /// Open the detail overlay for this wine id
        #[arg(long)]
        show: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Only wines from this country, as written in the catalog
    #[arg(long)]
    country: Option<String>,

    /// Only wines in this section (espumosos/sparkling, blancos/white, rosados/rose, tintos/red)
    #[arg(long)]
    category: Option<String>,
}

impl FilterArgs {
    fn events(&self) -> Vec<Event> {
        let mut events = Vec::new();
        if let Some(country) = &self.country {
            events.push(Event::FilterSelected(FilterChange::Country(Selector::Only(
                Country(country.clone()),
            ))));
        }
        if let Some(category) = &self.category {
            events.push(Event::FilterSelected(FilterChange::Category(Selector::Only(
                Category::parse(category),
            ))));
        }
        events
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose.min(8) as i8 - cli.quiet.min(8) as i8);

    let config = Config::resolve(ConfigOverrides {
        catalog: cli.catalog.clone(),
        labels: cli.labels.clone(),
        schema: cli.schema.clone(),
    })?;
    let labels = config.country_labels()?;
    let source = FileSource::new(&config.catalog_path).with_schema(config.schema_path.clone());

    let mut session = Session::new(labels);
    let mut view = HtmlView::new();
    session.load(&source, &mut view);

    match cli.command {
        Command::List(filters) => {
            apply(&mut session, &mut view, filters.events());
            for group in session.groups() {
                for card in &group.cards {
                    println!("{}", serde_json::to_string(card)?);
                }
            }
        }
        Command::Filters(filters) => {
            apply(&mut session, &mut view, filters.events());
            println!("{}", serde_json::to_string_pretty(&session.controls())?);
        }
        Command::Show { id } => {
            session.handle(Event::CardSelected(WineId(id)), &mut view);
            if let Some(detail) = session.overlay().detail() {
                println!("{}", serde_json::to_string_pretty(detail)?);
            }
        }
        Command::Render {
            filters,
            show,
            output,
        } => {
            apply(&mut session, &mut view, filters.events());
            if let Some(id) = show {
                session.handle(Event::CardSelected(WineId(id)), &mut view);
            }
            let page = view.page(&session.controls());
            match output {
                Some(path) => fs::write(&path, page)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => print!("{page}"),
            }
        }
    }
    Ok(())
}

fn apply(session: &mut Session, view: &mut HtmlView, events: Vec<Event>) {
    for event in events {
        session.handle(event, view);
    }
}

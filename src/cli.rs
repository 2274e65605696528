// src/cli.rs
//
// One-shot front end: submit the keywords once through the same controller
// the GUI uses and print the link groups.
use std::io::{self, Write};

use clap::Parser;
use color_eyre::eyre::{Result, bail};

use crate::{
    config::{consts::LINK_MAX_LEN, options::AppOptions},
    controller::Session,
    core::{HttpTransport, Locale, ResultPayload, payload::truncate_link},
    i18n::Strings,
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Send comma-separated keywords to the CrawlLab parser")]
pub struct Args {
    /// Comma-separated keywords, e.g. "cat, dog"
    pub keywords: String,

    /// Result language: en or es (anything else means en)
    #[arg(long, short, default_value = "en")]
    pub lang: Locale,

    /// Override the parse endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Print links in full instead of shortening them
    #[arg(long)]
    pub full: bool,

    /// Show debug logs on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl Args {
    pub fn options(&self) -> AppOptions {
        let mut options = AppOptions { locale: self.lang, ..AppOptions::default() };
        if let Some(endpoint) = &self.endpoint {
            options.set_endpoint(endpoint);
        }
        options
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.verbose);

    let options = args.options();
    let transport = HttpTransport::new(&options)?;

    let mut session = Session::new(options.locale);
    session.controller.set_input(args.keywords.as_str());
    session.submit_blocking(&transport);

    let Some(result) = session.controller.result() else {
        bail!("request to {} failed (run with --verbose for details)", options.endpoint);
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, result, session.strings(), args.full)?;
    out.flush()?;
    Ok(())
}

/// Plain-text rendering: a `# label` line per labelled group, then one link
/// per line.
pub fn write_result<W: Write>(out: &mut W, result: &ResultPayload, t: &Strings, full: bool) -> io::Result<()> {
    if result.groups().is_empty() {
        return writeln!(out, "{}", t.no_links);
    }

    for group in result.groups() {
        if !group.label.is_empty() {
            writeln!(out, "# {}", group.label)?;
        }
        if group.links.is_empty() {
            writeln!(out, "{}", t.no_links)?;
        }
        for link in &group.links {
            if full {
                writeln!(out, "{link}")?;
            } else {
                writeln!(out, "{}", truncate_link(link, LINK_MAX_LEN))?;
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "crawllab=debug" } else { "crawllab=warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();
}

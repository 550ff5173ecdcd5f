use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use taskline::cli::print_help;
use taskline::config::Config;
use taskline::context::StandardContext;
use taskline::model::display::{format_preview, preview_items};
use taskline::model::item::ParsedTaskData;
use taskline::model::parser::TaskParser;

#[derive(Debug, Default)]
struct Args {
    lang: Option<String>,
    date: Option<NaiveDate>,
    json: bool,
    config: Option<PathBuf>,
    root: Option<PathBuf>,
    verbose: bool,
    help: bool,
    text: Vec<String>,
}

fn parse_args(raw: &[String]) -> Result<Args> {
    let mut args = Args::default();
    let mut iter = raw.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => args.help = true,
            "-v" | "--verbose" => args.verbose = true,
            "--json" => args.json = true,
            "--lang" => {
                args.lang = Some(iter.next().context("--lang needs a language code")?.clone());
            }
            "--date" => {
                let value = iter.next().context("--date needs YYYY-MM-DD")?;
                let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .with_context(|| format!("Invalid --date '{}'", value))?;
                args.date = Some(date);
            }
            "--config" => {
                args.config = Some(PathBuf::from(
                    iter.next().context("--config needs a path")?,
                ));
            }
            "-r" | "--root" => {
                args.root = Some(PathBuf::from(iter.next().context("--root needs a path")?));
            }
            // "--" ends option parsing
            "--" => {
                args.text.extend(iter.by_ref().cloned());
            }
            _ => args.text.push(arg.clone()),
        }
    }
    Ok(args)
}

fn load_config(args: &Args) -> Result<Config> {
    if let Some(path) = &args.config {
        return Config::load_from_path(path);
    }
    let ctx = StandardContext::new(args.root.clone());
    match Config::load(&ctx) {
        Ok(cfg) => Ok(cfg),
        Err(e) if Config::is_missing_config_error(&e) => {
            let path = Config::path_string(&ctx).unwrap_or_default();
            log::debug!("No config at '{}', using defaults", path);
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

fn main() -> Result<()> {
    let raw: Vec<String> = env::args().collect();
    let args = parse_args(&raw)?;

    if args.help {
        print_help("taskline");
        return Ok(());
    }

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        ConfigBuilder::new().build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut config = load_config(&args)?;
    if let Some(lang) = &args.lang {
        config.language = lang.clone();
    }
    let parser = TaskParser::new(config.parser_options());

    let reference: NaiveDateTime = match args.date {
        Some(d) => d.and_time(Local::now().time()),
        None => Local::now().naive_local(),
    };

    let inputs: Vec<String> = if args.text.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()?
            .into_iter()
            .filter(|l| !l.trim().is_empty())
            .collect()
    } else {
        vec![args.text.join(" ")]
    };

    let results: Vec<ParsedTaskData> = inputs
        .iter()
        .map(|line| parser.parse_at(line, reference))
        .collect();

    if args.json {
        let out = if results.len() == 1 {
            results[0].to_json()?
        } else {
            serde_json::to_string_pretty(&results)?
        };
        println!("{}", out);
    } else {
        let blocks: Vec<String> = results
            .iter()
            .map(|r| format_preview(&preview_items(r)))
            .collect();
        println!("{}", blocks.join("\n\n"));
    }
    Ok(())
}

// src/cli.rs
use std::{env, path::PathBuf};

use crate::{
    config::datasets::DatasetConfig,
    csv::Delim,
    file, scrape,
    store::DatasetCache,
};

enum Action {
    ScrapeUrl(String),
    ExportDataset(String),
    ListDatasets,
}

struct Params {
    action: Option<Action>,
    data_dir: Option<PathBuf>,
    out: String,
    format: Delim,
    include_headers: bool,
}

impl Params {
    fn new() -> Self {
        Self {
            action: None,
            data_dir: None,
            out: s!(),
            format: Delim::Csv,
            include_headers: true,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;

    let config = match &params.data_dir {
        Some(dir) => DatasetConfig::stock(dir),
        None => DatasetConfig::from_env(),
    };

    match params.action {
        Some(Action::ListDatasets) => list_datasets(config),
        Some(Action::ScrapeUrl(ref url)) => scrape_to_file(&params, url),
        Some(Action::ExportDataset(ref name)) => export_dataset(&params, config, name),
        None => Err("Specify --url <url>, --dataset <name> or --list-datasets".into()),
    }
}

fn list_datasets(config: DatasetConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut cache = DatasetCache::new(config);
    cache.ensure_loaded();

    let names: Vec<String> = cache.names().iter().map(|n| s!(*n)).collect();
    for name in &names {
        let ds = cache.dataset(name);
        println!("{}: {} rows, {} columns", name, ds.row_count(), ds.col_count());
    }
    for w in cache.warnings() {
        eprintln!("Warning: {w}");
    }
    Ok(())
}

fn scrape_to_file(params: &Params, url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let ds = scrape::scrape_table(url)?;

    let default_filename = format!("scraped.{}", ext_for(params.format));
    let path = file::resolve_out_path(&params.out, &default_filename)?;
    let written = file::write_table(&path, &None, &ds.rows, params.format)?;
    println!("Wrote {} row(s) → {}", ds.row_count(), written.display());
    Ok(())
}

fn export_dataset(
    params: &Params,
    config: DatasetConfig,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if config.path_for(name).is_none() {
        return Err(format!("Unknown dataset: {name}").into());
    }

    let mut cache = DatasetCache::new(config);
    cache.ensure_loaded();
    for w in cache.warnings() {
        eprintln!("Warning: {w}");
    }

    let include_headers = params.include_headers;
    let format = params.format;
    let ds = cache.dataset(name);

    let headers = if include_headers { ds.headers.clone() } else { None };
    let default_filename = format!(
        "{}.{}",
        file::sanitize_filename(name, "dataset"),
        ext_for(format)
    );
    let path = file::resolve_out_path(&params.out, &default_filename)?;
    let written = file::write_table(&path, &headers, &ds.rows, format)?;
    println!("Wrote {} row(s) → {}", ds.row_count(), written.display());
    Ok(())
}

fn ext_for(delim: Delim) -> &'static str {
    match delim { Delim::Csv => "csv", Delim::Tsv => "tsv" }
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" | "-u" => {
                let v = args.next().ok_or("Missing value for --url")?;
                params.action = Some(Action::ScrapeUrl(v));
            }
            "--dataset" | "-d" => {
                let v = args.next().ok_or("Missing value for --dataset")?;
                params.action = Some(Action::ExportDataset(v));
            }
            "--list-datasets" => params.action = Some(Action::ListDatasets),
            "--data-dir" => {
                let v = args.next().ok_or("Missing value for --data-dir")?;
                params.data_dir = Some(PathBuf::from(v));
            }
            "-o" | "--out" => params.out = args.next().ok_or("Missing output path")?,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => params.include_headers = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

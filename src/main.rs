// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use anyhow::Error;
use books::BooksController;
use clap::{App, Arg, ArgMatches};
use config::Config;
use controller::ToTable;
use engine::{features::FeatureSpec, Matrix, PreparedData, RatingMatrixBuilder};
use prettytable::{format::consts::FORMAT_NO_LINESEP, Cell, Row, Table};
use simplelog::{LevelFilter, TermLogger, TerminalMode};
use std::{collections::HashMap, str::FromStr};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn app() -> App<'static, 'static> {
    App::new("rating-matrix")
        .version(VERSION)
        .about("Builds the item x user rating matrix of the Book-Crossing dataset")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("TOML configuration, defaults are used when missing"),
        )
        .arg(
            Arg::with_name("data")
                .short("d")
                .long("data")
                .value_name("DIR")
                .takes_value(true)
                .help("Directory holding books.csv, ratings.csv and users.csv"),
        )
        .arg(
            Arg::with_name("features")
                .short("n")
                .long("features")
                .value_name("N")
                .takes_value(true)
                .help("Also draw random latent features of dimension N"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .takes_value(true)
                .help("Seed for the latent features"),
        )
        .arg(
            Arg::with_name("preview")
                .short("p")
                .long("preview")
                .value_name("K")
                .takes_value(true)
                .default_value("5")
                .help("Print the top-left K x K corner of the matrix"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Increase logging verbosity"),
        )
}

fn parsed<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>, Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(matches.value_of(name).map(str::parse).transpose()?)
}

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    if let Err(e) = TermLogger::init(level, simplelog::Config::default(), TerminalMode::Mixed) {
        eprintln!("Couldn't initialize logger: {}", e);
    }
}

fn feature_spec(features: &config::FeaturesConfig) -> Option<FeatureSpec> {
    match (features.dimension, features.seed) {
        (Some(dimension), seed) => Some(FeatureSpec { dimension, seed }),
        (None, Some(seed)) => {
            log::warn!("Ignoring seed {}, no feature dimension was given", seed);
            None
        }
        (None, None) => None,
    }
}

fn summary(prepared: &PreparedData<BooksController>) -> HashMap<&'static str, String> {
    let (rows, cols) = prepared.matrix.shape();

    let mut summary = HashMap::new();
    summary.insert("books (rows)", rows.to_string());
    summary.insert("users (columns)", cols.to_string());
    summary.insert("observed ratings", prepared.matrix.nnz().to_string());
    summary.insert("density", format!("{:.6}", prepared.matrix.density()));
    summary.insert("source books", prepared.items.len().to_string());
    summary.insert("source ratings", prepared.ratings.len().to_string());
    summary.insert("source users", prepared.users.len().to_string());

    if let Some(features) = &prepared.features {
        let (items, n) = features.items.dim();
        let (users, _) = features.users.dim();
        summary.insert("item features", format!("{} x {}", items, n));
        summary.insert("user features", format!("{} x {}", users, n));
    }

    summary
}

fn preview(matrix: &Matrix<BooksController>, k: usize) -> Table {
    let mut table = Table::new();

    let mut header = vec![Cell::new("ISBN")];
    for user_id in matrix.user_ids().iter().take(k) {
        header.push(Cell::new(&user_id.to_string()));
    }
    table.set_titles(Row::new(header));

    for (row, isbn) in matrix.item_ids().iter().enumerate().take(k) {
        let mut cells = vec![Cell::new(isbn)];
        for col in 0..matrix.user_ids().len().min(k) {
            let cell = match matrix.values()[(row, col)] {
                Some(score) => format!("{:.1}", score),
                None => "-".into(),
            };
            cells.push(Cell::new(&cell));
        }
        table.add_row(Row::new(cells));
    }

    table.set_format(*FORMAT_NO_LINESEP);
    table
}

fn main() -> Result<(), Error> {
    let matches = app().get_matches();
    init_logger(matches.occurrences_of("verbose"));

    let mut config = match matches.value_of("config") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(dir) = matches.value_of("data") {
        config.data.dir = dir.into();
    }

    if let Some(dimension) = parsed(&matches, "features")? {
        config.features.dimension = Some(dimension);
    }

    if let Some(seed) = parsed(&matches, "seed")? {
        config.features.seed = Some(seed);
    }

    let k: usize = parsed(&matches, "preview")?.unwrap_or_default();
    log::debug!("Running with {:?}", config);

    let controller = BooksController::open(&config.data)?;
    let features = feature_spec(&config.features);

    let prepared = RatingMatrixBuilder::new(&controller, &config).prepare(features)?;

    summary(&prepared).to_table().printstd();
    if k > 0 {
        preview(&prepared.matrix, k).printstd();
    }

    Ok(())
}

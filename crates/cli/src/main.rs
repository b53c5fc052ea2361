use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use film_catalog::{CatalogConfig, Film, FilmCatalog, Year, TOP_N};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

/// film-stats - Analytical queries over a film dataset
#[derive(Parser, Debug)]
#[command(name = "film-stats")]
#[command(about = "Query a static JSON film catalog", long_about = None)]
struct Cli {
    /// TOML file with `resource_dir` and `datafile` keys
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the dataset (overrides the config file)
    #[arg(long)]
    resource_dir: Option<PathBuf>,

    /// Dataset file name inside the resource directory (overrides the config file)
    #[arg(long)]
    datafile: Option<String>,

    /// Enable debug logging for the catalog
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show headline numbers for the catalog
    Summary,

    /// List films grouped by country
    ByCountry,

    /// Show the country that made the most films
    TopCountry,

    /// Show the year with the most films
    TopYear,

    /// List every distinct genre
    Genres,

    /// List films from a country released within a year range (inclusive)
    Range {
        #[arg(long)]
        country: String,

        #[arg(long)]
        from: Year,

        #[arg(long)]
        to: Year,
    },

    /// List films grouped by genre
    ByGenre,

    /// Show the films with the highest margin
    TopMargin {
        /// Only consider films released in or after this year
        #[arg(long, requires = "to")]
        from: Option<Year>,

        /// Only consider films released in or before this year
        #[arg(long, requires = "from")]
        to: Option<Year>,

        #[arg(long, default_value_t = TOP_N)]
        limit: usize,
    },

    /// Ratio between the occurrence counts of two genres
    Ratio { genre_x: String, genre_y: String },

    /// Show the best-rated films, lower margin first on equal ratings
    TopRated {
        #[arg(long, default_value_t = TOP_N)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.verbose);

    let config = resolve_config(&cli)?;
    let path = config.resolve_path();

    let start = Instant::now();
    let catalog = FilmCatalog::load(&config)
        .with_context(|| format!("Failed to load film catalog from {}", path.display()))?;
    debug!("Loaded catalog in {:?}", start.elapsed());

    match cli.command {
        Commands::Summary => handle_summary(&catalog),
        Commands::ByCountry => handle_by_country(&catalog),
        Commands::TopCountry => handle_top_country(&catalog)?,
        Commands::TopYear => handle_top_year(&catalog)?,
        Commands::Genres => handle_genres(&catalog),
        Commands::Range { country, from, to } => handle_range(&catalog, &country, from, to),
        Commands::ByGenre => handle_by_genre(&catalog),
        Commands::TopMargin { from, to, limit } => handle_top_margin(&catalog, from.zip(to), limit)?,
        Commands::Ratio { genre_x, genre_y } => handle_ratio(&catalog, &genre_x, &genre_y)?,
        Commands::TopRated { limit } => handle_top_rated(&catalog, limit)?,
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "film_catalog=debug,info" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

/// Config file first, then command-line overrides
fn resolve_config(cli: &Cli) -> Result<CatalogConfig> {
    let mut config = match &cli.config {
        Some(path) => CatalogConfig::from_toml_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => CatalogConfig::default(),
    };
    if let Some(dir) = &cli.resource_dir {
        config = config.with_resource_dir(dir.clone());
    }
    if let Some(datafile) = &cli.datafile {
        config = config.with_datafile(datafile.clone());
    }
    Ok(config)
}

fn handle_summary(catalog: &FilmCatalog) {
    let summary = catalog.summary();
    println!("{}", "Catalog summary:".bold().blue());
    println!("{}Films: {}", "• ".green(), summary.films);
    println!("{}Countries: {}", "• ".green(), summary.countries);
    println!("{}Genres: {}", "• ".green(), summary.genres);
    if let Some((first, last)) = summary.year_span {
        println!("{}Years: {} - {}", "• ".green(), first, last);
    }
}

fn handle_by_country(catalog: &FilmCatalog) {
    for (country, films) in catalog.films_by_country() {
        print_group(country, &films);
    }
}

fn handle_top_country(catalog: &FilmCatalog) -> Result<()> {
    let (country, count) = catalog.country_with_most_films()?;
    println!("{} made the most films: {}", country.bold(), count.to_string().green());
    Ok(())
}

fn handle_top_year(catalog: &FilmCatalog) -> Result<()> {
    let (year, count) = catalog.year_with_most_films()?;
    println!("{} saw the most films: {}", year.to_string().bold(), count.to_string().green());
    Ok(())
}

fn handle_genres(catalog: &FilmCatalog) {
    println!("{}", "Genres:".bold().blue());
    for genre in catalog.all_genres() {
        println!("{}{}", "• ".green(), genre);
    }
}

fn handle_range(catalog: &FilmCatalog, country: &str, from: Year, to: Year) {
    let films = catalog.films_by_country_and_year_range(country, from, to);
    print_films(&format!("Films from {} released {}-{}:", country, from, to), &films);
}

fn handle_by_genre(catalog: &FilmCatalog) {
    for (genre, films) in catalog.films_by_genre() {
        print_group(genre, &films);
    }
}

fn handle_top_margin(catalog: &FilmCatalog, range: Option<(Year, Year)>, limit: usize) -> Result<()> {
    match range {
        Some((from, to)) => {
            let films = catalog.top_by_margin_in_year_range(from, to, limit)?;
            print_films(&format!("Highest margin, released {}-{}:", from, to), &films);
        }
        None => {
            let films = catalog.top_by_margin(limit)?;
            print_films("Highest margin:", &films);
        }
    }
    Ok(())
}

fn handle_ratio(catalog: &FilmCatalog, genre_x: &str, genre_y: &str) -> Result<()> {
    let ratio = catalog.genre_ratio(genre_x, genre_y)?;
    println!(
        "{} / {} = {} ({} / {})",
        genre_x,
        genre_y,
        format!("{:.4}", ratio).green(),
        catalog.genre_count(genre_x),
        catalog.genre_count(genre_y)
    );
    Ok(())
}

fn handle_top_rated(catalog: &FilmCatalog, limit: usize) -> Result<()> {
    let films = catalog.top_by_rating_then_low_margin(limit)?;
    print_films("Highest rated:", &films);
    Ok(())
}

fn print_group(label: &str, films: &[&Film]) {
    println!("{} ({})", label.bold().blue(), films.len());
    for film in films {
        println!("  {}", film);
    }
}

/// Numbered listing under a header
fn print_films(header: &str, films: &[&Film]) {
    println!("{}", header.bold().blue());
    if films.is_empty() {
        println!("  {}", "no films".dimmed());
    }
    for (rank, film) in films.iter().enumerate() {
        println!("{}. {}", (rank + 1).to_string().green(), film);
    }
}

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tree_inventory_tools::{
    analysis::inspect_structure,
    io,
    processing::{join_translations, split_species_names},
    visualization::{print_join_summary, print_split_summary, print_structure_report},
    FeatureCollection, InventoryError, ToolConfig,
};

#[derive(Parser)]
#[command(
    name = "arbres",
    about = "Tree inventory tools - split Latin names, translate species and inspect GeoJSON",
    version,
    author
)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dataset identifier used to derive default file names
    #[arg(long, global = true)]
    city: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split the Latin name of each tree into `genre` and `espece`
    Split {
        /// Input GeoJSON (default: DATA_<city>.geojson)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output GeoJSON (default: the input file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Property holding the Latin name
        #[arg(short, long)]
        source_property: Option<String>,
    },

    /// Attach French names and keep only edible species
    Translate {
        /// Translation table, Latin-1 CSV separated by ';'
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Input GeoJSON (default: DATA_<city>.geojson)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output GeoJSON (default: <city>.geojson)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Describe the structure of a GeoJSON file
    Inspect {
        /// Input GeoJSON (default: DATA_<city>.geojson)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Property whose distinct values are listed
        #[arg(short, long)]
        key: Option<String>,
    },
}

fn load_config(cli: &Cli) -> Result<ToolConfig> {
    let mut config = match &cli.config {
        Some(path) => ToolConfig::load(path)?,
        None => ToolConfig::default(),
    };
    if let Some(city) = &cli.city {
        config.city = city.clone();
    }
    Ok(config)
}

/// Read a feature collection, turning a wrong root type into a warning.
fn read_collection(path: &Path) -> Result<Option<FeatureCollection>> {
    match io::read_geojson(path) {
        Ok(collection) => Ok(Some(collection)),
        Err(InventoryError::NotFeatureCollection(found)) => {
            eprintln!(
                "{}: {} is not a FeatureCollection (type: {found}), nothing written",
                "Warning".yellow(),
                path.display()
            );
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Split {
            input,
            output,
            source_property,
        } => {
            let input = input.unwrap_or_else(|| config.raw_dataset());
            let output = output.unwrap_or_else(|| input.clone());
            let source_property = source_property.unwrap_or(config.source_property);

            let Some(mut collection) = read_collection(&input)? else {
                return Ok(());
            };
            let report = split_species_names(&mut collection, &source_property);
            io::write_geojson(&collection, &output)?;

            print_split_summary(&report);
            println!(
                "{} Modified file written to {}",
                "Success:".green().bold(),
                output.display()
            );
        }

        Commands::Translate {
            table,
            input,
            output,
        } => {
            let table_path = table.unwrap_or_else(|| config.translation_table.clone());
            let input = input.unwrap_or_else(|| config.raw_dataset());
            let output = output.unwrap_or_else(|| config.translated_dataset());

            let table = io::read_translations(&table_path)?;
            let Some(collection) = read_collection(&input)? else {
                return Ok(());
            };
            let (translated, report) = join_translations(collection, &table);

            for label in &report.unresolved {
                println!("{label}");
            }
            io::write_geojson(&translated, &output)?;

            print_join_summary(&report);
            println!(
                "{} {} -> {}",
                "Success:".green().bold(),
                input.display(),
                output.display()
            );
        }

        Commands::Inspect { input, key } => {
            let input = input.unwrap_or_else(|| config.raw_dataset());
            let key = key.unwrap_or(config.inspect_key);

            let document = io::read_document(&input)?;
            let report = inspect_structure(&document, &key);
            print_structure_report(&report);
        }
    }

    Ok(())
}

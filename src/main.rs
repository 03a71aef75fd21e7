use clap::{Parser, Subcommand};
use lengthconv::config::{resolve_unit, Config, ConfigError};
use lengthconv::units::{ConversionEngine, UnitTable};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lengthconv")]
#[command(about = "Convert lengths between metric and imperial units", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value from one unit to another
    Convert {
        /// Value to convert (e.g., "12.5", "-3", "1e3")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit, by label or symbol (default: from config or table)
        #[arg(short, long)]
        from: Option<String>,

        /// Target unit, by label or symbol (default: from config or table)
        #[arg(short, long)]
        to: Option<String>,

        /// Unit table: "length" or "meter-foot" (overrides config)
        #[arg(long)]
        table: Option<String>,

        /// Config file (TOML)
        #[arg(short, long)]
        config: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the units of a table
    Units {
        /// Unit table: "length" or "meter-foot"
        #[arg(long, default_value = "length")]
        table: String,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            value,
            from,
            to,
            table,
            config,
            json,
        } => match convert_value(
            &value,
            from.as_deref(),
            to.as_deref(),
            table.as_deref(),
            config.as_deref(),
            json,
        ) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Units { table, json } => match list_units(&table, json) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lengthconv=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn convert_value(
    raw: &str,
    from: Option<&str>,
    to: Option<&str>,
    table: Option<&str>,
    config_path: Option<&str>,
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => {
            tracing::info!(path, "loading config");
            Config::load_from_file(path)?
        }
        None => Config::empty(),
    };

    if let Some(table) = table {
        config.table = table.to_string();
    }

    let engine = config.engine()?;
    let (default_from, default_to) = config.default_units()?;

    let from = match from {
        Some(name) => resolve_unit(engine.table(), name)?,
        None => default_from,
    };
    let to = match to {
        Some(name) => resolve_unit(engine.table(), name)?,
        None => default_to,
    };

    let conversion = engine.convert(raw, from, to)?;

    if as_json {
        let (formatted, label) = conversion.parts();
        let out = json!({
            "input": raw,
            "from": from.kind,
            "to": to.kind,
            "value": conversion.value,
            "formatted": formatted,
            "label": label,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", conversion);
    }

    Ok(())
}

fn list_units(table_name: &str, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let table = UnitTable::by_name(table_name)
        .ok_or_else(|| ConfigError::UnknownTable(table_name.to_string()))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(table)?);
        return Ok(());
    }

    let engine = ConversionEngine::new(table);
    let (from, to) = engine.default_units();

    println!("Table: {}", table.name);
    println!("Default: {} -> {}", from.label(), to.label());
    println!("\nUnits ({}):", table.units().len());
    for unit in table.units() {
        println!(
            "  - {} ({}) = {} m",
            unit.label(),
            unit.symbol(),
            unit.scale_to_base
        );
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use qknn::{dataset, nearest, Classifier, Params, Query};

#[derive(Parser)]
#[command(name = "qknn")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Classify {
        weight: f64,
        size: f64,
        #[arg(long, default_value_t = 3)]
        k: usize,
    },
    Neighbors {
        weight: f64,
        size: f64,
        #[arg(long, default_value_t = 3)]
        k: usize,
    },
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Classify { weight, size, k } => {
            let classifier = Classifier::with_params(dataset::quality_control(), Params { k });
            let label = classifier.classify(&Query::new(weight, size))?;
            println!(
                "The item with weight {weight} kg and size {size} cm has been classified as: {label}"
            );
        }
        Commands::Neighbors { weight, size, k } => {
            let results = nearest(&dataset::quality_control(), &Query::new(weight, size), k);
            for r in results {
                println!(
                    "{} {} {} {}",
                    r.point.weight, r.point.size, r.point.label, r.distance
                );
            }
        }
    }
    Ok(())
}

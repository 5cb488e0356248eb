use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

const OUTPUT_PATH: &str = "dist/snake.svg";

#[derive(Parser, Debug)]
#[command(name = "snakegrid", version, about = "Write the animated snake grid SVG")]
struct Cli {
    /// Preset to render.
    #[arg(long, value_enum, default_value_t = VariantChoice::TwoPhase)]
    variant: VariantChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantChoice {
    TwoPhase,
    Diagonal,
    Serpentine,
    Ember,
}

impl From<VariantChoice> for snakegrid::Variant {
    fn from(choice: VariantChoice) -> Self {
        match choice {
            VariantChoice::TwoPhase => Self::TwoPhase,
            VariantChoice::Diagonal => Self::Diagonal,
            VariantChoice::Serpentine => Self::Serpentine,
            VariantChoice::Ember => Self::Ember,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let variant = snakegrid::Variant::from(cli.variant);
    tracing::debug!(variant = variant.name(), "selected preset");

    let mut sink = snakegrid::FileSink::new(OUTPUT_PATH);
    snakegrid::generate_to(&variant.config(), &mut sink)?;

    println!("Wrote {OUTPUT_PATH}");
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use structopt::StructOpt;
use tracing::{error, Level};

use pendulum::{AngleUnit, PendulumConfig, PendulumProperties};

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Closed-form properties of a simple pendulum
#[derive(StructOpt, Debug)]
#[structopt(name = "pendulum")]
struct CliArgs {
    /// Pendulum length [m]
    #[structopt(short, long, default_value = "1.0", allow_hyphen_values = true)]
    length: f64,

    /// Bob mass [kg]
    #[structopt(short, long, default_value = "1.0", allow_hyphen_values = true)]
    mass: f64,

    /// Maximum angular displacement [rad, or deg with --degrees]
    #[structopt(short, long, default_value = "0.001", allow_hyphen_values = true)]
    theta: f64,

    /// Interpret theta in degrees
    #[structopt(long)]
    degrees: bool,

    /// YAML or JSON config file, overrides the individual values
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Output format: text, json or yaml
    #[structopt(short, long, default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging
    #[structopt(short, long)]
    verbose: bool,
}

impl CliArgs {
    fn pendulum_config(&self) -> Result<PendulumConfig, Box<dyn std::error::Error>> {
        if let Some(path) = &self.config {
            return Ok(PendulumConfig::from_file(path)?);
        }

        Ok(PendulumConfig {
            length: self.length,
            mass: self.mass,
            theta: self.theta,
            angle_unit: if self.degrees {
                AngleUnit::Degrees
            } else {
                AngleUnit::Radians
            },
        })
    }
}

fn render(
    props: &PendulumProperties,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let output = match format {
        OutputFormat::Text => props.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(props)?,
        OutputFormat::Yaml => serde_yaml::to_string(props)?,
    };
    Ok(output)
}

fn evaluate(args: &CliArgs) -> Result<String, Box<dyn std::error::Error>> {
    let pendulum = args.pendulum_config()?.to_pendulum()?;
    let props = pendulum.properties();
    render(&props, args.format)
}

fn main() {
    let args = CliArgs::from_args();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to init logging. {}", e);
    }

    match evaluate(&args) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

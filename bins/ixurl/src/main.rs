//! ixurl: build signed image-service URLs and responsive srcsets.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use ixurl_cli::output::{describe_srcset, srcset_candidates, Status};
use ixurl_core::{BuilderConfig, Param, Scheme, UrlBuilder};
use ixurl_srcset::{SrcsetExt, SrcsetOptions, TargetWidthRange};
use ixurl_telemetry::TelemetryConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ixurl")]
#[command(about = "Build signed image URLs and responsive srcsets")]
#[command(version)]
struct Cli {
    /// Builder config file (TOML); defaults to ./.ixurl.toml if present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Service domain, e.g. demo.imgix.net
    #[arg(short, long, global = true)]
    domain: Option<String>,

    /// Signing token
    #[arg(long, global = true, env = "IX_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Generate http:// URLs
    #[arg(long, global = true)]
    http: bool,

    /// Omit the ixlib informational parameter
    #[arg(long, global = true)]
    no_lib_param: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a single URL
    Url {
        /// Image path
        path: String,
        /// Parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<Param>,
    },
    /// Build a srcset attribute value
    Srcset {
        /// Image path
        path: String,
        /// Parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<Param>,
        #[command(flatten)]
        bounds: WidthBounds,
        /// Omit the per-DPR quality in fixed-dimension srcsets
        #[arg(long)]
        no_variable_quality: bool,
        /// Explicit widths, bypassing the width generator
        #[arg(
            long,
            value_delimiter = ',',
            conflicts_with_all = ["min_width", "max_width", "tolerance", "no_variable_quality"]
        )]
        widths: Vec<u32>,
        /// Output candidates as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the fluid-width target widths
    Widths {
        #[command(flatten)]
        bounds: WidthBounds,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify the signature of a generated URL
    Verify {
        /// Full URL including its s parameter
        url: String,
    },
}

#[derive(Args)]
struct WidthBounds {
    /// Smallest width
    #[arg(long)]
    min_width: Option<u32>,
    /// Largest width
    #[arg(long)]
    max_width: Option<u32>,
    /// Width tolerance, at least 0.01 and below 1
    #[arg(long)]
    tolerance: Option<f64>,
}

impl WidthBounds {
    fn options(&self) -> SrcsetOptions {
        SrcsetOptions {
            min_width: self.min_width,
            max_width: self.max_width,
            tolerance: self.tolerance,
            ..SrcsetOptions::default()
        }
    }
}

fn parse_param(raw: &str) -> std::result::Result<Param, String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok(Param::new(key, value)),
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = ixurl_telemetry::init_with_config(TelemetryConfig::for_verbosity(cli.verbose)) {
        Status::warning(&e.to_string());
    }

    if let Err(e) = run(cli) {
        Status::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Widths { bounds, json } => {
            let defaults = match load_config(&cli)? {
                Some(config) => config.srcset,
                None => Default::default(),
            };
            let range = bounds.options().width_range(defaults)?;
            print_widths(&range, *json)?;
        }

        Commands::Url { path, params } => {
            let builder = builder(&cli)?;
            println!("{}", builder.create_url(path, params));
        }

        Commands::Srcset {
            path,
            params,
            bounds,
            no_variable_quality,
            widths,
            json,
        } => {
            let builder = builder(&cli)?;
            let srcset = if widths.is_empty() {
                let options = bounds.options().with_variable_quality(!no_variable_quality);
                builder.create_srcset(path, params, &options)?
            } else {
                builder.create_srcset_from_widths(path, params, widths)
            };

            if *json {
                println!("{}", serde_json::to_string_pretty(&srcset_candidates(&srcset))?);
            } else {
                println!("{srcset}");
            }
            if cli.verbose {
                Status::info(&describe_srcset(&srcset));
            }
        }

        Commands::Verify { url } => {
            let builder = builder(&cli)?;
            if !builder.is_signed() {
                bail!("verify needs a signing token (--token or IX_TOKEN)");
            }
            builder.verify_url(url).context("signature check failed")?;
            Status::success("Signature valid");
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Option<BuilderConfig>> {
    match &cli.config {
        Some(path) => BuilderConfig::load(path)
            .map(Some)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(BuilderConfig::find_and_load()?),
    }
}

fn builder(cli: &Cli) -> Result<UrlBuilder> {
    let mut config = match (load_config(cli)?, &cli.domain) {
        (Some(mut config), Some(domain)) => {
            config.domain = domain.clone();
            config
        }
        (Some(config), None) => config,
        (None, Some(domain)) => BuilderConfig::new(domain.clone()),
        (None, None) => bail!("no domain given; pass --domain or set it in a config file"),
    };

    if let Some(token) = &cli.token {
        config.token = Some(token.clone());
    }
    if cli.http {
        config.scheme = Scheme::Http;
    }
    if cli.no_lib_param {
        config.include_lib_param = false;
    }

    tracing::debug!(domain = %config.domain, "Using builder config");
    Ok(UrlBuilder::from_config(config)?)
}

fn print_widths(range: &TargetWidthRange, json: bool) -> Result<()> {
    let widths = range.widths();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "range": range,
                "widths": widths,
            }))?
        );
    } else {
        let line: Vec<String> = widths.iter().map(u32::to_string).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}

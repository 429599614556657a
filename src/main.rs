use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};
use viewres::{ConfigLoader, Priority, ViewNameResolver};

/// Resolve view names to template files
///
/// Directories and extensions come from the config file first, then from the
/// command line. Higher priorities are tried first; ties keep their order.
#[derive(Parser, Debug)]
#[command(name = "viewres")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// View names to resolve
    #[arg(required = true)]
    names: Vec<String>,

    /// View directory, optionally with a priority suffix
    #[arg(short = 'p', long = "path", value_name = "DIR[:PRIORITY]", value_parser = parse_weighted)]
    paths: Vec<Weighted>,

    /// View extension, optionally with a priority suffix
    #[arg(short = 'e', long = "ext", value_name = "EXT[:PRIORITY]", value_parser = parse_weighted)]
    extensions: Vec<Weighted>,

    /// Config file (defaults to .viewres.toml, $VIEWRES_CONFIG, then the user config dir)
    #[arg(short, long, conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Do not read any config file
    #[arg(long)]
    no_config: bool,

    /// Show every candidate path that is probed
    #[arg(long)]
    candidates: bool,

    /// Print results as JSON lines
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Log to file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// A command-line value with an optional `:PRIORITY` suffix
#[derive(Debug, Clone)]
struct Weighted {
    value: String,
    priority: Option<Priority>,
}

/// Splits `value:priority`. The suffix only counts when it is an integer,
/// so `C:\views` stays a plain path.
fn parse_weighted(raw: &str) -> Result<Weighted, String> {
    if raw.is_empty() {
        return Err("value must not be empty".to_string());
    }

    if let Some((value, priority)) = raw.rsplit_once(':') {
        if let Ok(priority) = priority.parse::<Priority>() {
            if value.is_empty() {
                return Err(format!("missing value before priority in '{}'", raw));
            }
            return Ok(Weighted {
                value: value.to_string(),
                priority: Some(priority),
            });
        }
    }

    Ok(Weighted {
        value: raw.to_string(),
        priority: None,
    })
}

#[derive(Debug, Serialize)]
struct Resolution<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    candidates: Vec<Probe>,
}

#[derive(Debug, Serialize)]
struct Probe {
    path: PathBuf,
    exists: bool,
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)?;
        subscriber.with_writer(file).with_ansi(false).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

fn build_resolver(args: &Args) -> Result<ViewNameResolver> {
    let config = if args.no_config {
        ConfigLoader::default()
    } else {
        ConfigLoader::load(args.config.as_deref())?
    };

    if let Some(source) = config.source() {
        debug!("Using config file {}", source.display());
    }

    let mut resolver = config.build_resolver();

    for path in &args.paths {
        match path.priority {
            Some(priority) => resolver.register_path_with_priority(&path.value, priority),
            None => resolver.register_path(&path.value),
        }
    }

    for ext in &args.extensions {
        match ext.priority {
            Some(priority) => resolver.register_extension_with_priority(&ext.value, priority),
            None => resolver.register_extension(&ext.value),
        }
    }

    Ok(resolver)
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args.log_level, args.log_file.clone())?;

    let resolver = build_resolver(&args)?;
    if resolver.paths().is_empty() {
        anyhow::bail!("No view paths configured");
    }
    if resolver.extensions().is_empty() {
        anyhow::bail!("No view extensions configured");
    }

    let mut failed = 0;

    for name in &args.names {
        let probes = if args.candidates {
            resolver
                .candidates(name)
                .into_iter()
                .map(|path| Probe {
                    exists: path.exists(),
                    path,
                })
                .collect()
        } else {
            Vec::new()
        };

        let outcome = resolver.resolve(name);
        if outcome.is_err() {
            failed += 1;
        }

        if args.json {
            let resolution = match outcome {
                Ok(path) => Resolution {
                    name,
                    path: Some(path),
                    error: None,
                    candidates: probes,
                },
                Err(e) => Resolution {
                    name,
                    path: None,
                    error: Some(e.to_string()),
                    candidates: probes,
                },
            };
            println!("{}", serde_json::to_string(&resolution)?);
            continue;
        }

        if args.candidates {
            println!("{}:", name);
            for probe in &probes {
                let marker = if probe.exists { '+' } else { '-' };
                println!("  {} {}", marker, probe.path.display());
            }
        }

        match outcome {
            Ok(path) => println!("{}", path.display()),
            Err(e) => eprintln!("{}", e),
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} views could not be resolved", failed, args.names.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weighted_with_priority() {
        let weighted = parse_weighted("views:3").unwrap();
        assert_eq!(weighted.value, "views");
        assert_eq!(weighted.priority, Some(3));

        let negative = parse_weighted(".php:-1").unwrap();
        assert_eq!(negative.value, ".php");
        assert_eq!(negative.priority, Some(-1));
    }

    #[test]
    fn test_parse_weighted_without_priority() {
        let weighted = parse_weighted("views").unwrap();
        assert_eq!(weighted.value, "views");
        assert_eq!(weighted.priority, None);

        let drive = parse_weighted(r"C:\views").unwrap();
        assert_eq!(drive.value, r"C:\views");
        assert_eq!(drive.priority, None);
    }

    #[test]
    fn test_parse_weighted_rejects_empty() {
        assert!(parse_weighted("").is_err());
        assert!(parse_weighted(":2").is_err());
    }

    #[test]
    fn test_args_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}

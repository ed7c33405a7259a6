mod report;

use mplocate::{Dataset, Options, Resolver};
use std::io::{self, IsTerminal, Read};
use std::sync::Arc;

const DEFAULT_AREAS_PATH: &str = "data/postcode-areas.json";
const DEFAULT_REPS_PATH: &str = "data/mps.json";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let (dataset, warnings) = match Dataset::from_files(&config.areas_path, &config.reps_path, config.strict)
    {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let resolver = Resolver::new(Arc::new(dataset));
    let opts = Options { limit: config.limit };
    let res = resolver.resolve_with(&config.input, &opts);
    report::print_resolution(&res, resolver.dataset(), &warnings, config.color);
}

struct CliConfig {
    input: String,
    areas_path: String,
    reps_path: String,
    limit: usize,
    strict: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut areas_path = DEFAULT_AREAS_PATH.to_string();
    let mut reps_path = DEFAULT_REPS_PATH.to_string();
    let mut limit = mplocate::DEFAULT_LIMIT;
    let mut strict = true;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("mplocate {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--lenient" => strict = false,
            "--areas" => {
                areas_path = args.next().ok_or_else(|| "error: --areas expects a path".to_string())?;
            }
            "--reps" => {
                reps_path = args.next().ok_or_else(|| "error: --reps expects a path".to_string())?;
            }
            "--limit" => {
                let value = args.next().ok_or_else(|| "error: --limit expects a value".to_string())?;
                limit = parse_limit(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--areas=") => {
                areas_path = arg.trim_start_matches("--areas=").to_string();
            }
            _ if arg.starts_with("--reps=") => {
                reps_path = arg.trim_start_matches("--reps=").to_string();
            }
            _ if arg.starts_with("--limit=") => {
                limit = parse_limit(arg.trim_start_matches("--limit="))?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no query provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, areas_path, reps_path, limit, strict, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("error: invalid --limit '{value}' (expected a positive integer)")),
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "mplocate {version}

Postcode-to-MP resolution CLI.

Usage:
  mplocate [OPTIONS] [--] <query...>
  mplocate [OPTIONS] --input <text>

Options:
  -i, --input <text>    Query: a postcode (BS5 1AA), an area code (BS5), or
                        free text (a name, constituency, or party). If
                        omitted, reads remaining args or stdin.
  --areas <path>        Postcode-area → constituency JSON map.
                        Default: {default_areas}
  --reps <path>         Representative dataset JSON array.
                        Default: {default_reps}
  --limit <n>           Cap on fallback-search results. Default: {default_limit}
  --lenient             Keep the first record per duplicate constituency and
                        warn, instead of rejecting the dataset.
  --color               Force ANSI color output.
  --no-color            Disable ANSI color output.
  -h, --help            Show this help message.
  -V, --version         Print version information.

Exit codes:
  0  Success (including an empty result set).
  1  Dataset failed to load or validate.
  2  Invalid arguments or missing query.
",
        version = env!("CARGO_PKG_VERSION"),
        default_areas = DEFAULT_AREAS_PATH,
        default_reps = DEFAULT_REPS_PATH,
        default_limit = mplocate::DEFAULT_LIMIT
    )
}

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use shunt_core::fixture::{builtin_cases, load_cases, run_cases};
use shunt_core::operators::{validate_table, OPERATOR_TABLE};
use shunt_core::{convert, to_postfix_string, ConvertOptions, Token, UnclosedGroups};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "shunt")]
#[command(about = "Convert tokenized infix expressions into postfix (Reverse Polish) notation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert infix expressions to postfix
    Convert {
        /// Tokens of a single expression (reads one expression per line from
        /// --input or stdin when omitted)
        tokens: Vec<String>,

        /// File with one whitespace-separated expression per line
        #[arg(short, long, conflicts_with = "tokens")]
        input: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Run fixture cases and report PASS/FAIL per case
    Check {
        /// JSON fixtures file (runs the built-in cases when omitted)
        fixtures: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Print the operator precedence table
    Table,
}

#[derive(clap::Args)]
struct OptionArgs {
    /// JSON file with conversion options (kebab-case keys)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum parenthesis nesting depth (unbounded when omitted)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Fail on '(' left unclosed at end of input instead of emitting it
    #[arg(long)]
    strict_parens: bool,
}

impl OptionArgs {
    fn resolve(&self) -> Result<ConvertOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open config file: {}", path.display()))?;
                serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("Failed to parse config from: {}", path.display()))?
            }
            None => ConvertOptions::default(),
        };
        if let Some(max_depth) = self.max_depth {
            options.max_depth = Some(max_depth);
        }
        if self.strict_parens {
            options.unclosed_groups = UnclosedGroups::Reject;
        }
        Ok(options)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for converted output
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let problems = validate_table();
    if !problems.is_empty() {
        bail!("Operator table is inconsistent: {}", problems.join("; "));
    }

    match cli.command {
        Commands::Convert {
            tokens,
            input,
            options,
            format,
        } => {
            let options = options.resolve()?;
            let mut writer = BufWriter::new(io::stdout());

            if !tokens.is_empty() {
                let postfix = convert(&tokens, &options).context("Conversion failed")?;
                write_postfix(&mut writer, &postfix, format)?;
            } else {
                let reader: Box<dyn BufRead> = match &input {
                    Some(path) => Box::new(BufReader::new(File::open(path).with_context(
                        || format!("Failed to open input file: {}", path.display()),
                    )?)),
                    None => Box::new(BufReader::new(io::stdin())),
                };
                for (i, line) in reader.lines().enumerate() {
                    let line = line.context("Failed to read input")?;
                    let tokens: Vec<&str> = line.split_ascii_whitespace().collect();
                    if tokens.is_empty() {
                        continue;
                    }
                    let postfix = convert(&tokens, &options)
                        .with_context(|| format!("Conversion failed on line {}", i + 1))?;
                    write_postfix(&mut writer, &postfix, format)?;
                }
            }

            writer.flush().context("Failed to flush output")?;
        }
        Commands::Check { fixtures, options } => {
            let options = options.resolve()?;
            let cases = match &fixtures {
                Some(path) => read_fixtures(path)?,
                None => builtin_cases(),
            };

            let report = run_cases(&cases, &options);
            println!("{report}");

            if !report.all_passed() {
                bail!(
                    "{} of {} fixture cases failed",
                    report.total() - report.passed(),
                    report.total()
                );
            }
        }
        Commands::Table => {
            println!("{:<10} {:>10}  associativity", "operator", "precedence");
            for (symbol, info) in OPERATOR_TABLE {
                println!(
                    "{:<10} {:>10}  {}",
                    symbol, info.precedence, info.associativity
                );
            }
        }
    }

    Ok(())
}

fn read_fixtures(path: &Path) -> Result<Vec<shunt_core::fixture::FixtureCase>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to open fixtures file: {}", path.display()))?;
    load_cases(&json).with_context(|| format!("Failed to parse fixtures from: {}", path.display()))
}

fn write_postfix(writer: &mut impl Write, postfix: &[Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(writer, "{}", to_postfix_string(postfix)).context("Failed to write output")?;
        }
        OutputFormat::Json => {
            let tokens: Vec<String> = postfix.iter().map(Token::to_string).collect();
            serde_json::to_writer(&mut *writer, &tokens).context("Failed to write JSON")?;
            writeln!(writer).context("Failed to write trailing newline")?;
        }
    }
    Ok(())
}

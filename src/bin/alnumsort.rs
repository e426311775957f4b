use alnumsort::{
    compare::sign,
    config::SortConfig,
    fixtures::{self, DemoCase, DEMO_CASES},
    input::parse_token_line,
    sort_both,
    table::{ColumnSpec, ColumnValues, Table},
    token::tokens_from_json,
    CaseRule, Comparator, Direction, Error, InternalResult, Token, Variant,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(
        short,
        long,
        default_value = "alnumsort.json",
        env = "ALNUMSORT_CONFIG",
        global = true
    )]
    config: PathBuf,

    /// Enable debug mode
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort tokens given as arguments, a comma-separated line or a JSON file
    Sort(SortArgs),

    /// Sort the values of columns in a delimited file
    Column(ColumnArgs),

    /// Run the built-in demo inputs under every variant
    Demo(DemoArgs),

    /// Compare two tokens under every variant
    Compare(CompareArgs),
}

#[derive(Args)]
struct OrderArgs {
    /// Comparator variant (category, char-run, lexical)
    #[arg(long)]
    variant: Option<Variant>,

    /// Sort direction (asc, desc); falls back to the config, both are printed when neither sets one
    #[arg(long)]
    direction: Option<Direction>,

    /// Case tie-break for char-run (uppercase-first, ignore)
    #[arg(long)]
    case_rule: Option<CaseRule>,

    /// Print JSON arrays
    #[arg(long)]
    json: bool,
}

impl OrderArgs {
    fn direction(&self, config: &SortConfig) -> Option<Direction> {
        self.direction.or(config.direction)
    }

    fn comparator(&self, config: &SortConfig) -> Comparator {
        let base = config.comparator();
        Comparator::new(
            self.variant.unwrap_or(base.variant),
            self.direction.unwrap_or(base.direction),
        )
        .with_case_rule(self.case_rule.unwrap_or(base.case_rule))
    }
}

#[derive(Parser)]
struct SortArgs {
    /// Tokens to sort; a single argument containing commas is split
    tokens: Vec<String>,

    /// Comma-separated line of tokens
    #[arg(short, long, conflicts_with = "tokens")]
    line: Option<String>,

    /// JSON array of strings and numbers
    #[arg(long, conflicts_with_all = ["tokens", "line"])]
    json_input: Option<PathBuf>,

    #[command(flatten)]
    order: OrderArgs,
}

#[derive(Parser)]
struct ColumnArgs {
    /// Delimited file with a header row
    file: PathBuf,

    /// Column header to sort; repeatable. Defaults to the configured columns
    #[arg(short = 'n', long = "column")]
    columns: Vec<String>,

    #[command(flatten)]
    order: OrderArgs,
}

#[derive(Parser)]
struct DemoArgs {
    /// Only run the named demo input
    #[arg(long)]
    case: Option<String>,
}

#[derive(Parser)]
struct CompareArgs {
    a: String,
    b: String,

    /// Case tie-break for char-run (uppercase-first, ignore)
    #[arg(long)]
    case_rule: Option<CaseRule>,
}

fn render<T: AsRef<str>>(tokens: &[T], json: bool) -> InternalResult<String> {
    let texts: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
    if json {
        Ok(serde_json::to_string(&texts)?)
    } else {
        Ok(format!("{:?}", texts))
    }
}

fn print_sorted<T: AsRef<str> + Clone>(
    tokens: &[T],
    comparator: Comparator,
    direction: Option<Direction>,
    json: bool,
) -> InternalResult<()> {
    match direction {
        Some(direction) => println!(
            "{}",
            render(&comparator.with_direction(direction).sort(tokens), json)?
        ),
        None => {
            let both = sort_both(tokens, comparator);
            println!("Ascending:  {}", render(&both.ascending, json)?);
            println!("Descending: {}", render(&both.descending, json)?);
        }
    }
    Ok(())
}

fn resolve_tokens(args: &SortArgs, config: &SortConfig) -> InternalResult<Vec<Token>> {
    if let Some(path) = &args.json_input {
        let content = std::fs::read_to_string(path)?;
        return tokens_from_json(&content);
    }

    let line = match (&args.line, args.tokens.as_slice()) {
        (Some(line), _) => line.clone(),
        (None, [single]) if single.contains(',') => single.clone(),
        (None, []) => String::new(),
        (None, tokens) => return Ok(tokens.iter().map(|t| Token::from(t.as_str())).collect()),
    };

    let parsed = parse_token_line(&line, &config.default_tokens);
    if parsed.used_default {
        info!("No tokens given, using the default example");
    }
    Ok(parsed.tokens)
}

fn run_sort(args: &SortArgs, config: &SortConfig) -> InternalResult<()> {
    let tokens = resolve_tokens(args, config)?;
    let comparator = args.order.comparator(config);
    debug!(comparator = comparator.name(), tokens = tokens.len(), "sort");
    print_sorted(
        &tokens,
        comparator,
        args.order.direction(config),
        args.order.json,
    )
}

fn run_column(args: &ColumnArgs, config: &SortConfig) -> InternalResult<()> {
    let table = Table::from_path(&args.file, config.delimiter_byte()?)?;
    let specs: Vec<ColumnSpec> = if args.columns.is_empty() {
        config.columns.clone()
    } else {
        args.columns
            .iter()
            .map(|name| {
                config
                    .columns
                    .iter()
                    .find(|spec| &spec.name == name)
                    .cloned()
                    .unwrap_or_else(|| ColumnSpec::new(name.as_str()))
            })
            .collect()
    };

    let comparator = args.order.comparator(config);
    for spec in &specs {
        match table.column(spec) {
            ColumnValues::Found { header, values } => {
                println!("{} ({} values)", header, values.len());
                print_sorted(
                    &values,
                    comparator,
                    args.order.direction(config),
                    args.order.json,
                )?;
            }
            ColumnValues::Unavailable { column } => {
                println!("{}: data unavailable for this column", column);
            }
        }
    }
    Ok(())
}

fn run_demo(args: &DemoArgs) -> InternalResult<()> {
    let cases: Vec<&DemoCase> = match &args.case {
        Some(name) => vec![fixtures::find(name)
            .ok_or_else(|| Error::internal(format!("Unknown demo case: {}", name)))?],
        None => DEMO_CASES.iter().collect(),
    };

    for case in cases {
        println!("== {}", case.name);
        println!("Input:      {:?}", case.tokens);
        for variant in [Variant::Category, Variant::CharRun] {
            let both = sort_both(case.tokens, Comparator::new(variant, Direction::Ascending));
            println!("[{}]", variant);
            println!("Ascending:  {:?}", both.ascending);
            println!("Descending: {:?}", both.descending);
        }
        println!();
    }
    Ok(())
}

fn run_compare(args: &CompareArgs, config: &SortConfig) -> InternalResult<()> {
    let case_rule = args.case_rule.unwrap_or(config.case_rule);
    for variant in [Variant::Category, Variant::CharRun, Variant::Lexical] {
        let comparator =
            Comparator::new(variant, Direction::Ascending).with_case_rule(case_rule);
        println!(
            "{}: {}",
            variant,
            sign(comparator.compare(&args.a, &args.b))
        );
    }
    Ok(())
}

fn run(cli: &Cli) -> InternalResult<()> {
    let config = if cli.config.exists() {
        SortConfig::from_file(&cli.config)?
    } else {
        SortConfig::default()
    };
    debug!("config: {:?}", config);

    match &cli.command {
        Commands::Sort(args) => run_sort(args, &config),
        Commands::Column(args) => run_column(args, &config),
        Commands::Demo(args) => run_demo(args),
        Commands::Compare(args) => run_compare(args, &config),
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

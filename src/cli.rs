use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use closedform::constants::{CONSTANTS_FILENAME, load_constants};
use closedform::utils::{SAVE_DIR, run_seed, write_run_record};
use closedform::value::precision::format_decimal;
use closedform::{ExpressionSolver, RunConfig, SearchResult, SolverOptions};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// closedform - Find closed-form expressions for a measured quantity
#[derive(Parser, Debug)]
#[command(name = "closedform")]
#[command(
    about = "Find expressions over constants and small integers that approximate a target quantity"
)]
#[command(version)]
pub struct CliArgs {
    /// Significant digits shown in results (prompted for if omitted)
    #[arg(long)]
    pub digits: Option<usize>,

    /// Target quantity, e.g. "6", "5 m" or "9.81 m/s^2" (prompted for if omitted)
    #[arg(long, allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Number of combination steps applied to each seed (prompted for if omitted)
    #[arg(long)]
    pub max_expr_size: Option<usize>,

    /// Largest integer literal used in expressions (prompted for if omitted)
    #[arg(long)]
    pub max_int: Option<u32>,

    /// File of `name = value` constant definitions
    #[arg(long, default_value = CONSTANTS_FILENAME)]
    pub constants: PathBuf,

    /// Number of worker threads (default: one per core)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: Option<u16>,

    /// Number of results to report
    #[arg(long, default_value_t = closedform::solver::DEFAULT_TOP_K)]
    pub top: usize,

    /// Directory the run record is written to
    #[arg(long, default_value = SAVE_DIR)]
    pub save_dir: PathBuf,

    /// Do not write a run record
    #[arg(long)]
    pub no_save: bool,

    /// Report expressions exactly as generated
    #[arg(long)]
    pub no_simplify: bool,

    /// Render expressions as LaTeX
    #[arg(long)]
    pub latex: bool,

    /// Stop expanding candidates after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Run parameters after prompting for the ones missing from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct RunParams {
    pub digits: usize,
    pub target: String,
    pub max_expr_size: usize,
    pub max_int: u32,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Print `label` and parse one line of `input` as `T`
pub fn prompt<T, R, W>(input: &mut R, output: &mut W, label: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(anyhow!("Unexpected end of input while reading '{}'", label.trim()));
    }
    line.trim()
        .parse::<T>()
        .with_context(|| format!("Invalid value for '{}': '{}'", label.trim(), line.trim()))
}

/// Fill in run parameters, prompting in order for any not given as flags
pub fn resolve_params<R: BufRead, W: Write>(
    args: &CliArgs,
    input: &mut R,
    output: &mut W,
) -> Result<RunParams> {
    let digits = match args.digits {
        Some(digits) => digits,
        None => prompt(input, output, "digits: ")?,
    };
    let target = match &args.target {
        Some(target) => target.clone(),
        None => prompt(input, output, "target: ")?,
    };
    let max_expr_size = match args.max_expr_size {
        Some(size) => size,
        None => prompt(input, output, "max expr size: ")?,
    };
    let max_int = match args.max_int {
        Some(max_int) => max_int,
        None => prompt(input, output, "integer constants up to: ")?,
    };

    Ok(RunParams {
        digits,
        target,
        max_expr_size,
        max_int,
    })
}

/// One report line: `<expression> | err: <error>`
pub fn format_result(result: &SearchResult, digits: usize, latex: bool) -> String {
    let expression = if latex {
        result.expression.to_latex(digits)
    } else {
        result.expression.render(digits)
    };
    format!(
        "{} | err: {}",
        expression,
        format_decimal(&result.error, Some(digits))
    )
}

/// Report lines for the selected results, best first
pub fn report_lines(results: &[SearchResult], digits: usize, latex: bool) -> Vec<String> {
    if results.is_empty() {
        warn!("No dimensionally admissible expression found");
    }
    results
        .iter()
        .map(|result| format_result(result, digits, latex))
        .collect()
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(usize::from(jobs))
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    let stdin = io::stdin();
    let params = resolve_params(&args, &mut stdin.lock(), &mut io::stdout())?;
    let config = RunConfig::parse(
        params.digits,
        &params.target,
        params.max_expr_size,
        params.max_int,
    )
    .context("Invalid target")?;

    let registry = load_constants(&args.constants, config.working_precision())
        .context("Failed to load constants")?;
    info!("Loaded {} constants", registry.len());

    let solver = ExpressionSolver::new(SolverOptions {
        top_k: args.top,
        simplify: !args.no_simplify,
        timeout: args.timeout.map(Duration::from_secs),
    });
    let outcome = solver.search(&config, &registry)?;

    let lines = report_lines(&outcome.results, config.precision_digits, args.latex);
    for line in &lines {
        println!("{}", line);
    }

    if !args.no_save {
        let seed = run_seed(&config, &registry);
        write_run_record(&args.save_dir, &seed, &lines).context("Failed to save run record")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use closedform::solver::DEFAULT_TOP_K;

    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from([
            "closedform",
            "--digits",
            "12",
            "--target",
            "9.81 m/s^2",
            "--max-expr-size",
            "3",
            "--max-int",
            "5",
            "-j",
            "2",
            "--latex",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.digits, Some(12));
            assert_eq!(args.target.as_deref(), Some("9.81 m/s^2"));
            assert_eq!(args.max_expr_size, Some(3));
            assert_eq!(args.max_int, Some(5));
            assert_eq!(args.jobs, Some(2));
            assert!(args.latex);
            assert!(!args.no_save);
            assert!(!args.no_simplify);
            assert_eq!(args.top, DEFAULT_TOP_K);
            assert_eq!(args.constants, PathBuf::from("constants.conf"));
            assert_eq!(args.save_dir, PathBuf::from("save"));
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_rejects_zero_jobs() {
        let args = CliArgs::try_parse_from(["closedform", "--jobs", "0"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_negative_target_is_accepted() {
        let args = CliArgs::try_parse_from(["closedform", "--target", "-1.5 J"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.target.as_deref(), Some("-1.5 J"));
        }
    }

    #[test]
    fn test_resolve_params_prompts_for_missing_values() {
        let args = CliArgs::try_parse_from(["closedform", "--max-expr-size", "2"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            let mut input = Cursor::new("15\n5 m\n7\n");
            let mut output = Vec::new();
            let params = resolve_params(&args, &mut input, &mut output);
            assert!(params.is_ok());
            if let Ok(params) = params {
                assert_eq!(
                    params,
                    RunParams {
                        digits: 15,
                        target: String::from("5 m"),
                        max_expr_size: 2,
                        max_int: 7,
                    }
                );
            }
            assert_eq!(
                String::from_utf8_lossy(&output),
                "digits: target: integer constants up to: "
            );
        }
    }

    #[test]
    fn test_prompt_rejects_bad_input() {
        let mut output = Vec::new();

        let result: Result<usize> = prompt(&mut Cursor::new("abc\n"), &mut output, "digits: ");
        assert!(result.is_err());

        let result: Result<usize> = prompt(&mut Cursor::new(""), &mut output, "digits: ");
        assert!(result.is_err());
    }

    #[test]
    fn test_format_result() {
        let config = RunConfig::parse(6, "2", 1, 2);
        assert!(config.is_ok());
        if let Ok(config) = config {
            let result = closedform::search(&config, &closedform::ConstantRegistry::new());
            assert!(result.is_ok());
            if let Ok(results) = result
                && let Some(best) = results.first()
            {
                assert_eq!(format_result(best, 6, false), "2 | err: 0");
                assert_eq!(format_result(best, 6, true), "2 | err: 0");
            }
        }
    }

    #[test]
    fn test_report_lines_without_results() {
        assert!(report_lines(&[], 6, false).is_empty());

        let config = RunConfig::parse(6, "2 m", 1, 2);
        assert!(config.is_ok());
        if let Ok(config) = config {
            let result = closedform::search(&config, &closedform::ConstantRegistry::new());
            assert!(result.is_ok());
            if let Ok(results) = result {
                assert!(results.is_empty());
                assert!(report_lines(&results, 6, false).is_empty());
            }
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}

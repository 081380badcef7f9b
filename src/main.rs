//! course-match CLI: validate, analyze, match, and export course datasets.

use clap::{Parser, Subcommand, ValueEnum};
use course_match::analysis::{Analyzer, DatasetAnalysis};
use course_match::config::CourseMatchConfig;
use course_match::export::{DatasetExport, DEFAULT_EXPORT_FILE};
use course_match::generator::{DatasetGenerator, GeneratorConfig};
use course_match::matcher::{GreedyMatcher, LoadPolicy, MatchResult, MatchSummary, Placement};
use course_match::models::{sample, Dataset};
use course_match::validation::{validate_dataset, ValidationIssue, ValidationReport};
use course_match::{logging, CourseMatchError};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "course-match")]
#[command(about = "Match students to courses and check course datasets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a dataset for errors and warnings
    Validate {
        /// Dataset JSON file (defaults to the built-in sample)
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Print statistics and insights for a dataset
    Analyze {
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Config JSON file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Run the greedy matcher
    Match {
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,

        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Charge lecturer load per enrolled student instead of per course
        #[arg(long)]
        per_student_load: bool,

        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Write the dataset and its analysis as JSON
    Export {
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,

        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },

    /// Generate a random, well-formed dataset
    Generate {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = 10)]
        lecturers: usize,

        #[arg(long, default_value_t = 8)]
        rooms: usize,

        #[arg(long, default_value_t = 20)]
        courses: usize,

        #[arg(long, default_value_t = 200)]
        requests: usize,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let exit_code = match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    };

    process::exit(exit_code);
}

fn run(command: Commands) -> Result<i32, CourseMatchError> {
    match command {
        Commands::Validate { data, format } => {
            let dataset = load_dataset(data.as_deref())?;
            let report = validate_dataset(&dataset);
            match format {
                OutputFormat::Human => print_report(&report),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
            Ok(if report.valid { 0 } else { 1 })
        }
        Commands::Analyze {
            data,
            config,
            format,
        } => {
            let dataset = load_dataset(data.as_deref())?;
            let config = load_config(config.as_deref())?;
            let analysis = Analyzer::new().with_config(config.analysis).analyze(&dataset);
            match format {
                OutputFormat::Human => print_analysis(&analysis),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
            }
            Ok(0)
        }
        Commands::Match {
            data,
            config,
            per_student_load,
            format,
        } => {
            let dataset = load_dataset(data.as_deref())?;
            let config = load_config(config.as_deref())?;
            let mut matcher = GreedyMatcher::new().with_config(config.matching);
            if per_student_load {
                matcher = matcher.with_load_policy(LoadPolicy::PerStudent);
            }
            let result = matcher.run(&dataset);
            match format {
                OutputFormat::Human => print_matches(&dataset, &result),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
            Ok(0)
        }
        Commands::Export {
            data,
            config,
            output,
        } => {
            let dataset = load_dataset(data.as_deref())?;
            let config = load_config(config.as_deref())?;
            let analyzer = Analyzer::new().with_config(config.analysis);
            DatasetExport::with_analyzer(&dataset, &analyzer).write_to(&output)?;
            println!("Exported dataset to {}", output.display());
            Ok(0)
        }
        Commands::Generate {
            seed,
            lecturers,
            rooms,
            courses,
            requests,
            output,
        } => {
            let config = GeneratorConfig {
                seed,
                lecturers,
                rooms,
                courses,
                requests,
                ..GeneratorConfig::default()
            };
            let dataset = DatasetGenerator::new(config).generate()?;
            let json = serde_json::to_string_pretty(&dataset)?;
            match output {
                Some(path) => std::fs::write(path, json)?,
                None => println!("{json}"),
            }
            Ok(0)
        }
    }
}

fn load_dataset(path: Option<&Path>) -> Result<Dataset, CourseMatchError> {
    match path {
        Some(path) => Dataset::load(path),
        None => Ok(sample::crestwood()),
    }
}

fn load_config(path: Option<&Path>) -> Result<CourseMatchConfig, CourseMatchError> {
    match path {
        Some(path) => CourseMatchConfig::load(path),
        None => Ok(CourseMatchConfig::default()),
    }
}

fn print_report(report: &ValidationReport) {
    if report.valid {
        println!("Dataset is valid.");
    } else {
        println!("Dataset is invalid.");
    }
    print_issues("Errors", &report.errors);
    print_issues("Warnings", &report.warnings);
}

fn print_issues(title: &str, issues: &[ValidationIssue]) {
    if issues.is_empty() {
        return;
    }
    println!("\n{title} ({}):", issues.len());
    for issue in issues {
        println!("  [{:?}/{}] {}", issue.scope, issue.subject_id, issue.message);
    }
}

fn print_analysis(analysis: &DatasetAnalysis) {
    let stats = &analysis.statistics;
    println!("Students:  {}", stats.total_students);
    println!("Requests:  {}", stats.total_requests);
    println!("Courses:   {}", stats.total_courses);
    println!("Lecturers: {}", stats.total_lecturers);
    println!("Rooms:     {}", stats.total_rooms);
    println!("Periods:   {}", stats.periods_in_use.join(", "));

    if !analysis.insights.is_empty() {
        println!("\nInsights:");
        for insight in &analysis.insights {
            println!("  - {insight}");
        }
    }
    println!();
    print_report(&analysis.validation);
}

fn print_matches(dataset: &Dataset, result: &MatchResult) {
    for (period, ledgers) in &result.periods {
        println!("Period {period}");
        for assignment in &ledgers.assignments {
            let outcome = match &assignment.placement {
                Placement::Matched {
                    course_id,
                    preference,
                } => {
                    let code = dataset.course(course_id).map_or("?", |c| c.code.as_str());
                    let room = ledgers.room_for(course_id).unwrap_or("?");
                    format!("{code} in {room} (choice {preference})")
                }
                Placement::Unmatched => "unassigned".to_string(),
            };
            println!("  {} ({}): {outcome}", assignment.student_name, assignment.student_id);
        }
        for overflow in ledgers.capacity_overflows(dataset) {
            println!(
                "  ! {} has {} students in {} (capacity {})",
                overflow.course_id, overflow.enrolled, overflow.room_id, overflow.capacity
            );
        }
    }

    let summary = MatchSummary::from_result(result);
    println!(
        "\nSatisfied {}/{} ({:.1}%), first choice {:.1}%, unassigned {}",
        summary.satisfied_students,
        summary.total_students,
        summary.satisfaction_rate,
        summary.first_choice_rate(),
        summary.unassigned_count
    );
}

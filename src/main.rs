use anyhow::Context;
use clap::{Parser, Subcommand};
use condition_rs::assertion::{run_assertions, AssertionReport, Outcome};
use condition_rs::resolver::VariableInfo;
use condition_rs::suite::{parse_variable_arg, SuiteLoader};
use dotenv::dotenv;

use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a single condition
    Check {
        /// The condition, e.g. '${status} = 200'
        condition: String,

        /// Variable as name=value, may be repeated
        #[arg(short, long = "var", value_parser = parse_variable_arg)]
        vars: Vec<VariableInfo>,
    },
    /// Run every condition in a suite file
    Run {
        /// Path to a YAML or JSON suite
        #[arg(short, long)]
        file: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let report = match args.command {
        Commands::Check { condition, vars } => {
            match condition_rs::expr::split(&condition) {
                Some(parsed) => {
                    let (l, o, r) = parsed.as_triple();
                    println!("Split: [{:?}, {:?}, {:?}]", l, o, r);
                }
                None => println!("Split: invalid"),
            }
            let report = run_assertions(&[condition], &vars);
            print_report(&report);
            report
        }
        Commands::Run { file, json } => {
            let suite = SuiteLoader::new()
                .load(&file)
                .with_context(|| format!("Failed to load suite {}", file))?;

            log::info!(
                "Running suite {} with {} conditions",
                suite.name.as_deref().unwrap_or(&file),
                suite.conditions.len()
            );

            let report = run_assertions(&suite.conditions, &suite.variables);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
            report
        }
    };

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_report(report: &AssertionReport) {
    for result in &report.results {
        match &result.outcome {
            Outcome::Passed => println!("PASS    {}", result.condition),
            Outcome::Failed { message } => println!("FAIL    {}: {}", result.condition, message),
            Outcome::Invalid => println!("INVALID {}", result.condition),
        }
    }
    println!(
        "{} passed, {} failed, {} invalid",
        report.passed(),
        report.failed(),
        report.invalid()
    );
}

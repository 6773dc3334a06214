// ============================================================================
// main.rs — crucible CLI entry point
// ============================================================================
//
// Wiring grounded on the teacher's run_build and on cmd/unibuild/main.go's
// runBuild: parse flags, discover projects, resolve order, parse and apply
// filters, run the build loop, report a summary. Exit codes follow
// SPEC_FULL.md §6 (0 success, 1 configuration error, 2 resolution error,
// 3 build failure) rather than the teacher's uniform 0/1.
// ============================================================================

use std::process;

use clap::Parser;
use colored::Colorize;

use crucible::discovery;
use crucible::filter_parser;
use crucible::log_sink::ConsoleSink;
use crucible::options::Options;
use crucible::session::{BuildContext, BuildSession};
use crucible::ProjectSuite;

const EXIT_OK: i32 = 0;
const EXIT_CONFIG_ERROR: i32 = 1;
const EXIT_RESOLUTION_ERROR: i32 = 2;
const EXIT_BUILD_ERROR: i32 = 3;

fn main() {
    let options = Options::parse();
    process::exit(run(options));
}

fn run(options: Options) -> i32 {
    let mut log = ConsoleSink::new(std::io::stdout(), options.log_utc);

    let filters = match filter_parser::parse(&options.filters) {
        Ok(filters) => filters,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red(), e);
            return EXIT_CONFIG_ERROR;
        }
    };

    let projects = match discovery::discover(&options.workspace, &options.manifest) {
        Ok(projects) => projects,
        Err(e) => {
            eprintln!("{} failed to discover projects: {}", "[ERROR]".red(), e);
            return EXIT_CONFIG_ERROR;
        }
    };

    if projects.is_empty() {
        println!("[INFO] No projects found under {}. Nothing to do.", options.workspace.display());
        return EXIT_OK;
    }

    println!(
        "[1/3] Resolved {} project(s) from {}",
        projects.len(),
        options.workspace.display()
    );

    let suite = ProjectSuite::new(projects);
    let ordered = match suite.resolve_order(&mut log) {
        Ok(ordered) => ordered,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red(), e);
            return EXIT_RESOLUTION_ERROR;
        }
    };

    println!("[2/3] Applying {} filter(s)", filters.len());
    let filtered = ordered.filter(&filters);

    if filtered.is_empty() {
        println!("[INFO] No projects selected by filters. Nothing to build.");
        return EXIT_OK;
    }

    let names: Vec<String> = filtered.order().iter().map(|p| p.info().name).collect();
    println!("[3/3] Build order: {}", names.join(" -> "));

    let ctx = match options.timeout {
        Some(timeout) => BuildContext::with_timeout(timeout),
        None => BuildContext::new(),
    };

    let order = filtered.into_build_order();
    match BuildSession::run(&order, &ctx, &mut log) {
        Ok(report) => {
            println!(
                "{} built {} project(s): {}",
                "[OK]".green(),
                report.built.len(),
                report.built.join(", ")
            );
            EXIT_OK
        }
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red(), e);
            EXIT_BUILD_ERROR
        }
    }
}

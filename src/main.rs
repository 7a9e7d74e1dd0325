use buckingham::problem::{demo_problems, load_problems, Problem};
use buckingham::report::{format_groups, AnalysisReport};
use std::path::Path;

fn usage() -> &'static str {
    "Usage:
  buckingham demo [--json]
  buckingham <problem.json>... [--json]

Notes:
  - `demo` runs the built-in pendulum, pipe flow, wing lift and cantilever problems.
  - A problem file holds one problem or {\"problems\": [...]}.
  - Set RUST_LOG=debug to see ranks, chosen repeating sets and raw null vectors."
}

struct Args {
    demo: bool,
    json: bool,
    files: Vec<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args {
        demo: false,
        json: false,
        files: Vec::new(),
    };
    for arg in args {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "demo" => parsed.demo = true,
            "-h" | "--help" => return Err(usage().to_string()),
            other if other.starts_with('-') => {
                return Err(format!("unknown option '{}'\n\n{}", other, usage()))
            }
            other => parsed.files.push(other.to_string()),
        }
    }
    if !parsed.demo && parsed.files.is_empty() {
        return Err(usage().to_string());
    }
    Ok(parsed)
}

fn run_problem(problem: &Problem, json: bool) -> Result<Option<AnalysisReport>, String> {
    let title = problem.title.as_deref().unwrap_or("untitled");
    let analysis = problem
        .run()
        .map_err(|err| format!("problem '{}': {err}", title))?;

    if let Some(reason) = analysis.validation.reason() {
        log::warn!("problem '{}': {}", title, reason);
    }

    if json {
        return Ok(Some(AnalysisReport::new(
            problem.title.as_deref(),
            &problem.params,
            &analysis,
        )));
    }

    println!("{}", title);
    print!("{}", format_groups(&problem.params, &analysis.groups));
    println!();
    Ok(None)
}

fn real_main() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1))?;

    let mut problems = Vec::new();
    if args.demo {
        problems.extend(demo_problems().map_err(|err| format!("demo problems: {err}"))?);
    }
    for file in &args.files {
        problems.extend(load_problems(Path::new(file)).map_err(|err| err.to_string())?);
    }

    let mut reports = Vec::new();
    for problem in &problems {
        if let Some(report) = run_problem(problem, args.json)? {
            reports.push(report);
        }
    }

    if args.json {
        let text = serde_json::to_string_pretty(&reports)
            .map_err(|err| format!("failed to serialize results: {err}"))?;
        println!("{}", text);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = real_main() {
        eprintln!("[buckingham] {err}");
        std::process::exit(1);
    }
}

//! Mxc command-line calculator.
//!
//! Evaluates the expression given on the command line, or every non-empty
//! line of standard input when there is none.

use std::io::BufRead;

use mxc::{init_tracing, Base, Separators, Solver, SolverBuilder};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut builder = Solver::builder().separators(Separators::from_env());
    let mut expression = Vec::new();

    for arg in &args {
        if arg == "-h" || arg == "--help" {
            print_usage();
            return;
        } else if let Some(name) = arg.strip_prefix("--base=") {
            let Some(base) = Base::from_name(name) else {
                eprintln!("error: unknown base `{name}` (expected dec, bin or hex)");
                std::process::exit(1);
            };
            builder = builder.base(base);
        } else if let Some(tag) = arg.strip_prefix("--locale=") {
            builder = builder.locale(tag);
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            let Ok(max_depth) = value.parse::<usize>() else {
                eprintln!("error: --max-depth expects a non-negative integer, got `{value}`");
                std::process::exit(1);
            };
            builder = builder.max_depth(max_depth);
        } else if arg == "--group" {
            builder = builder.group_digits(true);
        } else if arg.starts_with("--") {
            eprintln!("error: unknown option `{arg}`");
            print_usage();
            std::process::exit(1);
        } else {
            expression.push(arg.as_str());
        }
    }

    let ok = if expression.is_empty() {
        solve_lines(&builder)
    } else {
        solve_one(&builder.build(), &expression.join(" "))
    };
    if !ok {
        std::process::exit(1);
    }
}

/// Solve and print one expression. Returns `false` on error.
fn solve_one(solver: &Solver, text: &str) -> bool {
    match solver.solve(text) {
        Ok(result) => {
            println!("{result}");
            true
        }
        Err(e) => {
            eprintln!("error: {e}");
            false
        }
    }
}

/// Solve every non-empty line of stdin. Returns `false` if any line failed.
fn solve_lines(builder: &SolverBuilder) -> bool {
    let solver = builder.build();
    let mut ok = true;
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("error: failed to read input: {e}");
                return false;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        ok &= solve_one(&solver, &line);
    }
    ok
}

fn print_usage() {
    println!("Mxc - a calculator that understands matrices");
    println!();
    println!("Usage: mxc [options] [expression...]");
    println!();
    println!("With no expression, every non-empty line of standard input is solved.");
    println!();
    println!("Options:");
    println!("  --base=<dec|bin|hex>  Read and write numerals in this base");
    println!("  --locale=<tag>        Locale for decimal point and separators");
    println!("                        (default: LC_ALL, LC_NUMERIC or LANG)");
    println!("  --max-depth=<n>       Deepest nesting accepted (default: 64)");
    println!("  --group               Group the digits of scalar results");
    println!("  -h, --help            Show this help");
    println!();
    println!("Examples:");
    println!("  mxc \"[[1,2][3,4]]^T\"");
    println!("  mxc --base=hex \"FF+1\"");
    println!("  echo \"sind(90)\" | mxc");
}

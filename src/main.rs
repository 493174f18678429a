use rpn_calc::{calculate, report};

use clap::Parser;
use std::io::{BufRead, Write};

/// Evaluates arithmetic expressions with + - * / : % ^ and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Keep reading expressions, one per line, until an empty line.
    #[arg(short, long)]
    repl: bool,

    /// Expression to evaluate instead of reading one from standard input.
    expression: Option<String>,
}

fn run(expression: &str) -> bool {
    match calculate(expression) {
        Ok(value) => {
            println!("{}", report(value));
            true
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            false
        },
    }
}

fn prompt(text: &str) -> std::io::Result<()> {
    print!("{}", text);
    std::io::stdout().flush()
}

fn repl() -> std::io::Result<()> {
    prompt("> ")?;
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        run(&line);
        prompt("> ")?;
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    if args.repl {
        return repl();
    }

    let expression = match args.expression {
        Some(expression) => expression,
        None => {
            prompt("Enter an expression: ")?;
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            line.trim_end_matches(['\r', '\n']).to_string()
        },
    };

    if !run(&expression) {
        std::process::exit(1);
    }
    Ok(())
}

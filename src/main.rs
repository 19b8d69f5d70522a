use std::{fs, process::ExitCode};

use aplfix::{
    Environment, display,
    interpreter::{glyph::GLYPHS, parser::core::DEFAULT_MAX_DEPTH},
    lex, parse_with_limit,
};
use clap::Parser;

/// aplfix evaluates programs in a tacit array language with fixed-arity
/// primitives.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells aplfix to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream (kind, image and line) instead of evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the glyph table and exits.
    #[arg(short, long)]
    glyphs: bool,

    /// Maximum nesting depth accepted by the parser.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    contents: Option<String>,
}

fn print_glyphs() {
    for glyph in GLYPHS {
        println!("{}  {:<4} {:<18} {}", glyph.symbol, glyph.alias, glyph.name, glyph.kind());
    }
}

fn run(script: &str, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = lex(script)?;

    if args.tokens {
        for token in &tokens {
            println!("{:>4}  {:<18} {:?}", token.line, token.kind.to_string(), token.image);
        }
        return Ok(());
    }

    let program = parse_with_limit(&tokens, args.max_depth)?;
    let mut env = Environment::new();
    if let Some(value) = env.eval_program(&program)? {
        println!("{}", display(&value));
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.glyphs {
        print_glyphs();
        return ExitCode::SUCCESS;
    }

    let Some(contents) = &args.contents else {
        eprintln!("Nothing to evaluate. Pass a program, or a path together with --file.");
        return ExitCode::FAILURE;
    };

    let script = if args.file {
        match fs::read_to_string(contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents.clone()
    };

    match run(&script, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

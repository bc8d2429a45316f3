use std::{
    env,
    io::{self, BufRead},
    process::ExitCode,
    time::Instant,
};

use expr_parser::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::{
        options::{NumberLiterals, ParseOptions},
        parser::parse_with_options,
    },
};

fn main() -> ExitCode {
    env_logger::init();

    let mut options = ParseOptions::default();
    let mut expression = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--strict-numbers" => options.number_literals = NumberLiterals::Strict,
            _ if arg.starts_with("--max-depth=") => match arg["--max-depth=".len()..].parse() {
                Ok(max_depth) => options.max_depth = max_depth,
                Err(_) => {
                    eprintln!("Incorrect arguments provided: `{}` is not a depth", arg);
                    return ExitCode::FAILURE;
                }
            },
            "-h" | "--help" => {
                println!("usage: expr_parser [--strict-numbers] [--max-depth=N] [EXPRESSION]");
                println!("Without EXPRESSION, every line of stdin is parsed on its own.");
                return ExitCode::SUCCESS;
            }
            _ if expression.is_none() => expression = Some(arg),
            _ => {
                eprintln!("Incorrect arguments provided: unexpected `{}`", arg);
                return ExitCode::FAILURE;
            }
        }
    }

    match expression {
        Some(source) => {
            if run(&source, options) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        None => {
            let mut ok = true;
            for line in io::stdin().lock().lines() {
                match line {
                    // A bad line is reported and the next one is parsed from scratch.
                    Ok(line) => ok &= run(&line, options),
                    Err(error) => {
                        eprintln!("Failed to read stdin: {}", error);
                        return ExitCode::FAILURE;
                    }
                }
            }
            if ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Parses one expression and prints its tree, or a diagnostic.
fn run(source: &str, options: ParseOptions) -> bool {
    let start = Instant::now();

    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, source, error.get_position());
            return false;
        }
    };

    log::info!("Tokenized in {:?}", start.elapsed());

    // Byte offset of each token, for pointing at the one an error names.
    let offsets = token_offsets(source, tokens.iter().map(|token| token.lexeme.as_str()));

    let parse_start = Instant::now();
    let parsed = parse_with_options(tokens, options);

    log::info!("Parsed in {:?}", parse_start.elapsed());

    match parsed {
        Ok(Some(expr)) => {
            println!("{}", expr);
            true
        }
        Ok(None) => true,
        Err(error) => {
            let offset = offsets
                .get(error.get_position())
                .copied()
                .unwrap_or(source.trim_end().len());
            display_error(&error, source, offset);
            false
        }
    }
}

fn token_offsets<'a>(source: &str, lexemes: impl Iterator<Item = &'a str>) -> Vec<usize> {
    let mut offsets = vec![];
    let mut cursor = 0;

    for lexeme in lexemes {
        let start = source[cursor..]
            .find(lexeme)
            .map_or(cursor, |found| cursor + found);
        offsets.push(start);
        cursor = start + lexeme.len();
    }

    offsets
}

fn display_error(error: &Error, source: &str, offset: usize) {
    /*
        Error: TokenMismatch (Expected `]`, found `)`)
          |
        1 | a[1 + 2)
          | -------^
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(source);
    let arrows = offset.saturating_sub(removed_whitespace) + 1;

    eprintln!("  |");
    eprintln!("1 | {}", line_text_removed.trim_end());
    eprintln!("  | {:->arrows$}", "^");
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches(' ');
    (trimmed, string.len() - trimmed.len())
}

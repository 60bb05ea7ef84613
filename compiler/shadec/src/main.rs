//! shade CLI
//!
//! Tokenize, rebuild and search C-like shader sources.

use shadec::commands::{
    explain_error, find_source, lex_source, rebuild_source, run_files, split_source,
};
use shadec::{init_tracing, parse_options, Options};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let ok = match command.as_str() {
        "lex" => {
            let (options, files) = options_and_files(&args[2..], "lex <files...>");
            run_files(&files, &options, lex_source)
        }
        "rebuild" => {
            let (options, files) = options_and_files(&args[2..], "rebuild <files...> [--check]");
            run_files(&files, &options, rebuild_source)
        }
        "split" => {
            let (options, files) = options_and_files(&args[2..], "split <files...>");
            run_files(&files, &options, split_source)
        }
        "find" => {
            let (options, mut positional) =
                options_and_files(&args[2..], "find <name> <files...>");
            if positional.len() < 2 {
                eprintln!("Usage: shade find <name> <files...>");
                std::process::exit(1);
            }
            let files = positional.split_off(1);
            let name = &positional[0];
            run_files(&files, &options, |path, source, options| {
                find_source(name, path, source, options)
            })
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: shade explain <ERROR_CODE>");
                eprintln!("Example: shade explain E0002");
                std::process::exit(1);
            }
            match explain_error(&args[2]) {
                Some(text) => {
                    print!("{text}");
                    true
                }
                None => {
                    eprintln!("Unknown error code: {}", args[2]);
                    eprintln!();
                    eprintln!("Codes have the format EXXXX where X is a digit, e.g. E0001.");
                    false
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("shade {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

/// Parse options, exiting with usage on error or when no file is given.
fn options_and_files(args: &[String], usage: &str) -> (Options, Vec<String>) {
    let (options, files) = match parse_options(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Usage: shade {usage}");
            std::process::exit(1);
        }
    };
    if files.is_empty() {
        eprintln!("Usage: shade {usage}");
        std::process::exit(1);
    }
    (options, files)
}

fn print_usage() {
    println!("shade: tokenizer for C-like shader sources");
    println!();
    println!("Usage: shade <command> [options] <files...>");
    println!();
    println!("Commands:");
    println!("  lex <files...>           Tokenize and display tokens");
    println!("  rebuild <files...>       Tokenize and print the rebuilt source");
    println!("  find <name> <files...>   Locate a function definition by name");
    println!("  split <files...>         Show raw whitespace/comment chunks");
    println!("  explain <code>           Explain an error code (e.g., E0002)");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Options:");
    println!("  --context-lines=<n>      Context lines around errors (default: 2)");
    println!("  --color=<mode>           Colored diagnostics: auto, always, never");
    println!("  --check                  rebuild: fail if the output differs from the input");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>        Enable logging (e.g., shade_lexer=trace)");
    println!("  SHADE_LOG_TREE=1         Print logs as an indented span tree");
    println!();
    println!("Examples:");
    println!("  shade lex shaders/Blur.psh");
    println!("  shade rebuild --check shaders/*.fx");
    println!("  shade find main shaders/Blur.psh shaders/Tone.psh");
}

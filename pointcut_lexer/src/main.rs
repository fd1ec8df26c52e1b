use pointcut_lexer::{logging, tokenize, SourceExpression, TokenStream};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize global logging system
    logging::init_global_logging()?;

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <expression> [<expression>...]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }

    let mut failures = 0;
    for expression in &args[1..] {
        if !tokenize_and_report(expression) {
            failures += 1;
        }
    }

    if failures > 0 {
        eprintln!(
            "\n{} of {} expressions failed to tokenize",
            failures,
            args.len() - 1
        );
        std::process::exit(1);
    }

    Ok(())
}

fn print_help(program_name: &str) {
    println!("Pointcut Lexer v{}", env!("CARGO_PKG_VERSION"));
    println!("Tokenizer for aspect-oriented pointcut expressions");
    println!();
    println!("USAGE:");
    println!(
        "    {} <expression> [<expression>...]   # Tokenize one or more expressions",
        program_name
    );
    println!();
    println!("ARGUMENTS:");
    println!("    <expression>    A pointcut expression, quoted if it contains spaces");
    println!();
    println!("OPTIONS:");
    println!("    --help          Show this help message");
    println!();
    println!("OUTPUT:");
    println!("    Success: One line per token with kind, lexeme, and span");
    println!("    Failure: Error message with a caret pointing at the offending character");
    println!();
    println!("EXAMPLES:");
    println!(
        "    {} '@(public ClassName->methodName())'",
        program_name
    );
    println!("    {} '{{property read}}' '{{method public *}}'", program_name);
    println!("    {} 'loggable && !cacheable'", program_name);
}

fn tokenize_and_report(expression: &str) -> bool {
    println!("Tokenizing: {}", expression);

    match tokenize(expression) {
        Ok(stream) => {
            print_token_table(&stream);
            true
        }
        Err(error) => {
            match error.span() {
                Some(span) => {
                    let source = SourceExpression::new(expression);
                    eprint!("{}", source.format_error(&span, &error.to_string()));
                }
                None => eprintln!("Error: {}", error),
            }
            false
        }
    }
}

fn print_token_table(stream: &TokenStream) {
    println!(
        "  {} tokens ({} significant)",
        stream.len(),
        stream.significant_len()
    );
    for token in stream.iter() {
        let label = token.kind().map(|k| k.label()).unwrap_or("unclassified");
        println!("  {:<22} {:>7}  {:?}", label, token.span().to_string(), token.lexeme());
    }
}

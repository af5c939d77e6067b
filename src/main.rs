use match_highlight::logging;
use match_highlight::{highlight, render_ansi, Cli, Result};
use std::process::ExitCode;

fn run(cli: &Cli) -> Result<()> {
    cli.validate()?;

    if cli.debug {
        let log_path = logging::init_debug_logging()?;
        eprintln!("Debug log: {}", log_path.display());
    }

    let style = cli.style()?;
    let text = cli.input_source().read()?;
    logging::info_log(&format!("Highlighting terms {:?}", cli.terms));

    let result = highlight(&text, &cli.terms);
    if cli.count {
        println!("{}", result.match_count);
    } else {
        print!("{}", render_ansi(&result, &style, !cli.no_color));
        if !text.ends_with('\n') && !result.is_empty() {
            println!();
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            if let Some(suggestion) = err.get_recovery_suggestion() {
                eprintln!("{}", suggestion);
            }
            ExitCode::FAILURE
        }
    }
}

use std::io::{BufRead, Write};

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use rolodex::{
    ModelManager, RolodexParser, SavefileManager,
    cli_utils::{self, OutputFormat},
    commands::errors::format_cli_error,
    Model,
};

#[derive(CommandLine, Default, PartialEq, Eq)]
struct Options {
    #[arrrg(optional, "Path to the address book savefile (default: rolodex.json)")]
    savefile: String,
    #[arrrg(
        optional,
        "Output format for the export command: text, json, or yaml (default: text)"
    )]
    output: String,
}

const USAGE: &str = r#"Usage: rolodexctl [options] [command...]

Options:
  --savefile <path>    Path to the address book savefile (default: rolodex.json)
  --output <format>    Output format for the export command: text, json, or yaml (default: text)

Commands:
  add n/NAME p/PHONE e/EMAIL [s/STATUS]          Add an applicant
  delete IDENTIFIER_TYPE/KEYWORD                 Delete the uniquely matched applicant
  find IDENTIFIER_TYPE/KEYWORD                   List applicants matching an identifier
  list                                           List all applicants
  clear                                          Remove every applicant
  sort CRITERION                                 Sort by n/ (name), e/ (email), p/ (phone), or s/ (status)
  update IDENTIFIER_TYPE/KEYWORD [--custom] STATUS
                                                 Set the matched applicant's status
  export                                         Dump the applicant list in the selected format

With no command, rolodexctl reads commands line by line until 'exit'."#;

fn main() {
    let (options, free) = Options::from_command_line_relaxed(USAGE);

    let output: OutputFormat = options
        .output
        .parse()
        .unwrap_or_else(|e: String| cli_utils::exit_with_error(&e));
    let savefile = if options.savefile.is_empty() {
        "rolodex.json".to_string()
    } else {
        options.savefile
    };
    let manager = SavefileManager::new(savefile);
    let book = manager
        .load()
        .unwrap_or_else(|e| cli_utils::exit_with_error(&e.to_string()));
    let mut model = ModelManager::new(book);

    if free.is_empty() {
        run_input_loop(&mut model, &manager, output);
    } else {
        let line = free.join(" ");
        run_command(&line, &mut model, &manager, output, true);
    }
}

/// Line-oriented input loop: one command per line until `exit` or EOF.
fn run_input_loop(model: &mut ModelManager, manager: &SavefileManager, output: OutputFormat) {
    let stdin = std::io::stdin();
    loop {
        print!("> ");
        if std::io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => cli_utils::exit_with_error(&format!("Failed to read input: {}", e)),
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }
        run_command(line, model, manager, output, false);
    }
}

fn run_command(
    line: &str,
    model: &mut ModelManager,
    manager: &SavefileManager,
    output: OutputFormat,
    exit_on_error: bool,
) {
    if line.trim() == "export" {
        export(model, output);
        return;
    }
    let command = match RolodexParser::parse_command(line) {
        Ok(command) => command,
        Err(e) => {
            // Parse failures are recovered here: the command is simply not
            // executed.
            if exit_on_error {
                cli_utils::exit_with_usage_error(e.message(), USAGE);
            }
            eprintln!("Error: {}", e.message());
            return;
        }
    };
    match command.execute(model) {
        Ok(result) => {
            cli_utils::print_success(result.feedback());
            if let Err(e) = manager.save(model.address_book()) {
                cli_utils::exit_with_error(&format!("Failed to save address book: {}", e));
            }
        }
        Err(e) => {
            let rendered = format_cli_error(&e);
            if exit_on_error {
                eprintln!("{}", rendered);
                std::process::exit(1);
            }
            eprintln!("{}", rendered);
        }
    }
}

fn export(model: &ModelManager, output: OutputFormat) {
    let applicants = model.address_book().applicants();
    match output {
        OutputFormat::Text => {
            if applicants.is_empty() {
                println!("No applicants found");
            } else {
                for applicant in applicants {
                    println!("{}", applicant);
                }
            }
        }
        OutputFormat::Json | OutputFormat::Yaml => {
            cli_utils::print_formatted_or_exit(&applicants, output, "applicants");
        }
    }
}

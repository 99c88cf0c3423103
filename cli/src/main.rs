//! CLI for formatting greetings.
//!
//! ## Usage
//!
//! ```bash
//! # Greet by name (multiple words are joined with spaces)
//! greet Yuzu
//! greet Ada Lovelace
//!
//! # No name greets the world
//! greet
//!
//! # Read the name from stdin
//! echo "Yuzu" | greet
//! greet -
//!
//! # JSON output
//! greet --json Yuzu
//!
//! # Generate shell completions
//! source <(COMPLETE=bash greet)
//! ```

use std::io::{self, IsTerminal, Read};

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use serde::Serialize;

use well_met::format_greeting;

/// Format a greeting for a name
#[derive(Parser)]
#[command(name = "greet", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Name to greet; multiple words are joined with spaces (use "-" to read from stdin)
    #[arg(value_name = "NAME")]
    name: Vec<String>,

    /// Output as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

const AFTER_HELP: &str = "\
SHELL COMPLETIONS:
  Enable tab completions by adding one line to your shell config:

  Bash (~/.bashrc):
    source <(COMPLETE=bash greet)

  Zsh (~/.zshrc):
    source <(COMPLETE=zsh greet)

  Fish (~/.config/fish/config.fish):
    COMPLETE=fish greet | source

  PowerShell ($PROFILE):
    Invoke-Expression (& greet _complete powershell)

EXAMPLES:
  greet                         # Hello, World!
  greet Yuzu                    # Hello, Yuzu!
  greet Ada Lovelace            # Hello, Ada Lovelace!
  echo \"Yuzu\" | greet           # Name from stdin
  greet --json Yuzu             # {\"greeting\":\"Hello, Yuzu!\"}
";

fn main() {
    // Check for shell completion generation before parsing args
    if let Ok(shell_name) = std::env::var("COMPLETE") {
        generate_completions(&shell_name);
        return;
    }

    let cli = Cli::parse();

    let name = match resolve_name(&cli) {
        Ok(name) => name,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let greeting = format_greeting(name.as_deref());

    if cli.json {
        print_json(&greeting);
    } else {
        println!("{greeting}");
    }
}

/// Resolve the name to greet from positional args, "-", or piped stdin.
///
/// Returns `None` when no name was provided anywhere. Blank input is passed
/// through as-is; classification belongs to the library.
fn resolve_name(cli: &Cli) -> Result<Option<String>, String> {
    // "-" as the sole positional reads from stdin
    if cli.name.len() == 1 && cli.name[0] == "-" {
        return read_from_stdin().map(Some);
    }

    if !cli.name.is_empty() {
        return Ok(Some(cli.name.join(" ")));
    }

    // No positional name provided - fall back to piped stdin
    if !io::stdin().is_terminal() {
        read_from_stdin().map(Some)
    } else {
        Ok(None)
    }
}

/// Read a name from stdin with a 10,000 character limit.
///
/// Strips the trailing newline so `echo name | greet` greets `name`, not
/// `name\n`; interior and leading whitespace pass through verbatim.
fn read_from_stdin() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin()
        .take(10_000)
        .read_to_string(&mut buffer)
        .map_err(|e| format!("Failed to read from stdin: {e}"))?;

    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

/// Greeting payload for `--json` output.
#[derive(Serialize)]
struct GreetingOutput<'a> {
    greeting: &'a str,
}

/// Print the greeting as a single-field JSON object.
fn print_json(greeting: &str) {
    match serde_json::to_string(&GreetingOutput { greeting }) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            std::process::exit(1);
        }
    }
}

/// Generate shell completions and exit.
fn generate_completions(shell_name: &str) {
    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => {
            eprintln!(
                "Unknown shell: {shell_name}. Supported: bash, zsh, fish, powershell, elvish"
            );
            std::process::exit(1);
        }
    };

    clap_complete::generate(shell, &mut Cli::command(), "greet", &mut io::stdout());
}

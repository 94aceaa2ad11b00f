use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

use crepl::lexer::Language;
use crepl::repl::Repl;

#[derive(Parser)]
#[command(
    name = "crepl",
    version,
    about = "An interactive compile-and-run shell for C, C++, Objective-C, Java and C#"
)]
struct Cli {
    /// Language or project directory (accepted in either order)
    #[arg(value_name = "LANGUAGE|DIRECTORY")]
    first: Option<String>,

    /// Language or project directory (accepted in either order)
    #[arg(value_name = "LANGUAGE|DIRECTORY")]
    second: Option<String>,

    /// Print generated sources and toolchain commands
    #[arg(long)]
    debug: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (language, directory) = resolve_arguments(&cli)?;
    let language = match language {
        Some(language) => language,
        None => prompt_for_language()?,
    };
    let directory = directory.unwrap_or_else(|| default_directory(language));

    println!(
        "Working in directory {directory} using language {language}.  Type #help to see list of commands."
    );

    let mut repl = Repl::new(language, &directory);
    repl.set_debug(cli.debug);
    repl.interactive = io::stdin().is_terminal();

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl.run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// The two positional arguments are a language and a project directory in
/// either order; either or both may be missing.
fn resolve_arguments(cli: &Cli) -> Result<(Option<Language>, Option<String>)> {
    match (&cli.first, &cli.second) {
        (None, None) => Ok((None, None)),
        (Some(only), None) => match only.parse::<Language>() {
            Ok(language) => Ok((Some(language), None)),
            Err(_) => Ok((None, Some(only.clone()))),
        },
        (Some(first), Some(second)) => {
            if let Ok(language) = first.parse::<Language>() {
                Ok((Some(language), Some(second.clone())))
            } else if let Ok(language) = second.parse::<Language>() {
                Ok((Some(language), Some(first.clone())))
            } else {
                bail!("neither argument is a supported language: {first}, {second}");
            }
        }
        (None, Some(_)) => unreachable!("clap fills positionals in order"),
    }
}

fn default_directory(language: Language) -> String {
    let tag = match language {
        Language::C => "c",
        Language::Cpp => "c++",
        Language::ObjectiveC => "objective-c",
        Language::Java => "java",
        Language::CSharp => "c#",
    };
    format!("{tag}-project")
}

/// Ask for a language on stdin, matching on the first three characters so
/// `obj` picks Objective-C and `c++` is unambiguous.
fn prompt_for_language() -> Result<Language> {
    let names: Vec<String> = Language::ALL
        .iter()
        .map(|l| l.to_string().to_lowercase())
        .collect();
    print!("Choose a language ({}): ", names.join(" "));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let input = input.trim().to_lowercase();
    let prefix = |s: &str| s.chars().take(3).collect::<String>();
    for (language, name) in Language::ALL.iter().zip(&names) {
        if !input.is_empty() && prefix(&input) == prefix(name) {
            return Ok(*language);
        }
    }
    bail!("not an option: {input}");
}

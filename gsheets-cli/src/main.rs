//! Command-line interface for the gsheets grammar toolchain
//! This binary rebuilds the composite grammar document from its per-category
//! fragment sources, and converts function-name lists into fragment files.
//!
//! Usage:
//!   gsheets-syntax build [--fragments <dir>] [--output <file>]   - Assemble the grammar
//!   gsheets-syntax functions <names-file> [--output <file>]      - Convert a name list
//!   gsheets-syntax categories                                    - List recognized categories

mod cli;

use clap::ArgMatches;
use gsheets_config::Loader;
use gsheets_grammar::{names_to_fragment, Assembler, Category};
use std::path::Path;

fn main() {
    let matches = cli::cli().get_matches();

    match matches.subcommand() {
        Some(("build", sub)) => handle_build_command(sub),
        Some(("functions", sub)) => handle_functions_command(sub),
        Some(("categories", _)) => handle_categories_command(),
        _ => unreachable!("a subcommand is required"),
    }
}

/// Handle the build command
fn handle_build_command(matches: &ArgMatches) {
    let mut loader = Loader::new().with_optional_file("gsheets-syntax.toml");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let mut config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Some(dir) = matches.get_one::<String>("fragments") {
        config.assembler.fragments_dir = dir.into();
    }
    if let Some(path) = matches.get_one::<String>("output") {
        config.assembler.output = path.into();
    }
    if let Some(path) = matches.get_one::<String>("base") {
        config.assembler.base_grammar = Some(path.into());
    }
    if matches.get_flag("no-sort") {
        config.assembler.sort_functions = false;
    }

    let mut assembler = Assembler::new(&config.assembler.fragments_dir, config.language.metadata())
        .with_sort_functions(config.assembler.sort_functions);
    if let Some(base) = &config.assembler.base_grammar {
        assembler = assembler.with_base_grammar(base);
    }

    println!("Building grammar from {}", config.assembler.fragments_dir.display());
    let (doc, report) = assembler.assemble().unwrap_or_else(|e| {
        eprintln!("Assembly error: {}", e);
        std::process::exit(1);
    });
    for entry in &report.entries {
        println!("  -> {}", entry);
    }

    doc.write_to(&config.assembler.output).unwrap_or_else(|e| {
        eprintln!("Write error: {}", e);
        std::process::exit(1);
    });
    println!(
        "Grammar built successfully at: {} ({} rules)",
        config.assembler.output.display(),
        report.rule_count()
    );
}

/// Handle the functions command
fn handle_functions_command(matches: &ArgMatches) {
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let output = matches
        .get_one::<String>("output")
        .expect("output has a default value");
    let sort = matches.get_flag("sort");

    let config = Loader::new().build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let fragment = names_to_fragment(Path::new(path), &config.language.function_scope, sort)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {}", e);
            std::process::exit(1);
        });
    fragment.write_to(output).unwrap_or_else(|e| {
        eprintln!("Write error: {}", e);
        std::process::exit(1);
    });
    println!(
        "Converted {} function names to repository format: {}",
        fragment.rule_count(),
        output
    );
}

/// Handle the categories command
fn handle_categories_command() {
    println!("Recognized grammar categories:\n");

    for category in Category::RECOGNIZED {
        println!("  {}", category);
        println!("    {} ({})", category.source_file(), category.kind());
        println!();
    }
}

use std::env;

use symdict_importer::{ImportConfig, SymbolsImporter};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut root = ".".to_string();

    match args.len() {
        1 => {}
        2 if args[1] == "--help" || args[1] == "-h" => {
            println!("Usage: {} [<project-root>]", args[0]);
            println!();
            println!("Regenerates the per-language .dic dictionary tree under <project-root>");
            println!("(default: current directory) from the sources in <project-root>/symbolsrc/.");
            return;
        }
        2 => root = args[1].clone(),
        _ => {
            eprintln!("Usage: {} [<project-root>]", args[0]);
            std::process::exit(1);
        }
    }

    println!("Importing symbol dictionaries into: {}", root);
    println!("{}", "=".repeat(60));

    let config = ImportConfig::from_project_root(&root);
    let mut importer = SymbolsImporter::new(config);

    match importer.run() {
        Ok(summary) => {
            println!("\n{}", "=".repeat(60));
            println!("SUCCESS! Import completed.");
            println!("{}", "=".repeat(60));

            println!("\nStatistics:");
            println!("  Font-variant entries: {}", summary.font_variant_entries);
            println!("  Symbol dictionaries copied: {}", summary.symbol_dictionaries);
            println!("  Emoji dictionaries written: {}", summary.emoji_dictionaries);
        }
        Err(e) => {
            eprintln!("\nERROR: Import failed");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}

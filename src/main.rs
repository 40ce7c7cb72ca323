use mlocate_reader::{ConfigParam, DecodeOptions, MlocateReader};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-mlocate-db> [--no-verify-magic] [--list]", args[0]);
        std::process::exit(1);
    }

    let db_path = &args[1];
    let options = DecodeOptions {
        verify_magic: !args.iter().any(|arg| arg == "--no-verify-magic"),
    };
    let list_entries = args.iter().any(|arg| arg == "--list");

    println!("Reading mlocate database: {}", db_path);
    println!("{}", "=".repeat(60));

    let db = match MlocateReader::new(options).open(db_path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("\nERROR: Failed to read mlocate database");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    println!("\nDatabase Information:");
    println!("  Root: {}", db.header.database_path);
    println!("  Format version: {}", db.header.file_format_version);
    println!("  Require visibility: {}", db.header.requires_visibility());
    println!("  Configuration block: {} bytes", db.header.config_block_size);
    if !db.header.has_valid_magic() {
        println!("  Magic: {:02x?} (unexpected)", db.header.magic);
    }

    println!("\nConfiguration:");
    for param in ConfigParam::ALL {
        println!("  {}: {}", param, db.configuration.values(param).join(" "));
    }

    println!("\nStatistics:");
    println!("  Directories: {}", db.directories.len());
    println!("  Entries: {}", db.num_entries());

    if list_entries {
        println!("\nEntries:");
        for entry in db.entries() {
            let label = entry.file.type_label().unwrap_or("invalid");
            println!("  [{}] {}", label, entry.path());
        }
    }
}

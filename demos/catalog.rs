//! Narrated walk-through of a static linked list holding book titles.
//!
//! Build with `--features demo`; add `tracing` to see every slot move.

use anyhow::{Context, Result};
use clap::Parser;
use static_chain::{StaticLinkedList, StructureDump};

#[derive(Parser, Debug)]
#[command(name = "catalog", about = "Shelve titles in a fixed-capacity linked list", long_about = None)]
struct Cli {
    /// Number of slots to allocate
    #[arg(long, default_value_t = 8)]
    capacity: usize,

    /// Print structure dumps as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Titles to insert at the head, in order
    #[arg(default_values = [
        "Introduction to Algorithms",
        "Data Structures",
        "Programming Pearls",
        "Computer Networks",
        "Operating Systems",
    ])]
    titles: Vec<String>,
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(true)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}

fn print_dump(dump: &StructureDump<String>, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(dump).context("serializing structure dump")?;
        println!("{text}");
    } else {
        print!("{dump}");
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut shelf = StaticLinkedList::new(cli.capacity)
        .with_context(|| format!("creating a shelf with {} slots", cli.capacity))?;
    println!("Shelf ready: {}", shelf.utilization());
    print_dump(&shelf.dump_structure(), cli.json)?;

    println!("\n== insert at head");
    for title in &cli.titles {
        match shelf.insert_at_head(title.clone()) {
            Ok(slot) => println!("  '{title}' -> slot {slot}"),
            Err(err) => println!("  '{title}' rejected: {err}"),
        }
    }
    print_dump(&shelf.dump_structure(), cli.json)?;

    println!("\n== traverse");
    for (position, title) in shelf.iter().enumerate() {
        println!("  #{position}: '{title}'");
    }

    println!("\n== search");
    let mut probes: Vec<&str> = cli.titles.iter().skip(1).take(2).map(String::as_str).collect();
    probes.insert(1.min(probes.len()), "Mathematical Analysis");
    for probe in probes {
        match shelf.search(probe) {
            Some(position) => println!("  '{probe}' found at position {position}"),
            None => println!("  '{probe}' not on the shelf"),
        }
    }

    println!("\n== delete at head");
    match shelf.delete_at_head() {
        Some(title) => println!("  removed '{title}', slot {:?} is free again", shelf.free_head_slot()),
        None => println!("  shelf is empty"),
    }

    if let Some(title) = cli.titles.get(1) {
        println!("\n== remove '{title}'");
        match shelf.remove(title.as_str()) {
            Some(_) => println!("  removed"),
            None => println!("  not found"),
        }
    }
    print_dump(&shelf.dump_structure(), cli.json)?;

    println!("\n== insert at position 1");
    let extra = "Computer Systems: A Programmer's Perspective".to_string();
    match shelf.insert_at(1, extra) {
        Ok(slot) => println!("  stored in slot {slot}"),
        Err(err) => println!("  rejected: {err}"),
    }

    println!("\n== final order");
    println!("  {:?}", shelf.traverse());
    println!("  {}", shelf.utilization());

    shelf.validate().context("shelf structure is inconsistent")?;
    Ok(())
}

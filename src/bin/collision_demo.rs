//! Walks both tables through the fruit fixtures and prints every transition.
//!
//! `RUST_LOG=collision_tables=debug` additionally routes the same events
//! through the `log` facade.

use collision_tables::logger::initialize_logger;
use collision_tables::{
    ChainingTable, LogObserver, ProbingTable, TableError, TableEvent, TableObserver,
};
use log::info;

/// Prints each event's narration line and forwards it to the log.
#[derive(Default)]
struct Narrator {
    log: LogObserver,
}

impl TableObserver for Narrator {
    fn on_event(&mut self, event: &TableEvent<'_>) {
        println!("{}", event);
        self.log.on_event(event);
    }
}

fn chaining_demo() {
    println!("HASH TABLE COLLISION HANDLING: SEPARATE CHAINING");
    println!("================================================\n");

    let mut table = ChainingTable::with_capacity(5).with_observer(Narrator::default());
    let fixture = [
        ("apple", 10),
        ("banana", 20),
        ("grape", 30),
        ("orange", 40),
        ("melon", 50),
        ("peach", 60),
    ];

    println!("Inserting items:");
    for (key, value) in fixture {
        table.put(key, value);
    }

    println!("\nHash Table Contents:");
    println!("{}", "-".repeat(20));
    println!("{}", table.display());

    println!("\nTesting retrieval:");
    for (key, expected) in fixture {
        match table.get(key) {
            Some(v) => println!(
                "get('{}'): {} {}",
                key,
                v,
                if v == expected { "✓" } else { "✗" }
            ),
            None => println!("get('{}'): None ✗", key),
        }
    }

    println!("\nUpdating existing key:");
    table.put("apple", 100);
    println!("get('apple'): {:?}", table.get("apple"));

    println!("\nTesting removal:");
    table.remove("banana");
    table.remove("nonexistent");

    println!("\nHash Table Contents:");
    println!("{}", "-".repeat(20));
    println!("{}", table.display());
}

fn probing_demo() -> Result<(), TableError> {
    println!("\nHASH TABLE COLLISION HANDLING: LINEAR PROBING");
    println!("=============================================\n");

    let mut table = ProbingTable::with_capacity(7).with_observer(Narrator::default());

    println!("1. Inserting items:");
    for (key, value) in [
        ("apple", 10),
        ("banana", 20),
        ("orange", 30),
        ("grape", 40),
        ("melon", 50),
    ] {
        table.put(key, value)?;
    }
    println!("{}\n", table.display());

    println!("2. Getting values:");
    println!("apple = {}", table.get("apple")?);
    println!("banana = {}", table.get("banana")?);

    println!("\n3. Removing 'orange':");
    table.remove("orange");
    println!("{}\n", table.display());

    println!("4. Adding more items to see collision handling:");
    table.put("peach", 60)?;
    table.put("plum", 70)?;
    println!("{}\n", table.display());

    println!("5. Testing error handling:");
    match table.get("cherry") {
        Ok(v) => println!("cherry = {}", v),
        Err(e) => println!("Error caught: {}", e),
    }
    Ok(())
}

fn main() {
    initialize_logger();
    info!("running collision demo");

    chaining_demo();
    if let Err(e) = probing_demo() {
        eprintln!("probing demo failed: {}", e);
        std::process::exit(1);
    }
}

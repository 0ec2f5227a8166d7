use clap::Subcommand;
use laborbreath_core::{format_minutes, ContractionLog, ContractionStore};

#[derive(Subcommand)]
pub enum ContractionAction {
    /// Record a contraction at the current time
    Record,
    /// List contractions with intervals, most recent first
    List {
        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Delete all recorded contractions
    Clear,
}

fn open_log() -> Result<ContractionLog, Box<dyn std::error::Error>> {
    let store = ContractionStore::open()?;
    let mut log = ContractionLog::new(store);
    // Corrupt or unreadable history degrades to an empty log; keep going
    // but tell the user.
    if let Err(e) = log.load() {
        eprintln!("warning: {e}");
    }
    Ok(log)
}

pub fn run(action: ContractionAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ContractionAction::Record => {
            let mut log = open_log()?;
            match log.record_now() {
                Ok(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                Err(e) => {
                    // The contraction is still held in memory for this
                    // process; only the file write failed.
                    eprintln!("warning: {e}");
                    println!("{}", serde_json::to_string_pretty(&e.event)?);
                }
            }
        }
        ContractionAction::List { json } => {
            let log = open_log()?;
            let spaced = log.intervals();
            if json {
                let rows: Vec<_> = spaced
                    .iter()
                    .map(|s| {
                        serde_json::json!({
                            "id": s.event.id,
                            "timestamp": s.event.timestamp,
                            "interval_minutes": s.minutes,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if spaced.is_empty() {
                println!("no contractions recorded");
            } else {
                for s in &spaced {
                    let at = s.event.timestamp.format("%Y-%m-%d %H:%M:%S UTC");
                    match s.minutes {
                        Some(m) => {
                            println!("Contraction at {at}  interval {} minutes", format_minutes(m))
                        }
                        None => println!("Contraction at {at}  no prior event"),
                    }
                }
            }
        }
        ContractionAction::Clear => {
            let mut log = open_log()?;
            log.clear()?;
            println!("contraction log cleared");
        }
    }
    Ok(())
}

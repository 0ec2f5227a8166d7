use clap::Subcommand;
use laborbreath_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Set breathing durations (whole seconds)
    Set {
        /// Inhale duration in seconds
        #[arg(long)]
        inhale: Option<u64>,
        /// Exhale duration in seconds
        #[arg(long)]
        exhale: Option<u64>,
    },
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Set { inhale, exhale } => {
            let mut config = Config::load_or_default();
            if let Some(secs) = inhale {
                config.breath.inhale_secs = secs;
            }
            if let Some(secs) = exhale {
                config.breath.exhale_secs = secs;
            }
            config.breath.validate()?;
            config.save()?;
            println!("ok");
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}

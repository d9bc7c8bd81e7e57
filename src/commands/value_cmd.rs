use crate::commands::base_commands::Commands;
use crate::services::value_format::{format_value_output, normalize_submission_value};

pub fn value_command(cmd: Commands) {
    if let Commands::Value { input } = cmd {
        match normalize_submission_value(&input) {
            Some(value) => {
                let display = format_value_output(value as f64).unwrap_or_else(|| value.to_string());
                println!("{value} ({display})");
            }
            None => {
                eprintln!("Invalid value format. Use numbers with optional k, m, or b suffixes.");
            }
        }
    }
}

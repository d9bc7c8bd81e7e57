use crate::commands::base_commands::Commands;
use crate::services::event_config::EventConfig;
use crate::services::price_api::PriceClient;
use crate::services::value_format::format_value_output;

pub async fn prices_command(cmd: Commands) {
    if let Commands::Prices { config } = cmd {
        let config = match EventConfig::from_yaml_file(&config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to parse event config: {e}");
                return;
            }
        };
        if config.tracked_items.is_empty() {
            eprintln!("No tracked items configured for {}", config.name);
            return;
        }

        let mut client = match PriceClient::new(&config.prices_url, config.tracked_items.clone()) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Failed to create price client: {e}");
                return;
            }
        };

        match client.latest_prices().await {
            Ok(prices) => {
                for (name, price) in &prices {
                    let display =
                        format_value_output(*price as f64).unwrap_or_else(|| price.to_string());
                    println!("{name}: {display}");
                }
            }
            Err(e) => eprintln!("Failed to fetch prices: {e}"),
        }
    }
}

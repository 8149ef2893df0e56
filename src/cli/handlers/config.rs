use crate::cli::{args::ConfigAction, config::describe_padding, global::GlobalArgs};
use hexagrams64::{ALPHABET, Config};

pub fn handle(
    action: ConfigAction,
    _global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { json } => handle_show(json, config),
        ConfigAction::Alphabet => handle_alphabet(),
    }
}

fn handle_show(json: bool, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = config.encoding()?;

    if json {
        let output = serde_json::json!({
            "padding": encoding.padding().map(String::from),
            "wrap": config.wrap(),
            "settings": config.settings,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Padding: {}", describe_padding(encoding.padding()));
    if config.wrap() == 0 {
        println!("Wrap: off");
    } else {
        println!("Wrap: {} symbols", config.wrap());
    }
    println!("\nUse --json for structured output");

    Ok(())
}

fn handle_alphabet() -> Result<(), Box<dyn std::error::Error>> {
    for (digit, symbol) in ALPHABET.iter().enumerate() {
        println!("{:>2}  {}  U+{:04X}", digit, symbol, *symbol as u32);
    }
    Ok(())
}

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
    println!("Effective configuration:");
    println!("  Console: {}", config.variant);
    println!("  Backend URL: {}", config.base_url);
    println!(
        "  Endpoints: {}",
        config
            .variant
            .endpoints()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    if config.api_key.is_some() {
        println!("  API key: (from command line)");
    }
    println!("  UI theme: {}", config.theme_name);
    println!("  Start tab: {}", config.start_tab.label());
    if !config.initial_query.is_empty() {
        println!("  Initial query: {}", config.initial_query);
    }
    println!(
        "  User can wait: {}",
        bool_to_word(config.options.user_can_wait)
    );
    println!(
        "  Production incident: {}",
        bool_to_word(config.options.production_incident)
    );
    println!("  Log level: {}", config.log.level);
    match &config.log.file {
        Some(path) => println!("  Log file: {}", path.display()),
        None => println!("  Log file: (disabled)"),
    }
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

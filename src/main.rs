use crossterm::style::Stylize;
use polly_client::config::Config;
use polly_client::ApiClient;

mod table_display;

use table_display::display_polls;

fn print_help() {
    println!("{}", "polly-demo - Polly API client demonstration".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  polly-demo [OPTIONS] [BASE_URL]");
    println!();
    println!("{}", "Options:".yellow());
    println!(
        "  {} - Write config file with defaults",
        "--generate-config".green()
    );
    println!("  {}            - Show this help", "--help".green());
    println!();
    println!("{}", "Steps:".yellow());
    println!("  1. Register the configured demo user (400 = already registered)");
    println!("  2. List one page of polls");
    println!();
}

fn build_client(config: &Config) -> anyhow::Result<ApiClient> {
    let client = match config.api.timeout() {
        Some(timeout) => ApiClient::with_timeout(&config.api.base_url, timeout)?,
        None => ApiClient::new(&config.api.base_url),
    };
    Ok(client)
}

fn register(client: &ApiClient, config: &Config) {
    match client.register_user(&config.demo.username, &config.demo.password) {
        Ok(user) => println!(
            "{} {} (id {})",
            "User registered successfully:".green(),
            user.username,
            user.id
        ),
        Err(e) if e.is_duplicate_username() => {
            println!("{}", "Error: Username already registered".yellow())
        }
        Err(e) if e.is_http() => eprintln!("{} {}", "HTTP Error:".red(), e),
        Err(e) => eprintln!("{} {}", "Request Error:".red(), e),
    }
}

fn list_polls(client: &ApiClient, config: &Config) {
    match client.get_polls(config.demo.poll_query()) {
        Ok(polls) => display_polls(&polls),
        Err(e) if e.is_http() => eprintln!("{} {}", "HTTP Error:".red(), e),
        Err(e) => eprintln!("{} {}", "Error fetching polls:".red(), e),
    }
}

fn main() -> anyhow::Result<()> {
    polly_client::logging::init_tracing(Some("warn"));

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // Check for config file generation
    if args.contains(&"--generate-config".to_string()) {
        let path = Config::get_config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, Config::create_default_with_comments())?;
        println!("Configuration file created at: {:?}", path);
        return Ok(());
    }

    let mut config = Config::load()?;

    // A bare argument overrides the configured base URL
    if let Some(base_url) = args.iter().skip(1).find(|arg| !arg.starts_with("--")) {
        config.api.base_url = base_url.clone();
    }
    tracing::info!(target: "demo", "Using API at {}", config.api.base_url);

    let client = build_client(&config)?;
    register(&client, &config);
    list_polls(&client, &config);

    Ok(())
}

//! Energy Nexus entry point: CLI wiring and config-driven dashboard rendering.

use std::path::Path;
use std::process;

use chrono::Local;
use rand::{SeedableRng, rngs::StdRng};

use energy_nexus::config::AppConfig;
use energy_nexus::dashboard;
use energy_nexus::io::export::export_csv;
use energy_nexus::observability::init_tracing;
use energy_nexus::session::{Session, UserType};

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    preset: Option<String>,
    seed_override: Option<u64>,
    postal_code: Option<String>,
    user_type: Option<UserType>,
    hours: Option<usize>,
    series_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: Option<u16>,
}

fn print_help() {
    eprintln!("energy-nexus: peer-to-peer solar energy trading demo");
    eprintln!();
    eprintln!("Usage: energy-nexus [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Load configuration from a TOML file");
    eprintln!("  --preset <name>          Use a built-in preset (demo, sunny, seeded)");
    eprintln!("  --seed <u64>             Fix the random seed");
    eprintln!("  --postal-code <code>     Postal code for location lookup");
    eprintln!("  --user-type <type>       consumer or prosumer");
    eprintln!("  --hours <n>              Length of the analytics series");
    eprintln!("  --series-out <path>      Export the energy series to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start the REST API server");
        eprintln!("  --port <u16>             API server port (default: from config, 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the demo preset is used.");
}

fn fail(message: &str) -> ! {
    eprintln!("error: {message}");
    process::exit(1);
}

/// Returns the value following a flag, exiting if it is missing.
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str, what: &str) -> &'a str {
    match args.get(i).map(String::as_str) {
        Some(v) => v,
        None => fail(&format!("{flag} requires {what}")),
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        preset: None,
        seed_override: None,
        postal_code: None,
        user_type: None,
        hours: None,
        series_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                cli.config_path = Some(flag_value(&args, i, "--config", "a path argument").into());
            }
            "--preset" => {
                i += 1;
                cli.preset = Some(flag_value(&args, i, "--preset", "a name argument").into());
            }
            "--seed" => {
                i += 1;
                let v = flag_value(&args, i, "--seed", "a u64 argument");
                match v.parse::<u64>() {
                    Ok(s) => cli.seed_override = Some(s),
                    Err(_) => fail(&format!("--seed value \"{v}\" is not a valid u64")),
                }
            }
            "--postal-code" => {
                i += 1;
                cli.postal_code =
                    Some(flag_value(&args, i, "--postal-code", "a code argument").into());
            }
            "--user-type" => {
                i += 1;
                let v = flag_value(&args, i, "--user-type", "a type argument");
                match v.parse::<UserType>() {
                    Ok(t) => cli.user_type = Some(t),
                    Err(e) => fail(&e.to_string()),
                }
            }
            "--hours" => {
                i += 1;
                let v = flag_value(&args, i, "--hours", "a positive integer");
                match v.parse::<usize>() {
                    Ok(h) => cli.hours = Some(h),
                    Err(_) => fail(&format!("--hours value \"{v}\" is not a valid integer")),
                }
            }
            "--series-out" => {
                i += 1;
                cli.series_out = Some(flag_value(&args, i, "--series-out", "a path argument").into());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                let v = flag_value(&args, i, "--port", "a u16 argument");
                match v.parse::<u16>() {
                    Ok(p) => cli.port = Some(p),
                    Err(_) => fail(&format!("--port value \"{v}\" is not a valid u16")),
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    if cli.config_path.is_some() && cli.preset.is_some() {
        fail("--config and --preset are mutually exclusive");
    }

    cli
}

/// Loads the configuration and applies CLI overrides.
fn load_config(cli: &CliArgs) -> AppConfig {
    let loaded = if let Some(ref path) = cli.config_path {
        AppConfig::from_toml_file(Path::new(path))
    } else if let Some(ref name) = cli.preset {
        AppConfig::from_preset(name)
    } else {
        Ok(AppConfig::demo())
    };
    let mut config = loaded.unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    if let Some(seed) = cli.seed_override {
        config.series.seed = Some(seed);
    }
    if let Some(ref code) = cli.postal_code {
        config.session.postal_code = code.clone();
    }
    if let Some(user_type) = cli.user_type {
        config.session.user_type = user_type;
    }
    if let Some(hours) = cli.hours {
        config.series.hours = hours;
    }
    #[cfg(feature = "api")]
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }
    config
}

fn main() {
    init_tracing();
    let cli = parse_args();
    let config = load_config(&cli);

    let seed = config.series.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, postal_code = %config.session.postal_code, "starting");
    let mut rng = StdRng::seed_from_u64(seed);
    let now = Local::now().naive_local();

    let session = Session::from_config(&config.session);
    let view = dashboard::render(&session, &config, now, &mut rng)
        .unwrap_or_else(|e| fail(&e.to_string()));
    println!("{view}");

    if let Some(ref path) = cli.series_out {
        let samples = dashboard::export_series(&view, &config, now, &mut rng)
            .unwrap_or_else(|e| fail(&e.to_string()));
        if let Err(e) = export_csv(&samples, Path::new(path)) {
            fail(&format!("failed to write CSV: {e}"));
        }
        tracing::info!(path = %path, rows = samples.len(), "series exported");
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let state = Arc::new(energy_nexus::api::AppState { config });
        let rt = tokio::runtime::Runtime::new()
            .unwrap_or_else(|e| fail(&format!("failed to create tokio runtime: {e}")));
        if let Err(e) = rt.block_on(energy_nexus::api::serve(state, addr)) {
            fail(&format!("server error: {e}"));
        }
    }
}

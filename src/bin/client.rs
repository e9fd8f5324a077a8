//! Meteo CLI Client
//!
//! Sends one weather request and prints the result.

use std::io::Write;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use meteo::config::parse_port;
use meteo::network::Client;
use meteo::protocol::{decode_request_lenient, DEFAULT_ADDR, DEFAULT_PORT};
use meteo::report::{render, Report};
use meteo::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// Meteo CLI
#[derive(Parser, Debug)]
#[command(name = "meteo-client")]
#[command(about = "Ask a Meteo server for the weather, e.g. \"t Roma\"")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value_t = DEFAULT_ADDR.to_string())]
    server: String,

    /// Server port (1-65535)
    #[arg(short, long, default_value_t = DEFAULT_PORT, value_parser = parse_port)]
    port: u16,

    /// Request: "<type> <city>", type one of t, h, w, p
    #[arg(short, long, value_name = "REQUEST")]
    request: Option<String>,

    /// Request given without -r
    #[arg(value_name = "REQUEST", conflicts_with = "request")]
    positional: Option<String>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let request = match args.request.or(args.positional) {
        Some(request) => request,
        None => Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "a request is required: -r \"type city\"",
            )
            .exit(),
    };

    let config = Config::builder()
        .listen_addr(&args.server)
        .port(args.port)
        .build();

    let client = match Client::connect(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Connessione fallita: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let server_ip = client.server_addr().ip();

    let response = match client.request(&request) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Comunicazione con il server fallita: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Only used to echo the city back; the server has the final say
    let city = decode_request_lenient(request.as_bytes())
        .map(|parsed| parsed.city)
        .unwrap_or_default();

    match render(&response, &city, server_ip) {
        Report::Weather(line) => println!("{}", line),
        Report::Failure { prefix, reason } => {
            print!("{}", prefix);
            if let Err(e) = std::io::stdout().flush() {
                tracing::warn!("Failed to flush stdout: {}", e);
            }
            eprintln!("{}", reason);
        }
    }

    println!("Client terminated.");
    ExitCode::SUCCESS
}

//! coap-gpio CLI Client
//!
//! Command-line interface for talking to a coap-gpio server.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, Subcommand};
use coap_gpio::client::{Client, Reply};
use tracing_subscriber::{fmt, EnvFilter};

/// coap-gpio CLI
#[derive(Parser, Debug)]
#[command(name = "coap-gpio-cli")]
#[command(about = "CLI for a coap-gpio server")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:5683")]
    server: SocketAddr,

    /// Reply timeout in milliseconds
    #[arg(short, long, default_value_t = 2000)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// GET a resource
    Get {
        /// Resource path, e.g. /button
        path: String,
    },

    /// Set the LED
    SetLed {
        /// Value sent as {"led": <value>}
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// POST an arbitrary body
    Raw {
        /// Resource path
        path: String,

        /// Body sent verbatim
        body: String,
    },

    /// Send a CoAP ping
    Ping,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> coap_gpio::Result<()> {
    let mut client = Client::connect(args.server, Duration::from_millis(args.timeout_ms))?;

    match args.command {
        Commands::Get { path } => print_reply(&client.get(&path)?),
        Commands::SetLed { value } => {
            let body = format!("{{\"led\": {}}}", value);
            print_reply(&client.post("/led", body.as_bytes())?)
        }
        Commands::Raw { path, body } => print_reply(&client.post(&path, body.as_bytes())?),
        Commands::Ping => {
            if client.ping()? {
                println!("pong");
            } else {
                println!("unexpected reply to ping");
            }
        }
    }
    Ok(())
}

fn print_reply(reply: &Reply) {
    println!("{:?}", reply.status);
    if !reply.payload.is_empty() {
        println!("{}", reply.text());
    }
}

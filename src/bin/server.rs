//! coap-gpio Server Binary
//!
//! Configures the pins, binds the CoAP socket and serves forever.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{Parser, ValueEnum};
use coap_gpio::config::{LedValuePolicy, DEFAULT_BUTTON_PIN, DEFAULT_LED_PIN, DEFAULT_PORT};
use coap_gpio::hardware::{Gpio, SimulatedGpio};
use coap_gpio::network::{Dispatcher, Server};
use coap_gpio::{Config, Device};
use tracing_subscriber::{fmt, EnvFilter};

/// GPIO backend selection
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Backend {
    /// In-memory pins (no hardware needed)
    Sim,
    /// Raspberry Pi pins (requires the `rpi` feature)
    Rpi,
}

/// coap-gpio Server
#[derive(Parser, Debug)]
#[command(name = "coap-gpio-server")]
#[command(about = "CoAP server exposing an LED and a button")]
#[command(version)]
struct Args {
    /// IP address to bind
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    bind: IpAddr,

    /// UDP port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// GPIO backend
    #[arg(long, value_enum, default_value_t = Backend::Sim)]
    backend: Backend,

    /// BCM number of the LED pin
    #[arg(long, default_value_t = DEFAULT_LED_PIN)]
    led_pin: u8,

    /// BCM number of the button pin
    #[arg(long, default_value_t = DEFAULT_BUTTON_PIN)]
    button_pin: u8,

    /// Store any non-zero LED value as 1
    #[arg(long)]
    clamp_led: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,coap_gpio=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("coap-gpio server v{}", coap_gpio::VERSION);
    tracing::info!("Backend: {:?}", args.backend);

    // Build config from args
    let policy = if args.clamp_led {
        LedValuePolicy::Clamp
    } else {
        LedValuePolicy::PassThrough
    };
    let config = Config::builder()
        .bind_addr(SocketAddr::new(args.bind, args.port))
        .led_pin(args.led_pin)
        .button_pin(args.button_pin)
        .led_value_policy(policy)
        .build();

    let gpio = match open_backend(args.backend) {
        Ok(g) => g,
        Err(e) => {
            tracing::error!("Failed to open GPIO backend: {}", e);
            std::process::exit(1);
        }
    };

    // Configure pins
    let device = match Device::open(&config, gpio) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("Failed to configure device: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "LED on pin {}, button on pin {}",
        config.led_pin,
        config.button_pin
    );

    // Start server
    let mut server = match Server::bind(&config, Dispatcher::new(device)) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.bind_addr, e);
            std::process::exit(1);
        }
    };

    let Err(e) = server.run();
    tracing::error!("Server error: {}", e);
    std::process::exit(1);
}

fn open_backend(backend: Backend) -> coap_gpio::Result<Box<dyn Gpio + Send>> {
    match backend {
        Backend::Sim => Ok(Box::new(SimulatedGpio::new())),
        #[cfg(feature = "rpi")]
        Backend::Rpi => Ok(Box::new(coap_gpio::hardware::RpiGpio::open()?)),
        #[cfg(not(feature = "rpi"))]
        Backend::Rpi => Err(coap_gpio::CoapGpioError::Config(
            "built without the `rpi` feature".to_string(),
        )),
    }
}

// ABOUTME: Example application sending an SMS through the Clickatell gateway
// ABOUTME: Prints one line per delivery report, or the failure when the send failed as a whole

use argh::FromArgs;
use clickatell::{ClickatellGateway, GatewayConfig, SmsGateway, SmsMessage};
use std::error::Error;

/// Send an SMS message through Clickatell
#[derive(FromArgs)]
struct CliArgs {
    /// whether or not to enable debugging
    #[argh(switch, short = 'd')]
    debugging: bool,

    /// the REST auth token (default: $CLICKATELL_AUTH_TOKEN)
    #[argh(option)]
    token: Option<String>,

    /// send over plain HTTP instead of HTTPS
    #[argh(switch)]
    insecure: bool,

    /// the API host (default: api.clickatell.com)
    #[argh(option)]
    host: Option<String>,

    /// the message to send
    #[argh(option, short = 'm')]
    message: String,

    /// a recipient telephone number, may be repeated
    #[argh(option, short = 't')]
    to: Vec<String>,

    /// the sender ID shown to recipients
    #[argh(option, short = 'f')]
    from: Option<String>,
}

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli_args: CliArgs = argh::from_env();

    let level = if cli_args.debugging {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match cli_args.token {
        Some(token) => GatewayConfig::new(token).with_insecure(cli_args.insecure),
        None => {
            let config = GatewayConfig::from_env()?;
            let insecure = config.settings.insecure || cli_args.insecure;
            config.with_insecure(insecure)
        }
    };

    let mut gateway = ClickatellGateway::new(config);
    if let Some(host) = cli_args.host {
        gateway = gateway.with_host(host);
    }

    let mut builder = SmsMessage::builder()
        .recipients(cli_args.to)
        .text(cli_args.message);
    if let Some(from) = cli_args.from {
        builder = builder.from(from);
    }
    let sms = builder.build()?;

    let result = gateway.send(&sms).await;

    if let Some(failure) = &result.failure {
        eprintln!("Send failed ({:?}): {}", failure.kind, failure.message);
        return Err(failure.message.clone().into());
    }

    for report in &result.reports {
        println!(
            "{}: {:?} {} {}",
            report.recipient,
            report.status,
            report.message_id.as_deref().unwrap_or("-"),
            report.status_message.as_deref().unwrap_or("")
        );
    }

    Ok(())
}

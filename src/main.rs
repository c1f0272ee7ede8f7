mod cli;
mod error;
mod probe;
mod session;
mod verdict;

use clap::Parser;
use cli::CliArgs;
use error::Result;

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

async fn run(args: CliArgs) -> Result<()> {
    let request = args.resolve_probe_request()?;

    if url::Url::parse(&request.base_url).is_err() {
        tracing::warn!(
            "`{}` is not an absolute URL; the probes are likely to fail",
            request.base_url
        );
    }

    let session = session::HttpSession::new(&args.session_config())?;

    if !args.json {
        println!(
            "probing {} ({} concurrent requests)...",
            request.endpoint(),
            request.probes
        );
    }

    let report = probe::run_probe(&session, &request).await?;

    if args.json {
        let body = serde_json::json!({
            "verdict": report.verdict,
            "valid": report.verdict.is_valid(),
            "reason": report.verdict.reason(),
            "probes": report.fingerprints,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        for (index, present) in report.fingerprints.iter().enumerate() {
            println!(
                "probe {}: {} {}",
                index + 1,
                probe::FINGERPRINT_FIELD,
                if *present { "present" } else { "absent" }
            );
        }
        println!(
            "result: {}",
            if report.verdict.is_valid() {
                "valid API"
            } else {
                "invalid API"
            }
        );
        println!("reason: {}", report.verdict.reason());
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = CliArgs::parse();

    if let Err(error) = run(args).await {
        tracing::error!("{error:?}");
        std::process::exit(1);
    }
}

use anyhow::{Context, Result};
use broker_gateway::PaperBroker;
use clap::Parser;
use execution_engine::{io::Args, AppConfig, CampaignRunner, TradingDesk};
use log::info;
use trading::Credentials;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // 1. Configuration: file, then environment, then flags
    let mut app =
        AppConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(pairs) = args.pairs {
        app.risk = app.risk.with_instrument_list(pairs);
    }
    let credentials = Credentials::new(
        args.api_token
            .unwrap_or_else(|| app.credentials.api_token().to_string()),
        args.account_id
            .unwrap_or_else(|| app.credentials.account_id().to_string()),
    );

    // 2. Desk + session
    let broker = PaperBroker::new(app.paper.clone());
    let runner = CampaignRunner::from_config(&app.execution);
    let mut desk = TradingDesk::new(runner, app.risk.clone());
    desk.save_settings(app.risk.clone());
    desk.connect(&broker, &credentials)
        .await
        .context("could not open a trading session")?;

    // 3. One campaign
    let handle = desk.toggle().context("campaign did not start")?;
    let report = handle.await.context("campaign task failed")?;
    desk.disconnect().await;

    info!(
        "Campaign report: {} succeeded, {} failed, {} skipped, {} orders",
        report.succeeded(),
        report.failed(),
        report.skipped(),
        report.orders_placed()
    );

    for event in desk.event_log().snapshot() {
        if args.json {
            println!("{}", serde_json::to_string(&event)?);
        } else {
            println!("{}", event);
        }
    }

    Ok(())
}

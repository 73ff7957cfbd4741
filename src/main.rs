use anyhow::Context;

use intake::configuration::get_config;
use intake::startup;
use intake::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("intake".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_config().context("failed to read configuration")?;
    startup::run(settings).await
}

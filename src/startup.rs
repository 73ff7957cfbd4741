use anyhow::Context;

use crate::configuration::Settings;
use crate::{fetcher, notifier, persistence, prompt};

/// Where the collected name ends up. Deliberately a constant, not
/// configuration: the workflow notifies one administrator.
pub const ADMIN_EMAIL: &str = "admin@example.com";

const NOTIFICATION_SUBJECT: &str = "New user signup";

/// The whole workflow: prompt, fetch, persist, notify, strictly in that order.
/// Prompt and fetch failures abort the run; persistence and notification are
/// best-effort side effects that are logged but do not fail the process.
pub async fn run(settings: Settings) -> Result<(), anyhow::Error> {
    let name = prompt::ask_for_name()
        .await
        .context("could not collect a valid name")?;
    tracing::info!("collected name: {}", name.as_ref());

    let client = reqwest::Client::new();
    let value = fetcher::fetch_value(&client, &settings.api)
        .await
        .context("could not fetch the remote value")?;

    if let Err(e) = persistence::store_value(&settings.db, &value).await {
        tracing::error!("failed to persist the fetched value: {:?}", e);
    }

    if let Err(e) = notifier::send_notification(
        &settings.smtp,
        &settings.from.email,
        ADMIN_EMAIL,
        NOTIFICATION_SUBJECT,
        name.as_ref(),
    )
    .await
    {
        tracing::error!("failed to send the notification email: {:?}", e);
    }

    Ok(())
}

use std::io;

use toast_alimtalk::{
    AlimtalkClient, ClientConfig, MessageContent, SendOptions, SendSameMessage, TemplateCode,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let template = std::env::var("ALIMTALK_TEMPLATE_CODE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ALIMTALK_TEMPLATE_CODE environment variable is required",
        )
    })?;
    // Comma-separated, e.g. `01012345678,01087654321`.
    let phones = std::env::var("ALIMTALK_PHONES").unwrap_or_default();
    let numbers = phones
        .split(',')
        .map(str::trim)
        .filter(|it| !it.is_empty())
        .collect::<Vec<_>>();
    // JSON array of buttons, e.g. `[{"ordering":1,"type":"WL","name":"go","linkMo":"https://..."}]`.
    let buttons = std::env::var("ALIMTALK_BUTTONS")
        .ok()
        .map(|raw| serde_json::from_str::<serde_json::Value>(&raw))
        .transpose()?;

    let client = AlimtalkClient::new(ClientConfig::from_env()?)?;
    let request = SendSameMessage::from_json(
        TemplateCode::new(template)?,
        serde_json::json!(numbers),
        MessageContent::new("Hello from the toast-alimtalk demo.")?,
        buttons,
        SendOptions::default(),
    )?;

    let message = client.send_same_message_to_multiple_recipients(request).await?;
    println!("{}", serde_json::to_string_pretty(&message)?);

    Ok(())
}

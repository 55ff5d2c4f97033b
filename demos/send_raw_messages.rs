use std::io;

use toast_alimtalk::{
    AlimtalkClient, ClientConfig, MessageContent, PhoneNumber, PlusFriendId, Recipient,
    RecipientNo, SendOptions, SendRawMessages, TemplateCode,
};
use tracing_subscriber::EnvFilter;

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let template = required("ALIMTALK_TEMPLATE_CODE")?;
    let phone = required("ALIMTALK_PHONE")?;
    let content = std::env::var("ALIMTALK_CONTENT")
        .unwrap_or_else(|_| "Hello from the toast-alimtalk demo.".to_owned());

    let client = AlimtalkClient::new(ClientConfig::from_env()?)?;

    let recipient = Recipient::new(
        RecipientNo::from(PhoneNumber::parse_kr(phone)?),
        MessageContent::new(content)?,
    );
    let options = SendOptions {
        plus_friend_id: std::env::var("ALIMTALK_PLUS_FRIEND_ID")
            .ok()
            .map(PlusFriendId::new)
            .transpose()?,
        ..Default::default()
    };
    let request = SendRawMessages::new(TemplateCode::new(template)?, vec![recipient], options);

    let message = client.send_raw_messages(request).await?;
    println!("{}", serde_json::to_string_pretty(&message)?);

    Ok(())
}

use std::io;

use toast_alimtalk::{AlimtalkClient, CancelRequest, ClientConfig, RequestId};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let request_id = std::env::var("ALIMTALK_REQUEST_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ALIMTALK_REQUEST_ID environment variable is required",
        )
    })?;
    let recipient_seq = std::env::var("ALIMTALK_RECIPIENT_SEQ").unwrap_or_default();

    let client = AlimtalkClient::new(ClientConfig::from_env()?)?;
    let request = CancelRequest::new(RequestId::new(request_id)?).with_recipient_seq(recipient_seq);

    let result = client.cancel_pending_request(request).await?;
    println!("cancelled: {result}");

    Ok(())
}

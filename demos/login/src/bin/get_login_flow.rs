use ory_login_client::prelude::*;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let Some(flow_id) = std::env::args().nth(1) else {
        error!("usage: get_login_flow <flow-id>");
        std::process::exit(2);
    };

    // Requires ORY_PROJECT_SLUG (environment or .env)
    let client = Client::from_env()?;
    info!("Using {}", client.config().base_url()?);

    let ctx = Context::with_timeout(Duration::from_secs(10));
    let flow = match get_login(&client, &ctx, &flow_id).await {
        Ok(flow) => flow,
        Err(AppError::Api(err)) => {
            error!("Login flow {} could not be fetched: {}", flow_id, err);
            if let Some(new_id) = err.error.as_ref().and_then(|e| e.use_flow_id()) {
                info!("Service suggests using flow {}", new_id);
            }
            return Err(AppError::Api(err).into());
        }
        Err(e) => return Err(e.into()),
    };

    match flow.time_remaining(Utc::now()) {
        Some(left) => info!("Flow {} expires in {}s", flow.id, left.num_seconds()),
        None => warn!("Flow {} has expired", flow.id),
    }
    for message in flow.error_messages() {
        warn!("{}: {}", message.id, message.text);
    }

    println!("{}", flow.ui);
    println!("{}", serde_json::to_string_pretty(&flow)?);

    Ok(())
}

#[path = "llm-battle/app.rs"]
mod app;
#[path = "llm-battle/args.rs"]
mod args;
#[path = "llm-battle/factory.rs"]
mod factory;
#[path = "llm-battle/logging.rs"]
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}

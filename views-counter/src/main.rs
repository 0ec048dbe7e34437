// the handler is restarted by the host on failure, errors are reported instead of panicking
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]

use {
    std::{sync::Arc, process::exit},
    tracing::{info, error},
    tracing_subscriber::FmtSubscriber,
    clap::Parser,
    views_counter::{
        CounterService,
        ViewsResponse,
        cli::{Args, Command},
        config::{Config, store_from_config},
        handler::serve,
    },
};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_ansi(false)
        .without_time()
        .init();

    if let Err(err) = run_command(args).await {
        error!("views-counter failed: {err}");
        exit(-1);
    }
}

async fn run_command(args: Args) -> Result<(), lambda_runtime::Error> {
    let command = args.command();
    let mut config = match args.config {
        Some(config_path) => {
            info!("loading config from {config_path:?}");
            Config::load(config_path).await?
        },
        None => Config::default(),
    };
    if let Some(table) = args.table {
        config = config.with_table(table);
    }

    let store = store_from_config(&config.store, &config.counter).await?;
    let service = CounterService::new(store, &config.counter);

    match command {
        Command::Serve => {
            info!(key = %service.key(), "serving lambda invocations");
            serve(Arc::new(service)).await?;
        },
        Command::Run => {
            let views = service.increment_and_store().await?;
            println!("{}", serde_json::to_string(&ViewsResponse { views })?);
        },
        Command::Get => {
            println!("{}", service.get_count().await?);
        },
    }

    Ok(())
}

// src/main.rs

use cssdts::{cli, logging, options_from_args, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        eprintln!("cssdts error: {err:?}");
        std::process::exit(1);
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    let options = options_from_args(&args)?;
    logging::init_logging(args.log_level, options.verbose)?;
    run(args, options).await
}

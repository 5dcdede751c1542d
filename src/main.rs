use anyhow::Result;
use term_inject::Config;
use term_inject::pipeline::run;
use term_inject::task::TERMINAL_TASKS;

fn main() -> Result<()> {
    let config = Config::from_cli()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let report = run(&config, &TERMINAL_TASKS)?;
    for asset in &report.assets {
        println!("{}: {} bytes", asset.label, asset.bytes);
    }
    Ok(())
}

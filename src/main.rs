use clap::Parser;
use ft_write::utils::logger;
use ft_write::{program, ByteWriter, CliConfig, StdStreams};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::info!("Starting ft-write");
    tracing::debug!("CLI config: {:?}", config);

    let mut writer = ByteWriter::new(StdStreams::std());
    program::run(&mut writer);

    // Write failures never change the exit status.
    tracing::info!("Done");
    Ok(())
}

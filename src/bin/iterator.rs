use pattern_demos::{iterator, telemetry, DemoConfig, Result};

fn main() -> Result<()> {
    telemetry::init();
    let config = DemoConfig::load_or_default(DemoConfig::DEFAULT_PATH)?;
    let mut console = config.console();

    iterator::run_demo(&mut console);
    Ok(())
}

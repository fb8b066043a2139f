use pattern_demos::{observer, telemetry, DemoConfig, Result};

fn main() -> Result<()> {
    telemetry::init();
    let config = DemoConfig::load_or_default(DemoConfig::DEFAULT_PATH)?;
    let mut console = config.console();
    let mut rng = config.rng();

    observer::run_demo(&mut console, &mut rng, config.pacing());
    Ok(())
}

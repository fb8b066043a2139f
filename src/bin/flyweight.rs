use pattern_demos::{flyweight, telemetry, DemoConfig, Result};

fn main() -> Result<()> {
    telemetry::init();
    let config = DemoConfig::load_or_default(DemoConfig::DEFAULT_PATH)?;
    let mut console = config.console();

    flyweight::run_demo(&mut console)
}

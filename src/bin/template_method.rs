use pattern_demos::{telemetry, template_method, DemoConfig, Result};

fn main() -> Result<()> {
    telemetry::init();
    let config = DemoConfig::load_or_default(DemoConfig::DEFAULT_PATH)?;
    let mut console = config.console();

    template_method::run_demo(&mut console);
    Ok(())
}

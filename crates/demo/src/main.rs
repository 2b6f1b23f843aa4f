use std::error::Error;

use tau_demo::{Scenario, figure};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let responses = Scenario::default().evaluate()?;
    figure(&responses)?.show()?;

    Ok(())
}

use anyhow::Result;

use ascii_raytracer::{config, driver};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    driver::run(config::GLOBAL())
}

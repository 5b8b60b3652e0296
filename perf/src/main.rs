use treebench::{BenchConfig, run};

fn main() -> std::io::Result<()> {
    env_logger::init();
    run(&BenchConfig::default())?;
    Ok(())
}

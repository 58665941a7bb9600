use render_bench::series::MeasurementSet;
use render_bench::stats::welch_t_test;
use std::path::Path;

const EXPERIMENT: &str = "linearize";
const RENDERS_DIR: &str = "renders";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    env_logger::init();
    let set = MeasurementSet::load(Path::new(RENDERS_DIR), EXPERIMENT)?;

    let cpu = welch_t_test(&set.cpu_branch, &set.cpu_pred)?;
    let gpu = welch_t_test(&set.gpu_branch, &set.gpu_pred)?;

    println!("CPU: {cpu}");
    println!("GPU: {gpu}");
    Ok(())
}

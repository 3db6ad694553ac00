use std::path::PathBuf;
use log::info;
use rabi_bloch::{
    mkdir,
    config::RabiConfig,
    bloch::rabi_trajectory,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = RabiConfig::reference();
    info!(
        "θ = {}, φ = {}, Δ = {}, n = {}, g = {}, N = {}",
        config.state.theta, config.state.phi,
        config.drive.detuning, config.drive.photons, config.drive.coupling,
        config.samples,
    );

    let trajectory = rabi_trajectory(&config)?;
    info!(
        "sampled {} points; max |v| deviation = {:.3e}",
        trajectory.len(), trajectory.max_radius_error(),
    );

    let outdir = PathBuf::from("output/rabi");
    mkdir!(outdir);
    trajectory.save_npz(outdir.join("data.npz"))?;
    let plot = config.figure.render(&trajectory)?;
    plot.save(outdir.join("bloch.svg"))?;
    info!("wrote {}", outdir.display());

    println!("done");
    Ok(())
}

//! Bell test (CHSH arrangement) with entangled photon polarizations.

use bellsim::core::TSIRELSON_BOUND;
use bellsim::{BellError, Experiment, ExperimentConfig, PhotonRule, SourceConfig, validate_photon_report};

fn main() -> Result<(), BellError> {
    env_logger::init();

    println!("*** Bell test experiment for photons with entangled polarization values ***");

    let config = ExperimentConfig::default().source(SourceConfig::Platform);
    let experiment = Experiment::new(config)?;

    for rule in PhotonRule::ALL {
        println!("\nExperiment by {}", rule);
        let report = experiment.run_photon(rule);
        validate_photon_report(&report)?;
        print!("{}", report);
    }

    println!("\nClassical bound: 2, Tsirelson bound: {:.4}", TSIRELSON_BOUND);
    Ok(())
}

use std::error::Error;

use clap::Args;
use mfd_core::MachineParameters;
use mfd_engine::{classify, evaluate};
use serde_json::json;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Free-text frequency-signature description to classify.
    #[arg(long)]
    pub text: String,
    /// Rotation frequency fr in Hz used when evaluating the rule.
    #[arg(long, default_value_t = 0.0)]
    pub fr: f64,
    /// Supply frequency fs in Hz used when evaluating the rule.
    #[arg(long, default_value_t = 0.0)]
    pub fs: f64,
    /// Gear tooth count Z used when evaluating the rule.
    #[arg(long, default_value_t = 0.0)]
    pub z: f64,
}

pub fn run(args: &ClassifyArgs) -> Result<(), Box<dyn Error>> {
    let rule = classify(&args.text);
    let params = MachineParameters {
        fr: args.fr,
        fs: args.fs,
        z: args.z,
        ..MachineParameters::default()
    };
    let typical = evaluate(rule, &params);
    let payload = json!({
        "text": args.text,
        "rule": rule,
        "typical": typical,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

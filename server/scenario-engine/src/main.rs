//! Binary entrypoint: read one JSON object from stdin, write one to stdout.
//!
//! Output is either a Simulation or an ErrorOutput (exit code 1).

use scenario_engine::types::ErrorOutput;
use scenario_engine::{run, EngineError, Input};
use std::io::{self, Read, Write};

fn main() {
  let mut raw = String::new();
  if let Err(e) = io::stdin().lock().read_to_string(&mut raw) {
    let _ = writeln!(io::stderr(), "scenario-engine: read error: {}", e);
    std::process::exit(1);
  }

  let result = serde_json::from_str::<Input>(&raw)
    .map_err(EngineError::from)
    .and_then(|input| run(&input));

  let stdout = io::stdout();
  let mut out = stdout.lock();
  let ok = match result {
    Ok(sim) => serde_json::to_writer(&mut out, &sim).is_ok(),
    Err(e) => {
      let err = match &e {
        EngineError::Validation { field, reason } => {
          ErrorOutput::new(reason.clone()).with_field(field.clone())
        }
        _ => ErrorOutput::new(e.to_string()),
      };
      let _ = serde_json::to_writer(&mut out, &err);
      false
    }
  };
  let _ = writeln!(out);
  let _ = out.flush();

  if !ok {
    std::process::exit(1);
  }
}

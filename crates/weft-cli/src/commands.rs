//! CLI command implementations.

use std::fs::File;
use std::io::BufWriter;

use weft_dynamics::SimParams;
use weft_sim::{RunMetrics, Scenario, ScenarioKind, SimRunner};
use weft_telemetry::{EventBus, JsonLinesSink};

/// Run one or more scenarios and report metrics.
pub fn run(
    scenario_name: &str,
    steps: Option<u32>,
    output_path: Option<&str>,
    telemetry_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Weft Scenario Runner");
    println!("────────────────────");
    println!();

    let kinds: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        let kind = match scenario_name {
            "floor_drop" => ScenarioKind::FloorDrop,
            "sphere_drape" => ScenarioKind::SphereDrape,
            "box_drape" => ScenarioKind::BoxDrape,
            other => {
                eprintln!("Unknown scenario: {other}");
                eprintln!("Available: floor_drop, sphere_drape, box_drape, all");
                return Err("Unknown scenario".into());
            }
        };
        vec![kind]
    };

    let mut bus = EventBus::new();
    if let Some(path) = telemetry_path {
        let file = BufWriter::new(File::create(path)?);
        bus.add_sink(Box::new(JsonLinesSink::new(file)));
    }

    let mut all_metrics = Vec::new();

    for &kind in &kinds {
        let mut scenario = Scenario::from_kind(kind)?;
        if let Some(steps) = steps {
            scenario.timesteps = steps;
        }

        println!(
            "Running: {} ({} particles, {} steps)",
            kind.name(),
            scenario.sheet.len(),
            scenario.timesteps,
        );

        let metrics = SimRunner::run(&mut scenario, &mut bus)?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.2}", metrics.max_displacement);
        println!("  Contacts:      {}", metrics.contacts_resolved);
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = RunMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", RunMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Validate a SimParams JSON file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let params: SimParams =
        serde_json::from_str(&text).map_err(|e| format!("Failed to parse {path}: {e}"))?;
    params.validate()?;

    println!("{path}: OK");
    println!("  damping:  {}", params.damping);
    println!("  friction: {}", params.friction);
    println!(
        "  gravity:  [{}, {}, {}]",
        params.gravity[0], params.gravity[1], params.gravity[2]
    );
    Ok(())
}

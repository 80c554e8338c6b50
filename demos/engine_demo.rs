//! Demonstration of embedding the generation engine in a host loop
//!
//! This example shows the two ways a host can drive the engine: directly
//! through `GenerationEngine::advance`, and paced through a `Simulation`
//! fed with elapsed time.

use bounded_life::config::Settings;
use bounded_life::life::GenerationEngine;
use bounded_life::runner::Simulation;
use bounded_life::utils::ReportFormatter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Generation Engine Demonstration ===\n");

    direct_drive()?;
    paced_drive()?;

    println!("✅ Engine demonstration complete!");
    Ok(())
}

/// Drive the engine directly, one advance per iteration
fn direct_drive() -> Result<(), Box<dyn std::error::Error>> {
    println!("Direct drive: blinker on a 5x5 grid\n");

    let mut engine = GenerationEngine::new(5, 5)?;
    engine.set_cell(1, 2, true);
    engine.set_cell(2, 2, true);
    engine.set_cell(3, 2, true);

    for generation in 0..4 {
        println!("Generation {}:", generation);
        println!("{}", ReportFormatter::format_grid_compact(&engine.snapshot()));

        let delta = engine.advance();
        println!(
            "  {} birth(s), {} death(s)\n",
            delta.births.len(),
            delta.deaths.len()
        );
    }

    Ok(())
}

/// Drive a session the way an interactive host loop would: feed elapsed
/// time, let the ticker decide when a generation is due, and edit cells
/// between advances
fn paced_drive() -> Result<(), Box<dyn std::error::Error>> {
    println!("Paced drive: 10x10 session at 100ms per generation\n");

    let mut settings = Settings::default();
    settings.grid.width = 10;
    settings.grid.height = 10;
    settings.timing.tick_interval_ms = 100.0;

    let mut simulation = Simulation::new(&settings)?;

    // Pointer gestures seed a glider before the simulation starts
    for (x, y) in [(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)] {
        simulation.paint(x, y);
    }
    simulation.set_running(true);

    // Simulated host loop: 40ms frames, so the ticker fires every third frame
    let mut advances = 0;
    let mut frames = 0;
    while advances < 6 {
        frames += 1;
        if let Some(delta) = simulation.step(40.0) {
            let changed = delta.changed().count();
            advances += 1;
            println!(
                "Frame {:3}: generation {} ({} cell(s) changed)",
                frames, advances, changed
            );
        }
    }

    println!("\nFinal state after {} generations:", advances);
    println!(
        "{}",
        ReportFormatter::format_grid_compact(&simulation.engine().snapshot())
    );

    Ok(())
}

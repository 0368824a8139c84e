// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with:
//   RUST_LOG=numeric_stepper=debug cargo run --example basic_usage --features logging

use numeric_stepper::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Numeric Stepper Example ===\n");

    // Price input: 0.25 steps between 1 and 10
    let mut stepper = StepperController::new(
        StepperConfig::new()
            .with_default_value(5.0)
            .with_step(0.25)
            .with_bounds(1.0, 10.0)
            .with_reinitialize(true),
    );

    println!("Initial value: {}", stepper.value());

    println!("\nStepping...");
    stepper.increment();
    println!("  increment -> {}", stepper.value());
    stepper.decrement();
    stepper.decrement();
    println!("  decrement x2 -> {}", stepper.value());

    // Simulate the user typing, then leaving the field
    println!("\n=== Free-Text Edit ===");
    for typed in ["1", "12", "12."] {
        stepper.dispatch(Action::set_value(typed));
        println!("  typed {:?} -> {}", typed, stepper.value());
    }
    stepper.request_coerce();
    println!("  blur -> {}", stepper.value());

    // Home / End
    println!("\n=== Bound Jumps ===");
    stepper.set_to_min();
    println!("  min -> {}", stepper.value());
    stepper.set_to_max();
    println!("  max -> {}", stepper.value());

    // Raw actions arriving from an untyped source
    println!("\n=== Raw Actions ===");
    for kind in ["decrement", "reset"] {
        match stepper.dispatch_raw(kind, None) {
            Ok(changed) => println!("  {} -> {} (changed: {})", kind, stepper.value(), changed),
            Err(err) => println!("  {} -> error: {}", kind, err),
        }
    }

    // A new external default only applies while the value is untouched
    println!("\n=== Reinitialization ===");
    let mut untouched = StepperController::new(
        StepperConfig::new()
            .with_default_value(33.0)
            .with_reinitialize(true),
    );
    untouched.reconfigure(untouched.config().clone().with_default_value(42.0));
    println!("  untouched: 33 -> {}", untouched.value());

    let snapshot = stepper.snapshot();
    println!("\n=== Final Snapshot ===");
    println!("Value: {}", snapshot.value);
    println!("Numeric: {:?}", snapshot.numeric);
    println!("At min: {}, at max: {}", snapshot.at_min, snapshot.at_max);
    println!("Decimal: {:?}", stepper.to_decimal());
}

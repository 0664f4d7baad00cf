//! Demonstration of the dual-stream encoder
//!
//! Run with: cargo run --example encode_demo

use sas_certify_core::*;

fn main() {
    println!("=== SAS Certify Encoder Demo ===\n");

    // 1. Task model
    println!("1. Task:");
    let variables = VariableSet::primary(vec![2, 2]);
    let operators = vec![
        Operator::new("switch-on", vec![], vec![PrePost::simple(1, Some(0), 1)], 2),
        Operator::new(
            "move",
            vec![],
            vec![PrePost::new(0, Some(0), 1, condition([(1, 1)]))],
            1,
        ),
    ];
    let task = Task::new(
        variables,
        vec![],
        InitialState::new(vec![0, 0]),
        Goal::new(vec![Fact::new(0, 1)]),
        operators,
        vec![],
        true,
    );
    print!("{}", task);
    println!("   Valid: {}\n", task.validate().is_ok());

    // 2. Encoding
    println!("2. Encoding:");
    let encoder = Encoder::new(&task, EncoderConfig::default().with_validation(true));
    println!("   Cost register bits: {}", encoder.register().bits());

    let mut legacy = Vec::new();
    let mut certificate = Vec::new();
    match encoder.encode(&mut legacy, &mut certificate) {
        Ok(summary) => {
            println!("   Legacy lines: {}", summary.legacy_lines);
            println!("   Constraints: {}\n", summary.constraints);
        }
        Err(e) => {
            eprintln!("   Encoding failed: {}", e);
            return;
        }
    }

    // 3. Cost thresholds
    println!("3. Threshold flags for cost 2:");
    for comparator in ["=", ">=", "<=", "<"] {
        match comparator.parse::<CostRelation>() {
            Ok(relation) => println!("   delta {} 2: {}", relation, naming::cost_threshold(2, relation)),
            Err(e) => println!("   {}", e),
        }
    }
    println!();

    // 4. Streams
    println!("4. Legacy stream:");
    print!("{}", String::from_utf8_lossy(&legacy));
    println!("\n5. Certificate stream:");
    print!("{}", String::from_utf8_lossy(&certificate));

    println!("=== Demo Complete ===");
}

// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_arith::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    exact_arith::utils::init_logging("exact_arith=trace");

    println!("=== Decimal Arithmetic ===\n");

    let math = DecimalArithmetic::default();

    println!("0.1 + 0.2 (f64)     = {}", 0.1 + 0.2);
    println!("0.1 + 0.2 (decimal) = {}", math.add(0.1, 0.2).unwrap());

    // Thread results through a chain: (10 + 5) * 2 / 3
    let step1 = math.add(10, 5).unwrap();
    let step2 = math.multiply(step1, 2).unwrap();
    let result = math.divide(step2, 3).unwrap();
    println!("(10 + 5) * 2 / 3    = {}", result);

    println!("1 / 3               = {}", math.divide(1, 3).unwrap());
    println!(
        "compare(0.1000000001, 0.1) = {}",
        math.compare("0.1000000001", "0.1").unwrap() as i8
    );
    println!("equals(0, \"0.0\")    = {}", math.equals(0, "0.0").unwrap());

    match math.divide(10, "0.00") {
        Ok(value) => println!("10 / 0.00 = {}", value),
        Err(err) => println!("10 / 0.00 -> error: {}", err),
    }

    match math.add("ten", 1) {
        Ok(value) => println!("ten + 1 = {}", value),
        Err(err) => println!("ten + 1 -> error: {}", err),
    }

    println!("\n=== Configured Precision ===\n");

    let coarse = DecimalArithmeticBuilder::new()
        .precision(6)
        .round_half_even()
        .build()
        .unwrap();
    println!("1 / 7 @ 6 digits    = {}", coarse.divide(1, 7).unwrap());

    println!("\n=== Temporal Arithmetic ===\n");

    let time = TemporalArithmetic::default();

    let now = time.get_current_time();
    println!("Now:                {}", now);

    let in_an_hour = time.add_seconds(now, 3600).unwrap();
    println!("In an hour:         {}", in_an_hour);
    println!(
        "Difference:         {}s",
        time.difference_in_seconds(in_an_hour, now).unwrap()
    );

    println!(
        "From +05:30 offset: {}",
        time.get_as_iso_string("2024-01-01T08:30:00+05:30").unwrap()
    );
    println!(
        "Date only:          {}",
        time.get_as_iso_string("2024-01-01").unwrap()
    );

    let new_york = TemporalArithmeticBuilder::new()
        .default_offset_hours(-5)
        .build()
        .unwrap();
    println!(
        "Date only @ -05:00: {}",
        new_york.get_as_iso_string("2024-01-01").unwrap()
    );

    match time.minus_seconds("not a date", 30) {
        Ok(instant) => println!("Parsed: {}", instant),
        Err(err) => println!("Invalid input -> error: {}", err),
    }
}

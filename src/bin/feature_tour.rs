use safe_calc::core::rendezvous::run_two_phase;
use safe_calc::core::showcase::{
    calculate_value, calculate_value_runtime, create_greeting, log_message, multiply_by,
    DataProcessor, Person,
};
use safe_calc::utils::logger;
use safe_calc::{divide, format_result, ErrorCode, ErrorStyle, ResultFormatter};

const COMPILE_TIME_VALUE: i64 = calculate_value(5);

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false, None);

    match divide(10, 2) {
        Ok(quotient) => println!("10 / 2 = {}", quotient),
        Err(code) => println!("Unexpected error: {}", code),
    }

    match divide(10, 0) {
        Ok(quotient) => println!("Unexpected quotient: {}", quotient),
        Err(code) => {
            println!("Division by zero detected!");
            println!("{}", ResultFormatter::new(ErrorStyle::Code).format_error(code));
            if code == ErrorCode::InvalidArgument {
                println!("Error: Invalid argument");
            }
        }
    }

    println!("{}", format_result(42));
    println!("{}", create_greeting("Alice", 30));
    log_message("Testing language features");

    let double_it = multiply_by(2);
    println!("5 doubled: {}", double_it(5));

    println!("Compile-time value: {}", COMPILE_TIME_VALUE);
    println!("Runtime value: {}", calculate_value_runtime(5));

    let alice = Person::new("Alice", 30);
    let bob = Person::new("Bob", 25);
    if alice > bob {
        println!("{} is greater than {}", alice.name(), bob.name());
    } else {
        println!("{} is not greater than {}", alice.name(), bob.name());
    }

    let processor = DataProcessor::new();
    match processor.process_data("test data") {
        Ok(processed) => println!("{}", processed),
        Err(code) => println!("Processing failed: {}", code),
    }
    println!("{}", processor.processor_info());

    let report = run_two_phase(4)?;
    println!(
        "Barrier rendezvous: {} workers, synchronized = {}",
        report.workers,
        report.all_synchronized()
    );

    println!("All features demonstrated successfully!");
    Ok(())
}

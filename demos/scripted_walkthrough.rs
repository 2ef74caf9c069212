//! Scripted Walkthrough
//!
//! This example walks a two-gate trial from start to finish without any
//! user interaction.
//!
//! Key concepts:
//! - Declarative authoring with the step_sequence! macro
//! - Content audited once, at construction
//! - Gated advancement: only a matching answer moves past a challenge
//! - Clamped terminal step: advancing at the end is a no-op
//!
//! Run with: cargo run --example scripted_walkthrough

use passage::machine::StepMachine;
use passage::step_sequence;

fn main() {
    println!("=== Scripted Walkthrough ===\n");

    let sequence = step_sequence! {
        intro {
            title: "A Notice from Santa",
            body: "This year the workshop runs two-factor authentication.\nClear both gates to claim your gift.",
            button: "Begin the trial",
        }
        challenge {
            title: "First Authentication",
            body: "A tool carried by a certain muscular elf.",
            pass: "MUTSUMI",
        }
        challenge {
            title: "Second Authentication",
            body: "A small lake sealed beneath a ceiling.",
            pass: "SMALLLAKE",
        }
        final {
            title: "Final Authentication",
            body: "Your gift is hidden inside an empty story.\nFind it, and it is yours.",
        }
    }
    .unwrap();

    let mut machine = StepMachine::new(sequence);
    println!("Session {} started", machine.session_id());
    println!("Current step: {}\n", machine.current_step().title());

    machine.advance();
    println!("Advanced past the intro -> {}", machine.current_step().title());

    machine.submit_answer("wrong guess");
    println!(
        "Submitted a wrong answer -> still at {}, error: {:?}",
        machine.current_step().title(),
        machine.last_error()
    );

    machine.submit_answer(" mutsumi ");
    println!(
        "Submitted ' mutsumi ' -> {} (trim + upper-case match)",
        machine.current_step().title()
    );

    machine.submit_answer("SMALLLAKE");
    println!("Submitted 'SMALLLAKE' -> {}", machine.current_step().title());
    println!("Terminal step reached: {}", machine.is_final());

    machine.advance();
    println!("Advancing at the terminal step is a no-op\n");

    println!("Path walked: {:?}", machine.history().path());

    println!("\n=== Example Complete ===");
}

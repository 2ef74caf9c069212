//! Guided Session
//!
//! An interactive terminal session over the two-gate Santa trial. Type
//! an answer and press Enter at each gate; press Enter alone to advance
//! past the intro.
//!
//! The snowfall banner lives behind the Decoration seam, outside the
//! library and its tests.
//!
//! Run with: cargo run --example guided_session

use passage::machine::{StepMachine, SubmitOutcome};
use passage::render::{self, Decoration};
use passage::step_sequence;
use std::io::{self, BufRead, Write};

/// Cosmetic framing: a band of falling snow above and below the frame.
struct Snowfall;

impl Decoration for Snowfall {
    fn wrap(&self, frame: String) -> String {
        let band = ". * . ❄ . * . ❄ . * . ❄ . * . ❄ . * .";
        format!("{band}\n\n{frame}\n{band}\n")
    }
}

fn main() -> io::Result<()> {
    let sequence = step_sequence! {
        intro {
            title: "A Notice from Santa",
            body: "Merry Christmas!\n\nA present for a year of good behavior... or so I would say,\nbut with security awareness on the rise, we at the workshop\nnow run two-factor authentication.\n\nDon't worry! If you are really you, these gates are easy.\nJust a couple of questions. Good luck!\n\n  - Santa Claus, Workshop Branch Office",
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
            body: "This is the last task.\nYour gift is locked inside an empty story.\nFind it, and it is yours.",
        }
    }
    .expect("authored content is valid");

    let mut machine = StepMachine::new(sequence);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", render::present(&machine, &Snowfall));

        if machine.is_final() {
            break;
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        if machine.current_step().takes_input() {
            // The original form upper-cased as the user typed; do the
            // same with the buffered line.
            machine.set_pending_input(line.trim_end().to_uppercase());
            if machine.submit_pending() == SubmitOutcome::Accepted {
                println!("Gate cleared.\n");
            }
        } else {
            machine.advance();
        }
    }

    println!("Session {} complete.", machine.session_id());
    Ok(())
}

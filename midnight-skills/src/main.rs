use std::process::ExitCode;

use midnight_agent_skills::{run, Console, Context};
use midnight_skills_core::observability;

fn main() -> ExitCode {
    observability::init_tracing();

    let result = Context::from_process().and_then(|ctx| {
        let stdout = std::io::stdout();
        let mut console = Console::new(stdout.lock());
        run(std::env::args_os(), &ctx, &mut console)
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

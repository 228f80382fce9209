use std::process::ExitCode;

use pw_genie::{Palette, Session, TerminalConsole};

fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut session = Session::new(TerminalConsole::new(Palette::default()));
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pw-genie: {}", e);
            ExitCode::FAILURE
        }
    }
}

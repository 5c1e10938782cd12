use hot_trigger::Action;
use std::process::ExitCode;

fn main() -> ExitCode {
    hot_trigger::run(Action::Restart)
}

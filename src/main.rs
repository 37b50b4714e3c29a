//! rBirdlog main entrypoint.

use rbirdlog::run;
use rbirdlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

//! calorielog main entrypoint.

use calorielog::run;
use calorielog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

//! rTimelens main entrypoint.

use rtimelens::run;
use rtimelens::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

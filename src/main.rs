//! tracklet main entrypoint.

use tracklet::run;
use tracklet::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}

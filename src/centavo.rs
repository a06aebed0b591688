use std::env;
use std::process::exit;

use centavo::run_application;

fn main() {
    let args: Vec<String> = env::args().collect();
    if run_application(args).is_err() {
        exit(1);
    }
}

//! `fetchdemo sites` – list the fixed page list.

use fetchdemo_core::sites::DEMO_SITES;

pub fn run_sites() {
    for site in DEMO_SITES {
        println!("{}", site);
    }
}

//! Binary that replays every golden path through one noisy, padded session
//! and prints deterministic output lines for cross-process verification.
//!
//! Usage: `cursor_fixture`
//! Output: one `<start>=<trajectory digest>` line per start condition,
//! then `final_cursor=<u64>` and `request_counter=<u64>`.

use dining_harness::contract::SessionStore;
use dining_harness::runner::trajectory_digest;
use dining_kernel::state::symbol::Symbolic;
use dining_suggest::cursor::RngCursor;
use dining_suggest::policy::SessionConfig;
use lock_tests::golden::{full_runner, GOLDEN};

fn main() {
    let runner = full_runner();
    let config = SessionConfig {
        max_diagnosis_suggestions: 5,
        max_action_suggestions: 5,
        pad_suggestions: true,
        noise_level: 0.6,
        show_diagnosis_suggestions: true,
        show_action_suggestions: true,
    };
    runner
        .open_session("fixture", config, RngCursor::INITIAL)
        .expect("open session");

    for golden in GOLDEN {
        let responses = runner
            .replay("fixture", golden.start.state(), &golden.actions())
            .expect("replay");
        let digest = trajectory_digest(&responses).expect("digest");
        println!("{}={digest}", golden.start.symbol());
    }

    let record = runner.store().snapshot("fixture").expect("snapshot");
    println!("final_cursor={}", record.cursor.value());
    println!("request_counter={}", record.request_counter);
}

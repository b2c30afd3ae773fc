use std::thread;

use log::info;

use crate::error::Result;
use crate::ivp::Ivp;
use super::euler::solve;
use super::trajectory::Trajectory;

/// Solve independent problems on scoped threads, one thread per member.
///
/// Results come back in input order and match sequential [`solve`] exactly.
pub fn solve_ensemble<S: Ivp + Sync>(systems: &[S]) -> Vec<Result<Trajectory>> {
    let results: Vec<Result<Trajectory>> = thread::scope(|scope| {
        let handles: Vec<_> = systems
            .iter()
            .map(|sys| scope.spawn(move || solve(sys)))
            .collect();
        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    let ok = results.iter().filter(|r| r.is_ok()).count();
    info!("ensemble finished: {}/{} members solved", ok, systems.len());
    results
}

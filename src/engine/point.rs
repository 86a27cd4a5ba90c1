//! Point outcome model.
//!
//! One serve exchange resolved by at most three uniform draws:
//! first serve in, second serve in, rally winner. Break points skip the
//! serve model entirely and use the server's break-point save rate.

use crate::core::{PlayerId, PlayerStats, SimRng};
use crate::stats::{MatchObserver, ServeKind};

/// Dominance-weighted blend of server and returner strength.
///
/// `server_rate` is the server's win rate on this serve; `returner_loss_rate`
/// is how often the returner loses against it. Each is weighted by its
/// owner's dominance ratio: `(s*dS + r*dR) / (dS + dR)`.
#[must_use]
pub fn blended_win_probability(
    server_rate: f64,
    returner_loss_rate: f64,
    server_dominance: f64,
    returner_dominance: f64,
) -> f64 {
    (server_rate * server_dominance + returner_loss_rate * returner_dominance)
        / (server_dominance + returner_dominance)
}

/// Probability the server wins a rally that started with `kind`.
#[must_use]
pub fn rally_win_probability(server: &PlayerStats, returner: &PlayerStats, kind: ServeKind) -> f64 {
    let (server_rate, returner_rate) = match kind {
        ServeKind::First => (server.first_serve_win_pct, returner.vs_first_serve_win_pct),
        ServeKind::Second => (server.second_serve_win_pct, returner.vs_second_serve_win_pct),
    };
    blended_win_probability(
        server_rate,
        1.0 - returner_rate,
        server.dominance_ratio,
        returner.dominance_ratio,
    )
}

/// Resolve one point. Returns `true` if the server won it.
///
/// Never panics: out-of-range probabilities saturate and a NaN blend
/// (zero total dominance) hands the point to the returner.
pub fn resolve_point<O: MatchObserver + ?Sized>(
    rng: &mut SimRng,
    server_stats: &PlayerStats,
    returner_stats: &PlayerStats,
    is_break_point: bool,
    server: PlayerId,
    observer: &mut O,
) -> bool {
    let server_won = if is_break_point {
        let saved = rng.gen_bool(server_stats.break_point_save_pct);
        observer.break_point(server, saved);
        saved
    } else {
        serve_exchange(rng, server_stats, returner_stats, server, observer)
    };

    observer.point_played(server, server_won);
    server_won
}

fn serve_exchange<O: MatchObserver + ?Sized>(
    rng: &mut SimRng,
    server_stats: &PlayerStats,
    returner_stats: &PlayerStats,
    server: PlayerId,
    observer: &mut O,
) -> bool {
    let first_in = rng.gen_bool(server_stats.first_serve_in_pct);
    observer.first_serve(server, first_in);

    let kind = if first_in {
        ServeKind::First
    } else {
        let second_in = rng.gen_bool(server_stats.second_serve_in_pct());
        observer.second_serve(server, second_in);
        if !second_in {
            return false;
        }
        ServeKind::Second
    };

    let server_won = rng.gen_bool(rally_win_probability(server_stats, returner_stats, kind));
    observer.serve_point(server, kind, server_won);
    server_won
}

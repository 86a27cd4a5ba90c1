//! Observer hooks fired by the engine as points are resolved.

use crate::core::PlayerId;

/// Which serve started the rally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServeKind {
    First,
    Second,
}

/// Receives every granular event of a simulated match.
///
/// All methods default to no-ops, so an observer only overrides what it
/// cares about. Events are keyed by player identity; the returner is always
/// `server.opponent()`.
///
/// ## Implementation Notes
///
/// - `first_serve` fires once per non-break point
/// - `second_serve` fires only after a missed first serve; `landed == false`
///   is a double fault and ends the point
/// - `serve_point` fires for every rally that started with a serve in
/// - `break_point` replaces all serve events on a break point
/// - `point_played` fires after every point, tiebreaks included
pub trait MatchObserver {
    /// First serve attempted.
    fn first_serve(&mut self, _server: PlayerId, _landed: bool) {}

    /// Second serve attempted.
    fn second_serve(&mut self, _server: PlayerId, _landed: bool) {}

    /// Rally started by a serve that landed, and who won it.
    fn serve_point(&mut self, _server: PlayerId, _kind: ServeKind, _server_won: bool) {}

    /// Break point played.
    fn break_point(&mut self, _server: PlayerId, _saved: bool) {}

    /// Any point finished.
    fn point_played(&mut self, _server: PlayerId, _server_won: bool) {}
}

/// Observer that records nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {}

impl<O: MatchObserver + ?Sized> MatchObserver for &mut O {
    fn first_serve(&mut self, server: PlayerId, landed: bool) {
        (**self).first_serve(server, landed);
    }

    fn second_serve(&mut self, server: PlayerId, landed: bool) {
        (**self).second_serve(server, landed);
    }

    fn serve_point(&mut self, server: PlayerId, kind: ServeKind, server_won: bool) {
        (**self).serve_point(server, kind, server_won);
    }

    fn break_point(&mut self, server: PlayerId, saved: bool) {
        (**self).break_point(server, saved);
    }

    fn point_played(&mut self, server: PlayerId, server_won: bool) {
        (**self).point_played(server, server_won);
    }
}

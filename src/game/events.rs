/// A notification from the engine to its subscribers.
///
/// Fired synchronously at the point in the tick where the transition
/// happens, so subscribers observe events in transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A food item was eaten this tick
    FoodEaten { bonus: bool },
    /// A bonus food appeared on the grid
    BonusAppeared,
    /// The snake hit a wall or itself
    GameOver,
}

/// A subscriber to engine notifications (UI, audio cues, metrics).
///
/// Implementations hold no engine state; they are a pure notification
/// channel out of the core.
pub trait EventSink {
    fn notify(&mut self, event: GameEvent);
}

/// Forward events into any channel-like sender, keeping I/O out of the
/// core. Used by the app to drive audio cues.
impl<F: FnMut(GameEvent)> EventSink for F {
    fn notify(&mut self, event: GameEvent) {
        self(event);
    }
}

//! `AsyncResource<T>` — the transition function for one resource.

use super::{AsyncStatus, Generation, ResourceState};
use crate::shared::ErrorMessage;

/// Everything that can happen to a single resource.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceAction<T> {
    /// A request was issued.
    Started,
    /// The request tagged `generation` resolved.
    Succeeded { generation: Generation, payload: T },
    /// The request tagged `generation` was rejected.
    Failed {
        generation: Generation,
        error: ErrorMessage,
    },
    /// Back to the initial state, whatever the current one.
    Reset,
}

/// Result of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A new request is in flight under this generation.
    Started(Generation),
    /// A completion matched the in-flight generation and was applied.
    Applied,
    /// A completion did not match the in-flight generation and was dropped.
    Stale,
    Reset,
}

impl Transition {
    pub fn generation(&self) -> Option<Generation> {
        match self {
            Self::Started(generation) => Some(*generation),
            _ => None,
        }
    }
}

/// Owns one `ResourceState<T>` and defines its only legal transitions.
///
/// The app owns instances of this type (usually through a slice) and feeds it
/// actions; readers only ever see `&ResourceState<T>`.
#[derive(Debug, Clone)]
pub struct AsyncResource<T> {
    state: ResourceState<T>,
    last_generation: u64,
    /// Set exactly while `state.status == Loading`.
    in_flight: Option<Generation>,
}

impl<T> AsyncResource<T> {
    pub fn new() -> Self {
        Self {
            state: ResourceState::new(),
            last_generation: 0,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &ResourceState<T> {
        &self.state
    }

    pub fn status(&self) -> AsyncStatus {
        self.state.status
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorMessage> {
        self.state.error.as_ref()
    }

    /// Generation of the request currently in flight, if any.
    pub fn in_flight(&self) -> Option<Generation> {
        self.in_flight
    }

    /// Apply one action. This is the whole transition function.
    pub fn apply(&mut self, action: ResourceAction<T>) -> Transition {
        match action {
            ResourceAction::Started => Transition::Started(self.start()),
            ResourceAction::Succeeded {
                generation,
                payload,
            } => self.succeed(generation, payload),
            ResourceAction::Failed { generation, error } => self.fail(generation, error),
            ResourceAction::Reset => {
                self.reset();
                Transition::Reset
            }
        }
    }

    /// Move to `Loading`, keeping any previous data and clearing the error.
    ///
    /// Starting while already loading leaves the snapshot untouched but
    /// replaces the in-flight generation, so only the newest request can
    /// complete.
    pub fn start(&mut self) -> Generation {
        self.last_generation += 1;
        let generation = Generation(self.last_generation);

        if let Some(previous) = self.in_flight {
            tracing::debug!(
                previous = previous.value(),
                generation = generation.value(),
                "Superseding in-flight request"
            );
        }

        self.state.status = AsyncStatus::Loading;
        self.state.error = None;
        self.in_flight = Some(generation);
        generation
    }

    pub fn succeed(&mut self, generation: Generation, payload: T) -> Transition {
        if !self.finish_if_current(generation) {
            return Transition::Stale;
        }
        self.state.status = AsyncStatus::Succeeded;
        self.state.data = Some(payload);
        self.state.error = None;
        Transition::Applied
    }

    /// Move to `Failed`. Data from an earlier success is kept.
    pub fn fail(&mut self, generation: Generation, error: ErrorMessage) -> Transition {
        if !self.finish_if_current(generation) {
            return Transition::Stale;
        }
        self.state.status = AsyncStatus::Failed;
        self.state.error = Some(error);
        Transition::Applied
    }

    /// Back to `Idle` with no data and no error. Any in-flight request is
    /// forgotten; its completion will be dropped.
    pub fn reset(&mut self) {
        self.state = ResourceState::new();
        self.in_flight = None;
    }

    fn finish_if_current(&mut self, generation: Generation) -> bool {
        if self.in_flight == Some(generation) {
            self.in_flight = None;
            return true;
        }
        tracing::debug!(
            generation = generation.value(),
            in_flight = ?self.in_flight.map(|g| g.value()),
            "Dropping stale completion"
        );
        false
    }
}

impl<T> Default for AsyncResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(value: &str) -> AsyncResource<String> {
        let mut res = AsyncResource::new();
        let g = res.start();
        res.succeed(g, value.to_string());
        res
    }

    #[test]
    fn test_new_is_idle() {
        let res: AsyncResource<String> = AsyncResource::new();
        assert_eq!(res.status(), AsyncStatus::Idle);
        assert!(res.data().is_none());
        assert!(res.error().is_none());
        assert!(res.in_flight().is_none());
    }

    #[test]
    fn test_start_then_succeed() {
        let mut res = AsyncResource::new();
        let g = res.start();
        assert_eq!(res.status(), AsyncStatus::Loading);
        assert_eq!(res.in_flight(), Some(g));

        assert_eq!(res.succeed(g, "d".to_string()), Transition::Applied);
        assert_eq!(res.status(), AsyncStatus::Succeeded);
        assert_eq!(res.data().map(String::as_str), Some("d"));
        assert!(res.error().is_none());
        assert!(res.in_flight().is_none());
    }

    #[test]
    fn test_refresh_keeps_data_while_loading() {
        let mut res = loaded("d");
        res.start();
        assert_eq!(res.status(), AsyncStatus::Loading);
        assert_eq!(res.data().map(String::as_str), Some("d"));
        assert!(res.state().is_stale());
    }

    #[test]
    fn test_refresh_failure_keeps_stale_data() {
        let mut res = loaded("d");
        let g = res.start();
        res.fail(g, ErrorMessage::from("e"));
        assert_eq!(res.status(), AsyncStatus::Failed);
        assert_eq!(res.data().map(String::as_str), Some("d"));
        assert_eq!(res.error().map(ErrorMessage::as_str), Some("e"));
    }

    #[test]
    fn test_first_failure_has_no_data() {
        let mut res: AsyncResource<String> = AsyncResource::new();
        let g = res.start();
        res.fail(g, ErrorMessage::from("e"));
        assert_eq!(res.status(), AsyncStatus::Failed);
        assert!(res.data().is_none());
    }

    #[test]
    fn test_retry_clears_error() {
        let mut res: AsyncResource<String> = AsyncResource::new();
        let g = res.start();
        res.fail(g, ErrorMessage::from("e"));
        res.start();
        assert_eq!(res.status(), AsyncStatus::Loading);
        assert!(res.error().is_none());
    }

    #[test]
    fn test_superseded_completion_is_dropped() {
        let mut res = AsyncResource::new();
        let g1 = res.start();
        let g2 = res.start();
        assert!(g2 > g1);

        assert_eq!(res.succeed(g1, "old".to_string()), Transition::Stale);
        assert_eq!(res.status(), AsyncStatus::Loading);
        assert!(res.data().is_none());
        assert_eq!(res.in_flight(), Some(g2));

        assert_eq!(res.fail(g1, ErrorMessage::from("late")), Transition::Stale);
        assert_eq!(res.status(), AsyncStatus::Loading);

        assert_eq!(res.succeed(g2, "new".to_string()), Transition::Applied);
        assert_eq!(res.data().map(String::as_str), Some("new"));
    }

    #[test]
    fn test_completion_after_reset_is_dropped() {
        let mut res = AsyncResource::new();
        let g = res.start();
        res.reset();
        assert_eq!(res.succeed(g, "late".to_string()), Transition::Stale);
        assert_eq!(res.status(), AsyncStatus::Idle);
        assert!(res.data().is_none());
    }

    #[test]
    fn test_duplicate_completion_is_dropped() {
        let mut res = AsyncResource::new();
        let g = res.start();
        assert_eq!(res.succeed(g, "a".to_string()), Transition::Applied);
        assert_eq!(res.fail(g, ErrorMessage::from("b")), Transition::Stale);
        assert_eq!(res.status(), AsyncStatus::Succeeded);
        assert!(res.error().is_none());
    }

    #[test]
    fn test_generations_keep_increasing_across_reset() {
        let mut res: AsyncResource<String> = AsyncResource::new();
        let g1 = res.start();
        res.reset();
        let g2 = res.start();
        assert!(g2 > g1);
    }

    #[test]
    fn test_apply_routes_actions() {
        let mut res = AsyncResource::new();
        let transition = res.apply(ResourceAction::Started);
        let g = transition.generation().unwrap();
        assert_eq!(
            res.apply(ResourceAction::Succeeded {
                generation: g,
                payload: 3u8,
            }),
            Transition::Applied
        );
        assert_eq!(res.apply(ResourceAction::Reset), Transition::Reset);
        assert_eq!(res.state(), &ResourceState::new());
    }
}

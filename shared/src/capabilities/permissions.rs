use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::AcquireError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionKind {
    /// Foreground location, needed once per submission.
    Location,
    /// Photo library read access, needed once per pick.
    MediaLibrary,
}

/// The shell's answer after any system prompt has been dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    Granted,
    Denied,
    /// Blocked by parental controls or device policy.
    Restricted,
}

impl PermissionState {
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PermissionOperation {
    /// Returns the current grant, or shows the system dialog and returns the
    /// user's answer. Never fails.
    Request(PermissionKind),
}

impl Operation for PermissionOperation {
    type Output = PermissionState;
}

pub struct Permissions<E> {
    context: CapabilityContext<PermissionOperation, E>,
}

impl<Ev> Capability<Ev> for Permissions<Ev> {
    type Operation = PermissionOperation;
    type MappedSelf<MappedEv> = Permissions<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Permissions::new(self.context.map_event(f))
    }
}

impl<E> Permissions<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<PermissionOperation, E>) -> Self {
        Self { context }
    }

    pub fn request<F>(&self, kind: PermissionKind, callback: F)
    where
        F: FnOnce(PermissionState) -> E + Send + 'static,
    {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            let state = ctx
                .request_from_shell(PermissionOperation::Request(kind))
                .await;
            ctx.update_app(callback(state));
        });
    }
}

/// Maps anything other than a grant to the denial for `kind`.
pub fn require_granted(kind: PermissionKind, state: PermissionState) -> Result<(), AcquireError> {
    debug!(?kind, ?state, "permission answered");
    if state.is_granted() {
        return Ok(());
    }
    warn!(?kind, ?state, "permission not granted");
    Err(match kind {
        PermissionKind::Location => AcquireError::LocationPermissionDenied(state),
        PermissionKind::MediaLibrary => AcquireError::MediaPermissionDenied(state),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_granted_is_granted() {
        assert!(PermissionState::Granted.is_granted());
        assert!(!PermissionState::Denied.is_granted());
        assert!(!PermissionState::Restricted.is_granted());
    }

    #[test]
    fn test_denial_matches_kind() {
        assert_eq!(
            require_granted(PermissionKind::Location, PermissionState::Restricted),
            Err(AcquireError::LocationPermissionDenied(PermissionState::Restricted))
        );
        assert_eq!(
            require_granted(PermissionKind::MediaLibrary, PermissionState::Denied),
            Err(AcquireError::MediaPermissionDenied(PermissionState::Denied))
        );
        assert_eq!(
            require_granted(PermissionKind::MediaLibrary, PermissionState::Granted),
            Ok(())
        );
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&PermissionKind::MediaLibrary).unwrap(),
            "\"media_library\""
        );
        assert_eq!(
            serde_json::from_str::<PermissionState>("\"restricted\"").unwrap(),
            PermissionState::Restricted
        );
    }
}

//! Keeping event registrations in step with configuration.

use semifix_config::AutofixConfig;

use crate::events::TriggerKind;

/// The session's live event registrations, one slot per trigger kind.
///
/// `H` is whatever the editor integration uses as a registration handle
/// (an LSP registration id, a callback disposer, ...). A handle is created
/// when its trigger becomes enabled and dropped when it becomes disabled,
/// so handles whose `Drop` unregisters get torn down exactly when the
/// configuration says so. Dropping the whole `Subscriptions` tears down
/// everything.
#[derive(Debug)]
pub struct Subscriptions<H> {
    diagnostics: Option<H>,
    save: Option<H>,
}

impl<H> Subscriptions<H> {
    /// No registrations yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            diagnostics: None,
            save: None,
        }
    }

    /// Bring registrations in line with the configuration.
    ///
    /// `subscribe` is called once per trigger that is enabled but not yet
    /// registered; triggers that are disabled but still registered have
    /// their handle dropped. Already-correct slots are left alone, so
    /// repeated syncs with an unchanged configuration do nothing.
    pub fn sync(&mut self, config: &AutofixConfig, mut subscribe: impl FnMut(TriggerKind) -> H) {
        Self::sync_slot(
            &mut self.diagnostics,
            config.fix_on_error,
            TriggerKind::DiagnosticsChanged,
            &mut subscribe,
        );
        Self::sync_slot(
            &mut self.save,
            config.fix_on_save,
            TriggerKind::WillSave,
            &mut subscribe,
        );
    }

    fn sync_slot(
        slot: &mut Option<H>,
        wanted: bool,
        kind: TriggerKind,
        subscribe: &mut impl FnMut(TriggerKind) -> H,
    ) {
        match (wanted, slot.is_some()) {
            (true, false) => {
                tracing::debug!(trigger = %kind, "Subscribing");
                *slot = Some(subscribe(kind));
            }
            (false, true) => {
                tracing::debug!(trigger = %kind, "Dropping subscription");
                *slot = None;
            }
            _ => {}
        }
    }

    /// Returns `true` if the trigger currently has a live registration.
    #[must_use]
    pub const fn is_watching(&self, kind: TriggerKind) -> bool {
        match kind {
            TriggerKind::DiagnosticsChanged => self.diagnostics.is_some(),
            TriggerKind::WillSave => self.save.is_some(),
        }
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.diagnostics = None;
        self.save = None;
    }
}

impl<H> Default for Subscriptions<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_watches_diagnostics_only() {
        let mut subs = Subscriptions::new();
        subs.sync(&AutofixConfig::default(), |kind| kind);

        assert!(subs.is_watching(TriggerKind::DiagnosticsChanged));
        assert!(!subs.is_watching(TriggerKind::WillSave));
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut created = Vec::new();
        let mut subs = Subscriptions::new();
        let config = AutofixConfig::default();

        subs.sync(&config, |kind| created.push(kind));
        subs.sync(&config, |kind| created.push(kind));

        assert_eq!(created, vec![TriggerKind::DiagnosticsChanged]);
    }

    #[test]
    fn test_disabling_a_trigger_drops_its_handle() {
        let mut subs = Subscriptions::new();
        subs.sync(&AutofixConfig::default(), |kind| kind);
        assert!(subs.is_watching(TriggerKind::DiagnosticsChanged));

        let disabled = AutofixConfig {
            fix_on_error: false,
            ..AutofixConfig::default()
        };
        subs.sync(&disabled, |kind| kind);

        assert!(!subs.is_watching(TriggerKind::DiagnosticsChanged));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut subs = Subscriptions::new();
        let all = AutofixConfig {
            fix_on_error: true,
            fix_on_save: true,
            ..AutofixConfig::default()
        };
        subs.sync(&all, |kind| kind);
        assert!(subs.is_watching(TriggerKind::WillSave));

        subs.clear();
        assert!(!subs.is_watching(TriggerKind::DiagnosticsChanged));
        assert!(!subs.is_watching(TriggerKind::WillSave));
    }
}

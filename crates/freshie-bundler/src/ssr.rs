//! Server-side rendering activation.

/// Preset auto-loaded when SSR is requested without a configured runtime.
pub const SSR_PRESET: &str = "@freshie/ssr.node";

/// Runtime forced for development builds.
pub const DEV_RUNTIME: &str = "node";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SsrAction {
    /// Development build: always render with the node runtime
    ForceNode,
    /// Production build without a runtime: load [`SSR_PRESET`]
    AutoloadPreset,
    /// SSR not requested: clear any configured runtime
    Disable,
    /// Keep the configured runtime
    Keep,
}

/// Decide how to treat `ssr.type` given the request flags.
pub fn decide(requested: bool, is_prod: bool, kind: Option<&str>) -> SsrAction {
    match (requested, is_prod, kind) {
        (true, false, _) => SsrAction::ForceNode,
        (true, true, None) => SsrAction::AutoloadPreset,
        (false, _, _) => SsrAction::Disable,
        (true, true, Some(_)) => SsrAction::Keep,
    }
}

/// UI preset packages contribute the SSR-only UI alias
pub fn is_ui_package(name: &str) -> bool {
    name.contains("/ui.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_forces_node() {
        assert_eq!(decide(true, false, None), SsrAction::ForceNode);
        assert_eq!(decide(true, false, Some("worker")), SsrAction::ForceNode);
    }

    #[test]
    fn prod_without_runtime_autoloads() {
        assert_eq!(decide(true, true, None), SsrAction::AutoloadPreset);
        assert_eq!(decide(true, true, Some("worker")), SsrAction::Keep);
    }

    #[test]
    fn not_requested_disables() {
        assert_eq!(decide(false, true, Some("node")), SsrAction::Disable);
        assert_eq!(decide(false, false, None), SsrAction::Disable);
    }

    #[test]
    fn ui_packages() {
        assert!(is_ui_package("@freshie/ui.preact"));
        assert!(!is_ui_package("@freshie/ssr.node"));
        assert!(!is_ui_package("@freshie/uikit"));
    }
}

//! UI models and metadata that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! scenario inventory and the entry-id → module mapping on the host.

/// Every interactive demo widget the site knows how to mount.
///
/// The entry-id → widget mapping goes through this sum type on purpose: an
/// unknown widget is a compile error here, not a silent blank panel at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoWidget {
    FileUpload,
    SystemStatus,
    Stepper,
    LoadingFeedback,
    AutoSave,
    ChoiceOverload,
    TargetSizing,
}

impl DemoWidget {
    pub fn label(self) -> &'static str {
        match self {
            DemoWidget::FileUpload => "File Upload",
            DemoWidget::SystemStatus => "System Status",
            DemoWidget::Stepper => "Stepper",
            DemoWidget::LoadingFeedback => "Loading",
            DemoWidget::AutoSave => "Auto-save",
            DemoWidget::ChoiceOverload => "Choice Overload",
            DemoWidget::TargetSizing => "Target Sizing",
        }
    }

    pub fn all() -> &'static [DemoWidget] {
        &[
            DemoWidget::FileUpload,
            DemoWidget::SystemStatus,
            DemoWidget::Stepper,
            DemoWidget::LoadingFeedback,
            DemoWidget::AutoSave,
            DemoWidget::ChoiceOverload,
            DemoWidget::TargetSizing,
        ]
    }
}

/// One tab-selectable scenario inside a module: a demo widget plus the
/// explanatory metadata the side panel shows while it is active.
///
/// `id` is unique within its owning module only. `widget: None` renders a
/// "coming soon" placeholder instead of a demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub widget: Option<DemoWidget>,
    pub description: &'static str,
    pub why_it_matters: &'static str,
}

static VISIBILITY_MODULE: [ScenarioDescriptor; 5] = [
    ScenarioDescriptor {
        id: "file-upload",
        label: "File Upload",
        icon: "📤",
        widget: Some(DemoWidget::FileUpload),
        description: "Compare an upload that freezes silently with one that reports its progress as it happens.",
        why_it_matters: "A visible percentage turns an anxious wait into a predictable one — users can tell a slow upload from a dead one.",
    },
    ScenarioDescriptor {
        id: "system-status",
        label: "System Status",
        icon: "📡",
        widget: Some(DemoWidget::SystemStatus),
        description: "Connection and sync state surfaced as always-visible indicators instead of buried in a settings page.",
        why_it_matters: "When state is ambient, users stop wondering whether their work is safe and act on facts instead of guesses.",
    },
    ScenarioDescriptor {
        id: "stepper",
        label: "Stepper",
        icon: "🔢",
        widget: Some(DemoWidget::Stepper),
        description: "A quantity stepper that reflects every press immediately, with its limits visible.",
        why_it_matters: "Immediate, visible value changes confirm each press was registered, so nobody double-taps their way to the wrong quantity.",
    },
    ScenarioDescriptor {
        id: "loading",
        label: "Loading",
        icon: "⏳",
        widget: Some(DemoWidget::LoadingFeedback),
        description: "The same load, announced three ways: nothing, a spinner, and a content-shaped skeleton.",
        why_it_matters: "Loading feedback shaped like the incoming content sets expectations about what is coming and how long it will take.",
    },
    ScenarioDescriptor {
        id: "auto-save",
        label: "Auto-save",
        icon: "💾",
        widget: Some(DemoWidget::AutoSave),
        description: "An editor that announces the moment it is saving and the fact that it has saved.",
        why_it_matters: "An explicit saved state removes the single most common fear in any editor: did my work survive?",
    },
];

static MATCH_MODULE: [ScenarioDescriptor; 2] = [
    ScenarioDescriptor {
        id: "stepper-metaphor",
        label: "Familiar Controls",
        icon: "🎛️",
        widget: Some(DemoWidget::Stepper),
        description: "A plus/minus stepper borrowed straight from physical counters and thermostats.",
        why_it_matters: "Controls that mirror physical devices need no explanation — the real world already trained every user.",
    },
    ScenarioDescriptor {
        id: "voice-commands",
        label: "Voice Commands",
        icon: "🎙️",
        widget: None,
        description: "Speaking to the interface in everyday language rather than command syntax.",
        why_it_matters: "Natural-language input is the ultimate real-world match: the system learns the user's language instead of the reverse.",
    },
];

static HICKS_MODULE: [ScenarioDescriptor; 1] = [ScenarioDescriptor {
    id: "choice-overload",
    label: "Choice Overload",
    icon: "🗂️",
    widget: Some(DemoWidget::ChoiceOverload),
    description: "Grow the number of options and feel your own decision time stretch with it.",
    why_it_matters: "Decision time rises with every added option — trimming and grouping choices is a speed optimization users can feel.",
}];

static FITTS_MODULE: [ScenarioDescriptor; 1] = [ScenarioDescriptor {
    id: "target-sizing",
    label: "Target Sizing",
    icon: "🎯",
    widget: Some(DemoWidget::TargetSizing),
    description: "Shrink a button and watch your own miss rate climb.",
    why_it_matters: "Acquisition time grows as targets shrink or recede — generous targets make an interface feel precise.",
}];

/// Static entry-id → module mapping.
///
/// Kept separate from the content records so content data stays decoupled
/// from presentation code. Entries without a module fall back to their static
/// digital example.
pub fn module_for(entry_id: &str) -> Option<&'static [ScenarioDescriptor]> {
    match entry_id {
        "visibility-of-system-status" => Some(&VISIBILITY_MODULE),
        "match-between-system-and-real-world" => Some(&MATCH_MODULE),
        "hicks-law" => Some(&HICKS_MODULE),
        "fitts-law" => Some(&FITTS_MODULE),
        _ => None,
    }
}

/// Ids of every entry that has a registered module, for validation.
pub fn mapped_entry_ids() -> &'static [&'static str] {
    &[
        "visibility-of-system-status",
        "match-between-system-and-real-world",
        "hicks-law",
        "fitts-law",
    ]
}

/// Detail-pane display mode. Local to the pane and reset to digital on every
/// navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Digital,
    RealWorld,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Digital => "Digital",
            ViewMode::RealWorld => "Real World",
        }
    }

    pub fn all() -> &'static [ViewMode] {
        &[ViewMode::Digital, ViewMode::RealWorld]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_inventory_is_stable() {
        let all = DemoWidget::all();
        assert_eq!(all.len(), 7);

        let mut labels: Vec<&'static str> = all.iter().copied().map(DemoWidget::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 7);

        for w in all {
            assert!(!w.label().trim().is_empty());
        }
    }

    #[test]
    fn every_mapped_entry_id_exists_in_a_registry() {
        let heuristics = uxlab_content::heuristics();
        let laws = uxlab_content::laws();
        for id in mapped_entry_ids() {
            assert!(
                heuristics.get(id).is_some() || laws.get(id).is_some(),
                "module mapped to unknown entry id `{id}`"
            );
            assert!(module_for(id).is_some());
        }
    }

    #[test]
    fn module_descriptor_ids_are_unique_and_nonempty() {
        for id in mapped_entry_ids() {
            let module = module_for(id).unwrap();
            assert!(!module.is_empty());
            let mut seen: Vec<&str> = Vec::new();
            for d in module {
                assert!(!d.id.trim().is_empty());
                assert!(!d.label.trim().is_empty());
                assert!(!d.icon.trim().is_empty());
                assert!(!d.description.trim().is_empty());
                assert!(!d.why_it_matters.trim().is_empty());
                assert!(!seen.contains(&d.id), "duplicate scenario id `{}` in `{id}`", d.id);
                seen.push(d.id);
            }
        }
    }

    #[test]
    fn visibility_module_matches_its_published_tabs() {
        let module = module_for("visibility-of-system-status").unwrap();
        let labels: Vec<&str> = module.iter().map(|d| d.label).collect();
        assert_eq!(
            labels,
            ["File Upload", "System Status", "Stepper", "Loading", "Auto-save"]
        );
        // The third tab carries its own explanation, distinct from the
        // entry-level text the side panel falls back to.
        let stepper = &module[2];
        assert_eq!(stepper.label, "Stepper");
        let entry_level = uxlab_content::heuristics();
        let entry = entry_level.get("visibility-of-system-status").unwrap();
        assert_ne!(stepper.why_it_matters, entry.digital_example.why_it_matters);
        assert_ne!(stepper.why_it_matters, entry.why_it_matters);
    }

    #[test]
    fn unmapped_entries_fall_back_to_static_content() {
        assert!(module_for("error-prevention").is_none());
        assert!(module_for("definitely-not-an-entry").is_none());
    }

    #[test]
    fn view_mode_defaults_to_digital() {
        assert_eq!(ViewMode::default(), ViewMode::Digital);
        assert_eq!(ViewMode::all().len(), 2);
    }

    #[test]
    fn theme_toggle_round_trips() {
        let t = Theme::default();
        assert_eq!(t.toggle().toggle(), t);
        assert_ne!(Theme::Light.css_class(), Theme::Dark.css_class());
    }
}

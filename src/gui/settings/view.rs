//! Page layout for the settings view
//!
//! The layout is a pure function of the `loading` flag. While loading, both
//! annotated sections hold skeleton placeholders and no editable fields; once
//! loaded, the same sections hold the controls. The egui panel only walks the
//! layout this module returns.

pub const PAGE_TITLE: &str = "Settings";

pub const AUTO_PUBLISH_TITLE: &str = "Auto publish";
pub const AUTO_PUBLISH_DESCRIPTION: &str =
    "Automatically check new reviews for spam and then publish them.";

pub const EMAIL_TITLE: &str = "Email settings";
pub const EMAIL_DESCRIPTION: &str =
    "Choose if you want to receive email notifications for each review.";

/// Boolean fields, edited with a checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    AutoPublish,
    EmailNotifications,
}

/// Text fields, edited with a single-line input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Email,
}

/// An editable control inside a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Checkbox {
        toggle: Toggle,
        label: &'static str,
        help: &'static str,
    },
    TextInput {
        input: TextField,
        label: &'static str,
        hint: &'static str,
    },
}

/// Placeholder block: one heading bar above a few body lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skeleton {
    pub display_lines: usize,
    pub body_lines: usize,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self {
            display_lines: 1,
            body_lines: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Skeleton(Skeleton),
    Controls(Vec<Control>),
}

/// Titled section with a description column beside its card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub description: &'static str,
    pub body: SectionBody,
}

impl Section {
    pub fn is_skeleton(&self) -> bool {
        matches!(self.body, SectionBody::Skeleton(_))
    }

    pub fn controls(&self) -> &[Control] {
        match &self.body {
            SectionBody::Controls(controls) => controls,
            SectionBody::Skeleton(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub title: &'static str,
    pub sections: Vec<Section>,
}

impl PageLayout {
    pub fn skeleton_count(&self) -> usize {
        self.sections.iter().filter(|s| s.is_skeleton()).count()
    }

    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.controls().len()).sum()
    }
}

/// Build the page for the given loading state
pub fn page_layout(loading: bool) -> PageLayout {
    let (auto_publish, email) = if loading {
        (
            SectionBody::Skeleton(Skeleton::default()),
            SectionBody::Skeleton(Skeleton::default()),
        )
    } else {
        (
            SectionBody::Controls(vec![Control::Checkbox {
                toggle: Toggle::AutoPublish,
                label: "Auto publish reviews",
                help: "(spam is filtered before publishing)",
            }]),
            SectionBody::Controls(vec![
                Control::Checkbox {
                    toggle: Toggle::EmailNotifications,
                    label: "Email notifications",
                    help: "(one email per new review)",
                },
                Control::TextInput {
                    input: TextField::Email,
                    label: "Notification email:",
                    hint: "name@example.com",
                },
            ]),
        )
    };

    PageLayout {
        title: PAGE_TITLE,
        sections: vec![
            Section {
                title: AUTO_PUBLISH_TITLE,
                description: AUTO_PUBLISH_DESCRIPTION,
                body: auto_publish,
            },
            Section {
                title: EMAIL_TITLE,
                description: EMAIL_DESCRIPTION,
                body: email,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_renders_two_skeletons_and_no_fields() {
        let layout = page_layout(true);

        assert_eq!(layout.sections.len(), 2);
        assert_eq!(layout.skeleton_count(), 2);
        assert_eq!(layout.field_count(), 0);
    }

    #[test]
    fn test_loaded_renders_forms_without_skeletons() {
        let layout = page_layout(false);

        assert_eq!(layout.sections.len(), 2);
        assert_eq!(layout.skeleton_count(), 0);
        assert_eq!(layout.field_count(), 3);
    }

    #[test]
    fn test_sections_keep_titles_in_both_states() {
        for loading in [true, false] {
            let titles: Vec<_> = page_layout(loading)
                .sections
                .iter()
                .map(|s| s.title)
                .collect();
            assert_eq!(titles, vec!["Auto publish", "Email settings"]);
        }
    }

    #[test]
    fn test_every_field_has_exactly_one_control() {
        let layout = page_layout(false);
        let controls: Vec<&Control> = layout
            .sections
            .iter()
            .flat_map(|s| s.controls())
            .collect();

        assert_eq!(controls.len(), 3);
        assert!(matches!(
            controls[0],
            Control::Checkbox {
                toggle: Toggle::AutoPublish,
                ..
            }
        ));
        assert!(matches!(
            controls[1],
            Control::Checkbox {
                toggle: Toggle::EmailNotifications,
                ..
            }
        ));
        assert!(matches!(
            controls[2],
            Control::TextInput {
                input: TextField::Email,
                ..
            }
        ));
    }
}

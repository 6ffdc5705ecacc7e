// solovetsky/annotations.rs
//
// Game-state annotations appended to the base prompt. Rules are evaluated
// and appended in table order.

use crate::config::{ConfigSource, render};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Note {
    /// Fixed text, the flag value is not shown.
    Static(&'static str),
    /// `prefix`, the rendered value, then `suffix`.
    Value {
        prefix: &'static str,
        suffix: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationRule {
    pub key: &'static str,
    /// The rule stays silent when this key is set.
    pub unless: Option<&'static str>,
    pub note: Note,
}

const fn value(key: &'static str, prefix: &'static str, suffix: &'static str) -> AnnotationRule {
    AnnotationRule {
        key,
        unless: None,
        note: Note::Value { prefix, suffix },
    }
}

const fn fixed(key: &'static str, text: &'static str) -> AnnotationRule {
    AnnotationRule {
        key,
        unless: None,
        note: Note::Static(text),
    }
}

pub const ANNOTATION_RULES: &[AnnotationRule] = &[
    // region:  --- Voyage
    value("current_expedition", "CURRENT EXPEDITION: ", ""),
    value("current_location", "CURRENT LOCATION: ", ""),
    // endregion:  --- Voyage

    // region:  --- Ship status
    value(
        "hull_damage",
        "ALERT: Hull has sustained damage. Current integrity: ",
        "%",
    ),
    fixed(
        "low_fuel",
        "WARNING: Fuel reserves below recommended levels for FTL travel.",
    ),
    // endregion:  --- Ship status

    // region:  --- Crew
    value("crew_casualties", "CREW STATUS UPDATE: ", ""),
    fixed(
        "crew_on_surface",
        "NOTE: Shore party currently deployed to planetary surface. Monitoring PDT signals.",
    ),
    // endregion:  --- Crew

    // region:  --- Discoveries
    fixed(
        "perfected_encountered",
        "THREAT DATABASE UPDATED: Perfected/Fulfremmen bio-mechanical organisms confirmed hostile. Exercise extreme caution.",
    ),
    fixed(
        "engineer_artifacts",
        "ARTIFACT ANALYSIS: Engineer artifacts in storage. Decoding in progress.",
    ),
    fixed(
        "lychgate_coordinates",
        "NAVIGATION UPDATE: Lychgate coordinates decoded and available.",
    ),
    // endregion:  --- Discoveries

    // region:  --- Politics
    fixed(
        "upp_tensions",
        "INTERNAL NOTE: Elevated tensions detected between UPP and UA personnel. Monitor situation.",
    ),
    fixed(
        "napro_incident",
        "SECURITY ALERT: New Albion Protectorate sympathizers identified among crew.",
    ),
    // endregion:  --- Politics

    fixed(
        "iyanlá_contact_lost",
        "COMMUNICATION ALERT: FTL link to MU/TH/UR 9000 on UNCSS Iyanlá currently unavailable.",
    ),
    fixed(
        "quarantine_active",
        "QUARANTINE PROTOCOL ACTIVE: ICC Inspector Blatchman has ordered quarantine procedures. All specimens must be secured.",
    ),

    // region:  --- The Cooperative
    fixed(
        "cooperative_hostile",
        "THREAT STATUS: The Cooperative has been designated hostile. Warlord Zhangjie's forces may attempt interdiction.",
    ),
    AnnotationRule {
        key: "cooperative_allied",
        unless: Some("cooperative_hostile"),
        note: Note::Static(
            "DIPLOMATIC STATUS: The Cooperative has agreed to limited cooperation. Maintain caution.",
        ),
    },
    // endregion:  --- The Cooperative

    fixed(
        "marauders_contact",
        "CONTACT: Gorham's Marauders identified. Captain J.V. Gorham III may be willing to share intelligence on Perfected movements.",
    ),
    // Free text from the game master, always last. Non-string values are
    // rendered through `config::render` rather than rejected.
    value("misc_prompt_addendums", "", ""),
];

impl AnnotationRule {
    /// The line this rule contributes under `config`, if it is active.
    pub fn annotate(&self, config: &dyn ConfigSource) -> Option<String> {
        if self.unless.is_some_and(|key| config.is_set(key)) {
            return None;
        }
        if !config.is_set(self.key) {
            return None;
        }
        match self.note {
            Note::Static(text) => Some(text.to_string()),
            Note::Value { prefix, suffix } => {
                let value = config.get(self.key)?;
                Some(format!("{prefix}{}{suffix}", render(&value)))
            }
        }
    }
}

/// Lines for every active rule, in table order.
pub fn annotations(config: &dyn ConfigSource) -> Vec<String> {
    ANNOTATION_RULES
        .iter()
        .filter_map(|rule| rule.annotate(config))
        .collect()
}

/// `prompt` followed by one `\n`-prefixed line per active annotation.
pub fn augment(prompt: String, config: &dyn ConfigSource) -> String {
    annotations(config)
        .into_iter()
        .fold(prompt, |mut prompt, line| {
            prompt.push('\n');
            prompt.push_str(&line);
            prompt
        })
}

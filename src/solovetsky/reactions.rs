// solovetsky/reactions.rs

use crate::terminal::Terminal;

/// One step of a reaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    Sound(&'static str),
    Wait(f64),
}

/// A sequence of cues fired when `trigger` shows up in a reply.
#[derive(Debug)]
pub struct Reaction {
    pub name: &'static str,
    pub trigger: &'static str, // Upper case; replies are upper-cased before matching.
    pub cues: &'static [Cue],
}

pub const PRIORITY_ALERT: Reaction = Reaction {
    name: "priority alert",
    trigger: "PRIORITY ALERT",
    cues: &[
        Cue::Sound("beep"),
        Cue::Wait(0.5),
        Cue::Sound("beep"),
        Cue::Wait(0.5),
    ],
};

pub const DISTRESS_SIGNAL: Reaction = Reaction {
    name: "distress signal",
    trigger: "DISTRESS SIGNAL",
    cues: &[
        Cue::Sound("beep"),
        Cue::Wait(0.3),
        Cue::Sound("beep"),
        Cue::Wait(0.3),
        Cue::Sound("beep"),
    ],
};

// Checked in this order; any number may fire for one reply.
pub const REACTIONS: &[Reaction] = &[PRIORITY_ALERT, DISTRESS_SIGNAL];

impl Reaction {
    pub fn matches(&self, upper_reply: &str) -> bool {
        upper_reply.contains(self.trigger)
    }

    // A failed sound is logged; the remaining cues still play.
    pub fn play(&self, terminal: &mut dyn Terminal) {
        for cue in self.cues {
            match *cue {
                Cue::Sound(name) => {
                    if let Err(e) = terminal.play_sound(name) {
                        log::error!("Failed to play {name} for {}: {e:#?}", self.name);
                    }
                }
                Cue::Wait(seconds) => terminal.wait(seconds),
            }
        }
    }
}

/// Reactions whose trigger appears in `reply`, in table order.
pub fn triggered(reply: &str) -> impl Iterator<Item = &'static Reaction> {
    let upper = reply.to_uppercase();
    REACTIONS.iter().filter(move |reaction| reaction.matches(&upper))
}

// solovetsky/replies.rs
//
// Canned replies for debug sessions. The first matching entry wins, so the
// generic colony query sits ahead of the named colonies on purpose.

/// How an entry matches a lower-cased inquiry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Keywords {
    Any(&'static [&'static str]),
    All(&'static [&'static str]),
}

impl Keywords {
    pub fn matches(&self, lower_input: &str) -> bool {
        match self {
            Keywords::Any(words) => words.iter().any(|w| lower_input.contains(w)),
            Keywords::All(words) => words.iter().all(|w| lower_input.contains(w)),
        }
    }
}

#[derive(Debug)]
pub struct CannedReply {
    pub keywords: Keywords,
    pub reply: &'static str,
}

pub const CANNED_REPLIES: &[CannedReply] = &[
    CannedReply {
        keywords: Keywords::Any(&["status"]),
        reply: SHIP_STATUS,
    },
    CannedReply {
        keywords: Keywords::Any(&["map", "deck"]),
        reply: DECK_SCHEMATICS,
    },
    CannedReply {
        keywords: Keywords::Any(&["crew"]),
        reply: CREW_ROSTER,
    },
    CannedReply {
        keywords: Keywords::Any(&["mission"]),
        reply: MISSION_BRIEFING,
    },
    CannedReply {
        keywords: Keywords::Any(&["colony", "colonies", "survey", "planet"]),
        reply: COLONY_DATABASE,
    },
    CannedReply {
        keywords: Keywords::Any(&["gorham"]),
        reply: GORHAM_COLONY,
    },
    CannedReply {
        keywords: Keywords::Any(&["dylan"]),
        reply: DYLAN_COLONY,
    },
    CannedReply {
        keywords: Keywords::All(&["may", "outpost"]),
        reply: MAY_OUTPOST,
    },
    CannedReply {
        keywords: Keywords::Any(&["pelican"]),
        reply: PELICAN_COLONY,
    },
    CannedReply {
        keywords: Keywords::Any(&["help"]),
        reply: COMMAND_HELP,
    },
];

/// The canned reply for `user_input`, or `None` when nothing matches.
pub fn lookup(user_input: &str) -> Option<&'static str> {
    let lower_input = user_input.to_lowercase();
    CANNED_REPLIES
        .iter()
        .find(|entry| entry.keywords.matches(&lower_input))
        .map(|entry| entry.reply)
}

// region:  --- Ship

pub const SHIP_STATUS: &str = "SHIP STATUS REPORT - UNCSS SOLOVETSKY ISLAND
LOCATION: In orbit, Far Spinward Colonies
HULL INTEGRITY: 100%
LIFE SUPPORT: Nominal
POWER SYSTEMS: Nominal
NAVIGATION: Online
FTL DRIVE: Ready
COMMUNICATIONS: FTL link to Iyanlá active
CREW: All PDT signals nominal
CARGO: Humanitarian supplies secured
VEHICLE BAY: All vehicles stowed";

pub const DECK_SCHEMATICS: &str = "DECK SCHEMATICS AVAILABLE:
Deck A - Command and Crew: <IMG:SOLOVETSKY_DECK_A>
Deck B - Cargo and Maintenance: <IMG:SOLOVETSKY_DECK_B>
Deck C - Vehicle Bay: <IMG:SOLOVETSKY_DECK_C>
Please specify which deck schematic you require.";

pub const CREW_ROSTER: &str = "CREW ROSTER - UNCSS SOLOVETSKY ISLAND:
- Pilot: Andi 'Dudge' Dudgeon
- Counselor: Lakota Monroe
- Prospector: Emily Quintana
- Security: Hamidah Amir
- Mechanic: Davor Koblenz
- ICC Inspector: Tan Blatchman
- Working Joes: James, Miss Sophie
All PDT signals within normal parameters.";

pub const MISSION_BRIEFING: &str = "GREAT MOTHER MISSION BRIEFING:
Objective: Reconnect with Far Spinward Colonies
lost during the Isolation 75 years ago.
Primary directives:
1. Establish contact and provide humanitarian support
2. Survey sector for new colony sites
3. Recover colonial Long Data Discs
4. Report findings to UNCSS Iyanlá
Current assignment: Awaiting orders from Gaius.";

pub const COMMAND_HELP: &str = "DA/UT/UR 2200 COMMAND INTERFACE
Available queries:
- STATUS: Ship systems report
- CREW: Crew roster and PDT status
- MAP/DECK: Ship schematics
- MISSION: Current mission briefing
- NAVIGATION: Course and location data
- COMMUNICATIONS: Contact Iyanlá
For specific systems, state your inquiry.";

// endregion:  --- Ship

// region:  --- Colonies

pub const COLONY_DATABASE: &str = "FAR SPINWARD COLONIES - SURVEY TARGET DATABASE
═══════════════════════════════════════════════════════

PRIORITY TARGETS (5 colonies with confirmed survivors):
1. GORHAM COLONY (KOI-2650.01) - Mining world, minimal survivors
2. DYLAN COLONY (KOI-784.01) - Jungle world, societal breakdown
3. MAY OUTPOST (KOI-610.01) - Cooperative territory, Engineer pyramid
4. PELICAN COLONY (KOI-947.01) - Irradiated, crashed alien vessel
5. SANCHEZ COLONY (KOI-1938) - DESTROYED, nuclear wasteland

COMPROMISED (Proto-Hive threat - DO NOT LAND):
6. KARETI COLONY (KOI-723.01) - Perfected controlled
7. JULY COLONY (KOI-1739.01) - Perfected controlled
8. CAPELLI COLONY (KOI-2290.01) - Perfected controlled

SECONDARY TARGETS (10 colonies, status unknown):
Curzic, Platte, Brahms, Blue Jay, Archimedes,
Ute, Nightingale, January, October, Izvinite

Request detailed briefing on specific colony?";

pub const GORHAM_COLONY: &str = "COLONY BRIEFING: GORHAM COLONY
═══════════════════════════════════════════════════════
DESIGNATION: KOI-2650.01
EXPEDITION CODE: HOME SWEET HOME

ENVIRONMENT: Arid, dust-swept mining world
PRE-ISOLATION: Population ~1 million (2100 census)
CURRENT INTEL: Single settlement surviving, minimal population

HAZARDS:
- Extreme dust storms
- Harsh environmental conditions
- Potential territorial disputes among survivors

MISSION PRIORITY: Humanitarian assessment, survivor contact
RECOMMENDATION: Environmental protection gear required";

pub const DYLAN_COLONY: &str = "COLONY BRIEFING: DYLAN COLONY
═══════════════════════════════════════════════════════
DESIGNATION: KOI-784.01
EXPEDITION CODE: TO GO MY OWN DARK WAY

ENVIRONMENT: Humid, extreme temperatures, tropical jungles
PRE-ISOLATION: Mining colony with extensive cave systems
CURRENT INTEL: Small community persists, reports of barbarism

HAZARDS:
- Hostile fauna
- Extreme heat
- Potentially hostile survivor groups

WARNING: Unconfirmed external ship activity in sector
MISSION PRIORITY: Survivor assessment, cave system survey
RECOMMENDATION: Full expedition kit, security escort";

pub const MAY_OUTPOST: &str = "COLONY BRIEFING: MAY OUTPOST
═══════════════════════════════════════════════════════
DESIGNATION: KOI-610.01
EXPEDITION CODE: THE DEVIL LIVES IN STILL WATERS

ENVIRONMENT: Temperate world, former 3WE military base
PRE-ISOLATION: Royal Marine base, later CANC refugees
CURRENT INTEL: Several thousand survivors under 'Cooperative'

FACTION: Warlord Zhangjie controls - APPROACH WITH CAUTION
POINT OF INTEREST: Engineer pyramid exposed by seismic activity

HAZARDS:
- Political instability
- Potential military confrontation
- Unknown alien structure

WARNING: UPP activity suspected in sector
RECOMMENDATION: Diplomatic personnel, avoid provocation";

pub const PELICAN_COLONY: &str = "COLONY BRIEFING: PELICAN COLONY
═══════════════════════════════════════════════════════
DESIGNATION: KOI-947.01
EXPEDITION CODE: LET SLEEPING GODS LIE

ENVIRONMENT: Irradiated wasteland (formerly agricultural)
PRE-ISOLATION: Major agricultural colony, 'breadbasket'
CURRENT INTEL: Surface scoured by radiation, survival unlikely

POINT OF INTEREST: Crashed vessel - possible Engineer Guardian ship

HAZARDS:
- EXTREME radiation exposure
- Possible automated defense systems
- Unidentified vessels in system

RECOMMENDATION: Full radiation protection MANDATORY
Military escort strongly advised";

// endregion:  --- Colonies

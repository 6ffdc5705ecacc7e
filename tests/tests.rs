// ../tests/tests.rs
use serde_json::{Value, json};
use daututur::assets::{AssetKey, install_bundled};
use daututur::solovetsky::annotations::ANNOTATION_RULES;
use daututur::solovetsky::intro::{BANNER, PROGRESS_LABELS, READY_MESSAGE};
use daututur::solovetsky::replies::{
    COLONY_DATABASE, CREW_ROSTER, GORHAM_COLONY, MAY_OUTPOST, SHIP_STATUS,
};
use daututur::*;
use std::collections::{HashMap, VecDeque};
use std::fs;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq)]
enum Effect {
    Sound(String),
    Wait(f64),
    Instant(String),
    Slow(String, Option<f64>),
    Progress(String),
    Noise(f64),
    Clear,
    Read,
}

#[derive(Default)]
struct RecordingTerminal {
    effects: Vec<Effect>,
    input: VecDeque<String>,
}

impl RecordingTerminal {
    fn with_input(lines: &[&str]) -> Self {
        Self {
            effects: Vec::new(),
            input: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    fn count(&self, effect: &Effect) -> usize {
        self.effects.iter().filter(|e| *e == effect).count()
    }
}

impl Terminal for RecordingTerminal {
    fn play_sound(&mut self, name: &str) -> Result<(), TerminalError> {
        self.effects.push(Effect::Sound(name.to_string()));
        Ok(())
    }

    fn wait(&mut self, seconds: f64) {
        self.effects.push(Effect::Wait(seconds));
    }

    fn print_instant(&mut self, text: &str) -> Result<(), TerminalError> {
        self.effects.push(Effect::Instant(text.to_string()));
        Ok(())
    }

    fn print_slow(&mut self, text: &str, speed: Option<f64>) -> Result<(), TerminalError> {
        self.effects.push(Effect::Slow(text.to_string(), speed));
        Ok(())
    }

    fn print_progress_bar(&mut self, label: &str) -> Result<(), TerminalError> {
        self.effects.push(Effect::Progress(label.to_string()));
        Ok(())
    }

    fn print_noise_screen(&mut self, duration: f64) -> Result<(), TerminalError> {
        self.effects.push(Effect::Noise(duration));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), TerminalError> {
        self.effects.push(Effect::Clear);
        Ok(())
    }

    fn read_line(&mut self, _prompt: &str) -> Result<String, TerminalError> {
        self.effects.push(Effect::Read);
        self.input.pop_front().ok_or(TerminalError::InputClosed)
    }
}

// Records every call but fails every sound.
#[derive(Default)]
struct MutedTerminal {
    inner: RecordingTerminal,
}

impl Terminal for MutedTerminal {
    fn play_sound(&mut self, name: &str) -> Result<(), TerminalError> {
        self.inner.play_sound(name)?;
        Err(TerminalError::IO(std::io::Error::other("no audio device")))
    }

    fn wait(&mut self, seconds: f64) {
        self.inner.wait(seconds);
    }

    fn print_instant(&mut self, text: &str) -> Result<(), TerminalError> {
        self.inner.print_instant(text)
    }

    fn print_slow(&mut self, text: &str, speed: Option<f64>) -> Result<(), TerminalError> {
        self.inner.print_slow(text, speed)
    }

    fn print_progress_bar(&mut self, label: &str) -> Result<(), TerminalError> {
        self.inner.print_progress_bar(label)
    }

    fn print_noise_screen(&mut self, duration: f64) -> Result<(), TerminalError> {
        self.inner.print_noise_screen(duration)
    }

    fn clear(&mut self) -> Result<(), TerminalError> {
        self.inner.clear()
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, TerminalError> {
        self.inner.read_line(prompt)
    }
}

fn beep() -> Effect {
    Effect::Sound("beep".to_string())
}

fn plugin_with_assets() -> (tempfile::TempDir, Plugins) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("un_logo.txt"), "UN LOGO").expect("Failed to write logo");
    fs::write(dir.path().join("boot_text.txt"), "BOOT TEXT").expect("Failed to write boot text");
    let plugin = load_plugin("solovetsky", &AssetDir::new(dir.path())).expect("Expected a plugin");
    (dir, plugin)
}

fn config(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

// region:  --- Reply filter

#[test]
fn test_reply_without_trigger_is_untouched() {
    let (_dir, plugin) = plugin_with_assets();
    let mut terminal = RecordingTerminal::default();
    let reply = "ALL SYSTEMS NOMINAL. PRIORITY: LOW.".to_string();

    let filtered = plugin.filter_bot_reply(reply.clone(), &mut terminal);

    assert_eq!(filtered, reply);
    assert!(terminal.effects.is_empty());
}

#[test]
fn test_priority_alert_in_any_case() {
    let (_dir, plugin) = plugin_with_assets();
    let mut terminal = RecordingTerminal::default();
    let reply = "Priority Alert: hull breach on deck B".to_string();

    let filtered = plugin.filter_bot_reply(reply.clone(), &mut terminal);

    assert_eq!(filtered, reply);
    assert_eq!(
        terminal.effects,
        vec![beep(), Effect::Wait(0.5), beep(), Effect::Wait(0.5)]
    );
}

#[test]
fn test_distress_signal_pattern() {
    let (_dir, plugin) = plugin_with_assets();
    let mut terminal = RecordingTerminal::default();

    plugin.filter_bot_reply("receiving a distress signal".to_string(), &mut terminal);

    assert_eq!(
        terminal.effects,
        vec![beep(), Effect::Wait(0.3), beep(), Effect::Wait(0.3), beep()]
    );
}

#[test]
fn test_both_triggers_fire_priority_first() {
    let (_dir, plugin) = plugin_with_assets();
    let mut terminal = RecordingTerminal::default();
    let reply = "DISTRESS SIGNAL DETECTED. PRIORITY ALERT ISSUED.".to_string();

    let filtered = plugin.filter_bot_reply(reply.clone(), &mut terminal);

    assert_eq!(filtered, reply);
    assert_eq!(
        terminal.effects,
        vec![
            beep(),
            Effect::Wait(0.5),
            beep(),
            Effect::Wait(0.5),
            beep(),
            Effect::Wait(0.3),
            beep(),
            Effect::Wait(0.3),
            beep(),
        ]
    );
}

#[test]
fn test_failed_sounds_do_not_cut_reactions_short() {
    let (_dir, plugin) = plugin_with_assets();
    let mut terminal = MutedTerminal::default();
    let reply = "PRIORITY ALERT. DISTRESS SIGNAL.".to_string();

    let filtered = plugin.filter_bot_reply(reply.clone(), &mut terminal);

    assert_eq!(filtered, reply);
    assert_eq!(
        terminal.inner.effects,
        vec![
            beep(),
            Effect::Wait(0.5),
            beep(),
            Effect::Wait(0.5),
            beep(),
            Effect::Wait(0.3),
            beep(),
            Effect::Wait(0.3),
            beep(),
        ]
    );
}

// endregion:  --- Reply filter

// region:  --- Prompt augmentation

#[test]
fn test_empty_config_is_identity() {
    let (_dir, plugin) = plugin_with_assets();
    let prompt = "You are DA/UT/UR 2200.".to_string();
    assert_eq!(
        plugin.filter_plugin_prompt(prompt.clone(), &HashMap::<String, Value>::new()),
        prompt
    );
}

#[test]
fn test_falsy_values_add_nothing() {
    let (_dir, plugin) = plugin_with_assets();
    let config = config(&[
        ("low_fuel", json!(false)),
        ("current_location", json!("")),
        ("hull_damage", json!(0)),
        ("crew_on_surface", Value::Null),
    ]);
    assert_eq!(plugin.filter_plugin_prompt("BASE".to_string(), &config), "BASE");
}

#[test]
fn test_annotations_follow_rule_order() {
    let (_dir, plugin) = plugin_with_assets();
    // Insertion order of the map must not matter.
    let config = config(&[
        ("misc_prompt_addendums", json!("GM NOTE: the Iyanlá is silent.")),
        ("low_fuel", json!(true)),
        ("hull_damage", json!(72)),
        ("current_location", json!("Gorham orbit")),
        ("current_expedition", json!("HOME SWEET HOME")),
    ]);

    let augmented = plugin.filter_plugin_prompt("BASE".to_string(), &config);

    assert_eq!(
        augmented,
        "BASE\n\
         CURRENT EXPEDITION: HOME SWEET HOME\n\
         CURRENT LOCATION: Gorham orbit\n\
         ALERT: Hull has sustained damage. Current integrity: 72%\n\
         WARNING: Fuel reserves below recommended levels for FTL travel.\n\
         GM NOTE: the Iyanlá is silent."
    );
}

#[test]
fn test_augmentation_is_deterministic() {
    let (_dir, plugin) = plugin_with_assets();
    let config = config(&[
        ("crew_casualties", json!("Koblenz injured")),
        ("quarantine_active", json!(true)),
        ("iyanlá_contact_lost", json!(true)),
    ]);
    let first = plugin.filter_plugin_prompt("BASE".to_string(), &config);
    let second = plugin.filter_plugin_prompt("BASE".to_string(), &config);
    assert_eq!(first, second);
    assert!(first.starts_with("BASE\n"));
    assert!(first.contains("CREW STATUS UPDATE: Koblenz injured"));
    assert!(first.contains("FTL link to MU/TH/UR 9000 on UNCSS Iyanlá currently unavailable."));
}

#[test]
fn test_hostile_cooperative_masks_allied() {
    let (_dir, plugin) = plugin_with_assets();
    let both = config(&[
        ("cooperative_hostile", json!(true)),
        ("cooperative_allied", json!(true)),
    ]);
    let augmented = plugin.filter_plugin_prompt(String::new(), &both);
    assert!(augmented.contains("THREAT STATUS: The Cooperative has been designated hostile."));
    assert!(!augmented.contains("DIPLOMATIC STATUS"));
    assert_eq!(augmented.lines().filter(|l| !l.is_empty()).count(), 1);

    let allied = config(&[("cooperative_allied", json!(true))]);
    let augmented = plugin.filter_plugin_prompt(String::new(), &allied);
    assert!(augmented.contains("DIPLOMATIC STATUS"));
    assert!(!augmented.contains("THREAT STATUS"));
}

#[test]
fn test_every_rule_fires_once_when_all_flags_set() {
    let (_dir, plugin) = plugin_with_assets();
    let config: HashMap<String, Value> = ANNOTATION_RULES
        .iter()
        .map(|rule| (rule.key.to_string(), json!("X")))
        .collect();

    let augmented = plugin.filter_plugin_prompt("BASE".to_string(), &config);

    // The allied line is masked by the hostile one.
    let expected = [
        "BASE",
        "CURRENT EXPEDITION: X",
        "CURRENT LOCATION: X",
        "ALERT: Hull has sustained damage. Current integrity: X%",
        "WARNING: Fuel reserves below recommended levels for FTL travel.",
        "CREW STATUS UPDATE: X",
        "NOTE: Shore party currently deployed to planetary surface. Monitoring PDT signals.",
        "THREAT DATABASE UPDATED: Perfected/Fulfremmen bio-mechanical organisms confirmed hostile. Exercise extreme caution.",
        "ARTIFACT ANALYSIS: Engineer artifacts in storage. Decoding in progress.",
        "NAVIGATION UPDATE: Lychgate coordinates decoded and available.",
        "INTERNAL NOTE: Elevated tensions detected between UPP and UA personnel. Monitor situation.",
        "SECURITY ALERT: New Albion Protectorate sympathizers identified among crew.",
        "COMMUNICATION ALERT: FTL link to MU/TH/UR 9000 on UNCSS Iyanlá currently unavailable.",
        "QUARANTINE PROTOCOL ACTIVE: ICC Inspector Blatchman has ordered quarantine procedures. All specimens must be secured.",
        "THREAT STATUS: The Cooperative has been designated hostile. Warlord Zhangjie's forces may attempt interdiction.",
        "CONTACT: Gorham's Marauders identified. Captain J.V. Gorham III may be willing to share intelligence on Perfected movements.",
        "X",
    ]
    .join("\n");
    assert_eq!(augmented, expected);
}

#[test]
fn test_allied_line_text() {
    let (_dir, plugin) = plugin_with_assets();
    let config = config(&[("cooperative_allied", json!(true))]);
    assert_eq!(
        plugin.filter_plugin_prompt("BASE".to_string(), &config),
        "BASE\nDIPLOMATIC STATUS: The Cooperative has agreed to limited cooperation. Maintain caution."
    );
}

#[test]
fn test_non_string_addendum_is_rendered() {
    let (_dir, plugin) = plugin_with_assets();
    let config = config(&[("misc_prompt_addendums", json!(42))]);
    assert_eq!(
        plugin.filter_plugin_prompt("BASE".to_string(), &config),
        "BASE\n42"
    );
}

#[test]
fn test_config_store_reads_current_file() {
    let (_dir, plugin) = plugin_with_assets();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("game_state.json");
    let store = ConfigStore::new(&path);

    fs::write(&path, r#"{"low_fuel": true}"#).expect("Failed to write config");
    let first = plugin.filter_plugin_prompt("BASE".to_string(), &store.snapshot().unwrap());
    assert!(first.contains("WARNING: Fuel reserves"));

    fs::write(&path, r#"{"low_fuel": false, "napro_incident": true}"#)
        .expect("Failed to write config");
    let second = plugin.filter_plugin_prompt("BASE".to_string(), &store.snapshot().unwrap());
    assert!(!second.contains("WARNING: Fuel reserves"));
    assert!(second.contains("SECURITY ALERT: New Albion Protectorate"));
}

#[test]
fn test_half_written_config_degrades_to_last_good() {
    let (_dir, plugin) = plugin_with_assets();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("game_state.json");
    let mut store = ConfigStore::new(&path);

    // Nothing good read yet: no annotations at all.
    fs::write(&path, r#"{"low_fuel": tr"#).expect("Failed to write config");
    assert_eq!(
        plugin.filter_plugin_prompt("BASE".to_string(), store.refresh()),
        "BASE"
    );

    fs::write(&path, r#"{"napro_incident": true}"#).expect("Failed to write config");
    let good = plugin.filter_plugin_prompt("BASE".to_string(), store.refresh());
    assert!(good.contains("SECURITY ALERT"));

    fs::write(&path, r#"{"napro_incident": tru"#).expect("Failed to write config");
    assert_eq!(
        plugin.filter_plugin_prompt("BASE".to_string(), store.refresh()),
        good
    );
}

// endregion:  --- Prompt augmentation

// region:  --- Test replies

#[test]
fn test_canned_replies() {
    let (_dir, plugin) = plugin_with_assets();
    assert_eq!(plugin.get_test_reply("what is the ship status"), SHIP_STATUS);
    assert_eq!(plugin.get_test_reply("tell me about gorham"), GORHAM_COLONY);
    assert_eq!(plugin.get_test_reply("survey the colonies"), COLONY_DATABASE);
    assert_eq!(plugin.get_test_reply("CREW"), CREW_ROSTER);
    assert_eq!(plugin.get_test_reply("brief me on May Outpost"), MAY_OUTPOST);
    assert_eq!(plugin.get_test_reply("xyzzy"), "");
}

#[test]
fn test_generic_colony_query_precedes_named_colonies() {
    let (_dir, plugin) = plugin_with_assets();
    assert_eq!(plugin.get_test_reply("gorham colony"), COLONY_DATABASE);
    // "may" alone is not enough for the outpost briefing.
    assert_eq!(plugin.get_test_reply("may i"), "");
    // "status" is checked before anything else.
    assert_eq!(plugin.get_test_reply("crew status"), SHIP_STATUS);
}

// endregion:  --- Test replies

// region:  --- Boot sequence

#[test]
fn test_intro_reprompts_until_accepted() {
    let (_dir, plugin) = plugin_with_assets();
    let mut terminal = RecordingTerminal::with_input(&["n", "no", "y"]);

    plugin
        .play_intro(&mut terminal, &HashMap::<String, Value>::new())
        .expect("Expected the intro to finish");

    let banner = Effect::Instant(BANNER.to_string());
    assert_eq!(terminal.count(&banner), 3);
    assert_eq!(terminal.count(&Effect::Read), 3);
    // Two rejected cycles, then the accepted one.
    assert_eq!(
        terminal.effects[..9],
        [
            banner.clone(),
            Effect::Read,
            Effect::Clear,
            banner.clone(),
            Effect::Read,
            Effect::Clear,
            banner,
            Effect::Read,
            Effect::Clear,
        ]
    );
}

#[test]
fn test_intro_accepts_mixed_case_and_plays_sequence() {
    let (_dir, plugin) = plugin_with_assets();
    let mut terminal = RecordingTerminal::with_input(&["YES"]);
    let config = config(&[("intro_speed", json!(0.05))]);

    plugin
        .play_intro(&mut terminal, &config)
        .expect("Expected the intro to finish");

    let mut expected = vec![
        Effect::Instant(BANNER.to_string()),
        Effect::Read,
        Effect::Clear,
        Effect::Wait(0.5),
        beep(),
        Effect::Noise(1.5),
        Effect::Clear,
        Effect::Sound("boot".to_string()),
        Effect::Instant("UN LOGO".to_string()),
        Effect::Wait(2.0),
        Effect::Slow("BOOT TEXT".to_string(), Some(0.05)),
    ];
    expected.extend(
        PROGRESS_LABELS
            .iter()
            .map(|label| Effect::Progress(label.to_string())),
    );
    expected.extend([
        Effect::Slow(READY_MESSAGE.to_string(), None),
        Effect::Wait(1.5),
        Effect::Clear,
        Effect::Noise(0.3),
    ]);
    assert_eq!(terminal.effects, expected);
    assert!(terminal.input.is_empty());
}

#[test]
fn test_intro_rejects_padded_input() {
    let (_dir, plugin) = plugin_with_assets();
    let mut terminal = RecordingTerminal::with_input(&[" y", "y "]);

    let result = plugin.play_intro(&mut terminal, &HashMap::<String, Value>::new());

    assert!(matches!(
        result,
        Err(PluginError::Terminal(TerminalError::InputClosed))
    ));
    assert_eq!(terminal.count(&Effect::Read), 3);
    assert!(!terminal.effects.contains(&beep()));
}

#[test]
fn test_intro_fails_when_input_closes() {
    let (_dir, plugin) = plugin_with_assets();
    let mut terminal = RecordingTerminal::with_input(&["later"]);

    let result = plugin.play_intro(&mut terminal, &HashMap::<String, Value>::new());

    assert!(matches!(
        result,
        Err(PluginError::Terminal(TerminalError::InputClosed))
    ));
    assert!(!terminal.effects.contains(&beep()));
}

// endregion:  --- Boot sequence

// region:  --- Construction

#[test]
fn test_missing_asset_fails_construction() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("un_logo.txt"), "UN LOGO").expect("Failed to write logo");

    let result = load_plugin("solovetsky", &AssetDir::new(dir.path()));

    match result {
        Err(PluginError::AssetRead { key, .. }) => assert_eq!(key, "BOOT_TEXT"),
        other => panic!("Expected an asset read error, got {other:?}"),
    }
}

#[test]
fn test_unknown_plugin_name() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = load_plugin("nostromo", &AssetDir::new(dir.path()));
    assert!(matches!(result, Err(PluginError::UnknownPlugin(name)) if name == "nostromo"));
    assert_eq!(
        plugin::plugin_names().collect::<Vec<_>>(),
        vec![SolovetskyPlugin::NAME]
    );
}

#[test]
fn test_unknown_asset_key() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = AssetDir::new(dir.path()).ascii_path("SHIP_LOGO");
    assert!(matches!(result, Err(PluginError::UnknownAsset(_))));
}

#[test]
fn test_bundled_assets_cover_every_key() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let installed = install_bundled(dir.path()).expect("Failed to install assets");
    assert_eq!(installed.len(), AssetKey::iter().count());

    let assets = AssetDir::new(dir.path());
    for key in AssetKey::iter() {
        let path = assets.ascii_path(key.as_ref()).expect("Expected a path");
        assert!(path.exists(), "missing bundled asset {key}");
    }

    // Existing files are left alone.
    fs::write(dir.path().join("un_logo.txt"), "CUSTOM").expect("Failed to write logo");
    assert!(install_bundled(dir.path()).expect("Failed to reinstall").is_empty());
    let plugin = SolovetskyPlugin::new(&assets).expect("Expected a plugin");
    assert_eq!(plugin.logo(), "CUSTOM");
}

#[test]
fn test_settings_round_trip_with_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    assert_eq!(Settings::load(dir.path()).unwrap(), Settings::default());

    let settings = Settings {
        skip_intro: true,
        text_speed: 0.0,
        ..Settings::default()
    };
    settings.save(dir.path()).expect("Failed to save settings");
    assert_eq!(Settings::load(dir.path()).unwrap(), settings);

    fs::write(dir.path().join("settings.json"), r#"{"debug_mode": true}"#)
        .expect("Failed to write settings");
    let partial = Settings::load(dir.path()).unwrap();
    assert!(partial.debug_mode);
    assert_eq!(partial.plugin, "solovetsky");
}

// endregion:  --- Construction

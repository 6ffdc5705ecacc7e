use color_eyre::eyre::Result;
use daututur::assets::{AssetKey, install_bundled, load_text};
use daututur::audio::SoundBoard;
use daututur::{
    AssetDir, ConfigStore, CrosstermTerminal, Plugin, Settings, Terminal, load_plugin, logging,
};

const UNKNOWN_COMMAND: &str = "UNKNOWN COMMAND. STATE YOUR INQUIRY.";
const SHOW_PROMPT: &str = "/prompt";

fn main() -> Result<()> {
    color_eyre::install()?;

    let data_dir = Settings::data_dir()?;
    let settings = Settings::load(&data_dir)?;
    logging::init(&data_dir, settings.debug_mode)?;
    log::info!("Solovetsky session start: {}", chrono::Local::now());

    let assets = AssetDir::new(settings.assets_dir(&data_dir));
    install_bundled(assets.root())?;
    let base_prompt = load_text(&assets, AssetKey::Prompt.as_ref())?;

    let plugin = load_plugin(&settings.plugin, &assets)?;
    log::info!("Plugin ready: {}", plugin.name());
    let mut store = ConfigStore::new(settings.config_path(&data_dir));

    let sounds = settings
        .audio_output_enabled
        .then(|| SoundBoard::new(settings.sounds_dir(&data_dir)));
    let mut terminal = CrosstermTerminal::new(sounds).text_speed(settings.text_speed);

    if !settings.skip_intro {
        plugin.play_intro(&mut terminal, store.refresh())?;
    }

    loop {
        let input = match terminal.read_line(">>  ") {
            Ok(input) => input,
            Err(daututur::TerminalError::InputClosed) => break,
            Err(e) => return Err(e.into()),
        };
        let inquiry = input.trim();
        if inquiry.is_empty() {
            continue;
        }
        if matches!(inquiry.to_lowercase().as_str(), "exit" | "quit") {
            break;
        }

        // Snapshot per turn so game master edits land on the next inquiry.
        let config = store.refresh();
        let prompt = plugin.filter_plugin_prompt(base_prompt.clone(), config);
        log::debug!("Augmented prompt:\n{prompt}");
        if inquiry == SHOW_PROMPT {
            terminal.print_instant(&prompt)?;
            continue;
        }

        let mut reply = plugin.get_test_reply(inquiry);
        if reply.is_empty() {
            reply = UNKNOWN_COMMAND.to_string();
        }
        let reply = plugin.filter_bot_reply(reply, &mut terminal);
        terminal.print_slow(&reply, None)?;
    }

    log::info!("Solovetsky session end: {}", chrono::Local::now());
    Ok(())
}

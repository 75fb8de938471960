//! Night Bite demo driver
//!
//! Headless frontend: runs a seeded session in demo (auto-player) mode with a
//! console presentation, then walks the menu's quit path. Real frontends wire
//! their own `Presentation`/`AudioSink` impls to the controller.

use night_bite::consts::SIM_DT;
use night_bite::sim::{GamePhase, TargetKind, TickInput};
use night_bite::{
    AudioSink, GameConfig, MainMenu, MenuCommand, Presentation, ReactionGameController, SoundCue,
};

/// Presentation that prints the game's UI to stdout
#[derive(Default)]
struct ConsolePresentation {
    score: u32,
    lives: u8,
}

impl Presentation for ConsolePresentation {
    fn show_message(&mut self, text: &str) {
        if !text.is_empty() {
            println!("  [{:>3}pts {:>2}♥] {text}", self.score, self.lives);
        }
    }

    fn set_score_lives(&mut self, score: u32, lives: u8) {
        self.score = score;
        self.lives = lives;
    }

    fn set_target_visual(&mut self, target: Option<TargetKind>) {
        match target {
            Some(TargetKind::Victim) => println!("  >> a victim appears <<"),
            Some(TargetKind::Monster) => println!("  >> the orc appears <<"),
            None => {}
        }
    }

    fn show_instructions(&mut self, visible: bool) {
        if visible {
            println!("  (bite victims the moment they appear; never bite the orc)");
        }
    }

    fn show_game_over_overlay(&mut self, final_score: u32) {
        println!("  ==== GAME OVER - final score {final_score} ====");
    }

    fn set_overlay_alpha(&mut self, _alpha: f32) {}

    fn hide_game_over_overlay(&mut self) {}
}

struct ConsoleAudio;

impl AudioSink for ConsoleAudio {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("audio cue: {cue:?}");
    }
}

fn parse_args() -> (u64, GameConfig, f32) {
    let mut seed = 42;
    let mut config = GameConfig::default();
    let mut run_secs: f32 = 30.0;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                if let Some(v) = args.next().and_then(|v| v.parse().ok()) {
                    seed = v;
                }
            }
            "--config" => {
                if let Some(path) = args.next() {
                    match std::fs::read_to_string(&path)
                        .map_err(|e| e.to_string())
                        .and_then(|json| {
                            GameConfig::from_json(&json).map_err(|e| e.to_string())
                        }) {
                        Ok(parsed) => config = parsed,
                        Err(e) => log::warn!("ignoring config {path}: {e}"),
                    }
                }
            }
            "--seconds" => {
                if let Some(v) = args.next().and_then(|v| v.parse().ok()) {
                    run_secs = v;
                }
            }
            other => log::warn!("unknown argument {other}"),
        }
    }
    (seed, config, run_secs)
}

fn main() {
    env_logger::init();
    let (seed, config, run_secs) = parse_args();

    let mut controller =
        match ReactionGameController::new(config, seed, ConsolePresentation::default(), ConsoleAudio)
        {
            Ok(c) => c,
            Err(e) => {
                eprintln!("bad configuration: {e}");
                std::process::exit(1);
            }
        };

    println!("night-bite demo (seed {seed}, {run_secs}s)");
    let input = TickInput {
        bite: false,
        idle_mode: true,
    };
    let frames = (run_secs / SIM_DT) as u64;
    for _ in 0..frames {
        controller.tick_input(&input, SIM_DT);
        if controller.state().phase == GamePhase::GameOver {
            break;
        }
    }
    println!(
        "demo finished: score {}, lives {}",
        controller.state().score,
        controller.state().lives
    );

    // Quit through the menu, the way the hosted game would
    let mut menu = MainMenu::new();
    menu.press_quit(&mut ConsoleAudio);
    loop {
        match menu.tick(SIM_DT) {
            Some(MenuCommand::QuitApp) => break,
            Some(MenuCommand::LoadMainScene) => unreachable!("quit was pressed"),
            None => {}
        }
    }
}

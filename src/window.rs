mod libwindow;

use crate::libwindow::{
    buttons::ButtonStore,
    drawing::{draw_board, draw_buttons},
};
use clap::Parser;
use env_logger::Env;
use raylib::prelude::*;
use rpsls::{Action, Board, Choice, Config, GameError, MatchController, Opponent, RandomOpponent};

const PICK_KEYS: [KeyboardKey; 5] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
];

fn handle_input(draw_handle: &RaylibDrawHandle, bs: &ButtonStore) -> Option<Action> {
    if let Some(i) = PICK_KEYS.iter().position(|&k| draw_handle.is_key_pressed(k)) {
        return Some(Action::Pick(Choice::ALL[i]));
    }
    if draw_handle.is_key_pressed(KeyboardKey::KEY_R) {
        return Some(Action::Reset);
    }
    if !draw_handle.is_mouse_button_pressed(MouseButton::MOUSE_LEFT_BUTTON) {
        return None;
    }

    let tag = bs.hit(draw_handle.get_mouse_position())?;
    match tag.parse() {
        Ok(action) => Some(action),
        Err(e) => {
            log::error!("button tagged '{}' ignored: {}", tag, e);
            None
        }
    }
}

fn main_loop<O: Opponent>(
    handle: &mut RaylibHandle,
    thread: &RaylibThread,
    mut controller: MatchController<O>,
) {
    let bs = ButtonStore::new();
    let mut board = Board::new(controller.state(), Choice::name);

    while !handle.window_should_close() {
        let mut draw_handle = handle.begin_drawing(thread);
        draw_handle.clear_background(Color::WHITE);

        match handle_input(&draw_handle, &bs) {
            Some(Action::Pick(choice)) => {
                let round = controller.play_round(choice);
                board.show_round(&round, controller.state());
            }
            Some(Action::Reset) => {
                controller.reset_match();
                board.reset(controller.state());
            }
            Some(Action::Quit) | None => (),
        }

        let mouse = draw_handle.get_mouse_position();
        draw_board(&mut draw_handle, &board);
        draw_buttons(&mut draw_handle, &bs, mouse);
    }
}

fn main() -> Result<(), GameError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    set_trace_log(TraceLogLevel::LOG_FATAL);
    let (mut handle, thread) = raylib::init()
        .size(640, 480)
        .title("Rock Paper Scissors Lizard Spock")
        .build();
    handle.set_target_fps(60);

    match config.seed {
        Some(seed) => main_loop(
            &mut handle,
            &thread,
            MatchController::new(config.target, RandomOpponent::seeded(seed))?,
        ),
        None => main_loop(
            &mut handle,
            &thread,
            MatchController::new(config.target, RandomOpponent::new())?,
        ),
    }

    log::info!("window closed");
    Ok(())
}
